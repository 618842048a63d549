// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CustomResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LabelInfo {
    #[prost(string, tag = "1")]
    pub label: ::prost::alloc::string::String,
    #[prost(double, tag = "2")]
    pub confidence: f64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResultInfo {
    #[prost(message, repeated, tag = "1")]
    pub label_infos: ::prost::alloc::vec::Vec<LabelInfo>,
    #[prost(uint32, tag = "2")]
    pub person_id: u32,
    #[prost(double, tag = "3")]
    pub x1: f64,
    #[prost(double, tag = "4")]
    pub y1: f64,
    #[prost(double, tag = "5")]
    pub x2: f64,
    #[prost(double, tag = "6")]
    pub y2: f64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InformImageIdRequest {
    #[prost(int64, tag = "1")]
    pub task_id: i64,
    #[prost(int64, tag = "2")]
    pub image_id: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InformImageIdResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<CustomResponse>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetResultByImageIdRequest {
    #[prost(int64, tag = "1")]
    pub task_id: i64,
    #[prost(int64, tag = "2")]
    pub image_id: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetResultByImageIdResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<CustomResponse>,
    #[prost(message, repeated, tag = "2")]
    pub results: ::prost::alloc::vec::Vec<ResultInfo>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLatestResultRequest {
    #[prost(int64, tag = "1")]
    pub task_id: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLatestResultResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<CustomResponse>,
    #[prost(message, repeated, tag = "2")]
    pub results: ::prost::alloc::vec::Vec<ResultInfo>,
}
