// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CustomResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct BoundingBox {
    #[prost(double, tag = "1")]
    pub x1: f64,
    #[prost(double, tag = "2")]
    pub y1: f64,
    #[prost(double, tag = "3")]
    pub x2: f64,
    #[prost(double, tag = "4")]
    pub y2: f64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TrackResult {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(message, repeated, tag = "2")]
    pub bboxs: ::prost::alloc::vec::Vec<BoundingBox>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetResultByImageIdRequest {
    #[prost(int64, tag = "1")]
    pub task_id: i64,
    #[prost(int64, tag = "2")]
    pub image_id: i64,
    #[prost(bool, tag = "3")]
    pub wait: bool,
    #[prost(bool, tag = "4")]
    pub only_the_latest: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetResultByImageIdResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<CustomResponse>,
    #[prost(message, repeated, tag = "2")]
    pub results: ::prost::alloc::vec::Vec<TrackResult>,
}
