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
pub struct GetResultMappingTableRequest {
    #[prost(int64, tag = "1")]
    pub task_id: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetResultMappingTableResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<CustomResponse>,
    #[prost(string, repeated, tag = "2")]
    pub labels: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResultIndex {
    #[prost(int32, tag = "1")]
    pub label_id: i32,
    #[prost(double, tag = "2")]
    pub confidence: f64,
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
pub struct GetResultIndexByImageIdRequest {
    #[prost(int64, tag = "1")]
    pub task_id: i64,
    #[prost(int64, tag = "2")]
    pub image_id: i64,
    #[prost(bool, tag = "3")]
    pub wait: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetResultIndexByImageIdResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<CustomResponse>,
    #[prost(message, repeated, tag = "2")]
    pub results: ::prost::alloc::vec::Vec<ResultIndex>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadModelRequest {
    #[prost(int64, tag = "1")]
    pub task_id: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadModelResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<CustomResponse>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckModelStateRequest {
    #[prost(int64, tag = "1")]
    pub task_id: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckModelStateResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<CustomResponse>,
    #[prost(enumeration = "ModelState", tag = "2")]
    pub model_state: i32,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ModelState {
    NotSet = 0,
    Loading = 1,
    Loaded = 2,
    LoadFailed = 3,
}
impl ModelState {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::NotSet => "NotSet",
            Self::Loading => "Loading",
            Self::Loaded => "Loaded",
            Self::LoadFailed => "LoadFailed",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "NotSet" => Some(Self::NotSet),
            "Loading" => Some(Self::Loading),
            "Loaded" => Some(Self::Loaded),
            "LoadFailed" => Some(Self::LoadFailed),
            _ => None,
        }
    }
}
