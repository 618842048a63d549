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
pub struct ConnectImageLoaderRequest {
    #[prost(int64, tag = "1")]
    pub loader_args_hash: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConnectImageLoaderResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<CustomResponse>,
    #[prost(int64, tag = "2")]
    pub connection_id: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DisconnectImageLoaderRequest {
    #[prost(int64, tag = "1")]
    pub connection_id: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DisconnectImageLoaderResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<CustomResponse>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImageRequest {
    #[prost(int64, tag = "1")]
    pub image_id: i64,
    #[prost(string, tag = "2")]
    pub format: ::prost::alloc::string::String,
    #[prost(int32, repeated, tag = "3")]
    pub params: ::prost::alloc::vec::Vec<i32>,
    #[prost(int32, tag = "4")]
    pub expected_w: i32,
    #[prost(int32, tag = "5")]
    pub expected_h: i32,
    #[prost(bool, tag = "6")]
    pub no_image_buffer: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImageResponse {
    #[prost(int64, tag = "1")]
    pub image_id: i64,
    #[prost(bytes = "vec", tag = "2")]
    pub buffer: ::prost::alloc::vec::Vec<u8>,
    #[prost(int32, tag = "3")]
    pub width: i32,
    #[prost(int32, tag = "4")]
    pub height: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetImageByImageIdRequest {
    #[prost(int64, tag = "1")]
    pub connection_id: i64,
    #[prost(message, optional, tag = "2")]
    pub image_request: ::core::option::Option<ImageRequest>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetImageByImageIdResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<CustomResponse>,
    #[prost(message, optional, tag = "2")]
    pub image_response: ::core::option::Option<ImageResponse>,
}
