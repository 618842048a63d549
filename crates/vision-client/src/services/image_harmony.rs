// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Image harmony (image retrieval) facade

use crate::connection::{ConnectionHandle, StubConnector};
use crate::decode::{FrameDecoder, ImageCrateDecoder};
use crate::envelope::complete;
use crate::error::{ClientError, Result};
use crate::grpc::{GrpcChannel, GrpcConnector};
use crate::models::{DecodedImage, ImageInfo, ImageSize};
use crate::proto::image_harmony::{
    ConnectImageLoaderRequest, ConnectImageLoaderResponse, DisconnectImageLoaderRequest,
    DisconnectImageLoaderResponse, GetImageByImageIdRequest, GetImageByImageIdResponse,
    ImageRequest, ImageResponse,
};
use crate::session::SessionId;
use tonic::Status;
use tracing::{debug, warn};

const CONNECT_IMAGE_LOADER: &str = "/imageHarmony.Communicate/connectImageLoader";
const DISCONNECT_IMAGE_LOADER: &str = "/imageHarmony.Communicate/disconnectImageLoader";
const GET_IMAGE_BY_IMAGE_ID: &str = "/imageHarmony.Communicate/getImageByImageId";

/// Encoder parameter id for JPEG quality (OpenCV `IMWRITE_JPEG_QUALITY`)
pub const JPEG_QUALITY_PARAM: i32 = 1;

/// Operations of the `imageHarmony.Communicate` service
pub trait ImageHarmonyStub: Send + Sync {
    fn connect_image_loader(
        &self,
        request: ConnectImageLoaderRequest,
    ) -> std::result::Result<ConnectImageLoaderResponse, Status>;

    fn disconnect_image_loader(
        &self,
        request: DisconnectImageLoaderRequest,
    ) -> std::result::Result<DisconnectImageLoaderResponse, Status>;

    fn get_image_by_image_id(
        &self,
        request: GetImageByImageIdRequest,
    ) -> std::result::Result<GetImageByImageIdResponse, Status>;
}

#[derive(Debug, Clone)]
pub struct GrpcImageHarmonyStub(GrpcChannel);

impl From<GrpcChannel> for GrpcImageHarmonyStub {
    fn from(channel: GrpcChannel) -> Self {
        Self(channel)
    }
}

impl ImageHarmonyStub for GrpcImageHarmonyStub {
    fn connect_image_loader(
        &self,
        request: ConnectImageLoaderRequest,
    ) -> std::result::Result<ConnectImageLoaderResponse, Status> {
        self.0.unary(CONNECT_IMAGE_LOADER, request)
    }

    fn disconnect_image_loader(
        &self,
        request: DisconnectImageLoaderRequest,
    ) -> std::result::Result<DisconnectImageLoaderResponse, Status> {
        self.0.unary(DISCONNECT_IMAGE_LOADER, request)
    }

    fn get_image_by_image_id(
        &self,
        request: GetImageByImageIdRequest,
    ) -> std::result::Result<GetImageByImageIdResponse, Status> {
        self.0.unary(GET_IMAGE_BY_IMAGE_ID, request)
    }
}

/// Full fetch: encoded buffer in the requested format and quality
fn image_request(info: &ImageInfo) -> ImageRequest {
    ImageRequest {
        image_id: info.image_id,
        format: info.format.clone(),
        params: vec![JPEG_QUALITY_PARAM, info.quality],
        expected_w: info.width,
        expected_h: info.height,
        no_image_buffer: false,
    }
}

/// Size-only fetch: no buffer is transferred
fn size_request(info: &ImageInfo) -> ImageRequest {
    ImageRequest {
        image_id: info.image_id,
        expected_w: info.width,
        expected_h: info.height,
        no_image_buffer: true,
        ..Default::default()
    }
}

/// The image block of a successful response, rejecting a zero image id
fn returned_image(operation: &'static str, response: GetImageByImageIdResponse) -> Result<ImageResponse> {
    let image = response.image_response.unwrap_or_default();
    if image.image_id == 0 {
        warn!("[IMAGE] {} returned image id 0", operation);
        return Err(ClientError::ZeroId {
            operation,
            field: "image id",
        });
    }
    Ok(image)
}

/// Client for the image harmony service.
///
/// A loader connection must be opened with
/// [`connect_image_loader`](Self::connect_image_loader) before images can be
/// fetched; the service allocates the connection id.
pub struct ImageHarmonyClient<C = GrpcConnector<GrpcImageHarmonyStub>>
where
    C: StubConnector,
{
    connection: ConnectionHandle<C>,
    connection_id: SessionId,
    decoder: Box<dyn FrameDecoder>,
}

facade_common!(ImageHarmonyClient, ImageHarmonyStub);

impl<C> ImageHarmonyClient<C>
where
    C: StubConnector,
    C::Stub: ImageHarmonyStub,
{
    pub fn with_connector(connector: C) -> Self {
        Self {
            connection: ConnectionHandle::new("IMAGE", connector),
            connection_id: SessionId::new(),
            decoder: Box::new(ImageCrateDecoder),
        }
    }

    /// Replace the decoder used by [`get_image_by_image_id`](Self::get_image_by_image_id)
    pub fn with_decoder(mut self, decoder: impl FrameDecoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    pub fn connection_id(&self) -> Option<i64> {
        self.connection_id.get()
    }

    /// Open a loader connection and return the allocated connection id.
    ///
    /// A zero id from the service is stored (so the connection reads as
    /// unset) and reported as failure.
    pub fn connect_image_loader(&self, loader_args_hash: i64) -> Result<i64> {
        let handle = self.connection.acquire()?;
        let response = complete(
            "connectImageLoader",
            handle
                .stub()
                .connect_image_loader(ConnectImageLoaderRequest { loader_args_hash }),
        )?;

        let connection_id = response.connection_id;
        self.connection_id.set(connection_id);
        if connection_id == 0 {
            warn!("[IMAGE] connectImageLoader returned connection id 0");
            return Err(ClientError::ZeroId {
                operation: "connectImageLoader",
                field: "connection id",
            });
        }
        debug!("[IMAGE] loader connected with connection id {}", connection_id);
        Ok(connection_id)
    }

    /// Close the loader connection. Without an open connection this is a no-op.
    pub fn disconnect_image_loader(&self) -> Result<()> {
        self.connection.ensure_active()?;
        let Some(connection_id) = self.connection_id.get() else {
            return Ok(());
        };
        let handle = self.connection.acquire()?;
        complete(
            "disconnectImageLoader",
            handle
                .stub()
                .disconnect_image_loader(DisconnectImageLoaderRequest { connection_id }),
        )?;
        self.connection_id.clear();
        debug!("[IMAGE] loader connection {} closed", connection_id);
        Ok(())
    }

    /// Fetch and decode one image
    pub fn get_image_by_image_id(&self, info: &ImageInfo) -> Result<DecodedImage> {
        let handle = self.connection.acquire()?;
        let connection_id = self.connection_id.require("connection id")?;
        let request = GetImageByImageIdRequest {
            connection_id,
            image_request: Some(image_request(info)),
        };
        let response = complete(
            "getImageByImageId",
            handle.stub().get_image_by_image_id(request),
        )?;

        let image = returned_image("getImageByImageId", response)?;
        let frame = self
            .decoder
            .decode(&image.buffer)
            .map_err(|reason| {
                warn!("[IMAGE] image {} could not be decoded: {}", image.image_id, reason);
                ClientError::ImageDecode {
                    image_id: image.image_id,
                    reason,
                }
            })?;
        Ok(DecodedImage {
            image_id: image.image_id,
            frame,
        })
    }

    /// Dimensions of one image without transferring its pixels
    pub fn get_image_size(&self, info: &ImageInfo) -> Result<ImageSize> {
        let handle = self.connection.acquire()?;
        let connection_id = self.connection_id.require("connection id")?;
        let request = GetImageByImageIdRequest {
            connection_id,
            image_request: Some(size_request(info)),
        };
        let response = complete("getImageSize", handle.stub().get_image_by_image_id(request))?;

        let image = returned_image("getImageSize", response)?;
        Ok(ImageSize {
            image_id: image.image_id,
            width: image.width,
            height: image.height,
        })
    }
}
