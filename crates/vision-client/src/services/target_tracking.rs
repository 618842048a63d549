// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Target tracking facade

use crate::connection::{ConnectionHandle, StubConnector};
use crate::envelope::complete;
use crate::error::Result;
use crate::grpc::{GrpcChannel, GrpcConnector};
use crate::models::{BoundingBox, TrackingResult};
use crate::proto::target_tracking::{
    GetResultByImageIdRequest, GetResultByImageIdResponse, TrackResult,
};
use crate::session::SessionId;
use tonic::Status;

const GET_RESULT_BY_IMAGE_ID: &str = "/targetTracking.Communicate/getResultByImageId";

/// Operations of the `targetTracking.Communicate` service
pub trait TargetTrackingStub: Send + Sync {
    fn get_result_by_image_id(
        &self,
        request: GetResultByImageIdRequest,
    ) -> std::result::Result<GetResultByImageIdResponse, Status>;
}

#[derive(Debug, Clone)]
pub struct GrpcTargetTrackingStub(GrpcChannel);

impl From<GrpcChannel> for GrpcTargetTrackingStub {
    fn from(channel: GrpcChannel) -> Self {
        Self(channel)
    }
}

impl TargetTrackingStub for GrpcTargetTrackingStub {
    fn get_result_by_image_id(
        &self,
        request: GetResultByImageIdRequest,
    ) -> std::result::Result<GetResultByImageIdResponse, Status> {
        self.0.unary(GET_RESULT_BY_IMAGE_ID, request)
    }
}

fn translate_results(results: Vec<TrackResult>) -> Vec<TrackingResult> {
    results
        .into_iter()
        .map(|track| TrackingResult {
            id: track.id,
            bboxes: track
                .bboxs
                .into_iter()
                .map(|b| BoundingBox::new(b.x1, b.y1, b.x2, b.y2))
                .collect(),
        })
        .collect()
}

/// Client for the target tracking service
pub struct TargetTrackingClient<C = GrpcConnector<GrpcTargetTrackingStub>>
where
    C: StubConnector,
{
    connection: ConnectionHandle<C>,
    task_id: SessionId,
}

facade_common!(TargetTrackingClient, TargetTrackingStub, task_id);

impl<C> TargetTrackingClient<C>
where
    C: StubConnector,
    C::Stub: TargetTrackingStub,
{
    pub fn with_connector(connector: C) -> Self {
        Self {
            connection: ConnectionHandle::new("TRACKING", connector),
            task_id: SessionId::new(),
        }
    }

    /// Every track touching the image, each with its full box history
    pub fn get_result_by_image_id(&self, image_id: i64) -> Result<Vec<TrackingResult>> {
        let handle = self.connection.acquire()?;
        let task_id = self.task_id.require("task id")?;
        let request = GetResultByImageIdRequest {
            task_id,
            image_id,
            wait: true,
            only_the_latest: false,
        };
        let response = complete(
            "getResultByImageId",
            handle.stub().get_result_by_image_id(request),
        )?;
        Ok(translate_results(response.results))
    }
}
