// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Target detection facade

use crate::connection::{ConnectionHandle, StubConnector};
use crate::envelope::complete;
use crate::error::{ClientError, Result};
use crate::grpc::{GrpcChannel, GrpcConnector};
use crate::models::{BoundingBox, DetectionResult, ModelState};
use crate::proto::target_detection::{
    CheckModelStateRequest, CheckModelStateResponse, GetResultIndexByImageIdRequest,
    GetResultIndexByImageIdResponse, GetResultMappingTableRequest, GetResultMappingTableResponse,
    LoadModelRequest, LoadModelResponse, ResultIndex,
};
use crate::session::{resolve_label, LabelMapping, SessionId};
use std::sync::Arc;
use tonic::Status;
use tracing::{debug, info};

const GET_RESULT_MAPPING_TABLE: &str = "/targetDetection.Communicate/getResultMappingTable";
const GET_RESULT_INDEX_BY_IMAGE_ID: &str = "/targetDetection.Communicate/getResultIndexByImageId";
const LOAD_MODEL: &str = "/targetDetection.Communicate/loadModel";
const CHECK_MODEL_STATE: &str = "/targetDetection.Communicate/checkModelState";

/// Operations of the `targetDetection.Communicate` service
pub trait TargetDetectionStub: Send + Sync {
    fn get_result_mapping_table(
        &self,
        request: GetResultMappingTableRequest,
    ) -> std::result::Result<GetResultMappingTableResponse, Status>;

    fn get_result_index_by_image_id(
        &self,
        request: GetResultIndexByImageIdRequest,
    ) -> std::result::Result<GetResultIndexByImageIdResponse, Status>;

    fn load_model(&self, request: LoadModelRequest)
        -> std::result::Result<LoadModelResponse, Status>;

    fn check_model_state(
        &self,
        request: CheckModelStateRequest,
    ) -> std::result::Result<CheckModelStateResponse, Status>;
}

#[derive(Debug, Clone)]
pub struct GrpcTargetDetectionStub(GrpcChannel);

impl From<GrpcChannel> for GrpcTargetDetectionStub {
    fn from(channel: GrpcChannel) -> Self {
        Self(channel)
    }
}

impl TargetDetectionStub for GrpcTargetDetectionStub {
    fn get_result_mapping_table(
        &self,
        request: GetResultMappingTableRequest,
    ) -> std::result::Result<GetResultMappingTableResponse, Status> {
        self.0.unary(GET_RESULT_MAPPING_TABLE, request)
    }

    fn get_result_index_by_image_id(
        &self,
        request: GetResultIndexByImageIdRequest,
    ) -> std::result::Result<GetResultIndexByImageIdResponse, Status> {
        self.0.unary(GET_RESULT_INDEX_BY_IMAGE_ID, request)
    }

    fn load_model(
        &self,
        request: LoadModelRequest,
    ) -> std::result::Result<LoadModelResponse, Status> {
        self.0.unary(LOAD_MODEL, request)
    }

    fn check_model_state(
        &self,
        request: CheckModelStateRequest,
    ) -> std::result::Result<CheckModelStateResponse, Status> {
        self.0.unary(CHECK_MODEL_STATE, request)
    }
}

fn translate_results(labels: &[String], results: Vec<ResultIndex>) -> Vec<DetectionResult> {
    results
        .into_iter()
        .map(|result| DetectionResult {
            label: resolve_label(labels, result.label_id),
            confidence: result.confidence,
            bbox: BoundingBox::new(result.x1, result.y1, result.x2, result.y2),
        })
        .collect()
}

/// Client for the target detection service.
///
/// The service reports class indices; [`get_mapping_table`](Self::get_mapping_table)
/// must populate the label table before results can be fetched.
pub struct TargetDetectionClient<C = GrpcConnector<GrpcTargetDetectionStub>>
where
    C: StubConnector,
{
    connection: ConnectionHandle<C>,
    task_id: SessionId,
    labels: LabelMapping,
}

facade_common!(TargetDetectionClient, TargetDetectionStub, task_id);

impl<C> TargetDetectionClient<C>
where
    C: StubConnector,
    C::Stub: TargetDetectionStub,
{
    pub fn with_connector(connector: C) -> Self {
        Self {
            connection: ConnectionHandle::new("DETECTION", connector),
            task_id: SessionId::new(),
            labels: LabelMapping::new(),
        }
    }

    /// Current label table snapshot
    pub fn label_mapping(&self) -> Arc<[String]> {
        self.labels.snapshot()
    }

    /// Fetch the label table for the current task and return its length
    pub fn get_mapping_table(&self) -> Result<usize> {
        let handle = self.connection.acquire()?;
        let task_id = self.task_id.require("task id")?;
        let response = complete(
            "getResultMappingTable",
            handle
                .stub()
                .get_result_mapping_table(GetResultMappingTableRequest { task_id }),
        )?;

        let count = self.labels.replace(response.labels);
        debug!("[DETECTION] mapping table loaded with {} labels", count);
        Ok(count)
    }

    /// Detections for one image. Waits on the service until results exist.
    pub fn get_result_by_image_id(&self, image_id: i64) -> Result<Vec<DetectionResult>> {
        let handle = self.connection.acquire()?;
        let task_id = self.task_id.require("task id")?;
        let labels = self.labels.snapshot();
        if labels.is_empty() {
            return Err(ClientError::EmptyLabelMapping);
        }

        let request = GetResultIndexByImageIdRequest {
            task_id,
            image_id,
            wait: true,
        };
        let response = complete(
            "getResultIndexByImageId",
            handle.stub().get_result_index_by_image_id(request),
        )?;
        Ok(translate_results(&labels, response.results))
    }

    /// Ask the service to load the model of `task_id`
    pub fn load_model(&self, task_id: i64) -> Result<()> {
        let handle = self.connection.acquire()?;
        complete(
            "loadModel",
            handle.stub().load_model(LoadModelRequest { task_id }),
        )?;
        info!("[DETECTION] model load requested for task {}", task_id);
        Ok(())
    }

    pub fn check_model_state(&self, task_id: i64) -> Result<ModelState> {
        let handle = self.connection.acquire()?;
        let response = complete(
            "checkModelState",
            handle
                .stub()
                .check_model_state(CheckModelStateRequest { task_id }),
        )?;
        Ok(ModelState::from_wire(response.model_state))
    }
}
