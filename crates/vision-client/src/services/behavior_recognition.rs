// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Behavior recognition facade

use crate::connection::{ConnectionHandle, StubConnector};
use crate::envelope::complete;
use crate::error::Result;
use crate::grpc::{GrpcChannel, GrpcConnector};
use crate::models::{BehaviorResult, BoundingBox, LabelConfidence};
use crate::proto::behavior_recognition::{
    GetLatestResultRequest, GetLatestResultResponse, GetResultByImageIdRequest,
    GetResultByImageIdResponse, InformImageIdRequest, InformImageIdResponse, ResultInfo,
};
use crate::session::SessionId;
use tonic::Status;

const INFORM_IMAGE_ID: &str = "/behaviorRecognition.Communicate/informImageId";
const GET_RESULT_BY_IMAGE_ID: &str = "/behaviorRecognition.Communicate/getResultByImageId";
const GET_LATEST_RESULT: &str = "/behaviorRecognition.Communicate/getLatestResult";

/// Operations of the `behaviorRecognition.Communicate` service
pub trait BehaviorRecognitionStub: Send + Sync {
    fn inform_image_id(
        &self,
        request: InformImageIdRequest,
    ) -> std::result::Result<InformImageIdResponse, Status>;

    fn get_result_by_image_id(
        &self,
        request: GetResultByImageIdRequest,
    ) -> std::result::Result<GetResultByImageIdResponse, Status>;

    fn get_latest_result(
        &self,
        request: GetLatestResultRequest,
    ) -> std::result::Result<GetLatestResultResponse, Status>;
}

#[derive(Debug, Clone)]
pub struct GrpcBehaviorRecognitionStub(GrpcChannel);

impl From<GrpcChannel> for GrpcBehaviorRecognitionStub {
    fn from(channel: GrpcChannel) -> Self {
        Self(channel)
    }
}

impl BehaviorRecognitionStub for GrpcBehaviorRecognitionStub {
    fn inform_image_id(
        &self,
        request: InformImageIdRequest,
    ) -> std::result::Result<InformImageIdResponse, Status> {
        self.0.unary(INFORM_IMAGE_ID, request)
    }

    fn get_result_by_image_id(
        &self,
        request: GetResultByImageIdRequest,
    ) -> std::result::Result<GetResultByImageIdResponse, Status> {
        self.0.unary(GET_RESULT_BY_IMAGE_ID, request)
    }

    fn get_latest_result(
        &self,
        request: GetLatestResultRequest,
    ) -> std::result::Result<GetLatestResultResponse, Status> {
        self.0.unary(GET_LATEST_RESULT, request)
    }
}

fn translate_results(results: Vec<ResultInfo>) -> Vec<BehaviorResult> {
    results
        .into_iter()
        .map(|result| BehaviorResult {
            person_id: result.person_id,
            bbox: BoundingBox::new(result.x1, result.y1, result.x2, result.y2),
            labels: result
                .label_infos
                .into_iter()
                .map(|info| LabelConfidence {
                    label: info.label,
                    confidence: info.confidence,
                })
                .collect(),
        })
        .collect()
}

/// Client for the behavior recognition service.
///
/// Results are keyed by the task id set with [`set_task_id`](Self::set_task_id).
///
/// # Example
/// ```ignore
/// use vision_client::BehaviorRecognitionClient;
///
/// let client = BehaviorRecognitionClient::new()?;
/// client.set_address("127.0.0.1", 50051)?;
/// client.set_task_id(7)?;
///
/// client.inform_image_id(1001)?;
/// for person in client.get_result_by_image_id(1001)? {
///     println!("{} -> {:?}", person.person_id, person.labels);
/// }
/// ```
pub struct BehaviorRecognitionClient<C = GrpcConnector<GrpcBehaviorRecognitionStub>>
where
    C: StubConnector,
{
    connection: ConnectionHandle<C>,
    task_id: SessionId,
}

facade_common!(BehaviorRecognitionClient, BehaviorRecognitionStub, task_id);

impl<C> BehaviorRecognitionClient<C>
where
    C: StubConnector,
    C::Stub: BehaviorRecognitionStub,
{
    pub fn with_connector(connector: C) -> Self {
        Self {
            connection: ConnectionHandle::new("BEHAVIOR", connector),
            task_id: SessionId::new(),
        }
    }

    /// Tell the service a new image is ready for analysis under the current task
    pub fn inform_image_id(&self, image_id: i64) -> Result<()> {
        let handle = self.connection.acquire()?;
        let task_id = self.task_id.require("task id")?;
        let request = InformImageIdRequest { task_id, image_id };
        complete("informImageId", handle.stub().inform_image_id(request))?;
        Ok(())
    }

    /// Per-person behavior labels for one image, in service order
    pub fn get_result_by_image_id(&self, image_id: i64) -> Result<Vec<BehaviorResult>> {
        let handle = self.connection.acquire()?;
        let task_id = self.task_id.require("task id")?;
        let request = GetResultByImageIdRequest { task_id, image_id };
        let response = complete(
            "getResultByImageId",
            handle.stub().get_result_by_image_id(request),
        )?;
        Ok(translate_results(response.results))
    }

    /// Most recent results of the current task
    pub fn get_latest_result(&self) -> Result<Vec<BehaviorResult>> {
        let handle = self.connection.acquire()?;
        let task_id = self.task_id.require("task id")?;
        let response = complete(
            "getLatestResult",
            handle.stub().get_latest_result(GetLatestResultRequest { task_id }),
        )?;
        Ok(translate_results(response.results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::behavior_recognition::LabelInfo;

    fn label(label: &str, confidence: f64) -> LabelInfo {
        LabelInfo {
            label: label.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_translate_preserves_order_and_fields() {
        let wire = vec![
            ResultInfo {
                label_infos: vec![label("walking", 0.9), label("running", 0.1)],
                person_id: 3,
                x1: 1.0,
                y1: 2.0,
                x2: 3.0,
                y2: 4.0,
            },
            ResultInfo {
                label_infos: vec![],
                person_id: 8,
                x1: 5.0,
                y1: 6.0,
                x2: 7.0,
                y2: 8.0,
            },
        ];

        let results = translate_results(wire);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].person_id, 3);
        assert_eq!(results[0].bbox, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            results[0].labels,
            vec![
                LabelConfidence {
                    label: "walking".to_string(),
                    confidence: 0.9
                },
                LabelConfidence {
                    label: "running".to_string(),
                    confidence: 0.1
                },
            ]
        );
        assert_eq!(results[1].person_id, 8);
        assert!(results[1].labels.is_empty());
    }

    #[test]
    fn test_translate_empty() {
        assert!(translate_results(Vec::new()).is_empty());
    }
}
