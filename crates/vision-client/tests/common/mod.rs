//! In-process service stubs for facade tests.
//!
//! Each mock records the requests it receives (so tests can assert how many
//! round trips happened and with which fields) and answers with whatever
//! the test configured.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tonic::{Code, Status};
use vision_client::proto::{behavior_recognition, image_harmony, target_detection, target_tracking};
use vision_client::{
    BehaviorRecognitionStub, Endpoint, ImageHarmonyStub, StubConnector, TargetDetectionStub,
    TargetTrackingStub,
};

/// Hands out clones of one mock stub and records every endpoint it was asked for
pub struct MockConnector<S> {
    stub: S,
    endpoints: Arc<Mutex<Vec<Endpoint>>>,
}

impl<S: Clone> MockConnector<S> {
    pub fn new(stub: S) -> Self {
        Self {
            stub,
            endpoints: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn endpoints(&self) -> Arc<Mutex<Vec<Endpoint>>> {
        Arc::clone(&self.endpoints)
    }
}

impl<S: Clone + Send + Sync + 'static> StubConnector for MockConnector<S> {
    type Stub = S;

    fn connect(&self, endpoint: &Endpoint) -> vision_client::Result<S> {
        self.endpoints.lock().push(endpoint.clone());
        Ok(self.stub.clone())
    }
}

/// How the mock answers: envelope code/message, optional transport failure, delay
#[derive(Debug, Clone)]
pub struct Reply {
    pub code: i32,
    pub message: String,
    pub transport: Option<(Code, String)>,
    pub delay: Duration,
}

impl Default for Reply {
    fn default() -> Self {
        Self {
            code: 200,
            message: String::new(),
            transport: None,
            delay: Duration::ZERO,
        }
    }
}

impl Reply {
    fn status(&self) -> Result<(), Status> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        match &self.transport {
            Some((code, message)) => Err(Status::new(*code, message.clone())),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Behavior recognition
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct BehaviorState {
    pub reply: Reply,
    pub results: Vec<behavior_recognition::ResultInfo>,
    pub informed: Vec<behavior_recognition::InformImageIdRequest>,
    pub queried: Vec<behavior_recognition::GetResultByImageIdRequest>,
    pub latest: Vec<behavior_recognition::GetLatestResultRequest>,
}

impl BehaviorState {
    pub fn round_trips(&self) -> usize {
        self.informed.len() + self.queried.len() + self.latest.len()
    }

    fn envelope(&self) -> Option<behavior_recognition::CustomResponse> {
        Some(behavior_recognition::CustomResponse {
            code: self.reply.code,
            message: self.reply.message.clone(),
        })
    }
}

#[derive(Clone, Default)]
pub struct MockBehavior {
    pub state: Arc<Mutex<BehaviorState>>,
}

impl BehaviorRecognitionStub for MockBehavior {
    fn inform_image_id(
        &self,
        request: behavior_recognition::InformImageIdRequest,
    ) -> Result<behavior_recognition::InformImageIdResponse, Status> {
        let reply = {
            let mut state = self.state.lock();
            state.informed.push(request);
            state.reply.clone()
        };
        reply.status()?;
        let state = self.state.lock();
        Ok(behavior_recognition::InformImageIdResponse {
            response: state.envelope(),
        })
    }

    fn get_result_by_image_id(
        &self,
        request: behavior_recognition::GetResultByImageIdRequest,
    ) -> Result<behavior_recognition::GetResultByImageIdResponse, Status> {
        let reply = {
            let mut state = self.state.lock();
            state.queried.push(request);
            state.reply.clone()
        };
        reply.status()?;
        let state = self.state.lock();
        Ok(behavior_recognition::GetResultByImageIdResponse {
            response: state.envelope(),
            results: state.results.clone(),
        })
    }

    fn get_latest_result(
        &self,
        request: behavior_recognition::GetLatestResultRequest,
    ) -> Result<behavior_recognition::GetLatestResultResponse, Status> {
        let reply = {
            let mut state = self.state.lock();
            state.latest.push(request);
            state.reply.clone()
        };
        reply.status()?;
        let state = self.state.lock();
        Ok(behavior_recognition::GetLatestResultResponse {
            response: state.envelope(),
            results: state.results.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Image harmony
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct ImageState {
    pub reply: Reply,
    pub connection_id: i64,
    pub image: image_harmony::ImageResponse,
    pub connects: Vec<image_harmony::ConnectImageLoaderRequest>,
    pub disconnects: Vec<image_harmony::DisconnectImageLoaderRequest>,
    pub fetches: Vec<image_harmony::GetImageByImageIdRequest>,
}

impl ImageState {
    pub fn round_trips(&self) -> usize {
        self.connects.len() + self.disconnects.len() + self.fetches.len()
    }

    fn envelope(&self) -> Option<image_harmony::CustomResponse> {
        Some(image_harmony::CustomResponse {
            code: self.reply.code,
            message: self.reply.message.clone(),
        })
    }
}

#[derive(Clone, Default)]
pub struct MockImageHarmony {
    pub state: Arc<Mutex<ImageState>>,
}

impl ImageHarmonyStub for MockImageHarmony {
    fn connect_image_loader(
        &self,
        request: image_harmony::ConnectImageLoaderRequest,
    ) -> Result<image_harmony::ConnectImageLoaderResponse, Status> {
        let reply = {
            let mut state = self.state.lock();
            state.connects.push(request);
            state.reply.clone()
        };
        reply.status()?;
        let state = self.state.lock();
        Ok(image_harmony::ConnectImageLoaderResponse {
            response: state.envelope(),
            connection_id: state.connection_id,
        })
    }

    fn disconnect_image_loader(
        &self,
        request: image_harmony::DisconnectImageLoaderRequest,
    ) -> Result<image_harmony::DisconnectImageLoaderResponse, Status> {
        let reply = {
            let mut state = self.state.lock();
            state.disconnects.push(request);
            state.reply.clone()
        };
        reply.status()?;
        let state = self.state.lock();
        Ok(image_harmony::DisconnectImageLoaderResponse {
            response: state.envelope(),
        })
    }

    fn get_image_by_image_id(
        &self,
        request: image_harmony::GetImageByImageIdRequest,
    ) -> Result<image_harmony::GetImageByImageIdResponse, Status> {
        let no_buffer = request
            .image_request
            .as_ref()
            .map(|r| r.no_image_buffer)
            .unwrap_or(false);
        let reply = {
            let mut state = self.state.lock();
            state.fetches.push(request);
            state.reply.clone()
        };
        reply.status()?;
        let state = self.state.lock();
        let mut image = state.image.clone();
        if no_buffer {
            image.buffer.clear();
        }
        Ok(image_harmony::GetImageByImageIdResponse {
            response: state.envelope(),
            image_response: Some(image),
        })
    }
}

// ---------------------------------------------------------------------------
// Target detection
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct DetectionState {
    pub reply: Reply,
    pub labels: Vec<String>,
    pub results: Vec<target_detection::ResultIndex>,
    pub model_state: i32,
    pub tables: Vec<target_detection::GetResultMappingTableRequest>,
    pub queried: Vec<target_detection::GetResultIndexByImageIdRequest>,
    pub loads: Vec<target_detection::LoadModelRequest>,
    pub checks: Vec<target_detection::CheckModelStateRequest>,
}

impl DetectionState {
    pub fn round_trips(&self) -> usize {
        self.tables.len() + self.queried.len() + self.loads.len() + self.checks.len()
    }

    fn envelope(&self) -> Option<target_detection::CustomResponse> {
        Some(target_detection::CustomResponse {
            code: self.reply.code,
            message: self.reply.message.clone(),
        })
    }
}

#[derive(Clone, Default)]
pub struct MockDetection {
    pub state: Arc<Mutex<DetectionState>>,
}

impl TargetDetectionStub for MockDetection {
    fn get_result_mapping_table(
        &self,
        request: target_detection::GetResultMappingTableRequest,
    ) -> Result<target_detection::GetResultMappingTableResponse, Status> {
        let reply = {
            let mut state = self.state.lock();
            state.tables.push(request);
            state.reply.clone()
        };
        reply.status()?;
        let state = self.state.lock();
        Ok(target_detection::GetResultMappingTableResponse {
            response: state.envelope(),
            labels: state.labels.clone(),
        })
    }

    fn get_result_index_by_image_id(
        &self,
        request: target_detection::GetResultIndexByImageIdRequest,
    ) -> Result<target_detection::GetResultIndexByImageIdResponse, Status> {
        let reply = {
            let mut state = self.state.lock();
            state.queried.push(request);
            state.reply.clone()
        };
        reply.status()?;
        let state = self.state.lock();
        Ok(target_detection::GetResultIndexByImageIdResponse {
            response: state.envelope(),
            results: state.results.clone(),
        })
    }

    fn load_model(
        &self,
        request: target_detection::LoadModelRequest,
    ) -> Result<target_detection::LoadModelResponse, Status> {
        let reply = {
            let mut state = self.state.lock();
            state.loads.push(request);
            state.reply.clone()
        };
        reply.status()?;
        let state = self.state.lock();
        Ok(target_detection::LoadModelResponse {
            response: state.envelope(),
        })
    }

    fn check_model_state(
        &self,
        request: target_detection::CheckModelStateRequest,
    ) -> Result<target_detection::CheckModelStateResponse, Status> {
        let reply = {
            let mut state = self.state.lock();
            state.checks.push(request);
            state.reply.clone()
        };
        reply.status()?;
        let state = self.state.lock();
        Ok(target_detection::CheckModelStateResponse {
            response: state.envelope(),
            model_state: state.model_state,
        })
    }
}

// ---------------------------------------------------------------------------
// Target tracking
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct TrackingState {
    pub reply: Reply,
    pub results: Vec<target_tracking::TrackResult>,
    pub queried: Vec<target_tracking::GetResultByImageIdRequest>,
}

impl TrackingState {
    pub fn round_trips(&self) -> usize {
        self.queried.len()
    }
}

#[derive(Clone, Default)]
pub struct MockTracking {
    pub state: Arc<Mutex<TrackingState>>,
}

impl TargetTrackingStub for MockTracking {
    fn get_result_by_image_id(
        &self,
        request: target_tracking::GetResultByImageIdRequest,
    ) -> Result<target_tracking::GetResultByImageIdResponse, Status> {
        let reply = {
            let mut state = self.state.lock();
            state.queried.push(request);
            state.reply.clone()
        };
        reply.status()?;
        let state = self.state.lock();
        Ok(target_tracking::GetResultByImageIdResponse {
            response: Some(target_tracking::CustomResponse {
                code: state.reply.code,
                message: state.reply.message.clone(),
            }),
            results: state.results.clone(),
        })
    }
}
