// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Vision Client
//!
//! Blocking client facades for four remote vision analysis services:
//!
//! - **Behavior recognition**: per-person behavior labels for an image
//! - **Image harmony**: image retrieval through a loader connection
//! - **Target detection**: labelled detections, model loading
//! - **Target tracking**: track identities with their box history
//!
//! Every facade hides channel setup, request construction, the response
//! envelope contract (code 200 is success) and translation of wire results
//! into the plain types of [`models`]. All operations return
//! [`Result`](error::Result); nothing is retried automatically.
//!
//! Facades are `Sync`: one instance may be shared across threads, and the
//! endpoint may be replaced while other threads are mid-call.
//!
//! ## Quick Start
//!
//! ```ignore
//! use vision_client::{TargetDetectionClient, ClientError};
//!
//! let detection = TargetDetectionClient::new()?;
//! detection.set_address("127.0.0.1", 50053)?;
//! detection.set_task_id(7)?;
//! detection.get_mapping_table()?;
//!
//! for result in detection.get_result_by_image_id(1001)? {
//!     println!("{} {:.2} {:?}", result.label, result.confidence, result.bbox);
//! }
//! # Ok::<(), ClientError>(())
//! ```

pub mod connection;
pub mod decode;
pub mod envelope;
pub mod error;
pub mod grpc;
pub mod lifecycle;
pub mod models;
pub mod proto;
pub mod runtime;
pub mod services;
pub mod session;

pub use connection::{ConnectionHandle, Endpoint, StubConnector, StubHandle};
pub use decode::{FrameDecoder, ImageCrateDecoder};
pub use envelope::{Envelope, Enveloped, SUCCESS_CODE};
pub use error::{ClientError, Result};
pub use grpc::{GrpcChannel, GrpcConnector};
pub use lifecycle::Lifecycle;
pub use models::{
    BehaviorResult, BoundingBox, DecodedImage, DetectionResult, ImageInfo, ImageSize,
    LabelConfidence, ModelState, TrackingResult, DEFAULT_IMAGE_FORMAT, DEFAULT_IMAGE_QUALITY,
};
pub use runtime::RuntimeBridge;
pub use services::*;
pub use session::{LabelMapping, SessionId};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
