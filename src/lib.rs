//! # vision-clients
//!
//! Client facades that let a vision-processing orchestrator talk to four
//! remote analysis services over gRPC:
//!
//! - **Behavior recognition**: behavior labels per person in an image
//! - **Image harmony**: image retrieval through a loader connection
//! - **Target detection**: labelled detections and model loading
//! - **Target tracking**: track identities with their box history
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! vision-clients = "0.3"  # Default: config + observability
//! ```
//!
//! ```rust,no_run
//! use vision_clients::prelude::*;
//!
//! let tracking = TargetTrackingClient::new()?;
//! tracking.set_address("127.0.0.1", 50054)?;
//! tracking.set_task_id(7)?;
//!
//! for track in tracking.get_result_by_image_id(1001)? {
//!     println!("track {} seen {} times", track.id, track.bboxes.len());
//! }
//! # Ok::<(), ClientError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - **`config`** (default): `vision_clients.toml` loading and `from_config` constructors
//! - **`observability`** (default): logging initialisation helpers
//! - **`file-logging`**: daily rotated log files
//!
//! ## Configured Startup
//!
//! ```rust,no_run
//! use vision_clients::prelude::*;
//!
//! let config = vision_clients::config::load_config(None, None)?;
//! let flags = vision_clients::observability::parse_debug_flags();
//! let _guard = vision_clients::init_logging_from_config(&config.logging, &flags)?;
//!
//! let clients = VisionClients::from_config(&config)?;
//! clients.detection.get_mapping_table()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## License
//!
//! Apache-2.0

pub use vision_client as client;

#[cfg(feature = "config")]
pub use vision_config as config;

#[cfg(feature = "observability")]
pub use vision_observability as observability;

pub use vision_client::{ClientError, Result};

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use vision_client::{
        BehaviorRecognitionClient, BehaviorResult, BoundingBox, ClientError, DecodedImage,
        DetectionResult, Endpoint, ImageHarmonyClient, ImageInfo, ImageSize, LabelConfidence,
        Lifecycle, ModelState, TargetDetectionClient, TargetTrackingClient, TrackingResult,
    };

    #[cfg(feature = "config")]
    pub use crate::VisionClients;

    #[cfg(feature = "config")]
    pub use vision_config::{ServiceEndpointConfig, VisionClientsConfig};
}

/// All four facades built from one configuration
#[cfg(feature = "config")]
pub struct VisionClients {
    pub behavior: vision_client::BehaviorRecognitionClient,
    pub image: vision_client::ImageHarmonyClient,
    pub detection: vision_client::TargetDetectionClient,
    pub tracking: vision_client::TargetTrackingClient,
}

#[cfg(feature = "config")]
impl VisionClients {
    pub fn from_config(config: &vision_config::VisionClientsConfig) -> Result<Self> {
        Ok(Self {
            behavior: vision_client::BehaviorRecognitionClient::from_config(
                &config.behavior_recognition,
            )?,
            image: vision_client::ImageHarmonyClient::from_config(&config.image_harmony)?,
            detection: vision_client::TargetDetectionClient::from_config(&config.target_detection)?,
            tracking: vision_client::TargetTrackingClient::from_config(&config.target_tracking)?,
        })
    }

    /// Image request parameters seeded from the `[image]` section
    pub fn image_info(config: &vision_config::VisionClientsConfig, image_id: i64) -> vision_client::ImageInfo {
        vision_client::ImageInfo::from_defaults(&config.image, image_id)
    }

    /// Shut every facade down. Also happens on drop.
    pub fn shutdown(&self) {
        self.behavior.shutdown();
        self.image.shutdown();
        self.detection.shutdown();
        self.tracking.shutdown();
    }
}

/// Translate the `[logging]` section into the subscriber settings
#[cfg(all(feature = "config", feature = "observability"))]
pub fn logging_config_from(
    logging: &vision_config::LoggingConfig,
) -> anyhow::Result<vision_observability::LoggingConfig> {
    let format = logging
        .format
        .parse::<vision_observability::LogFormat>()
        .map_err(anyhow::Error::msg)?;
    Ok(vision_observability::LoggingConfig {
        level: logging.level.clone(),
        format,
        log_dir: logging.log_dir.clone(),
    })
}

/// Install logging from the `[logging]` section of `vision_clients.toml`
#[cfg(all(feature = "config", feature = "observability"))]
pub fn init_logging_from_config(
    logging: &vision_config::LoggingConfig,
    debug_flags: &vision_observability::CrateDebugFlags,
) -> anyhow::Result<vision_observability::LoggingGuard> {
    let config = logging_config_from(logging)?;
    vision_observability::init_logging(&config, debug_flags)
}
