// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Caller-facing result types. No wire types leak past the facades.

use image::RgbImage;
use serde::{Deserialize, Serialize};

/// Default encoding requested from the image service
pub const DEFAULT_IMAGE_FORMAT: &str = ".jpg";
/// Default JPEG quality requested from the image service
pub const DEFAULT_IMAGE_QUALITY: i32 = 90;

/// Axis-aligned rectangle, top-left `(x1, y1)` to bottom-right `(x2, y2)`.
///
/// Coordinates are passed through exactly as the service reports them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
}

/// One detected object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub label: String,
    pub confidence: f64,
    pub bbox: BoundingBox,
}

/// One tracked identity with a box per observation, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingResult {
    pub id: i32,
    pub bboxes: Vec<BoundingBox>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfidence {
    pub label: String,
    pub confidence: f64,
}

/// Behavior labels recognised for one person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorResult {
    pub person_id: u32,
    pub bbox: BoundingBox,
    pub labels: Vec<LabelConfidence>,
}

/// Parameters of an image fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub image_id: i64,
    /// Requested width, 0 keeps the stored size
    pub width: i32,
    /// Requested height, 0 keeps the stored size
    pub height: i32,
    /// Encoding extension, e.g. `.jpg`
    pub format: String,
    /// JPEG quality, 0-100
    pub quality: i32,
}

impl ImageInfo {
    pub fn new(image_id: i64) -> Self {
        Self {
            image_id,
            width: 0,
            height: 0,
            format: DEFAULT_IMAGE_FORMAT.to_string(),
            quality: DEFAULT_IMAGE_QUALITY,
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = quality;
        self
    }

    /// Seed format and quality from the `[image]` config section
    #[cfg(feature = "config")]
    pub fn from_defaults(defaults: &vision_config::ImageDefaultsConfig, image_id: i64) -> Self {
        Self::new(image_id)
            .with_format(defaults.format.clone())
            .with_quality(defaults.quality)
    }
}

/// Dimensions of a stored image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub image_id: i64,
    pub width: i32,
    pub height: i32,
}

/// A fetched image, decoded to 8-bit RGB
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub image_id: i64,
    pub frame: RgbImage,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    pub fn height(&self) -> u32 {
        self.frame.height()
    }
}

/// Load state of a detection model on the remote side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelState {
    #[default]
    NotSet,
    Loading,
    Loaded,
    LoadFailed,
}

impl ModelState {
    /// Unknown wire values read as `NotSet`
    pub fn from_wire(raw: i32) -> Self {
        use crate::proto::target_detection::ModelState as Wire;
        match raw {
            r if r == Wire::Loading as i32 => ModelState::Loading,
            r if r == Wire::Loaded as i32 => ModelState::Loaded,
            r if r == Wire::LoadFailed as i32 => ModelState::LoadFailed,
            _ => ModelState::NotSet,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Loaded)
    }
}
