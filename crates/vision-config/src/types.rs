// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `vision_clients.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Section names of the four remote services, in file order.
pub const SERVICE_SECTIONS: [&str; 4] = [
    "behavior_recognition",
    "image_harmony",
    "target_detection",
    "target_tracking",
];

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VisionClientsConfig {
    pub behavior_recognition: ServiceEndpointConfig,
    pub image_harmony: ServiceEndpointConfig,
    pub target_detection: ServiceEndpointConfig,
    pub target_tracking: ServiceEndpointConfig,
    pub image: ImageDefaultsConfig,
    pub logging: LoggingConfig,
}

impl Default for VisionClientsConfig {
    fn default() -> Self {
        Self {
            behavior_recognition: ServiceEndpointConfig::with_port(50051),
            image_harmony: ServiceEndpointConfig::with_port(50052),
            target_detection: ServiceEndpointConfig::with_port(50053),
            target_tracking: ServiceEndpointConfig::with_port(50054),
            image: ImageDefaultsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl VisionClientsConfig {
    /// All service sections paired with their section name.
    pub fn services(&self) -> [(&'static str, &ServiceEndpointConfig); 4] {
        [
            (SERVICE_SECTIONS[0], &self.behavior_recognition),
            (SERVICE_SECTIONS[1], &self.image_harmony),
            (SERVICE_SECTIONS[2], &self.target_detection),
            (SERVICE_SECTIONS[3], &self.target_tracking),
        ]
    }

    /// Mutable variant of [`VisionClientsConfig::services`], used by the override passes.
    pub fn services_mut(&mut self) -> [(&'static str, &mut ServiceEndpointConfig); 4] {
        [
            (SERVICE_SECTIONS[0], &mut self.behavior_recognition),
            (SERVICE_SECTIONS[1], &mut self.image_harmony),
            (SERVICE_SECTIONS[2], &mut self.target_detection),
            (SERVICE_SECTIONS[3], &mut self.target_tracking),
        ]
    }
}

/// Where one remote service listens, plus the task it serves for this process
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceEndpointConfig {
    pub host: String,
    pub port: u16,
    /// Registered processing task. Unused by image harmony.
    pub task_id: Option<i64>,
}

impl ServiceEndpointConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// `host:port`
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceEndpointConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 50051,
            task_id: None,
        }
    }
}

/// Defaults applied to image harmony requests
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageDefaultsConfig {
    /// Encoding extension requested from the image service (e.g. `.jpg`)
    pub format: String,
    /// Encoder quality, 0-100
    pub quality: i32,
}

impl Default for ImageDefaultsConfig {
    fn default() -> Self {
        Self {
            format: ".jpg".to_string(),
            quality: 90,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// `text` or `json`
    pub format: String,
    /// Base directory for rotated log files. Only honoured with `file-logging`.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            log_dir: None,
        }
    }
}
