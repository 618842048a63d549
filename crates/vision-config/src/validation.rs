// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! This module provides validation logic to ensure configuration values are
//! consistent and within valid ranges.

use crate::{ConfigError, ConfigResult, VisionClientsConfig};

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    InvalidPort { port_name: String, port: u16 },
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort { port_name, port } => {
                write!(f, "Port {} = {} is outside valid range (1-65535)", port_name, port)
            }
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Service hosts and ports
/// - Image request defaults
/// - Logging format
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &VisionClientsConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_services(config, &mut errors);
    validate_image_defaults(config, &mut errors);
    validate_logging(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_services(config: &VisionClientsConfig, errors: &mut Vec<ConfigValidationError>) {
    for (section, service) in config.services() {
        if service.host.trim().is_empty() {
            errors.push(ConfigValidationError::MissingRequired {
                field: format!("{}.host", section),
            });
        }
        if service.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                port_name: format!("{}.port", section),
                port: service.port,
            });
        }
        if service.task_id == Some(0) {
            errors.push(ConfigValidationError::InvalidValue {
                field: format!("{}.task_id", section),
                reason: "0 means unset; omit the key instead".to_string(),
            });
        }
    }
}

fn validate_image_defaults(config: &VisionClientsConfig, errors: &mut Vec<ConfigValidationError>) {
    if !(0..=100).contains(&config.image.quality) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "image.quality".to_string(),
            reason: "must be between 0 and 100".to_string(),
        });
    }
    if !config.image.format.starts_with('.') || config.image.format.len() < 2 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "image.format".to_string(),
            reason: "must be an extension such as '.jpg'".to_string(),
        });
    }
}

fn validate_logging(config: &VisionClientsConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.logging.format != "text" && config.logging.format != "json" {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.format".to_string(),
            reason: "must be 'text' or 'json'".to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = VisionClientsConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_port() {
        let mut config = VisionClientsConfig::default();
        config.image_harmony.port = 0;

        let result = validate_config(&config);
        match result {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("image_harmony.port"));
                assert!(msg.contains("1-65535"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_host() {
        let mut config = VisionClientsConfig::default();
        config.target_detection.host = String::new();

        match validate_config(&config) {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("target_detection.host")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_task_id_rejected() {
        let mut config = VisionClientsConfig::default();
        config.target_tracking.task_id = Some(0);

        match validate_config(&config) {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("target_tracking.task_id")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_all_problems_reported_together() {
        let mut config = VisionClientsConfig::default();
        config.image.quality = 101;
        config.image.format = "jpg".to_string();
        config.logging.format = "xml".to_string();

        match validate_config(&config) {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("image.quality"));
                assert!(msg.contains("image.format"));
                assert!(msg.contains("logging.format"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
