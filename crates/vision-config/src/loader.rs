// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, VisionClientsConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "vision_clients.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "VISION_CLIENTS_CONFIG_PATH";

/// Find the configuration file
///
/// Search order:
/// 1. `VISION_CLIENTS_CONFIG_PATH` environment variable
/// 2. Current working directory: `./vision_clients.toml`
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by {} not found: {}",
                CONFIG_PATH_ENV,
                path.display()
            )));
        }
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd.clone();
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                search_paths.push(parent.join(CONFIG_FILE_NAME));
                current = parent.to_path_buf();
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet {} to specify a custom location.",
        CONFIG_FILE_NAME, search_list, CONFIG_PATH_ENV
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if config file is not found, contains invalid TOML, or fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<VisionClientsConfig> {
    let config_file = if let Some(path) = config_path {
        path.to_path_buf()
    } else {
        find_config_file()?
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: VisionClientsConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    crate::validate_config(&config)?;
    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables, per service section
/// (`BEHAVIOR_RECOGNITION`, `IMAGE_HARMONY`, `TARGET_DETECTION`, `TARGET_TRACKING`):
/// - `VISION_<SECTION>_HOST` -> `<section>.host`
/// - `VISION_<SECTION>_PORT` -> `<section>.port`
/// - `VISION_<SECTION>_TASK_ID` -> `<section>.task_id`
///
/// And globally:
/// - `VISION_IMAGE_FORMAT` -> `image.format`
/// - `VISION_IMAGE_QUALITY` -> `image.quality`
/// - `VISION_LOG_LEVEL` -> `logging.level`
/// - `VISION_LOG_DIR` -> `logging.log_dir`
pub fn apply_environment_overrides(config: &mut VisionClientsConfig) {
    for (section, service) in config.services_mut() {
        let prefix = format!("VISION_{}", section.to_uppercase());
        if let Ok(value) = env::var(format!("{prefix}_HOST")) {
            service.host = value;
        }
        if let Ok(value) = env::var(format!("{prefix}_PORT")) {
            if let Ok(port) = value.parse::<u16>() {
                service.port = port;
            }
        }
        if let Ok(value) = env::var(format!("{prefix}_TASK_ID")) {
            if let Ok(task_id) = value.parse::<i64>() {
                service.task_id = Some(task_id);
            }
        }
    }

    if let Ok(value) = env::var("VISION_IMAGE_FORMAT") {
        config.image.format = value;
    }
    if let Ok(value) = env::var("VISION_IMAGE_QUALITY") {
        if let Ok(quality) = value.parse::<i32>() {
            config.image.quality = quality;
        }
    }
    if let Ok(value) = env::var("VISION_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("VISION_LOG_DIR") {
        config.logging.log_dir = Some(PathBuf::from(value));
    }
}

/// Apply CLI argument overrides to configuration
///
/// CLI arguments have the highest precedence and override both TOML and environment variables.
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"target_detection_host": "10.0.0.7", "target_detection_port": "9000"}`)
pub fn apply_cli_overrides(config: &mut VisionClientsConfig, cli_args: &HashMap<String, String>) {
    for (section, service) in config.services_mut() {
        if let Some(value) = cli_args.get(&format!("{section}_host")) {
            service.host = value.clone();
        }
        if let Some(value) = cli_args.get(&format!("{section}_port")) {
            if let Ok(port) = value.parse::<u16>() {
                service.port = port;
            }
        }
        if let Some(value) = cli_args.get(&format!("{section}_task_id")) {
            if let Ok(task_id) = value.parse::<i64>() {
                service.task_id = Some(task_id);
            }
        }
    }

    if let Some(value) = cli_args.get("image_format") {
        config.image.format = value.clone();
    }
    if let Some(value) = cli_args.get("image_quality") {
        if let Ok(quality) = value.parse::<i32>() {
            config.image.quality = quality;
        }
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("log_dir") {
        config.logging.log_dir = Some(PathBuf::from(value));
    }
}
