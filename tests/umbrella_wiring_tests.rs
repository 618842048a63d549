//! Umbrella crate wiring: configuration file to ready facades.

use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;
use vision_clients::config::load_config;
use vision_clients::prelude::*;

const CONFIG: &str = r#"
[behavior_recognition]
host = "10.1.0.1"
port = 6001
task_id = 11

[image_harmony]
host = "10.1.0.2"
port = 6002

[target_detection]
host = "10.1.0.3"
port = 6003
task_id = 33

[target_tracking]
host = "10.1.0.4"
port = 6004

[image]
format = ".png"
quality = 70
"#;

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("vision_clients.toml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn facades_are_built_from_config_file() {
    let (_dir, path) = write_config(CONFIG);
    let config = load_config(Some(&path), None).expect("config loads");

    let clients = VisionClients::from_config(&config).expect("clients");

    assert_eq!(
        clients.behavior.endpoint().expect("behavior endpoint").authority(),
        "10.1.0.1:6001"
    );
    assert_eq!(clients.behavior.task_id(), Some(11));
    assert_eq!(
        clients.image.endpoint().expect("image endpoint").authority(),
        "10.1.0.2:6002"
    );
    assert_eq!(clients.detection.task_id(), Some(33));
    assert_eq!(clients.tracking.task_id(), None);
    assert_eq!(clients.tracking.endpoint().expect("tracking endpoint").port(), 6004);
}

#[test]
fn cli_overrides_reach_the_facades() {
    let (_dir, path) = write_config(CONFIG);
    let mut cli = HashMap::new();
    cli.insert("target_tracking_port".to_string(), "7004".to_string());
    cli.insert("target_tracking_task_id".to_string(), "44".to_string());
    let config = load_config(Some(&path), Some(&cli)).expect("config loads");

    let tracking = TargetTrackingClient::from_config(&config.target_tracking).expect("tracking");

    assert_eq!(tracking.endpoint().expect("endpoint").port(), 7004);
    assert_eq!(tracking.task_id(), Some(44));
}

#[test]
fn image_defaults_seed_requests() {
    let (_dir, path) = write_config(CONFIG);
    let config = load_config(Some(&path), None).expect("config loads");

    let info = VisionClients::image_info(&config, 9);

    assert_eq!(info.image_id, 9);
    assert_eq!(info.format, ".png");
    assert_eq!(info.quality, 70);
}

#[test]
fn shutdown_stops_every_facade() {
    let clients = VisionClients::from_config(&VisionClientsConfig::default()).expect("clients");

    clients.shutdown();

    assert_eq!(clients.behavior.lifecycle(), Lifecycle::Stopped);
    assert_eq!(clients.image.lifecycle(), Lifecycle::Stopped);
    assert_eq!(clients.detection.lifecycle(), Lifecycle::Stopped);
    assert_eq!(clients.tracking.lifecycle(), Lifecycle::Stopped);
    assert_eq!(
        clients.tracking.get_result_by_image_id(1).unwrap_err(),
        ClientError::ShuttingDown
    );
}

#[test]
fn logging_section_reaches_subscriber_settings() {
    let contents = format!("{CONFIG}\n[logging]\nlevel = \"debug\"\nformat = \"json\"\nlog_dir = \"/var/log/vision\"\n");
    let (_dir, path) = write_config(&contents);
    let config = load_config(Some(&path), None).expect("config loads");

    let settings = vision_clients::logging_config_from(&config.logging).expect("settings");

    assert_eq!(settings.level, "debug");
    assert_eq!(settings.format, vision_clients::observability::LogFormat::Json);
    assert_eq!(
        settings.log_dir.as_deref(),
        Some(std::path::Path::new("/var/log/vision"))
    );
}

#[test]
fn logging_section_without_dir_logs_to_console_only() {
    let settings = vision_clients::logging_config_from(&VisionClientsConfig::default().logging)
        .expect("settings");

    assert_eq!(settings.log_dir, None);
}
