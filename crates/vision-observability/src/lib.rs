// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # vision-observability
//!
//! Logging setup shared by processes that embed the vision service clients.
//!
//! The client crates only emit `tracing` events; this crate decides where they go.
//!
//! ## Features
//! - `file-logging`: File-based log rotation (desktop only)

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

pub use cli::*;
pub use config::*;
pub use init::*;

/// Known crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "vision-client",
    "vision-config",
    "vision-observability",
];
