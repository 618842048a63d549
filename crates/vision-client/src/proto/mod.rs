//! Wire messages of the four remote services.
//!
//! Generated from the `.proto` files under `proto/` and checked in so the
//! crate builds without `protoc`. Regenerate with `prost-build` when the
//! service definitions change; do not edit by hand.

pub mod behavior_recognition;
pub mod image_harmony;
pub mod target_detection;
pub mod target_tracking;
