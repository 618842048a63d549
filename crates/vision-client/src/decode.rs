// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Compressed image buffer -> RGB frame

use image::RgbImage;

/// Decodes an encoded image buffer into an RGB frame
pub trait FrameDecoder: Send + Sync {
    fn decode(&self, buffer: &[u8]) -> Result<RgbImage, String>;
}

/// Decoder backed by the `image` crate (format sniffed from the buffer)
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

impl FrameDecoder for ImageCrateDecoder {
    fn decode(&self, buffer: &[u8]) -> Result<RgbImage, String> {
        if buffer.is_empty() {
            return Err("empty image buffer".to_string());
        }
        image::load_from_memory(buffer)
            .map(|decoded| decoded.to_rgb8())
            .map_err(|e| e.to_string())
    }
}
