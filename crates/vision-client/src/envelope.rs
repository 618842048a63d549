// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Uniform success/failure contract over every wire response.

use crate::error::{ClientError, Result};
use crate::proto::{behavior_recognition, image_harmony, target_detection, target_tracking};
use tonic::Status;
use tracing::{error, warn};

/// Envelope code of a successful call
pub const SUCCESS_CODE: i32 = 200;

/// Status block carried by every response. Absent envelopes read as code 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    pub code: i32,
    pub message: String,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Wire responses that carry an [`Envelope`]
pub trait Enveloped {
    fn envelope(&self) -> Envelope;
}

macro_rules! impl_enveloped {
    ($($module:ident::$response:ident),* $(,)?) => {
        $(
            impl Enveloped for $module::$response {
                fn envelope(&self) -> Envelope {
                    self.response
                        .as_ref()
                        .map(|r| Envelope {
                            code: r.code,
                            message: r.message.clone(),
                        })
                        .unwrap_or_default()
                }
            }
        )*
    };
}

impl_enveloped!(
    behavior_recognition::InformImageIdResponse,
    behavior_recognition::GetResultByImageIdResponse,
    behavior_recognition::GetLatestResultResponse,
    image_harmony::ConnectImageLoaderResponse,
    image_harmony::DisconnectImageLoaderResponse,
    image_harmony::GetImageByImageIdResponse,
    target_detection::GetResultMappingTableResponse,
    target_detection::GetResultIndexByImageIdResponse,
    target_detection::LoadModelResponse,
    target_detection::CheckModelStateResponse,
    target_tracking::GetResultByImageIdResponse,
);

/// Turn a finished round trip into the payload or a failure.
///
/// Transport errors and non-200 envelopes are logged here with the
/// operation name, so callers only translate the success path.
pub fn complete<R: Enveloped>(
    operation: &'static str,
    outcome: std::result::Result<R, Status>,
) -> Result<R> {
    let response = outcome.map_err(|status| {
        let code = status.code() as i32;
        error!(
            operation,
            code,
            "[RPC] {} transport failure: {}",
            operation,
            status.message()
        );
        ClientError::Transport {
            code,
            message: status.message().to_string(),
        }
    })?;

    let envelope = response.envelope();
    if !envelope.is_success() {
        warn!(
            operation,
            code = envelope.code,
            "[RPC] {} failed: {}",
            operation,
            envelope.message
        );
        return Err(ClientError::Application {
            operation,
            code: envelope.code,
            message: envelope.message,
        });
    }
    Ok(response)
}
