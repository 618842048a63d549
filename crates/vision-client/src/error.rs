// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for the vision service clients

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;

/// Every way a facade call can fail.
///
/// The first group are local preconditions: they are reported before any
/// request leaves the process. The rest describe a round trip that
/// happened (or was attempted) and did not produce a usable result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The facade was shut down
    #[error("client is shutting down")]
    ShuttingDown,

    /// No service address has been configured yet
    #[error("no service address configured - call set_address() first")]
    NotConfigured,

    /// A session identifier (task id, connection id) is still unset
    #[error("{0} is not set")]
    MissingSession(&'static str),

    /// Detection results requested before a mapping table was fetched
    #[error("label mapping table is empty - call get_mapping_table() first")]
    EmptyLabelMapping,

    /// Host/port pair could not be turned into a channel target
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The RPC itself failed (unreachable, deadline, cancelled, ...)
    #[error("transport error (status {code}): {message}")]
    Transport { code: i32, message: String },

    /// The service answered with a non-success envelope
    #[error("{operation} rejected by service (code {code}): {message}")]
    Application {
        operation: &'static str,
        code: i32,
        message: String,
    },

    /// The service succeeded but returned a zero identifier
    #[error("{operation} returned a zero {field}")]
    ZeroId {
        operation: &'static str,
        field: &'static str,
    },

    /// Returned image bytes could not be decoded
    #[error("failed to decode image {image_id}: {reason}")]
    ImageDecode { image_id: i64, reason: String },

    /// Async runtime could not be created
    #[error("runtime error: {0}")]
    Runtime(String),
}

impl ClientError {
    /// True when the call was rejected locally without contacting the service
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ClientError::ShuttingDown
                | ClientError::NotConfigured
                | ClientError::MissingSession(_)
                | ClientError::EmptyLabelMapping
                | ClientError::InvalidEndpoint { .. }
        )
    }

    /// Check if error is retryable (for reconnection logic)
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }
}
