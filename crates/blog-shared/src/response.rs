//! Standardized API response bodies.
//!
//! Every error is reported as `{"message": ...}`; lookups that fail to
//! resolve an id also carry the requested id and the ids that would have
//! resolved, so clients can diagnose the mismatch.

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// A human-readable explanation, shown verbatim by clients.
    pub message: String,

    /// The id the caller asked for (404 only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_id: Option<String>,

    /// Every id that currently resolves (404 only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_ids: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            requested_id: None,
            available_ids: None,
        }
    }

    pub fn with_ids(mut self, requested_id: impl Into<String>, available_ids: Vec<String>) -> Self {
        self.requested_id = Some(requested_id.into());
        self.available_ids = Some(available_ids);
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(detail)
    }

    pub fn not_found(
        detail: impl Into<String>,
        requested_id: impl Into<String>,
        available_ids: Vec<String>,
    ) -> Self {
        Self::new(detail).with_ids(requested_id, available_ids)
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}

/// Plain `{"message": ...}` confirmation body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
