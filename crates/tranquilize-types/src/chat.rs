//! Chat turn and request types.
//!
//! A turn pairs one user message with the response body the endpoint
//! returned for it. Turns are immutable once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reply::RawResponse;

/// One user message paired with the raw response it received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: Uuid,
    pub user_text: String,
    pub raw_response: RawResponse,
    pub sent_at: DateTime<Utc>,
}

impl ChatTurn {
    /// Create a turn stamped with a fresh time-sortable id and the current time.
    pub fn new(user_text: impl Into<String>, raw_response: RawResponse) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_text: user_text.into(),
            raw_response,
            sent_at: Utc::now(),
        }
    }
}

/// Request body POSTed to the support endpoint: `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

impl DetectRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
