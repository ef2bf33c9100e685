//! Errors produced while talking to the backend.
//!
//! - [`ClientError`] is a single failed request.
//! - [`SyncError`] is why a refresh fell back to the demo dataset. It is only
//!   logged, `refresh` itself never fails.
//! - [`IncomeError`] is returned to whoever submitted an income.
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the backend answered, with a non-success status.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("forecast request failed: {0}")]
    Forecast(ClientError),
    #[error("nudge request failed: {0}")]
    Nudge(ClientError),
    #[error("forecast request failed: {forecast}; nudge request failed: {nudge}")]
    Both {
        forecast: ClientError,
        nudge: ClientError,
    },
}

#[derive(Debug, Error)]
pub enum IncomeError {
    #[error("\"{input}\" is not a valid amount")]
    InvalidAmount { input: String },
    #[error("failed to record income: {0}")]
    Write(#[from] ClientError),
}
