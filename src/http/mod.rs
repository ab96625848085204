//! HTTP transport for the log-query API.

mod client;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::DataAccessError;

pub use client::HttpTransport;

/// A fully read HTTP response, before any status classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    /// Reason phrase from the status line, when it differs from the
    /// canonical one for `status`.
    pub reason: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            reason: None,
            body: body.into(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// The phrase the server sent, falling back to the canonical phrase
    /// (empty for codes that have none).
    pub fn reason_phrase(&self) -> String {
        match &self.reason {
            Some(reason) => reason.clone(),
            None => self
                .status
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Performs a single GET request.
///
/// Implementations return `Err` only with [`DataAccessError::Transport`],
/// i.e. when no response was obtained. Any status code, including errors,
/// comes back as a [`RawResponse`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, DataAccessError>;
}
