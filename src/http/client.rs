//! reqwest-backed transport.

use anyhow::{Context, Result};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use log::debug;
use reqwest::Client;

use super::{RawResponse, Transport};
use crate::error::DataAccessError;

/// Transport that opens a fresh connection for every request.
///
/// Idle pooling is disabled, and the body is read to the end before
/// returning, so the connection is released on every exit path.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<RawResponse, DataAccessError> {
        debug!("GET {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DataAccessError::Transport(transport_reason(&e)))?;

        let status = response.status();
        // hyper only records the phrase when it is not the canonical one
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned());
        let body = response
            .bytes()
            .await
            .map_err(|e| DataAccessError::Transport(transport_reason(&e)))?;

        debug!("Received {} ({} bytes)", status, body.len());

        let raw = RawResponse::new(status, body.to_vec());
        Ok(match reason {
            Some(reason) => raw.with_reason(reason),
            None => raw,
        })
    }
}

/// Flattens the error and its source chain into one line, so the
/// OS-level cause (e.g. "Connection refused") reaches the user.
fn transport_reason(error: &reqwest::Error) -> String {
    let mut reason = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    reason
}
