//! Base URL configuration for the log-query API.

use log::debug;

use crate::runtime::Runtime;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://ialirt.dev.imap-mission.com";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "IALIRT_DATA_ACCESS_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolves the base URL with precedence: explicit value, then
    /// `IALIRT_DATA_ACCESS_URL`, then [`DEFAULT_BASE_URL`].
    #[tracing::instrument(skip(runtime))]
    pub fn resolve<R: Runtime>(runtime: &R, explicit: Option<String>) -> Self {
        if let Some(url) = explicit {
            debug!("Using base URL from command line: {}", url);
            return Self::new(url);
        }

        match runtime.env_var(BASE_URL_ENV_VAR) {
            Ok(url) => {
                debug!("Using base URL from {}: {}", BASE_URL_ENV_VAR, url);
                Self::new(url)
            }
            Err(_) => {
                debug!("Using default base URL: {}", DEFAULT_BASE_URL);
                Self::default()
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Overwrites the base URL. The value is not validated here; a malformed
    /// URL surfaces when the next query builds its request.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }
}
