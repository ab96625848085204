//! Client for the `ialirt-log-query` endpoint.
//!
//! A query takes a year, a day of year and an instance number, and returns
//! the server's JSON answer (normally an array of log file names) unchanged.

use anyhow::{Context, Result, bail};
use log::{debug, info};
use reqwest::Url;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::error::DataAccessError;
use crate::http::{HttpTransport, Transport};

/// Path segment appended to the base URL.
pub const QUERY_ENDPOINT: &str = "ialirt-log-query";

/// The pipeline instance that produced the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Instance {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

impl Instance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Instance::One => "1",
            Instance::Two => "2",
        }
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Instance {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1" => Ok(Instance::One),
            "2" => Ok(Instance::Two),
            _ => bail!("Invalid instance '{}': expected one of 1, 2", s),
        }
    }
}

/// Parameters of a log query. All three are required.
///
/// `year` and `doy` are passed to the server as given; the server decides
/// what a valid value is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub year: String,
    pub doy: String,
    pub instance: Instance,
}

impl QueryParams {
    pub fn new(year: impl Into<String>, doy: impl Into<String>, instance: Instance) -> Self {
        Self {
            year: year.into(),
            doy: doy.into(),
            instance,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.year.is_empty() {
            bail!("Query parameter 'year' must be provided");
        }
        if self.doy.is_empty() {
            bail!("Query parameter 'doy' must be provided");
        }
        Ok(())
    }

    /// Query-string pairs in wire order.
    fn pairs(&self) -> [(&str, &str); 3] {
        [
            ("year", self.year.as_str()),
            ("doy", self.doy.as_str()),
            ("instance", self.instance.as_str()),
        ]
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "year={}, doy={}, instance={}",
            self.year, self.doy, self.instance
        )
    }
}

pub struct LogQueryClient<T: Transport = HttpTransport> {
    config: Config,
    transport: T,
}

impl LogQueryClient<HttpTransport> {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }
}

impl<T: Transport> LogQueryClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Points every later query of this client at `url`.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.config.set_base_url(url);
    }

    /// Builds `{base_url}/ialirt-log-query?year=..&doy=..&instance=..`, with
    /// the values form-urlencoded in that order.
    ///
    /// The result is parsed as a URL, so the base is normalized: the host is
    /// lowercased, a default port is dropped and unsafe characters in the path
    /// are escaped. Values use the form-urlencoded set (space as `+`, `*`
    /// kept, `~` escaped).
    pub fn build_url(&self, params: &QueryParams) -> Result<Url> {
        let endpoint = format!("{}/{}", self.config.base_url(), QUERY_ENDPOINT);
        Url::parse_with_params(&endpoint, params.pairs())
            .with_context(|| format!("Invalid base URL: {}", self.config.base_url()))
    }

    /// Runs the query and returns the decoded JSON body as-is.
    ///
    /// Non-2xx statuses and transport failures come back as
    /// [`DataAccessError`]. A body that is not UTF-8 JSON is reported as a
    /// plain error.
    #[tracing::instrument(skip(self))]
    pub async fn query(&self, params: &QueryParams) -> Result<Value> {
        params.validate()?;
        let url = self.build_url(params)?;

        info!("Querying data archive for {} with url {}", params, url);

        let response = self.transport.get(url.as_str()).await?;

        if !response.status.is_success() {
            return Err(DataAccessError::Http {
                status: response.status.as_u16(),
                reason: response.reason_phrase(),
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }
            .into());
        }

        let text = String::from_utf8(response.body).context("Response body is not valid UTF-8")?;
        debug!("Received response: {}", text);

        let items: Value = serde_json::from_str(&text).context("Failed to parse JSON response")?;
        debug!("Decoded JSON: {}", items);

        Ok(items)
    }
}
