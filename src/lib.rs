//! Client for the I-ALiRT log-query API.
//!
//! ```no_run
//! use ialirt_data_access::{Config, Instance, LogQueryClient, QueryParams};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = LogQueryClient::new(Config::default())?;
//! let files = client
//!     .query(&QueryParams::new("2024", "045", Instance::One))
//!     .await?;
//! println!("{}", files);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod runtime;

pub use config::{BASE_URL_ENV_VAR, Config, DEFAULT_BASE_URL};
pub use error::DataAccessError;
pub use query::{Instance, LogQueryClient, QUERY_ENDPOINT, QueryParams};
