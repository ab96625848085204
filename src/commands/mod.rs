use anyhow::Result;
use std::io::Write;

use crate::{
    config::Config,
    error::DataAccessError,
    http::Transport,
    query::{LogQueryClient, QueryParams},
    runtime::Runtime,
};

/// Entry point of the `ialirt-log-query` subcommand.
#[tracing::instrument(skip(runtime, url))]
pub async fn log_query<R: Runtime>(
    runtime: &R,
    url: Option<String>,
    params: QueryParams,
) -> Result<()> {
    let config = Config::resolve(runtime, url);
    let client = LogQueryClient::new(config)?;
    run_log_query(&client, &params, &mut std::io::stdout()).await
}

/// Runs one query and prints the decoded result to `out`.
///
/// A [`DataAccessError`] is printed to `out` as well and counts as handled.
/// Anything else (e.g. a malformed response body) is returned to the caller.
#[tracing::instrument(skip(client, out))]
pub async fn run_log_query<T: Transport, W: Write>(
    client: &LogQueryClient<T>,
    params: &QueryParams,
    out: &mut W,
) -> Result<()> {
    match client.query(params).await {
        Ok(items) => writeln!(out, "{}", items)?,
        Err(e) => match e.downcast_ref::<DataAccessError>() {
            Some(access_error) => writeln!(out, "{}", access_error)?,
            None => return Err(e),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{MockTransport, RawResponse};
    use crate::query::Instance;
    use reqwest::StatusCode;

    fn client_with(
        result: Result<RawResponse, DataAccessError>,
    ) -> LogQueryClient<MockTransport> {
        let mut transport = MockTransport::new();
        transport.expect_get().return_once(move |_| result);
        LogQueryClient::with_transport(Config::new("https://alirt.test.com"), transport)
    }

    fn params() -> QueryParams {
        QueryParams::new("2024", "045", Instance::Two)
    }

    async fn output_of(client: &LogQueryClient<MockTransport>) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run_log_query(client, &params(), &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_prints_result() {
        let client = client_with(Ok(RawResponse::new(
            StatusCode::OK,
            r#"["a.txt", "b.txt"]"#,
        )));

        let (result, out) = output_of(&client).await;
        assert!(result.is_ok());
        assert_eq!(out, "[\"a.txt\",\"b.txt\"]\n");
    }

    #[tokio::test]
    async fn test_prints_http_error_and_succeeds() {
        let client = client_with(Ok(RawResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "database unavailable",
        )));

        let (result, out) = output_of(&client).await;
        assert!(result.is_ok());
        assert_eq!(
            out,
            "HTTP Error: 500 - Internal Server Error\nServer Message: database unavailable\n"
        );
    }

    #[tokio::test]
    async fn test_prints_transport_error_and_succeeds() {
        let client = client_with(Err(DataAccessError::Transport(
            "Connection refused".to_string(),
        )));

        let (result, out) = output_of(&client).await;
        assert!(result.is_ok());
        assert_eq!(out, "URL Error: Connection refused\n");
    }

    #[tokio::test]
    async fn test_decode_error_propagates() {
        let client = client_with(Ok(RawResponse::new(StatusCode::OK, "<html>")));

        let (result, out) = output_of(&client).await;
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
