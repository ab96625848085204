//! The classified error raised for network and API failures.

/// Failure talking to the log-query API.
///
/// Both variants travel inside [`anyhow::Error`]; callers recover them with
/// `downcast_ref::<DataAccessError>()`. Malformed response bodies are not
/// represented here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataAccessError {
    /// The server answered with a non-2xx status.
    Http {
        status: u16,
        reason: String,
        body: String,
    },
    /// No response was obtained (DNS, connect, socket).
    Transport(String),
}

impl std::fmt::Display for DataAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataAccessError::Http {
                status,
                reason,
                body,
            } => {
                write!(
                    f,
                    "HTTP Error: {} - {}\nServer Message: {}",
                    status, reason, body
                )
            }
            DataAccessError::Transport(reason) => {
                write!(f, "URL Error: {}", reason)
            }
        }
    }
}

impl std::error::Error for DataAccessError {}
