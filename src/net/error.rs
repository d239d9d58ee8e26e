//! Failure type shared by every outbound call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error surfaced by [`crate::net::http::HttpClient`].
///
/// Middleware stages observe this value but never replace it; callers always
/// receive the error the transport produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HttpError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: serde_json::Value },
    /// The request never produced a response (network failure, CORS, etc.).
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    /// A 2xx response whose body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request body: {0}")]
    Encode(String),
}

impl HttpError {
    /// HTTP status of the failure, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Non-empty `error` message from the server's JSON payload.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body
                .get("error")
                .and_then(serde_json::Value::as_str)
                .filter(|msg| !msg.is_empty()),
            _ => None,
        }
    }

    pub fn is_auth_rejected(&self, rejected: &[u16]) -> bool {
        self.status().is_some_and(|status| rejected.contains(&status))
    }
}
