use thiserror::Error;

/// Errors returned by a [`crate::remote::Remote`] implementation.
///
/// Every failure is handed straight back to the caller. Nothing is retried.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport failure. The request URL is stripped because Trypod paths
    /// embed the auth token.
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The backend answered with a status other than the one the call expects.
    /// `message` is the status line, e.g. `404 Not Found`.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}: Not Implemented")]
    NotImplemented(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RemoteError>;

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        RemoteError::Transport(e.without_url())
    }
}

impl RemoteError {
    pub fn backend(status: reqwest::StatusCode) -> Self {
        RemoteError::Backend {
            status: status.as_u16(),
            message: status.to_string(),
        }
    }

    /// True for failures caused by the payload rather than by the backend.
    pub fn is_decode(&self) -> bool {
        matches!(self, RemoteError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn backend_error_carries_status_line() {
        let err = RemoteError::backend(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "404 Not Found");
        match err {
            RemoteError::Backend { status, .. } => assert_eq!(status, 404),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ok_is_still_a_backend_error_when_unexpected() {
        let err = RemoteError::backend(StatusCode::OK);
        assert_eq!(err.to_string(), "200 OK");
    }

    #[test]
    fn decode_errors_are_flagged() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(RemoteError::from(json_err).is_decode());
        assert!(!RemoteError::NotImplemented("auth").is_decode());
    }
}
