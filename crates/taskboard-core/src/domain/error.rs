//! Client Errors
//!
//! Every failure the client can surface collapses into one displayable
//! message; the variants only record where it came from.

use serde::{Deserialize, Serialize};

/// Common result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientError {
    /// Transport failed before a response existed
    Network(String),
    /// Server answered with a non-2xx status
    Api { status: u16, message: String },
    /// Server answered 2xx but the body was unusable
    Decode(String),
    /// Rejected locally, no request was sent
    Validation(String),
    /// Key-value store failure
    Storage(String),
}

impl ClientError {
    /// HTTP status, when the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "{}", msg),
            ClientError::Api { message, .. } => write!(f, "{}", message),
            ClientError::Decode(msg) => write!(f, "{}", msg),
            ClientError::Validation(msg) => write!(f, "{}", msg),
            ClientError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_server_message_only() {
        let err = ClientError::Api { status: 401, message: "Invalid credentials".to_string() };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn storage_error_is_prefixed() {
        let err = ClientError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err: ClientError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
