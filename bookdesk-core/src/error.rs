//! Error types for Bookdesk Core

use thiserror::Error;

/// Result type for remote collection operations
pub type CollectionResult<T> = std::result::Result<T, CollectionError>;

/// Why a remote collection call failed
///
/// The store collapses every variant into the same user-facing notification;
/// the variant only shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl CollectionError {
    /// Whether the remote answered that the record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(404))
    }
}

impl From<reqwest::Error> for CollectionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        assert!(CollectionError::Status(404).is_not_found());
        assert!(!CollectionError::Status(500).is_not_found());
        assert!(!CollectionError::Transport("refused".into()).is_not_found());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CollectionError::Status(503).to_string(),
            "Unexpected status: 503"
        );
    }
}
