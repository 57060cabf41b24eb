//! Authorization error taxonomy.

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by [`Authorizer::authorize`](crate::auth::Authorizer::authorize).
#[derive(Debug, Error)]
pub enum AuthorizationError {
    /// No outcome arrived before the deadline.
    #[error("Authorization timeout after {} seconds", .after.as_secs())]
    Timeout { after: Duration },

    /// The auth endpoint answered with a non-success status.
    #[error("Auth failed with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request could not be completed (connect, DNS, TLS, I/O).
    #[error("Authorization transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The worker finished without producing an outcome.
    #[error("No auth data received")]
    NoAuthData,
}

impl AuthorizationError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// HTTP status of a rejection, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Rejected { .. } => "rejected",
            Self::Transport(_) => "transport",
            Self::NoAuthData => "no_data",
        }
    }
}

/// Result type for authorization operations.
pub type AuthorizationResult<T> = Result<T, AuthorizationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_timeout() {
        let err = AuthorizationError::Timeout { after: Duration::from_secs(10) };
        assert_eq!(err.to_string(), "Authorization timeout after 10 seconds");
        assert!(err.is_timeout());
        assert_eq!(err.kind(), "timeout");
    }

    #[test]
    fn test_error_display_rejected() {
        let err = AuthorizationError::Rejected { status: 403, body: "forbidden".into() };
        assert_eq!(err.to_string(), "Auth failed with status 403: forbidden");
        assert_eq!(err.status(), Some(403));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_error_display_no_data() {
        let err = AuthorizationError::NoAuthData;
        assert_eq!(err.to_string(), "No auth data received");
        assert_eq!(err.status(), None);
        assert_eq!(err.kind(), "no_data");
    }
}
