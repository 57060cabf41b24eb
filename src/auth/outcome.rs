//! Result of one authorization attempt as produced by the worker.

use crate::auth::error::{AuthorizationError, AuthorizationResult};

/// Exactly one of these is produced per call.
#[derive(Debug)]
pub enum AuthorizationOutcome {
    /// Raw token/payload returned by the endpoint.
    Success(String),
    Failure(AuthorizationError),
}

impl AuthorizationOutcome {
    /// Classify an HTTP response already read to text.
    ///
    /// A 2xx with an empty body carries no token and is reported as `NoAuthData`.
    pub fn from_response(status: u16, body: String) -> Self {
        if !(200..300).contains(&status) {
            Self::Failure(AuthorizationError::Rejected { status, body })
        } else if body.is_empty() {
            Self::Failure(AuthorizationError::NoAuthData)
        } else {
            Self::Success(body)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Failure(e) => e.kind(),
        }
    }

    pub fn into_result(self) -> AuthorizationResult<String> {
        match self {
            Self::Success(token) => Ok(token),
            Self::Failure(e) => Err(e),
        }
    }
}
