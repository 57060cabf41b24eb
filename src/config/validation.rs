//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, worker threads > 0)
//! - Check the endpoint is an absolute http(s) URL
//! - Check every header name and value is representable on the wire
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AuthorizerConfig → Result<(), Vec<ValidationError>>
//! - Runs before an authorizer is built

use reqwest::header::{HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::schema::AuthorizerConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("auth_endpoint is empty")]
    MissingEndpoint,

    #[error("auth_endpoint '{url}' is invalid: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("invalid header name '{0}'")]
    InvalidHeaderName(String),

    #[error("invalid value for header '{0}'")]
    InvalidHeaderValue(String),

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &AuthorizerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.auth_endpoint.trim().is_empty() {
        errors.push(ValidationError::MissingEndpoint);
    } else {
        match url::Url::parse(&config.auth_endpoint) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ValidationError::InvalidEndpoint {
                url: config.auth_endpoint.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => errors.push(ValidationError::InvalidEndpoint {
                url: config.auth_endpoint.clone(),
                reason: e.to_string(),
            }),
        }
    }

    // Sorted so the error list is stable across runs.
    let mut names: Vec<&String> = config.headers.keys().collect();
    names.sort();
    for name in names {
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            errors.push(ValidationError::InvalidHeaderName(name.clone()));
        } else if HeaderValue::from_str(&config.headers[name]).is_err() {
            errors.push(ValidationError::InvalidHeaderValue(name.clone()));
        }
    }

    if config.timeout_secs == 0 {
        errors.push(ValidationError::Zero { field: "timeout_secs" });
    }
    if config.request_timeout_secs == Some(0) {
        errors.push(ValidationError::Zero { field: "request_timeout_secs" });
    }
    if config.worker_threads == 0 {
        errors.push(ValidationError::Zero { field: "worker_threads" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
