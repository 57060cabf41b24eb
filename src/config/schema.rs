//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default caller-side deadline for one authorization.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Root configuration for a channel authorizer.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthorizerConfig {
    /// Auth endpoint URL the form is POSTed to.
    pub auth_endpoint: String,

    /// Headers attached to every authorization request.
    pub headers: HashMap<String, String>,

    /// How long `authorize` waits for an outcome, in seconds.
    pub timeout_secs: u64,

    /// Optional transport-level timeout applied by the HTTP client itself.
    pub request_timeout_secs: Option<u64>,

    /// Worker threads for the owned runtime.
    pub worker_threads: usize,

    /// Logging settings (used by the binary).
    pub observability: ObservabilityConfig,
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            auth_endpoint: String::new(),
            headers: HashMap::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            request_timeout_secs: None,
            worker_threads: 1,
            observability: ObservabilityConfig::default(),
        }
    }
}

impl AuthorizerConfig {
    /// Create a configuration targeting the given auth endpoint.
    pub fn new(auth_endpoint: impl Into<String>) -> Self {
        Self {
            auth_endpoint: auth_endpoint.into(),
            ..Self::default()
        }
    }

    /// Add a header. A repeated name overwrites the earlier value.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Override the caller-side deadline.
    ///
    /// Sub-second parts round up to the next whole second. A zero duration is
    /// kept as zero and rejected by validation.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
