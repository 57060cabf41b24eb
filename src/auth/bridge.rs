//! Synchronous channel authorization over an asynchronous HTTP call.
//!
//! ```text
//! caller thread                         worker task (tokio)
//! ─────────────                         ───────────────────
//! build form body + headers
//! completion_signal() ──── Completer ──▶ POST auth_endpoint
//! spawn ─────────────────────────────▶  classify response / error
//! Waiter::wait(timeout)  ◀───────────── Completer::complete(outcome)
//! resolve → token | AuthorizationError
//! ```
//!
//! The timeout only releases the caller. A worker still running past the
//! deadline keeps going until the transport finishes or fails, and its
//! outcome is dropped. Under a sustained run of timeouts these abandoned
//! requests pile up; set `request_timeout_secs` to bound them at the transport.
//!
//! `authorize` blocks. Do not call it from a thread that drives the runtime
//! the worker is spawned on, or the worker can only run after the deadline.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use tokio::runtime::{Handle, Runtime};
use url::Url;

use crate::auth::error::{AuthorizationError, AuthorizationResult};
use crate::auth::outcome::AuthorizationOutcome;
use crate::auth::request::{AuthorizationRequest, FORM_CONTENT_TYPE};
use crate::auth::signal::{completion_signal, Wait, Waiter};
use crate::config::validation::{validate_config, ValidationError};
use crate::config::{AuthorizerConfig, ConfigError};
use crate::observability::metrics;

/// Synchronous authorization contract expected by the pub/sub client.
pub trait Authorizer: Send + Sync {
    /// Return the auth payload for `channel_name` on connection `socket_id`.
    fn authorize(&self, channel_name: &str, socket_id: &str) -> AuthorizationResult<String>;
}

/// Authorizes private and presence channels against an HTTP auth endpoint.
///
/// Endpoint, headers and the HTTP client are fixed at construction and
/// shared by every call. Concurrent calls are independent: each gets its own
/// request, worker task and completion signal.
pub struct ChannelAuthorizer {
    endpoint: Url,
    headers: HeaderMap,
    client: reqwest::Client,
    timeout: Duration,
    handle: Handle,
    /// Present when the authorizer owns its runtime.
    runtime: Option<Runtime>,
}

impl ChannelAuthorizer {
    /// Build an authorizer that runs workers on its own runtime.
    pub fn new(config: AuthorizerConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(config.worker_threads)
            .thread_name("channel-auth-worker")
            .enable_all()
            .build()
            .map_err(ConfigError::Io)?;

        let handle = runtime.handle().clone();
        Self::build(config, handle, Some(runtime))
    }

    /// Build an authorizer that spawns workers on an existing runtime.
    pub fn with_handle(config: AuthorizerConfig, handle: Handle) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;
        Self::build(config, handle, None)
    }

    fn build(
        config: AuthorizerConfig,
        handle: Handle,
        runtime: Option<Runtime>,
    ) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(&config.auth_endpoint).map_err(|e| {
            ConfigError::Validation(vec![ValidationError::InvalidEndpoint {
                url: config.auth_endpoint.clone(),
                reason: e.to_string(),
            }])
        })?;

        let mut headers = HeaderMap::with_capacity(config.headers.len() + 1);
        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                ConfigError::Validation(vec![ValidationError::InvalidHeaderName(name.clone())])
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                ConfigError::Validation(vec![ValidationError::InvalidHeaderValue(name.clone())])
            })?;
            headers.insert(header_name, header_value);
        }
        // The form body decides the content type.
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));

        let mut builder = reqwest::Client::builder();
        if let Some(request_timeout) = config.request_timeout() {
            builder = builder.timeout(request_timeout);
        }
        let client = builder.build().map_err(ConfigError::Client)?;

        tracing::info!(
            endpoint = %endpoint,
            headers = config.headers.len(),
            timeout_secs = config.timeout_secs,
            "Channel authorizer initialized"
        );

        Ok(Self {
            endpoint,
            headers,
            client,
            timeout: config.wait_timeout(),
            handle,
            runtime,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upper bound on how long `authorize` blocks.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn dispatch(&self, request: &AuthorizationRequest) -> Waiter {
        let (completer, waiter) = completion_signal();

        let http = self
            .client
            .post(self.endpoint.clone())
            .headers(self.headers.clone())
            .body(request.form_body());
        let channel = request.channel_name().to_string();

        self.handle.spawn(async move {
            let outcome = match send(http).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(channel = %channel, error = %e, "Authorization error");
                    AuthorizationOutcome::Failure(e.into())
                }
            };

            if let Err(late) = completer.complete(outcome) {
                tracing::debug!(
                    channel = %channel,
                    outcome = late.kind(),
                    "Authorization finished after caller gave up, result discarded"
                );
            }
        });

        waiter
    }

    fn resolve(&self, request: &AuthorizationRequest, wait: Wait) -> AuthorizationResult<String> {
        match wait {
            Wait::TimedOut => {
                tracing::warn!(
                    channel = %request.channel_name(),
                    timeout_secs = self.timeout.as_secs(),
                    "Authorization timed out, abandoning worker"
                );
                Err(AuthorizationError::Timeout { after: self.timeout })
            }
            Wait::Empty => {
                tracing::error!(
                    channel = %request.channel_name(),
                    "Authorization worker exited without an outcome"
                );
                Err(AuthorizationError::NoAuthData)
            }
            Wait::Completed(outcome) => {
                if let AuthorizationOutcome::Failure(AuthorizationError::Rejected { status, .. }) =
                    &outcome
                {
                    tracing::warn!(
                        channel = %request.channel_name(),
                        status = *status,
                        "Auth endpoint rejected channel"
                    );
                }
                outcome.into_result()
            }
        }
    }
}

impl Authorizer for ChannelAuthorizer {
    fn authorize(&self, channel_name: &str, socket_id: &str) -> AuthorizationResult<String> {
        let request = AuthorizationRequest::new(channel_name, socket_id);
        let started = Instant::now();

        tracing::debug!(
            channel = %request.channel_name(),
            socket_id = %request.socket_id(),
            endpoint = %self.endpoint,
            "Dispatching channel authorization"
        );

        let waiter = self.dispatch(&request);
        let result = self.resolve(&request, waiter.wait(self.timeout));

        let kind = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        metrics::record_authorization(kind, started.elapsed());

        result
    }
}

impl Drop for ChannelAuthorizer {
    fn drop(&mut self) {
        // Abandoned workers may still be in flight; never block on them.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<AuthorizationOutcome, reqwest::Error> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok(AuthorizationOutcome::from_response(status, body))
}
