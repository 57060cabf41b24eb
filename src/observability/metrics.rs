//! Authorization metrics.
//!
//! # Metrics
//! - `channel_auth_requests_total` (counter): calls by `outcome`
//!   (success, rejected, transport, timeout, no_data)
//! - `channel_auth_duration_seconds` (histogram): time the caller was blocked
//!
//! Recording goes through the `metrics` facade and is a no-op until the host
//! installs a recorder.

use std::time::Duration;

pub const REQUESTS_TOTAL: &str = "channel_auth_requests_total";
pub const DURATION_SECONDS: &str = "channel_auth_duration_seconds";

/// Record one finished `authorize` call.
pub fn record_authorization(outcome: &'static str, elapsed: Duration) {
    metrics::counter!(REQUESTS_TOTAL, "outcome" => outcome).increment(1);
    metrics::histogram!(DURATION_SECONDS, "outcome" => outcome).record(elapsed.as_secs_f64());
}
