//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! ChannelAuthorizer produces:
//!     → tracing events (dispatch, rejection, timeout, worker errors)
//!     → metrics.rs (outcome counter, duration histogram)
//!
//! Host application installs:
//!     → logging.rs subscriber (the binary does this)
//!     → any `metrics` recorder (optional)
//! ```
//!
//! # Design Decisions
//! - The library only emits; it never installs a global subscriber or recorder
//! - Tokens never reach the logs; socket ids appear only at debug level

pub mod logging;
pub mod metrics;
