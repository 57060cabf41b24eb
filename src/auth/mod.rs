//! Channel authorization subsystem.
//!
//! # Data Flow
//! ```text
//! authorize(channel, socket_id)           (caller thread, blocks)
//!     → request.rs  (form body: socket_id=..&channel_name=..)
//!     → signal.rs   (fresh one-shot Completer/Waiter pair)
//!     → bridge.rs   (spawn worker, POST to auth endpoint)
//!     → outcome.rs  (2xx → Success(body), else Failure)
//!     → signal.rs   (worker completes, caller wakes or deadline hits)
//!     → error.rs    (Timeout | Rejected | Transport | NoAuthData)
//! ```
//!
//! # Design Decisions
//! - One worker and one signal per call; nothing is shared between calls
//!   except the HTTP client and its connection pool
//! - The deadline is caller-side only; timed-out workers are abandoned, not cancelled
//! - No retries and no caching

pub mod bridge;
pub mod error;
pub mod outcome;
pub mod request;
pub mod signal;

pub use bridge::{Authorizer, ChannelAuthorizer};
pub use error::{AuthorizationError, AuthorizationResult};
pub use outcome::AuthorizationOutcome;
pub use request::AuthorizationRequest;
