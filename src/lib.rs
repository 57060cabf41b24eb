//! Blocking channel authorization for real-time pub/sub clients.

pub mod auth;
pub mod config;
pub mod observability;

pub use auth::{AuthorizationError, Authorizer, ChannelAuthorizer};
pub use config::AuthorizerConfig;
