//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or builder calls
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AuthorizerConfig (validated, immutable)
//!     → owned by ChannelAuthorizer for its whole lifetime
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the authorizer is built; no per-call overrides
//! - All fields except the endpoint have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AuthorizerConfig;
pub use schema::ObservabilityConfig;
pub use validation::ValidationError;
