//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML, --config <path>)
//!     → loader.rs (read & deserialize, defaults fill the gaps)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → copied into AppState at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults; an absent file yields the reference setup
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{
    LatencyConfig, ListenerConfig, ObservabilityConfig, ServiceConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
