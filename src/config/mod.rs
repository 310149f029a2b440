//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults, or config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI overrides (main.rs)
//!     → ServerConfig (immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; no file means the stock `0.0.0.0:8000` server
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ListenerConfig, LoggingConfig, ServerConfig};
pub use validation::{validate_config, ValidationError};
