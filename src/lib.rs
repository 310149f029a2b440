//! Minimal HTTP liveness check server.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ServerConfig;
pub use http::{HealthServer, ServerError, ServerHandle};
