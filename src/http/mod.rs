//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → hyper (HTTP/1.x parsing, protocol errors)
//!     → server.rs (request ID, trace span)
//!     → handlers.rs (/health → 200 "OK", anything else → 404)
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{router, HealthServer, ServerError, ServerHandle};
