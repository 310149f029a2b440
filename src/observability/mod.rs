//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Listener, server and lifecycle events
//!     → tracing macros with structured fields
//!     → logging.rs (EnvFilter + fmt layer on stderr)
//!
//! Per request:
//!     → TraceLayer span (method, uri, status, latency)
//!     → x-request-id set and echoed on the response
//! ```

pub mod logging;

pub use logging::init_logging;
