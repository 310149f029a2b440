//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Stopped ──bind ok──▶ Listening ──signal / ServerHandle::stop──▶ Stopped
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → stop accepting, finish in-flight requests, exit 0
//! ```

pub mod signals;

pub use signals::wait_for_signal;
