//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (resolve address, bind)
//!     → Hand off to HTTP layer (axum::serve accepts connections)
//! ```

pub mod listener;

pub use listener::{bind, ListenerError};
