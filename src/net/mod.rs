//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Variant listen address
//!     → listener.rs (bind, report local address)
//!     → Hand off to the HTTP layer (axum::serve accept loop)
//! ```
//!
//! # Design Decisions
//! - Bind failure is the only fatal error, surfaced as `ListenerError::Bind`
//! - No connection limits; every accepted connection gets its own task

pub mod listener;

pub use listener::{bind, ListenerError};
