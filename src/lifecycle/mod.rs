//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Build router → Bind listener → Serve
//!
//! States:
//!     Stopped (ResponderServer) → Listening (ListeningServer)
//! ```
//!
//! # Design Decisions
//! - Fail fast: a bind error is fatal and surfaced to the caller
//! - No shutdown path; the process runs until it is terminated

pub mod startup;

pub use startup::start;
