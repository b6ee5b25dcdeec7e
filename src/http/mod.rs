//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum Router, middleware, accept loop)
//!     → request.rs (request ID, trace span)
//!     → response.rs (template body, OPTIONS, redirect or 404)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{ListeningServer, ResponderServer, ServerError};
