//! Observability subsystem.
//!
//! Structured logging through `tracing`. Request spans and IDs are attached
//! by the HTTP layer (see `http::request`).

pub mod logging;

pub use logging::init_logging;
