//! Static responder library.
//!
//! A single-route HTTP server: `GET /` answers 200 with a fixed body chosen
//! by the configured [`Variant`]; every other request gets the router
//! defaults (405 with `Allow`, automatic `OPTIONS`, clean-path redirect, or
//! an empty 404).

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::ResponderConfig;
pub use http::{ListeningServer, ResponderServer, ServerError};
pub use lifecycle::start;
pub use routing::{ResponseTemplate, RouteRule, Variant};
