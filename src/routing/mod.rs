//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Variant (compiled-in preset)
//!     → rule.rs (RouteRule: GET "/" bound to a ResponseTemplate)
//!     → http::server builds the axum Router from the rule
//!
//! Unmatched request path:
//!     → matcher.rs (clean_path)
//!     → redirect to the clean path, or 404
//! ```
//!
//! # Design Decisions
//! - Exactly one rule per server, immutable after construction
//! - Templates are `&'static str`, so handler state is `Copy`-cheap
//! - Percent-encoded paths are matched as-is, never decoded

pub mod matcher;
pub mod rule;

pub use matcher::clean_path;
pub use rule::{ResponseTemplate, RouteRule, Variant};
