//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the axum Router for the configured variant
//! - Wire up middleware (request ID, tracing)
//! - Bind the listener (Stopped → Listening)
//! - Run the accept loop until the process exits

use std::net::SocketAddr;

use axum::{
    routing::{on, MethodFilter},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ResponderConfig;
use crate::http::request::request_span;
use crate::http::response::{fallback, options, serve_template};
use crate::net::{self, ListenerError};
use crate::routing::RouteRule;

/// Error type for the server lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Listener(#[from] ListenerError),
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// A configured server that is not yet listening.
pub struct ResponderServer {
    router: Router,
    config: ResponderConfig,
}

impl ResponderServer {
    /// Create a new server with the given configuration.
    pub fn new(config: ResponderConfig) -> Self {
        let rule = RouteRule::from(config.variant);
        let router = Self::build_router(rule);
        Self { router, config }
    }

    /// Build the axum router for one rule with all middleware layers.
    ///
    /// Wrong method on the rule's path is answered by axum's 405 with `Allow`.
    pub fn build_router(rule: RouteRule) -> Router {
        Router::new()
            .route(
                rule.path(),
                on(MethodFilter::GET, serve_template).on(MethodFilter::OPTIONS, options),
            )
            .fallback(fallback)
            .with_state(rule)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Get a handle to the router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the variant's fixed address.
    pub async fn bind(self) -> Result<ListeningServer, ServerError> {
        let addr = self.config.variant.listen_addr();
        self.bind_to(addr).await
    }

    /// Bind an explicit address.
    pub async fn bind_to(self, addr: SocketAddr) -> Result<ListeningServer, ServerError> {
        let listener = net::bind(addr).await?;
        Ok(self.with_listener(listener))
    }

    fn with_listener(self, listener: TcpListener) -> ListeningServer {
        ListeningServer {
            router: self.router,
            listener,
        }
    }
}

/// A server holding a bound listener.
pub struct ListeningServer {
    router: Router,
    listener: TcpListener,
}

impl ListeningServer {
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self
            .listener
            .local_addr()
            .map_err(ListenerError::LocalAddr)?)
    }

    /// Accept connections until the process exits.
    pub async fn serve(self) -> Result<(), ServerError> {
        let addr = self.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server listening"
        );

        axum::serve(self.listener, self.router).await?;

        Ok(())
    }
}
