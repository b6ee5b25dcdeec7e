//! Startup orchestration.

use crate::config::ResponderConfig;
use crate::http::{ResponderServer, ServerError};

/// Bind the variant's address and serve until the process exits.
pub async fn start(config: ResponderConfig) -> Result<(), ServerError> {
    tracing::info!(
        variant = %config.variant,
        address = %config.variant.listen_addr(),
        "Configuration loaded"
    );

    let server = ResponderServer::new(config).bind().await?;
    server.serve().await
}
