//! MCP Streamable HTTP service creation.
//!
//! Builds the service that gets nested into the Axum router. A fresh
//! `TodoMcpServer` is created per session, all sharing the same store.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::store::TodoStore;

use super::server::TodoMcpServer;

/// Create the MCP Streamable HTTP service backed by the given store.
///
/// The returned service implements `tower::Service` and can be nested into
/// an Axum router:
///
/// ```no_run
/// use std::sync::Arc;
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// use todo_mcp::mcp::create_mcp_service;
/// use todo_mcp::store::TodoStore;
///
/// let store = Arc::new(TodoStore::new());
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(store, ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// ```
pub fn create_mcp_service(
    store: Arc<TodoStore>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<TodoMcpServer, LocalSessionManager> {
    // Service factory: creates a new TodoMcpServer instance per session.
    // Returns io::Error to match rmcp's expected signature.
    let service_factory = move || -> Result<TodoMcpServer, std::io::Error> {
        Ok(TodoMcpServer::new(Arc::clone(&store)))
    };

    let mut config = StreamableHttpServerConfig::default();
    config.sse_keep_alive = None; // Use default (15s)
    config.sse_retry = None; // Use default retry behavior
    config.stateful_mode = true; // Enable session management
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
