//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the todo store over the Streamable HTTP transport:
//!
//! - `server`: the `TodoMcpServer` handler (tools, resources, prompts)
//! - `resources`: JSON bodies for the `todo://` resources
//! - `prompts`: prompt builders rendering live store data
//! - `service`: per-session service factory for the HTTP transport
//!
//! [`run`] is the full bootstrap: tracing, router, bind, serve.

pub mod prompts;
pub mod resources;
pub mod server;
mod service;

#[cfg(test)]
mod prompts_test;

use std::net::IpAddr;
use std::sync::Arc;

use axum::Router;
use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::store::TodoStore;

pub use server::TodoMcpServer;
pub use service::create_mcp_service;

/// Server configuration.
pub struct Config {
    /// Host address to bind to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
        }
    }
}

/// Errors raised while bringing up or running the server.
#[derive(Error, Diagnostic, Debug)]
pub enum ServeError {
    #[error("Server I/O error: {0}")]
    #[diagnostic(code(todo_mcp::mcp::io))]
    Io(#[from] std::io::Error),
}

/// Initialize tracing subscriber with env filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_mcp=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the MCP server with the given configuration and store.
pub async fn run(config: Config, store: Arc<TodoStore>) -> Result<(), ServeError> {
    init_tracing();

    let ct = CancellationToken::new();
    let mcp_service = create_mcp_service(store, ct.clone());

    let app = Router::new()
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(ct))
        .await?;
    Ok(())
}

async fn shutdown_signal(ct: CancellationToken) {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
    ct.cancel();
}
