//! Todo MCP server binary.
//!
//! Constructs the concrete store here and hands it to the adapter layer, so
//! nothing in the crate reaches for ambient state.

use std::net::IpAddr;
use std::sync::Arc;

use clap::Parser;
use todo_mcp::mcp::{self, Config};
use todo_mcp::store::TodoStore;

#[derive(Parser)]
#[command(name = "todo-mcp")]
#[command(author, version, about = "Todo MCP server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Start with an empty collection instead of the sample todos
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let store = if cli.no_seed {
        TodoStore::new()
    } else {
        TodoStore::with_sample_data()
    };

    mcp::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        Arc::new(store),
    )
    .await?;

    Ok(())
}
