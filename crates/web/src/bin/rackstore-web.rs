//! rackstore-web: serve the inventory UI for a repository root.
//!
//! ```text
//! rackstore-web [--root DIR] [--host HOST] [--port PORT] [--init]
//! ```

use anyhow::Context;
use rackstore_storage::JsonMasterDataStore;
use rackstore_web::{build_cli, serve, AppState, CliArgs};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::from_matches(&build_cli().get_matches());

    let config = args.resolve_config()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = config.web.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    let state = AppState::new(JsonMasterDataStore::new(&args.root));
    serve(listener, state).await.context("web server failed")?;
    Ok(())
}
