//! Minimal HTML inventory UI for rackstore
//!
//! - `config`: `rackstore.toml` (log filter, listen address)
//! - `cli`: `rackstore-web` command line
//! - `path`: request path normalization
//! - `render`: the home and inventory pages
//! - `server`: axum router and serve loop
//!
//! The UI only reads: it renders the parts list from the master data store
//! and never writes to it.

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod path;
pub mod render;
pub mod server;

pub use cli::{build_cli, CliArgs};
pub use config::{ConfigError, RackConfig, WebConfig, CONFIG_FILE_NAME};
pub use path::normalize_path;
pub use render::{escape_html, render_home, render_inventory, render_layout};
pub use server::{create_router, render_loaded_inventory, serve, AppState, WebError};
