//! HTTP server for the inventory UI
//!
//! Two pages, `GET /` and `GET /inventory`, resolved after
//! [`normalize_path`]. Any other GET is 404 and any other method is 405.
//! The parts file is read on the blocking pool for every inventory request.

use crate::path::normalize_path;
use crate::render::{render_home, render_inventory};
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use rackstore_core::{Error as StoreError, Part};
use rackstore_storage::JsonMasterDataStore;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Shown when `data/master/parts.json` does not exist
pub const MISSING_PARTS_MESSAGE: &str =
    "Parts data file not found. Create data/master/parts.json to view inventory.";

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: JsonMasterDataStore,
}

impl AppState {
    pub fn new(store: JsonMasterDataStore) -> Self {
        Self { store }
    }
}

/// A request that could not be turned into a page
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(target: "rackstore::web", error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new().fallback(dispatch).with_state(state)
}

/// Bind is the caller's job; this serves until the listener fails
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(target: "rackstore::web", "Web UI running at http://{}", addr);
    }
    axum::serve(listener, create_router(state)).await
}

async fn dispatch(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    match normalize_path(uri.path()).as_str() {
        "/" => Html(render_home()).into_response(),
        "/inventory" => match inventory_page(&state).await {
            Ok(page) => Html(page).into_response(),
            Err(e) => e.into_response(),
        },
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn inventory_page(state: &AppState) -> Result<String, WebError> {
    let store = state.store.clone();
    let loaded = tokio::task::spawn_blocking(move || store.load_parts()).await?;
    render_loaded_inventory(loaded)
}

/// Turn a parts load into the inventory page
///
/// A missing file or invalid data still renders the page, with an empty
/// table and an explanatory message. Other failures are returned.
pub fn render_loaded_inventory(
    loaded: rackstore_core::Result<Vec<Part>>,
) -> Result<String, WebError> {
    match loaded {
        Ok(parts) => Ok(render_inventory(&parts, None)),
        Err(e) if e.is_missing_file() => {
            warn!(target: "rackstore::web", error = %e, "Parts file missing");
            Ok(render_inventory(&[], Some(MISSING_PARTS_MESSAGE)))
        }
        Err(StoreError::Schema(e)) => {
            warn!(target: "rackstore::web", error = %e, "Parts file invalid");
            Ok(render_inventory(&[], Some(&format!("Invalid parts data: {}", e))))
        }
        Err(e) => Err(e.into()),
    }
}
