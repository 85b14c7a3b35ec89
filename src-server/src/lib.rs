//! Interface Generator Asset Server
//!
//! Serves the built front end from a directory:
//! - config: environment-driven settings
//! - error: request failures mapped to HTTP responses

use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use percent_encoding::percent_decode_str;
use tracing::{error, info, warn};

mod config;
mod error;


pub use config::{Config, DEFAULT_PORT};
pub use error::{AssetError, ConfigError};

/// Shared, read-only server state
pub struct AssetState {
    pub root: PathBuf,
}

impl AssetState {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

pub fn build_router(state: Arc<AssetState>) -> Router {
    Router::new().fallback(serve_asset).with_state(state)
}

async fn serve_asset(State(state): State<Arc<AssetState>>, uri: Uri) -> Result<Response, AssetError> {
    let file_path = resolve_path(&state.root, uri.path())?;
    info!("Request: {} -> File: {}", uri, file_path.display());

    let content = tokio::fs::read(&file_path).await.map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            warn!("File not found: {}", file_path.display());
            AssetError::NotFound(display_path(&state.root, &file_path))
        } else {
            error!("Server error: {}", e);
            AssetError::Io(e)
        }
    })?;

    let mime_type = mime_guess::from_path(&file_path).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime_type.to_string())], content).into_response())
}

/// Map a request path onto a file below `root`. `/` is `index.html`; any
/// path that would leave `root` is reported as not found.
pub fn resolve_path(root: &Path, request_path: &str) -> Result<PathBuf, AssetError> {
    let decoded = percent_decode_str(request_path).decode_utf8_lossy().into_owned();
    let relative = decoded.trim_start_matches('/');
    let relative = if relative.is_empty() { "index.html" } else { relative };

    let mut path = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            _ => {
                warn!("Rejected path outside root: {}", decoded);
                return Err(AssetError::NotFound(format!("./{}", relative)));
            }
        }
    }
    Ok(path)
}

fn display_path(root: &Path, file_path: &Path) -> String {
    let relative = file_path.strip_prefix(root).unwrap_or(file_path);
    format!("./{}", relative.display())
}
