//! Static asset precedence.
//!
//! Files under the public directory win over every route, including the role-slug
//! catch-all: `/styles.css` is served from disk even though it would otherwise match
//! `/{role_slug}`. Requests that do not name a regular file pass through untouched.

use std::path::{Component, Path, PathBuf};

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use tower::ServiceExt;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a request path to a regular file under the public directory.
    ///
    /// # Returns
    /// - `Some(PathBuf)` - The file exists and the path stays inside the directory
    /// - `None` - No such file, a directory, or a path with `..`/root components
    pub async fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let decoded = percent_decode_str(request_path).decode_utf8().ok()?;
        let relative = Path::new(decoded.trim_start_matches('/'));

        if relative.as_os_str().is_empty()
            || !relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)))
        {
            return None;
        }

        let candidate = self.root.join(relative);
        match tokio::fs::metadata(&candidate).await {
            Ok(metadata) if metadata.is_file() => Some(candidate),
            _ => None,
        }
    }
}

/// Serves `GET`/`HEAD` requests for existing public files before routing.
pub async fn serve_static_first(
    State(assets): State<StaticAssets>,
    request: Request,
    next: Next,
) -> Response {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return next.run(request).await;
    }

    let request_path = request.uri().path().to_owned();
    if assets.resolve(&request_path).await.is_none() {
        return next.run(request).await;
    }

    match ServeDir::new(&assets.root).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
