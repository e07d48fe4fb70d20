use std::path::PathBuf;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::server::{
    controller::{listing, not_found, role, search, student},
    middleware::static_assets::{serve_static_first, StaticAssets},
    state::AppState,
};

/// Builds the application router.
///
/// Precedence, highest first:
/// 1. Existing files under `public_dir` (middleware, ahead of routing)
/// 2. `/`, `/search`, `/search/{term}`, `/student/{id}`
/// 3. `/{role_slug}` catch-all, which defers unknown slugs to `not_found`
/// 4. `not_found` for everything else
pub fn router(public_dir: impl Into<PathBuf>) -> Router<AppState> {
    let assets = StaticAssets::new(public_dir);

    Router::new()
        .route("/", get(listing::index))
        .route("/search", post(search::submit).fallback(not_found))
        .route("/search/{term}", get(search::results))
        .route("/student/{id}", get(student::detail))
        .route("/{role_slug}", get(role::list_by_role))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(assets, serve_static_first))
        .layer(TraceLayer::new_for_http())
}

/// Wraps the finished router so `/students/` and `/students` reach the same handler.
///
/// Path rewriting has to happen before routing, so this wraps the router instead of
/// being added with `Router::layer`.
pub fn trim_trailing_slash(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
