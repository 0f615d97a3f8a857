//! Router for the dashboard server.

use crate::handlers::{self, ServerState};
use axum::routing::get;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;

/// API routes, `/public` static data, and the built front-end as fallback.
pub fn router(state: ServerState, dist_dir: &Path) -> Router {
    let public = ServeDir::new(&state.public_dir);
    Router::new()
        .route("/api/loadFile", get(handlers::load_file))
        .route("/api/basins", get(handlers::basins))
        .route("/health", get(handlers::health))
        .nest_service("/public", public)
        .fallback_service(ServeDir::new(dist_dir))
        .with_state(state)
}
