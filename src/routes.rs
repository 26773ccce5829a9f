// src/routes.rs

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{handlers::article, state::AppState, storage::PUBLIC_PREFIX};

/// Assembles the main application router.
///
/// * `POST /save-article` publishes an article.
/// * `/` and `/static` serve the editor from the static directory.
/// * `/articles` serves saved articles straight from the store directory.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/save-article", post(article::save_article))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir))
        .nest_service(PUBLIC_PREFIX, ServeDir::new(state.store.dir()))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}
