use axum::{middleware, routing::get, Router};
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::handlers::pages;
use crate::system;

/// Page loaders plus the compiled frontend; unknown paths get `index.html`
/// so the client router can handle deep links.
pub fn configure_routes(frontend_dist: PathBuf) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // PAGE LOADERS
        // ========================================
        .route("/api/pages/directories", get(pages::directories_home))
        .route(
            "/api/pages/directories/:category",
            get(pages::category_listing),
        )
        .route("/api/pages/businesses/:slug", get(pages::business))
        .route(
            "/api/pages/businesses/:category/:slug",
            get(pages::business_in_category),
        )
        // ========================================
        // FRONTEND
        // ========================================
        .fallback_service(
            ServeDir::new(&frontend_dist).fallback(ServeFile::new(frontend_dist.join("index.html"))),
        )
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
}
