//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/`. Middleware: CORS (the slider UI runs
//! in a browser on another origin), request tracing.
//!
//! In production, a built slider UI can be served from disk (configurable
//! via `BUDGIE_WEB_DIR`). API routes take priority; unknown paths fall
//! through to the UI's `index.html` for client-side routing. If the
//! directory does not exist, only the API is served.

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/scenarios", get(handlers::scenario::list_scenarios))
        .route("/scenarios/{slug}", get(handlers::scenario::get_scenario))
        .route(
            "/scenarios/{slug}/allocation",
            put(handlers::scenario::update_allocation),
        )
        .route(
            "/scenarios/{slug}/budget",
            put(handlers::scenario::update_budget),
        )
        .route(
            "/scenarios/{slug}/reset",
            post(handlers::scenario::reset_scenario),
        )
        .route(
            "/scenarios/{slug}/narrative",
            post(handlers::narrative::generate_narrative),
        );

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve the built slider UI from disk if the directory exists.
    let web_dir = std::env::var("BUDGIE_WEB_DIR").unwrap_or_else(|_| "web/dist".to_string());
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "static UI serving enabled");
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
