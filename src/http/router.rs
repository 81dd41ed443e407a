//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Dataset lifecycle
        .route("/datasets", post(handlers::create_dataset))
        .route("/datasets", get(handlers::list_datasets))
        .route("/datasets/{dataset_id}", get(handlers::get_dataset))
        .route("/datasets/{dataset_id}", delete(handlers::delete_dataset))
        .route(
            "/datasets/{dataset_id}/regenerate",
            post(handlers::regenerate_dataset),
        )
        // Analytics endpoints
        .route("/datasets/{dataset_id}/heatmap", get(handlers::get_heatmap))
        .route("/datasets/{dataset_id}/insights", get(handlers::get_insights))
        .route("/datasets/{dataset_id}/profiles", get(handlers::get_profiles))
        .route("/forecast", get(handlers::get_forecast));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
