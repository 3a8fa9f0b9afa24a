//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
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
        // Temple roster
        .route("/temples", get(handlers::list_temples))
        // Prediction endpoints
        .route(
            "/temples/{temple_id}/predictions/day",
            get(handlers::get_day_predictions),
        )
        .route(
            "/temples/{temple_id}/predictions/week",
            get(handlers::get_week_predictions),
        )
        .route(
            "/temples/{temple_id}/best-slot",
            get(handlers::get_best_slot),
        )
        // Analytics
        .route("/analytics", get(handlers::get_analytics));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
