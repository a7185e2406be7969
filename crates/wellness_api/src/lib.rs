//! Stateless HTTP facade over the `wellness_core` engine.
//!
//! The API owns no data: every request carries the full input snapshot
//! (or entry rows) in its body and every response is a derived view.
//! Persistence and authentication belong to the surrounding platform.

use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod routes;

pub fn build_router() -> Router {
    Router::new()
        .nest(
            "/api/v1",
            Router::new()
                .route("/progress/stats", post(routes::progress_stats))
                .route("/progress/charts", post(routes::progress_charts))
                .route("/nutrition/sorted", post(routes::nutrition_sorted))
                .route("/journal/export", post(routes::journal_export))
                .route("/journal/prepare", post(routes::journal_prepare))
                .route("/health", get(routes::health)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CorsLayer::permissive())
}
