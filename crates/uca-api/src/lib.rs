//! UCA API /v1: REST surface over the submission workflow
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use state::AppState;

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/analyze", post(handlers::analyze))
        .route("/v1/report", get(handlers::report))
        .route("/v1/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(axum::middleware::from_fn(middleware::request_trace))
        .layer(middleware::cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(addr: &str, state: Arc<AppState>) {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("UCA API listening on {}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
