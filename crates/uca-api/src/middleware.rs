//! Request middleware: permissive CORS and a per-request trace span.
use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tower_http::cors::CorsLayer;

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}

pub async fn request_trace(req: Request<Body>, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4();
    tracing::debug!(%request_id, method = %req.method(), uri = %req.uri(), "request");
    next.run(req).await
}
