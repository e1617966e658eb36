use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Duration;

/// Delays `/api` responses by the configured amount, so that loading states
/// and late responses can be observed against the mock backend.
pub async fn mock_latency(
    State(latency): State<Duration>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !latency.is_zero() && req.uri().path().starts_with("/api/") {
        tokio::time::sleep(latency).await;
    }
    next.run(req).await
}
