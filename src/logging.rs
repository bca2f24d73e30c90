use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Level, event};

/// Logs one line per request with a generated request id, the matched route
/// template, and the latency. Severity follows the response status class.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4();
    let method = req.method().clone();
    let path = match req.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_string(),
        None => req.uri().path().to_string(),
    };

    let start = Instant::now();
    let response = next.run(req).await;
    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        event!(
            Level::ERROR,
            %request_id, %method, %path,
            status = status.as_u16(),
            latency_ms,
            "request failed"
        );
    } else if status.is_client_error() {
        event!(
            Level::WARN,
            %request_id, %method, %path,
            status = status.as_u16(),
            latency_ms,
            "request rejected"
        );
    } else {
        event!(
            Level::INFO,
            %request_id, %method, %path,
            status = status.as_u16(),
            latency_ms,
            "request completed"
        );
    }

    response
}
