use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};
use uuid::Uuid;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// CORS headers attached to every response of one route
#[derive(Debug, Clone)]
pub(crate) struct CorsPolicy {
    origin: HeaderValue,
    methods: HeaderValue,
}

impl CorsPolicy {
    pub(crate) fn new(origin: &str, methods: &'static str) -> Self {
        let origin = HeaderValue::from_str(origin).unwrap_or_else(|_| {
            warn!("Invalid allow_origin {:?}, falling back to \"*\"", origin);
            HeaderValue::from_static("*")
        });
        Self {
            origin,
            methods: HeaderValue::from_static(methods),
        }
    }
}

pub(crate) async fn apply_cors(
    State(policy): State<CorsPolicy>,
    req: Request,
    next: Next,
) -> Response {
    let mut resp = next.run(req).await;
    let headers = resp.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, policy.origin);
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, policy.methods);
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    resp
}

/// Assign or propagate a request id and log one line per request
pub(crate) async fn request_tracing(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= 128)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut resp = next.run(req).await;

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    resp
}
