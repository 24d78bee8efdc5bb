use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Header name for trace ID.
pub const TRACE_ID_HEADER: &str = "x-trace-id";
/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request tracing state for one request.
#[derive(Debug, Clone)]
pub struct TracingState {
    /// Trace ID, propagated from the caller when present.
    pub trace_id: String,
    /// Request ID, propagated from the caller when present.
    pub request_id: String,
    /// When the request started.
    pub start_time: std::time::Instant,
}

impl TracingState {
    /// Create a new tracing state with fresh IDs.
    pub fn new() -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string(),
            request_id: Uuid::new_v4().to_string(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Build from incoming headers, generating whatever is missing.
    pub fn from_request(req: &Request) -> Self {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let mut state = Self::new();
        if let Some(trace_id) = header(TRACE_ID_HEADER) {
            state.trace_id = trace_id;
        }
        if let Some(request_id) = header(REQUEST_ID_HEADER) {
            state.request_id = request_id;
        }
        state
    }

    /// Get elapsed time since request start.
    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}

impl Default for TracingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Middleware that tags each request with trace and request IDs and echoes
/// them on the response.
pub async fn tracing_middleware(req: Request, next: Next) -> Response {
    let state = TracingState::from_request(&req);

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut response = next.run(req).await;

    tracing::debug!(
        request_id = %state.request_id,
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = state.elapsed().as_millis() as u64,
        "Handled request"
    );

    if let Ok(val) = HeaderValue::from_str(&state.trace_id) {
        response.headers_mut().insert(TRACE_ID_HEADER, val);
    }
    if let Ok(val) = HeaderValue::from_str(&state.request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, val);
    }

    response
}
