//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Instant;

/// Install the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "ytt_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "ytt_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "ytt_http_requests_in_flight";

    // Transcript metrics
    pub const TRANSCRIPTS_SERVED_TOTAL: &str = "ytt_transcripts_served_total";
    pub const TRANSCRIPT_FETCH_FAILURES_TOTAL: &str = "ytt_transcript_fetch_failures_total";
    pub const TITLE_FALLBACKS_TOTAL: &str = "ytt_title_fallbacks_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a transcript served in the given format.
pub fn record_transcript_served(format: &str) {
    let labels = [("format", format.to_string())];
    counter!(names::TRANSCRIPTS_SERVED_TOTAL, &labels).increment(1);
}

/// Record a failed transcript request (5xx).
pub fn record_transcript_failure() {
    counter!(names::TRANSCRIPT_FETCH_FAILURES_TOTAL).increment(1);
}

/// Record a title lookup that fell back to the video ID.
pub fn record_title_fallback() {
    counter!(names::TITLE_FALLBACKS_TOTAL).increment(1);
}

/// Collapse unknown paths into one label to keep cardinality bounded.
fn sanitize_path(path: &str) -> String {
    static KNOWN: OnceLock<regex_lite::Regex> = OnceLock::new();
    let known = KNOWN.get_or_init(|| {
        regex_lite::Regex::new(r"^/(get_transcript|health|healthz|metrics)$")
            .expect("valid path regex")
    });

    if known.is_match(path) {
        path.to_string()
    } else {
        "/:other".to_string()
    }
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}
