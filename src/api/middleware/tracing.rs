//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

/// Creates a tracing middleware tagged with the serving component.
///
/// Each request gets an `INFO` span carrying `service`, method and path;
/// responses are logged at `INFO` with latency in milliseconds and 5xx
/// responses additionally at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{service="shortener" method=POST path=/api/shorten}: finished processing request latency=1 ms status=201
/// ```
pub fn layer(
    service: &'static str,
) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, impl Fn(&Request<Body>) -> Span + Clone>
{
    TraceLayer::new_for_http()
        .make_span_with(move |request: &Request<Body>| {
            tracing::info_span!(
                "request",
                service,
                method = %request.method(),
                path = %request.uri().path(),
            )
        })
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}
