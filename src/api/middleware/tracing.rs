//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates the request tracing layer.
///
/// Opens an `INFO` span per request (method, URI, version) and logs the status
/// with latency in milliseconds on response. Provider attempts logged by the
/// services nest inside this span, so one shorten call reads as a unit:
///
/// ```text
/// INFO request{method=POST uri=/api/shorten version=HTTP/1.1}: link_relay::application::services::shorten_service: Shortened URL provider=is.gd
/// INFO request{method=POST uri=/api/shorten version=HTTP/1.1}: tower_http::trace::on_response: finished processing request latency=412 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
