//! Request ID and HTTP tracing layers.

use axum::http::header;
use tower_http::request_id::MakeRequestUuid;
use tower_http::trace::TraceLayer;

/// Creates request ID maker for generating unique request IDs.
pub fn create_request_id_layer() -> tower_http::request_id::SetRequestIdLayer<MakeRequestUuid> {
    tower_http::request_id::SetRequestIdLayer::new(
        header::HeaderName::from_static("x-request-id"),
        MakeRequestUuid,
    )
}

/// Creates trace layer for HTTP logging.
pub fn create_trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
}

/// Creates request ID propagation layer.
pub fn create_propagate_request_id_layer() -> tower_http::request_id::PropagateRequestIdLayer {
    tower_http::request_id::PropagateRequestIdLayer::new(header::HeaderName::from_static(
        "x-request-id",
    ))
}
