//! Middleware for `axum::Router` and HTTP request processing.
//!
//! This module provides middleware for:
//! - Request observation (fixed log blocks before and after each handler)
//! - Observability (request IDs, structured HTTP tracing)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use axum::Router;
//! use catalog_server::middleware::{RequestObserver, RouterExt, TracingSink};
//!
//! let app: Router = Router::new()
//!     .with_request_observer(RequestObserver::new(TracingSink::default()))
//!     .with_observability_layer();
//! ```

mod extensions;
mod observability;
mod observer;

pub use extensions::RouterExt;
pub use observability::{
    create_propagate_request_id_layer, create_request_id_layer, create_trace_layer,
};
pub use observer::{LogSink, RequestContext, RequestObserver, ResponseContext, TracingSink};

// Tracing target constant for consistent logging.
pub const TRACING_TARGET_OBSERVER: &str = "catalog_server::middleware::observer";
