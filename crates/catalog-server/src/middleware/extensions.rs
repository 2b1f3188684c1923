//! Extension traits for `axum::Router` to easily apply middleware layers.

use axum::Router;
use axum::extract::Request;
use axum::middleware::{Next, from_fn};
use tower::ServiceBuilder;

use crate::extract::InputValidity;
use crate::middleware::observability::{
    create_propagate_request_id_layer, create_request_id_layer, create_trace_layer,
};
use crate::middleware::observer::{RequestContext, RequestObserver, ResponseContext};

/// Extension trait for `axum::`[`Router`] for layering middleware.
pub trait RouterExt<S> {
    /// Wraps every route in the given [`RequestObserver`].
    ///
    /// For each request, the observer's pre-execution block is logged, the
    /// handler runs, then the post-execution block is logged with the final
    /// status and input-validity flag. The two phases are sequential on the
    /// same call chain, so the before block always precedes the handler and
    /// the after block always follows it.
    ///
    /// The validity flag comes from the response's [`InputValidity`]
    /// extension; responses without it count as valid.
    fn with_request_observer(self, observer: RequestObserver) -> Self;

    /// Layers [`SetRequestId`], [`Trace`] and [`PropagateRequestId`] middlewares.
    ///
    /// This middleware stack provides observability features:
    /// - Generates unique request IDs
    /// - Adds structured logging for requests
    /// - Propagates request IDs through the request lifecycle
    ///
    /// [`SetRequestId`]: tower_http::request_id::SetRequestIdLayer
    /// [`Trace`]: tower_http::trace::TraceLayer
    /// [`PropagateRequestId`]: tower_http::request_id::PropagateRequestIdLayer
    fn with_observability_layer(self) -> Self;
}

impl<S> RouterExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_request_observer(self, observer: RequestObserver) -> Self {
        let observe = from_fn(move |request: Request, next: Next| {
            let observer = observer.clone();
            async move {
                observer.on_before_execute(&RequestContext::new());

                let response = next.run(request).await;

                let input_valid = response
                    .extensions()
                    .get::<InputValidity>()
                    .map_or(true, |validity| validity.0);
                observer.on_after_execute(&ResponseContext::new(response.status(), input_valid));

                response
            }
        });

        self.layer(ServiceBuilder::new().layer(observe))
    }

    fn with_observability_layer(self) -> Self {
        // Apply layers in reverse order (last layer wraps first)
        self.layer(create_propagate_request_id_layer())
            .layer(create_trace_layer())
            .layer(create_request_id_layer())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum_test::TestServer;
    use serde::Deserialize;
    use validator::Validate;

    use super::*;
    use crate::extract::ValidateJson;
    use crate::middleware::observer::LogSink;
    use crate::validate::validate_first_letter_uppercase;

    #[derive(Default)]
    struct RecordingSink {
        lines: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl LogSink for RecordingSink {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_owned());
        }
    }

    #[derive(Debug, Deserialize, Validate)]
    struct CreateProduct {
        #[validate(custom(function = "validate_first_letter_uppercase"))]
        name: String,
    }

    async fn list() -> &'static str {
        "ok"
    }

    async fn create(ValidateJson(product): ValidateJson<CreateProduct>) -> String {
        product.name
    }

    fn observed_server() -> anyhow::Result<(TestServer, Arc<RecordingSink>)> {
        let sink = Arc::new(RecordingSink::default());
        let router = Router::new()
            .route("/products", get(list))
            .route("/products", post(create))
            .with_request_observer(RequestObserver::new(sink.clone()));
        Ok((TestServer::new(router)?, sink))
    }

    #[tokio::test]
    async fn before_block_precedes_after_block() -> anyhow::Result<()> {
        let (server, sink) = observed_server()?;

        server.get("/products").await.assert_status(StatusCode::OK);

        let lines = sink.lines();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "### Executing -> on_before_execute");
        assert_eq!(lines[5], "### Executing -> on_after_execute");
        Ok(())
    }

    #[tokio::test]
    async fn valid_request_is_reported_valid() -> anyhow::Result<()> {
        let (server, sink) = observed_server()?;

        let response = server
            .post("/products")
            .json(&serde_json::json!({ "name": "Apple" }))
            .await;
        response.assert_status(StatusCode::OK);

        let lines = sink.lines();
        assert_eq!(lines[3], "StatusCode: 200");
        assert_eq!(lines[8], "InputValid: true");
        Ok(())
    }

    #[tokio::test]
    async fn rejected_request_is_reported_invalid() -> anyhow::Result<()> {
        let (server, sink) = observed_server()?;

        let response = server
            .post("/products")
            .json(&serde_json::json!({ "name": "apple" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let lines = sink.lines();
        assert_eq!(lines[8], "InputValid: false");
        Ok(())
    }

    #[tokio::test]
    async fn every_request_gets_its_own_pair_of_blocks() -> anyhow::Result<()> {
        let (server, sink) = observed_server()?;

        server.get("/products").await.assert_status(StatusCode::OK);
        server.get("/products").await.assert_status(StatusCode::OK);

        let lines = sink.lines();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[10], "### Executing -> on_before_execute");
        assert_eq!(lines[15], "### Executing -> on_after_execute");
        Ok(())
    }

    #[tokio::test]
    async fn observability_layer_composes() -> anyhow::Result<()> {
        let router: Router = Router::new()
            .route("/products", get(list))
            .with_observability_layer();
        let server = TestServer::new(router)?;

        let response = server.get("/products").await;
        response.assert_status(StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        Ok(())
    }
}
