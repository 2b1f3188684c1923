//! Request observation: fixed log blocks around handler execution.
//!
//! [`RequestObserver`] emits one block of log lines immediately before a
//! handler runs and one immediately after, mirroring the two phases of a
//! request's lifecycle. The observer holds no state across requests and
//! makes no control-flow decisions; it only reads the context it is handed
//! and writes lines to its [`LogSink`].

use std::sync::Arc;

use axum::http::StatusCode;
use jiff::Zoned;

use super::TRACING_TARGET_OBSERVER;

/// Marker emitted at the start of the pre-execution block.
const BEFORE_MARKER: &str = "### Executing -> on_before_execute";

/// Marker emitted at the start of the post-execution block.
const AFTER_MARKER: &str = "### Executing -> on_after_execute";

/// Separator framing each block.
const SEPARATOR: &str = "############################################";

/// Destination for observer log lines.
///
/// Passed to [`RequestObserver::new`] explicitly; the observer never reaches
/// for a global logger. Implementations decide severity handling, formatting,
/// and delivery; the observer treats every call as fire-and-forget.
pub trait LogSink: Send + Sync {
    /// Writes one informational line.
    fn info(&self, message: &str);
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }
}

/// Default sink forwarding lines to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: TRACING_TARGET_OBSERVER, "{message}");
    }
}

/// Pre-execution view of a request.
///
/// Exposes the response-status placeholder as it stands before the handler
/// runs. The pipeline constructs one per request and discards it afterwards.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    status: StatusCode,
}

impl RequestContext {
    /// Creates the pre-execution view with the default status placeholder.
    ///
    /// The placeholder is `200 OK`, the response status a request carries
    /// before any handler has produced a response.
    #[inline]
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
        }
    }

    /// Creates the view with an explicit status placeholder.
    #[inline]
    pub fn with_status(status: StatusCode) -> Self {
        Self { status }
    }

    /// Returns the current response status placeholder.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl Default for RequestContext {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Post-execution view of a request.
///
/// Exposes the final response status and whether the request's input passed
/// validation.
#[derive(Debug, Clone, Copy)]
pub struct ResponseContext {
    status: StatusCode,
    input_valid: bool,
}

impl ResponseContext {
    /// Creates the post-execution view.
    #[inline]
    pub fn new(status: StatusCode, input_valid: bool) -> Self {
        Self {
            status,
            input_valid,
        }
    }

    /// Returns the final response status code.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns whether the request's input passed validation.
    #[inline]
    pub fn input_valid(&self) -> bool {
        self.input_valid
    }
}

/// Emits a fixed block of log lines before and after handler execution.
///
/// Stateless and reentrant: concurrent requests share only the sink, whose
/// concurrency discipline is its own. Cloning is cheap; clones share the
/// same sink.
#[derive(Clone)]
pub struct RequestObserver {
    sink: Arc<dyn LogSink>,
}

impl RequestObserver {
    /// Creates an observer writing to the given sink.
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// Logs the pre-execution block: marker, separator, current wall-clock
    /// time in long local format, the status placeholder, separator.
    pub fn on_before_execute(&self, context: &RequestContext) {
        self.sink.info(BEFORE_MARKER);
        self.sink.info(SEPARATOR);
        self.sink.info(&local_time());
        self.sink
            .info(&format!("StatusCode: {}", context.status().as_u16()));
        self.sink.info(SEPARATOR);
    }

    /// Logs the post-execution block: marker, separator, current wall-clock
    /// time, the input-validity flag, separator.
    pub fn on_after_execute(&self, context: &ResponseContext) {
        self.sink.info(AFTER_MARKER);
        self.sink.info(SEPARATOR);
        self.sink.info(&local_time());
        self.sink
            .info(&format!("InputValid: {}", context.input_valid()));
        self.sink.info(SEPARATOR);
    }
}

impl std::fmt::Debug for RequestObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestObserver").finish_non_exhaustive()
    }
}

/// Current wall-clock time in long local format, e.g. `1:45:30 PM`.
fn local_time() -> String {
    Zoned::now().strftime("%-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        lines: Mutex<Vec<String>>,
    }

    impl LogSink for RecordingSink {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_owned());
        }
    }

    fn observer_with_recorder() -> (RequestObserver, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let observer = RequestObserver::new(sink.clone());
        (observer, sink)
    }

    #[test]
    fn before_block_has_marker_time_and_status() {
        let (observer, sink) = observer_with_recorder();

        observer.on_before_execute(&RequestContext::new());

        let lines = sink.lines.lock().unwrap();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "### Executing -> on_before_execute");
        assert_eq!(lines[1], SEPARATOR);
        assert_eq!(lines[3], "StatusCode: 200");
        assert_eq!(lines[4], SEPARATOR);
    }

    #[test]
    fn after_block_reports_input_validity() {
        let (observer, sink) = observer_with_recorder();

        observer.on_after_execute(&ResponseContext::new(StatusCode::BAD_REQUEST, false));

        let lines = sink.lines.lock().unwrap();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "### Executing -> on_after_execute");
        assert_eq!(lines[3], "InputValid: false");
    }

    #[test]
    fn explicit_status_placeholder_is_logged() {
        let (observer, sink) = observer_with_recorder();

        observer.on_before_execute(&RequestContext::with_status(StatusCode::ACCEPTED));

        let lines = sink.lines.lock().unwrap();
        assert_eq!(lines[3], "StatusCode: 202");
    }

    #[test]
    fn repeated_invocations_emit_identical_blocks() {
        let (observer, sink) = observer_with_recorder();
        let context = ResponseContext::new(StatusCode::OK, true);

        observer.on_after_execute(&context);
        observer.on_after_execute(&context);

        let lines = sink.lines.lock().unwrap();
        assert_eq!(lines.len(), 10);
        // Time lines may differ across invocations; everything else must not.
        assert_eq!(lines[0], lines[5]);
        assert_eq!(lines[3], lines[8]);
    }

    #[test]
    fn local_time_is_long_local_format() {
        let time = local_time();
        assert!(time.ends_with("AM") || time.ends_with("PM"), "{time}");
        assert_eq!(time.matches(':').count(), 2);
    }
}
