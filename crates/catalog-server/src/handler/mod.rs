//! HTTP error surface shared by extractors and middleware.
//!
//! Handlers and extractors in this crate report failures through a single
//! builder-style [`Error`] type that serializes to a JSON [`ErrorResponse`].
//! Validation failures surface as HTTP 400 with the offending rule's message;
//! they are values, never panics, and never abort request processing on
//! their own.

mod error;
mod response;

pub use self::error::{Error, ErrorKind, Result};
pub use self::response::ErrorResponse;
