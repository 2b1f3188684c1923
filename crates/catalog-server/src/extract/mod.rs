//! Request extractors with validation and improved error handling.
//!
//! - [`Json`] - JSON deserialization with detailed rejection messages
//! - [`ValidateJson`] - JSON extraction with automatic field validation
//!
//! Both extractors reject with the crate's [`Error`] type, so failures reach
//! clients as structured JSON bodies. Validation rejections additionally mark
//! the response with [`InputValidity`] so the request observer can report
//! whether the request's input passed validation.
//!
//! [`Error`]: crate::handler::Error

mod json;
mod validated_json;

pub use self::json::Json;
pub use self::validated_json::{InputValidity, ValidateJson, ValidationRejection};
