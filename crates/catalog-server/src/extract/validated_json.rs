//! Validated JSON extractor with automatic validation.
//!
//! This module provides [`ValidateJson`], a JSON extractor that combines
//! deserialization with automatic validation using the `validator` crate.
//! Rejections stamp [`InputValidity`] into the response extensions so the
//! request observer can log whether the request's input was valid.

use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::Json;
use crate::handler::{Error, ErrorKind};

/// Whether the request's input passed validation.
///
/// Inserted into the response extensions by [`ValidationRejection`] when
/// extraction fails. A response without this extension means no extractor
/// rejected the input, i.e. the input was valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputValidity(pub bool);

/// JSON extractor with automatic validation.
///
/// Works with any type that implements both `serde::Deserialize` and
/// `validator::Validate`: the payload is deserialized first, then
/// `validate()` runs the declared field rules. Validation failures become
/// HTTP 400 responses carrying each failing rule's message verbatim.
///
/// Also see [`Json`].
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateJson<T>(pub T);

impl<T> ValidateJson<T> {
    /// Creates a new instance of [`ValidateJson`].
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner validated value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // First, deserialize the JSON
        let Json(data) = <Json<T> as FromRequest<S>>::from_request(req, state)
            .await
            .map_err(ValidationRejection)?;

        // Then validate the deserialized data
        data.validate().map_err(Error::from).map_err(ValidationRejection)?;
        Ok(Self::new(data))
    }
}

/// Rejection produced when extraction or validation fails.
///
/// Serializes like the inner [`Error`] and additionally marks the response
/// with [`InputValidity`]`(false)`.
#[derive(Debug)]
pub struct ValidationRejection(pub Error<'static>);

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        response.extensions_mut().insert(InputValidity(false));
        response
    }
}

/// Formats a single field error with a user-friendly message.
fn format_validation_error(field: &str, error: &validator::ValidationError) -> String {
    // Custom rule messages pass through verbatim.
    if let Some(custom_message) = &error.message {
        return custom_message.to_string();
    }

    let message = match error.code.as_ref() {
        "required" => "is required and cannot be empty".to_string(),
        "length" => "has invalid length".to_string(),
        "email" => "must be a valid email address".to_string(),
        "range" => "is out of valid range".to_string(),
        "url" => "must be a valid URL".to_string(),
        code => format!("failed validation: {}", code),
    };

    format!("Field '{}' {}", field, message)
}

impl From<ValidationErrors> for Error<'static> {
    fn from(errors: ValidationErrors) -> Self {
        let error_messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                let field = field.as_ref();
                field_errors
                    .iter()
                    .map(move |error| format_validation_error(field, error))
            })
            .collect();

        // Show validation details in the user-facing message
        let user_message = match error_messages.as_slice() {
            [] => "Validation failed".to_string(),
            [single_error] => single_error.clone(),
            multiple => multiple.join(". "),
        };

        tracing::warn!(
            errors = ?errors.field_errors(),
            "Request validation failed"
        );

        ErrorKind::BadRequest
            .with_message(user_message)
            .with_resource("request")
    }
}
