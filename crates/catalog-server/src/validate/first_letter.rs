//! Rule requiring an uppercase first character.

use validator::ValidationError;

use super::{FieldMetadata, ValidationOutcome, ValidationRule};

/// Failure message, kept byte-exact for client compatibility.
const FIRST_LETTER_MESSAGE: &str = "The first letter must be uppercase.";

/// Error code reported through the `validator` integration.
const FIRST_LETTER_CODE: &str = "first_letter_uppercase";

/// Validates that a string value's first character is already uppercase.
///
/// The check compares the first character with its uppercase mapping:
///
/// - Absent or empty values pass; absence of a value is not a violation.
/// - Characters that equal their own uppercase form pass. This includes
///   caseless characters such as digits and punctuation, so `"7up"` is
///   accepted.
/// - Everything else fails with the fixed message
///   `"The first letter must be uppercase."`.
///
/// A character whose uppercase mapping expands to multiple characters
/// (e.g. `'ß'`) never equals that mapping and therefore fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLetterUppercase;

impl ValidationRule for FirstLetterUppercase {
    fn validate(&self, value: Option<&str>, _field: &FieldMetadata<'_>) -> ValidationOutcome {
        let Some(value) = value else {
            return ValidationOutcome::Success;
        };
        let Some(first) = value.chars().next() else {
            return ValidationOutcome::Success;
        };

        let mut uppercased = first.to_uppercase();
        let unchanged = uppercased.next() == Some(first) && uppercased.next().is_none();

        if unchanged {
            ValidationOutcome::Success
        } else {
            ValidationOutcome::failure(FIRST_LETTER_MESSAGE)
        }
    }
}

/// Free-function form of [`FirstLetterUppercase`] for derive-based payloads.
///
/// Attach with `#[validate(custom(function = "validate_first_letter_uppercase"))]`.
pub fn validate_first_letter_uppercase(value: &str) -> Result<(), ValidationError> {
    FirstLetterUppercase
        .validate(Some(value), &FieldMetadata::new("value"))
        .into_result(FIRST_LETTER_CODE)
}
