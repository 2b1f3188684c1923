//! Field validation rules with explicit composition.
//!
//! This module provides the building blocks for per-field input validation:
//!
//! - [`ValidationRule`] - the polymorphic seam a single-field check implements
//! - [`FieldRules`] - explicit registration of rules against field names
//! - [`FirstLetterUppercase`] - rule requiring an uppercase first character
//!
//! Rules are pure and stateless: each invocation inspects one value and
//! returns a [`ValidationOutcome`], never panicking and never retaining
//! state across calls. For derive-based payloads, every rule also has a
//! free-function form compatible with `#[validate(custom(function = ...))]`.

mod first_letter;
mod outcome;
mod rule;

pub use self::first_letter::{FirstLetterUppercase, validate_first_letter_uppercase};
pub use self::outcome::{FieldMetadata, ValidationOutcome};
pub use self::rule::{FieldRules, ValidationRule};
