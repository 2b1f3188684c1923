//! Validation outcome and field metadata value types.

use std::borrow::Cow;
use std::fmt;

use validator::ValidationError;

/// Identifies the field a rule is currently checking.
///
/// Carries the field's declared name only. Rules use it for constructing
/// failure messages and log lines, never for behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata<'a> {
    name: &'a str,
}

impl<'a> FieldMetadata<'a> {
    /// Creates metadata for the named field.
    #[inline]
    pub const fn new(name: &'a str) -> Self {
        Self { name }
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

impl fmt::Display for FieldMetadata<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The result of checking a single field value against one rule.
#[must_use = "outcomes do nothing unless inspected"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The value satisfies the rule (or was absent).
    Success,
    /// The value violates the rule.
    Failure {
        /// User-facing message describing the violation.
        message: Cow<'static, str>,
    },
}

impl ValidationOutcome {
    /// Creates a failure outcome with the given message.
    #[inline]
    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Returns `true` if the value passed the rule.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { message } => Some(message),
        }
    }

    /// Converts this outcome into a `validator`-compatible result.
    ///
    /// Failures become a [`ValidationError`] under the given code, with the
    /// rule's message preserved verbatim so derive-based validation surfaces
    /// the exact same text as direct rule invocation.
    pub fn into_result(self, code: &'static str) -> Result<(), ValidationError> {
        match self {
            Self::Success => Ok(()),
            Self::Failure { message } => {
                let mut error = ValidationError::new(code);
                error.message = Some(message);
                Err(error)
            }
        }
    }
}
