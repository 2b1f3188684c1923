//! The validation rule seam and explicit field-to-rule composition.

use std::borrow::Cow;

use super::{FieldMetadata, ValidationOutcome};

/// A single-field validation check.
///
/// Implementations must be pure and stateless: the outcome depends only on
/// the value and metadata passed in, and repeated invocations with the same
/// input yield the same outcome. `value` is `None` when the field was absent
/// from the input entirely.
pub trait ValidationRule: Send + Sync {
    /// Checks one field value, returning [`ValidationOutcome::Success`] or a
    /// failure carrying a user-facing message.
    fn validate(&self, value: Option<&str>, field: &FieldMetadata<'_>) -> ValidationOutcome;
}

/// Rules registered against field names by explicit composition.
///
/// There is no discovery mechanism: a rule applies to a field if and only if
/// it was registered for that field's name. Fields with no registered rules
/// always pass.
///
/// # Examples
///
/// ```
/// use catalog_server::validate::{FieldRules, FirstLetterUppercase};
///
/// let rules = FieldRules::new().rule("name", FirstLetterUppercase);
///
/// assert!(rules.check("name", Some("Apple")).is_success());
/// assert!(!rules.check("name", Some("apple")).is_success());
/// assert!(rules.check("description", Some("anything")).is_success());
/// ```
#[must_use]
#[derive(Default)]
pub struct FieldRules {
    rules: Vec<(Cow<'static, str>, Box<dyn ValidationRule>)>,
}

impl FieldRules {
    /// Creates an empty rule set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule for the named field.
    ///
    /// Multiple rules may be registered for the same field; they are checked
    /// in registration order.
    pub fn rule(
        mut self,
        field: impl Into<Cow<'static, str>>,
        rule: impl ValidationRule + 'static,
    ) -> Self {
        self.rules.push((field.into(), Box::new(rule)));
        self
    }

    /// Returns `true` if at least one rule is registered for the field.
    pub fn is_registered(&self, field: &str) -> bool {
        self.rules.iter().any(|(name, _)| name == field)
    }

    /// Checks one field value against every rule registered for it.
    ///
    /// Returns the first failure, or [`ValidationOutcome::Success`] when all
    /// rules pass or none are registered.
    pub fn check(&self, field: &str, value: Option<&str>) -> ValidationOutcome {
        let metadata = FieldMetadata::new(field);

        for (name, rule) in &self.rules {
            if name != field {
                continue;
            }
            let outcome = rule.validate(value, &metadata);
            if !outcome.is_success() {
                return outcome;
            }
        }

        ValidationOutcome::Success
    }

    /// Checks several field values at once, returning the failures.
    ///
    /// Each entry pairs a field name with its (possibly absent) value. The
    /// returned list contains one entry per failing field, in input order.
    pub fn check_all<'a>(
        &self,
        values: &[(&'a str, Option<&str>)],
    ) -> Vec<(&'a str, ValidationOutcome)> {
        values
            .iter()
            .filter_map(|(field, value)| {
                let outcome = self.check(field, *value);
                (!outcome.is_success()).then_some((*field, outcome))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::FirstLetterUppercase;

    struct NonEmpty;

    impl ValidationRule for NonEmpty {
        fn validate(&self, value: Option<&str>, field: &FieldMetadata<'_>) -> ValidationOutcome {
            match value {
                Some(value) if !value.is_empty() => ValidationOutcome::Success,
                _ => ValidationOutcome::failure(format!("{field} must not be empty")),
            }
        }
    }

    #[test]
    fn unregistered_fields_pass() {
        let rules = FieldRules::new().rule("name", FirstLetterUppercase);

        assert!(!rules.is_registered("description"));
        assert!(rules.check("description", Some("lowercase")).is_success());
    }

    #[test]
    fn check_dispatches_to_registered_rule() {
        let rules = FieldRules::new().rule("name", FirstLetterUppercase);

        assert!(rules.is_registered("name"));
        assert!(rules.check("name", Some("Valid")).is_success());
        assert_eq!(
            rules.check("name", Some("invalid")).message(),
            Some("The first letter must be uppercase.")
        );
    }

    #[test]
    fn first_failure_wins_in_registration_order() {
        let rules = FieldRules::new()
            .rule("name", NonEmpty)
            .rule("name", FirstLetterUppercase);

        let outcome = rules.check("name", Some(""));
        assert_eq!(outcome.message(), Some("name must not be empty"));
    }

    #[test]
    fn check_all_reports_only_failures() {
        let rules = FieldRules::new()
            .rule("name", FirstLetterUppercase)
            .rule("brand", FirstLetterUppercase);

        let failures = rules.check_all(&[
            ("name", Some("lower")),
            ("brand", Some("Upper")),
            ("stock", Some("unchecked")),
        ]);

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "name");
    }
}
