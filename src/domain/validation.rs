//! Field-level validation.
//!
//! Validation never stops at the first problem: every failing field yields
//! its own [`ValidationFailure`] so the operator sees the whole list at once.

use std::fmt;

/// What is wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The field is blank.
    Required,
    /// The field is longer than the column allows.
    TooLong { max: usize, actual: usize },
    /// Another record already uses this name.
    DuplicateName,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::TooLong { max, actual } => {
                write!(f, "must be at most {max} characters (got {actual})")
            }
            Self::DuplicateName => f.write_str("Name exists"),
        }
    }
}

/// One failed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: &'static str,
    pub violation: Violation,
}

impl ValidationFailure {
    #[must_use]
    pub const fn new(field: &'static str, violation: Violation) -> Self {
        Self { field, violation }
    }

    #[must_use]
    pub const fn duplicate_name(field: &'static str) -> Self {
        Self::new(field, Violation::DuplicateName)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.field, self.violation)
    }
}

/// Records that can check their own fields.
pub trait Validate {
    /// Every failed field, empty when the record is acceptable.
    fn validate(&self) -> Vec<ValidationFailure>;
}

pub(crate) fn required(field: &'static str, value: &str) -> Option<ValidationFailure> {
    value
        .trim()
        .is_empty()
        .then(|| ValidationFailure::new(field, Violation::Required))
}

pub(crate) fn max_chars(field: &'static str, value: &str, max: usize) -> Option<ValidationFailure> {
    let actual = value.chars().count();
    (actual > max).then(|| ValidationFailure::new(field, Violation::TooLong { max, actual }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_renders_field_and_reason() {
        let failure = ValidationFailure::duplicate_name("CategoryName");
        assert_eq!(failure.to_string(), "CategoryName : Name exists");
    }

    #[test]
    fn required_rejects_whitespace() {
        assert!(required("Description", " \t").is_some());
        assert!(required("Description", "x").is_none());
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        // 15 characters, more than 15 bytes
        let name = "Guaraná Fantást";
        assert!(max_chars("CategoryName", name, 15).is_none());
        let failure = max_chars("CategoryName", "Guaraná Fantásti", 15).unwrap();
        assert_eq!(failure.violation, Violation::TooLong { max: 15, actual: 16 });
    }
}
