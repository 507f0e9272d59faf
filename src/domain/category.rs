//! Product categories.

use serde::Serialize;

use super::id::CategoryId;
use super::validation::{self, Validate, ValidationFailure};
use super::{EntityKind, Listed};

/// Longest category name the catalog accepts.
pub const NAME_MAX_CHARS: usize = 15;

/// A stored category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

/// A category that has not been inserted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

impl Category {
    /// The `name - description` line used by listings and confirmations.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} - {}", self.name, self.description)
    }
}

impl NewCategory {
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} - {}", self.name, self.description)
    }
}

impl Listed for Category {
    const KIND: EntityKind = EntityKind::Category;

    fn key(&self) -> i32 {
        self.id.get()
    }

    fn label(&self) -> &str {
        &self.name
    }
}

fn check(name: &str, description: &str) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    failures.extend(validation::required("CategoryName", name));
    failures.extend(validation::max_chars("CategoryName", name, NAME_MAX_CHARS));
    failures.extend(validation::required("Description", description));
    failures
}

impl Validate for NewCategory {
    fn validate(&self) -> Vec<ValidationFailure> {
        check(&self.name, &self.description)
    }
}

impl Validate for Category {
    fn validate(&self) -> Vec<ValidationFailure> {
        check(&self.name, &self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Violation;

    #[test]
    fn summary_joins_name_and_description() {
        let category = NewCategory {
            name: "Beverages".into(),
            description: "Soft drinks, coffee, tea".into(),
        };
        assert_eq!(category.summary(), "Beverages - Soft drinks, coffee, tea");
    }

    #[test]
    fn valid_category_has_no_failures() {
        let category = NewCategory {
            name: "Seafood".into(),
            description: "Seaweed and fish".into(),
        };
        assert!(category.validate().is_empty());
    }

    #[test]
    fn reports_one_failure_per_field() {
        let category = NewCategory {
            name: "Confections and sweets".into(),
            description: "   ".into(),
        };
        let failures = category.validate();

        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].field, "CategoryName");
        assert!(matches!(failures[0].violation, Violation::TooLong { max: 15, .. }));
        assert_eq!(failures[1].field, "Description");
        assert_eq!(failures[1].violation, Violation::Required);
    }
}
