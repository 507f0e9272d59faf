//! Catalog domain: categories, suppliers, products and their field rules.
//!
//! - [`category`] - product groupings, unique by name
//! - [`supplier`] - companies that ship products
//! - [`product`] - stocked items referencing one category and one supplier
//! - [`validation`] - field-level checks run before anything is persisted

pub mod category;
pub mod id;
pub mod product;
pub mod supplier;
pub mod validation;

use std::fmt;

use serde::Serialize;

pub use category::{Category, NewCategory};
pub use id::{CategoryId, ProductId, SupplierId};
pub use product::{NewProduct, Product};
pub use supplier::{NewSupplier, Supplier};
pub use validation::{Validate, ValidationFailure, Violation};

/// The three kinds of record the catalog holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Category,
    Supplier,
    Product,
}

impl EntityKind {
    /// Capitalized name for the start of a sentence.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Supplier => "Supplier",
            Self::Product => "Product",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Category => "category",
            Self::Supplier => "supplier",
            Self::Product => "product",
        };
        f.write_str(name)
    }
}

/// A record that can appear as one line of a selection menu.
pub trait Listed {
    const KIND: EntityKind;

    /// Raw identifier the operator types to pick this record.
    fn key(&self) -> i32;

    /// Text shown next to the identifier.
    fn label(&self) -> &str;
}

/// A record together with the products it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct WithProducts<T> {
    pub entity: T,
    pub products: Vec<Product>,
}

impl<T> WithProducts<T> {
    /// Products that are still being sold, ordered by name.
    #[must_use]
    pub fn active_products(&self) -> Vec<&Product> {
        let mut active: Vec<&Product> = self.products.iter().filter(|p| !p.discontinued).collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{category, product};

    #[test]
    fn entity_kind_displays_lowercase() {
        assert_eq!(EntityKind::Category.to_string(), "category");
        assert_eq!(EntityKind::Supplier.to_string(), "supplier");
        assert_eq!(EntityKind::Product.to_string(), "product");
    }

    #[test]
    fn active_products_skip_discontinued_and_sort_by_name() {
        let mut chang = product(2, "Chang", 1, 1);
        let chai = product(1, "Chai", 1, 1);
        let mut guarana = product(24, "Guaraná Fantástica", 1, 10);
        guarana.discontinued = true;
        chang.discontinued = false;

        let owned = WithProducts {
            entity: category(1, "Beverages", "Soft drinks, coffees, teas"),
            products: vec![guarana, chang, chai],
        };

        let names: Vec<&str> = owned
            .active_products()
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Chai", "Chang"]);
    }
}
