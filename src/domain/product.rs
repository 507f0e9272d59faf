//! Products.

use rust_decimal::Decimal;
use serde::Serialize;

use super::id::{CategoryId, ProductId, SupplierId};
use super::validation::{self, Validate, ValidationFailure};
use super::{EntityKind, Listed};

/// Longest product name the catalog accepts.
pub const NAME_MAX_CHARS: usize = 40;

/// Longest quantity-per-unit text the catalog accepts.
pub const QUANTITY_PER_UNIT_MAX_CHARS: usize = 20;

/// A stored product.
///
/// Prices and stock counts are never negative; the input parser folds
/// negative entries to their absolute value before they get here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity_per_unit: String,
    pub unit_price: Decimal,
    pub units_in_stock: i16,
    pub units_on_order: i16,
    pub reorder_level: i16,
    pub discontinued: bool,
    pub category_id: CategoryId,
    pub supplier_id: SupplierId,
}

/// A product that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub quantity_per_unit: String,
    pub unit_price: Decimal,
    pub units_in_stock: i16,
    pub units_on_order: i16,
    pub reorder_level: i16,
    pub discontinued: bool,
    pub category_id: CategoryId,
    pub supplier_id: SupplierId,
}

impl Listed for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn key(&self) -> i32 {
        self.id.get()
    }

    fn label(&self) -> &str {
        &self.name
    }
}

fn check(name: &str, quantity_per_unit: &str) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    failures.extend(validation::required("ProductName", name));
    failures.extend(validation::max_chars("ProductName", name, NAME_MAX_CHARS));
    failures.extend(validation::max_chars(
        "QuantityPerUnit",
        quantity_per_unit,
        QUANTITY_PER_UNIT_MAX_CHARS,
    ));
    failures
}

impl Validate for NewProduct {
    fn validate(&self) -> Vec<ValidationFailure> {
        check(&self.name, &self.quantity_per_unit)
    }
}

impl Validate for Product {
    fn validate(&self) -> Vec<ValidationFailure> {
        check(&self.name, &self.quantity_per_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::new_product;

    #[test]
    fn quantity_per_unit_is_free_text_within_width() {
        let mut product = new_product("Chai", 1, 1);
        product.quantity_per_unit = String::new();
        assert!(product.validate().is_empty());

        product.quantity_per_unit = "10 boxes x 20 bags, extra large".into();
        let failures = product.validate();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "QuantityPerUnit");
    }

    #[test]
    fn blank_name_is_required() {
        let product = new_product("  ", 1, 1);
        let failures = product.validate();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].to_string(), "ProductName : is required");
    }
}
