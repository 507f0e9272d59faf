//! Builders for domain records used across tests.
//!
//! Numbers are filled with plausible Northwind values so tests only spell
//! out the fields they assert on.

use rust_decimal_macros::dec;

use crate::domain::{Category, CategoryId, NewProduct, Product, ProductId, SupplierId};

/// A stored [`Category`].
pub fn category(id: i32, name: &str, description: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// A stored, active [`Product`].
pub fn product(id: i32, name: &str, category: i32, supplier: i32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        quantity_per_unit: "10 boxes x 20 bags".to_string(),
        unit_price: dec!(18.00),
        units_in_stock: 39,
        units_on_order: 0,
        reorder_level: 10,
        discontinued: false,
        category_id: CategoryId::new(category),
        supplier_id: SupplierId::new(supplier),
    }
}

/// An active [`NewProduct`] ready to insert.
pub fn new_product(name: &str, category: i32, supplier: i32) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        quantity_per_unit: "24 - 12 oz bottles".to_string(),
        unit_price: dec!(19.00),
        units_in_stock: 17,
        units_on_order: 40,
        reorder_level: 25,
        discontinued: false,
        category_id: CategoryId::new(category),
        supplier_id: SupplierId::new(supplier),
    }
}
