//! Database model types for Diesel ORM.

use std::str::FromStr;

use diesel::prelude::*;
use rust_decimal::Decimal;

use super::schema::{categories, products, suppliers};
use crate::domain::{
    Category, CategoryId, NewCategory, NewProduct, NewSupplier, Product, ProductId, Supplier,
    SupplierId,
};
use crate::error::{Error, Result};

/// Database row for a category.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryRow {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Database row for a category (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct NewCategoryRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

/// Database row for a supplier.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = suppliers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SupplierRow {
    pub id: i32,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

/// Database row for a supplier (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = suppliers)]
pub struct NewSupplierRow<'a> {
    pub company_name: &'a str,
    pub contact_name: Option<&'a str>,
    pub city: Option<&'a str>,
    pub country: Option<&'a str>,
    pub phone: Option<&'a str>,
}

/// Database row for a product.
///
/// `unit_price` is the decimal's canonical text, which keeps every digit
/// SQLite's REAL would round away.
#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(belongs_to(CategoryRow, foreign_key = category_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub quantity_per_unit: String,
    pub unit_price: String,
    pub units_in_stock: i16,
    pub units_on_order: i16,
    pub reorder_level: i16,
    pub discontinued: bool,
    pub category_id: i32,
    pub supplier_id: i32,
}

/// Database row for a product (insertable), also used as the changeset for
/// a full overwrite.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = products)]
pub struct ProductValues<'a> {
    pub name: &'a str,
    pub quantity_per_unit: &'a str,
    pub unit_price: String,
    pub units_in_stock: i16,
    pub units_on_order: i16,
    pub reorder_level: i16,
    pub discontinued: bool,
    pub category_id: i32,
    pub supplier_id: i32,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::new(row.id),
            name: row.name,
            description: row.description,
        }
    }
}

impl<'a> From<&'a NewCategory> for NewCategoryRow<'a> {
    fn from(category: &'a NewCategory) -> Self {
        Self {
            name: &category.name,
            description: &category.description,
        }
    }
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Self {
            id: SupplierId::new(row.id),
            company_name: row.company_name,
            contact_name: row.contact_name,
            city: row.city,
            country: row.country,
            phone: row.phone,
        }
    }
}

impl<'a> From<&'a NewSupplier> for NewSupplierRow<'a> {
    fn from(supplier: &'a NewSupplier) -> Self {
        Self {
            company_name: &supplier.company_name,
            contact_name: supplier.contact_name.as_deref(),
            city: supplier.city.as_deref(),
            country: supplier.country.as_deref(),
            phone: supplier.phone.as_deref(),
        }
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = Error;

    fn try_from(row: ProductRow) -> Result<Self> {
        let unit_price = Decimal::from_str(&row.unit_price).map_err(|e| {
            Error::Parse(format!(
                "unit price '{}' of product {}: {e}",
                row.unit_price, row.id
            ))
        })?;
        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            quantity_per_unit: row.quantity_per_unit,
            unit_price,
            units_in_stock: row.units_in_stock,
            units_on_order: row.units_on_order,
            reorder_level: row.reorder_level,
            discontinued: row.discontinued,
            category_id: CategoryId::new(row.category_id),
            supplier_id: SupplierId::new(row.supplier_id),
        })
    }
}

impl<'a> From<&'a NewProduct> for ProductValues<'a> {
    fn from(product: &'a NewProduct) -> Self {
        Self {
            name: &product.name,
            quantity_per_unit: &product.quantity_per_unit,
            unit_price: product.unit_price.normalize().to_string(),
            units_in_stock: product.units_in_stock,
            units_on_order: product.units_on_order,
            reorder_level: product.reorder_level,
            discontinued: product.discontinued,
            category_id: product.category_id.get(),
            supplier_id: product.supplier_id.get(),
        }
    }
}

impl<'a> From<&'a Product> for ProductValues<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: &product.name,
            quantity_per_unit: &product.quantity_per_unit,
            unit_price: product.unit_price.normalize().to_string(),
            units_in_stock: product.units_in_stock,
            units_on_order: product.units_on_order,
            reorder_level: product.reorder_level,
            discontinued: product.discontinued,
            category_id: product.category_id.get(),
            supplier_id: product.supplier_id.get(),
        }
    }
}

/// Convert loaded product rows, failing on the first corrupt price.
pub fn products_from_rows(rows: Vec<ProductRow>) -> Result<Vec<Product>> {
    rows.into_iter().map(Product::try_from).collect()
}
