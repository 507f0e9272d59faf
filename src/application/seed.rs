//! Demo catalog seeding.
//!
//! Loads a small slice of the Northwind sample catalog through the store
//! ports, so any [`CatalogStore`] can be seeded the same way. Seeding only
//! touches an empty store; running it twice is harmless.

use rust_decimal_macros::dec;
use tracing::info;

use crate::domain::{CategoryId, NewCategory, NewProduct, NewSupplier, SupplierId};
use crate::error::Result;
use crate::port::outbound::store::{CatalogStore, ProductFilter, SortKey};

/// Rows inserted by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Seeded {
    pub suppliers: usize,
    pub categories: usize,
    pub products: usize,
}

impl Seeded {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suppliers == 0 && self.categories == 0 && self.products == 0
    }
}

struct ProductRow {
    name: &'static str,
    quantity_per_unit: &'static str,
    unit_price: rust_decimal::Decimal,
    units_in_stock: i16,
    units_on_order: i16,
    reorder_level: i16,
    discontinued: bool,
    category: usize,
    supplier: usize,
}

fn suppliers() -> Vec<NewSupplier> {
    let supplier = |name: &str, contact: &str, city: &str, country: &str, phone: &str| NewSupplier {
        company_name: name.to_string(),
        contact_name: Some(contact.to_string()),
        city: Some(city.to_string()),
        country: Some(country.to_string()),
        phone: Some(phone.to_string()),
    };
    vec![
        supplier("Exotic Liquids", "Charlotte Cooper", "London", "UK", "(171) 555-2222"),
        supplier(
            "New Orleans Cajun Delights",
            "Shelley Burke",
            "New Orleans",
            "USA",
            "(100) 555-4822",
        ),
        supplier(
            "Grandma Kelly's Homestead",
            "Regina Murphy",
            "Ann Arbor",
            "USA",
            "(313) 555-5735",
        ),
        supplier("Tokyo Traders", "Yoshi Nagase", "Tokyo", "Japan", "(03) 3555-5011"),
    ]
}

fn categories() -> Vec<NewCategory> {
    let category = |name: &str, description: &str| NewCategory {
        name: name.to_string(),
        description: description.to_string(),
    };
    vec![
        category("Beverages", "Soft drinks, coffees, teas, beers, and ales"),
        category(
            "Condiments",
            "Sweet and savory sauces, relishes, spreads, and seasonings",
        ),
        category("Confections", "Desserts, candies, and sweet breads"),
    ]
}

// `category` and `supplier` index into the lists above.
fn products() -> Vec<ProductRow> {
    vec![
        ProductRow {
            name: "Chai",
            quantity_per_unit: "10 boxes x 20 bags",
            unit_price: dec!(18.00),
            units_in_stock: 39,
            units_on_order: 0,
            reorder_level: 10,
            discontinued: false,
            category: 0,
            supplier: 0,
        },
        ProductRow {
            name: "Chang",
            quantity_per_unit: "24 - 12 oz bottles",
            unit_price: dec!(19.00),
            units_in_stock: 17,
            units_on_order: 40,
            reorder_level: 25,
            discontinued: false,
            category: 0,
            supplier: 0,
        },
        ProductRow {
            name: "Aniseed Syrup",
            quantity_per_unit: "12 - 550 ml bottles",
            unit_price: dec!(10.00),
            units_in_stock: 13,
            units_on_order: 70,
            reorder_level: 25,
            discontinued: false,
            category: 1,
            supplier: 0,
        },
        ProductRow {
            name: "Chef Anton's Cajun Seasoning",
            quantity_per_unit: "48 - 6 oz jars",
            unit_price: dec!(22.00),
            units_in_stock: 53,
            units_on_order: 0,
            reorder_level: 0,
            discontinued: false,
            category: 1,
            supplier: 1,
        },
        ProductRow {
            name: "Chef Anton's Gumbo Mix",
            quantity_per_unit: "36 boxes",
            unit_price: dec!(21.35),
            units_in_stock: 0,
            units_on_order: 0,
            reorder_level: 0,
            discontinued: true,
            category: 1,
            supplier: 1,
        },
        ProductRow {
            name: "Grandma's Boysenberry Spread",
            quantity_per_unit: "12 - 8 oz jars",
            unit_price: dec!(25.00),
            units_in_stock: 120,
            units_on_order: 0,
            reorder_level: 25,
            discontinued: false,
            category: 1,
            supplier: 2,
        },
    ]
}

/// Insert the demo catalog into `store` unless it already holds any
/// category, supplier or product.
pub fn seed<S: CatalogStore + ?Sized>(store: &S) -> Result<Seeded> {
    let populated = !store.list_categories(SortKey::Id)?.is_empty()
        || !store.list_suppliers(SortKey::Id)?.is_empty()
        || !store.list_products(ProductFilter::All, SortKey::Id)?.is_empty();
    if populated {
        info!("Catalog already populated, skipping seed");
        return Ok(Seeded::default());
    }

    let supplier_ids = suppliers()
        .iter()
        .map(|s| store.insert_supplier(s))
        .collect::<Result<Vec<SupplierId>>>()?;
    let category_ids = categories()
        .iter()
        .map(|c| store.insert_category(c))
        .collect::<Result<Vec<CategoryId>>>()?;

    let rows = products();
    for row in &rows {
        store.insert_product(&NewProduct {
            name: row.name.to_string(),
            quantity_per_unit: row.quantity_per_unit.to_string(),
            unit_price: row.unit_price,
            units_in_stock: row.units_in_stock,
            units_on_order: row.units_on_order,
            reorder_level: row.reorder_level,
            discontinued: row.discontinued,
            category_id: category_ids[row.category],
            supplier_id: supplier_ids[row.supplier],
        })?;
    }

    let seeded = Seeded {
        suppliers: supplier_ids.len(),
        categories: category_ids.len(),
        products: rows.len(),
    };
    info!(?seeded, "Catalog seeded");
    Ok(seeded)
}
