//! Handlers for the scripted listing commands.
//!
//! Same data and ordering as the interactive listings, rendered as tables
//! or JSON lines instead of console text.

use std::io::Write;

use serde::Serialize;
use tabled::Tabled;

use crate::adapter::inbound::cli::output::Output;
use crate::application::catalog::detail_lines;
use crate::domain::{Category, EntityKind, Product, ProductId, WithProducts};
use crate::error::{Result, StoreError};
use crate::port::outbound::store::{CatalogStore, ProductFilter, SortKey};

#[derive(Tabled, Serialize)]
struct CategoryRow {
    #[tabled(rename = "Id")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<Category> for CategoryRow {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.get(),
            name: category.name,
            description: category.description,
        }
    }
}

#[derive(Tabled, Serialize)]
struct CategoryProductsRow {
    #[tabled(rename = "Id")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Active Products")]
    #[tabled(display_with = "join_names")]
    products: Vec<String>,
}

fn join_names(names: &[String]) -> String {
    names.join(", ")
}

impl From<&WithProducts<Category>> for CategoryProductsRow {
    fn from(category: &WithProducts<Category>) -> Self {
        Self {
            id: category.entity.id.get(),
            name: category.entity.name.clone(),
            products: category
                .active_products()
                .into_iter()
                .map(|p| p.name.clone())
                .collect(),
        }
    }
}

#[derive(Tabled, Serialize)]
struct ProductRow {
    #[tabled(rename = "Id")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category_id: i32,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "In Stock")]
    units_in_stock: i16,
    #[tabled(rename = "Discontinued")]
    discontinued: bool,
}

impl From<Product> for ProductRow {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.get(),
            name: product.name,
            category_id: product.category_id.get(),
            unit_price: format!("{:.2}", product.unit_price),
            units_in_stock: product.units_in_stock,
            discontinued: product.discontinued,
        }
    }
}

/// Execute `categories`.
///
/// Plain listings are by name; with `with_products`, by identifier with
/// each category's active products.
pub fn execute_categories<S, W>(store: &S, out: &mut Output<W>, with_products: bool) -> Result<()>
where
    S: CatalogStore + ?Sized,
    W: Write,
{
    if with_products {
        let categories = store.list_categories_with_products(SortKey::Id)?;
        let rows: Vec<CategoryProductsRow> = categories.iter().map(Into::into).collect();
        out.section(&format!("{} Categories found", rows.len()))?;
        return out.table("category", &rows);
    }

    let rows: Vec<CategoryRow> = store
        .list_categories(SortKey::Name)?
        .into_iter()
        .map(Into::into)
        .collect();
    out.section(&format!("{} Categories found", rows.len()))?;
    out.table("category", &rows)
}

/// Execute `products`.
pub fn execute_products<S, W>(store: &S, out: &mut Output<W>, filter: ProductFilter) -> Result<()>
where
    S: CatalogStore + ?Sized,
    W: Write,
{
    let rows: Vec<ProductRow> = store
        .list_products(filter, SortKey::Name)?
        .into_iter()
        .map(Into::into)
        .collect();
    let heading = match filter {
        ProductFilter::All => "All Products",
        ProductFilter::Active => "Active Products",
        ProductFilter::Discontinued => "Discontinued Products",
    };
    out.section(&format!("{heading} ({} returned)", rows.len()))?;
    out.table("product", &rows)
}

/// Execute `product <ID>`.
///
/// # Errors
/// Returns [`StoreError::Missing`] if no product has `id`.
pub fn execute_product<S, W>(store: &S, out: &mut Output<W>, id: i32) -> Result<()>
where
    S: CatalogStore + ?Sized,
    W: Write,
{
    let product = store
        .get_product(ProductId::new(id))?
        .ok_or(StoreError::Missing {
            entity: EntityKind::Product,
            id,
        })?;

    if out.is_json() {
        return out.record("product", &product);
    }

    out.section(&product.name)?;
    for line in detail_lines(&product) {
        match line.split_once(": ") {
            Some((label, value)) => out.field(label, value)?,
            None => out.note(&line)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::inbound::cli::output::OutputConfig;
    use crate::testkit::store::MemoryStore;

    fn render(json: bool, print: impl FnOnce(&mut Output<Vec<u8>>) -> Result<()>) -> String {
        let mut out = Output::new(Vec::new(), OutputConfig::new(json, false));
        print(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    fn json_lines(text: &str) -> Vec<serde_json::Value> {
        text.lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn categories_are_listed_by_name() {
        let store = MemoryStore::northwind();
        let text = render(true, |out| execute_categories(&store, out, false));

        let names: Vec<String> = json_lines(&text)
            .into_iter()
            .filter(|l| l["type"] == "category")
            .map(|l| l["payload"]["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Beverages", "Condiments", "Confections"]);
    }

    #[test]
    fn categories_with_products_skip_discontinued() {
        let store = MemoryStore::northwind();
        let text = render(true, |out| execute_categories(&store, out, true));

        let condiments = json_lines(&text)
            .into_iter()
            .find(|l| l["payload"]["name"] == "Condiments")
            .unwrap();
        let products = condiments["payload"]["products"].as_array().unwrap();
        assert!(products.iter().all(|p| p != "Chef Anton's Gumbo Mix"));
        assert_eq!(products.len(), 3);
    }

    #[test]
    fn discontinued_filter_lists_only_discontinued() {
        let store = MemoryStore::northwind();
        let text = render(true, |out| {
            execute_products(&store, out, ProductFilter::Discontinued)
        });

        let rows: Vec<serde_json::Value> = json_lines(&text)
            .into_iter()
            .filter(|l| l["type"] == "product")
            .collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["payload"]["name"], "Chef Anton's Gumbo Mix");
        assert_eq!(rows[0]["payload"]["discontinued"], true);
    }

    #[test]
    fn product_details_print_two_decimal_price() {
        let store = MemoryStore::northwind();
        let text = render(false, |out| execute_product(&store, out, 1));

        assert!(text.contains("Chai"));
        assert!(text.contains("18.00"));
    }

    #[test]
    fn product_json_is_the_whole_record() {
        let store = MemoryStore::northwind();
        let text = render(true, |out| execute_product(&store, out, 2));

        let lines = json_lines(&text);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["payload"]["name"], "Chang");
    }

    #[test]
    fn unknown_product_is_missing() {
        let store = MemoryStore::northwind();
        let mut out = Output::new(Vec::new(), OutputConfig::default());

        let err = execute_product(&store, &mut out, 999).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Store(StoreError::Missing { id: 999, .. })
        ));
    }
}
