//! Read-only catalog listings for the interactive console.
//!
//! Display listings are ordered by name; only "all categories with
//! products" keeps identifier order, matching its role as an overview.

use tracing::info;

use super::context::Context;
use super::selector::Selector;
use crate::domain::{Category, Product, WithProducts};
use crate::error::Result;
use crate::port::outbound::console::{Console, Tone};
use crate::port::outbound::store::{CatalogStore, ProductFilter, SortKey};

/// Prints catalog listings through one console.
pub struct Catalog<'a, S: ?Sized, C: ?Sized> {
    store: &'a S,
    console: &'a mut C,
    ctx: &'a Context,
}

impl<'a, S, C> Catalog<'a, S, C>
where
    S: CatalogStore + ?Sized,
    C: Console + ?Sized,
{
    pub fn new(store: &'a S, console: &'a mut C, ctx: &'a Context) -> Self {
        Self {
            store,
            console,
            ctx,
        }
    }

    /// Every category as `name - description`, by name. Returns the count.
    pub fn categories(&mut self) -> Result<usize> {
        let _log = self.ctx.enter();
        info!("Display Categories selected");

        let categories = self.store.list_categories(SortKey::Name)?;
        self.console
            .say(&format!("{} Categories found", categories.len()))?;
        for category in &categories {
            self.console.show(Tone::Category, &category.summary())?;
        }
        Ok(categories.len())
    }

    /// Every category by identifier, each followed by its active products.
    pub fn categories_with_products(&mut self) -> Result<usize> {
        let _log = self.ctx.enter();
        info!("Display Categories and Products selected");

        let categories = self.store.list_categories_with_products(SortKey::Id)?;
        for category in &categories {
            self.category_block(category)?;
        }
        Ok(categories.len())
    }

    /// Let the operator pick one category, then show it with its active
    /// products. `None` when nothing was picked.
    pub fn category(&mut self) -> Result<Option<WithProducts<Category>>> {
        let _log = self.ctx.enter();
        let store = self.store;
        let picked = Selector::new(&mut *self.console, self.ctx)
            .category_with_products(store)?
            .found();

        if let Some(category) = &picked {
            info!(category = %category.entity.name, "Category selected");
            self.category_block(category)?;
        }
        Ok(picked)
    }

    /// Products matching `filter`, by name. Returns the count.
    pub fn products(&mut self, filter: ProductFilter) -> Result<usize> {
        let _log = self.ctx.enter();
        info!(?filter, "Display Products selected");

        let products = self.store.list_products(filter, SortKey::Name)?;
        let (heading, count) = match filter {
            ProductFilter::All => (
                "All Products - Discontinued in Gray",
                format!("{} Products returned", products.len()),
            ),
            ProductFilter::Active => (
                "Active Products",
                format!("{} records returned", products.len()),
            ),
            ProductFilter::Discontinued => (
                "Discontinued Products",
                format!("{} records returned", products.len()),
            ),
        };
        self.console.say(heading)?;
        self.console.say(&count)?;
        for product in &products {
            self.console.show(product_tone(product), &product.name)?;
        }
        Ok(products.len())
    }

    /// Let the operator pick a product and print every field of it.
    pub fn product_details(&mut self) -> Result<Option<Product>> {
        let _log = self.ctx.enter();
        let store = self.store;
        let picked = Selector::new(&mut *self.console, self.ctx)
            .product(store)?
            .found();

        if let Some(product) = &picked {
            info!(product = %product.name, "Product selected");
            for line in detail_lines(product) {
                self.console.show(Tone::Product, &line)?;
            }
        }
        Ok(picked)
    }

    fn category_block(&mut self, category: &WithProducts<Category>) -> Result<()> {
        self.console.say("")?;
        self.console
            .show(Tone::Category, &category.entity.summary())?;
        for product in category.active_products() {
            self.console
                .show(Tone::Product, &format!("\t{}", product.name))?;
        }
        Ok(())
    }
}

fn product_tone(product: &Product) -> Tone {
    if product.discontinued {
        Tone::Muted
    } else {
        Tone::Product
    }
}

/// The labelled field lines of the product details screen.
#[must_use]
pub fn detail_lines(product: &Product) -> Vec<String> {
    vec![
        format!("Product Id: {}", product.id),
        format!("Product Name: {}", product.name),
        format!("Supplier Id: {}", product.supplier_id),
        format!("Category Id: {}", product.category_id),
        format!("Quantity Per Unit: {}", product.quantity_per_unit),
        format!("Unit Price: {:.2}", product.unit_price),
        format!("Units In Stock: {}", product.units_in_stock),
        format!("Units On Order: {}", product.units_on_order),
        format!("Reorder Level: {}", product.reorder_level),
        format!("Discontinued: {}", product.discontinued),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::WorkflowSettings;
    use crate::testkit::console::ScriptedConsole;
    use crate::testkit::domain::product;
    use crate::testkit::store::MemoryStore;

    fn ctx() -> Context {
        Context::silent(WorkflowSettings::default())
    }

    #[test]
    fn categories_are_listed_by_name_with_count() {
        let store = MemoryStore::northwind();
        let mut console = ScriptedConsole::new(Vec::<&str>::new());
        let ctx = ctx();

        let count = Catalog::new(&store, &mut console, &ctx).categories().unwrap();

        assert_eq!(count, 3);
        assert!(console.printed("3 Categories found"));
        let lines = console.lines_in(Tone::Category);
        assert!(lines[0].starts_with("Beverages - "));
        assert!(lines[1].starts_with("Condiments - "));
        assert!(lines[2].starts_with("Confections - "));
    }

    #[test]
    fn all_products_mute_discontinued_ones() {
        let store = MemoryStore::northwind();
        let mut console = ScriptedConsole::new(Vec::<&str>::new());
        let ctx = ctx();

        let count = Catalog::new(&store, &mut console, &ctx)
            .products(ProductFilter::All)
            .unwrap();

        assert!(console.printed("All Products - Discontinued in Gray"));
        assert!(console.printed(&format!("{count} Products returned")));
        assert_eq!(console.lines_in(Tone::Muted), vec!["Chef Anton's Gumbo Mix"]);
    }

    #[test]
    fn active_listing_uses_records_wording() {
        let store = MemoryStore::northwind();
        let mut console = ScriptedConsole::new(Vec::<&str>::new());
        let ctx = ctx();

        let count = Catalog::new(&store, &mut console, &ctx)
            .products(ProductFilter::Active)
            .unwrap();

        assert!(console.printed(&format!("{count} records returned")));
        assert!(console.lines_in(Tone::Muted).is_empty());
    }

    #[test]
    fn single_category_shows_only_active_products_indented() {
        let store = MemoryStore::northwind();
        let mut console = ScriptedConsole::new(["2"]);
        let ctx = ctx();

        let picked = Catalog::new(&store, &mut console, &ctx)
            .category()
            .unwrap()
            .unwrap();

        assert_eq!(picked.entity.name, "Condiments");
        assert!(console.printed("\tAniseed Syrup"));
        assert!(!console.printed("\tChef Anton's Gumbo Mix"));
    }

    #[test]
    fn detail_lines_format_price_with_two_decimals() {
        let mut chai = product(1, "Chai", 1, 1);
        chai.unit_price = rust_decimal_macros::dec!(18);

        let lines = detail_lines(&chai);

        assert_eq!(lines[0], "Product Id: 1");
        assert!(lines.contains(&"Unit Price: 18.00".to_string()));
        assert!(lines.contains(&"Discontinued: false".to_string()));
    }
}
