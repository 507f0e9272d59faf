//! Persistence ports for the catalog.
//!
//! Every call is synchronous and either succeeds or returns an error; the
//! application never holds a session across calls. Refusals the store can
//! explain (missing row, taken name, row still referenced) come back as
//! [`StoreError`](crate::error::StoreError).

use crate::domain::{
    Category, CategoryId, NewCategory, NewProduct, NewSupplier, Product, ProductId, Supplier,
    SupplierId, WithProducts,
};
use crate::error::Result;

/// Ordering applied to listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending identifier; selection menus use this.
    #[default]
    Id,
    /// Ascending name; display listings use this.
    Name,
}

/// Which products a listing includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductFilter {
    #[default]
    All,
    Active,
    Discontinued,
}

impl ProductFilter {
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Active => !product.discontinued,
            Self::Discontinued => product.discontinued,
        }
    }
}

/// Storage operations for categories.
pub trait CategoryStore {
    /// List every category.
    fn list_categories(&self, order: SortKey) -> Result<Vec<Category>>;

    /// List every category with all of its products loaded.
    fn list_categories_with_products(&self, order: SortKey)
        -> Result<Vec<WithProducts<Category>>>;

    /// Get a category by ID.
    fn get_category(&self, id: CategoryId) -> Result<Option<Category>>;

    /// Get a category by ID with all of its products loaded.
    fn get_category_with_products(&self, id: CategoryId)
        -> Result<Option<WithProducts<Category>>>;

    /// Whether a category with exactly this name exists.
    fn category_name_exists(&self, name: &str) -> Result<bool>;

    /// Insert a category, returning the identifier the store assigned.
    fn insert_category(&self, category: &NewCategory) -> Result<CategoryId>;

    /// Overwrite the stored row that has `category.id`.
    fn update_category(&self, category: &Category) -> Result<()>;

    /// Delete a category. Refused while products still reference it.
    fn delete_category(&self, id: CategoryId) -> Result<()>;
}

/// Storage operations for suppliers.
pub trait SupplierStore {
    /// List every supplier.
    fn list_suppliers(&self, order: SortKey) -> Result<Vec<Supplier>>;

    /// Get a supplier by ID.
    fn get_supplier(&self, id: SupplierId) -> Result<Option<Supplier>>;

    /// Insert a supplier. Only seeding creates suppliers.
    fn insert_supplier(&self, supplier: &NewSupplier) -> Result<SupplierId>;
}

/// Storage operations for products.
pub trait ProductStore {
    /// List products matching `filter`.
    fn list_products(&self, filter: ProductFilter, order: SortKey) -> Result<Vec<Product>>;

    /// Get a product by ID.
    fn get_product(&self, id: ProductId) -> Result<Option<Product>>;

    /// Whether a product with exactly this name exists.
    fn product_name_exists(&self, name: &str) -> Result<bool>;

    /// Insert a product, returning the identifier the store assigned.
    fn insert_product(&self, product: &NewProduct) -> Result<ProductId>;

    /// Overwrite the stored row that has `product.id`.
    fn update_product(&self, product: &Product) -> Result<()>;

    /// Delete a product.
    fn delete_product(&self, id: ProductId) -> Result<()>;
}

/// Everything the console needs from a record store.
pub trait CatalogStore: CategoryStore + SupplierStore + ProductStore {}

impl<T: CategoryStore + SupplierStore + ProductStore> CatalogStore for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::product;

    #[test]
    fn filter_matches_discontinued_flag() {
        let active = product(1, "Chai", 1, 1);
        let mut retired = product(5, "Chef Anton's Gumbo Mix", 2, 2);
        retired.discontinued = true;

        assert!(ProductFilter::All.matches(&active));
        assert!(ProductFilter::All.matches(&retired));
        assert!(ProductFilter::Active.matches(&active));
        assert!(!ProductFilter::Active.matches(&retired));
        assert!(ProductFilter::Discontinued.matches(&retired));
        assert!(!ProductFilter::Discontinued.matches(&active));
    }

    #[test]
    fn listings_default_to_identifier_order() {
        assert_eq!(SortKey::default(), SortKey::Id);
        assert_eq!(ProductFilter::default(), ProductFilter::All);
    }
}
