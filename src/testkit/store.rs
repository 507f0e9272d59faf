//! In-memory record store.
//!
//! Mirrors the refusals of the SQLite store (unique names, restricted
//! deletes, missing rows) and counts every write call, so tests can assert
//! that an aborted workflow never reached the store.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::application::seed;
use crate::domain::{
    Category, CategoryId, EntityKind, NewCategory, NewProduct, NewSupplier, Product, ProductId,
    Supplier, SupplierId, WithProducts,
};
use crate::error::{Result, StoreError};
use crate::port::outbound::store::{
    CategoryStore, ProductFilter, ProductStore, SortKey, SupplierStore,
};

/// Write calls observed so far, successful or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calls {
    pub inserts: usize,
    pub updates: usize,
    pub deletes: usize,
}

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    suppliers: BTreeMap<i32, Supplier>,
    products: BTreeMap<i32, Product>,
    sequences: [i32; 3],
    calls: Calls,
}

impl Tables {
    /// Next identifier for `kind`; each kind counts from 1.
    fn assign_id(&mut self, kind: EntityKind) -> i32 {
        let slot = match kind {
            EntityKind::Category => 0,
            EntityKind::Supplier => 1,
            EntityKind::Product => 2,
        };
        self.sequences[slot] += 1;
        self.sequences[slot]
    }

    fn products_of(&self, matches: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.products.values().filter(|p| matches(p)).cloned().collect()
    }

    fn check_references(&self, category: CategoryId, supplier: SupplierId) -> Result<()> {
        if !self.categories.contains_key(&category.get()) {
            return Err(StoreError::Missing {
                entity: EntityKind::Category,
                id: category.get(),
            }
            .into());
        }
        if !self.suppliers.contains_key(&supplier.get()) {
            return Err(StoreError::Missing {
                entity: EntityKind::Supplier,
                id: supplier.get(),
            }
            .into());
        }
        Ok(())
    }
}

/// A [`CatalogStore`](crate::port::outbound::store::CatalogStore) kept in a
/// few ordered maps.
///
/// Identifiers are never reused, matching SQLite `AUTOINCREMENT`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store holding the demo catalog, with the write counters reset.
    ///
    /// Categories are 1 Beverages, 2 Condiments and 3 Confections (no
    /// products). Product 5, "Chef Anton's Gumbo Mix", is discontinued.
    pub fn northwind() -> Self {
        let store = Self::empty();
        // Seeding an empty in-memory store cannot fail.
        let _ = seed::seed(&store);
        store.tables.write().calls = Calls::default();
        store
    }

    pub fn calls(&self) -> Calls {
        self.tables.read().calls
    }

    pub fn category_count(&self) -> usize {
        self.tables.read().categories.len()
    }

    pub fn product_count(&self) -> usize {
        self.tables.read().products.len()
    }
}

fn sorted<T>(
    mut rows: Vec<T>,
    order: SortKey,
    id: impl Fn(&T) -> i32,
    name: impl Fn(&T) -> &str,
) -> Vec<T> {
    match order {
        SortKey::Id => rows.sort_by_key(|r| id(r)),
        SortKey::Name => rows.sort_by(|a, b| name(a).cmp(name(b))),
    }
    rows
}

impl CategoryStore for MemoryStore {
    fn list_categories(&self, order: SortKey) -> Result<Vec<Category>> {
        let rows = self.tables.read().categories.values().cloned().collect();
        Ok(sorted(rows, order, |c| c.id.get(), |c| &c.name))
    }

    fn list_categories_with_products(
        &self,
        order: SortKey,
    ) -> Result<Vec<WithProducts<Category>>> {
        let tables = self.tables.read();
        let rows = tables
            .categories
            .values()
            .map(|c| WithProducts {
                entity: c.clone(),
                products: tables.products_of(|p| p.category_id == c.id),
            })
            .collect();
        Ok(sorted(rows, order, |c| c.entity.id.get(), |c| &c.entity.name))
    }

    fn get_category(&self, id: CategoryId) -> Result<Option<Category>> {
        Ok(self.tables.read().categories.get(&id.get()).cloned())
    }

    fn get_category_with_products(
        &self,
        id: CategoryId,
    ) -> Result<Option<WithProducts<Category>>> {
        let tables = self.tables.read();
        Ok(tables.categories.get(&id.get()).map(|c| WithProducts {
            entity: c.clone(),
            products: tables.products_of(|p| p.category_id == id),
        }))
    }

    fn category_name_exists(&self, name: &str) -> Result<bool> {
        Ok(self
            .tables
            .read()
            .categories
            .values()
            .any(|c| c.name == name))
    }

    fn insert_category(&self, category: &NewCategory) -> Result<CategoryId> {
        let mut tables = self.tables.write();
        tables.calls.inserts += 1;
        if tables.categories.values().any(|c| c.name == category.name) {
            return Err(StoreError::DuplicateName {
                entity: EntityKind::Category,
                name: category.name.clone(),
            }
            .into());
        }
        let id = tables.assign_id(EntityKind::Category);
        tables.categories.insert(
            id,
            Category {
                id: CategoryId::new(id),
                name: category.name.clone(),
                description: category.description.clone(),
            },
        );
        Ok(CategoryId::new(id))
    }

    fn update_category(&self, category: &Category) -> Result<()> {
        let mut tables = self.tables.write();
        tables.calls.updates += 1;
        let id = category.id.get();
        if !tables.categories.contains_key(&id) {
            return Err(StoreError::Missing {
                entity: EntityKind::Category,
                id,
            }
            .into());
        }
        if tables
            .categories
            .values()
            .any(|c| c.id != category.id && c.name == category.name)
        {
            return Err(StoreError::DuplicateName {
                entity: EntityKind::Category,
                name: category.name.clone(),
            }
            .into());
        }
        tables.categories.insert(id, category.clone());
        Ok(())
    }

    fn delete_category(&self, id: CategoryId) -> Result<()> {
        let mut tables = self.tables.write();
        tables.calls.deletes += 1;
        if !tables.categories.contains_key(&id.get()) {
            return Err(StoreError::Missing {
                entity: EntityKind::Category,
                id: id.get(),
            }
            .into());
        }
        let dependents = tables
            .products
            .values()
            .filter(|p| p.category_id == id)
            .count();
        if dependents > 0 {
            return Err(StoreError::InUse {
                entity: EntityKind::Category,
                id: id.get(),
                dependents,
            }
            .into());
        }
        tables.categories.remove(&id.get());
        Ok(())
    }
}

impl SupplierStore for MemoryStore {
    fn list_suppliers(&self, order: SortKey) -> Result<Vec<Supplier>> {
        let rows = self.tables.read().suppliers.values().cloned().collect();
        Ok(sorted(rows, order, |s| s.id.get(), |s| &s.company_name))
    }

    fn get_supplier(&self, id: SupplierId) -> Result<Option<Supplier>> {
        Ok(self.tables.read().suppliers.get(&id.get()).cloned())
    }

    fn insert_supplier(&self, supplier: &NewSupplier) -> Result<SupplierId> {
        let mut tables = self.tables.write();
        tables.calls.inserts += 1;
        let id = tables.assign_id(EntityKind::Supplier);
        tables.suppliers.insert(
            id,
            Supplier {
                id: SupplierId::new(id),
                company_name: supplier.company_name.clone(),
                contact_name: supplier.contact_name.clone(),
                city: supplier.city.clone(),
                country: supplier.country.clone(),
                phone: supplier.phone.clone(),
            },
        );
        Ok(SupplierId::new(id))
    }
}

impl ProductStore for MemoryStore {
    fn list_products(&self, filter: ProductFilter, order: SortKey) -> Result<Vec<Product>> {
        let rows = self.tables.read().products_of(|p| filter.matches(p));
        Ok(sorted(rows, order, |p| p.id.get(), |p| &p.name))
    }

    fn get_product(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.tables.read().products.get(&id.get()).cloned())
    }

    fn product_name_exists(&self, name: &str) -> Result<bool> {
        Ok(self.tables.read().products.values().any(|p| p.name == name))
    }

    fn insert_product(&self, product: &NewProduct) -> Result<ProductId> {
        let mut tables = self.tables.write();
        tables.calls.inserts += 1;
        tables.check_references(product.category_id, product.supplier_id)?;
        if tables.products.values().any(|p| p.name == product.name) {
            return Err(StoreError::DuplicateName {
                entity: EntityKind::Product,
                name: product.name.clone(),
            }
            .into());
        }
        let id = tables.assign_id(EntityKind::Product);
        tables.products.insert(
            id,
            Product {
                id: ProductId::new(id),
                name: product.name.clone(),
                quantity_per_unit: product.quantity_per_unit.clone(),
                unit_price: product.unit_price,
                units_in_stock: product.units_in_stock,
                units_on_order: product.units_on_order,
                reorder_level: product.reorder_level,
                discontinued: product.discontinued,
                category_id: product.category_id,
                supplier_id: product.supplier_id,
            },
        );
        Ok(ProductId::new(id))
    }

    fn update_product(&self, product: &Product) -> Result<()> {
        let mut tables = self.tables.write();
        tables.calls.updates += 1;
        let id = product.id.get();
        if !tables.products.contains_key(&id) {
            return Err(StoreError::Missing {
                entity: EntityKind::Product,
                id,
            }
            .into());
        }
        tables.check_references(product.category_id, product.supplier_id)?;
        if tables
            .products
            .values()
            .any(|p| p.id != product.id && p.name == product.name)
        {
            return Err(StoreError::DuplicateName {
                entity: EntityKind::Product,
                name: product.name.clone(),
            }
            .into());
        }
        tables.products.insert(id, product.clone());
        Ok(())
    }

    fn delete_product(&self, id: ProductId) -> Result<()> {
        let mut tables = self.tables.write();
        tables.calls.deletes += 1;
        if tables.products.remove(&id.get()).is_none() {
            return Err(StoreError::Missing {
                entity: EntityKind::Product,
                id: id.get(),
            }
            .into());
        }
        Ok(())
    }
}
