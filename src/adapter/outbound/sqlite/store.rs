//! SQLite catalog store implementation.
//!
//! Every call checks a connection out of the pool and returns it before
//! returning, so no session outlives a single store operation.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    products_from_rows, CategoryRow, NewCategoryRow, NewSupplierRow, ProductRow, ProductValues,
    SupplierRow,
};
use crate::adapter::outbound::sqlite::database::schema::{categories, products, suppliers};
use crate::domain::{
    Category, CategoryId, EntityKind, NewCategory, NewProduct, NewSupplier, Product, ProductId,
    Supplier, SupplierId, WithProducts,
};
use crate::error::{Error, Result, StoreError};
use crate::port::outbound::store::{
    CategoryStore, ProductFilter, ProductStore, SortKey, SupplierStore,
};

type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

fn database(e: DieselError) -> Error {
    Error::Database(e.to_string())
}

fn missing(entity: EntityKind, id: i32) -> Error {
    StoreError::Missing { entity, id }.into()
}

fn in_use(id: CategoryId, dependents: i64) -> Error {
    StoreError::InUse {
        entity: EntityKind::Category,
        id: id.get(),
        dependents: usize::try_from(dependents).unwrap_or_default(),
    }
    .into()
}

fn is_unique_violation(e: &DieselError) -> bool {
    matches!(
        e,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

fn is_foreign_key_violation(e: &DieselError) -> bool {
    matches!(
        e,
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)
    )
}

/// SQLite-backed catalog store.
///
/// Implements [`CategoryStore`], [`SupplierStore`] and [`ProductStore`]
/// over one connection pool.
#[derive(Clone)]
pub struct SqliteCatalogStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteCatalogStore {
    /// Create a new SQLite catalog store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<Conn> {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }

    fn products_in_category(conn: &mut Conn, id: CategoryId) -> QueryResult<i64> {
        products::table
            .filter(products::category_id.eq(id.get()))
            .count()
            .get_result(conn)
    }

    fn products_for(conn: &mut Conn, rows: &[CategoryRow]) -> Result<Vec<Vec<Product>>> {
        let loaded: Vec<ProductRow> = ProductRow::belonging_to(rows)
            .select(ProductRow::as_select())
            .order(products::id.asc())
            .load(conn)
            .map_err(database)?;
        loaded
            .grouped_by(rows)
            .into_iter()
            .map(products_from_rows)
            .collect()
    }

    /// Work out which reference a product write broke.
    fn broken_reference(conn: &mut Conn, category: CategoryId, supplier: SupplierId) -> Error {
        let category_exists = categories::table
            .find(category.get())
            .count()
            .get_result::<i64>(conn)
            .map(|n| n > 0);
        match category_exists {
            Ok(false) => missing(EntityKind::Category, category.get()),
            Ok(true) => missing(EntityKind::Supplier, supplier.get()),
            Err(e) => database(e),
        }
    }

    fn product_write_error(
        conn: &mut Conn,
        e: DieselError,
        product: &ProductValues<'_>,
    ) -> Error {
        if is_unique_violation(&e) {
            StoreError::DuplicateName {
                entity: EntityKind::Product,
                name: product.name.to_string(),
            }
            .into()
        } else if is_foreign_key_violation(&e) {
            Self::broken_reference(
                conn,
                CategoryId::new(product.category_id),
                SupplierId::new(product.supplier_id),
            )
        } else {
            database(e)
        }
    }
}

impl CategoryStore for SqliteCatalogStore {
    fn list_categories(&self, order: SortKey) -> Result<Vec<Category>> {
        let mut conn = self.conn()?;
        let query = categories::table.select(CategoryRow::as_select());
        let rows: Vec<CategoryRow> = match order {
            SortKey::Id => query.order(categories::id.asc()).load(&mut conn),
            SortKey::Name => query.order(categories::name.asc()).load(&mut conn),
        }
        .map_err(database)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    fn list_categories_with_products(
        &self,
        order: SortKey,
    ) -> Result<Vec<WithProducts<Category>>> {
        let mut conn = self.conn()?;
        let query = categories::table.select(CategoryRow::as_select());
        let rows: Vec<CategoryRow> = match order {
            SortKey::Id => query.order(categories::id.asc()).load(&mut conn),
            SortKey::Name => query.order(categories::name.asc()).load(&mut conn),
        }
        .map_err(database)?;

        let grouped = Self::products_for(&mut conn, &rows)?;
        Ok(rows
            .into_iter()
            .zip(grouped)
            .map(|(row, products)| WithProducts {
                entity: Category::from(row),
                products,
            })
            .collect())
    }

    fn get_category(&self, id: CategoryId) -> Result<Option<Category>> {
        let mut conn = self.conn()?;
        let row: Option<CategoryRow> = categories::table
            .find(id.get())
            .select(CategoryRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database)?;
        Ok(row.map(Category::from))
    }

    fn get_category_with_products(
        &self,
        id: CategoryId,
    ) -> Result<Option<WithProducts<Category>>> {
        let mut conn = self.conn()?;
        let Some(row) = categories::table
            .find(id.get())
            .select(CategoryRow::as_select())
            .first::<CategoryRow>(&mut conn)
            .optional()
            .map_err(database)?
        else {
            return Ok(None);
        };

        let products = Self::products_for(&mut conn, std::slice::from_ref(&row))?
            .into_iter()
            .next()
            .unwrap_or_default();
        Ok(Some(WithProducts {
            entity: Category::from(row),
            products,
        }))
    }

    fn category_name_exists(&self, name: &str) -> Result<bool> {
        let mut conn = self.conn()?;
        let count: i64 = categories::table
            .filter(categories::name.eq(name))
            .count()
            .get_result(&mut conn)
            .map_err(database)?;
        Ok(count > 0)
    }

    fn insert_category(&self, category: &NewCategory) -> Result<CategoryId> {
        let mut conn = self.conn()?;
        let id: i32 = diesel::insert_into(categories::table)
            .values(NewCategoryRow::from(category))
            .returning(categories::id)
            .get_result(&mut conn)
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateName {
                        entity: EntityKind::Category,
                        name: category.name.clone(),
                    }
                    .into()
                } else {
                    database(e)
                }
            })?;
        debug!(id, "Inserted category row");
        Ok(CategoryId::new(id))
    }

    fn update_category(&self, category: &Category) -> Result<()> {
        let mut conn = self.conn()?;
        let updated = diesel::update(categories::table.find(category.id.get()))
            .set((
                categories::name.eq(&category.name),
                categories::description.eq(&category.description),
            ))
            .execute(&mut conn)
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateName {
                        entity: EntityKind::Category,
                        name: category.name.clone(),
                    }
                    .into()
                } else {
                    database(e)
                }
            })?;
        if updated == 0 {
            return Err(missing(EntityKind::Category, category.id.get()));
        }
        Ok(())
    }

    fn delete_category(&self, id: CategoryId) -> Result<()> {
        let mut conn = self.conn()?;
        let outcome = conn.transaction::<_, DieselError, _>(|conn| {
            let dependents = Self::products_in_category(conn, id)?;
            if dependents > 0 {
                return Ok(Err(dependents));
            }
            diesel::delete(categories::table.find(id.get()))
                .execute(conn)
                .map(Ok)
        });
        let deleted = match outcome {
            Ok(Ok(deleted)) => deleted,
            Ok(Err(dependents)) => return Err(in_use(id, dependents)),
            // The count and the delete share a transaction, so the key only
            // fires if a product slipped in from another connection.
            Err(e) if is_foreign_key_violation(&e) => {
                let dependents = Self::products_in_category(&mut conn, id).map_err(database)?;
                return Err(in_use(id, dependents));
            }
            Err(e) => return Err(database(e)),
        };
        if deleted == 0 {
            return Err(missing(EntityKind::Category, id.get()));
        }
        Ok(())
    }
}

impl SupplierStore for SqliteCatalogStore {
    fn list_suppliers(&self, order: SortKey) -> Result<Vec<Supplier>> {
        let mut conn = self.conn()?;
        let query = suppliers::table.select(SupplierRow::as_select());
        let rows: Vec<SupplierRow> = match order {
            SortKey::Id => query.order(suppliers::id.asc()).load(&mut conn),
            SortKey::Name => query.order(suppliers::company_name.asc()).load(&mut conn),
        }
        .map_err(database)?;
        Ok(rows.into_iter().map(Supplier::from).collect())
    }

    fn get_supplier(&self, id: SupplierId) -> Result<Option<Supplier>> {
        let mut conn = self.conn()?;
        let row: Option<SupplierRow> = suppliers::table
            .find(id.get())
            .select(SupplierRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database)?;
        Ok(row.map(Supplier::from))
    }

    fn insert_supplier(&self, supplier: &NewSupplier) -> Result<SupplierId> {
        let mut conn = self.conn()?;
        let id: i32 = diesel::insert_into(suppliers::table)
            .values(NewSupplierRow::from(supplier))
            .returning(suppliers::id)
            .get_result(&mut conn)
            .map_err(database)?;
        debug!(id, "Inserted supplier row");
        Ok(SupplierId::new(id))
    }
}

impl ProductStore for SqliteCatalogStore {
    fn list_products(&self, filter: ProductFilter, order: SortKey) -> Result<Vec<Product>> {
        let mut conn = self.conn()?;
        let mut query = products::table.select(ProductRow::as_select()).into_boxed();
        query = match filter {
            ProductFilter::All => query,
            ProductFilter::Active => query.filter(products::discontinued.eq(false)),
            ProductFilter::Discontinued => query.filter(products::discontinued.eq(true)),
        };
        query = match order {
            SortKey::Id => query.order(products::id.asc()),
            SortKey::Name => query.order(products::name.asc()),
        };
        let rows: Vec<ProductRow> = query.load(&mut conn).map_err(database)?;
        products_from_rows(rows)
    }

    fn get_product(&self, id: ProductId) -> Result<Option<Product>> {
        let mut conn = self.conn()?;
        let row: Option<ProductRow> = products::table
            .find(id.get())
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database)?;
        row.map(Product::try_from).transpose()
    }

    fn product_name_exists(&self, name: &str) -> Result<bool> {
        let mut conn = self.conn()?;
        let count: i64 = products::table
            .filter(products::name.eq(name))
            .count()
            .get_result(&mut conn)
            .map_err(database)?;
        Ok(count > 0)
    }

    fn insert_product(&self, product: &NewProduct) -> Result<ProductId> {
        let mut conn = self.conn()?;
        let values = ProductValues::from(product);
        let inserted = diesel::insert_into(products::table)
            .values(&values)
            .returning(products::id)
            .get_result::<i32>(&mut conn);
        match inserted {
            Ok(id) => {
                debug!(id, "Inserted product row");
                Ok(ProductId::new(id))
            }
            Err(e) => Err(Self::product_write_error(&mut conn, e, &values)),
        }
    }

    fn update_product(&self, product: &Product) -> Result<()> {
        let mut conn = self.conn()?;
        let values = ProductValues::from(product);
        let updated = diesel::update(products::table.find(product.id.get()))
            .set(&values)
            .execute(&mut conn);
        match updated {
            Ok(0) => Err(missing(EntityKind::Product, product.id.get())),
            Ok(_) => Ok(()),
            Err(e) => Err(Self::product_write_error(&mut conn, e, &values)),
        }
    }

    fn delete_product(&self, id: ProductId) -> Result<()> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(products::table.find(id.get()))
            .execute(&mut conn)
            .map_err(database)?;
        if deleted == 0 {
            return Err(missing(EntityKind::Product, id.get()));
        }
        Ok(())
    }
}
