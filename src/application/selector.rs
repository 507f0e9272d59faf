//! Entity selection by identifier.
//!
//! Lists the candidates as `id) label` in ascending identifier order, reads
//! one identifier and resolves it. Bad input and unknown identifiers are
//! both ordinary [`Selection`] values; `Err` means the console or store
//! itself failed.

use tracing::{error, info, warn};

use super::context::Context;
use super::input::{self, InputError};
use crate::domain::{Category, EntityKind, Listed, Product, Supplier, WithProducts};
use crate::domain::{CategoryId, ProductId, SupplierId};
use crate::error::Result;
use crate::port::outbound::console::{Console, Tone};
use crate::port::outbound::store::{
    CategoryStore, ProductFilter, ProductStore, SortKey, SupplierStore,
};

/// Result of asking the operator to pick a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    Found(T),
    /// The identifier parsed but no such record exists.
    NotFound(i32),
    /// The reply was not an identifier.
    Invalid(InputError),
}

impl<T> Selection<T> {
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound(_) | Self::Invalid(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Selection<U> {
        match self {
            Self::Found(value) => Selection::Found(f(value)),
            Self::NotFound(id) => Selection::NotFound(id),
            Self::Invalid(e) => Selection::Invalid(e),
        }
    }
}

/// The tone a kind of record is listed in.
#[must_use]
pub const fn tone_for(kind: EntityKind) -> Tone {
    match kind {
        EntityKind::Category => Tone::Category,
        EntityKind::Supplier => Tone::Supplier,
        EntityKind::Product => Tone::Product,
    }
}

/// Interactive record picker.
pub struct Selector<'a, C: ?Sized> {
    console: &'a mut C,
    ctx: &'a Context,
}

impl<'a, C: Console + ?Sized> Selector<'a, C> {
    pub fn new(console: &'a mut C, ctx: &'a Context) -> Self {
        Self { console, ctx }
    }

    /// Show `candidates`, read an identifier and resolve it with `resolve`.
    pub fn pick<T, R>(
        &mut self,
        candidates: Vec<T>,
        resolve: impl FnOnce(i32) -> Result<Option<R>>,
    ) -> Result<Selection<R>>
    where
        T: Listed,
    {
        let _log = self.ctx.enter();
        self.list(candidates, None)?;
        let reply = self.console.answer()?;
        self.resolve(T::KIND, &reply, resolve)
    }

    /// Like [`pick`](Self::pick), but a blank reply keeps the current
    /// record and yields `None`.
    pub fn pick_or_keep<T, R>(
        &mut self,
        candidates: Vec<T>,
        current: i32,
        resolve: impl FnOnce(i32) -> Result<Option<R>>,
    ) -> Result<Option<Selection<R>>>
    where
        T: Listed,
    {
        let _log = self.ctx.enter();
        self.list(candidates, Some(current))?;
        let reply = self.console.answer()?;
        if reply.trim().is_empty() {
            info!(kind = %T::KIND, id = current, "Selection kept");
            return Ok(None);
        }
        self.resolve(T::KIND, &reply, resolve).map(Some)
    }

    /// Pick a category.
    pub fn category<S>(&mut self, store: &S) -> Result<Selection<Category>>
    where
        S: CategoryStore + ?Sized,
    {
        let candidates = store.list_categories(SortKey::Id)?;
        self.pick(candidates, |id| store.get_category(CategoryId::new(id)))
    }

    /// Pick a category and load its products with it.
    pub fn category_with_products<S>(
        &mut self,
        store: &S,
    ) -> Result<Selection<WithProducts<Category>>>
    where
        S: CategoryStore + ?Sized,
    {
        let candidates = store.list_categories(SortKey::Id)?;
        self.pick(candidates, |id| store.get_category_with_products(CategoryId::new(id)))
    }

    /// Pick a supplier.
    pub fn supplier<S>(&mut self, store: &S) -> Result<Selection<Supplier>>
    where
        S: SupplierStore + ?Sized,
    {
        let candidates = store.list_suppliers(SortKey::Id)?;
        self.pick(candidates, |id| store.get_supplier(SupplierId::new(id)))
    }

    /// Pick a product.
    pub fn product<S>(&mut self, store: &S) -> Result<Selection<Product>>
    where
        S: ProductStore + ?Sized,
    {
        let candidates = store.list_products(ProductFilter::All, SortKey::Id)?;
        self.pick(candidates, |id| store.get_product(ProductId::new(id)))
    }

    fn list<T: Listed>(&mut self, mut candidates: Vec<T>, current: Option<i32>) -> Result<()> {
        candidates.sort_by_key(|c| c.key());
        let heading = match current {
            Some(_) => format!("Select {} or Leave Blank to Keep:", T::KIND),
            None => format!("Select {}:", T::KIND),
        };
        self.console.say(&heading)?;
        let tone = tone_for(T::KIND);
        for candidate in &candidates {
            self.console
                .show(tone, &format!("{}) {}", candidate.key(), candidate.label()))?;
        }
        Ok(())
    }

    fn resolve<R>(
        &mut self,
        kind: EntityKind,
        reply: &str,
        resolve: impl FnOnce(i32) -> Result<Option<R>>,
    ) -> Result<Selection<R>> {
        let id = match input::integer(reply) {
            Ok(id) => id,
            Err(e) => {
                warn!(kind = %kind, error = %e, "Invalid selection");
                self.console
                    .show(Tone::Error, &e.describe(&format!("{} id", kind.title())))?;
                return Ok(Selection::Invalid(e));
            }
        };

        info!(kind = %kind, id, "Identifier selected");
        match resolve(id)? {
            Some(record) => Ok(Selection::Found(record)),
            None => {
                error!(kind = %kind, id, "{} not found", kind.title());
                self.console
                    .show(Tone::Error, &format!("{} not found", kind.title()))?;
                Ok(Selection::NotFound(id))
            }
        }
    }
}
