//! Product workflows.

use tracing::info;

use super::{chosen, proceed, Field, Report, Run, Stage, WorkflowKind, Workflows};
use crate::application::input;
use crate::domain::{
    CategoryId, EntityKind, NewProduct, SupplierId, Validate, ValidationFailure,
};
use crate::error::Result;
use crate::port::outbound::console::{Console, Tone};
use crate::port::outbound::store::{CatalogStore, SortKey};

const NAME: Field = Field {
    name: "ProductName",
    label: "Product name",
};

const QUANTITY_PER_UNIT: Field = Field {
    name: "QuantityPerUnit",
    label: "Quantity per unit",
};

const UNIT_PRICE: Field = Field {
    name: "UnitPrice",
    label: "Unit price",
};

const UNITS_IN_STOCK: Field = Field {
    name: "UnitsInStock",
    label: "Units in stock",
};

const UNITS_ON_ORDER: Field = Field {
    name: "UnitsOnOrder",
    label: "Units on order",
};

const REORDER_LEVEL: Field = Field {
    name: "ReorderLevel",
    label: "Reorder level",
};

const DISCONTINUED: Field = Field {
    name: "Discontinued",
    label: "Discontinued",
};

const DISCONTINUED_PROMPT: &str = "Is the product discontinued? (y/n):";

impl<'a, S, C> Workflows<'a, S, C>
where
    S: CatalogStore + ?Sized,
    C: Console + ?Sized,
{
    /// Prompt for every product field, pick its category and supplier, and
    /// insert it.
    pub fn add_product(&mut self) -> Result<Report> {
        let _log = self.ctx.enter();
        let mut run = Run::start(WorkflowKind::AddProduct);
        let store = self.store;

        let name = proceed!(run, self.read(NAME, "Enter Product Name:", input::non_empty));
        let quantity_per_unit = proceed!(
            run,
            self.read(
                QUANTITY_PER_UNIT,
                "Enter the Quantity per Unit:",
                input::non_empty
            )
        );
        let unit_price = proceed!(
            run,
            self.read(UNIT_PRICE, "Enter the Unit Price:", input::decimal)
        );
        let units_in_stock = proceed!(
            run,
            self.read(UNITS_IN_STOCK, "Enter the Units In Stock:", input::short)
        );
        let units_on_order = proceed!(
            run,
            self.read(UNITS_ON_ORDER, "Enter the Units On Order:", input::short)
        );
        let reorder_level = proceed!(
            run,
            self.read(REORDER_LEVEL, "Enter the Reorder Level:", input::short)
        );

        let selection = self.selector().category(store)?;
        let category = proceed!(run, chosen(EntityKind::Category, selection));
        let selection = self.selector().supplier(store)?;
        let supplier = proceed!(run, chosen(EntityKind::Supplier, selection));

        let discontinued = proceed!(
            run,
            self.read(DISCONTINUED, DISCONTINUED_PROMPT, input::yes_no)
        );

        let product = NewProduct {
            name,
            quantity_per_unit,
            unit_price,
            units_in_stock,
            units_on_order,
            reorder_level,
            discontinued,
            category_id: category.id,
            supplier_id: supplier.id,
        };

        run.enter(Stage::Validating);
        let failures = product.validate();
        if !failures.is_empty() {
            return self.reject_record(run, failures);
        }

        run.enter(Stage::CheckingUniqueness);
        if store.product_name_exists(&product.name)? {
            return self.reject_record(run, vec![ValidationFailure::duplicate_name(NAME.name)]);
        }
        info!("Validation passed");

        run.enter(Stage::Persisting);
        match store.insert_product(&product) {
            Ok(id) => {
                info!(%id, name = %product.name, "Product added to database");
                let message = format!("{} - {} added to database", product.name, category.name);
                self.console.show(Tone::Product, &message)?;
                Ok(run.done(id.get(), message))
            }
            Err(err) => self.reject_write(run, err),
        }
    }

    /// Pick a product and walk every field, keeping whatever the operator
    /// leaves blank. Category and supplier are re-picked the same way.
    pub fn edit_product(&mut self) -> Result<Report> {
        let _log = self.ctx.enter();
        let mut run = Run::start(WorkflowKind::EditProduct);
        let store = self.store;

        let selection = self.selector().product(store)?;
        let mut product = proceed!(run, chosen(EntityKind::Product, selection));
        info!(product = %product.name, "Product selected");
        let original_name = product.name.clone();
        self.console
            .show(Tone::Product, &format!("Editing: {}", product.name))?;

        let prompt = format!(
            "Enter New Product Name or Leave Blank to Keep: {}",
            product.name
        );
        product.name = proceed!(
            run,
            self.read_or_keep(NAME, product.name.clone(), &prompt, input::non_empty)
        );

        let prompt = format!(
            "Enter New Quantity Per Unit or Leave Blank to Keep: {}",
            product.quantity_per_unit
        );
        product.quantity_per_unit = proceed!(
            run,
            self.read_or_keep(
                QUANTITY_PER_UNIT,
                product.quantity_per_unit.clone(),
                &prompt,
                input::non_empty
            )
        );

        self.console
            .say(&format!("Current Supplier Id: {}", product.supplier_id))?;
        let suppliers = store.list_suppliers(SortKey::Id)?;
        let picked = self
            .selector()
            .pick_or_keep(suppliers, product.supplier_id.get(), |id| {
                store.get_supplier(SupplierId::new(id))
            })?;
        if let Some(selection) = picked {
            product.supplier_id = proceed!(run, chosen(EntityKind::Supplier, selection)).id;
        }

        self.console
            .say(&format!("Current Category Id: {}", product.category_id))?;
        let categories = store.list_categories(SortKey::Id)?;
        let picked = self
            .selector()
            .pick_or_keep(categories, product.category_id.get(), |id| {
                store.get_category(CategoryId::new(id))
            })?;
        if let Some(selection) = picked {
            product.category_id = proceed!(run, chosen(EntityKind::Category, selection)).id;
        }

        let prompt = format!(
            "Enter New Unit Price or Leave Blank to Keep: {:.2}",
            product.unit_price
        );
        product.unit_price = proceed!(
            run,
            self.read_or_keep(UNIT_PRICE, product.unit_price, &prompt, input::decimal)
        );

        let prompt = format!(
            "Enter New Units In Stock or Leave Blank to Keep: {}",
            product.units_in_stock
        );
        product.units_in_stock = proceed!(
            run,
            self.read_or_keep(UNITS_IN_STOCK, product.units_in_stock, &prompt, input::short)
        );

        let prompt = format!(
            "Enter New Units On Order or Leave Blank to Keep: {}",
            product.units_on_order
        );
        product.units_on_order = proceed!(
            run,
            self.read_or_keep(UNITS_ON_ORDER, product.units_on_order, &prompt, input::short)
        );

        let prompt = format!(
            "Enter New Reorder Level or Leave Blank to Keep: {}",
            product.reorder_level
        );
        product.reorder_level = proceed!(
            run,
            self.read_or_keep(REORDER_LEVEL, product.reorder_level, &prompt, input::short)
        );

        self.console
            .say(&format!("Currently Discontinued: {}", product.discontinued))?;
        product.discontinued = proceed!(
            run,
            self.read_or_keep(
                DISCONTINUED,
                product.discontinued,
                DISCONTINUED_PROMPT,
                input::yes_no
            )
        );

        run.enter(Stage::Validating);
        let failures = product.validate();
        if !failures.is_empty() {
            return self.reject_record(run, failures);
        }

        if self.ctx.settings.check_unique_on_edit && product.name != original_name {
            run.enter(Stage::CheckingUniqueness);
            if store.product_name_exists(&product.name)? {
                return self
                    .reject_record(run, vec![ValidationFailure::duplicate_name(NAME.name)]);
            }
        }

        run.enter(Stage::Persisting);
        match store.update_product(&product) {
            Ok(()) => {
                info!(id = %product.id, name = %product.name, "Product updated in database");
                let message = format!("{} updated in database", product.name);
                self.console.show(Tone::Product, &message)?;
                Ok(run.done(product.id.get(), message))
            }
            Err(err) => self.reject_write(run, err),
        }
    }

    /// Pick a product and delete it.
    pub fn remove_product(&mut self) -> Result<Report> {
        let _log = self.ctx.enter();
        let mut run = Run::start(WorkflowKind::RemoveProduct);
        let store = self.store;

        let selection = self.selector().product(store)?;
        let product = proceed!(run, chosen(EntityKind::Product, selection));

        run.enter(Stage::Persisting);
        match store.delete_product(product.id) {
            Ok(()) => {
                info!(id = %product.id, "Product removed from database");
                let message = format!("{} removed from database", product.name);
                self.console.show(Tone::Product, &message)?;
                Ok(run.done(product.id.get(), message))
            }
            Err(err) => self.reject_write(run, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::application::context::{Context, WorkflowSettings};
    use crate::application::input::InputError;
    use crate::application::workflow::Abort;
    use crate::domain::ProductId;
    use crate::port::outbound::store::ProductStore;
    use crate::testkit::console::ScriptedConsole;
    use crate::testkit::store::MemoryStore;

    fn ctx() -> Context {
        Context::silent(WorkflowSettings::default())
    }

    #[test]
    fn add_stores_absolute_price_and_names_the_category() {
        let store = MemoryStore::northwind();
        let mut console = ScriptedConsole::new([
            "Ipoh Coffee",
            "16 - 500 g tins",
            "-46.00",
            "17",
            "10",
            "25",
            "1",
            "2",
            "n",
        ]);
        let ctx = ctx();

        let report = Workflows::new(&store, &mut console, &ctx)
            .add_product()
            .unwrap();

        let id = ProductId::new(report.record_id().unwrap());
        let stored = store.get_product(id).unwrap().unwrap();
        assert_eq!(stored.unit_price, dec!(46.00));
        assert_eq!(stored.category_id, CategoryId::new(1));
        assert_eq!(stored.supplier_id, SupplierId::new(2));
        assert!(!stored.discontinued);
        assert!(console.printed("Ipoh Coffee - Beverages added to database"));
    }

    #[test]
    fn add_rejects_bad_discontinued_answer_after_selections() {
        let store = MemoryStore::northwind();
        let mut console =
            ScriptedConsole::new(["Ipoh Coffee", "16 tins", "46", "17", "10", "25", "1", "2", "maybe"]);
        let ctx = ctx();

        let report = Workflows::new(&store, &mut console, &ctx)
            .add_product()
            .unwrap();

        assert_eq!(
            report.abort(),
            Some(&Abort::Input {
                field: "Discontinued",
                error: InputError::InvalidChoice,
            })
        );
        assert!(console.printed("Invalid input. Please enter y or n."));
        assert_eq!(store.calls().inserts, 0);
    }

    #[test]
    fn add_reports_duplicate_name() {
        let store = MemoryStore::northwind();
        let mut console =
            ScriptedConsole::new(["Chai", "10 boxes", "18", "39", "0", "10", "1", "1", "n"]);
        let ctx = ctx();

        let report = Workflows::new(&store, &mut console, &ctx)
            .add_product()
            .unwrap();

        assert_eq!(
            report.abort(),
            Some(&Abort::Validation(vec![ValidationFailure::duplicate_name(
                "ProductName"
            )]))
        );
        assert!(console.printed("ProductName : Name exists"));
        assert_eq!(store.calls().inserts, 0);
    }

    #[test]
    fn edit_keeps_blank_fields_and_replaces_the_rest() {
        let store = MemoryStore::northwind();
        let before = store.get_product(ProductId::new(1)).unwrap().unwrap();
        // product 1; keep name and quantity; supplier 2; keep category;
        // price 20; keep the rest
        let mut console =
            ScriptedConsole::new(["1", "", "", "2", "", "20", "", "", "", ""]);
        let ctx = ctx();

        let report = Workflows::new(&store, &mut console, &ctx)
            .edit_product()
            .unwrap();

        assert!(report.is_completed(), "{report:?}");
        let after = store.get_product(ProductId::new(1)).unwrap().unwrap();
        assert_eq!(after.name, before.name);
        assert_eq!(after.quantity_per_unit, before.quantity_per_unit);
        assert_eq!(after.supplier_id, SupplierId::new(2));
        assert_eq!(after.category_id, before.category_id);
        assert_eq!(after.unit_price, dec!(20));
        assert_eq!(after.units_in_stock, before.units_in_stock);
        assert_eq!(after.discontinued, before.discontinued);
        assert_eq!(store.calls().updates, 1);
        assert!(console.is_drained());
    }

    #[test]
    fn edit_aborts_on_unknown_supplier() {
        let store = MemoryStore::northwind();
        let mut console = ScriptedConsole::new(["1", "", "", "999", "should not be read"]);
        let ctx = ctx();

        let report = Workflows::new(&store, &mut console, &ctx)
            .edit_product()
            .unwrap();

        assert_eq!(
            report.abort(),
            Some(&Abort::NotFound {
                entity: EntityKind::Supplier,
                id: 999,
            })
        );
        assert!(!console.is_drained());
        assert_eq!(store.calls().updates, 0);
    }

    #[test]
    fn removed_product_is_gone() {
        let store = MemoryStore::northwind();
        let mut console = ScriptedConsole::new(["2"]);
        let ctx = ctx();

        let report = Workflows::new(&store, &mut console, &ctx)
            .remove_product()
            .unwrap();

        assert_eq!(report.record_id(), Some(2));
        assert!(store.get_product(ProductId::new(2)).unwrap().is_none());
        assert_eq!(store.calls().deletes, 1);
    }
}
