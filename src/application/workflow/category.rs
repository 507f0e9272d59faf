//! Category workflows.

use tracing::info;

use super::{chosen, proceed, Field, Report, Run, Stage, WorkflowKind, Workflows};
use crate::application::input;
use crate::domain::{EntityKind, NewCategory, Validate, ValidationFailure};
use crate::error::Result;
use crate::port::outbound::console::{Console, Tone};
use crate::port::outbound::store::CatalogStore;

const NAME: Field = Field {
    name: "CategoryName",
    label: "Category name",
};

const DESCRIPTION: Field = Field {
    name: "Description",
    label: "Category description",
};

impl<'a, S, C> Workflows<'a, S, C>
where
    S: CatalogStore + ?Sized,
    C: Console + ?Sized,
{
    /// Prompt for a new category and insert it.
    pub fn add_category(&mut self) -> Result<Report> {
        let _log = self.ctx.enter();
        let mut run = Run::start(WorkflowKind::AddCategory);

        let name = proceed!(run, self.read(NAME, "Enter Category Name:", input::non_empty));
        let description = proceed!(
            run,
            self.read(DESCRIPTION, "Enter Category Description:", input::non_empty)
        );
        let category = NewCategory { name, description };

        run.enter(Stage::Validating);
        let failures = category.validate();
        if !failures.is_empty() {
            return self.reject_record(run, failures);
        }

        run.enter(Stage::CheckingUniqueness);
        if self.store.category_name_exists(&category.name)? {
            return self.reject_record(run, vec![ValidationFailure::duplicate_name(NAME.name)]);
        }
        info!("Validation passed");

        run.enter(Stage::Persisting);
        match self.store.insert_category(&category) {
            Ok(id) => {
                info!(%id, name = %category.name, "Category added to database");
                let message = format!("{} added to database", category.summary());
                self.console.show(Tone::Category, &message)?;
                Ok(run.done(id.get(), message))
            }
            Err(err) => self.reject_write(run, err),
        }
    }

    /// Pick a category and rewrite the fields the operator changes.
    ///
    /// The name is not re-checked for uniqueness unless
    /// `check_unique_on_edit` is set.
    pub fn edit_category(&mut self) -> Result<Report> {
        let _log = self.ctx.enter();
        let mut run = Run::start(WorkflowKind::EditCategory);

        let store = self.store;
        let selection = self.selector().category(store)?;
        let mut category = proceed!(run, chosen(EntityKind::Category, selection));
        info!(category = %category.name, "Category selected");
        let original_name = category.name.clone();

        let prompt = format!(
            "Enter New Category Name or Leave Blank to Keep: {}",
            category.name
        );
        category.name = proceed!(
            run,
            self.read_or_keep(NAME, category.name.clone(), &prompt, input::non_empty)
        );

        let prompt = format!(
            "Enter New Category Description or Leave Blank to Keep: {}",
            category.description
        );
        category.description = proceed!(
            run,
            self.read_or_keep(
                DESCRIPTION,
                category.description.clone(),
                &prompt,
                input::non_empty
            )
        );

        run.enter(Stage::Validating);
        let failures = category.validate();
        if !failures.is_empty() {
            return self.reject_record(run, failures);
        }

        if self.ctx.settings.check_unique_on_edit && category.name != original_name {
            run.enter(Stage::CheckingUniqueness);
            if self.store.category_name_exists(&category.name)? {
                return self
                    .reject_record(run, vec![ValidationFailure::duplicate_name(NAME.name)]);
            }
        }

        run.enter(Stage::Persisting);
        match self.store.update_category(&category) {
            Ok(()) => {
                info!(id = %category.id, "Category updated in database");
                let message = format!("{} updated in database", category.summary());
                self.console.show(Tone::Category, &message)?;
                Ok(run.done(category.id.get(), message))
            }
            Err(err) => self.reject_write(run, err),
        }
    }

    /// Pick a category and delete it. There is no confirmation step; the
    /// store refuses while products still belong to the category.
    pub fn remove_category(&mut self) -> Result<Report> {
        let _log = self.ctx.enter();
        let mut run = Run::start(WorkflowKind::RemoveCategory);

        let store = self.store;
        let selection = self.selector().category(store)?;
        let category = proceed!(run, chosen(EntityKind::Category, selection));

        run.enter(Stage::Persisting);
        match self.store.delete_category(category.id) {
            Ok(()) => {
                info!(id = %category.id, "Category removed from database");
                let message = format!("{} removed from database", category.name);
                self.console.show(Tone::Category, &message)?;
                Ok(run.done(category.id.get(), message))
            }
            Err(err) => self.reject_write(run, err),
        }
    }
}
