//! The interactive menu loop.
//!
//! A typed choice maps to a listing or a workflow; every workflow reports
//! its own outcome, so the menu only routes. The main menu quits on any
//! choice it does not know, the sub-menus return to the main menu.

use tracing::{error, info};

use crate::application::{Catalog, Context, Workflows};
use crate::error::{Error, Result};
use crate::port::outbound::console::{Console, Tone};
use crate::port::outbound::store::{CatalogStore, ProductFilter};

const MAIN_MENU: [&str; 3] = ["1) Categories Menu", "2) Products Menu", "0) Quit"];

const CATEGORY_MENU: [&str; 7] = [
    "1) Display All Categories",
    "2) Display All Categories & Active Products",
    "3) Display Single Category & Active Products",
    "4) Add Category",
    "5) Edit Category",
    "6) Remove Category",
    "0) Return to Main Menu",
];

const PRODUCT_MENU: [&str; 6] = [
    "1) Display Products",
    "2) Display Product Details",
    "3) Add Product",
    "4) Edit Product",
    "5) Remove Product",
    "0) Return to Main Menu",
];

const PRODUCT_FILTER_MENU: [&str; 4] = [
    "Display which Products:",
    "1) All Products",
    "2) Active Products only",
    "3) Discontinued Products only",
];

/// The menu screens over one store and one console.
pub struct Menu<'a, S: ?Sized, C> {
    store: &'a S,
    console: C,
    ctx: &'a Context,
}

impl<'a, S, C> Menu<'a, S, C>
where
    S: CatalogStore + ?Sized,
    C: Console,
{
    pub fn new(store: &'a S, console: C, ctx: &'a Context) -> Self {
        Self {
            store,
            console,
            ctx,
        }
    }

    /// Recover the console, for tests that inspect what was printed.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Loop until the operator quits or input ends.
    ///
    /// A failed listing or workflow is reported and the loop goes on; only a
    /// console that can no longer be written to ends it with an error.
    ///
    /// # Errors
    /// Returns an error if the console fails.
    pub fn run(&mut self) -> Result<()> {
        let _log = self.ctx.enter();
        info!("Program started");

        loop {
            let Some(choice) = self.choose(&MAIN_MENU)? else {
                info!("Input closed");
                break;
            };
            let result = match choice.as_str() {
                "1" => self.categories_menu(),
                "2" => self.products_menu(),
                _ => break,
            };
            match result {
                Ok(()) => {}
                Err(Error::InputClosed) => {
                    info!("Input closed");
                    break;
                }
                Err(err) => {
                    error!(error = %err, "Menu action failed");
                    self.console.show(Tone::Error, &format!("Error: {err}"))?;
                }
            }
        }

        info!("Exiting program");
        Ok(())
    }

    /// Print `lines`, read a choice, clear the screen and log the choice.
    /// `None` once input is exhausted.
    fn choose(&mut self, lines: &[&str]) -> Result<Option<String>> {
        for line in lines {
            self.console.say(line)?;
        }
        let Some(choice) = self.console.read_line()? else {
            return Ok(None);
        };
        self.console.clear()?;
        info!(choice = %choice, "Option selected");
        Ok(Some(choice))
    }

    fn categories_menu(&mut self) -> Result<()> {
        let choice = self.choose(&CATEGORY_MENU)?.ok_or(Error::InputClosed)?;
        match choice.as_str() {
            "1" => {
                self.catalog().categories()?;
            }
            "2" => {
                self.catalog().categories_with_products()?;
            }
            "3" => {
                self.catalog().category()?;
            }
            "4" => {
                self.workflows().add_category()?;
            }
            "5" => {
                self.workflows().edit_category()?;
            }
            "6" => {
                self.workflows().remove_category()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn products_menu(&mut self) -> Result<()> {
        let choice = self.choose(&PRODUCT_MENU)?.ok_or(Error::InputClosed)?;
        match choice.as_str() {
            "1" => self.products_listing()?,
            "2" => {
                self.catalog().product_details()?;
            }
            "3" => {
                self.workflows().add_product()?;
            }
            "4" => {
                self.workflows().edit_product()?;
            }
            "5" => {
                self.workflows().remove_product()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn products_listing(&mut self) -> Result<()> {
        for line in PRODUCT_FILTER_MENU {
            self.console.say(line)?;
        }
        let choice = self.console.answer()?;
        self.console.clear()?;
        let filter = match choice.as_str() {
            "1" => ProductFilter::All,
            "2" => ProductFilter::Active,
            "3" => ProductFilter::Discontinued,
            _ => {
                self.console.show(Tone::Warning, "Invalid choice")?;
                return Ok(());
            }
        };
        self.catalog().products(filter)?;
        Ok(())
    }

    fn catalog(&mut self) -> Catalog<'_, S, C> {
        Catalog::new(self.store, &mut self.console, self.ctx)
    }

    fn workflows(&mut self) -> Workflows<'_, S, C> {
        Workflows::new(self.store, &mut self.console, self.ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::WorkflowSettings;
    use crate::port::outbound::store::{CategoryStore, ProductStore};
    use crate::testkit::console::ScriptedConsole;
    use crate::testkit::store::MemoryStore;

    fn run(store: &MemoryStore, script: &[&str]) -> ScriptedConsole {
        let ctx = Context::silent(WorkflowSettings::default());
        let mut menu = Menu::new(store, ScriptedConsole::new(script.iter().copied()), &ctx);
        menu.run().unwrap();
        menu.into_console()
    }

    #[test]
    fn unknown_main_choice_quits() {
        let store = MemoryStore::northwind();
        let console = run(&store, &["x", "1", "1"]);

        assert!(!console.is_drained());
        assert!(!console.printed_containing("Categories found"));
    }

    #[test]
    fn end_of_input_quits_quietly() {
        let store = MemoryStore::northwind();
        let console = run(&store, &["1", "4", "Produce"]);

        assert!(console.is_drained());
        assert_eq!(store.calls().inserts, 0);
    }

    #[test]
    fn category_listing_then_quit() {
        let store = MemoryStore::northwind();
        let console = run(&store, &["1", "1", "0"]);

        assert!(console.printed_containing("3 Categories found"));
        assert!(console.clears() >= 2);
    }

    #[test]
    fn add_category_from_the_menu() {
        let store = MemoryStore::northwind();
        let console = run(&store, &["1", "4", "Produce", "Dried fruit and bean curd", "0"]);

        assert_eq!(store.calls().inserts, 1);
        assert!(console.printed_containing("Produce - Dried fruit and bean curd added to database"));
        assert!(store.category_name_exists("Produce").unwrap());
    }

    #[test]
    fn aborted_workflow_returns_to_the_main_menu() {
        let store = MemoryStore::northwind();
        let console = run(&store, &["2", "3", "", "2", "1", "1", "0"]);

        assert_eq!(store.calls().inserts, 0);
        assert!(console.printed_containing("6 Products returned"));
    }

    #[test]
    fn unknown_product_filter_is_reported() {
        let store = MemoryStore::northwind();
        let console = run(&store, &["2", "1", "7", "0"]);

        assert!(console.printed_containing("Invalid choice"));
        assert!(!console.printed_containing("Products returned"));
    }

    #[test]
    fn unknown_sub_menu_choice_returns_to_main_menu() {
        let store = MemoryStore::northwind();
        let console = run(&store, &["2", "9", "2", "5", "1", "0"]);

        assert_eq!(store.calls().deletes, 1);
        assert!(store
            .get_product(crate::domain::ProductId::new(1))
            .unwrap()
            .is_none());
        assert!(console.is_drained());
    }

    #[test]
    fn store_refusal_keeps_the_loop_running() {
        let store = MemoryStore::northwind();
        let console = run(&store, &["1", "6", "1", "1", "1", "0"]);

        assert_eq!(store.calls().deletes, 1);
        assert_eq!(store.category_count(), 3);
        assert!(console.printed_containing("Categories found"));
    }
}
