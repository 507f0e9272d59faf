//! Northwind - interactive maintenance console for the Northwind catalog.
//!
//! Operators browse categories and products and add, edit or remove them
//! through a line-oriented menu. Every change goes through a workflow that
//! parses each field, validates the assembled record, checks the name is
//! free and only then writes, with exactly one store call per completed
//! run and none on any abort.
//!
//! # Architecture
//!
//! - **`domain`** - Categories, suppliers, products and their field rules
//! - **`port`** - The record store and console boundaries
//! - **`application`** - Input parsing, entity selection, workflows and
//!   read-only listings
//! - **`adapter`** - SQLite store (Diesel) and the clap/terminal front end
//! - **`infrastructure`** - Configuration, logging and bootstrap
//!
//! # Example
//!
//! ```no_run
//! use northwind::application::{Context, WorkflowSettings, Workflows};
//! use northwind::infrastructure::bootstrap::open_store;
//! use northwind::adapter::inbound::cli::terminal::Terminal;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = open_store("northwind.db")?;
//!     let ctx = Context::silent(WorkflowSettings::default());
//!     let mut console = Terminal::stdio(false);
//!     let report = Workflows::new(&store, &mut console, &ctx).add_category()?;
//!     println!("{:?}", report.outcome);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
