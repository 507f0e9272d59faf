//! SQLite persistence adapter.
//!
//! Implements the catalog store ports with Diesel over a pooled, bundled
//! SQLite. Schema changes ship as embedded migrations.

pub mod database;
pub mod store;

pub use store::SqliteCatalogStore;
