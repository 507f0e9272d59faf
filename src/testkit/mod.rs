//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`] - [`MemoryStore`](store::MemoryStore), an in-memory record
//!   store with write counters and the same refusals as SQLite.
//! - [`console`] - [`ScriptedConsole`](console::ScriptedConsole), fed from a
//!   fixed list of lines and recording everything printed.
//! - [`domain`] - Builders for categories and products.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod console;
pub mod domain;
pub mod store;
