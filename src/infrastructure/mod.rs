//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration, logging setup and wiring.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root: config to pool to store to context
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
