//! Infrastructure configuration modules.

pub mod console;
pub mod logging;
pub mod settings;
