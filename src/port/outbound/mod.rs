//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe what the application needs from the outside
//! world: somewhere to keep records and someone to talk to.

pub mod console;
pub mod store;
