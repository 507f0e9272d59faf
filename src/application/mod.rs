//! Application services (use cases).
//!
//! Everything here talks to the outside world only through the
//! [`Console`](crate::port::outbound::console::Console) and
//! [`CatalogStore`](crate::port::outbound::store::CatalogStore) ports.

pub mod catalog;
pub mod context;
pub mod input;
pub mod seed;
pub mod selector;
pub mod workflow;

pub use catalog::Catalog;
pub use context::{Context, WorkflowSettings};
pub use selector::{Selection, Selector};
pub use workflow::{Abort, Outcome, Report, Stage, WorkflowKind, Workflows};
