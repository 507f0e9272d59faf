//! Add, edit and remove workflows for categories and products.
//!
//! Every workflow walks the same stages:
//!
//! ```text
//! CollectingFields → Validating → CheckingUniqueness → Persisting → Done
//!        └──────────────┴──────────────┴──→ Aborted
//! ```
//!
//! The first bad field, unresolved selection or failed validation aborts
//! the whole run. Nothing is written before `Persisting`, and a run makes at
//! most one insert, update or delete call. No step is ever retried.

mod category;
mod product;

use std::fmt;
use std::ops::ControlFlow;

use tracing::{debug, error, info, warn};

use super::context::Context;
use super::input::{self, InputError};
use super::selector::{Selection, Selector};
use crate::domain::{EntityKind, ValidationFailure};
use crate::error::Result;
use crate::port::outbound::console::{Console, Tone};
use crate::port::outbound::store::CatalogStore;

/// Where a run is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectingFields,
    Validating,
    CheckingUniqueness,
    Persisting,
    Done,
    Aborted,
}

/// The six workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    AddCategory,
    EditCategory,
    RemoveCategory,
    AddProduct,
    EditProduct,
    RemoveProduct,
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AddCategory => "add-category",
            Self::EditCategory => "edit-category",
            Self::RemoveCategory => "remove-category",
            Self::AddProduct => "add-product",
            Self::EditProduct => "edit-product",
            Self::RemoveProduct => "remove-product",
        };
        f.write_str(name)
    }
}

/// Why a run stopped without persisting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Abort {
    /// A field could not be parsed.
    Input {
        field: &'static str,
        error: InputError,
    },
    /// The operator's reply did not identify a record.
    InvalidSelection {
        entity: EntityKind,
        error: InputError,
    },
    /// The identifier named no record.
    NotFound { entity: EntityKind, id: i32 },
    /// The assembled record failed validation; includes `DuplicateName`.
    Validation(Vec<ValidationFailure>),
    /// The store refused or failed the write.
    Persistence(String),
}

impl fmt::Display for Abort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input { field, error } => write!(f, "{field}: {error}"),
            Self::InvalidSelection { entity, error } => {
                write!(f, "invalid {entity} selection: {error}")
            }
            Self::NotFound { entity, id } => write!(f, "{entity} {id} not found"),
            Self::Validation(failures) => {
                let joined: Vec<String> = failures.iter().map(ToString::to_string).collect();
                write!(f, "validation failed: {}", joined.join("; "))
            }
            Self::Persistence(reason) => write!(f, "persistence failed: {reason}"),
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The single write succeeded. `id` is the affected record.
    Completed { id: i32, message: String },
    Aborted(Abort),
}

/// What one run did, stage by stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub workflow: WorkflowKind,
    pub stages: Vec<Stage>,
    pub outcome: Outcome,
}

impl Report {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, Outcome::Completed { .. })
    }

    #[must_use]
    pub fn abort(&self) -> Option<&Abort> {
        match &self.outcome {
            Outcome::Aborted(abort) => Some(abort),
            Outcome::Completed { .. } => None,
        }
    }

    /// Identifier of the affected record, if the run completed.
    #[must_use]
    pub fn record_id(&self) -> Option<i32> {
        match &self.outcome {
            Outcome::Completed { id, .. } => Some(*id),
            Outcome::Aborted(_) => None,
        }
    }
}

/// Stage bookkeeping for one run.
struct Run {
    workflow: WorkflowKind,
    stages: Vec<Stage>,
}

impl Run {
    fn start(workflow: WorkflowKind) -> Self {
        info!(%workflow, "Workflow started");
        Self {
            workflow,
            stages: vec![Stage::CollectingFields],
        }
    }

    fn enter(&mut self, stage: Stage) {
        debug!(workflow = %self.workflow, ?stage, "Stage entered");
        self.stages.push(stage);
    }

    fn aborted(mut self, abort: Abort) -> Report {
        warn!(workflow = %self.workflow, reason = %abort, "Workflow aborted");
        self.stages.push(Stage::Aborted);
        Report {
            workflow: self.workflow,
            stages: self.stages,
            outcome: Outcome::Aborted(abort),
        }
    }

    fn done(mut self, id: i32, message: String) -> Report {
        info!(workflow = %self.workflow, id, "Workflow completed");
        self.stages.push(Stage::Done);
        Report {
            workflow: self.workflow,
            stages: self.stages,
            outcome: Outcome::Completed { id, message },
        }
    }
}

/// A prompted field: the name used in logs and validation, the label used
/// in operator messages.
#[derive(Debug, Clone, Copy)]
struct Field {
    name: &'static str,
    label: &'static str,
}

/// Unwrap a collection step or end the run with the abort it carries.
macro_rules! proceed {
    ($run:ident, $step:expr) => {
        match $step? {
            ::std::ops::ControlFlow::Continue(value) => value,
            ::std::ops::ControlFlow::Break(abort) => return Ok($run.aborted(abort)),
        }
    };
}
use proceed;

type Step<T> = Result<ControlFlow<Abort, T>>;

/// Runs workflows against one store through one console.
pub struct Workflows<'a, S: ?Sized, C: ?Sized> {
    store: &'a S,
    console: &'a mut C,
    ctx: &'a Context,
}

impl<'a, S, C> Workflows<'a, S, C>
where
    S: CatalogStore + ?Sized,
    C: Console + ?Sized,
{
    pub fn new(store: &'a S, console: &'a mut C, ctx: &'a Context) -> Self {
        Self {
            store,
            console,
            ctx,
        }
    }

    fn selector(&mut self) -> Selector<'_, C> {
        Selector::new(&mut *self.console, self.ctx)
    }

    /// Prompt for a required field.
    fn read<T>(
        &mut self,
        field: Field,
        prompt: &str,
        parse: impl FnOnce(&str) -> std::result::Result<T, InputError>,
    ) -> Step<T> {
        let reply = self.console.ask(prompt)?;
        match parse(&reply) {
            Ok(value) => Ok(ControlFlow::Continue(value)),
            Err(error) => self.reject_input(field, error),
        }
    }

    /// Prompt for a field that keeps `current` on a blank line.
    fn read_or_keep<T>(
        &mut self,
        field: Field,
        current: T,
        prompt: &str,
        parse: impl FnOnce(&str) -> std::result::Result<T, InputError>,
    ) -> Step<T> {
        let reply = self.console.ask(prompt)?;
        match input::keep_or(&reply, parse) {
            Ok(Some(value)) => Ok(ControlFlow::Continue(value)),
            Ok(None) => {
                debug!(field = field.name, "Field kept");
                Ok(ControlFlow::Continue(current))
            }
            Err(error) => self.reject_input(field, error),
        }
    }

    fn reject_input<T>(&mut self, field: Field, error: InputError) -> Step<T> {
        warn!(field = field.name, %error, "Invalid input");
        self.console.show(Tone::Error, &error.describe(field.label))?;
        Ok(ControlFlow::Break(Abort::Input {
            field: field.name,
            error,
        }))
    }

    /// Print and log every failure, then abort with all of them.
    fn reject_record(&mut self, run: Run, failures: Vec<ValidationFailure>) -> Result<Report> {
        for failure in &failures {
            error!("{failure}");
            self.console.show(Tone::Error, &failure.to_string())?;
        }
        Ok(run.aborted(Abort::Validation(failures)))
    }

    fn reject_write(&mut self, run: Run, err: crate::error::Error) -> Result<Report> {
        error!(error = %err, "Store write failed");
        self.console
            .show(Tone::Error, &format!("Operation failed: {err}"))?;
        Ok(run.aborted(Abort::Persistence(err.to_string())))
    }
}

/// Turn a selection into the selected record or the abort it implies.
fn chosen<T>(entity: EntityKind, selection: Selection<T>) -> Step<T> {
    Ok(match selection {
        Selection::Found(record) => ControlFlow::Continue(record),
        Selection::NotFound(id) => ControlFlow::Break(Abort::NotFound { entity, id }),
        Selection::Invalid(error) => ControlFlow::Break(Abort::InvalidSelection { entity, error }),
    })
}
