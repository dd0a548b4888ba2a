//! Error taxonomy for the workbench.
//!
//! | Error            | Raised by            | Recovery                              |
//! |------------------|----------------------|---------------------------------------|
//! | `DuplicateId`    | `register`           | none, fatal to startup                |
//! | `NotFound`       | `lookup` / `run`     | reported as "algorithm not found"     |
//! | `ComputeFault`   | a unit's computation | contained by the harness as a Failure |
//! | `ReportError`    | report import        | adapter reports a malformed record    |
//!
//! Invalid input is not an error: it is a `ValidationOutcome`.

use thiserror::Error;

/// Failures of the registry's catalogue operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two units claimed the same id during registration.
    #[error("duplicate algorithm id '{0}'")]
    DuplicateId(String),

    /// No unit is registered under the requested id.
    #[error("algorithm '{0}' not found")]
    NotFound(String),
}

/// Internal fault signalled by a unit's computation function.
///
/// The harness converts every variant into an execution-stage Failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeFault {
    /// The operation counter hit the configured step budget.
    #[error("step budget of {budget} operations exhausted")]
    BudgetExhausted { budget: u64 },

    /// An arithmetic result does not fit the output type.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    /// The unit reached a state its own logic rules out.
    #[error("internal invariant violated: {0}")]
    InvariantViolated(String),

    /// The computation panicked; the payload message is kept.
    #[error("computation panicked: {0}")]
    Panicked(String),
}

impl ComputeFault {
    /// Build an `Overflow` fault conveniently.
    pub fn overflow(context: impl Into<String>) -> Self {
        Self::Overflow(context.into())
    }

    /// Build an `InvariantViolated` fault conveniently.
    pub fn invariant(context: impl Into<String>) -> Self {
        Self::InvariantViolated(context.into())
    }

    pub fn is_budget_exhausted(&self) -> bool {
        matches!(self, Self::BudgetExhausted { .. })
    }
}

/// Failures of the paired import adapter for formatted reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report has no '{0}' field")]
    MissingField(&'static str),

    #[error("malformed report output: {0}")]
    Malformed(#[from] serde_json::Error),
}
