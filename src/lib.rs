//! # Algorithm Workbench
//!
//! A catalogue of classic algorithms behind one execution harness. Each
//! algorithm is a unit registered under a stable id; the harness validates
//! raw input against the unit's declared shape, runs it once under a step
//! budget and reports output, wall time and operation count. Per-category
//! oracles judge the outputs independently of any unit.

pub mod cryptography;
pub mod dynamic_programming;
pub mod error;
pub mod graph;
pub mod harness;
pub mod numeric;
pub mod oracle;
pub mod registry;
pub mod report;
pub mod searching;
pub mod shuffling;
pub mod sorting;
pub mod statistics;
pub mod string_matching;
pub mod tui;
pub mod utils;
pub mod validator;
pub mod value;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{ComputeFault, RegistryError, ReportError};
    pub use crate::harness::{execute, BudgetPolicy, ExecutionResult, Harness, HarnessConfig};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmUnit, Category};
    pub use crate::report::{format, import_output, History, Report};
    pub use crate::utils::{OpCounter, PinStrategy};
    pub use crate::validator::{validate, ValidationOutcome};
    pub use crate::value::{Input, InputShape, Output};
}
