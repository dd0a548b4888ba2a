//! Execution harness: validate, run once, measure, wrap.
//!
//! Everything below this boundary (invalid input, budget exhaustion, faults,
//! panics) comes back as an [`ExecutionResult`]. Only an unknown id is
//! returned as an error, since there is no unit to attribute a result to.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

use crate::error::{ComputeFault, RegistryError};
use crate::registry::{AlgorithmRegistry, AlgorithmUnit, Category};
use crate::utils::{OpCounter, PinStrategy, Stopwatch};
use crate::validator;
use crate::value::Output;
use serde_json::Value;

/// Lower bound for scaled step budgets so tiny inputs still get headroom.
pub const MIN_STEP_BUDGET: u64 = 1_000;

/// How the step budget for a run is chosen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetPolicy {
    /// `worst_case_ops(input) * factor`, at least [`MIN_STEP_BUDGET`]
    Scaled(u64),
    /// Same ceiling for every run
    Fixed(u64),
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self::Scaled(10)
    }
}

impl BudgetPolicy {
    /// Budget for a unit whose worst case is `worst_case` operations.
    pub fn budget_for(self, worst_case: u64) -> u64 {
        match self {
            Self::Scaled(factor) => worst_case.saturating_mul(factor).max(MIN_STEP_BUDGET),
            Self::Fixed(limit) => limit,
        }
    }
}

/// Configuration for harness runs
#[derive(Clone, Debug, Default)]
pub struct HarnessConfig {
    /// Step budget policy (default: 10x the unit's worst case)
    pub budget: BudgetPolicy,
    /// CPU pinning while the computation runs (default: PerRun)
    pub pin_strategy: PinStrategy,
}

/// Stage of the pipeline that produced a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Validation,
    Execution,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Execution => "execution",
        }
    }
}

/// Readable failure plus the stage that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub stage: Stage,
    pub message: String,
}

/// Either an output or a failure, never both.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Success(Output),
    Failure(Failure),
}

/// Result envelope of one harness run.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutionResult {
    pub id: String,
    pub category: Category,
    pub outcome: Outcome,
    pub elapsed: Duration,
    pub operations: u64,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    /// Output, present iff the run succeeded.
    pub fn output(&self) -> Option<&Output> {
        match &self.outcome {
            Outcome::Success(output) => Some(output),
            Outcome::Failure(_) => None,
        }
    }

    /// Failure, present iff the run failed.
    pub fn failure(&self) -> Option<&Failure> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Error description, present iff the run failed.
    pub fn error(&self) -> Option<&str> {
        self.failure().map(|f| f.message.as_str())
    }
}

/// Runs registered units by id with one configuration.
pub struct Harness<'r> {
    registry: &'r AlgorithmRegistry,
    config: HarnessConfig,
}

impl<'r> Harness<'r> {
    pub fn new(registry: &'r AlgorithmRegistry, config: HarnessConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn registry(&self) -> &'r AlgorithmRegistry {
        self.registry
    }

    /// Look up `id` and execute it once against `raw`.
    pub fn run(&self, id: &str, raw: &Value) -> Result<ExecutionResult, RegistryError> {
        let unit = self.registry.lookup(id)?;
        Ok(execute(unit, raw, &self.config))
    }
}

/// Validate `raw` for `unit`, run the computation once and wrap the outcome.
pub fn execute(unit: &dyn AlgorithmUnit, raw: &Value, config: &HarnessConfig) -> ExecutionResult {
    let id = unit.id();
    let envelope = |outcome: Outcome, elapsed: Duration, operations: u64| ExecutionResult {
        id: id.to_string(),
        category: unit.category(),
        outcome,
        elapsed,
        operations,
    };

    let input = match validator::decode(unit.input_shape(), raw) {
        Ok(input) => input,
        Err(reason) => {
            tracing::warn!(id, %reason, "input rejected");
            let failure = Failure {
                stage: Stage::Validation,
                message: reason,
            };
            return envelope(Outcome::Failure(failure), Duration::ZERO, 0);
        }
    };

    let budget = config.budget.budget_for(unit.worst_case_ops(&input));
    let mut ops = OpCounter::with_budget(budget);
    tracing::debug!(id, size = input.size(), budget, "running algorithm");

    let watch = Stopwatch::start(config.pin_strategy);
    let computed = catch_unwind(AssertUnwindSafe(|| unit.compute(&input, &mut ops)));
    let elapsed = watch.stop();

    let result = match computed {
        Ok(result) => result,
        Err(payload) => Err(ComputeFault::Panicked(panic_message(payload.as_ref()))),
    };

    match result {
        Ok(output) => {
            tracing::info!(id, operations = ops.count(), ?elapsed, "algorithm finished");
            envelope(Outcome::Success(output), elapsed, ops.count())
        }
        Err(fault) => {
            tracing::warn!(id, operations = ops.count(), %fault, "algorithm failed");
            let failure = Failure {
                stage: Stage::Execution,
                message: fault.to_string(),
            };
            envelope(Outcome::Failure(failure), elapsed, ops.count())
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
