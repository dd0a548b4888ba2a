//! # Statistics
//!
//! Five-number summary plus mode of a non-empty integer sample.

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use rand::rngs::StdRng;
use serde_json::{json, Value};

use crate::error::ComputeFault;
use crate::registry::{unexpected_input, AlgorithmUnit, Category};
use crate::sorting::random_sequence;
use crate::utils::{log2_ceil, OpCounter};
use crate::value::{Input, Output};

pub struct SummaryStatistics;

impl AlgorithmUnit for SummaryStatistics {
    fn id(&self) -> &'static str {
        "summary-statistics"
    }

    fn name(&self) -> &'static str {
        "Summary Statistics"
    }

    fn description(&self) -> &'static str {
        "Smallest, largest, median, first and third quartile and mode of a sample"
    }

    fn category(&self) -> Category {
        Category::Statistics
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        let n = input.size();
        (n as u64).saturating_mul(log2_ceil(n) + 1) + 1
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        match input {
            Input::Sequence { values, .. } => summarize(values, ops).map(Output::Statistics),
            other => Err(unexpected_input(self.id(), other)),
        }
    }

    fn sample_input(&self) -> Value {
        json!([5, 2, 2, 9, 1])
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        Some(json!(random_sequence(size.max(1), rng)))
    }
}
