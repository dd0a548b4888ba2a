//! # Numeric sequences
//!
//! Exact integer results in 128 bits. Values that do not fit are reported as
//! an overflow fault, never wrapped or truncated.

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use rand::rngs::StdRng;
use rand::Rng;
use serde_json::{json, Value};

use crate::error::ComputeFault;
use crate::registry::{unexpected_input, AlgorithmUnit, Category};
use crate::utils::OpCounter;
use crate::value::{Input, Output};

fn run_sequence(
    id: &str,
    sequence: SequenceFn,
    input: &Input,
    ops: &mut OpCounter,
) -> Result<Output, ComputeFault> {
    match input {
        Input::Integer(n) => sequence(*n, ops).map(Output::Integer),
        other => Err(unexpected_input(id, other)),
    }
}

fn argument(input: &Input) -> u64 {
    match input {
        Input::Integer(n) => *n,
        _ => 0,
    }
}

pub struct Factorial;

impl AlgorithmUnit for Factorial {
    fn id(&self) -> &'static str {
        "factorial"
    }

    fn name(&self) -> &'static str {
        "Factorial"
    }

    fn description(&self) -> &'static str {
        "Counts the arrangements of n items, n! = n * (n-1)!"
    }

    fn category(&self) -> Category {
        Category::Combinatorics
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        argument(input).min(MAX_FACTORIAL_INPUT) + 1
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        run_sequence(self.id(), factorial, input, ops)
    }

    fn sample_input(&self) -> Value {
        json!(10)
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        let ceiling = (size as u64).min(MAX_FACTORIAL_INPUT);
        Some(json!(rng.random_range(0..=ceiling)))
    }
}

pub struct Fibonacci;

impl AlgorithmUnit for Fibonacci {
    fn id(&self) -> &'static str {
        "fibonacci"
    }

    fn name(&self) -> &'static str {
        "Fibonacci"
    }

    fn description(&self) -> &'static str {
        "n-th term of F(n) = F(n-1) + F(n-2), F(0) = 0, F(1) = 1"
    }

    fn category(&self) -> Category {
        Category::Recurrence
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        argument(input).saturating_add(1)
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        run_sequence(self.id(), fibonacci, input, ops)
    }

    fn sample_input(&self) -> Value {
        json!(10)
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        let ceiling = (size as u64).min(MAX_FIBONACCI_INPUT);
        Some(json!(rng.random_range(0..=ceiling)))
    }
}
