//! # Searching
//!
//! Locate a target value in an integer sequence.
//!
//! - `linear-search`: any sequence, returns the first match
//! - `binary-search`: non-decreasing sequences only, O(log n); registered
//!   under its own category because its input rule is stricter

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use rand::rngs::StdRng;
use rand::Rng;
use serde_json::{json, Value};

use crate::error::ComputeFault;
use crate::registry::{unexpected_input, AlgorithmUnit, Category};
use crate::sorting::{merge_sort, random_sequence};
use crate::utils::{log2_ceil, OpCounter};
use crate::value::{Input, Output, SortOrder};

fn run_search(
    id: &str,
    search: SearchFn,
    input: &Input,
    ops: &mut OpCounter,
) -> Result<Output, ComputeFault> {
    match input {
        Input::Search { values, target } => search(values, *target, ops).map(Output::Index),
        other => Err(unexpected_input(id, other)),
    }
}

/// Query against `size` random values; the target is present about half the time.
fn random_query(size: usize, sorted: bool, rng: &mut StdRng) -> Option<Value> {
    let mut values = random_sequence(size, rng);
    if sorted {
        values = merge_sort(&values, SortOrder::Ascending, &mut OpCounter::unbounded()).ok()?;
    }
    let target = if !values.is_empty() && rng.random_bool(0.5) {
        values[rng.random_range(0..values.len())]
    } else {
        rng.random_range(-1000..1000)
    };
    Some(json!({ "values": values, "target": target }))
}

pub struct LinearSearch;

impl AlgorithmUnit for LinearSearch {
    fn id(&self) -> &'static str {
        "linear-search"
    }

    fn name(&self) -> &'static str {
        "Linear Search"
    }

    fn description(&self) -> &'static str {
        "Checks each element in turn until the target is found"
    }

    fn category(&self) -> Category {
        Category::Searching
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        input.size() as u64 + 1
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        run_search(self.id(), linear_search, input, ops)
    }

    fn sample_input(&self) -> Value {
        json!({ "values": [4, 8, 15, 16, 23, 42], "target": 16 })
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        random_query(size, false, rng)
    }
}

pub struct BinarySearch;

impl AlgorithmUnit for BinarySearch {
    fn id(&self) -> &'static str {
        "binary-search"
    }

    fn name(&self) -> &'static str {
        "Binary Search"
    }

    fn description(&self) -> &'static str {
        "Repeatedly halves a sorted range around the target"
    }

    fn category(&self) -> Category {
        Category::SortedSearching
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        log2_ceil(input.size()) + 1
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        run_search(self.id(), binary_search, input, ops)
    }

    fn sample_input(&self) -> Value {
        json!({ "values": [4, 8, 15, 16, 23, 42], "target": 23 })
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        random_query(size, true, rng)
    }
}
