//! # Sorting
//!
//! Comparison sorts over integer sequences, ascending or descending.
//!
//! | Unit             | Comparisons (worst) | Stable |
//! |------------------|---------------------|--------|
//! | `bubble-sort`    | n²/2                | yes    |
//! | `selection-sort` | n²/2                | no     |
//! | `merge-sort`     | n·⌈log₂ n⌉          | yes    |

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use rand::rngs::StdRng;
use rand::Rng;
use serde_json::{json, Value};

use crate::error::ComputeFault;
use crate::registry::{unexpected_input, AlgorithmUnit, Category};
use crate::utils::{log2_ceil, OpCounter};
use crate::value::{Input, Output};

fn run_sort(
    id: &str,
    sort: SortFn,
    input: &Input,
    ops: &mut OpCounter,
) -> Result<Output, ComputeFault> {
    match input {
        Input::Sequence { values, order } => sort(values, *order, ops).map(Output::Sequence),
        other => Err(unexpected_input(id, other)),
    }
}

fn quadratic(input: &Input) -> u64 {
    let n = input.size() as u64;
    n.saturating_mul(n) + 1
}

/// Random sequence of `size` integers in `-1000..1000`.
pub(crate) fn random_sequence(size: usize, rng: &mut StdRng) -> Vec<i64> {
    (0..size).map(|_| rng.random_range(-1000..1000)).collect()
}

fn sample() -> Value {
    json!([5, 3, 1, 4, 2])
}

pub struct BubbleSort;

impl AlgorithmUnit for BubbleSort {
    fn id(&self) -> &'static str {
        "bubble-sort"
    }

    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn description(&self) -> &'static str {
        "Repeatedly swaps adjacent out-of-order elements until a pass makes no swap"
    }

    fn category(&self) -> Category {
        Category::Sorting
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        quadratic(input)
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        run_sort(self.id(), bubble_sort, input, ops)
    }

    fn sample_input(&self) -> Value {
        sample()
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        Some(json!(random_sequence(size, rng)))
    }
}

pub struct SelectionSort;

impl AlgorithmUnit for SelectionSort {
    fn id(&self) -> &'static str {
        "selection-sort"
    }

    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn description(&self) -> &'static str {
        "Moves the smallest (or largest) remaining element into each position in turn"
    }

    fn category(&self) -> Category {
        Category::Sorting
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        quadratic(input)
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        run_sort(self.id(), selection_sort, input, ops)
    }

    fn sample_input(&self) -> Value {
        sample()
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        Some(json!(random_sequence(size, rng)))
    }
}

pub struct MergeSort;

impl AlgorithmUnit for MergeSort {
    fn id(&self) -> &'static str {
        "merge-sort"
    }

    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn description(&self) -> &'static str {
        "Splits the sequence in halves, sorts each recursively and merges them"
    }

    fn category(&self) -> Category {
        Category::Sorting
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        let n = input.size();
        (n as u64).saturating_mul(log2_ceil(n)) + 1
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        run_sort(self.id(), merge_sort, input, ops)
    }

    fn sample_input(&self) -> Value {
        sample()
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        Some(json!(random_sequence(size, rng)))
    }
}
