//! # String matching
//!
//! Find every occurrence of a pattern in a text. Offsets count Unicode
//! scalar values, not bytes, and overlapping occurrences are all reported.

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

fn run_matcher(
    id: &str,
    matcher: MatchFn,
    input: &Input,
    ops: &mut OpCounter,
) -> Result<Output, ComputeFault> {
    match input {
        Input::Pattern { text, pattern } => {
            let text: Vec<char> = text.chars().collect();
            let pattern: Vec<char> = pattern.chars().collect();
            matcher(&text, &pattern, ops).map(Output::Positions)
        }
        other => Err(unexpected_input(id, other)),
    }
}

fn pattern_len(input: &Input) -> u64 {
    match input {
        Input::Pattern { pattern, .. } => pattern.chars().count() as u64,
        _ => 0,
    }
}

/// Text over a small alphabet so matches actually occur.
pub(crate) fn random_text(size: usize, rng: &mut StdRng) -> String {
    (0..size).map(|_| ['a', 'b', 'c'][rng.random_range(0..3)]).collect()
}

fn random_query(size: usize, rng: &mut StdRng) -> Value {
    let pattern_len = rng.random_range(1..=4);
    json!({
        "text": random_text(size, rng),
        "pattern": random_text(pattern_len, rng),
    })
}

fn sample() -> Value {
    json!({ "text": "abracadabra", "pattern": "abra" })
}

pub struct NaiveSearch;

impl AlgorithmUnit for NaiveSearch {
    fn id(&self) -> &'static str {
        "naive-string-search"
    }

    fn name(&self) -> &'static str {
        "Naive String Search"
    }

    fn description(&self) -> &'static str {
        "Compares the pattern against every alignment of the text"
    }

    fn category(&self) -> Category {
        Category::StringMatching
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        (input.size() as u64 + 1).saturating_mul(pattern_len(input).max(1))
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        run_matcher(self.id(), naive_search, input, ops)
    }

    fn sample_input(&self) -> Value {
        sample()
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        Some(random_query(size, rng))
    }
}

pub struct KnuthMorrisPratt;

impl AlgorithmUnit for KnuthMorrisPratt {
    fn id(&self) -> &'static str {
        "knuth-morris-pratt"
    }

    fn name(&self) -> &'static str {
        "Knuth-Morris-Pratt"
    }

    fn description(&self) -> &'static str {
        "Skips redundant comparisons using a prefix failure table"
    }

    fn category(&self) -> Category {
        Category::StringMatching
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        2 * (input.size() as u64 + pattern_len(input)) + 1
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        run_matcher(self.id(), kmp_search, input, ops)
    }

    fn sample_input(&self) -> Value {
        sample()
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        Some(random_query(size, rng))
    }
}
