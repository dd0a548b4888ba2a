//! # Dynamic programming
//!
//! Problems solved by filling a table of overlapping subproblems.

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use rand::rngs::StdRng;
use serde_json::{json, Value};

use crate::error::ComputeFault;
use crate::registry::{unexpected_input, AlgorithmUnit, Category};
use crate::string_matching::random_text;
use crate::utils::OpCounter;
use crate::validator::MAX_TEXT_CHARS;
use crate::value::{Input, Output};

pub struct PalindromicSubstrings;

impl AlgorithmUnit for PalindromicSubstrings {
    fn id(&self) -> &'static str {
        "palindromic-substrings"
    }

    fn name(&self) -> &'static str {
        "Palindromic Substrings"
    }

    fn description(&self) -> &'static str {
        "Lists every palindromic substring, building each length from the windows two shorter"
    }

    fn category(&self) -> Category {
        Category::DynamicProgramming
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        let n = input.size() as u64;
        n.saturating_mul(n + 1) / 2 + 1
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        match input {
            Input::Text(text) => {
                let (found, count) = palindromic_substrings(text, ops)?;
                Ok(Output::Palindromes { found, count })
            }
            other => Err(unexpected_input(self.id(), other)),
        }
    }

    fn sample_input(&self) -> Value {
        json!("racecar")
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        Some(json!(random_text(size.min(MAX_TEXT_CHARS), rng)))
    }
}
