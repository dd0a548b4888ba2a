//! # Shuffling
//!
//! Uniform random permutations. Runs are reproducible: the same seed always
//! deals the same deck.

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use crate::error::ComputeFault;
use crate::registry::{unexpected_input, AlgorithmUnit, Category};
use crate::utils::OpCounter;
use crate::value::{Input, Output};

/// Deal a shuffled deck for `seed`.
pub fn shuffle_deck(seed: u64, ops: &mut OpCounter) -> Result<Vec<String>, ComputeFault> {
    let mut deck = standard_deck();
    let mut rng = StdRng::seed_from_u64(seed);
    fisher_yates(&mut deck, &mut rng, ops)?;
    Ok(deck)
}

pub struct ShuffleDeck;

impl AlgorithmUnit for ShuffleDeck {
    fn id(&self) -> &'static str {
        "shuffle-deck"
    }

    fn name(&self) -> &'static str {
        "Shuffle Deck"
    }

    fn description(&self) -> &'static str {
        "Fisher-Yates shuffle of a standard 52-card deck"
    }

    fn category(&self) -> Category {
        Category::Shuffling
    }

    fn worst_case_ops(&self, _input: &Input) -> u64 {
        (RANKS.len() * SUITS.len()) as u64
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        match input {
            Input::Seed(seed) => shuffle_deck(*seed, ops).map(Output::Deck),
            other => Err(unexpected_input(self.id(), other)),
        }
    }

    fn sample_input(&self) -> Value {
        json!({ "seed": 42 })
    }

    /// The deck has a fixed size; `size` is ignored.
    fn generate_input(&self, _size: usize, rng: &mut StdRng) -> Option<Value> {
        Some(json!(rng.random::<u32>()))
    }
}
