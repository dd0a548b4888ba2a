//! Shuffling implementations.

mod fisher_yates;

pub use fisher_yates::{fisher_yates, standard_deck, RANKS, SUITS};
