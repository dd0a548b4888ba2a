//! Fisher-Yates shuffle of a playing-card deck.

use rand::rngs::StdRng;
use rand::Rng;

use crate::error::ComputeFault;
use crate::utils::OpCounter;

pub const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];
pub const SUITS: [char; 4] = ['♠', '♥', '♦', '♣'];

/// The 52 cards in suit-major order: `A♠ 2♠ ... K♠ A♥ ... K♣`.
pub fn standard_deck() -> Vec<String> {
    SUITS
        .iter()
        .flat_map(|suit| RANKS.iter().map(move |rank| format!("{}{}", rank, suit)))
        .collect()
}

/// Shuffle `items` in place.
///
/// Walks from the back, swapping each slot with a uniformly chosen slot at or
/// before it, so every permutation is equally likely given a uniform `rng`.
pub fn fisher_yates<T>(
    items: &mut [T],
    rng: &mut StdRng,
    ops: &mut OpCounter,
) -> Result<(), ComputeFault> {
    for i in (1..items.len()).rev() {
        ops.tick()?;
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
    Ok(())
}
