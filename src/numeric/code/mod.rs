//! Integer sequence implementations.

mod factorial;
mod fibonacci;

pub use factorial::{factorial, MAX_FACTORIAL_INPUT};
pub use fibonacci::{fibonacci, MAX_FIBONACCI_INPUT};

use crate::error::ComputeFault;
use crate::utils::{OpCounter, VariantInfo};

/// Type alias for the sequence function signature
pub type SequenceFn = fn(u64, &mut OpCounter) -> Result<u128, ComputeFault>;

/// Get all integer sequence implementations
pub fn available_variants() -> Vec<VariantInfo<SequenceFn>> {
    vec![
        VariantInfo {
            name: "factorial",
            description: "Recursive n!",
            function: factorial,
        },
        VariantInfo {
            name: "fibonacci",
            description: "Iterative F(n)",
            function: fibonacci,
        },
    ]
}
