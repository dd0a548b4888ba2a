//! Iterative Fibonacci.

use crate::error::ComputeFault;
use crate::utils::OpCounter;

/// Largest `n` whose Fibonacci number fits in a `u128`.
pub const MAX_FIBONACCI_INPUT: u64 = 186;

/// `F(n)` with `F(0) = 0` and `F(1) = 1`, by walking the pair `(F(k), F(k+1))`.
pub fn fibonacci(n: u64, ops: &mut OpCounter) -> Result<u128, ComputeFault> {
    let (mut current, mut next) = (0u128, 1u128);
    for k in 0..n {
        ops.tick()?;
        let following = if k + 1 < n {
            current
                .checked_add(next)
                .ok_or_else(|| ComputeFault::overflow(format!("F({}) exceeds 128 bits", k + 2)))?
        } else {
            // F(n + 1) is never reported
            0
        };
        current = next;
        next = following;
    }
    Ok(current)
}
