//! Recursive factorial.

use crate::error::ComputeFault;
use crate::utils::OpCounter;

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: u64 = 34;

/// `n!`, computed as `n * (n - 1)!` down to `0! = 1`.
///
/// Inputs above [`MAX_FACTORIAL_INPUT`] are rejected before recursing, so the
/// recursion depth stays bounded.
///
/// # Example
/// ```
/// use algo_workbench::numeric::factorial;
/// use algo_workbench::utils::OpCounter;
///
/// assert_eq!(factorial(10, &mut OpCounter::unbounded()).unwrap(), 3_628_800);
/// assert!(factorial(35, &mut OpCounter::unbounded()).is_err());
/// ```
pub fn factorial(n: u64, ops: &mut OpCounter) -> Result<u128, ComputeFault> {
    if n > MAX_FACTORIAL_INPUT {
        return Err(ComputeFault::overflow(format!("{}! exceeds 128 bits", n)));
    }
    recurse(n, ops)
}

fn recurse(n: u64, ops: &mut OpCounter) -> Result<u128, ComputeFault> {
    ops.tick()?;
    if n <= 1 {
        return Ok(1);
    }
    let rest = recurse(n - 1, ops)?;
    rest.checked_mul(n as u128)
        .ok_or_else(|| ComputeFault::overflow(format!("{}! exceeds 128 bits", n)))
}
