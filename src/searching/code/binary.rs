//! Binary search over a non-decreasing sequence.

use std::cmp::Ordering;

use crate::error::ComputeFault;
use crate::utils::OpCounter;

/// Index of an element equal to `target` in the non-decreasing `values`.
///
/// Halves the candidate range `[low, high)` after every comparison. With
/// duplicates any matching index may be returned.
///
/// # Example
/// ```
/// use algo_workbench::searching::binary_search;
/// use algo_workbench::utils::OpCounter;
///
/// let mut ops = OpCounter::unbounded();
/// assert_eq!(binary_search(&[1, 3, 5, 7], 5, &mut ops).unwrap(), Some(2));
/// assert_eq!(binary_search(&[1, 3, 5, 7], 4, &mut ops).unwrap(), None);
/// ```
pub fn binary_search(
    values: &[i64],
    target: i64,
    ops: &mut OpCounter,
) -> Result<Option<usize>, ComputeFault> {
    let (mut low, mut high) = (0, values.len());

    while low < high {
        ops.tick()?;
        let mid = low + (high - low) / 2;
        match values[mid].cmp(&target) {
            Ordering::Equal => return Ok(Some(mid)),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    Ok(None)
}
