//! Top-down merge sort.

use crate::error::ComputeFault;
use crate::utils::OpCounter;
use crate::value::SortOrder;

/// Stable divide-and-conquer sort returning a new vector.
///
/// One operation is counted per comparison and per element copied while
/// merging.
pub fn merge_sort(
    values: &[i64],
    order: SortOrder,
    ops: &mut OpCounter,
) -> Result<Vec<i64>, ComputeFault> {
    if values.len() <= 1 {
        return Ok(values.to_vec());
    }

    let middle = values.len() / 2;
    let left = merge_sort(&values[..middle], order, ops)?;
    let right = merge_sort(&values[middle..], order, ops)?;

    merge(&left, &right, order, ops)
}

fn merge(
    left: &[i64],
    right: &[i64],
    order: SortOrder,
    ops: &mut OpCounter,
) -> Result<Vec<i64>, ComputeFault> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);

    while l < left.len() && r < right.len() {
        ops.tick()?;
        // ties take from the left half to keep the sort stable
        if order.in_order(left[l], right[r]) {
            merged.push(left[l]);
            l += 1;
        } else {
            merged.push(right[r]);
            r += 1;
        }
    }

    let rest = left.len() - l + right.len() - r;
    ops.tick_n(rest as u64)?;
    merged.extend_from_slice(&left[l..]);
    merged.extend_from_slice(&right[r..]);

    Ok(merged)
}
