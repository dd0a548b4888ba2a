//! Bubble sort with early exit.

use crate::error::ComputeFault;
use crate::utils::OpCounter;
use crate::value::SortOrder;

/// Sort a copy of `values` by repeatedly swapping adjacent out-of-order pairs.
///
/// Each pass moves the largest remaining element (under `order`) to the end
/// of the unsorted prefix. A pass without swaps ends the sort early, so
/// already-sorted input costs `n - 1` comparisons.
///
/// # Example
/// ```
/// use algo_workbench::sorting::bubble_sort;
/// use algo_workbench::utils::OpCounter;
/// use algo_workbench::value::SortOrder;
///
/// let mut ops = OpCounter::unbounded();
/// let sorted = bubble_sort(&[5, 3, 1, 4, 2], SortOrder::Ascending, &mut ops).unwrap();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// ```
pub fn bubble_sort(
    values: &[i64],
    order: SortOrder,
    ops: &mut OpCounter,
) -> Result<Vec<i64>, ComputeFault> {
    let mut arr = values.to_vec();
    let len = arr.len();

    for pass in 0..len {
        let mut swapped = false;
        // the last `pass` elements are already in place
        for j in 0..len.saturating_sub(pass + 1) {
            ops.tick()?;
            if !order.in_order(arr[j], arr[j + 1]) {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    Ok(arr)
}
