//! Selection sort.

use crate::error::ComputeFault;
use crate::utils::OpCounter;
use crate::value::SortOrder;

/// Sort a copy of `values` by repeatedly selecting the best remaining element.
///
/// Always performs `n(n-1)/2` comparisons, whatever the input order.
pub fn selection_sort(
    values: &[i64],
    order: SortOrder,
    ops: &mut OpCounter,
) -> Result<Vec<i64>, ComputeFault> {
    let mut arr = values.to_vec();
    let len = arr.len();

    for i in 0..len {
        let mut best = i;
        for j in (i + 1)..len {
            ops.tick()?;
            if !order.in_order(arr[best], arr[j]) {
                best = j;
            }
        }
        if best != i {
            arr.swap(i, best);
        }
    }

    Ok(arr)
}
