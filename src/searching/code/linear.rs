//! Linear scan.

use crate::error::ComputeFault;
use crate::utils::OpCounter;

/// Index of the first element equal to `target`, scanning left to right.
pub fn linear_search(
    values: &[i64],
    target: i64,
    ops: &mut OpCounter,
) -> Result<Option<usize>, ComputeFault> {
    for (i, &value) in values.iter().enumerate() {
        ops.tick()?;
        if value == target {
            return Ok(Some(i));
        }
    }
    Ok(None)
}
