//! Brute-force matching.

use crate::error::ComputeFault;
use crate::utils::OpCounter;

/// Offsets of every occurrence of `pattern` in `text`, overlaps included.
///
/// Tries each alignment and compares character by character until the first
/// mismatch.
pub fn naive_search(
    text: &[char],
    pattern: &[char],
    ops: &mut OpCounter,
) -> Result<Vec<usize>, ComputeFault> {
    let mut positions = Vec::new();
    if pattern.is_empty() || pattern.len() > text.len() {
        return Ok(positions);
    }

    for start in 0..=text.len() - pattern.len() {
        let mut matched = true;
        for (offset, &expected) in pattern.iter().enumerate() {
            ops.tick()?;
            if text[start + offset] != expected {
                matched = false;
                break;
            }
        }
        if matched {
            positions.push(start);
        }
    }

    Ok(positions)
}
