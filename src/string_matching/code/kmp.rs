//! Knuth-Morris-Pratt matching.

use crate::error::ComputeFault;
use crate::utils::OpCounter;

/// Length of the longest proper prefix of `pattern[..=i]` that is also its suffix.
fn failure_table(pattern: &[char], ops: &mut OpCounter) -> Result<Vec<usize>, ComputeFault> {
    let mut table = vec![0; pattern.len()];
    let mut len = 0;

    for i in 1..pattern.len() {
        ops.tick()?;
        while len > 0 && pattern[i] != pattern[len] {
            ops.tick()?;
            len = table[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
        }
        table[i] = len;
    }

    Ok(table)
}

/// Offsets of every occurrence of `pattern` in `text`, overlaps included.
///
/// The text is read once; on a mismatch the failure table says how much of
/// the pattern is still matched, so no text character is compared twice in a
/// row without progress.
///
/// # Example
/// ```
/// use algo_workbench::string_matching::kmp_search;
/// use algo_workbench::utils::OpCounter;
///
/// let text: Vec<char> = "aaaa".chars().collect();
/// let pattern: Vec<char> = "aa".chars().collect();
/// let found = kmp_search(&text, &pattern, &mut OpCounter::unbounded()).unwrap();
/// assert_eq!(found, vec![0, 1, 2]);
/// ```
pub fn kmp_search(
    text: &[char],
    pattern: &[char],
    ops: &mut OpCounter,
) -> Result<Vec<usize>, ComputeFault> {
    let mut positions = Vec::new();
    if pattern.is_empty() || pattern.len() > text.len() {
        return Ok(positions);
    }

    let table = failure_table(pattern, ops)?;
    let mut matched = 0;

    for (i, &c) in text.iter().enumerate() {
        ops.tick()?;
        while matched > 0 && c != pattern[matched] {
            ops.tick()?;
            matched = table[matched - 1];
        }
        if c == pattern[matched] {
            matched += 1;
        }
        if matched == pattern.len() {
            positions.push(i + 1 - matched);
            matched = table[matched - 1];
        }
    }

    Ok(positions)
}
