//! Palindromic substrings by interval DP.

use crate::error::ComputeFault;
use crate::utils::OpCounter;

/// Every palindromic substring of `text` (by position, so repeats count) and
/// how many there are.
///
/// A window is a palindrome when its ends agree and its interior is one, so
/// only the rows for the two previous lengths are kept, indexed by start.
/// Substrings are listed shortest first, left to right within a length.
///
/// # Example
/// ```
/// use algo_workbench::dynamic_programming::palindromic_substrings;
/// use algo_workbench::utils::OpCounter;
///
/// let (found, count) = palindromic_substrings("aaa", &mut OpCounter::unbounded()).unwrap();
/// assert_eq!(found, vec!["a", "a", "a", "aa", "aa", "aaa"]);
/// assert_eq!(count, 6);
/// ```
pub fn palindromic_substrings(
    text: &str,
    ops: &mut OpCounter,
) -> Result<(Vec<String>, usize), ComputeFault> {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let mut found = Vec::new();

    // windows of length 0 and 1 are palindromes at every start
    let mut two_shorter = vec![true; n + 1];
    let mut one_shorter = Vec::with_capacity(n);
    for &c in &chars {
        ops.tick()?;
        one_shorter.push(true);
        found.push(c.to_string());
    }

    for len in 2..=n {
        let mut row = Vec::with_capacity(n - len + 1);
        for i in 0..=n - len {
            ops.tick()?;
            let j = i + len - 1;
            let palindrome = chars[i] == chars[j] && two_shorter[i + 1];
            if palindrome {
                found.push(chars[i..=j].iter().collect());
            }
            row.push(palindrome);
        }
        two_shorter = std::mem::replace(&mut one_shorter, row);
    }

    let count = found.len();
    Ok((found, count))
}
