//! Implementation variants of exact pattern matching.

mod kmp;
mod naive;

pub use kmp::kmp_search;
pub use naive::naive_search;

use crate::error::ComputeFault;
use crate::utils::{OpCounter, VariantInfo};

/// Type alias for the matcher function signature
pub type MatchFn = fn(&[char], &[char], &mut OpCounter) -> Result<Vec<usize>, ComputeFault>;

/// Get all matcher variants
pub fn available_variants() -> Vec<VariantInfo<MatchFn>> {
    vec![
        VariantInfo {
            name: "naive-string-search",
            description: "Every alignment, O(n*m)",
            function: naive_search,
        },
        VariantInfo {
            name: "knuth-morris-pratt",
            description: "Failure table, O(n+m)",
            function: kmp_search,
        },
    ]
}
