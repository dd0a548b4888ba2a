//! Implementation variants of element search.

mod binary;
mod linear;

pub use binary::binary_search;
pub use linear::linear_search;

use crate::error::ComputeFault;
use crate::utils::{OpCounter, VariantInfo};

/// Type alias for the search function signature
pub type SearchFn = fn(&[i64], i64, &mut OpCounter) -> Result<Option<usize>, ComputeFault>;

/// Get all search variants
///
/// `binary-search` additionally requires non-decreasing input.
pub fn available_variants() -> Vec<VariantInfo<SearchFn>> {
    vec![
        VariantInfo {
            name: "linear-search",
            description: "Scans every element, first match wins",
            function: linear_search,
        },
        VariantInfo {
            name: "binary-search",
            description: "Halves a sorted range on each comparison",
            function: binary_search,
        },
    ]
}
