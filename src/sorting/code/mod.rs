//! Implementation variants of comparison sorting.

mod bubble;
mod merge;
mod selection;

pub use bubble::bubble_sort;
pub use merge::merge_sort;
pub use selection::selection_sort;

use crate::error::ComputeFault;
use crate::utils::{OpCounter, VariantInfo};
use crate::value::SortOrder;

/// Type alias for the sort function signature
pub type SortFn = fn(&[i64], SortOrder, &mut OpCounter) -> Result<Vec<i64>, ComputeFault>;

/// Get all sorting variants
pub fn available_variants() -> Vec<VariantInfo<SortFn>> {
    vec![
        VariantInfo {
            name: "bubble-sort",
            description: "Adjacent swaps, stops after a pass without swaps",
            function: bubble_sort,
        },
        VariantInfo {
            name: "selection-sort",
            description: "Selects the best remaining element for each position",
            function: selection_sort,
        },
        VariantInfo {
            name: "merge-sort",
            description: "Stable top-down divide and conquer",
            function: merge_sort,
        },
    ]
}
