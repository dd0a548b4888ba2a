//! Implementation variants of graph traversal.

mod bfs;
mod dfs;

pub use bfs::breadth_first;
pub use dfs::depth_first;

use crate::error::ComputeFault;
use crate::utils::{OpCounter, VariantInfo};

/// Type alias for the traversal function signature
pub type TraverseFn = fn(&[Vec<usize>], usize, &mut OpCounter) -> Result<Vec<usize>, ComputeFault>;

/// Get all traversal variants
pub fn available_variants() -> Vec<VariantInfo<TraverseFn>> {
    vec![
        VariantInfo {
            name: "breadth-first-search",
            description: "FIFO queue, nearest nodes first",
            function: breadth_first,
        },
        VariantInfo {
            name: "depth-first-search",
            description: "LIFO stack, preorder",
            function: depth_first,
        },
    ]
}
