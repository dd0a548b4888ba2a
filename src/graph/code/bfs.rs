//! Breadth-first traversal.

use std::collections::VecDeque;

use crate::error::ComputeFault;
use crate::utils::OpCounter;

/// Visit order of the nodes reachable from `start`, level by level.
///
/// Nodes are marked when enqueued, so each is queued once and neighbours are
/// visited in adjacency-list order.
pub fn breadth_first(
    adjacency: &[Vec<usize>],
    start: usize,
    ops: &mut OpCounter,
) -> Result<Vec<usize>, ComputeFault> {
    let mut seen = vec![false; adjacency.len()];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);
    seen[start] = true;

    while let Some(node) = queue.pop_front() {
        ops.tick()?;
        order.push(node);
        for &next in &adjacency[node] {
            ops.tick()?;
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }

    Ok(order)
}
