//! Depth-first traversal with an explicit stack.

use crate::error::ComputeFault;
use crate::utils::OpCounter;

/// Preorder of the nodes reachable from `start`.
///
/// Produces the same order as the recursive formulation: neighbours are pushed
/// in reverse so the first listed neighbour is explored first. The stack lives
/// on the heap, so deep graphs cannot overflow the call stack.
pub fn depth_first(
    adjacency: &[Vec<usize>],
    start: usize,
    ops: &mut OpCounter,
) -> Result<Vec<usize>, ComputeFault> {
    let mut visited = vec![false; adjacency.len()];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        ops.tick()?;
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(node);

        for &next in adjacency[node].iter().rev() {
            ops.tick()?;
            if !visited[next] {
                stack.push(next);
            }
        }
    }

    Ok(order)
}
