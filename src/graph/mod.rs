//! # Graph traversal
//!
//! Visit every node reachable from a start node of a directed graph given as
//! an adjacency list. Undirected graphs list each edge in both directions.

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use rand::rngs::StdRng;
use rand::Rng;
use serde_json::{json, Value};

use crate::error::ComputeFault;
use crate::registry::{unexpected_input, AlgorithmUnit, Category};
use crate::utils::OpCounter;
use crate::value::{Input, Output};

fn run_traversal(
    id: &str,
    traverse: TraverseFn,
    input: &Input,
    ops: &mut OpCounter,
) -> Result<Output, ComputeFault> {
    match input {
        Input::Graph { adjacency, start } => traverse(adjacency, *start, ops).map(Output::Visit),
        other => Err(unexpected_input(id, other)),
    }
}

fn edge_count(input: &Input) -> u64 {
    match input {
        Input::Graph { adjacency, .. } => adjacency.iter().map(|edges| edges.len() as u64).sum(),
        _ => 0,
    }
}

/// Nodes plus stack pushes plus edge scans.
fn linear(input: &Input) -> u64 {
    input.size() as u64 + 2 * edge_count(input) + 1
}

/// Directed graph of `size` nodes with up to three random out-edges each.
pub(crate) fn random_graph(size: usize, rng: &mut StdRng) -> Value {
    let size = size.max(1);
    let adjacency: Vec<Vec<usize>> = (0..size)
        .map(|_| {
            let degree = rng.random_range(0..=3);
            (0..degree).map(|_| rng.random_range(0..size)).collect()
        })
        .collect();
    json!({ "adjacency": adjacency, "start": 0 })
}

fn sample() -> Value {
    // 0 - 1 - 3, 0 - 2 - 3, 3 - 4, undirected
    json!({
        "adjacency": [[1, 2], [0, 3], [0, 3], [1, 2, 4], [3]],
        "start": 0
    })
}

pub struct BreadthFirstSearch;

impl AlgorithmUnit for BreadthFirstSearch {
    fn id(&self) -> &'static str {
        "breadth-first-search"
    }

    fn name(&self) -> &'static str {
        "Breadth-First Search"
    }

    fn description(&self) -> &'static str {
        "Explores the graph level by level from the start node"
    }

    fn category(&self) -> Category {
        Category::GraphTraversal
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        linear(input)
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        run_traversal(self.id(), breadth_first, input, ops)
    }

    fn sample_input(&self) -> Value {
        sample()
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        Some(random_graph(size, rng))
    }
}

pub struct DepthFirstSearch;

impl AlgorithmUnit for DepthFirstSearch {
    fn id(&self) -> &'static str {
        "depth-first-search"
    }

    fn name(&self) -> &'static str {
        "Depth-First Search"
    }

    fn description(&self) -> &'static str {
        "Follows each branch as deep as possible before backtracking"
    }

    fn category(&self) -> Category {
        Category::GraphTraversal
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        linear(input)
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        run_traversal(self.id(), depth_first, input, ops)
    }

    fn sample_input(&self) -> Value {
        sample()
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        Some(random_graph(size, rng))
    }
}
