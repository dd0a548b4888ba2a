//! Tests for graph traversals.

#[cfg(test)]
mod tests {
    use crate::graph::code::*;
    use crate::graph::random_graph;
    use crate::oracle;
    use crate::registry::Category;
    use crate::utils::OpCounter;
    use crate::value::{Input, Output};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn diamond() -> Vec<Vec<usize>> {
        vec![vec![1, 2], vec![0, 3], vec![0, 3], vec![1, 2, 4], vec![3]]
    }

    fn traverse(f: TraverseFn, adjacency: &[Vec<usize>], start: usize) -> Vec<usize> {
        f(adjacency, start, &mut OpCounter::unbounded()).expect("unbounded traversal cannot fault")
    }

    #[test]
    fn test_bfs_visits_level_by_level() {
        assert_eq!(traverse(breadth_first, &diamond(), 0), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dfs_preorder() {
        assert_eq!(traverse(depth_first, &diamond(), 0), vec![0, 1, 3, 2, 4]);
        // first listed neighbour goes first
        let tree = vec![vec![1, 4], vec![2, 3], vec![], vec![], vec![]];
        assert_eq!(traverse(depth_first, &tree, 0), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_disconnected_nodes_are_skipped() {
        let graph = vec![vec![1], vec![0], vec![3], vec![2]];
        for v in available_variants() {
            assert_eq!(traverse(v.function, &graph, 2), vec![2, 3], "{}", v.name);
        }
    }

    #[test]
    fn test_self_loops_and_isolated_start() {
        let graph = vec![vec![0], vec![]];
        for v in available_variants() {
            assert_eq!(traverse(v.function, &graph, 0), vec![0], "{}", v.name);
            assert_eq!(traverse(v.function, &graph, 1), vec![1], "{}", v.name);
        }
    }

    #[test]
    fn test_long_chain_does_not_overflow_stack() {
        let n = 100_000;
        let chain: Vec<Vec<usize>> = (0..n)
            .map(|i| if i + 1 < n { vec![i + 1] } else { vec![] })
            .collect();
        let order = traverse(depth_first, &chain, 0);
        assert_eq!(order.len(), n);
        assert_eq!(order.last(), Some(&(n - 1)));
    }

    #[test]
    fn test_random_graphs_satisfy_oracle() {
        let mut rng = StdRng::seed_from_u64(0x6A4F);
        for size in [1, 2, 5, 20, 80] {
            for _ in 0..5 {
                let raw = random_graph(size, &mut rng);
                let adjacency: Vec<Vec<usize>> =
                    serde_json::from_value(raw["adjacency"].clone()).unwrap();
                let input = Input::Graph {
                    adjacency: adjacency.clone(),
                    start: 0,
                };
                for v in available_variants() {
                    let output = Output::Visit(traverse(v.function, &adjacency, 0));
                    assert!(
                        oracle::check(Category::GraphTraversal, &input, &output),
                        "{} on {:?}: {:?}",
                        v.name,
                        adjacency,
                        oracle::verdict(Category::GraphTraversal, &input, &output)
                    );
                }
            }
        }
    }
}
