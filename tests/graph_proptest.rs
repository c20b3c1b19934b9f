//! Property tests for the matrix graph
//!
//! Random mutation scripts are replayed against a plain model matrix that
//! implements the documented semantics (including set_weight's weight-only
//! behavior), and traversal results are cross-checked against petgraph.

use densegraph::Graph;
use petgraph::algo::has_path_connecting;
use petgraph::graph::DiGraph;
use proptest::prelude::*;

/// One mutation step: operation selector, endpoints, and a weight seed.
type Op = (u8, usize, usize, u32);

fn mutation_script() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (1usize..8).prop_flat_map(|n| {
        // Endpoints may exceed n - 1 on purpose: out-of-bounds calls must
        // fail without mutating anything, which the model checks for free.
        let op = (0u8..3, 0usize..8, 0usize..8, 0u32..9);
        (Just(n), prop::collection::vec(op, 0..40))
    })
}

fn arbitrary_digraph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..8).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..24)))
}

fn acyclic_digraph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..9).prop_flat_map(|n| {
        // Edges only ever point from a lower id to a higher one, so the
        // graph is acyclic by construction.
        let edge = (0..n - 1).prop_flat_map(move |v| ((v + 1)..n).prop_map(move |w| (v, w)));
        (Just(n), prop::collection::vec(edge, 0..20))
    })
}

proptest! {
    #[test]
    fn mutations_agree_with_model((n, ops) in mutation_script()) {
        let mut graph = Graph::new(n).unwrap();
        let mut model = vec![0u32; n * n];
        let mut model_count = 0usize;

        for (op, v, w, seed) in ops {
            let weight = seed + 1;
            match op {
                0 => {
                    if graph.add_edge(v, w, weight).is_ok() {
                        if model[v * n + w] == 0 {
                            model_count += 1;
                        }
                        model[v * n + w] = weight;
                    }
                }
                1 => {
                    if graph.remove_edge(v, w).is_ok() {
                        if model[v * n + w] != 0 {
                            // Cells populated by set_weight were never
                            // counted, so the count can already be zero.
                            model_count = model_count.saturating_sub(1);
                        }
                        model[v * n + w] = 0;
                    }
                }
                _ => {
                    // Weight-only mutation: the cell changes, the count
                    // never does.
                    if graph.set_weight(v, w, weight).is_ok() {
                        model[v * n + w] = weight;
                    }
                }
            }
        }

        prop_assert_eq!(graph.edge_count(), model_count);
        for v in 0..n {
            for w in 0..n {
                prop_assert_eq!(graph.weight(v, w).unwrap(), model[v * n + w]);
                prop_assert_eq!(graph.has_edge(v, w).unwrap(), model[v * n + w] != 0);
            }
        }
    }

    #[test]
    fn neighbors_are_ascending_and_match_has_edge((n, edges) in arbitrary_digraph()) {
        let mut graph = Graph::new(n).unwrap();
        for (v, w) in edges {
            graph.add_edge(v, w, 1).unwrap();
        }

        for v in 0..n {
            let neighbors = graph.neighbors(v).unwrap();
            prop_assert!(neighbors.windows(2).all(|pair| pair[0] < pair[1]));
            for w in 0..n {
                prop_assert_eq!(neighbors.contains(&w), graph.has_edge(v, w).unwrap());
            }
        }
    }

    #[test]
    fn has_path_agrees_with_petgraph((n, edges) in arbitrary_digraph()) {
        let mut graph = Graph::new(n).unwrap();
        let mut oracle = DiGraph::<(), ()>::new();
        let nodes: Vec<_> = (0..n).map(|_| oracle.add_node(())).collect();
        for (v, w) in edges {
            graph.add_edge(v, w, 1).unwrap();
            oracle.update_edge(nodes[v], nodes[w], ());
        }

        for v in 0..n {
            for w in 0..n {
                let expected = has_path_connecting(&oracle, nodes[v], nodes[w], None);
                prop_assert_eq!(graph.has_path(v, w).unwrap(), expected);
            }
        }
    }

    #[test]
    fn bfs_visits_reachable_exactly_once((n, edges) in arbitrary_digraph()) {
        let mut graph = Graph::new(n).unwrap();
        for (v, w) in edges {
            graph.add_edge(v, w, 1).unwrap();
        }

        for start in 0..n {
            let order = graph.bfs(start).unwrap();
            prop_assert_eq!(order[0], start);

            let mut seen = vec![false; n];
            for &v in &order {
                prop_assert!(!seen[v], "vertex {} visited twice", v);
                seen[v] = true;
            }
            // Visited exactly the reachable set.
            for v in 0..n {
                prop_assert_eq!(seen[v], graph.has_path(start, v).unwrap());
            }
        }
    }

    #[test]
    fn topological_order_respects_edges((n, edges) in acyclic_digraph()) {
        let mut graph = Graph::new(n).unwrap();
        for &(v, w) in &edges {
            graph.add_edge(v, w, 1).unwrap();
        }

        let order = graph.topological_sort();
        prop_assert_eq!(order.len(), n);

        let mut position = vec![0usize; n];
        for (i, &v) in order.iter().enumerate() {
            position[v] = i;
        }
        for (v, w) in edges {
            prop_assert!(position[v] < position[w], "edge {}->{} violated", v, w);
        }
    }
}
