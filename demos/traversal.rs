//! Walkthrough of the graph operations and the hash lookups.
//!
//! Run with `RUST_LOG=debug` to see the traversal events, including the
//! cycle shortfall reported by the final topological sort.

use densegraph::{distinct_abs_values, find_sum_pair, Graph, GraphResult};
use tracing_subscriber::EnvFilter;

fn main() -> GraphResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A dense, cyclic 6-vertex graph.
    let mut graph = Graph::new(6)?;
    for (v, w) in [
        (0, 1),
        (0, 3),
        (0, 4),
        (4, 5),
        (3, 5),
        (1, 2),
        (1, 0),
        (2, 1),
        (4, 1),
        (3, 1),
        (5, 4),
        (5, 3),
    ] {
        graph.add_edge(v, w, 1)?;
    }
    println!("breadth-first traversal from 0: {:?}", graph.bfs(0)?);

    // Reachability on a sparser 8-vertex graph.
    let mut graph = Graph::new(8)?;
    for (v, w) in [
        (0, 3),
        (1, 0),
        (1, 2),
        (1, 4),
        (2, 7),
        (3, 4),
        (3, 5),
        (4, 3),
        (4, 6),
        (5, 6),
        (6, 7),
    ] {
        graph.add_edge(v, w, 1)?;
    }
    println!("path from 2 to 3: {}", graph.has_path(2, 3)?);
    println!("path from 1 to 7: {}", graph.has_path(1, 7)?);

    // A scheduling DAG ordered with Kahn's algorithm.
    let mut graph = Graph::new(8)?;
    for (v, w) in [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (3, 5),
        (3, 6),
        (2, 6),
        (6, 7),
    ] {
        graph.add_edge(v, w, 1)?;
    }
    println!("topological order: {:?}", graph.topological_sort());

    // A cycle collapses the orderable portion of the graph.
    let mut graph = Graph::new(3)?;
    graph.add_edge(0, 1, 1)?;
    graph.add_edge(1, 0, 1)?;
    graph.add_edge(1, 2, 1)?;
    println!("order under a cycle: {:?}", graph.topological_sort());

    // The hash lookups are independent of the graph.
    let values = [5, 7, 2, 5, 3, 9, -6];
    match find_sum_pair(10, &values) {
        Some((a, b)) => println!("pair summing to 10: {} + {}", a, b),
        None => println!("no pair sums to 10"),
    }
    println!(
        "distinct absolute values: {}",
        distinct_abs_values(&values)
    );

    Ok(())
}
