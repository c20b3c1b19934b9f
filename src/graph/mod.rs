//! Directed weighted graphs over a dense adjacency matrix
//!
//! This module provides the graph data structure and its traversal
//! algorithms:
//!
//! - Edge mutation with validate-before-mutate semantics
//! - Neighbor enumeration in ascending vertex-id order
//! - Breadth-first traversal in pre-visit order
//! - Reachability queries built on BFS
//! - Topological ordering via Kahn's algorithm
//!
//! # Design
//!
//! The module hides the storage representation (a flat row-major matrix of
//! weights) and exposes only abstract operations: `add_edge`, `neighbors`,
//! `bfs`, `topological_sort`, and so on. Callers never see matrix indices,
//! so the layout can change without breaking them.

mod error;
mod matrix_graph;

pub use error::{GraphError, GraphResult};
pub use matrix_graph::Graph;
