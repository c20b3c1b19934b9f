//! Densegraph: dense-matrix directed graphs with the classic traversals
//!
//! `densegraph` is a small combinatorial-algorithms library: a directed,
//! weighted graph stored as a dense adjacency matrix, together with the
//! three operations such a structure is usually built for: breadth-first
//! traversal, reachability queries, and topological ordering via Kahn's
//! algorithm.
//!
//! # Features
//!
//! - **Dense adjacency matrix**: O(1) edge lookup and mutation, predictable
//!   memory layout, ascending-id neighbor enumeration
//! - **Deterministic traversals**: BFS and topological sort always expand
//!   neighbors in ascending vertex-id order, so output order is a pure
//!   function of the graph
//! - **Typed errors**: argument validation surfaces as [`GraphError`] values,
//!   never a process abort; failed calls leave the graph untouched
//! - **Hash lookups**: an independent [`lookup`] module for pair-sum search
//!   and distinct-absolute-value counting
//!
//! # Quick Start
//!
//! ```
//! use densegraph::Graph;
//!
//! # fn main() -> densegraph::GraphResult<()> {
//! let mut graph = Graph::new(4)?;
//! graph.add_edge(0, 1, 3)?;
//! graph.add_edge(1, 2, 1)?;
//! graph.add_edge(2, 3, 5)?;
//!
//! assert_eq!(graph.bfs(0)?, vec![0, 1, 2, 3]);
//! assert!(graph.has_path(0, 3)?);
//! assert_eq!(graph.topological_sort(), vec![0, 1, 2, 3]);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! Each module hides one representation decision:
//!
//! - [`graph`]: the graph itself (hides the matrix layout and traversal
//!   bookkeeping behind abstract operations)
//! - [`lookup`]: hash-based sequence lookups (hides the map/set machinery)

pub mod graph;
pub mod lookup;

pub use graph::{Graph, GraphError, GraphResult};
pub use lookup::{distinct_abs_values, find_sum_pair};
