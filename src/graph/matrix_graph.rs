//! Graph - directed weighted graph over a dense adjacency matrix
//!
//! # Design
//!
//! The graph stores edge weights in a flat row-major matrix:
//! cell `(v, w)` lives at index `v * vertex_count + w`. A weight of `0`
//! encodes "no edge"; every stored weight is therefore >= 1, and the public
//! API rejects zero weights up front. This gives O(1) edge lookup and
//! mutation and an O(n) ascending-id neighbor scan, at O(n^2) storage.
//!
//! Traversal bookkeeping (the `visited` vector) is owned by the graph but
//! scoped to a single traversal: `bfs` and `has_path` reset it on entry, so
//! stale marks from an earlier call can never bleed into a later one. The
//! BFS work queue is allocated per call for the same reason.
//!
//! # Algorithm Reference
//!
//! Topological ordering uses Kahn's algorithm: count prerequisites
//! (in-degrees), seed a queue with the prerequisite-free vertices, and
//! repeatedly disconnect the front of the queue from the graph.

use super::error::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// A directed weighted graph backed by a dense adjacency matrix
///
/// Vertices are the integers `0..vertex_count`, fixed at construction.
/// Edges carry strictly positive `u32` weights; absence is encoded
/// internally as weight `0`. Self-loops are permitted.
///
/// # Example
///
/// ```
/// use densegraph::Graph;
///
/// # fn main() -> densegraph::GraphResult<()> {
/// let mut graph = Graph::new(3)?;
/// graph.add_edge(0, 1, 2)?;
/// graph.add_edge(1, 2, 7)?;
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.neighbors(0)?, vec![1]);
/// assert!(graph.has_path(0, 2)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Number of vertices; fixed for the lifetime of the graph
    vertex_count: usize,
    /// Row-major weight matrix, `vertex_count * vertex_count` cells
    weights: Vec<u32>,
    /// Number of non-zero cells in `weights`
    edge_count: usize,
    /// Traversal marks, one per vertex; transient state, not serialized
    #[serde(skip)]
    visited: Vec<bool>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges
    ///
    /// Returns [`GraphError::InvalidArgument`] if `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> GraphResult<Self> {
        if vertex_count == 0 {
            return Err(GraphError::invalid_argument(
                "vertex count must be greater than 0",
            ));
        }
        Ok(Self {
            vertex_count,
            weights: vec![0; vertex_count * vertex_count],
            edge_count: 0,
            visited: vec![false; vertex_count],
        })
    }

    /// Returns the number of vertices
    pub fn node_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the current number of edges
    ///
    /// Constant time; the count is maintained incrementally by the mutation
    /// operations rather than recomputed from the matrix.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Adds an edge from `v` to `w` with the given weight
    ///
    /// Writing over an existing edge updates its weight and leaves the edge
    /// count unchanged, so repeated calls are idempotent on `edge_count`.
    ///
    /// Returns [`GraphError::OutOfBounds`] if either vertex id is invalid,
    /// or [`GraphError::InvalidArgument`] if `weight` is zero.
    pub fn add_edge(&mut self, v: usize, w: usize, weight: u32) -> GraphResult<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        Self::check_weight(weight)?;
        let cell = self.index(v, w);
        if self.weights[cell] == 0 {
            self.edge_count += 1;
        }
        self.weights[cell] = weight;
        Ok(())
    }

    /// Sets the weight of the edge from `v` to `w`
    ///
    /// This is a weight-only mutation: it writes the cell exactly like
    /// [`Graph::add_edge`] but never adjusts the edge count, even when the
    /// cell was previously empty. Callers that need the new edge reflected
    /// in [`Graph::edge_count`] must use `add_edge` instead.
    ///
    /// Returns [`GraphError::OutOfBounds`] if either vertex id is invalid,
    /// or [`GraphError::InvalidArgument`] if `weight` is zero.
    pub fn set_weight(&mut self, v: usize, w: usize, weight: u32) -> GraphResult<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        Self::check_weight(weight)?;
        let cell = self.index(v, w);
        self.weights[cell] = weight;
        Ok(())
    }

    /// Removes the edge from `v` to `w` if present
    ///
    /// Removing an absent edge is a no-op and leaves the edge count
    /// unchanged. Since [`Graph::set_weight`] can populate a cell without
    /// incrementing the count, the decrement saturates at zero rather than
    /// underflowing when such an edge is removed.
    ///
    /// Returns [`GraphError::OutOfBounds`] if either vertex id is invalid.
    pub fn remove_edge(&mut self, v: usize, w: usize) -> GraphResult<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        let cell = self.index(v, w);
        if self.weights[cell] != 0 {
            self.weights[cell] = 0;
            self.edge_count = self.edge_count.saturating_sub(1);
        }
        Ok(())
    }

    /// Returns the weight of the edge from `v` to `w`, or `0` if absent
    ///
    /// Returns [`GraphError::OutOfBounds`] if either vertex id is invalid.
    pub fn weight(&self, v: usize, w: usize) -> GraphResult<u32> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        Ok(self.weights[self.index(v, w)])
    }

    /// Returns true if and only if the graph has an edge from `v` to `w`
    ///
    /// Returns [`GraphError::OutOfBounds`] if either vertex id is invalid.
    pub fn has_edge(&self, v: usize, w: usize) -> GraphResult<bool> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        Ok(self.weights[self.index(v, w)] != 0)
    }

    /// Returns the neighbors of `v` in ascending vertex-id order
    ///
    /// The result is recomputed from the matrix on every call, so it always
    /// reflects the latest mutations. It is duplicate-free by construction:
    /// each vertex owns exactly one cell per possible neighbor.
    ///
    /// Returns [`GraphError::OutOfBounds`] if `v` is invalid.
    pub fn neighbors(&self, v: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(v)?;
        let row = &self.weights[v * self.vertex_count..(v + 1) * self.vertex_count];
        Ok(row
            .iter()
            .enumerate()
            .filter(|(_, &weight)| weight != 0)
            .map(|(w, _)| w)
            .collect())
    }

    /// Resets the traversal marks so every vertex reads as unvisited
    ///
    /// [`Graph::bfs`] and [`Graph::has_path`] call this themselves on entry,
    /// so it is only needed by callers that inspect or drive the visited
    /// state manually.
    pub fn reset_visited(&mut self) {
        self.visited.clear();
        self.visited.resize(self.vertex_count, false);
    }

    /// Breadth-first traversal from `start`, in pre-visit order
    ///
    /// Returns every vertex reachable from `start` in the order it was first
    /// dequeued: `start` itself at index 0, then its neighbors in ascending
    /// id order, and so on outward. Each reachable vertex appears exactly
    /// once; unreachable vertices never appear. The output is deterministic
    /// for a fixed graph and start vertex.
    ///
    /// Visited state is reset at the start of the call, and the work queue
    /// is local to the call, so earlier traversals cannot influence this
    /// one.
    ///
    /// Returns [`GraphError::OutOfBounds`] if `start` is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use densegraph::Graph;
    ///
    /// # fn main() -> densegraph::GraphResult<()> {
    /// let mut graph = Graph::new(4)?;
    /// graph.add_edge(0, 2, 1)?;
    /// graph.add_edge(0, 1, 1)?;
    /// graph.add_edge(2, 3, 1)?;
    ///
    /// // Neighbors expand in ascending id order: 1 before 2.
    /// assert_eq!(graph.bfs(0)?, vec![0, 1, 2, 3]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn bfs(&mut self, start: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(start)?;
        trace!(start, "starting breadth-first traversal");

        self.reset_visited();

        let mut queue = VecDeque::new();
        let mut result = Vec::new();
        self.visited[start] = true;
        queue.push_back(start);

        while let Some(v) = queue.pop_front() {
            result.push(v);
            for w in 0..self.vertex_count {
                if self.weights[self.index(v, w)] != 0 && !self.visited[w] {
                    self.visited[w] = true;
                    queue.push_back(w);
                }
            }
        }

        Ok(result)
    }

    /// Returns true if there is a directed path from `v` to `w`
    ///
    /// A vertex always reaches itself (the BFS result starts with `v`).
    /// Costs one full BFS, O(n^2) with the dense neighbor scan.
    ///
    /// Returns [`GraphError::OutOfBounds`] if either vertex id is invalid.
    pub fn has_path(&mut self, v: usize, w: usize) -> GraphResult<bool> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        let reachable = self.bfs(v)?;
        Ok(reachable.contains(&w))
    }

    /// Returns a topological ordering of the vertices
    ///
    /// Uses Kahn's algorithm:
    ///
    /// 1. Count each vertex's prerequisites (in-degree) by scanning every
    ///    vertex's outgoing edges
    /// 2. Seed a queue with the prerequisite-free vertices, ascending by id
    /// 3. Repeatedly dequeue a vertex, append it to the result, and
    ///    decrement each neighbor's count, enqueueing any that reach zero
    ///
    /// Both the seeding and the neighbor scans run in ascending vertex-id
    /// order, so the output is fully deterministic for a fixed graph.
    ///
    /// # Cycles
    ///
    /// If the graph contains a cycle, the vertices on it (and every vertex
    /// downstream of it) never reach a prerequisite count of zero and are
    /// omitted: the result is shorter than [`Graph::node_count`]. No error
    /// is raised; callers needing cycle detection compare the result length
    /// against the vertex count.
    ///
    /// # Example
    ///
    /// ```
    /// use densegraph::Graph;
    ///
    /// # fn main() -> densegraph::GraphResult<()> {
    /// let mut graph = Graph::new(3)?;
    /// graph.add_edge(2, 0, 1)?;
    /// graph.add_edge(0, 1, 1)?;
    ///
    /// assert_eq!(graph.topological_sort(), vec![2, 0, 1]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn topological_sort(&self) -> Vec<usize> {
        let mut prerequisite_count = vec![0usize; self.vertex_count];
        for v in 0..self.vertex_count {
            for w in 0..self.vertex_count {
                if self.weights[self.index(v, w)] != 0 {
                    prerequisite_count[w] += 1;
                }
            }
        }

        let mut queue: VecDeque<usize> = (0..self.vertex_count)
            .filter(|&v| prerequisite_count[v] == 0)
            .collect();

        let mut result = Vec::with_capacity(self.vertex_count);
        while let Some(v) = queue.pop_front() {
            result.push(v);
            // Disconnect v: every edge out of v is one prerequisite fewer
            // for its target.
            for w in 0..self.vertex_count {
                if self.weights[self.index(v, w)] != 0 {
                    prerequisite_count[w] -= 1;
                    if prerequisite_count[w] == 0 {
                        queue.push_back(w);
                    }
                }
            }
        }

        if result.len() != self.vertex_count {
            debug!(
                ordered = result.len(),
                vertices = self.vertex_count,
                "topological sort incomplete: graph contains a cycle"
            );
        }

        result
    }

    fn index(&self, v: usize, w: usize) -> usize {
        v * self.vertex_count + w
    }

    fn check_vertex(&self, v: usize) -> GraphResult<()> {
        if v >= self.vertex_count {
            return Err(GraphError::out_of_bounds(v, self.vertex_count));
        }
        Ok(())
    }

    fn check_weight(weight: u32) -> GraphResult<()> {
        if weight == 0 {
            return Err(GraphError::invalid_argument(
                "edge weight must be greater than 0",
            ));
        }
        Ok(())
    }
}
