//! Error types for graph operations
//!
//! This module hides error representation details and provides a unified
//! error type for all graph operations. Every public operation validates its
//! arguments before touching any state, so a returned error always means the
//! graph is unchanged.

use thiserror::Error;

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur during graph operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// A supplied vertex id is outside `[0, vertex_count)`
    #[error("vertex {vertex} out of bounds for graph with {vertex_count} vertices")]
    OutOfBounds {
        /// The offending vertex id
        vertex: usize,
        /// The number of vertices in the graph
        vertex_count: usize,
    },

    /// A supplied argument is invalid (zero vertex count or zero weight)
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of the violation
        reason: String,
    },
}

impl GraphError {
    /// Creates an out-of-bounds error for a vertex id
    pub fn out_of_bounds(vertex: usize, vertex_count: usize) -> Self {
        Self::OutOfBounds {
            vertex,
            vertex_count,
        }
    }

    /// Creates an invalid argument error with the given reason
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
