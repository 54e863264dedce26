//! Error types for path queries.
//!
//! The only validated precondition of the traversal is that vertex arguments lie
//! in `0..n`. A vertex that is merely unreachable is never an error.

use thiserror::Error;

use crate::{Node, NumNodes};

/// Result alias used by all path operations
pub type Result<T> = std::result::Result<T, PathError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// A vertex argument was outside of `0..number_of_nodes`.
    ///
    /// `vertex` is signed so that rejected negative input can be reported as given.
    #[error("vertex {vertex} is not between 0 and {}", last_vertex(.number_of_nodes))]
    InvalidVertex {
        vertex: i64,
        number_of_nodes: NumNodes,
    },
}

fn last_vertex(number_of_nodes: &NumNodes) -> i64 {
    i64::from(*number_of_nodes) - 1
}

/// Returns `Ok(u)` iff `u < number_of_nodes`
#[inline]
pub fn validate_vertex(number_of_nodes: NumNodes, u: Node) -> Result<Node> {
    if u < number_of_nodes {
        Ok(u)
    } else {
        Err(PathError::InvalidVertex {
            vertex: i64::from(u),
            number_of_nodes,
        })
    }
}

/// Converts a signed vertex id (e.g. parsed from user input) into a [`Node`],
/// rejecting negative and out-of-range values.
pub fn checked_vertex(number_of_nodes: NumNodes, raw: i64) -> Result<Node> {
    match Node::try_from(raw) {
        Ok(u) if u < number_of_nodes => Ok(u),
        _ => Err(PathError::InvalidVertex {
            vertex: raw,
            number_of_nodes,
        }),
    }
}
