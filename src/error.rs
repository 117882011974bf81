use thiserror::Error;

use crate::{Directedness, Vertex};

/// Errors reported by graph construction, mutation and queries.
///
/// All of these describe a misuse of the API rather than a transient
/// condition; an operation that returns one has left the graph unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A vertex id was a multi-character or empty string, or a NaN float.
    #[error("invalid vertex id {0:?}: expected an integer, a float or a single character")]
    InvalidVertexId(String),

    /// A graph label was an empty string or a non-finite float.
    #[error("invalid graph id {0:?}")]
    InvalidGraphId(String),

    #[error("loops are not allowed: edge from {0} to itself")]
    LoopNotAllowed(Vertex),

    #[error("{0} is not in the graph")]
    VertexNotFound(Vertex),

    /// Edge weights must be non-negative numbers for shortest paths to be
    /// well defined.
    #[error("invalid weight {weight} for edge ({source_vertex}, {target_vertex})")]
    InvalidWeight {
        source_vertex: Vertex,
        target_vertex: Vertex,
        weight: f64,
    },

    #[error("a {edge:?} edge cannot be stored in a {graph:?} graph")]
    DirectednessMismatch {
        edge: Directedness,
        graph: Directedness,
    },

    #[error("isomorphism search refused: order {order} exceeds the limit of {limit}")]
    TooLargeForIsomorphism { order: usize, limit: usize },
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
