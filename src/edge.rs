use std::fmt::{self, Display, Formatter};

use crate::{
    Directedness,
    error::{GraphError, Result},
    util::sort_pair,
    vertex::{IntoVertex, Vertex},
};

/// An edge between two distinct vertices.
///
/// Undirected edges store their ends in sorted order, so the derived
/// equality, hashing and ordering treat `Edge::new(a, b)` and
/// `Edge::new(b, a)` as the same value.  Directed edges keep the order they
/// were given.  The directedness itself is part of the edge's identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    ends: (Vertex, Vertex),
    directedness: Directedness,
}

impl Edge {
    /// Creates an undirected edge.
    pub fn new(u: impl IntoVertex, v: impl IntoVertex) -> Result<Self> {
        Self::with_directedness(u, v, Directedness::Undirected)
    }

    /// Creates a directed edge from `source` to `target`.
    pub fn directed(source: impl IntoVertex, target: impl IntoVertex) -> Result<Self> {
        Self::with_directedness(source, target, Directedness::Directed)
    }

    pub fn with_directedness(
        u: impl IntoVertex,
        v: impl IntoVertex,
        directedness: Directedness,
    ) -> Result<Self> {
        Self::from_vertices(u.into_vertex()?, v.into_vertex()?, directedness)
    }

    pub(crate) fn from_vertices(u: Vertex, v: Vertex, directedness: Directedness) -> Result<Self> {
        if u == v {
            return Err(GraphError::LoopNotAllowed(u));
        }
        Ok(Self::from_distinct(u, v, directedness))
    }

    /// Builds an edge from ends the caller already knows to be different.
    pub(crate) fn from_distinct(u: Vertex, v: Vertex, directedness: Directedness) -> Self {
        debug_assert!(u != v, "edge ends must differ");
        let ends = if directedness.is_directed() {
            (u, v)
        } else {
            sort_pair(u, v)
        };
        Self { ends, directedness }
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    /// The tail of a directed edge, or the smaller end of an undirected one.
    pub fn source(&self) -> &Vertex {
        &self.ends.0
    }

    /// The head of a directed edge, or the larger end of an undirected one.
    pub fn target(&self) -> &Vertex {
        &self.ends.1
    }

    pub fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.ends.0, &self.ends.1)
    }

    pub fn into_endpoints(self) -> (Vertex, Vertex) {
        self.ends
    }

    /// Returns true if `vertex` is one of the ends of this edge.  Ids that do
    /// not name a valid vertex are never contained.
    pub fn contains(&self, vertex: impl IntoVertex) -> bool {
        vertex
            .into_vertex()
            .is_ok_and(|v| self.ends.0 == v || self.ends.1 == v)
    }

    /// Given one end of the edge, returns the other.  Returns `None` if
    /// `vertex` is not an end of this edge.
    pub fn other_end(&self, vertex: &Vertex) -> Option<&Vertex> {
        if self.ends.0 == *vertex {
            Some(&self.ends.1)
        } else if self.ends.1 == *vertex {
            Some(&self.ends.0)
        } else {
            None
        }
    }

    /// Returns true if this edge joins `a` to `b`, in that order when the edge
    /// is directed.
    pub fn has_both(&self, a: &Vertex, b: &Vertex) -> bool {
        (self.source() == a && self.target() == b)
            || (!self.is_directed() && self.source() == b && self.target() == a)
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let arrow = if self.is_directed() { "->" } else { "--" };
        write!(f, "Edge({} {} {})", self.ends.0.id(), arrow, self.ends.1.id())
    }
}
