use std::{
    fmt::{self, Display, Formatter},
    iter::once,
};

use crate::{Directedness, edge::Edge, error::Result, vertex::Vertex};

/// A walk through a graph, represented as a sequence of vertices and the
/// edges that connect consecutive vertices.
///
/// A path is either empty (no vertices, used for unreachable targets) or
/// has exactly one more vertex than it has edges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Path {
    /// Creates a path consisting of a single vertex.
    pub fn new(start: Vertex) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
        }
    }

    /// Creates a path through `vertices`, in order.  Fails if two consecutive
    /// vertices are equal.
    pub fn from_vertices(
        vertices: impl IntoIterator<Item = Vertex>,
        directedness: Directedness,
    ) -> Result<Self> {
        let mut vertices = vertices.into_iter();
        let Some(start) = vertices.next() else {
            return Ok(Self::default());
        };
        let mut path = Self::new(start);
        for next in vertices {
            let last = path.vertices[path.vertices.len() - 1].clone();
            path.edges
                .push(Edge::from_vertices(last, next.clone(), directedness)?);
            path.vertices.push(next);
        }
        Ok(path)
    }

    /// Returns true if the path has no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The number of edges in the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn first_vertex(&self) -> Option<&Vertex> {
        self.vertices.first()
    }

    pub fn last_vertex(&self) -> Option<&Vertex> {
        self.vertices.last()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edges as ordered `(from, to)` pairs in travel order.  Unlike
    /// [`Self::edges`], this keeps the direction of travel along undirected
    /// edges.
    pub fn steps(&self) -> impl Iterator<Item = (&Vertex, &Vertex)> + '_ {
        self.vertices.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Returns an iterator over the vertices in the path along with the edges
    /// connecting them. Each item is a tuple of the form `(incoming_edge,
    /// vertex, outgoing_edge)`; the edges are `None` only for the first
    /// vertex (no incoming edge) and the last vertex (no outgoing edge).
    pub fn vertices_with_edges(
        &self,
    ) -> impl Iterator<Item = (Option<&Edge>, &Vertex, Option<&Edge>)> + '_ {
        let incoming = once(None).chain(self.edges.iter().map(Some));
        let outgoing = self.edges.iter().map(Some).chain(once(None));
        incoming
            .zip(self.vertices.iter())
            .zip(outgoing)
            .map(|((in_edge, vertex), out_edge)| (in_edge, vertex, out_edge))
    }

    pub fn into_parts(self) -> (Vec<Vertex>, Vec<Edge>) {
        (self.vertices, self.edges)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", v.id())?;
        }
        Ok(())
    }
}
