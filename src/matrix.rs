//! Matrix views of a graph.
//!
//! Both matrices index vertices in sorted order, so two graphs with the same
//! vertex set agree on which row belongs to which vertex.

use std::fmt::{self, Display, Formatter};

use bitvec::{slice::BitSlice, vec::BitVec};

use crate::{Directedness, Graph, edge::Edge, vertex::Vertex};

/// A dense square adjacency matrix, one bit per ordered vertex pair.
///
/// Entry `(i, j)` is set when there is an edge from vertex `i` to vertex
/// `j`, so the matrix is symmetric for undirected graphs.  The diagonal is
/// always clear.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    vertices: Vec<Vertex>,
    directedness: Directedness,
    bits: BitVec,
}

impl AdjacencyMatrix {
    pub fn new(graph: &Graph) -> Self {
        let vertices: Vec<Vertex> = graph.vertices().cloned().collect();
        let order = vertices.len();
        let mut bits = BitVec::with_capacity(order * order);
        bits.resize(order * order, false);
        let mut matrix = Self {
            vertices,
            directedness: graph.directedness(),
            bits,
        };
        for (row, u) in matrix.vertices.iter().enumerate() {
            for v in graph.successor_set(u).into_iter().flatten() {
                if let Ok(col) = matrix.vertices.binary_search(v) {
                    matrix.bits.set(row * order + col, true);
                }
            }
        }
        matrix
    }

    /// The number of rows (and columns).
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// The vertex of each row, in sorted order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn index_of(&self, vertex: &Vertex) -> Option<usize> {
        self.vertices.binary_search(vertex).ok()
    }

    /// Returns true if there is an edge from row `i` to column `j`.  Out of
    /// range indices read as false.
    pub fn get(&self, i: usize, j: usize) -> bool {
        i < self.order() && j < self.order() && self.bits[self.unchecked_index(i, j)]
    }

    /// The bits of row `i`.
    ///
    /// # Panics
    ///
    /// If `i` is not a row index.
    pub fn row(&self, i: usize) -> &BitSlice {
        let order = self.order();
        &self.bits[i * order..(i + 1) * order]
    }

    pub fn out_degree(&self, i: usize) -> usize {
        self.row(i).count_ones()
    }

    pub fn in_degree(&self, j: usize) -> usize {
        (0..self.order()).filter(|&i| self.get(i, j)).count()
    }

    /// The number of set entries: the edge count for directed graphs, twice
    /// the edge count for undirected ones.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    fn unchecked_index(&self, i: usize, j: usize) -> usize {
        i * self.order() + j
    }
}

impl Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in 0..self.order() {
            for (j, bit) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", u8::from(*bit))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A vertex-by-edge incidence matrix.
///
/// For an undirected edge both of its rows hold `1`.  For a directed edge
/// the row of its source holds `-1` and the row of its target holds `1`.
/// Columns follow the sorted edge order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncidenceMatrix {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    entries: Vec<i8>,
}

impl IncidenceMatrix {
    pub fn new(graph: &Graph) -> Self {
        let vertices: Vec<Vertex> = graph.vertices().cloned().collect();
        let edges: Vec<Edge> = graph.edges().cloned().collect();
        let mut entries = vec![0; vertices.len() * edges.len()];
        let (tail, head) = if graph.is_directed() { (-1, 1) } else { (1, 1) };
        for (col, edge) in edges.iter().enumerate() {
            let (u, v) = edge.endpoints();
            if let (Ok(i), Ok(j)) = (vertices.binary_search(u), vertices.binary_search(v)) {
                entries[i * edges.len() + col] = tail;
                entries[j * edges.len() + col] = head;
            }
        }
        Self {
            vertices,
            edges,
            entries,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The entry for vertex row `i` and edge column `j`; zero when out of
    /// range.
    pub fn get(&self, i: usize, j: usize) -> i8 {
        if i < self.vertices.len() && j < self.edges.len() {
            self.entries[i * self.edges.len() + j]
        } else {
            0
        }
    }

    /// The entries of vertex row `i`, one per edge.
    ///
    /// # Panics
    ///
    /// If `i` is not a row index.
    pub fn row(&self, i: usize) -> &[i8] {
        let width = self.edges.len();
        &self.entries[i * width..(i + 1) * width]
    }
}

impl Display for IncidenceMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in 0..self.vertices.len() {
            for (j, entry) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{entry:2}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Graph {
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::new(self)
    }

    pub fn incidence_matrix(&self) -> IncidenceMatrix {
        IncidenceMatrix::new(self)
    }
}
