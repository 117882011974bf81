use std::collections::{HashSet, VecDeque};

use crate::{Graph, vertex::Vertex};

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// A vertex reached by a breadth-first search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visit {
    pub vertex: Vertex,
    /// The vertex from which `vertex` was first discovered; `None` for the
    /// start vertex.
    pub predecessor: Option<Vertex>,
    /// The number of edges between the start and `vertex`.
    pub depth: usize,
}

/// Breadth-first traversal following edge direction.
///
/// Each reachable vertex is yielded exactly once, in order of depth.  Within
/// a layer, neighbours are discovered in sorted order, and a vertex keeps the
/// first predecessor that discovered it.
pub struct BfsIterator<'g> {
    graph: &'g Graph,
    reversed: bool,
    discovered: HashSet<Vertex>,
    queue: VecDeque<Visit>,
}

impl<'g> BfsIterator<'g> {
    pub(crate) fn new(graph: &'g Graph, start: Vertex) -> Self {
        Self::with_reversal(graph, start, false)
    }

    /// Walks edges backwards, so the depth of each visit is its distance *to*
    /// `start`.  The predecessor is the next vertex on the way to `start`.
    pub(crate) fn reversed(graph: &'g Graph, start: Vertex) -> Self {
        Self::with_reversal(graph, start, true)
    }

    fn with_reversal(graph: &'g Graph, start: Vertex, reversed: bool) -> Self {
        let mut discovered = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
        discovered.insert(start.clone());
        Self {
            graph,
            reversed,
            discovered,
            queue: VecDeque::from([Visit {
                vertex: start,
                predecessor: None,
                depth: 0,
            }]),
        }
    }
}

impl Iterator for BfsIterator<'_> {
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.queue.pop_front()?;
        let neighbors = if self.reversed {
            self.graph.predecessor_set(&visit.vertex)
        } else {
            self.graph.successor_set(&visit.vertex)
        };
        for neighbor in neighbors.into_iter().flatten() {
            if self.discovered.insert(neighbor.clone()) {
                self.queue.push_back(Visit {
                    vertex: neighbor.clone(),
                    predecessor: Some(visit.vertex.clone()),
                    depth: visit.depth + 1,
                });
            }
        }
        Some(visit)
    }
}

/// Depth-first traversal following edge direction, visiting smaller
/// neighbours first.
pub struct DfsIterator<'g> {
    graph: &'g Graph,
    visited: HashSet<Vertex>,
    stack: Vec<Vertex>,
}

impl<'g> DfsIterator<'g> {
    pub(crate) fn new(graph: &'g Graph, start: Vertex) -> Self {
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack: vec![start],
        }
    }
}

impl Iterator for DfsIterator<'_> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = self.stack.pop() {
            if self.visited.insert(vertex.clone()) {
                if let Some(succs) = self.graph.successor_set(&vertex) {
                    self.stack.extend(
                        succs
                            .iter()
                            .rev()
                            .filter(|v| !self.visited.contains(*v))
                            .cloned(),
                    );
                }
                return Some(vertex);
            }
        }
        None
    }
}
