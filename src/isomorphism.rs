//! Exact isomorphism testing for small graphs.
//!
//! The search tries every bijection between the two vertex sets, one vertex
//! at a time, over the graphs' [adjacency matrices](AdjacencyMatrix).  A
//! partial assignment is abandoned as soon as one assigned pair disagrees on
//! adjacency with a vertex assigned earlier, and a vertex is only ever paired
//! with a vertex of the same in and out degree.  Neither rule discards a
//! valid bijection, so the answer is exact, but the worst case is still
//! `n!` and the search is only practical for small graphs.

use std::collections::BTreeMap;

use bitvec::vec::BitVec;

use crate::{
    Graph,
    error::{GraphError, Result},
    matrix::AdjacencyMatrix,
    tracing_support::{debug, info_span},
    vertex::Vertex,
};

/// The largest order [`IsomorphismChecker::default`] will search.
pub const DEFAULT_MAX_ISOMORPHISM_ORDER: usize = 10;

/// The outcome of an isomorphism search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsomorphismReport {
    pub isomorphic: bool,
    /// The bijection found, from the vertices of the first graph to those of
    /// the second.  Empty when the graphs are not isomorphic.
    pub mapping: BTreeMap<Vertex, Vertex>,
    /// The number of vertex pairings tried; zero when the graphs were told
    /// apart by their directedness, order or size alone.
    pub steps: u64,
}

impl IsomorphismReport {
    fn rejected() -> Self {
        Self {
            isomorphic: false,
            mapping: BTreeMap::new(),
            steps: 0,
        }
    }
}

/// Runs isomorphism searches, refusing graphs above a maximum order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsomorphismChecker {
    max_order: Option<usize>,
}

impl Default for IsomorphismChecker {
    fn default() -> Self {
        Self::with_max_order(DEFAULT_MAX_ISOMORPHISM_ORDER)
    }
}

impl IsomorphismChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_order(max_order: usize) -> Self {
        Self {
            max_order: Some(max_order),
        }
    }

    /// A checker with no order limit.
    pub fn unbounded() -> Self {
        Self { max_order: None }
    }

    pub fn max_order(&self) -> Option<usize> {
        self.max_order
    }

    /// Decides whether `first` and `second` are isomorphic.
    ///
    /// Graphs that differ in directedness, order or size are rejected before
    /// the limit is consulted, so only a search that would actually run can
    /// fail with [`GraphError::TooLargeForIsomorphism`].
    pub fn check(&self, first: &Graph, second: &Graph) -> Result<IsomorphismReport> {
        if first.directedness() != second.directedness()
            || first.order() != second.order()
            || first.size() != second.size()
        {
            debug!(first = %first.id(), second = %second.id(), "isomorphism fast reject");
            return Ok(IsomorphismReport::rejected());
        }
        if let Some(limit) = self.max_order
            && first.order() > limit
        {
            return Err(GraphError::TooLargeForIsomorphism {
                order: first.order(),
                limit,
            });
        }
        Ok(search(first, second))
    }
}

/// Decides whether two graphs are isomorphic, with no limit on their order.
pub fn are_isomorphic(first: &Graph, second: &Graph) -> bool {
    IsomorphismChecker::unbounded()
        .check(first, second)
        .is_ok_and(|report| report.isomorphic)
}

fn search(first: &Graph, second: &Graph) -> IsomorphismReport {
    let _span = info_span!("isomorphism", first = %first.id(), second = %second.id()).entered();
    let first = first.adjacency_matrix();
    let second = second.adjacency_matrix();
    let order = first.order();
    let mut state = SearchState {
        first_degrees: degrees(&first),
        second_degrees: degrees(&second),
        first: &first,
        second: &second,
        assignment: Vec::with_capacity(order),
        used: BitVec::repeat(false, order),
        steps: 0,
    };
    let isomorphic = state.extend();
    debug!(isomorphic, steps = state.steps, "isomorphism search finished");
    let mapping = if isomorphic {
        state
            .assignment
            .iter()
            .enumerate()
            .map(|(i, &j)| (first.vertices()[i].clone(), second.vertices()[j].clone()))
            .collect()
    } else {
        BTreeMap::new()
    };
    IsomorphismReport {
        isomorphic,
        mapping,
        steps: state.steps,
    }
}

fn degrees(matrix: &AdjacencyMatrix) -> Vec<(usize, usize)> {
    (0..matrix.order())
        .map(|i| (matrix.in_degree(i), matrix.out_degree(i)))
        .collect()
}

struct SearchState<'a> {
    first: &'a AdjacencyMatrix,
    second: &'a AdjacencyMatrix,
    first_degrees: Vec<(usize, usize)>,
    second_degrees: Vec<(usize, usize)>,
    /// `assignment[i]` is the row of `second` that row `i` of `first` maps to.
    assignment: Vec<usize>,
    /// Rows of `second` already in the assignment.
    used: BitVec,
    steps: u64,
}

impl SearchState<'_> {
    /// Extends the assignment to a full isomorphism, returning false (with the
    /// assignment restored) if none exists.
    fn extend(&mut self) -> bool {
        let i = self.assignment.len();
        if i == self.first.order() {
            return true;
        }
        for j in 0..self.second.order() {
            if self.used[j] || self.first_degrees[i] != self.second_degrees[j] {
                continue;
            }
            self.steps += 1;
            if !self.consistent(i, j) {
                continue;
            }
            self.used.set(j, true);
            self.assignment.push(j);
            if self.extend() {
                return true;
            }
            self.assignment.pop();
            self.used.set(j, false);
        }
        false
    }

    /// Whether pairing row `i` with row `j` agrees with every pair assigned
    /// so far, in both directions.
    fn consistent(&self, i: usize, j: usize) -> bool {
        self.assignment.iter().enumerate().all(|(k, &l)| {
            self.first.get(i, k) == self.second.get(j, l)
                && self.first.get(k, i) == self.second.get(l, j)
        })
    }
}
