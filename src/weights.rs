use std::collections::HashMap;

use crate::{
    Directedness,
    error::{GraphError, Result},
    vertex::{IntoVertex, Vertex},
};

/// The weight used for edges with no entry in a [`Weights`] table.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// An edge-weight lookup keyed by ordered vertex pairs.
///
/// For undirected graphs a weight stored under `(u, v)` also applies to
/// `(v, u)` unless that pair has its own entry.  Edges with no entry weigh
/// [`DEFAULT_WEIGHT`].  Weights are never negative or NaN.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Weights {
    table: HashMap<(Vertex, Vertex), f64>,
}

impl Weights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `((u, v), weight)` entries.
    pub fn from_entries<U, V>(entries: impl IntoIterator<Item = ((U, V), f64)>) -> Result<Self>
    where
        U: IntoVertex,
        V: IntoVertex,
    {
        let mut weights = Self::new();
        for ((u, v), weight) in entries {
            weights.insert(u, v, weight)?;
        }
        Ok(weights)
    }

    /// Sets the weight of the `(u, v)` pair, returning the previous weight.
    pub fn insert(
        &mut self,
        u: impl IntoVertex,
        v: impl IntoVertex,
        weight: f64,
    ) -> Result<Option<f64>> {
        let (u, v) = (u.into_vertex()?, v.into_vertex()?);
        if weight.is_nan() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                source_vertex: u,
                target_vertex: v,
                weight,
            });
        }
        Ok(self.table.insert((u, v), weight))
    }

    /// The explicit entry for exactly `(u, v)`, if any.
    pub fn get(&self, u: &Vertex, v: &Vertex) -> Option<f64> {
        self.table.get(&(u.clone(), v.clone())).copied()
    }

    /// The weight of traversing the edge from `u` to `v`.
    pub fn weight(&self, u: &Vertex, v: &Vertex, directedness: Directedness) -> f64 {
        let forward = self.get(u, v);
        let weight = if directedness.is_directed() {
            forward
        } else {
            forward.or_else(|| self.get(v, u))
        };
        weight.unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
