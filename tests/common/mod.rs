#![allow(dead_code)]

use smallgraph::prelude::*;

/// The 5-cycle `0 -> 1 -> 2 -> 3 -> 4 -> 0`.
pub fn five_cycle(directedness: Directedness) -> Graph {
    Graph::from_edges(
        "C5",
        directedness,
        [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
    )
    .unwrap()
}

/// Weights for [`five_cycle`] with one expensive edge.
pub fn five_cycle_weights() -> Weights {
    Weights::from_entries([
        ((0, 1), 2.0),
        ((1, 2), 2.0),
        ((2, 3), 2.0),
        ((3, 4), 10.0),
        ((4, 0), 2.0),
    ])
    .unwrap()
}

pub fn ints(values: &[i64]) -> Vec<Vertex> {
    values.iter().copied().map(Vertex::int).collect()
}
