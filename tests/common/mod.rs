#![allow(dead_code)]

use graphsearch::{prelude::*, sample_graph::sample_graph};

pub fn v(i: usize) -> VertexId {
    VertexId(i)
}

/// The CLRS figure 23.5 graph with `f64` costs.
pub fn worked_example() -> UndirectedGraph<f64> {
    sample_graph().expect("sample vertices exist")
}

/// Known costs of every vertex, in id order.
pub fn known_costs<C: Cost, D: Directedness>(graph: &Graph<C, D>) -> Vec<Option<C>> {
    graph
        .vertices()
        .map(|vertex| vertex.current_cost().known())
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
