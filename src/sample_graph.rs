//! The 9-vertex, 14-edge graph of CLRS figure 23.5, laid out on a grid so
//! that the distance heuristics have coordinates to work with.

use crate::{
    cost::Cost,
    directedness::Directedness,
    error::Result,
    graph::Graph,
    id::VertexId,
};

/// `(source, target, cost)` triples over vertices `0..9`.
pub const SAMPLE_EDGES: [(usize, usize, u8); 14] = [
    (0, 1, 4),
    (0, 7, 8),
    (1, 7, 11),
    (1, 2, 8),
    (2, 3, 7),
    (2, 8, 2),
    (2, 5, 4),
    (3, 4, 9),
    (3, 5, 14),
    (4, 5, 10),
    (5, 6, 2),
    (6, 7, 1),
    (6, 8, 6),
    (7, 8, 7),
];

pub const SAMPLE_COORDINATES: [[f64; 2]; 9] = [
    [3.0, 4.0],
    [4.0, 5.0],
    [6.0, 5.0],
    [8.0, 5.0],
    [9.0, 4.0],
    [8.0, 3.0],
    [6.0, 3.0],
    [4.0, 3.0],
    [5.0, 4.0],
];

/// Builds the sample graph with vertex ids `0..9`.
pub fn sample_graph<C, D>() -> Result<Graph<C, D>>
where
    C: Cost + From<u8>,
    D: Directedness,
{
    let mut graph = Graph::new();
    for (index, coordinates) in SAMPLE_COORDINATES.iter().enumerate() {
        graph.add_vertex(crate::vertex::Vertex::new(VertexId(index), coordinates));
    }
    for (s, t, cost) in SAMPLE_EDGES {
        graph.add_edge(VertexId(s), VertexId(t), <C as From<u8>>::from(cost))?;
    }
    Ok(graph)
}
