#![cfg(test)]

use std::fmt::Debug;

use quickcheck::{Arbitrary, Gen};

use crate::{
    directedness::Directedness,
    graph::{Graph, UndirectedGraph},
    id::VertexId,
};

pub fn v(i: usize) -> VertexId {
    VertexId(i)
}

/// A small random graph with `u32` costs below 10 and integral coordinates
/// in a 2-D grid.  Vertex ids are dense, starting at zero.
#[derive(Debug, Clone)]
pub struct ArbGraph<D: Directedness>(pub Graph<u32, D>);

impl<D> Arbitrary for ArbGraph<D>
where
    D: Directedness + Send + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 12;
        let num_edges = usize::arbitrary(g) % 30;
        let num_extra_parallel_edges = usize::arbitrary(g) % 3;
        let num_extra_self_loops = usize::arbitrary(g) % 3;

        let mut graph = Graph::new();
        for _ in 0..num_vertices {
            let x = f64::from(u8::arbitrary(g) % 16);
            let y = f64::from(u8::arbitrary(g) % 16);
            graph.add_vertex_at(&[x, y]);
        }

        if num_vertices > 0 {
            for i in 0..num_edges {
                let source = v(usize::arbitrary(g) % num_vertices);
                let target = v(usize::arbitrary(g) % num_vertices);
                let add = |graph: &mut Graph<u32, D>, s, t, g: &mut Gen| {
                    graph
                        .add_edge(s, t, u32::arbitrary(g) % 10)
                        .expect("generated ids exist");
                };
                add(&mut graph, source, target, g);
                if i < num_extra_parallel_edges {
                    add(&mut graph, source, target, g);
                }
                if i < num_extra_self_loops {
                    add(&mut graph, source, source, g);
                }
            }
        }

        ArbGraph(graph)
    }
}

/// The CLRS sample graph, see [`crate::sample_graph`].
pub fn clrs_graph<C>() -> UndirectedGraph<C>
where
    C: crate::cost::Cost + From<u8>,
{
    crate::sample_graph::sample_graph().expect("sample ids exist")
}

/// Builds a graph over vertices `0..n` from `(source, target, cost)` triples.
pub fn graph_from_edges<D: Directedness>(
    n: usize,
    edges: &[(usize, usize, u32)],
) -> Graph<u32, D> {
    let mut graph = Graph::new();
    for _ in 0..n {
        graph.add_vertex_at(&[]);
    }
    for &(s, t, cost) in edges {
        graph.add_edge(v(s), v(t), cost).expect("fixture ids exist");
    }
    graph
}

/// Panics with a readable message when two cost tables differ.
pub fn assert_costs_eq<T: PartialEq + Debug>(actual: &[T], expected: &[T]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(a, e, "vertex {i}");
    }
}
