use crate::{cost::Cost, directedness::Directedness, error::Result, graph::Graph, id::VertexId};

/// Fills `graph` with a deterministic, irregular graph of 510 vertices and
/// 6,646 edges, and returns the new vertex ids in creation order.
///
/// The graph is made of:
/// - a dense cluster (50 vertices, ~60% of pairs connected),
/// - a medium cluster (80 vertices, ~30%),
/// - a large sparse cluster (150 vertices, ~8%),
/// - 20 hubs linked to many earlier vertices,
/// - 200 scattered vertices with one to three edges each,
/// - 10 bridges joining the three clusters,
/// - long-range edges, reciprocal pairs and self loops.
///
/// `coordinates` and `cost` receive a running counter of the vertices and
/// edges created so far.
pub fn generate_large_graph<C, D, FV, FE>(
    graph: &mut Graph<C, D>,
    mut coordinates: FV,
    mut cost: FE,
) -> Result<Vec<VertexId>>
where
    C: Cost,
    D: Directedness,
    FV: FnMut(usize) -> Vec<f64>,
    FE: FnMut(usize) -> C,
{
    let mut ids: Vec<VertexId> = Vec::new();
    let mut edge_count = 0usize;
    let mut connect = |graph: &mut Graph<C, D>, a: VertexId, b: VertexId| -> Result<()> {
        graph.add_edge(a, b, cost(edge_count))?;
        edge_count += 1;
        Ok(())
    };
    let mut add_vertices = |graph: &mut Graph<C, D>, ids: &mut Vec<VertexId>, n: usize| {
        let first = ids.len();
        for _ in 0..n {
            let id = graph.add_vertex_at(&coordinates(ids.len()));
            ids.push(id);
        }
        first..ids.len()
    };

    // Three clusters of decreasing density.
    for (size, a, b, modulus, threshold) in [
        (50, 7, 11, 10, 6),
        (80, 13, 17, 10, 3),
        (150, 19, 23, 100, 8),
    ] {
        let cluster = add_vertices(graph, &mut ids, size);
        for i in cluster.clone() {
            for j in (i + 1)..cluster.end {
                if (i * a + j * b) % modulus < threshold {
                    connect(graph, ids[i], ids[j])?;
                }
            }
        }
    }

    // Hubs reach back to a large share of everything created before them.
    for _ in 0..20 {
        let hub = add_vertices(graph, &mut ids, 1).start;
        for i in 0..hub {
            if (hub * 29 + i * 31) % 7 < 4 {
                connect(graph, ids[hub], ids[i])?;
            }
        }
    }

    // Scattered vertices with a few edges each.
    for _ in 0..200 {
        let vertex = add_vertices(graph, &mut ids, 1).start;
        for c in 0..(vertex % 3) + 1 {
            let other = (vertex * 37 + c * 43) % vertex;
            connect(graph, ids[vertex], ids[other])?;
        }
    }

    // Bridges into each of the three clusters.
    for i in 0..10 {
        let bridge = add_vertices(graph, &mut ids, 1).start;
        for (start, len, step) in [(0, 50, 47), (50, 80, 53), (130, 150, 59)] {
            connect(graph, ids[bridge], ids[start + (i * step) % len])?;
        }
    }

    let n = ids.len();
    for i in 0..200 {
        let (a, b) = ((i * 61) % n, (i * 67 + 100) % n);
        if a != b {
            connect(graph, ids[a], ids[b])?;
        }
    }
    for i in 0..50 {
        let (a, b) = ((i * 73 + 7) % n, (i * 79 + 11) % n);
        if a != b {
            connect(graph, ids[a], ids[b])?;
            connect(graph, ids[b], ids[a])?;
        }
    }
    for i in 0..50 {
        let a = (i * 71) % n;
        connect(graph, ids[a], ids[a])?;
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directedness::{Directed, Undirected};

    #[test]
    fn test_generated_graph_shape() {
        let mut graph = Graph::<u32, Undirected>::new();
        let ids =
            generate_large_graph(&mut graph, |i| vec![i as f64, 0.0], |i| (i % 9) as u32 + 1)
                .unwrap();
        assert_eq!(ids.len(), 510);
        assert_eq!(graph.num_vertices(), 510);
        assert_eq!(graph.num_edges(), 6646);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let build = || {
            let mut graph = Graph::<u32, Directed>::new();
            generate_large_graph(&mut graph, |_| Vec::new(), |i| i as u32).unwrap();
            graph
                .edges()
                .map(|edge| (edge.source(), edge.target(), edge.cost()))
                .collect::<Vec<_>>()
        };
        assert_eq!(build(), build());
    }
}
