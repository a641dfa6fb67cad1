use std::collections::HashMap;

use bitvec::vec::BitVec;

use crate::{
    cost::{Cost, VertexCost},
    directedness::Directedness,
    error::Result,
    frontier::Frontier,
    graph::Graph,
    id::VertexId,
    tracing_support::{debug, info_span, trace},
    vertex::Label,
};

/// Grows a minimum spanning tree from `source` with Prim's algorithm.
///
/// The tree covers the component of `source`.  Afterwards each tree vertex
/// other than `source` has as predecessor the edge connecting it to the
/// tree, and as cost the cost of that edge; `source` has cost zero and no
/// predecessor.  Tree vertices are labelled [`Label::Visited`].
///
/// On a directed graph only outgoing edges are followed, so the result is a
/// spanning arborescence that need not be minimal.
pub fn prim<C: Cost, D: Directedness>(graph: &mut Graph<C, D>, source: VertexId) -> Result<()> {
    let _span = info_span!("prim").entered();
    graph.check_vertex(source)?;
    graph.reset_search_state();

    // Tree membership is tracked by each vertex's position in id order, so
    // the bit vector stays as long as the graph is large however sparse the
    // ids are.
    let position: HashMap<VertexId, usize> = graph
        .vertex_ids()
        .enumerate()
        .map(|(index, id)| (id, index))
        .collect();
    let mut in_tree: BitVec<usize> = BitVec::repeat(false, position.len());
    let is_in_tree = |in_tree: &BitVec<usize>, id: VertexId| {
        position.get(&id).is_some_and(|&index| in_tree[index])
    };
    graph.vertex_mut(source)?.current_cost = VertexCost::Known(C::zero());

    let mut frontier = Frontier::new();
    frontier.push(source, C::zero());
    #[cfg_attr(not(feature = "tracing"), allow(unused))]
    let mut tree_size = 0usize;
    while let Some(u) = frontier.pop() {
        let Some(&index) = position.get(&u) else {
            continue;
        };
        if in_tree[index] {
            continue;
        }
        in_tree.set(index, true);
        graph.vertex_mut(u)?.label = Label::Visited;
        tree_size += 1;

        for (edge, v) in graph.adjacent(u)? {
            if is_in_tree(&in_tree, v) {
                continue;
            }
            let cost = graph.edge(edge)?.cost();
            let vertex = graph.vertex_mut(v)?;
            if vertex.current_cost.is_improved_by(cost) {
                trace!(%u, %v, ?cost, "cheaper connection");
                vertex.current_cost = VertexCost::Known(cost);
                vertex.predecessor = Some(edge);
                vertex.label = Label::Processing;
                frontier.push(v, cost);
            }
        }
    }
    debug!(%source, tree_size, "prim finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        directedness::Undirected,
        graph::UndirectedGraph,
        test_support::{clrs_graph, graph_from_edges, v},
    };

    fn predecessor_costs(graph: &UndirectedGraph<u32>) -> Vec<Option<u32>> {
        graph
            .vertex_ids()
            .map(|id| graph.predecessor_cost(id).unwrap())
            .collect()
    }

    #[test]
    fn test_prim_predecessor_costs() {
        let mut graph = clrs_graph::<u32>();
        prim(&mut graph, v(0)).unwrap();
        assert_eq!(
            predecessor_costs(&graph),
            vec![None, Some(4), Some(8), Some(7), Some(9), Some(4), Some(2), Some(1), Some(2)]
        );
        let total: u32 = predecessor_costs(&graph).into_iter().flatten().sum();
        assert_eq!(total, 37);
        assert_eq!(graph.current_cost(v(0)).unwrap(), VertexCost::Known(0));
    }

    #[test]
    fn test_prim_tree_is_spanning() {
        let mut graph = clrs_graph::<u32>();
        prim(&mut graph, v(4)).unwrap();
        let tree_edges = graph
            .vertex_ids()
            .filter(|&id| graph.predecessor(id).unwrap().is_some())
            .count();
        assert_eq!(tree_edges, graph.num_vertices() - 1);
        let total: u32 = predecessor_costs(&graph).into_iter().flatten().sum();
        assert_eq!(total, 37);
        for id in graph.vertex_ids() {
            assert_eq!(graph.path_to(id).unwrap().first(), v(4));
        }
    }

    #[test]
    fn test_prim_stays_in_component() {
        let mut graph = graph_from_edges::<Undirected>(5, &[(0, 1, 3), (1, 2, 1), (0, 2, 1), (3, 4, 1)]);
        prim(&mut graph, v(0)).unwrap();
        assert_eq!(graph.predecessor_cost(v(1)).unwrap(), Some(1));
        assert_eq!(graph.predecessor_cost(v(2)).unwrap(), Some(1));
        assert_eq!(graph.label(v(3)).unwrap(), Label::Unvisited);
        assert_eq!(graph.current_cost(v(4)).unwrap(), VertexCost::Unknown);
    }

    #[test]
    fn test_prim_sparse_ids() {
        let mut graph = UndirectedGraph::<u32>::new();
        graph.add_vertex(crate::vertex::Vertex::without_coordinates(v(10)));
        graph.add_vertex(crate::vertex::Vertex::without_coordinates(v(3)));
        graph.add_edge(v(10), v(3), 6).unwrap();
        prim(&mut graph, v(10)).unwrap();
        assert_eq!(graph.predecessor_cost(v(3)).unwrap(), Some(6));
    }

    #[test]
    fn test_prim_huge_ids() {
        let mut graph = UndirectedGraph::<u32>::new();
        graph.add_vertex(crate::vertex::Vertex::without_coordinates(v(usize::MAX - 1)));
        graph.add_vertex(crate::vertex::Vertex::without_coordinates(v(usize::MAX)));
        graph.add_vertex(crate::vertex::Vertex::without_coordinates(v(0)));
        graph.add_edge(v(usize::MAX - 1), v(usize::MAX), 5).unwrap();
        prim(&mut graph, v(usize::MAX - 1)).unwrap();
        assert_eq!(graph.predecessor_cost(v(usize::MAX)).unwrap(), Some(5));
        assert_eq!(graph.label(v(0)).unwrap(), Label::Unvisited);
    }
}
