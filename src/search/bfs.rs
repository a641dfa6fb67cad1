use std::collections::VecDeque;

use crate::{
    cost::{Cost, VertexCost},
    directedness::Directedness,
    error::Result,
    graph::Graph,
    id::VertexId,
    tracing_support::{debug, info_span, trace},
    vertex::Label,
};

/// Breadth-first traversal from `source`.
///
/// Afterwards the cost of every reachable vertex is its distance from
/// `source` in edges, its predecessor is the edge through which it was
/// discovered, and its label is [`Label::Visited`].  Unreachable vertices
/// keep an unknown cost.
pub fn bfs<C: Cost, D: Directedness>(graph: &mut Graph<C, D>, source: VertexId) -> Result<()> {
    let _span = info_span!("bfs").entered();
    graph.check_vertex(source)?;
    graph.reset_search_state();

    let start = graph.vertex_mut(source)?;
    start.current_cost = VertexCost::Known(C::zero());
    start.label = Label::Processing;

    let mut queue = VecDeque::from([(source, C::zero())]);
    #[cfg_attr(not(feature = "tracing"), allow(unused))]
    let mut visited = 0usize;
    while let Some((u, cost_u)) = queue.pop_front() {
        for (edge, v) in graph.adjacent(u)? {
            let vertex = graph.vertex_mut(v)?;
            if vertex.label == Label::Unvisited {
                let cost_v = cost_u + C::one();
                vertex.label = Label::Processing;
                vertex.current_cost = VertexCost::Known(cost_v);
                vertex.predecessor = Some(edge);
                trace!(%u, %v, "discovered");
                queue.push_back((v, cost_v));
            }
        }
        graph.vertex_mut(u)?.label = Label::Visited;
        visited += 1;
    }
    debug!(%source, visited, "bfs finished");
    Ok(())
}
