use crate::{
    cost::Cost,
    directedness::Directedness,
    error::Result,
    graph::Graph,
    id::{EdgeId, VertexId},
    tracing_support::{debug, info_span, trace},
    vertex::Label,
};

/// Depth-first traversal from `source`, recording discovery and finishing
/// times.
///
/// `source` arrives at time 0; every later arrival or departure advances a
/// shared clock by one.  Neighbors are explored in adjacency order and the
/// tree edges are recorded as predecessors.  The traversal keeps its own
/// stack, so its depth is not limited by the call stack.
pub fn dfs<C: Cost, D: Directedness>(graph: &mut Graph<C, D>, source: VertexId) -> Result<()> {
    let _span = info_span!("dfs").entered();
    graph.check_vertex(source)?;
    graph.reset_search_state();

    let mut clock = 0u32;
    let start = graph.vertex_mut(source)?;
    start.arrival_time = Some(clock);
    start.label = Label::Visited;

    // Each frame holds a vertex, its neighbors and the index of the next
    // neighbor to look at.
    let mut stack: Vec<(VertexId, Vec<(EdgeId, VertexId)>, usize)> =
        vec![(source, graph.adjacent(source)?, 0)];
    while let Some((u, neighbors, next)) = stack.last_mut() {
        let u = *u;
        let Some(&(edge, v)) = neighbors.get(*next) else {
            stack.pop();
            clock += 1;
            graph.vertex_mut(u)?.departure_time = Some(clock);
            trace!(%u, clock, "departed");
            continue;
        };
        *next += 1;

        let vertex = graph.vertex_mut(v)?;
        if vertex.label == Label::Unvisited {
            clock += 1;
            vertex.arrival_time = Some(clock);
            vertex.label = Label::Visited;
            vertex.predecessor = Some(edge);
            trace!(%u, %v, clock, "arrived");
            stack.push((v, graph.adjacent(v)?, 0));
        }
    }
    debug!(%source, clock, "dfs finished");
    Ok(())
}
