use crate::{
    cost::{Cost, VertexCost},
    directedness::Directedness,
    error::Result,
    frontier::Frontier,
    graph::Graph,
    heuristics::Heuristic,
    id::VertexId,
    tracing_support::{debug, info_span, trace},
    vertex::Label,
};

use super::TargetEstimate;

/// Greedy best-first search: always expands the discovered vertex that the
/// heuristic rates closest to `target`.
///
/// Returns true as soon as `target` is expanded.  The path found through
/// the predecessor edges is usually not the cheapest one; each vertex cost
/// is the cost of the path the search discovered it by.
pub fn greedy_best_first<C, D, H>(
    graph: &mut Graph<C, D>,
    source: VertexId,
    target: VertexId,
    heuristic: &H,
) -> Result<bool>
where
    C: Cost,
    D: Directedness,
    H: Heuristic + ?Sized,
{
    let _span = info_span!("greedy_best_first").entered();
    graph.check_vertex(source)?;
    let estimate = TargetEstimate::new(graph, target, heuristic)?;
    graph.reset_search_state();

    let h_source = estimate.update(graph, source)?;
    let start = graph.vertex_mut(source)?;
    start.current_cost = VertexCost::Known(C::zero());
    start.label = Label::Processing;

    let mut frontier = Frontier::new();
    frontier.push(source, h_source);
    while let Some(u) = frontier.pop() {
        let vertex = graph.vertex_mut(u)?;
        vertex.label = Label::Visited;
        let cost_u = vertex.current_cost;
        trace!(%u, estimate = vertex.heuristic_cost, "expanding");
        if u == target {
            debug!(%source, %target, "greedy search reached target");
            return Ok(true);
        }

        for (edge, v) in graph.adjacent(u)? {
            if graph.label(v)? != Label::Unvisited {
                continue;
            }
            let h_v = estimate.update(graph, v)?;
            let edge_cost = graph.edge(edge)?.cost();
            let vertex = graph.vertex_mut(v)?;
            vertex.label = Label::Processing;
            vertex.predecessor = Some(edge);
            if let VertexCost::Known(cost) = cost_u {
                vertex.current_cost = VertexCost::Known(cost + edge_cost);
            }
            frontier.push(v, h_v);
        }
    }
    debug!(%source, %target, "greedy search exhausted the frontier");
    Ok(false)
}
