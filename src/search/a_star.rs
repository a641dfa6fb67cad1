use crate::{
    cost::{Cost, VertexCost, from_estimate},
    directedness::Directedness,
    error::Result,
    frontier::Frontier,
    graph::Graph,
    heuristics::Heuristic,
    id::VertexId,
    relax::relax_with_heuristic,
    tracing_support::{debug, info_span, trace},
    vertex::Label,
};

use super::TargetEstimate;

/// A* search from `source` to `target`.
///
/// Vertex costs hold f-scores: the cost of the best known path to the
/// vertex plus its heuristic estimate, converted into `C`.  The estimate of
/// `target` itself is normally zero, so once `target` is reached its cost
/// is the path cost.  Returns true as soon as `target` is expanded.
///
/// The result is optimal when edge costs are non-negative and the
/// heuristic never overestimates.  Neither is checked.
pub fn a_star<C, D, H>(
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
    let _span = info_span!("a_star").entered();
    graph.check_vertex(source)?;
    let estimate = TargetEstimate::new(graph, target, heuristic)?;
    graph.reset_search_state();

    let h_source = from_estimate::<C>(estimate.update(graph, source)?);
    let start = graph.vertex_mut(source)?;
    start.current_cost = VertexCost::Known(h_source);
    start.label = Label::Processing;

    let mut frontier = Frontier::new();
    frontier.push(source, h_source);
    #[cfg_attr(not(feature = "tracing"), allow(unused))]
    let mut expanded = 0usize;
    while let Some(u) = frontier.pop() {
        let vertex = graph.vertex_mut(u)?;
        if vertex.label == Label::Visited {
            continue;
        }
        vertex.label = Label::Visited;
        expanded += 1;
        trace!(%u, score = ?vertex.current_cost, "expanding");
        if u == target {
            debug!(%source, %target, expanded, "a* reached target");
            return Ok(true);
        }

        for (edge, v) in graph.adjacent(u)? {
            if graph.label(v)? == Label::Visited {
                continue;
            }
            estimate.update(graph, v)?;
            if !relax_with_heuristic(graph, u, v, edge) {
                continue;
            }
            let vertex = graph.vertex_mut(v)?;
            vertex.label = Label::Processing;
            if let VertexCost::Known(score) = vertex.current_cost {
                frontier.push(v, score);
            }
        }
    }
    debug!(%source, %target, expanded, "a* exhausted the frontier");
    Ok(false)
}
