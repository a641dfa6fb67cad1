//! The edge relaxation step shared by the cost-ordered searches.

use crate::{
    cost::{Cost, from_estimate},
    directedness::Directedness,
    graph::Graph,
    id::{EdgeId, VertexId},
};

/// Tries to lower the cost of `v` by reaching it from `u` through `edge`.
///
/// If `cost(u) + cost(edge)` is strictly smaller than the current cost of
/// `v`, the cost of `v` is lowered, its predecessor becomes `edge`, and the
/// function returns true.  Nothing changes, and false is returned, when `u`
/// has no known cost or any of the ids is not in the graph.
pub fn relax<C: Cost, D: Directedness>(
    graph: &mut Graph<C, D>,
    u: VertexId,
    v: VertexId,
    edge: EdgeId,
) -> bool {
    let Some(candidate) = candidate_cost(graph, u, edge, |cost_u, _| cost_u) else {
        return false;
    };
    improve(graph, v, edge, candidate)
}

/// Like [`relax`], but the vertex costs are f-scores: the recorded cost of a
/// vertex is its path cost plus its heuristic cost.  The path cost of `u` is
/// recovered by subtracting the heuristic cost of `u` before the edge cost
/// and the heuristic cost of `v` are added.
///
/// The heuristic cost of `v` must already be set.
pub fn relax_with_heuristic<C: Cost, D: Directedness>(
    graph: &mut Graph<C, D>,
    u: VertexId,
    v: VertexId,
    edge: EdgeId,
) -> bool {
    let Ok(heuristic_v) = graph.heuristic_cost(v) else {
        return false;
    };
    let Some(candidate) = candidate_cost(graph, u, edge, |score_u, heuristic_u| {
        // An f-score below its own estimate has no path cost left.
        let heuristic_u: C = from_estimate(heuristic_u);
        if heuristic_u > score_u {
            C::zero()
        } else {
            score_u - heuristic_u
        }
    }) else {
        return false;
    };
    improve(graph, v, edge, candidate + from_estimate(heuristic_v))
}

fn candidate_cost<C: Cost, D: Directedness>(
    graph: &Graph<C, D>,
    u: VertexId,
    edge: EdgeId,
    path_cost: impl FnOnce(C, f64) -> C,
) -> Option<C> {
    let vertex_u = graph.vertex(u).ok()?;
    let cost_u = vertex_u.current_cost().known()?;
    let edge_cost = graph.edge(edge).ok()?.cost();
    Some(path_cost(cost_u, vertex_u.heuristic_cost()) + edge_cost)
}

fn improve<C: Cost, D: Directedness>(
    graph: &mut Graph<C, D>,
    v: VertexId,
    edge: EdgeId,
    candidate: C,
) -> bool {
    let Ok(vertex_v) = graph.vertex_mut(v) else {
        return false;
    };
    if vertex_v.current_cost.is_improved_by(candidate) {
        vertex_v.current_cost = candidate.into();
        vertex_v.predecessor = Some(edge);
        true
    } else {
        false
    }
}
