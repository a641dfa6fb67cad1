use crate::{
    cost::{Cost, VertexCost},
    directedness::Directedness,
    error::Result,
    frontier::Frontier,
    graph::Graph,
    id::VertexId,
    relax::relax,
    tracing_support::{debug, info_span, trace},
    vertex::Label,
};

/// Uniform-cost search from `source` to `target`.
///
/// Expands vertices in order of their cost from `source` and stops as soon
/// as `target` is expanded.  Returns true if `target` was reached, in which
/// case its cost is the cheapest path cost.  Vertices expanded before
/// `target` also hold final costs; the rest of the graph is left partially
/// explored.
///
/// Edge costs must be non-negative.
pub fn ucs<C: Cost, D: Directedness>(
    graph: &mut Graph<C, D>,
    source: VertexId,
    target: VertexId,
) -> Result<bool> {
    let _span = info_span!("ucs").entered();
    graph.check_vertex(target)?;
    let found = cheapest_paths(graph, source, Some(target))?;
    debug!(%source, %target, found, "ucs finished");
    Ok(found)
}

/// Expands vertices in cost order from `source` until `target` is expanded
/// or the frontier runs dry.  Returns true if `target` was expanded.
pub(super) fn cheapest_paths<C: Cost, D: Directedness>(
    graph: &mut Graph<C, D>,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<bool> {
    graph.check_vertex(source)?;
    graph.reset_search_state();
    graph.vertex_mut(source)?.current_cost = VertexCost::Known(C::zero());

    let mut frontier = Frontier::new();
    frontier.push(source, C::zero());
    while let Some(u) = frontier.pop() {
        let vertex = graph.vertex_mut(u)?;
        if vertex.label == Label::Visited {
            continue;
        }
        vertex.label = Label::Visited;
        trace!(%u, cost = ?vertex.current_cost, queued = frontier.len(), "expanding");
        if Some(u) == target {
            return Ok(true);
        }

        for (edge, v) in graph.adjacent(u)? {
            if graph.label(v)? == Label::Visited || !relax(graph, u, v, edge) {
                continue;
            }
            let vertex = graph.vertex_mut(v)?;
            vertex.label = Label::Processing;
            if let VertexCost::Known(cost) = vertex.current_cost {
                frontier.push(v, cost);
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        directedness::Directed,
        error::GraphError,
        test_support::{clrs_graph, graph_from_edges, v},
    };

    #[test]
    fn test_ucs_finds_cheapest_cost() {
        let mut graph = clrs_graph::<u32>();
        assert!(ucs(&mut graph, v(0), v(8)).unwrap());
        assert_eq!(graph.current_cost(v(8)).unwrap(), VertexCost::Known(14));
        let path = graph.path_to(v(8)).unwrap();
        assert_eq!(path.vertices(), &[v(0), v(1), v(2), v(8)]);
        assert_eq!(path.total_cost(&graph).unwrap(), 14);
    }

    #[test]
    fn test_ucs_stops_at_target() {
        let mut graph = clrs_graph::<u32>();
        assert!(ucs(&mut graph, v(0), v(7)).unwrap());
        assert_eq!(graph.current_cost(v(7)).unwrap(), VertexCost::Known(8));
        // Vertex 4 lies beyond every vertex cheaper than 8.
        assert_eq!(graph.label(v(4)).unwrap(), Label::Unvisited);
    }

    #[test]
    fn test_ucs_source_is_target() {
        let mut graph = clrs_graph::<u32>();
        assert!(ucs(&mut graph, v(3), v(3)).unwrap());
        assert_eq!(graph.current_cost(v(3)).unwrap(), VertexCost::Known(0));
    }

    #[test]
    fn test_ucs_unreachable_target() {
        let mut graph = graph_from_edges::<Directed>(3, &[(0, 1, 2), (2, 1, 2)]);
        assert!(!ucs(&mut graph, v(0), v(2)).unwrap());
        assert_eq!(graph.current_cost(v(2)).unwrap(), VertexCost::Unknown);
    }

    #[test]
    fn test_ucs_missing_target() {
        let mut graph = clrs_graph::<u32>();
        assert_eq!(
            ucs(&mut graph, v(0), v(42)),
            Err(GraphError::VertexNotFound(v(42)))
        );
    }
}
