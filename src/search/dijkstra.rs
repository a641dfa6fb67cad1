use crate::{
    cost::Cost,
    directedness::Directedness,
    error::Result,
    graph::Graph,
    id::VertexId,
    tracing_support::{debug, info_span},
};

use super::ucs::cheapest_paths;

/// Computes the cheapest path cost from `source` to every reachable vertex.
///
/// Predecessor edges form a shortest-path tree rooted at `source`.
/// Unreachable vertices keep an unknown cost.  Edge costs must be
/// non-negative.
pub fn dijkstra<C: Cost, D: Directedness>(graph: &mut Graph<C, D>, source: VertexId) -> Result<()> {
    let _span = info_span!("dijkstra").entered();
    cheapest_paths(graph, source, None)?;
    debug!(%source, "dijkstra finished");
    Ok(())
}
