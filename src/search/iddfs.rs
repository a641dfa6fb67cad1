use std::collections::HashMap;

use crate::{
    cost::Cost,
    directedness::Directedness,
    error::Result,
    graph::Graph,
    id::{EdgeId, VertexId},
    tracing_support::{debug, info_span, trace},
    vertex::Label,
};

struct Frame {
    vertex: VertexId,
    /// Edge from the parent frame; `None` for the start vertex.
    edge: Option<EdgeId>,
    neighbors: Vec<(EdgeId, VertexId)>,
    next: usize,
    remaining: u32,
}

/// Iterative-deepening depth-first search from `start` to `target`.
///
/// Runs depth-first searches limited to `bound` edges for `bound` in
/// `0..=max_depth` and returns true as soon as one of them reaches
/// `target`, which happens exactly when `target` is at most `max_depth`
/// edges from `start`.  On success the predecessor edges from `target` lead
/// back to `start` along the path that was found and the vertices on it are
/// labelled [`Label::Visited`].  Costs are not touched.
///
/// Within one bound a vertex is explored again only if it is reached with
/// more depth to spare than before.  The search keeps its own stack.
pub fn iddfs<C: Cost, D: Directedness>(
    graph: &mut Graph<C, D>,
    start: VertexId,
    target: VertexId,
    max_depth: u32,
) -> Result<bool> {
    let _span = info_span!("iddfs").entered();
    graph.check_vertex(start)?;
    graph.check_vertex(target)?;
    graph.reset_search_state();

    if start == target {
        graph.vertex_mut(start)?.label = Label::Visited;
        return Ok(true);
    }
    for bound in 1..=max_depth {
        trace!(bound, "deepening");
        if let Some(path) = depth_limited(graph, start, target, bound)? {
            for (edge, vertex) in path {
                let vertex = graph.vertex_mut(vertex)?;
                vertex.predecessor = edge;
                vertex.label = Label::Visited;
            }
            debug!(%start, %target, bound, "iddfs reached target");
            return Ok(true);
        }
    }
    debug!(%start, %target, max_depth, "iddfs found no path within the depth limit");
    Ok(false)
}

/// Searches paths of at most `bound` edges and returns the first one found
/// to `target`, as (incoming edge, vertex) pairs starting at `start`.
fn depth_limited<C: Cost, D: Directedness>(
    graph: &Graph<C, D>,
    start: VertexId,
    target: VertexId,
    bound: u32,
) -> Result<Option<Vec<(Option<EdgeId>, VertexId)>>> {
    // The most depth to spare any vertex was explored with.
    let mut explored = HashMap::from([(start, bound)]);
    let mut stack = vec![Frame {
        vertex: start,
        edge: None,
        neighbors: graph.adjacent(start)?,
        next: 0,
        remaining: bound,
    }];
    while let Some(frame) = stack.last_mut() {
        let Some(&(edge, v)) = frame.neighbors.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let remaining = frame.remaining - 1;

        if v == target {
            let path = stack
                .iter()
                .map(|frame| (frame.edge, frame.vertex))
                .chain([(Some(edge), v)])
                .collect();
            return Ok(Some(path));
        }
        if remaining == 0 || explored.get(&v).is_some_and(|&seen| seen >= remaining) {
            continue;
        }
        explored.insert(v, remaining);
        stack.push(Frame {
            vertex: v,
            edge: Some(edge),
            neighbors: graph.adjacent(v)?,
            next: 0,
            remaining,
        });
    }
    Ok(None)
}
