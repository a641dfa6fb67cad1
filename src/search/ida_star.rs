use std::{cmp::Ordering, collections::HashMap};

use crate::{
    cost::{Cost, VertexCost, from_estimate},
    directedness::Directedness,
    error::Result,
    graph::Graph,
    heuristics::Heuristic,
    id::{EdgeId, VertexId},
    tracing_support::{debug, info_span, trace},
    vertex::Label,
};

use super::TargetEstimate;

/// A step of a path: the edge taken and the vertex it leads to.
type Step = (EdgeId, VertexId);

#[derive(Debug, Clone, Copy)]
struct Child<C> {
    score: C,
    cost: C,
    step: Step,
}

struct Frame<C> {
    /// `None` for the start vertex.
    step: Option<Step>,
    remaining: u32,
    /// Unexplored children, best score last.
    children: Vec<Child<C>>,
}

/// Iterative-deepening A* from `start` to `target`.
///
/// Runs depth-first searches limited to paths of at most `bound` edges for
/// `bound` in `0..=max_depth`, stopping after the first bound at which
/// `target` is reached.  Within one bound, children are explored in order
/// of their f-score (path cost plus heuristic estimate), and a vertex is
/// expanded again only when it is reached more cheaply or with more depth
/// to spare than before.  The bound that reaches `target` is searched to
/// the end, so the reported cost of `target` is that of the cheapest path
/// with at most `bound` edges.
///
/// Costs follow the f-score convention of [`a_star`](super::a_star): each
/// bound starts `start` at its heuristic estimate rather than zero, which
/// is the same thing for the path cost.  On success the predecessor edges
/// from `target` lead back to `start` and vertex costs along that path hold
/// f-scores.  Returns false if no path of at most
/// `max_depth` edges exists.  The search keeps its own stack.
pub fn ida_star<C, D, H>(
    graph: &mut Graph<C, D>,
    start: VertexId,
    target: VertexId,
    max_depth: u32,
    heuristic: &H,
) -> Result<bool>
where
    C: Cost,
    D: Directedness,
    H: Heuristic + ?Sized,
{
    let _span = info_span!("ida_star").entered();
    graph.check_vertex(start)?;
    let estimate = TargetEstimate::new(graph, target, heuristic)?;

    for bound in 0..=max_depth {
        graph.reset_search_state();
        let h_start = from_estimate::<C>(estimate.update(graph, start)?);
        let vertex = graph.vertex_mut(start)?;
        vertex.current_cost = VertexCost::Known(h_start);
        vertex.label = Label::Visited;
        if start == target {
            return Ok(true);
        }
        if bound == 0 {
            continue;
        }

        trace!(bound, "deepening");
        if let Some(path) = bounded_search(graph, &estimate, start, target, bound)? {
            record_path(graph, &path)?;
            debug!(%start, %target, bound, "ida* reached target");
            return Ok(true);
        }
    }
    debug!(%start, %target, max_depth, "ida* found no path within the depth limit");
    Ok(false)
}

/// Explores every path of at most `bound` edges from `start` that is not
/// dominated by an earlier one, and returns the cheapest path to `target`.
fn bounded_search<C, D, H>(
    graph: &mut Graph<C, D>,
    estimate: &TargetEstimate<'_, H>,
    start: VertexId,
    target: VertexId,
    bound: u32,
) -> Result<Option<Vec<Step>>>
where
    C: Cost,
    D: Directedness,
    H: Heuristic + ?Sized,
{
    // Remaining depth and path cost of every expansion of a vertex.
    let mut expansions: HashMap<VertexId, Vec<(u32, C)>> = HashMap::new();
    let mut best: Option<(C, Vec<Step>)> = None;

    let children = expand(graph, estimate, &mut expansions, start, C::zero(), bound)?;
    let mut stack = vec![Frame {
        step: None,
        remaining: bound,
        children,
    }];
    while let Some(frame) = stack.last_mut() {
        let Some(child) = frame.children.pop() else {
            stack.pop();
            continue;
        };
        let remaining = frame.remaining - 1;
        let (_, v) = child.step;

        if v == target {
            if best.as_ref().is_none_or(|(cost, _)| child.cost < *cost) {
                trace!(cost = ?child.cost, depth = stack.len(), "reached target");
                let path = stack
                    .iter()
                    .filter_map(|frame| frame.step)
                    .chain([child.step])
                    .collect();
                best = Some((child.cost, path));
            }
            continue;
        }
        if remaining == 0 || is_dominated(&expansions, v, remaining, child.cost) {
            continue;
        }

        let children = expand(graph, estimate, &mut expansions, v, child.cost, remaining)?;
        stack.push(Frame {
            step: Some(child.step),
            remaining,
            children,
        });
    }
    Ok(best.map(|(_, path)| path))
}

fn is_dominated<C: Cost>(
    expansions: &HashMap<VertexId, Vec<(u32, C)>>,
    vertex: VertexId,
    remaining: u32,
    cost: C,
) -> bool {
    expansions.get(&vertex).is_some_and(|seen| {
        seen.iter()
            .any(|&(seen_remaining, seen_cost)| seen_remaining >= remaining && seen_cost <= cost)
    })
}

/// Records the expansion of `u`, scores its neighbors and returns them as
/// children ordered for popping.
fn expand<C, D, H>(
    graph: &mut Graph<C, D>,
    estimate: &TargetEstimate<'_, H>,
    expansions: &mut HashMap<VertexId, Vec<(u32, C)>>,
    u: VertexId,
    cost: C,
    remaining: u32,
) -> Result<Vec<Child<C>>>
where
    C: Cost,
    D: Directedness,
    H: Heuristic + ?Sized,
{
    expansions.entry(u).or_default().push((remaining, cost));
    graph.vertex_mut(u)?.label = Label::Visited;

    let mut children = Vec::new();
    for (edge, v) in graph.adjacent(u)? {
        let h_v = from_estimate::<C>(estimate.update(graph, v)?);
        let cost_v = cost + graph.edge(edge)?.cost();
        let score = cost_v + h_v;
        let vertex = graph.vertex_mut(v)?;
        if vertex.current_cost.is_improved_by(score) {
            vertex.current_cost = VertexCost::Known(score);
            vertex.predecessor = Some(edge);
        }
        if vertex.label == Label::Unvisited {
            vertex.label = Label::Processing;
        }
        children.push(Child {
            score,
            cost: cost_v,
            step: (edge, v),
        });
    }
    children.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.step.1.cmp(&a.step.1))
    });
    Ok(children)
}

/// Points the predecessors along `path` at the path's edges and gives its
/// vertices the f-scores of the path.
fn record_path<C: Cost, D: Directedness>(graph: &mut Graph<C, D>, path: &[Step]) -> Result<()> {
    let mut cost = C::zero();
    for &(edge, v) in path {
        cost = cost + graph.edge(edge)?.cost();
        let vertex = graph.vertex_mut(v)?;
        vertex.current_cost = VertexCost::Known(cost + from_estimate(vertex.heuristic_cost));
        vertex.predecessor = Some(edge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        directedness::{Directed, Undirected},
        heuristics::Distance,
        test_support::{clrs_graph, graph_from_edges, v},
    };

    #[test]
    fn test_ida_star_worked_example() {
        for heuristic in [Distance::Euclidean, Distance::Manhattan, Distance::Hamming] {
            let mut graph = clrs_graph::<f64>();
            assert!(ida_star(&mut graph, v(4), v(0), 10, &heuristic).unwrap());
            let cost = graph.current_cost(v(0)).unwrap().known().unwrap();
            assert!((cost - 21.0).abs() < 1e-9, "{heuristic:?}: {cost}");
            let path = graph.path_to(v(0)).unwrap();
            assert_eq!(path.vertices(), &[v(4), v(5), v(6), v(7), v(0)]);
        }
    }

    #[test]
    fn test_ida_star_integer_costs() {
        let mut graph = clrs_graph::<u32>();
        assert!(ida_star(&mut graph, v(4), v(0), 10, &Distance::Manhattan).unwrap());
        assert_eq!(graph.current_cost(v(0)).unwrap(), VertexCost::Known(21));
    }

    #[test]
    fn test_ida_star_depth_limit() {
        // Vertex 0 is four edges away from vertex 4.
        let mut graph = clrs_graph::<f64>();
        assert!(!ida_star(&mut graph, v(4), v(0), 3, &Distance::Euclidean).unwrap());
        assert!(ida_star(&mut graph, v(4), v(0), 4, &Distance::Euclidean).unwrap());
    }

    #[test]
    fn test_ida_star_prefers_fewer_edges() {
        // The cheap route needs three edges; the first bound that reaches the
        // target only allows the direct one.
        let mut graph =
            graph_from_edges::<Undirected>(4, &[(0, 1, 10), (0, 2, 1), (2, 3, 1), (3, 1, 1)]);
        let zero = |_: &[f64], _: &[f64]| 0.0_f64;
        assert!(ida_star(&mut graph, v(0), v(1), 5, &zero).unwrap());
        assert_eq!(graph.current_cost(v(1)).unwrap(), VertexCost::Known(10));
        assert_eq!(graph.path_to(v(1)).unwrap().len(), 1);
    }

    #[test]
    fn test_ida_star_start_is_target() {
        let mut graph = clrs_graph::<f64>();
        assert!(ida_star(&mut graph, v(3), v(3), 0, &Distance::Euclidean).unwrap());
        assert_eq!(graph.current_cost(v(3)).unwrap(), VertexCost::Known(0.0));
    }

    #[test]
    fn test_ida_star_unreachable() {
        let mut graph = graph_from_edges::<Directed>(3, &[(0, 1, 1), (1, 0, 1), (2, 1, 1)]);
        assert!(!ida_star(&mut graph, v(0), v(2), 5, &Distance::Euclidean).unwrap());
        assert_eq!(graph.predecessor(v(2)).unwrap(), None);
    }
}
