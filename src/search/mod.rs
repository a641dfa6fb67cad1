//! Traversal, shortest-path and spanning-tree searches.
//!
//! Every search takes the graph mutably, resets the per-vertex search state
//! it depends on, and leaves its results on the vertices, where they can be
//! read back through [`Vertex`](crate::vertex::Vertex) or the accessors of
//! [`Graph`].  Predecessor edges can be turned into a path with
//! [`Graph::path_to`].
//!
//! All searches check their source and target ids up front and return
//! [`GraphError::VertexNotFound`](crate::error::GraphError::VertexNotFound)
//! for an unknown id.  The cost-ordered searches assume non-negative edge
//! costs and the heuristic ones an admissible heuristic; neither is
//! checked.

mod a_star;
mod bfs;
mod dfs;
mod dijkstra;
mod greedy;
mod ida_star;
mod iddfs;
mod prim;
mod ucs;

pub use a_star::a_star;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use greedy::greedy_best_first;
pub use ida_star::ida_star;
pub use iddfs::iddfs;
pub use prim::prim;
pub use ucs::ucs;

use crate::{
    cost::Cost, directedness::Directedness, error::Result, graph::Graph, heuristics::Heuristic,
    id::VertexId,
};

/// A heuristic bound to the coordinates of one target vertex.
struct TargetEstimate<'h, H: ?Sized> {
    heuristic: &'h H,
    target: Vec<f64>,
}

impl<'h, H: Heuristic + ?Sized> TargetEstimate<'h, H> {
    fn new<C: Cost, D: Directedness>(
        graph: &Graph<C, D>,
        target: VertexId,
        heuristic: &'h H,
    ) -> Result<Self> {
        Ok(Self {
            heuristic,
            target: graph.vertex(target)?.coordinates().to_vec(),
        })
    }

    /// Computes the estimate for `vertex` and stores it as its heuristic
    /// cost.
    fn update<C: Cost, D: Directedness>(
        &self,
        graph: &mut Graph<C, D>,
        vertex: VertexId,
    ) -> Result<f64> {
        let vertex = graph.vertex_mut(vertex)?;
        let estimate = self.heuristic.estimate(vertex.coordinates(), &self.target);
        vertex.heuristic_cost = estimate;
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{
        cost::VertexCost,
        directedness::{Directed, Undirected},
        heuristics::Distance,
        test_support::{ArbGraph, v},
    };

    fn costs<D: Directedness>(graph: &Graph<u32, D>) -> Vec<Option<u32>> {
        graph
            .vertices()
            .map(|vertex| vertex.current_cost().known())
            .collect()
    }

    fn successors<D: Directedness>(graph: &Graph<u32, D>, id: VertexId) -> Vec<(VertexId, u32)> {
        graph
            .neighbors(id)
            .unwrap()
            .map(|(edge, other)| (other, graph.edge(edge).unwrap().cost()))
            .collect()
    }

    fn dijkstra_oracle<D: Directedness>(graph: &Graph<u32, D>, source: VertexId) -> Vec<Option<u32>> {
        let reached = pathfinding::directed::dijkstra::dijkstra_all(&source, |&id| {
            successors(graph, id)
        });
        graph
            .vertex_ids()
            .map(|id| {
                if id == source {
                    Some(0)
                } else {
                    reached.get(&id).map(|&(_, cost)| cost)
                }
            })
            .collect()
    }

    fn hops_oracle<D: Directedness>(graph: &Graph<u32, D>, source: VertexId) -> Vec<Option<u32>> {
        graph
            .vertex_ids()
            .map(|target| {
                pathfinding::directed::bfs::bfs(
                    &source,
                    |&id| successors(graph, id).into_iter().map(|(other, _)| other),
                    |&id| id == target,
                )
                .map(|path| (path.len() - 1) as u32)
            })
            .collect()
    }

    fn pick_vertex<D: Directedness>(graph: &Graph<u32, D>, index: usize) -> Option<VertexId> {
        let ids: Vec<_> = graph.vertex_ids().collect();
        (!ids.is_empty()).then(|| ids[index % ids.len()])
    }

    #[quickcheck]
    fn prop_bfs_matches_oracle(ArbGraph(mut graph): ArbGraph<Directed>, index: usize) -> TestResult {
        let Some(source) = pick_vertex(&graph, index) else {
            return TestResult::discard();
        };
        let expected = hops_oracle(&graph, source);
        bfs(&mut graph, source).unwrap();
        TestResult::from_bool(costs(&graph) == expected)
    }

    #[quickcheck]
    fn prop_dijkstra_matches_oracle_directed(
        ArbGraph(mut graph): ArbGraph<Directed>,
        index: usize,
    ) -> TestResult {
        let Some(source) = pick_vertex(&graph, index) else {
            return TestResult::discard();
        };
        let expected = dijkstra_oracle(&graph, source);
        dijkstra(&mut graph, source).unwrap();
        TestResult::from_bool(costs(&graph) == expected)
    }

    #[quickcheck]
    fn prop_dijkstra_matches_oracle_undirected(
        ArbGraph(mut graph): ArbGraph<Undirected>,
        index: usize,
    ) -> TestResult {
        let Some(source) = pick_vertex(&graph, index) else {
            return TestResult::discard();
        };
        let expected = dijkstra_oracle(&graph, source);
        dijkstra(&mut graph, source).unwrap();
        TestResult::from_bool(costs(&graph) == expected)
    }

    #[quickcheck]
    fn prop_dijkstra_paths_add_up(ArbGraph(mut graph): ArbGraph<Undirected>, index: usize) -> TestResult {
        let Some(source) = pick_vertex(&graph, index) else {
            return TestResult::discard();
        };
        dijkstra(&mut graph, source).unwrap();
        let ids: Vec<_> = graph.vertex_ids().collect();
        TestResult::from_bool(ids.into_iter().all(|id| {
            match graph.current_cost(id).unwrap() {
                VertexCost::Known(cost) => {
                    let path = graph.path_to(id).unwrap();
                    path.first() == source && path.total_cost(&graph).unwrap() == cost
                }
                VertexCost::Unknown => graph.predecessor(id).unwrap().is_none(),
            }
        }))
    }

    #[quickcheck]
    fn prop_ucs_agrees_with_dijkstra(
        ArbGraph(mut graph): ArbGraph<Directed>,
        a: usize,
        b: usize,
    ) -> TestResult {
        let (Some(source), Some(target)) = (pick_vertex(&graph, a), pick_vertex(&graph, b)) else {
            return TestResult::discard();
        };
        let expected = dijkstra_oracle(&graph, source)[target.index()];
        let found = ucs(&mut graph, source, target).unwrap();
        TestResult::from_bool(
            found == expected.is_some() && graph.current_cost(target).unwrap().known() == expected,
        )
    }

    #[quickcheck]
    fn prop_a_star_with_zero_heuristic_is_optimal(
        ArbGraph(mut graph): ArbGraph<Undirected>,
        a: usize,
        b: usize,
    ) -> TestResult {
        let (Some(source), Some(target)) = (pick_vertex(&graph, a), pick_vertex(&graph, b)) else {
            return TestResult::discard();
        };
        let expected = dijkstra_oracle(&graph, source)[target.index()];
        let zero = |_: &[f64], _: &[f64]| 0.0_f64;
        let found = a_star(&mut graph, source, target, &zero).unwrap();
        TestResult::from_bool(
            found == expected.is_some() && graph.current_cost(target).unwrap().known() == expected,
        )
    }

    #[quickcheck]
    fn prop_greedy_reaches_reachable_targets(
        ArbGraph(mut graph): ArbGraph<Directed>,
        a: usize,
        b: usize,
    ) -> TestResult {
        let (Some(source), Some(target)) = (pick_vertex(&graph, a), pick_vertex(&graph, b)) else {
            return TestResult::discard();
        };
        let reachable = hops_oracle(&graph, source)[target.index()].is_some();
        let found = greedy_best_first(&mut graph, source, target, &Distance::Manhattan).unwrap();
        if found != reachable {
            return TestResult::failed();
        }
        if found {
            let path = graph.path_to(target).unwrap();
            return TestResult::from_bool(path.first() == source && path.last() == target);
        }
        TestResult::passed()
    }

    #[quickcheck]
    fn prop_iddfs_respects_depth_bound(
        ArbGraph(mut graph): ArbGraph<Directed>,
        a: usize,
        b: usize,
        depth: u8,
    ) -> TestResult {
        let (Some(start), Some(target)) = (pick_vertex(&graph, a), pick_vertex(&graph, b)) else {
            return TestResult::discard();
        };
        let max_depth = u32::from(depth % 6);
        let hops = hops_oracle(&graph, start)[target.index()];
        let found = iddfs(&mut graph, start, target, max_depth).unwrap();
        if found != hops.is_some_and(|hops| hops <= max_depth) {
            return TestResult::failed();
        }
        if found {
            let path = graph.path_to(target).unwrap();
            return TestResult::from_bool(
                path.first() == start && path.last() == target && path.len() as u32 <= max_depth,
            );
        }
        TestResult::passed()
    }

    #[quickcheck]
    fn prop_ida_star_cost_is_bounded(
        ArbGraph(mut graph): ArbGraph<Undirected>,
        a: usize,
        b: usize,
    ) -> TestResult {
        let (Some(start), Some(target)) = (pick_vertex(&graph, a), pick_vertex(&graph, b)) else {
            return TestResult::discard();
        };
        let shortest = dijkstra_oracle(&graph, start)[target.index()];
        let max_depth = graph.num_vertices() as u32;
        let zero = |_: &[f64], _: &[f64]| 0.0_f64;
        let found = ida_star(&mut graph, start, target, max_depth, &zero).unwrap();
        if found != shortest.is_some() {
            return TestResult::failed();
        }
        if !found || start == target {
            return TestResult::passed();
        }
        let cost = graph.current_cost(target).unwrap().known();
        let path = graph.path_to(target).unwrap();
        TestResult::from_bool(
            cost >= shortest
                && path.first() == start
                && Some(path.total_cost(&graph).unwrap()) == cost,
        )
    }

    #[quickcheck]
    fn prop_ida_star_respects_depth_bound(
        ArbGraph(mut graph): ArbGraph<Directed>,
        a: usize,
        b: usize,
        depth: u8,
    ) -> TestResult {
        let (Some(start), Some(target)) = (pick_vertex(&graph, a), pick_vertex(&graph, b)) else {
            return TestResult::discard();
        };
        let max_depth = u32::from(depth % 6);
        let hops = hops_oracle(&graph, start)[target.index()];
        let found = ida_star(&mut graph, start, target, max_depth, &Distance::Manhattan).unwrap();
        if found != hops.is_some_and(|hops| hops <= max_depth) {
            return TestResult::failed();
        }
        if found {
            let path = graph.path_to(target).unwrap();
            return TestResult::from_bool(
                path.first() == start && path.last() == target && path.len() as u32 <= max_depth,
            );
        }
        TestResult::passed()
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        use crate::error::GraphError;

        let mut graph = crate::test_support::graph_from_edges::<Undirected>(2, &[(0, 1, 1)]);
        let missing = GraphError::VertexNotFound(v(5));
        assert_eq!(bfs(&mut graph, v(5)), Err(missing.clone()));
        assert_eq!(dfs(&mut graph, v(5)), Err(missing.clone()));
        assert_eq!(dijkstra(&mut graph, v(5)), Err(missing.clone()));
        assert_eq!(prim(&mut graph, v(5)), Err(missing.clone()));
        assert_eq!(ucs(&mut graph, v(0), v(5)), Err(missing.clone()));
        assert_eq!(
            greedy_best_first(&mut graph, v(5), v(0), &Distance::Euclidean),
            Err(missing.clone())
        );
        assert_eq!(
            a_star(&mut graph, v(0), v(5), &Distance::Euclidean),
            Err(missing.clone())
        );
        assert_eq!(
            ida_star(&mut graph, v(0), v(5), 3, &Distance::Euclidean),
            Err(missing.clone())
        );
        assert_eq!(iddfs(&mut graph, v(5), v(0), 3), Err(missing));
    }
}
