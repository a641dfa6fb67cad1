use std::{collections::HashSet, iter::once};

use crate::{
    cost::Cost,
    directedness::Directedness,
    error::{GraphError, Result},
    graph::Graph,
    id::{EdgeId, VertexId},
};

/// A path in a graph, represented as a sequence of vertices and the edges
/// that connect them.  A path always holds at least one vertex; a path of
/// length zero is a single vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
}

impl Path {
    /// Creates a new path starting at the given vertex.
    pub fn new(start: VertexId) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
        }
    }

    /// Returns the first vertex in the path.
    pub fn first(&self) -> VertexId {
        self.vertices[0]
    }

    /// Returns the last vertex in the path.
    pub fn last(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// The number of edges in the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the path consists of its start vertex only.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the vertices of the path along with the edges connecting
    /// them, as `(incoming_edge, vertex, outgoing_edge)`.  The edges are
    /// `Some` except for the first vertex (no incoming edge) and the last
    /// vertex (no outgoing edge).
    pub fn steps(&self) -> impl Iterator<Item = (Option<EdgeId>, VertexId, Option<EdgeId>)> + '_ {
        let incoming = once(None).chain(self.edges.iter().copied().map(Some));
        let outgoing = self.edges.iter().copied().map(Some).chain(once(None));
        incoming
            .zip(self.vertices.iter().copied())
            .zip(outgoing)
            .map(|((in_edge, vertex), out_edge)| (in_edge, vertex, out_edge))
    }

    /// Sums the costs of the edges of the path.
    pub fn total_cost<C: Cost, D: Directedness>(&self, graph: &Graph<C, D>) -> Result<C> {
        self.edges.iter().try_fold(C::zero(), |total, &edge_id| {
            Ok(total + graph.edge(edge_id)?.cost())
        })
    }

    fn push(&mut self, edge: EdgeId, vertex: VertexId) {
        self.edges.push(edge);
        self.vertices.push(vertex);
    }

    fn reverse(&mut self) {
        self.vertices.reverse();
        self.edges.reverse();
    }
}

impl<C: Cost, D: Directedness> Graph<C, D> {
    /// Follows predecessor edges back from `target` to a vertex without a
    /// predecessor and returns the path from that vertex to `target`.
    ///
    /// The predecessors are the ones left behind by the most recent search.
    /// A vertex the search never reached yields a path of length zero.
    pub fn path_to(&self, target: VertexId) -> Result<Path> {
        let mut path = Path::new(target);
        let mut seen = HashSet::from([target]);
        let mut current = target;
        while let Some(edge_id) = self.predecessor(current)? {
            let edge = self.edge(edge_id)?;
            let previous = match edge.other_end(current) {
                Some(previous) if !self.is_directed() || edge.target() == current => previous,
                _ => {
                    return Err(GraphError::BrokenPredecessorChain {
                        vertex: current,
                        edge: edge_id,
                    });
                }
            };
            if !seen.insert(previous) {
                return Err(GraphError::PredecessorCycle(previous));
            }
            path.push(edge_id, previous);
            current = previous;
        }
        path.reverse();
        Ok(path)
    }

    /// Like [`Graph::path_to`], but returns `None` unless the walk back from
    /// `target` ends at `source`.
    pub fn path_between(&self, source: VertexId, target: VertexId) -> Result<Option<Path>> {
        self.check_vertex(source)?;
        let path = self.path_to(target)?;
        Ok((path.first() == source).then_some(path))
    }
}
