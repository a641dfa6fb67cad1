use std::collections::BTreeMap;

use derivative::Derivative;

use crate::{
    cost::{Cost, VertexCost},
    directedness::{Directed, Directedness, Undirected},
    edge::Edge,
    error::{GraphError, Result},
    id::{EdgeId, VertexId},
    vertex::{Label, Vertex},
};

/// A graph that exclusively owns its vertices and edges.
///
/// Vertices and edges are kept in id-keyed maps and iterated in ascending
/// id order.  In an undirected graph an edge is listed in the adjacency
/// lists of both of its ends (once, for a self loop); in a directed graph
/// only the source vertex lists it.
///
/// Search algorithms in [`crate::search`] write their results into the
/// per-vertex search state, which can be read back through [`Vertex`] or the
/// accessors on this type.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "C: Clone"),
    Debug(bound = "C: std::fmt::Debug"),
    Default(bound = "")
)]
pub struct Graph<C, D: Directedness = Undirected> {
    vertices: BTreeMap<VertexId, Vertex<C>>,
    edges: BTreeMap<EdgeId, Edge<C>>,
    next_vertex_id: usize,
    next_edge_id: usize,
    directedness: D,
}

/// A graph whose edges lead from their source to their target only.
pub type DirectedGraph<C> = Graph<C, Directed>;

/// A graph whose edges can be traversed in both directions.
pub type UndirectedGraph<C> = Graph<C, Undirected>;

impl<C: Cost, D: Directedness> Graph<C, D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the graph is directed.
    pub fn is_directed(&self) -> bool {
        D::is_directed()
    }

    pub fn directedness(&self) -> D {
        self.directedness
    }

    /// Adds `vertex` under its own id.  If a vertex with that id already
    /// exists it is overwritten: the new vertex takes over the incident
    /// edges of the old one and the old vertex is returned.
    ///
    /// Ids may be sparse and arbitrarily large.  Once `usize::MAX` is in use
    /// [`Graph::add_vertex_at`] has no fresh id left and reuses it.
    pub fn add_vertex(&mut self, mut vertex: Vertex<C>) -> Option<Vertex<C>> {
        let id = vertex.id();
        vertex.reset_search_state();
        vertex.adjacency.clear();
        self.next_vertex_id = self.next_vertex_id.max(id.0.saturating_add(1));
        match self.vertices.get_mut(&id) {
            Some(old) => {
                vertex.adjacency = std::mem::take(&mut old.adjacency);
                Some(std::mem::replace(old, vertex))
            }
            None => {
                self.vertices.insert(id, vertex);
                None
            }
        }
    }

    /// Adds a vertex at the given coordinates under a fresh id, one past the
    /// largest id this graph has seen.
    pub fn add_vertex_at(&mut self, coordinates: &[f64]) -> VertexId {
        let id = VertexId(self.next_vertex_id);
        self.add_vertex(Vertex::new(id, coordinates));
        id
    }

    /// Adds an edge between two existing vertices and returns its id.
    /// Parallel edges are allowed.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        cost: C,
    ) -> Result<EdgeId> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let id = EdgeId(self.next_edge_id);
        self.next_edge_id += 1;
        self.edges.insert(id, Edge::new(id, source, target, cost));

        self.vertex_mut(source)?.adjacency.push(id);
        if !self.is_directed() && source != target {
            self.vertex_mut(target)?.adjacency.push(id);
        }
        Ok(id)
    }

    /// Removes a vertex along with every edge that touches it, including
    /// edges into it from other vertices in a directed graph.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex<C>> {
        self.check_vertex(id)?;
        let incident: Vec<EdgeId> = self
            .edges
            .values()
            .filter(|edge| edge.touches(id))
            .map(Edge::id)
            .collect();
        for edge_id in incident {
            self.remove_edge(edge_id)?;
        }
        self.vertices
            .remove(&id)
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Removes an edge, detaching it from its ends' adjacency lists and
    /// clearing every predecessor reference to it.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge<C>> {
        let edge = self.edges.remove(&id).ok_or(GraphError::EdgeNotFound(id))?;
        for end in [edge.source(), edge.target()] {
            if let Some(vertex) = self.vertices.get_mut(&end) {
                vertex.adjacency.retain(|&eid| eid != id);
            }
        }
        for vertex in self.vertices.values_mut() {
            if vertex.predecessor == Some(id) {
                vertex.predecessor = None;
            }
        }
        Ok(edge)
    }

    pub fn set_edge_cost(&mut self, id: EdgeId, cost: C) -> Result<()> {
        self.edges
            .get_mut(&id)
            .ok_or(GraphError::EdgeNotFound(id))?
            .set_cost(cost);
        Ok(())
    }

    /// Removes every vertex and edge.  Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex<C>> {
        self.vertices.get(&id).ok_or(GraphError::VertexNotFound(id))
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex<C>> {
        self.vertices
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound(id))
    }

    pub fn edge(&self, id: EdgeId) -> Result<&Edge<C>> {
        self.edges.get(&id).ok_or(GraphError::EdgeNotFound(id))
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<C>> {
        self.vertices.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<C>> {
        self.edges.values()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.keys().copied()
    }

    /// Returns the largest vertex id in the graph.
    pub fn max_vertex_id(&self) -> Option<VertexId> {
        self.vertices.keys().next_back().copied()
    }

    /// Gets the edges incident to `id` in adjacency order, each paired with
    /// the vertex at its other end.
    pub fn neighbors(
        &self,
        id: VertexId,
    ) -> Result<impl Iterator<Item = (EdgeId, VertexId)> + '_> {
        let vertex = self.vertex(id)?;
        Ok(vertex.adjacency.iter().filter_map(move |eid| {
            self.edges
                .get(eid)
                .and_then(|edge| edge.other_end(id))
                .map(|other| (*eid, other))
        }))
    }

    /// Collects the neighbors of `id` so that the caller may mutate the
    /// graph while walking them.
    pub(crate) fn adjacent(&self, id: VertexId) -> Result<Vec<(EdgeId, VertexId)>> {
        Ok(self.neighbors(id)?.collect())
    }

    /// Finds the first edge leading from `source` to `target`.
    pub fn find_edge(&self, source: VertexId, target: VertexId) -> Option<EdgeId> {
        let vertex = self.vertices.get(&source)?;
        vertex.adjacency.iter().copied().find(|eid| {
            self.edges
                .get(eid)
                .is_some_and(|edge| edge.connects(source, target, self.is_directed()))
        })
    }

    pub fn current_cost(&self, id: VertexId) -> Result<VertexCost<C>> {
        Ok(self.vertex(id)?.current_cost())
    }

    pub fn heuristic_cost(&self, id: VertexId) -> Result<f64> {
        Ok(self.vertex(id)?.heuristic_cost())
    }

    pub fn label(&self, id: VertexId) -> Result<Label> {
        Ok(self.vertex(id)?.label())
    }

    pub fn predecessor(&self, id: VertexId) -> Result<Option<EdgeId>> {
        Ok(self.vertex(id)?.predecessor())
    }

    /// The cost of the predecessor edge of `id`, if it has one.
    pub fn predecessor_cost(&self, id: VertexId) -> Result<Option<C>> {
        match self.predecessor(id)? {
            Some(edge_id) => Ok(Some(self.edge(edge_id)?.cost())),
            None => Ok(None),
        }
    }

    pub fn arrival_time(&self, id: VertexId) -> Result<Option<u32>> {
        Ok(self.vertex(id)?.arrival_time())
    }

    pub fn departure_time(&self, id: VertexId) -> Result<Option<u32>> {
        Ok(self.vertex(id)?.departure_time())
    }

    /// Clears the search state of every vertex.
    pub fn reset_search_state(&mut self) {
        self.vertices
            .values_mut()
            .for_each(Vertex::reset_search_state);
    }

    pub(crate) fn vertices_mut(&mut self) -> impl Iterator<Item = &mut Vertex<C>> {
        self.vertices.values_mut()
    }

    pub(crate) fn check_vertex(&self, id: VertexId) -> Result<()> {
        if self.vertices.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(id))
        }
    }
}
