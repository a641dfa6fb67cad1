use crate::{
    cost::{Cost, VertexCost},
    id::{EdgeId, VertexId},
};

/// Traversal status of a vertex during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Label {
    #[default]
    Unvisited,
    /// Discovered and waiting in a frontier.
    Processing,
    /// Expanded; for cost-ordered searches the cost is final.
    Visited,
}

/// A vertex: an id, a point in n-dimensional space, its incident edges and
/// the scratch state left behind by the most recent search.
///
/// The search-state fields are only meaningful for the algorithm that last
/// ran on the owning graph.  Every algorithm resets the fields it uses
/// before it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<C> {
    id: VertexId,
    coordinates: Vec<f64>,
    pub(crate) current_cost: VertexCost<C>,
    pub(crate) heuristic_cost: f64,
    pub(crate) label: Label,
    pub(crate) arrival_time: Option<u32>,
    pub(crate) departure_time: Option<u32>,
    pub(crate) predecessor: Option<EdgeId>,
    pub(crate) adjacency: Vec<EdgeId>,
}

impl<C: Cost> Vertex<C> {
    pub fn new(id: VertexId, coordinates: &[f64]) -> Self {
        Self {
            id,
            coordinates: coordinates.to_vec(),
            current_cost: VertexCost::Unknown,
            heuristic_cost: 0.0,
            label: Label::Unvisited,
            arrival_time: None,
            departure_time: None,
            predecessor: None,
            adjacency: Vec::new(),
        }
    }

    /// A vertex without coordinates, for graphs that are never searched
    /// with a heuristic.
    pub fn without_coordinates(id: VertexId) -> Self {
        Self::new(id, &[])
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    pub fn set_coordinates(&mut self, coordinates: &[f64]) {
        self.coordinates = coordinates.to_vec();
    }

    pub fn current_cost(&self) -> VertexCost<C> {
        self.current_cost
    }

    pub fn heuristic_cost(&self) -> f64 {
        self.heuristic_cost
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn arrival_time(&self) -> Option<u32> {
        self.arrival_time
    }

    pub fn departure_time(&self) -> Option<u32> {
        self.departure_time
    }

    /// The edge through which the last search reached this vertex.
    pub fn predecessor(&self) -> Option<EdgeId> {
        self.predecessor
    }

    /// Incident edges in insertion order.  In a directed graph only the
    /// edges leaving this vertex are listed.
    pub fn adjacency(&self) -> &[EdgeId] {
        &self.adjacency
    }

    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    pub fn reset_search_state(&mut self) {
        self.current_cost = VertexCost::Unknown;
        self.heuristic_cost = 0.0;
        self.label = Label::Unvisited;
        self.arrival_time = None;
        self.departure_time = None;
        self.predecessor = None;
    }
}
