use crate::{
    id::{EdgeId, VertexId},
    util::{OtherValue, other_value},
};

/// The two vertices joined by an edge, in the order they were given to
/// [`Graph::add_edge`](crate::graph::Graph::add_edge).  The order matters
/// only in directed graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeEnds {
    source: VertexId,
    target: VertexId,
}

impl EdgeEnds {
    pub fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn values(&self) -> (VertexId, VertexId) {
        (self.source, self.target)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns true if this edge leads from `a` to `b`; when `directed` is
    /// false the order of `a` and `b` is ignored.
    pub fn has_both(&self, a: VertexId, b: VertexId, directed: bool) -> bool {
        (self.source == a && self.target == b)
            || (!directed && self.source == b && self.target == a)
    }

    pub fn other_value(&self, value: VertexId) -> Option<OtherValue<VertexId>> {
        other_value(self.values(), value)
    }
}

/// A weighted link between two vertices.  Edges are owned by the graph;
/// vertices refer to them by [`EdgeId`].
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<C> {
    id: EdgeId,
    ends: EdgeEnds,
    cost: C,
}

impl<C: Copy> Edge<C> {
    pub(crate) fn new(id: EdgeId, source: VertexId, target: VertexId, cost: C) -> Self {
        Self {
            id,
            ends: EdgeEnds::new(source, target),
            cost,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn ends(&self) -> EdgeEnds {
        self.ends
    }

    pub fn source(&self) -> VertexId {
        self.ends.source()
    }

    pub fn target(&self) -> VertexId {
        self.ends.target()
    }

    pub fn cost(&self) -> C {
        self.cost
    }

    pub(crate) fn set_cost(&mut self, cost: C) {
        self.cost = cost;
    }

    /// Returns the end of this edge opposite `vertex`, `vertex` itself for a
    /// self loop, or `None` if `vertex` is not an end of this edge.
    pub fn other_end(&self, vertex: VertexId) -> Option<VertexId> {
        self.ends.other_value(vertex).map(OtherValue::into_inner)
    }

    /// Returns true if this edge leads from `a` to `b`, in either direction
    /// unless `directed` is set.
    pub fn connects(&self, a: VertexId, b: VertexId, directed: bool) -> bool {
        self.ends.has_both(a, b, directed)
    }

    pub fn touches(&self, vertex: VertexId) -> bool {
        self.source() == vertex || self.target() == vertex
    }
}
