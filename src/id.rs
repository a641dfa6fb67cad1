use std::fmt::{self, Display};

/// Identifies a vertex within one [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// Identifies an edge within one [`Graph`](crate::graph::Graph).  Edge ids
/// are assigned by the graph and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(value: usize) -> Self {
        VertexId(value)
    }
}

impl From<usize> for EdgeId {
    fn from(value: usize) -> Self {
        EdgeId(value)
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
