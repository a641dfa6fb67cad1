use crate::id::{EdgeId, VertexId};

/// Errors reported by graph lookups, mutations and searches.
///
/// Violated algorithm preconditions (negative edge costs, inadmissible
/// heuristics) are not errors: they are the caller's responsibility and
/// silently produce meaningless costs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// No vertex with this id exists in the graph.
    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),
    /// No edge with this id exists in the graph.
    #[error("edge {0} not found")]
    EdgeNotFound(EdgeId),
    /// A predecessor edge does not touch the vertex that refers to it.
    #[error("predecessor edge {edge} of vertex {vertex} does not touch it")]
    BrokenPredecessorChain { vertex: VertexId, edge: EdgeId },
    /// Following predecessor edges from this vertex never reaches a root.
    #[error("predecessor chain from vertex {0} contains a cycle")]
    PredecessorCycle(VertexId),
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
