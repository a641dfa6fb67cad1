pub use crate::cost::{Cost, VertexCost};
pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::edge::Edge;
pub use crate::error::{GraphError, Result};
pub use crate::graph::{DirectedGraph, Graph, UndirectedGraph};
pub use crate::heuristics::{Distance, Heuristic};
pub use crate::id::{EdgeId, VertexId};
pub use crate::path::Path;
pub use crate::search::{
    a_star, bfs, dfs, dijkstra, greedy_best_first, ida_star, iddfs, prim, ucs,
};
pub use crate::vertex::{Label, Vertex};
