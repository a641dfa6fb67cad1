pub mod cost;
pub mod directedness;
pub mod edge;
pub mod error;
#[doc(hidden)]
pub mod generate_large_graph;
pub mod graph;
pub mod heuristics;
pub mod id;
pub mod path;
pub mod prelude;
pub mod relax;
#[doc(hidden)]
pub mod sample_graph;
pub mod search;
pub mod tracing_support;
pub mod vertex;

mod frontier;
mod test_support;
mod util;

pub use error::{GraphError, Result};
pub use graph::{DirectedGraph, Graph, UndirectedGraph};
