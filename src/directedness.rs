use std::fmt::Debug;

/// Marker type representing directed graph edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker type representing undirected graph edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

/// Trait defining the directedness behavior of graph edges.
///
/// This trait is implemented by [`Directed`] and [`Undirected`] marker types
/// to fix at compile time whether an edge is listed only by its source
/// vertex or by both of its ends.
pub trait Directedness: Copy + Debug + Default {
    fn is_directed() -> bool;
}

impl Directedness for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl Directedness for Undirected {
    fn is_directed() -> bool {
        false
    }
}
