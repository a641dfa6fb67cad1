//! Numeric cost types and the "possibly unknown" cost stored on vertices.

use std::{cmp::Ordering, fmt::Debug, ops::Sub};

use pathfinding::num_traits::{NumCast, One, Zero};

/// A numeric type usable as an edge or path cost.
///
/// Implemented for every primitive integer and float type.  Costs must be
/// non-negative for the cost-ordered searches to produce meaningful results;
/// this is not checked.
pub trait Cost: Copy + Debug + PartialOrd + Zero + One + Sub<Output = Self> + NumCast {}

impl<T> Cost for T where T: Copy + Debug + PartialOrd + Zero + One + Sub<Output = T> + NumCast {}

/// Converts a heuristic estimate into the cost domain.  Integer costs
/// truncate.  NaN, infinite and negative estimates become zero, as do
/// estimates that overflow `C`.
pub fn from_estimate<C: Cost>(estimate: f64) -> C {
    if !estimate.is_finite() || estimate < 0.0 {
        return C::zero();
    }
    <C as NumCast>::from(estimate).unwrap_or_else(C::zero)
}

/// The best known cost of reaching a vertex.  `Unknown` plays the role of
/// "infinity" and compares greater than every `Known` cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexCost<C> {
    Unknown,
    Known(C),
}

impl<C> Default for VertexCost<C> {
    fn default() -> Self {
        VertexCost::Unknown
    }
}

impl<C: Cost> VertexCost<C> {
    pub fn known(self) -> Option<C> {
        match self {
            VertexCost::Unknown => None,
            VertexCost::Known(cost) => Some(cost),
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, VertexCost::Known(_))
    }

    /// Returns true if `candidate` is strictly cheaper than this cost.
    pub fn is_improved_by(self, candidate: C) -> bool {
        match self {
            VertexCost::Unknown => true,
            VertexCost::Known(current) => candidate < current,
        }
    }
}

impl<C> From<C> for VertexCost<C> {
    fn from(cost: C) -> Self {
        VertexCost::Known(cost)
    }
}

impl<C: PartialOrd> PartialOrd for VertexCost<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (VertexCost::Unknown, VertexCost::Unknown) => Some(Ordering::Equal),
            (VertexCost::Unknown, VertexCost::Known(_)) => Some(Ordering::Greater),
            (VertexCost::Known(_), VertexCost::Unknown) => Some(Ordering::Less),
            (VertexCost::Known(a), VertexCost::Known(b)) => a.partial_cmp(b),
        }
    }
}
