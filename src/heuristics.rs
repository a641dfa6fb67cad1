//! Distance estimates between vertex coordinates.
//!
//! Every function compares coordinates pairwise and ignores the trailing
//! coordinates of the longer slice.

/// Straight-line distance.
pub fn euclidean(from: &[f64], to: &[f64]) -> f64 {
    minkowski(from, to, 2.0)
}

/// Sum of the absolute coordinate differences.
pub fn manhattan(from: &[f64], to: &[f64]) -> f64 {
    from.iter().zip(to).map(|(a, b)| (a - b).abs()).sum()
}

/// The `p`-norm of the coordinate differences.  `p == 1` is the Manhattan
/// distance and `p == 2` the Euclidean one.
pub fn minkowski(from: &[f64], to: &[f64], p: f64) -> f64 {
    from.iter()
        .zip(to)
        .map(|(a, b)| (a - b).abs().powf(p))
        .sum::<f64>()
        .powf(p.recip())
}

/// Number of positions at which the coordinates differ.
pub fn hamming(from: &[f64], to: &[f64]) -> f64 {
    from.iter().zip(to).filter(|(a, b)| a != b).count() as f64
}

/// Estimates the remaining cost between two points.
///
/// The estimate must be admissible (never larger than the true cheapest
/// path cost) for [`a_star`](crate::search::a_star) to return optimal
/// costs.  Nothing checks this.
pub trait Heuristic {
    fn estimate(&self, from: &[f64], to: &[f64]) -> f64;
}

/// The built-in distance functions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Distance {
    #[default]
    Euclidean,
    Manhattan,
    Minkowski(f64),
    Hamming,
}

impl Heuristic for Distance {
    fn estimate(&self, from: &[f64], to: &[f64]) -> f64 {
        match *self {
            Distance::Euclidean => euclidean(from, to),
            Distance::Manhattan => manhattan(from, to),
            Distance::Minkowski(p) => minkowski(from, to, p),
            Distance::Hamming => hamming(from, to),
        }
    }
}

impl<F> Heuristic for F
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    fn estimate(&self, from: &[f64], to: &[f64]) -> f64 {
        self(from, to)
    }
}
