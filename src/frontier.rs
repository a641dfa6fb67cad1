//! A min-priority queue of vertices.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::id::VertexId;

#[derive(Debug, Clone, Copy)]
struct Entry<P> {
    priority: P,
    vertex: VertexId,
}

impl<P: PartialOrd> PartialEq for Entry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: PartialOrd> Eq for Entry<P> {}

impl<P: PartialOrd> PartialOrd for Entry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: PartialOrd> Ord for Entry<P> {
    // Reversed so that `BinaryHeap` pops the smallest entry.  Incomparable
    // priorities (NaN) count as equal and fall through to the id.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Pops vertices in order of ascending priority, breaking ties on the
/// smaller vertex id.
///
/// A vertex may be pushed more than once; callers emulate decrease-key by
/// pushing again and skip the stale entries when they come out.
#[derive(Debug, Clone)]
pub(crate) struct Frontier<P> {
    heap: BinaryHeap<Entry<P>>,
}

impl<P: PartialOrd> Frontier<P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, vertex: VertexId, priority: P) {
        self.heap.push(Entry { priority, vertex });
    }

    pub fn pop(&mut self) -> Option<VertexId> {
        self.heap.pop().map(|entry| entry.vertex)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::v;

    #[test]
    fn test_pops_in_priority_order() {
        let mut frontier = Frontier::new();
        frontier.push(v(0), 5);
        frontier.push(v(1), 1);
        frontier.push(v(2), 3);
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some(v(1)));
        assert_eq!(frontier.pop(), Some(v(2)));
        assert_eq!(frontier.pop(), Some(v(0)));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_ties_break_on_smaller_id() {
        let mut frontier = Frontier::new();
        frontier.push(v(8), 2.0);
        frontier.push(v(2), 2.0);
        frontier.push(v(5), 2.0);
        assert_eq!(frontier.pop(), Some(v(2)));
        assert_eq!(frontier.pop(), Some(v(5)));
        assert_eq!(frontier.pop(), Some(v(8)));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut frontier = Frontier::new();
        frontier.push(v(3), 9u32);
        frontier.push(v(3), 4u32);
        assert_eq!(frontier.pop(), Some(v(3)));
        assert_eq!(frontier.pop(), Some(v(3)));
        assert!(frontier.is_empty());
    }
}
