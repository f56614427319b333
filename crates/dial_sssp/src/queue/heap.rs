use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::weight::Weight;

#[derive(Clone, Copy, Debug)]
struct HeapEntry<W> {
    priority: W,
    vertex: usize,
}

// Reversed so that `BinaryHeap` pops the smallest priority first.
impl<W: Weight> Ord for HeapEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<W: Weight> PartialOrd for HeapEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for HeapEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for HeapEntry<W> {}

/// Binary min-heap with lazy deletion: lowering a priority pushes a second
/// entry and leaves the old one in place.
#[derive(Clone, Debug)]
pub struct HeapQueue<W> {
    heap: BinaryHeap<HeapEntry<W>>,
}

impl<W: Weight> Default for HeapQueue<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> HeapQueue<W> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn push(&mut self, priority: W, vertex: usize) {
        self.heap.push(HeapEntry { priority, vertex });
    }

    #[inline]
    pub fn peek(&self) -> Option<(W, usize)> {
        self.heap.peek().map(|e| (e.priority, e.vertex))
    }

    #[inline]
    pub fn pop(&mut self) -> Option<(W, usize)> {
        self.heap.pop().map(|e| (e.priority, e.vertex))
    }
}

#[cfg(test)]
mod tests {
    use super::HeapQueue;

    #[test]
    fn pops_in_priority_order() {
        let mut q = HeapQueue::new();
        for (p, v) in [(3.5_f64, 0), (0.25, 1), (7.0, 2), (0.25, 3)] {
            q.push(p, v);
        }
        assert_eq!(q.len(), 4);
        assert_eq!(q.peek(), Some((0.25, 1)));

        let order: Vec<_> = std::iter::from_fn(|| q.pop()).collect();
        assert_eq!(order, vec![(0.25, 1), (0.25, 3), (3.5, 0), (7.0, 2)]);
        assert!(q.is_empty());
        assert_eq!(q.peek(), None);
    }

    #[test]
    fn keeps_superseded_entries() {
        let mut q = HeapQueue::new();
        q.push(10_u64, 4);
        q.push(6, 4);
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop(), Some((6, 4)));
        assert_eq!(q.pop(), Some((10, 4)));
    }
}
