mod dial;
mod heap;

pub use dial::DialQueue;
pub use dial::MAX_BUCKET_SPAN;
pub use dial::Slot;
pub use heap::HeapQueue;

use crate::weight::Weight;

/// Priority queue driving one relaxation engine.
///
/// - `push` either inserts `vertex` or lowers its priority.
/// - `peek_min` / `pop_min` return `None` only when the queue is empty.
/// - Queues with `STALE_ENTRIES = true` keep superseded entries around; the
///   engine must discard popped entries whose priority exceeds the vertex's
///   recorded distance.
pub trait FrontierQueue<W: Weight> {
    const STALE_ENTRIES: bool;

    fn is_empty(&self) -> bool;
    fn push(&mut self, priority: W, vertex: usize);
    fn peek_min(&mut self) -> Option<(W, usize)>;
    fn pop_min(&mut self) -> Option<(W, usize)>;
}

impl<L> FrontierQueue<u64> for DialQueue<L>
where
    L: AsRef<[Option<Slot>]> + AsMut<[Option<Slot>]>,
{
    const STALE_ENTRIES: bool = false;

    #[inline]
    fn is_empty(&self) -> bool {
        DialQueue::<L>::is_empty(self)
    }

    #[inline]
    fn push(&mut self, priority: u64, vertex: usize) {
        self.insert_or_update(priority, vertex);
    }

    #[inline]
    fn peek_min(&mut self) -> Option<(u64, usize)> {
        DialQueue::<L>::peek_min(self)
    }

    #[inline]
    fn pop_min(&mut self) -> Option<(u64, usize)> {
        self.extract_min()
    }
}

impl<W: Weight> FrontierQueue<W> for HeapQueue<W> {
    const STALE_ENTRIES: bool = true;

    #[inline]
    fn is_empty(&self) -> bool {
        HeapQueue::<W>::is_empty(self)
    }

    #[inline]
    fn push(&mut self, priority: W, vertex: usize) {
        HeapQueue::<W>::push(self, priority, vertex);
    }

    #[inline]
    fn peek_min(&mut self) -> Option<(W, usize)> {
        self.peek()
    }

    #[inline]
    fn pop_min(&mut self) -> Option<(W, usize)> {
        self.pop()
    }
}
