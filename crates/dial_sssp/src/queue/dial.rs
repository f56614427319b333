/// Largest `max_edge_weight` the Dial variants accept; one bucket is allocated
/// per possible offset from the current minimum.
pub const MAX_BUCKET_SPAN: u64 = 1 << 24;

/// Position of a live entry: bucket index and index inside that bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Slot {
    bucket: u32,
    index: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Entry {
    Live(u32),
    Tombstone,
}

/// Dial's bucket queue for integer priorities with a bounded span.
///
/// Buckets form a ring of `max_edge_weight + 1` stacks. Bucket `i` holds
/// priority `true_value + ((i - head) mod num_buckets)`, so every priority
/// pushed must lie in `[true_value, true_value + max_edge_weight]`. Dijkstra
/// guarantees this: a new tentative distance is the current minimum plus one
/// edge weight.
///
/// Lowering a vertex's priority tombstones its old entry in place; tombstones
/// are dropped when `peek_min` reaches them. The location table (`L`) maps each
/// vertex to its live slot and can be owned by the queue (`DialQueue::new`) or
/// lent by the caller (`DialQueue::with_locations`).
#[derive(Clone, Debug)]
pub struct DialQueue<L = Vec<Option<Slot>>> {
    buckets: Vec<Vec<Entry>>,
    locations: L,
    head: usize,
    true_value: u64,
    len: usize,
}

impl DialQueue {
    pub fn new(max_edge_weight: u64, vertex_count: usize) -> Self {
        Self::with_locations(max_edge_weight, vec![None; vertex_count])
    }
}

impl<L> DialQueue<L>
where
    L: AsRef<[Option<Slot>]> + AsMut<[Option<Slot>]>,
{
    /// Builds a queue over a caller-provided location table, one slot per
    /// vertex. The table is cleared first.
    pub fn with_locations(max_edge_weight: u64, mut locations: L) -> Self {
        assert!(
            max_edge_weight <= MAX_BUCKET_SPAN,
            "max edge weight {max_edge_weight} exceeds bucket span limit {MAX_BUCKET_SPAN}"
        );
        locations.as_mut().fill(None);
        let num_buckets = max_edge_weight as usize + 1;
        Self {
            buckets: vec![Vec::new(); num_buckets],
            locations,
            head: 0,
            true_value: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current priority of `vertex`, if it has a live entry.
    pub fn priority_of(&self, vertex: usize) -> Option<u64> {
        let slot = self.locations.as_ref()[vertex]?;
        let span = self.buckets.len();
        let offset = (slot.bucket as usize + span - self.head) % span;
        Some(self.true_value + offset as u64)
    }

    /// Inserts `vertex` at `priority`, tombstoning any live entry it already has.
    ///
    /// # Panics
    ///
    /// If `priority` falls outside `[min, min + max_edge_weight]`, where `min`
    /// is the priority last reported by `peek_min`.
    pub fn insert_or_update(&mut self, priority: u64, vertex: usize) {
        let span = self.buckets.len();
        let offset = priority
            .checked_sub(self.true_value)
            .filter(|&offset| offset < span as u64);
        let Some(offset) = offset else {
            panic!(
                "priority {priority} outside bucket span [{}, {})",
                self.true_value,
                self.true_value + span as u64
            );
        };

        self.invalidate(vertex);

        let mut bucket = self.head + offset as usize;
        if bucket >= span {
            bucket -= span;
        }
        let index = self.buckets[bucket].len();
        self.buckets[bucket].push(Entry::Live(vertex as u32));
        self.locations.as_mut()[vertex] = Some(Slot {
            bucket: bucket as u32,
            index: index as u32,
        });
        self.len += 1;
    }

    /// Tombstones the live entry of `vertex`. Returns `false` (and changes
    /// nothing) when the vertex has none.
    pub fn invalidate(&mut self, vertex: usize) -> bool {
        let Some(slot) = self.locations.as_mut()[vertex].take() else {
            return false;
        };
        let entry = &mut self.buckets[slot.bucket as usize][slot.index as usize];
        debug_assert_eq!(*entry, Entry::Live(vertex as u32), "stale location table");
        *entry = Entry::Tombstone;
        self.len -= 1;
        true
    }

    /// Smallest live `(priority, vertex)`, advancing the ring to it.
    pub fn peek_min(&mut self) -> Option<(u64, usize)> {
        if self.len == 0 {
            return None;
        }

        let span = self.buckets.len();
        loop {
            let bucket = &mut self.buckets[self.head];
            match bucket.last() {
                Some(&Entry::Live(v)) => return Some((self.true_value, v as usize)),
                Some(Entry::Tombstone) => {
                    bucket.pop();
                }
                None => {
                    self.head += 1;
                    if self.head == span {
                        self.head = 0;
                    }
                    self.true_value += 1;
                }
            }
        }
    }

    /// Removes and returns the smallest live entry.
    pub fn extract_min(&mut self) -> Option<(u64, usize)> {
        let (priority, vertex) = self.peek_min()?;
        self.buckets[self.head].pop();
        self.locations.as_mut()[vertex] = None;
        self.len -= 1;
        Some((priority, vertex))
    }

    pub fn into_locations(self) -> L {
        self.locations
    }
}
