use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue used by the shortest-path loop.
///
/// Entries are `(priority, vertex)` pairs ordered by smallest priority first;
/// equal priorities fall back to the smaller vertex id. The queue never
/// removes or re-keys entries in place: the algorithm pushes a fresh entry
/// on every improvement and discards stale ones when they surface (lazy
/// deletion), so duplicates for the same vertex are expected.
#[derive(Debug)]
pub struct MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the queue holds no entries
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, counting stale duplicates
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an entry for `vertex` keyed by `priority`
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
