//! Frontier disciplines: FIFO ([`VecDeque`]), LIFO ([`Vec`]) and a priority
//! queue with insertion-order tie breaking.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::traits::Frontier;

impl<T> Frontier<T> for VecDeque<T> {
    #[inline]
    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Frontier<T> for Vec<T> {
    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Heap entry ordered by `(key, seq)` only; the payload never takes part in
/// comparisons.
struct Entry<T> {
    key: i32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (key, seq) first.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue. Entries with equal keys pop in insertion order.
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    counter: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            counter: 0,
        }
    }

    /// Insert `item` with priority `key` (smaller pops first).
    pub fn push(&mut self, key: i32, item: T) {
        self.counter += 1;
        self.heap.push(Entry {
            key,
            seq: self.counter,
            item,
        });
    }

    /// Remove the entry with the smallest key, oldest first among equals.
    pub fn pop(&mut self) -> Option<(i32, T)> {
        self.heap.pop().map(|e| (e.key, e.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
