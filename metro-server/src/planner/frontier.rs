//! Priority frontier with decrease-key by lazy deletion.
//!
//! `BinaryHeap` cannot remove arbitrary entries, so re-prioritising a state
//! pushes a fresh entry and records its sequence number as the live one.
//! Older entries for the same state become stale and are skipped on pop.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::domain::SearchState;

/// A heap entry. Ordered so the max-heap yields the lowest priority first,
/// then the earliest insertion.
#[derive(Debug)]
struct Entry {
    priority: f64,
    seq: u64,
    state: SearchState,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority queue over search states.
///
/// Equal priorities pop in insertion order, so searches over identical
/// input always expand states in the same order.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    /// Sequence number of the one valid entry per queued state.
    live: HashMap<SearchState, u64>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a state, replacing any entry it already has.
    pub fn put(&mut self, state: SearchState, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.live.insert(state.clone(), seq);
        self.heap.push(Entry {
            priority,
            seq,
            state,
        });
    }

    /// Remove and return the state with the lowest priority.
    ///
    /// Returns `None` once no valid entries remain.
    pub fn pop(&mut self) -> Option<SearchState> {
        while let Some(entry) = self.heap.pop() {
            if self.live.get(&entry.state) == Some(&entry.seq) {
                self.live.remove(&entry.state);
                return Some(entry.state);
            }
        }
        None
    }

    /// Whether the state currently has a queued entry.
    pub fn contains(&self, state: &SearchState) -> bool {
        self.live.contains_key(state)
    }

    /// Number of valid entries.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns true if no valid entries remain.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
