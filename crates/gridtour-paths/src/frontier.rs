//! Priority frontier shared by the best-first searches.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridtour_core::Coord;

use crate::config::TieBreak;

/// A discovered node awaiting expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierNode {
    pub(crate) coord: Coord,
    /// Ordering key: cost-so-far plus heuristic for A*, heuristic alone
    /// for greedy search.
    pub(crate) priority: i32,
    pub(crate) cost: i32,
    /// Insertion sequence number, the secondary key.
    seq: u64,
    lifo: bool,
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        let by_priority = other.priority.cmp(&self.priority);
        let by_seq = if self.lifo {
            self.seq.cmp(&other.seq)
        } else {
            other.seq.cmp(&self.seq)
        };
        by_priority.then(by_seq)
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of [`FrontierNode`]s with a deterministic tie-break.
///
/// Equal priorities pop in insertion order ([`TieBreak::Fifo`]) or reverse
/// insertion order ([`TieBreak::Lifo`]).
#[derive(Debug)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierNode>,
    next_seq: u64,
    lifo: bool,
}

impl Frontier {
    pub(crate) fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            lifo: tie_break == TieBreak::Lifo,
        }
    }

    pub(crate) fn push(&mut self, coord: Coord, priority: i32, cost: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierNode {
            coord,
            priority,
            cost,
            seq,
            lifo: self.lifo,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierNode> {
        self.heap.pop()
    }
}
