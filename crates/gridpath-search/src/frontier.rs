//! The A* open list.
//!
//! Holds at most one live entry per grid cell and pops the entry with the
//! smallest total cost, breaking ties by insertion order (first inserted
//! wins). Replacing a cell's entry counts as a fresh insertion, which is
//! exactly what re-sorting a list with a stable sort after every change would
//! produce.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::NodeId;

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `(total, seq)` first.
#[derive(Clone, Copy, Eq, PartialEq)]
struct FrontierRef {
    total: i32,
    seq: u64,
    cell: usize,
}

impl Ord for FrontierRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .total
            .cmp(&self.total)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The live entry for one cell.
#[derive(Clone, Copy, Debug)]
struct Slot {
    node: NodeId,
    total: i32,
    seq: u64,
}

/// What [`Frontier::insert`] did with a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// The cell had no live entry.
    Inserted,
    /// The cell's entry was worse and has been replaced.
    Replaced,
    /// The cell's entry is at least as good; the candidate was dropped.
    Rejected,
}

/// Open list over the cells of one grid, addressed by flat cell index.
pub struct Frontier {
    heap: BinaryHeap<FrontierRef>,
    slots: Vec<Option<Slot>>,
    live: usize,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier for a grid of `cells` cells.
    pub fn new(cells: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            slots: vec![None; cells],
            live: 0,
            next_seq: 0,
        }
    }

    /// Number of live entries (stale heap entries are not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Whether `cell` has a live entry.
    #[inline]
    pub fn contains(&self, cell: usize) -> bool {
        self.slots[cell].is_some()
    }

    /// The node currently queued for `cell`, if any.
    #[inline]
    pub fn get(&self, cell: usize) -> Option<NodeId> {
        self.slots[cell].map(|s| s.node)
    }

    /// Whether a candidate with priority `total` would be accepted for
    /// `cell`: the cell is absent, or its entry is strictly worse.
    #[inline]
    pub fn admits(&self, cell: usize, total: i32) -> bool {
        match self.slots[cell] {
            Some(s) => total < s.total,
            None => true,
        }
    }

    /// Queue `node` for `cell` unless the cell already holds an entry whose
    /// total is `<= total`.
    pub fn insert(&mut self, cell: usize, node: NodeId, total: i32) -> Offer {
        let offer = match self.slots[cell] {
            Some(s) if s.total <= total => return Offer::Rejected,
            Some(_) => Offer::Replaced,
            None => {
                self.live += 1;
                Offer::Inserted
            }
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots[cell] = Some(Slot { node, total, seq });
        self.heap.push(FrontierRef { total, seq, cell });
        offer
    }

    /// Remove and return the best entry as `(cell, node)`.
    pub fn pop(&mut self) -> Option<(usize, NodeId)> {
        while let Some(top) = self.heap.pop() {
            // Skip entries superseded by a later replacement.
            match self.slots[top.cell] {
                Some(s) if s.seq == top.seq => {
                    self.slots[top.cell] = None;
                    self.live -= 1;
                    return Some((top.cell, s.node));
                }
                _ => continue,
            }
        }
        None
    }
}
