//! Collector module - bounded pick buffer and catalog matching
//!
//! Ordered sequence of collected-but-unmatched tile ids, capacity fixed at 7.
//! Matching scans the catalog in priority order and records the first
//! collector slot carrying each required character; since no catalog word
//! repeats a character (see `types`), one slot per character is exact.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::types::{TileId, COLLECTOR_CAPACITY};

/// A detected match: which catalog entry fired and which slots it consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchHit {
    pub dish_index: usize,
    /// Collector slot indices, one per catalog character, unordered.
    pub slots: Vec<usize>,
}

/// Bounded ordered buffer of collected tiles.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    slots: ArrayVec<TileId, COLLECTOR_CAPACITY>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Full means the loss condition is due at the next match check.
    pub fn is_full(&self) -> bool {
        self.slots.len() == COLLECTOR_CAPACITY
    }

    pub fn slots(&self) -> &[TileId] {
        &self.slots
    }

    /// Append a tile; returns the slot it landed in.
    /// Panics if the collector is already full (the controller gates taps).
    pub fn push(&mut self, id: TileId) -> usize {
        let slot = self.slots.len();
        self.slots.push(id);
        slot
    }

    /// Empty the collector, preserving slot order (the return-to-board action).
    pub fn drain_all(&mut self) -> Vec<TileId> {
        let out = self.slots.to_vec();
        self.slots.clear();
        out
    }

    /// Scan the catalog in priority order; the first word whose every
    /// character appears among the collected symbols wins.
    pub fn find_match(&self, board: &Board, catalog: &[String]) -> Option<MatchHit> {
        for (dish_index, dish) in catalog.iter().enumerate() {
            let mut slots = Vec::new();
            let covered = dish.chars().all(|ch| {
                match self
                    .slots
                    .iter()
                    .position(|&id| board.tile(id).symbol == ch)
                {
                    Some(slot) => {
                        slots.push(slot);
                        true
                    }
                    None => false,
                }
            });
            if covered {
                return Some(MatchHit { dish_index, slots });
            }
        }
        None
    }

    /// Remove the given slots and compact the remainder to contiguous slots,
    /// preserving relative order. Returns the removed ids.
    pub fn remove_slots(&mut self, remove: &[usize]) -> Vec<TileId> {
        let removed: Vec<TileId> = remove.iter().map(|&s| self.slots[s]).collect();
        let kept: ArrayVec<TileId, COLLECTOR_CAPACITY> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(i, _)| !remove.contains(i))
            .map(|(_, &id)| id)
            .collect();
        self.slots = kept;
        removed
    }
}
