//! Board module - tile arena and zone layout
//!
//! Owns every live tile in an id-indexed arena and partitions them into three
//! zones: two linear side stacks and the layered pyramid, plus the transient
//! returned pool. Collected tiles belong to no zone (they live in the
//! collector); destroyed tiles leave the arena for good.
//!
//! Blocking edges are stored on the tiles themselves as the mutually inverse
//! `blocked_by`/`blocks` lists. The graph is acyclic by construction: edges
//! only ever point from a tile to tiles in the layer above it (or the next
//! link of a side chain).

use crate::types::{TileId, TileState};

/// Atomic playable unit. Every tile always carries a symbol and both edge
/// lists; there are no optional variants.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub symbol: char,
    pub state: TileState,
    /// Ids that must leave the board before this tile becomes selectable.
    pub blocked_by: Vec<TileId>,
    /// Inverse relation: ids whose `blocked_by` lists contain this tile.
    pub blocks: Vec<TileId>,
}

/// One horizontal slice of the pyramid. Row-major grid of cells; `None` is a
/// hole that occupies a coordinate but carries no tile. Rows may be ragged
/// when a wash leaves a partial final chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub width: usize,
    pub rows: Vec<Vec<Option<TileId>>>,
}

impl Layer {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    /// Tile at (row, col), if the coordinate exists and is not a hole.
    /// Signed coordinates so callers can probe staggered neighbors directly.
    pub fn get(&self, row: isize, col: isize) -> Option<TileId> {
        if row < 0 || col < 0 {
            return None;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .flatten()
    }

    /// Ids of all tiles in this layer, row-major.
    pub fn tile_ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.rows.iter().flatten().filter_map(|cell| *cell)
    }
}

/// Ownership container for all live tiles and their zone placement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// Arena indexed by `TileId`; `None` marks a destroyed (matched-out) tile.
    tiles: Vec<Option<Tile>>,
    /// Linear chain; the last index is the selectable end.
    pub left_stack: Vec<TileId>,
    /// Mirrored linear chain.
    pub right_stack: Vec<TileId>,
    /// Pyramid layers, bottom (index 0) to top.
    pub layers: Vec<Layer>,
    /// Tiles handed back from the collector. Blocker-free and tappable;
    /// folded into the pyramid pool by the next wash.
    pub returned: Vec<TileId>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new tile for `symbol` and return its id.
    pub fn alloc(&mut self, symbol: char) -> TileId {
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push(Some(Tile {
            symbol,
            state: TileState::Locked,
            blocked_by: Vec::new(),
            blocks: Vec::new(),
        }));
        id
    }

    /// Borrow a live tile. Panics if the id was destroyed: callers only hold
    /// ids of live tiles, so a dead id is a caller bug.
    pub fn tile(&self, id: TileId) -> &Tile {
        self.tiles[id.index()]
            .as_ref()
            .unwrap_or_else(|| panic!("tile {:?} was destroyed", id))
    }

    pub fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        self.tiles[id.index()]
            .as_mut()
            .unwrap_or_else(|| panic!("tile {:?} was destroyed", id))
    }

    pub fn is_live(&self, id: TileId) -> bool {
        self.tiles
            .get(id.index())
            .map_or(false, |slot| slot.is_some())
    }

    /// Permanently remove a matched-out tile from the arena.
    pub fn destroy(&mut self, id: TileId) {
        let slot = &mut self.tiles[id.index()];
        assert!(slot.is_some(), "tile {:?} destroyed twice", id);
        *slot = None;
    }

    /// Ids of every live tile, in allocation order.
    pub fn live_ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| TileId(i as u32))
    }

    pub fn live_count(&self) -> usize {
        self.tiles.iter().filter(|slot| slot.is_some()).count()
    }

    /// Live tiles not currently held by the collector.
    pub fn uncollected_count(&self) -> usize {
        self.tiles
            .iter()
            .flatten()
            .filter(|t| t.state != TileState::Collected)
            .count()
    }

    /// Ids of all pyramid tiles, bottom layer first, row-major.
    pub fn pyramid_ids(&self) -> Vec<TileId> {
        self.layers.iter().flat_map(|l| l.tile_ids()).collect()
    }

    /// Record `blocker` as sitting on top of `blocked`, maintaining both
    /// directions of the relation.
    pub fn add_edge(&mut self, blocker: TileId, blocked: TileId) {
        self.tile_mut(blocked).blocked_by.push(blocker);
        self.tile_mut(blocker).blocks.push(blocked);
    }

    /// Drop all structural edges from a live tile (wash rebuilds them).
    pub fn clear_edges(&mut self, id: TileId) {
        let tile = self.tile_mut(id);
        tile.blocked_by.clear();
        tile.blocks.clear();
    }

    /// Remove a tile from whichever zone currently holds it, on its way into
    /// the collector. Side stacks only ever release their selectable end.
    pub fn detach(&mut self, id: TileId) {
        if self.left_stack.last() == Some(&id) {
            self.left_stack.pop();
            return;
        }
        if self.right_stack.last() == Some(&id) {
            self.right_stack.pop();
            return;
        }
        if let Some(pos) = self.returned.iter().position(|&r| r == id) {
            self.returned.remove(pos);
            return;
        }
        for layer in &mut self.layers {
            for row in &mut layer.rows {
                for cell in row.iter_mut() {
                    if *cell == Some(id) {
                        *cell = None;
                        return;
                    }
                }
            }
        }
        panic!("tile {:?} not found in any zone", id);
    }

    /// Set every non-collected tile's state from its current blocker list.
    pub fn refresh_states(&mut self) {
        for slot in self.tiles.iter_mut().flatten() {
            if slot.state == TileState::Collected {
                continue;
            }
            slot.state = if slot.blocked_by.is_empty() {
                TileState::Available
            } else {
                TileState::Locked
            };
        }
    }
}
