//! Dependency operations - selectability and unlock propagation
//!
//! The blocking relation itself lives on the tiles (see `board`); this module
//! is the behavioral surface over it. `release` is the only place a tile ever
//! transitions `Locked -> Available`.

use crate::core::board::Board;
use crate::types::{TileId, TileState};

impl Board {
    /// True iff the tile is live, has no outstanding blockers, and is not
    /// already sitting in the collector.
    pub fn is_selectable(&self, id: TileId) -> bool {
        if !self.is_live(id) {
            return false;
        }
        let tile = self.tile(id);
        tile.state != TileState::Collected && tile.blocked_by.is_empty()
    }

    /// Propagate the collection of `id`: every tile it was blocking drops the
    /// edge, and any that run out of blockers flip to `Available`. Returns the
    /// freshly unlocked ids, each exactly once.
    ///
    /// Contract: only an unblocked tile may be released. The engine never
    /// collects a locked tile, so a violation here is a caller bug.
    pub fn release(&mut self, id: TileId) -> Vec<TileId> {
        assert!(
            self.tile(id).blocked_by.is_empty(),
            "release called on a blocked tile {:?}",
            id
        );

        let downstream = self.tile(id).blocks.clone();
        let mut unlocked = Vec::new();

        for below in downstream {
            let tile = self.tile_mut(below);
            tile.blocked_by.retain(|&b| b != id);
            if tile.blocked_by.is_empty() && tile.state == TileState::Locked {
                tile.state = TileState::Available;
                unlocked.push(below);
            }
        }

        // The collected tile no longer blocks anything; dropping its edge
        // list keeps the inverse relation exact.
        self.tile_mut(id).blocks.clear();
        unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Board;

    /// Two blockers over one tile: a.blocked_by = [b, c]
    fn diamond() -> (Board, TileId, TileId, TileId) {
        let mut board = Board::new();
        let a = board.alloc('荔');
        let b = board.alloc('枝');
        let c = board.alloc('鸡');
        board.add_edge(b, a);
        board.add_edge(c, a);
        board.refresh_states();
        (board, a, b, c)
    }

    #[test]
    fn test_selectable_requires_empty_blockers() {
        let (board, a, b, _c) = diamond();
        assert!(!board.is_selectable(a));
        assert!(board.is_selectable(b));
    }

    #[test]
    fn test_release_unlocks_exactly_once() {
        let (mut board, a, b, c) = diamond();

        assert!(board.release(b).is_empty());
        assert!(!board.is_selectable(a));

        let unlocked = board.release(c);
        assert_eq!(unlocked, vec![a]);
        assert!(board.is_selectable(a));
        assert_eq!(board.tile(a).state, TileState::Available);
    }

    #[test]
    fn test_release_order_does_not_matter() {
        let (mut board, a, b, c) = diamond();
        assert!(board.release(c).is_empty());
        assert_eq!(board.release(b), vec![a]);
    }

    #[test]
    #[should_panic(expected = "release called on a blocked tile")]
    fn test_release_blocked_tile_panics() {
        let (mut board, a, _b, _c) = diamond();
        board.release(a);
    }

    #[test]
    fn test_collected_tile_is_not_selectable() {
        let mut board = Board::new();
        let a = board.alloc('虾');
        board.refresh_states();
        assert!(board.is_selectable(a));
        board.tile_mut(a).state = TileState::Collected;
        assert!(!board.is_selectable(a));
    }

    #[test]
    fn test_destroyed_tile_is_not_selectable() {
        let mut board = Board::new();
        let a = board.alloc('头');
        board.destroy(a);
        assert!(!board.is_selectable(a));
    }
}
