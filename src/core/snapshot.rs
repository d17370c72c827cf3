//! Serializable full-board snapshot
//!
//! Carries enough structured data for a presentation layer to redraw the
//! whole scene from scratch without re-deriving any logic: every live tile
//! with its symbol and state, plus zone placement and layer grids by id.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::types::{GamePhase, TileId, TileState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub id: TileId,
    pub symbol: char,
    pub state: TileState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSnapshot {
    pub width: usize,
    /// Row-major cells; `null` is a hole.
    pub cells: Vec<Vec<Option<TileId>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub phase: GamePhase,
    pub seed: u32,
    pub tiles: Vec<TileSnapshot>,
    pub left_stack: Vec<TileId>,
    pub right_stack: Vec<TileId>,
    pub layers: Vec<LayerSnapshot>,
    pub returned: Vec<TileId>,
    pub collector: Vec<TileId>,
}

impl BoardSnapshot {
    pub fn capture(board: &Board, collector: &[TileId], phase: GamePhase, seed: u32) -> Self {
        let tiles = board
            .live_ids()
            .map(|id| {
                let tile = board.tile(id);
                TileSnapshot {
                    id,
                    symbol: tile.symbol,
                    state: tile.state,
                }
            })
            .collect();

        let layers = board
            .layers
            .iter()
            .map(|layer| LayerSnapshot {
                width: layer.width,
                cells: layer.rows.clone(),
            })
            .collect();

        Self {
            phase,
            seed,
            tiles,
            left_stack: board.left_stack.clone(),
            right_stack: board.right_stack.clone(),
            layers,
            returned: board.returned.clone(),
            collector: collector.to_vec(),
        }
    }

    /// Live tiles not in the collector (what a wash would redistribute).
    pub fn uncollected(&self) -> usize {
        self.tiles.len() - self.collector.len()
    }
}
