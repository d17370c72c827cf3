//! Outbound engine events
//!
//! Line-delimited-JSON-friendly tagged enum: everything the presentation
//! layer needs to animate a state change without inferring logic. Consumed
//! via `GameState::take_events`.

use serde::{Deserialize, Serialize};

use crate::core::snapshot::BoardSnapshot;
use crate::types::TileId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// A tile's last blocker left the board; it is now tappable.
    TileUnlocked { id: TileId },
    /// A tile moved into the collector at `slot`.
    TileCollected { id: TileId, slot: usize },
    /// A catalog word was completed; `removed` tiles are destroyed and the
    /// survivors sit at contiguous slots in `remaining` order.
    GroupMatched {
        dish: String,
        removed: Vec<TileId>,
        remaining: Vec<TileId>,
    },
    /// Collector filled with no match: terminal loss.
    CollectorLost,
    /// The board was rebuilt (wash or return); redraw from the snapshot.
    BoardRebuilt { board: Box<BoardSnapshot> },
}
