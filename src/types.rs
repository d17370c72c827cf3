//! Core types shared across the engine
//!
//! Pure data types and tuning constants. The only dependency is serde, so the
//! presentation layer can consume snapshots and events without linking the engine.

use serde::{Deserialize, Serialize};

/// Fixed dish catalog, in match-priority order (the first dish whose full
/// character set is covered by the collector wins).
///
/// Invariant relied on by matching: no dish repeats a character.
pub const DISH_CATALOG: [&str; 6] = ["荔枝", "酥鳝", "蒸虾头", "圣金饼", "香精煎鱼", "人参公鸡"];

/// How many copies of each dish's characters go into the starting pool.
pub const DISH_REPEATS: usize = 20;

/// Tiles dealt to each side stack before the pyramid is layered.
pub const SIDE_STACK_LEN: usize = 20;

/// Collector capacity. Filling the last slot without a match is the loss condition.
pub const COLLECTOR_CAPACITY: usize = 7;

/// Settle delay between a collect and its match check (milliseconds).
///
/// The engine never sleeps: `tap_tile` arms a [`CheckToken`] and the host is
/// expected to call `run_match_check` with it after this long.
pub const MATCH_SETTLE_MS: u32 = 600;

/// A leftover pyramid chunk of exactly this many symbols is padded into a
/// 5-wide grid with two full rows of holes.
pub const PADDED_CHUNK_LEN: usize = 15;

/// Width of a pyramid layer by layer index. Even layers are 5 wide, odd
/// layers 6 wide; the half-tile stagger between them drives the blocking
/// adjacency pattern.
pub fn layer_width(layer: usize) -> usize {
    if layer % 2 == 0 {
        5
    } else {
        6
    }
}

/// Stable tile identifier: an index into the board's tile arena.
///
/// Assigned once at generation and preserved across washes; a destroyed
/// (matched-out) tile's id is never reused within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Lifecycle state of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TileState {
    /// At least one blocking tile is still on the board.
    Locked,
    /// No outstanding blockers; may be tapped.
    Available,
    /// Sitting in the collector, not yet matched out.
    Collected,
}

impl TileState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileState::Locked => "locked",
            TileState::Available => "available",
            TileState::Collected => "collected",
        }
    }
}

/// Game phase machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    /// Board dealt but non-interactive (behind the start modal).
    Intro,
    /// Tiles selectable per the dependency graph.
    Playing,
    /// Non-interactive overlay; no board mutation allowed.
    MenuOpen,
    /// Terminal: collector filled with no match.
    Lost,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Intro => "intro",
            GamePhase::Playing => "playing",
            GamePhase::MenuOpen => "menuOpen",
            GamePhase::Lost => "lost",
        }
    }
}

/// Discrete player actions dispatched one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Start,
    Tap(TileId),
    Shuffle,
    ReturnCollected,
    OpenMenu,
    CloseMenu,
}

/// Token for a scheduled deferred match check.
///
/// Every collect arms a fresh token; a wash, return, or loss invalidates the
/// armed one, so a check that fires late against a rebuilt board is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckToken(pub u64);

/// Rule parameters for a game. Production play uses the defaults; tests build
/// reduced boards with custom catalogs and pool splits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    /// Target words, in match-priority order.
    pub catalog: Vec<String>,
    /// Tiles dealt to each side stack (the rest form the pyramid).
    pub side_stack_len: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            catalog: DISH_CATALOG.iter().map(|s| s.to_string()).collect(),
            side_stack_len: SIDE_STACK_LEN,
        }
    }
}
