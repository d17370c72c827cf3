//! Game state module - phase machine and action dispatch
//!
//! Single owner of the mutable board/collector pair. Player actions arrive
//! one at a time and resolve fully before the next; the only temporal
//! indirection is the deferred match check, which is modeled as an armed
//! token the host fires after the settle delay (and which goes stale if the
//! board is rebuilt or the game is lost first).

use crate::core::board::Board;
use crate::core::collector::Collector;
use crate::core::events::GameEvent;
use crate::core::generator::{self, dish_pool};
use crate::core::recycle;
use crate::core::rng::SimpleRng;
use crate::core::snapshot::BoardSnapshot;
use crate::types::{CheckToken, GamePhase, GameRules, PlayerAction, TileId, TileState};

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    collector: Collector,
    rules: GameRules,
    rng: SimpleRng,
    phase: GamePhase,
    /// The one armed deferred match check, if any. Re-collecting re-arms
    /// with a fresh token; wash/return/loss disarm.
    pending_check: Option<CheckToken>,
    next_token: u64,
    /// Accumulated outbound events, drained by `take_events`.
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a full production game: shuffled dish pool, default rules.
    pub fn new(seed: u32) -> Self {
        Self::with_rules(seed, GameRules::default(), dish_pool())
    }

    /// Create a game over a custom pool and rules (reduced boards in tests).
    pub fn with_rules(seed: u32, rules: GameRules, pool: Vec<char>) -> Self {
        let mut rng = SimpleRng::new(seed);
        let shuffled = rng.permuted(&pool);
        let board = generator::generate(&shuffled, &rules);

        Self {
            board,
            collector: Collector::new(),
            rules,
            rng,
            phase: GamePhase::Intro,
            pending_check: None,
            next_token: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn collector_slots(&self) -> &[TileId] {
        self.collector.slots()
    }

    pub fn pending_check(&self) -> Option<CheckToken> {
        self.pending_check
    }

    /// Drain the accumulated outbound events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(
            &self.board,
            self.collector.slots(),
            self.phase,
            self.rng.seed(),
        )
    }

    /// Dispatch a discrete player action.
    pub fn apply_action(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::Start => self.start(),
            PlayerAction::Tap(id) => self.tap_tile(id),
            PlayerAction::Shuffle => self.request_shuffle(),
            PlayerAction::ReturnCollected => self.return_collected(),
            PlayerAction::OpenMenu => self.open_menu(),
            PlayerAction::CloseMenu => self.close_menu(),
        }
    }

    pub fn start(&mut self) {
        if self.phase == GamePhase::Intro {
            self.phase = GamePhase::Playing;
        }
    }

    pub fn open_menu(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::MenuOpen;
        }
    }

    pub fn close_menu(&mut self) {
        if self.phase == GamePhase::MenuOpen {
            self.phase = GamePhase::Playing;
        }
    }

    /// Attempt to collect a tile. Silent no-op when the game is not playing,
    /// the tile is not selectable, or the collector already holds its last
    /// slot (expected no-ops, not errors).
    pub fn tap_tile(&mut self, id: TileId) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if !self.board.is_selectable(id) {
            return;
        }
        if self.collector.is_full() {
            return;
        }
        self.collect(id);
    }

    fn collect(&mut self, id: TileId) {
        self.board.detach(id);
        self.board.tile_mut(id).state = TileState::Collected;

        for unlocked in self.board.release(id) {
            self.events.push(GameEvent::TileUnlocked { id: unlocked });
        }

        let slot = self.collector.push(id);
        self.events.push(GameEvent::TileCollected { id, slot });

        self.pending_check = Some(self.arm_token());
    }

    fn arm_token(&mut self) -> CheckToken {
        self.next_token += 1;
        CheckToken(self.next_token)
    }

    /// Run the deferred match check for `token`. Stale tokens (superseded by
    /// a later collect, a wash, a return, or a loss) are ignored without
    /// touching any state. The check itself resolves even while the menu
    /// overlay is up; only player input is gated by the menu.
    pub fn run_match_check(&mut self, token: CheckToken) {
        if self.phase != GamePhase::Playing && self.phase != GamePhase::MenuOpen {
            return;
        }
        if self.pending_check != Some(token) {
            return;
        }
        self.pending_check = None;

        if let Some(hit) = self.collector.find_match(&self.board, &self.rules.catalog) {
            let removed = self.collector.remove_slots(&hit.slots);
            for &id in &removed {
                self.board.destroy(id);
            }
            self.events.push(GameEvent::GroupMatched {
                dish: self.rules.catalog[hit.dish_index].clone(),
                removed,
                remaining: self.collector.slots().to_vec(),
            });
        } else if self.collector.is_full() {
            self.phase = GamePhase::Lost;
            self.events.push(GameEvent::CollectorLost);
        }
    }

    /// Wash: rebuild the board from everything still on it. Zero net change
    /// to the tile count; any armed match check goes stale.
    pub fn request_shuffle(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.pending_check = None;
        recycle::wash(&mut self.board, &mut self.rng);
        self.emit_rebuilt();
    }

    /// Hand every collected tile back to the board's returned pool (in a
    /// fresh shuffled row order) and clear the collector.
    pub fn return_collected(&mut self) {
        if self.phase != GamePhase::Playing || self.collector.is_empty() {
            return;
        }
        self.pending_check = None;

        let ids = self.collector.drain_all();
        for id in self.rng.permuted(&ids) {
            let tile = self.board.tile_mut(id);
            debug_assert!(tile.blocked_by.is_empty());
            tile.state = TileState::Available;
            self.board.returned.push(id);
        }
        self.emit_rebuilt();
    }

    fn emit_rebuilt(&mut self) {
        let snapshot = self.snapshot();
        self.events.push(GameEvent::BoardRebuilt {
            board: Box::new(snapshot),
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
