//! Core module - pure puzzle logic with no I/O dependencies
//!
//! Everything the host application needs: board generation, the blocking
//! graph, the collector/match engine, the wash, and the phase machine that
//! ties them together.

pub mod board;
pub mod collector;
pub mod dependency;
pub mod events;
pub mod game_state;
pub mod generator;
pub mod recycle;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use board::{Board, Layer, Tile};
pub use collector::{Collector, MatchHit};
pub use events::GameEvent;
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snapshot::BoardSnapshot;
