//! dish-tiles: puzzle-logic engine for a dish-tile matching pyramid solitaire
//!
//! Players tap selectable tiles into a seven-slot collector; completing all
//! characters of a catalog dish clears those tiles, overfilling the collector
//! loses. The board is a pyramid of staggered layers plus two side chains,
//! with a tile selectable only once nothing rests on it.
//!
//! This crate is the logic core only: deterministic, single-threaded, and
//! event-driven. Rendering, animation, audio, and dialogs are host concerns
//! that consume [`core::GameEvent`]s and feed back player actions.

pub mod core;
pub mod types;
