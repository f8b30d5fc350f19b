//! Othello rules engine: legal moves, flips, turn passing, scoring and a
//! greedy computer opponent. Rendering lives in the host; the engine only
//! returns [`GameEvent`]s describing what changed.

use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use ai::{GreedyMaxFlipSelector, MoveSelector};
pub use board::Board;
pub use error::GameError;
pub use game::GameEngine;
pub use types::*;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
