//! Computer move selection.

mod greedy;

pub use greedy::GreedyMaxFlipSelector;

use crate::board::Board;
use crate::types::{Player, Position};

/// Chooses a move for the computer player.
///
/// Caller contract: `player` has at least one legal move on `board`.
/// The engine re-validates whatever is returned.
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, player: Player) -> Option<Position>;
}
