use crate::ai::MoveSelector;
use crate::board::{Board, NUM_SQUARES, position_of};
use crate::types::{Player, Position};

/// Picks the move flipping the most discs, with no lookahead.
/// Ties go to the earliest square in row-major order.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyMaxFlipSelector;

impl MoveSelector for GreedyMaxFlipSelector {
    fn select_move(&self, board: &Board, player: Player) -> Option<Position> {
        let mut best: Option<(usize, u32)> = None;

        for pos in 0..NUM_SQUARES {
            let flipped = board.flips(pos, player).count_ones();
            if flipped == 0 {
                continue;
            }
            if best.is_none_or(|(_, most)| flipped > most) {
                best = Some((pos, flipped));
            }
        }

        best.map(|(pos, _)| position_of(pos))
    }
}
