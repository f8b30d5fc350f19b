use std::fmt;

use crate::error::GameError;
use crate::types::{Cell, Player, Position};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Othello board state represented by two bitboards.
///
/// Bit `row * 8 + col` is set when that cell holds a disc of the
/// corresponding color, so ascending bit order is row-major scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the standard opening:
    /// (3,3)=white, (3,4)=black, (4,3)=black, (4,4)=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// Builds a board from raw color masks. A cell set in both masks is
    /// treated as black.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        Self {
            black,
            white: white & !black,
        }
    }

    /// Returns the occupant of `(row, col)`.
    pub fn cell_at(&self, row: u8, col: u8) -> Result<Cell, GameError> {
        let square = bit(index_of(Position::new(row, col))?);
        Ok(if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        })
    }

    /// Returns the legal move mask for `player`.
    pub fn legal_moves(&self, player: Player) -> u64 {
        let (me, opp) = self.sides(player);
        let occupied = me | opp;
        let mut legal = 0u64;

        for pos in 0..NUM_SQUARES {
            let move_bit = bit(pos);
            if (occupied & move_bit) != 0 {
                continue;
            }
            if Self::collect_flips(pos, me, opp) != 0 {
                legal |= move_bit;
            }
        }

        legal
    }

    /// Returns whether `player` can place anywhere. Stops at the first
    /// legal square.
    pub fn has_legal_move(&self, player: Player) -> bool {
        let (me, opp) = self.sides(player);
        (0..NUM_SQUARES).any(|pos| Self::collect_flips(pos, me, opp) != 0)
    }

    /// Returns the flip set for `player` placing at square `pos`.
    /// Zero means the move is illegal.
    pub fn flips(&self, pos: usize, player: Player) -> u64 {
        let (me, opp) = self.sides(player);
        Self::collect_flips(pos, me, opp)
    }

    /// Places one disc and flips captured discs.
    /// Returns the flipped mask, or 0 with the board untouched when the
    /// move is illegal.
    pub fn place(&mut self, pos: usize, player: Player) -> u64 {
        let (me, opp) = self.sides(player);

        let flips = Self::collect_flips(pos, me, opp);
        if flips == 0 {
            return 0;
        }

        let next_me = me | bit(pos) | flips;
        let next_opp = opp & !flips;

        match player {
            Player::Black => {
                self.black = next_me;
                self.white = next_opp;
            }
            Player::White => {
                self.white = next_me;
                self.black = next_opp;
            }
        }

        flips
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [Cell::Empty as u8; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            let square = bit(pos);
            if (self.black & square) != 0 {
                *cell = Cell::Black as u8;
            } else if (self.white & square) != 0 {
                *cell = Cell::White as u8;
            }
        }
        board
    }

    fn sides(&self, player: Player) -> (u64, u64) {
        match player {
            Player::Black => (self.black, self.white),
            Player::White => (self.white, self.black),
        }
    }

    fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
        if pos >= NUM_SQUARES {
            return 0;
        }

        let move_bit = bit(pos);
        if ((me | opp) & move_bit) != 0 {
            return 0;
        }

        let (row, col) = pos_to_row_col(pos);
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut line = 0u64;

            // A run only closes on our own disc; leaving the board or an
            // empty cell discards it.
            while in_bounds(r, c) {
                let square = bit((r as usize) * BOARD_SIZE + c as usize);
                if (opp & square) != 0 {
                    line |= square;
                } else {
                    if (me & square) != 0 {
                        flips |= line;
                    }
                    break;
                }

                r += dr;
                c += dc;
            }
        }

        flips
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.to_array();
        write!(f, "  A B C D E F G H")?;
        for (row, line) in cells.chunks(BOARD_SIZE).enumerate() {
            write!(f, "\n{} ", row + 1)?;
            for &cell in line {
                let symbol = match cell {
                    1 => 'X',
                    2 => 'O',
                    _ => '.',
                };
                write!(f, "{symbol} ")?;
            }
        }
        Ok(())
    }
}

/// Converts a coordinate into a square index.
pub fn index_of(pos: Position) -> Result<usize, GameError> {
    if pos.row as usize >= BOARD_SIZE || pos.col as usize >= BOARD_SIZE {
        return Err(GameError::OutOfBounds {
            row: pos.row,
            col: pos.col,
        });
    }
    Ok(pos.row as usize * BOARD_SIZE + pos.col as usize)
}

/// Converts a square index back into a coordinate.
pub fn position_of(index: usize) -> Position {
    Position::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
}

/// Expands a mask into positions in row-major order.
pub fn positions(mask: u64) -> Vec<Position> {
    let mut bits = mask;
    let mut out = Vec::with_capacity(bits.count_ones() as usize);

    while bits != 0 {
        out.push(position_of(bits.trailing_zeros() as usize));
        bits &= bits - 1;
    }

    out
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
