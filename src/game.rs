use tracing::{debug, info, instrument};

use crate::ai::{GreedyMaxFlipSelector, MoveSelector};
use crate::board::{Board, index_of, positions};
use crate::error::GameError;
use crate::types::{
    Cell, EndReason, GameConfig, GameEvent, GameMode, GameResult, GameState, GameStatus, Outcome,
    Player, Position,
};

/// Result of handing the turn over after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnOutcome {
    Next(Player),
    /// The opponent had no move; the mover plays again.
    Skipped { skipped: Player, next: Player },
    Finished(GameResult),
}

/// One game session: owns the board and the turn state machine.
pub struct GameEngine {
    board: Board,
    status: GameStatus,
    config: GameConfig,
    selector: Box<dyn MoveSelector>,
}

impl GameEngine {
    /// Creates a session using the greedy computer opponent.
    pub fn new(config: GameConfig) -> Self {
        Self::with_selector(config, Box::new(GreedyMaxFlipSelector))
    }

    pub fn with_selector(config: GameConfig, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::Active(Player::Black),
            config,
            selector,
        }
    }

    /// Restarts from the opening position with a new mode.
    #[instrument(level = "debug", skip(self))]
    pub fn start_game(&mut self, mode: GameMode) {
        self.config.mode = mode;
        self.reset();
    }

    /// Restarts from the opening position, keeping the configuration.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::Active(Player::Black);
        info!(mode = ?self.config.mode, "game started");
    }

    /// Replaces the board with an arbitrary position and `to_move` to play.
    ///
    /// When `to_move` has no legal move the turn passes to the opponent, and
    /// when neither can move the game is over immediately.
    #[instrument(level = "debug", skip(self))]
    pub fn load_position(&mut self, board: Board, to_move: Player) {
        self.board = board;
        self.status = if board.has_legal_move(to_move) {
            GameStatus::Active(to_move)
        } else if board.has_legal_move(to_move.opponent()) {
            GameStatus::Active(to_move.opponent())
        } else {
            GameStatus::GameOver(evaluate(&board))
        };
        debug!(status = ?self.status, "position loaded\n{}", self.board);
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::Active(player) => Some(player),
            GameStatus::GameOver(_) => None,
        }
    }

    pub fn cell_at(&self, row: u8, col: u8) -> Result<Cell, GameError> {
        self.board.cell_at(row, col)
    }

    /// Whether the presentation layer should schedule [`Self::computer_move`].
    pub fn is_computer_turn(&self) -> bool {
        self.current_player()
            .is_some_and(|player| self.is_computer(player))
    }

    /// Legal moves for the player to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        match self.current_player() {
            Some(player) => positions(self.board.legal_moves(player)),
            None => Vec::new(),
        }
    }

    /// Places a disc for the human player to move.
    #[instrument(level = "debug", skip(self))]
    pub fn attempt_move(&mut self, row: u8, col: u8) -> Result<Vec<GameEvent>, GameError> {
        let player = self.active_player()?;
        if self.is_computer(player) {
            return Err(GameError::InvalidStateTransition(
                "it is the computer's turn",
            ));
        }

        self.apply_move(Position::new(row, col), player)
    }

    /// Lets the configured [`MoveSelector`] play for the computer.
    #[instrument(level = "debug", skip(self))]
    pub fn computer_move(&mut self) -> Result<Vec<GameEvent>, GameError> {
        let player = self.active_player()?;
        if !self.is_computer(player) {
            return Err(GameError::InvalidStateTransition(
                "it is not the computer's turn",
            ));
        }
        if !self.board.has_legal_move(player) {
            return Err(GameError::InvalidStateTransition(
                "computer has no legal moves",
            ));
        }

        let selected = self
            .selector
            .select_move(&self.board, player)
            .ok_or(GameError::InvalidStateTransition(
                "computer could not select a move",
            ))?;
        debug!(%player, row = selected.row, col = selected.col, "computer selected move");
        index_of(selected).map_err(|_| GameError::IllegalMove {
            row: selected.row,
            col: selected.col,
        })?;

        self.apply_move(selected, player)
    }

    pub fn current_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        let result = match self.status {
            GameStatus::GameOver(result) => Some(result),
            GameStatus::Active(_) => None,
        };

        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player(),
            black_count,
            white_count,
            mode: self.config.mode,
            is_game_over: result.is_some(),
            result,
            legal_moves: self.legal_moves(),
        }
    }

    fn active_player(&self) -> Result<Player, GameError> {
        self.current_player()
            .ok_or(GameError::InvalidStateTransition("game is already over"))
    }

    fn is_computer(&self, player: Player) -> bool {
        self.config.mode == GameMode::PlayerVsComputer && player == self.config.computer_color
    }

    fn apply_move(&mut self, pos: Position, player: Player) -> Result<Vec<GameEvent>, GameError> {
        let index = index_of(pos)?;
        let flips = self.board.place(index, player);
        if flips == 0 {
            return Err(GameError::IllegalMove {
                row: pos.row,
                col: pos.col,
            });
        }

        let flipped = positions(flips);
        debug!(%player, row = pos.row, col = pos.col, flipped = flipped.len(), "move applied");

        let outcome = self.resolve_turn(player);
        let mut events = Vec::with_capacity(2);
        let next_player = match outcome {
            TurnOutcome::Next(next) | TurnOutcome::Skipped { next, .. } => Some(next),
            TurnOutcome::Finished(_) => None,
        };
        events.push(GameEvent::MoveApplied {
            player,
            placed: pos,
            flipped,
            next_player,
        });

        match outcome {
            TurnOutcome::Next(next) => {
                self.status = GameStatus::Active(next);
            }
            TurnOutcome::Skipped { skipped, next } => {
                info!(%skipped, "turn skipped");
                self.status = GameStatus::Active(next);
                events.push(GameEvent::TurnSkipped {
                    skipped_player: skipped,
                });
            }
            TurnOutcome::Finished(result) => {
                info!(
                    black = result.black_count,
                    white = result.white_count,
                    outcome = ?result.outcome,
                    "game over"
                );
                self.status = GameStatus::GameOver(result);
                events.push(result.into());
            }
        }

        Ok(events)
    }

    /// Opponent first, then the mover; only when both are blocked does the
    /// game end.
    fn resolve_turn(&self, mover: Player) -> TurnOutcome {
        let opponent = mover.opponent();
        if self.board.has_legal_move(opponent) {
            TurnOutcome::Next(opponent)
        } else if self.board.has_legal_move(mover) {
            TurnOutcome::Skipped {
                skipped: opponent,
                next: mover,
            }
        } else {
            TurnOutcome::Finished(evaluate(&self.board))
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Scores a finished position.
pub fn evaluate(board: &Board) -> GameResult {
    let (black_count, white_count) = board.count();
    let outcome = if black_count > white_count {
        Outcome::Winner(Player::Black)
    } else if white_count > black_count {
        Outcome::Winner(Player::White)
    } else {
        Outcome::Draw
    };
    let reason = if board.empty_count() == 0 {
        EndReason::BoardFull
    } else {
        EndReason::NoLegalMoves
    };

    GameResult {
        black_count,
        white_count,
        outcome,
        reason,
    }
}
