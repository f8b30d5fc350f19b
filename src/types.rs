use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Black always moves first.
    #[default]
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("black"),
            Player::White => f.write_str("white"),
        }
    }
}

/// Occupant of a single board cell. The discriminants match the
/// encoding used in [`GameState::board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Black = 1,
    White = 2,
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    #[serde(rename = "pvp")]
    PlayerVsPlayer,
    #[serde(rename = "pvc")]
    PlayerVsComputer,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game mode {0:?} (expected \"pvp\" or \"pvc\")")]
pub struct ParseGameModeError(String);

impl FromStr for GameMode {
    type Err = ParseGameModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pvp" => Ok(Self::PlayerVsPlayer),
            "pvc" => Ok(Self::PlayerVsComputer),
            _ => Err(ParseGameModeError(s.to_string())),
        }
    }
}

/// Session configuration supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub mode: GameMode,
    /// Color played by the computer in [`GameMode::PlayerVsComputer`].
    pub computer_color: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsPlayer,
            computer_color: Player::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EndReason {
    /// No empty cell remains.
    BoardFull,
    /// Empty cells remain but neither player can flip anything.
    NoLegalMoves,
}

/// Final result, computed once when neither player can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub black_count: u8,
    pub white_count: u8,
    pub outcome: Outcome,
    pub reason: EndReason,
}

/// Turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active(Player),
    GameOver(GameResult),
}

/// Something the presentation layer must render, in the order emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    #[serde(rename_all = "camelCase")]
    MoveApplied {
        player: Player,
        placed: Position,
        /// Row-major order.
        flipped: Vec<Position>,
        /// `None` when this move ended the game.
        next_player: Option<Player>,
    },
    #[serde(rename_all = "camelCase")]
    TurnSkipped { skipped_player: Player },
    #[serde(rename_all = "camelCase")]
    GameOver {
        black_count: u8,
        white_count: u8,
        outcome: Outcome,
        reason: EndReason,
    },
}

impl From<GameResult> for GameEvent {
    fn from(result: GameResult) -> Self {
        GameEvent::GameOver {
            black_count: result.black_count,
            white_count: result.white_count,
            outcome: result.outcome,
            reason: result.reason,
        }
    }
}

/// Public game state returned from engine and WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Row-major, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    /// `None` once the game is over.
    pub current_player: Option<Player>,
    pub black_count: u8,
    pub white_count: u8,
    pub mode: GameMode,
    pub is_game_over: bool,
    pub result: Option<GameResult>,
    pub legal_moves: Vec<Position>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_alternates() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(Player::default(), Player::Black);
    }

    #[test]
    fn game_mode_parses_host_strings() {
        assert_eq!("pvp".parse::<GameMode>(), Ok(GameMode::PlayerVsPlayer));
        assert_eq!("PVC".parse::<GameMode>(), Ok(GameMode::PlayerVsComputer));
        let err = "chess".parse::<GameMode>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown game mode \"chess\" (expected \"pvp\" or \"pvc\")"
        );
    }

    #[test]
    fn default_config_is_two_humans_with_white_computer_color() {
        let config = GameConfig::default();

        assert_eq!(config.mode, GameMode::PlayerVsPlayer);
        assert_eq!(config.computer_color, Player::White);
    }
}
