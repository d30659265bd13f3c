//! Game results and win/draw detection.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId, Side};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Progress counter ran out.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        self == GameResult::Winner(player)
    }

    /// Numeric code: the winner's index, or `-1` for a draw.
    #[must_use]
    pub fn code(self) -> i8 {
        match self {
            GameResult::Winner(p) => p.0 as i8,
            GameResult::Draw => -1,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Check the post-action board for a result.
///
/// A color with no revealed pieces loses once nothing is left face down.
/// Otherwise the game is drawn when `progress` reaches `draw_threshold`.
#[must_use]
pub fn check_winner(state: &GameState, draw_threshold: u32) -> Option<GameResult> {
    let hidden = state.board.hidden_count();
    if hidden == 0 {
        for side in Side::ALL {
            if state.board.revealed_count(side) == 0 {
                let winner = state.sides.player_for(side.opponent());
                return Some(GameResult::Winner(winner));
            }
        }
    }

    if state.progress >= draw_threshold {
        return Some(GameResult::Draw);
    }

    None
}
