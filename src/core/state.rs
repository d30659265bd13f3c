//! Game state and observation snapshots.
//!
//! ## GameState
//!
//! Everything the rules read and write:
//! - Board cells and reveal status
//! - Side assignment and the player to move
//! - Progress counter (consecutive actions without a flip or capture)
//! - Action history
//!
//! ## Observation
//!
//! A by-value copy handed to callers. Mutating it never touches the engine.

use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::board::{Board, RevealState, NUM_CELLS};
use super::piece::Piece;
use super::player::{PlayerId, SideAssignment};

/// Mutable game state owned by one engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Board contents.
    pub board: Board,

    /// Which player holds red.
    pub sides: SideAssignment,

    /// Player to move.
    pub current_player: PlayerId,

    /// Consecutive actions since the last flip or capture.
    pub progress: u32,

    /// Applied actions, oldest first.
    history: Vec<ActionRecord>,
}

impl GameState {
    /// Opening state on a given board: player 0 to move, sides unassigned.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            sides: SideAssignment::Unassigned,
            current_player: PlayerId::FIRST,
            progress: 0,
            history: Vec::new(),
        }
    }

    /// Set the side assignment (scenario setup).
    #[must_use]
    pub fn with_sides(mut self, sides: SideAssignment) -> Self {
        self.sides = sides;
        self
    }

    /// Set the player to move (scenario setup).
    #[must_use]
    pub fn with_current_player(mut self, player: PlayerId) -> Self {
        self.current_player = player;
        self
    }

    /// Set the progress counter (scenario setup).
    #[must_use]
    pub fn with_progress(mut self, progress: u32) -> Self {
        self.progress = progress;
        self
    }

    /// Number of actions applied so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.history.len() as u32
    }

    /// Applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Record an applied action.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push(record);
    }

    /// Hand the turn to the other player.
    pub fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Take a value snapshot.
    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation {
            pieces: self.board.cells().map(|c| c.piece()),
            reveal: self.board.reveal_states(),
            current_player: self.current_player,
            sides: self.sides,
            progress: self.progress,
        }
    }
}

/// Snapshot of the game as seen from outside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Piece identity per cell (`None` when empty), hidden pieces included.
    pub pieces: [Option<Piece>; NUM_CELLS],

    /// Reveal status per cell.
    pub reveal: [RevealState; NUM_CELLS],

    /// Player to move.
    pub current_player: PlayerId,

    /// Which player holds red.
    pub sides: SideAssignment,

    /// Consecutive actions since the last flip or capture.
    pub progress: u32,
}

impl Observation {
    /// Piece identities with hidden cells masked out.
    #[must_use]
    pub fn public_pieces(&self) -> [Option<Piece>; NUM_CELLS] {
        let mut out = self.pieces;
        for (piece, state) in out.iter_mut().zip(self.reveal) {
            if state != RevealState::Revealed {
                *piece = None;
            }
        }
        out
    }

    /// Number of hidden cells.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.reveal.iter().filter(|s| **s == RevealState::Hidden).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, ActionKind};
    use crate::core::board::Cell;
    use crate::core::piece::Rank;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Board::empty());

        assert_eq!(state.current_player, PlayerId::FIRST);
        assert_eq!(state.sides, SideAssignment::Unassigned);
        assert_eq!(state.progress, 0);
        assert_eq!(state.ply(), 0);
    }

    #[test]
    fn test_pass_turn_and_history() {
        let mut state = GameState::new(Board::empty());
        let piece = Piece::red(Rank::Rook);

        state.record_action(ActionRecord::new(
            state.current_player,
            Action::flip(0),
            ActionKind::Flip(piece),
            state.ply(),
        ));
        state.pass_turn();

        assert_eq!(state.current_player, PlayerId::SECOND);
        assert_eq!(state.ply(), 1);
        assert_eq!(state.history()[0].player, PlayerId::FIRST);
    }

    #[test]
    fn test_observation_is_a_copy() {
        let mut board = Board::empty();
        board.set(3, Cell::Hidden(Piece::black(Rank::Guard)));
        let state = GameState::new(board);

        let mut obs = state.observation();
        assert_eq!(obs.reveal[3], RevealState::Hidden);
        assert_eq!(obs.pieces[3], Some(Piece::black(Rank::Guard)));

        obs.pieces[3] = None;
        obs.reveal[3] = RevealState::Empty;
        assert_eq!(state.board.cell(3), Cell::Hidden(Piece::black(Rank::Guard)));
    }

    #[test]
    fn test_public_pieces_masks_hidden() {
        let mut board = Board::empty();
        board.set(0, Cell::Hidden(Piece::red(Rank::General)));
        board.set(1, Cell::Revealed(Piece::black(Rank::Pawn)));

        let obs = GameState::new(board).observation();
        let public = obs.public_pieces();

        assert_eq!(public[0], None);
        assert_eq!(public[1], Some(Piece::black(Rank::Pawn)));
        assert_eq!(obs.hidden_count(), 1);
    }
}
