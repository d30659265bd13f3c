//! Action representation: a (source, destination) pair of cell indices.
//!
//! - `src == dst` flips the hidden piece at that cell
//! - `src != dst` moves the piece at `src`, capturing whatever is at `dst`
//!
//! ```
//! use banqi::core::Action;
//!
//! assert!(Action::flip(5).is_flip());
//! assert!(!Action::new(5, 6).is_flip());
//! ```

use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::player::PlayerId;

/// A submitted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub src: usize,
    pub dst: usize,
}

impl Action {
    #[must_use]
    pub const fn new(src: usize, dst: usize) -> Self {
        Self { src, dst }
    }

    /// Flip the piece at `index`.
    #[must_use]
    pub const fn flip(index: usize) -> Self {
        Self::new(index, index)
    }

    #[must_use]
    pub const fn is_flip(self) -> bool {
        self.src == self.dst
    }
}

impl From<(usize, usize)> for Action {
    fn from((src, dst): (usize, usize)) -> Self {
        Self::new(src, dst)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.src, self.dst)
    }
}

/// What an applied action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Revealed this piece.
    Flip(Piece),
    /// Moved onto an empty cell.
    Move(Piece),
    /// Moved and took the defender.
    Capture { attacker: Piece, defender: Piece },
}

impl ActionKind {
    /// Flips and captures reset the progress counter.
    #[must_use]
    pub fn makes_progress(self) -> bool {
        !matches!(self, ActionKind::Move(_))
    }
}

/// An applied action, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Its effect.
    pub kind: ActionKind,

    /// Number of actions applied before this one.
    pub ply: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, kind: ActionKind, ply: u32) -> Self {
        Self {
            player,
            action,
            kind,
            ply,
        }
    }
}
