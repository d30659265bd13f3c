//! Players and their binding to colors.
//!
//! ## PlayerId
//!
//! Banqi is strictly two-player: `PlayerId(0)` moves first.
//!
//! ## SideAssignment
//!
//! Neither player owns a color at the start. The first flip binds the
//! flipping player to the color of the revealed piece, and the binding then
//! holds for the rest of the game.

use serde::{Deserialize, Serialize};

use super::piece::Side;

/// Player identifier: 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// # Panics
    /// Panics if `id > 1`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "Banqi has exactly two players");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both players in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Which player controls red: undecided until the first flip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideAssignment {
    #[default]
    Unassigned,
    /// The given player is red; the other is black.
    RedIs(PlayerId),
}

impl SideAssignment {
    /// Binding produced when `player` flips a piece of `side` first.
    #[must_use]
    pub fn from_first_flip(player: PlayerId, side: Side) -> Self {
        match side {
            Side::Red => SideAssignment::RedIs(player),
            Side::Black => SideAssignment::RedIs(player.opponent()),
        }
    }

    #[must_use]
    pub fn is_assigned(self) -> bool {
        matches!(self, SideAssignment::RedIs(_))
    }

    /// Color held by `player`, if assigned.
    #[must_use]
    pub fn side_of(self, player: PlayerId) -> Option<Side> {
        match self {
            SideAssignment::Unassigned => None,
            SideAssignment::RedIs(red) if red == player => Some(Side::Red),
            SideAssignment::RedIs(_) => Some(Side::Black),
        }
    }

    /// Player holding `side`.
    ///
    /// While unassigned, red maps to the first player and black to the
    /// second.
    #[must_use]
    pub fn player_for(self, side: Side) -> PlayerId {
        let red = match self {
            SideAssignment::Unassigned => PlayerId::FIRST,
            SideAssignment::RedIs(red) => red,
        };
        match side {
            Side::Red => red,
            Side::Black => red.opponent(),
        }
    }
}
