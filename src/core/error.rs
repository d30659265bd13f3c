//! Engine errors.
//!
//! Every rejected action is an [`IllegalActionError`]. The variant records
//! which precondition failed; callers that only care about legality can
//! treat them all alike.

use super::piece::Piece;

/// An action violated a rule and was rejected without changing state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IllegalActionError {
    /// A cell index is outside the board.
    #[display("Cell {index} is off the board")]
    OutOfBounds { index: usize },

    /// Flip target is already revealed or empty.
    #[display("Cannot flip cell {index}: it is not hidden")]
    NotHidden { index: usize },

    /// Move source is hidden or empty.
    #[display("Cell {index} does not hold a revealed piece")]
    SourceNotRevealed { index: usize },

    /// Move destination is still face down.
    #[display("Cell {index} is hidden and must be flipped first")]
    DestinationHidden { index: usize },

    /// Destination is not reachable by the moving piece.
    #[display("Cell {dst} is out of reach from cell {src}")]
    OutOfReach { src: usize, dst: usize },

    /// Destination holds a piece of the mover's color.
    #[display("Cell {dst} holds a friendly piece of cell {src}")]
    FriendlyTarget { src: usize, dst: usize },

    /// Source piece belongs to the opponent of the player to move.
    #[display("Piece {piece} at cell {index} belongs to the opponent")]
    NotYourPiece { index: usize, piece: Piece },

    /// Attacker ranks below defender.
    #[display("{attacker} cannot capture higher-ranked {defender}")]
    RankTooLow { attacker: Piece, defender: Piece },

    /// A general never captures a pawn.
    #[display("General {attacker} cannot capture pawn {defender}")]
    GeneralCannotCapturePawn { attacker: Piece, defender: Piece },

    /// Cannon capture without exactly one screen, or off its lines.
    #[display("Cannon at {src} cannot capture at {dst}: {screens} screens between")]
    CannonScreen { src: usize, dst: usize, screens: usize },

    /// The game already has a result.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for IllegalActionError {}

/// A board layout string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum LayoutError {
    /// Wrong number of cell tokens.
    #[display("Expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    /// A token is not `.`, a piece letter, or `?` plus a piece letter.
    #[display("Unrecognized cell token {token:?} at cell {index}")]
    BadToken { index: usize, token: String },
}

impl std::error::Error for LayoutError {}
