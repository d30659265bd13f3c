//! Move legality and capture resolution.
//!
//! A move `(src, dst)` with `src != dst` is checked in this order:
//! 1. `src` holds a revealed piece
//! 2. `dst` is not hidden
//! 3. `dst` is within reach: an orthogonal neighbor, or anywhere on the
//!    same row or column for a cannon
//! 4. `dst` does not hold a friendly piece
//! 5. an empty `dst` is a plain relocation
//! 6. otherwise it is a capture, resolved by the cannon rule or the rank
//!    rule
//!
//! Side to move is not checked here; see `GameConfig::enforce_ownership`.

use crate::core::{ActionKind, Board, Cell, IllegalActionError, Piece, Rank};

/// Validate a move and classify it.
///
/// Indices must already be in bounds.
pub fn check_move(board: &Board, src: usize, dst: usize) -> Result<ActionKind, IllegalActionError> {
    let attacker = board
        .cell(src)
        .revealed()
        .ok_or(IllegalActionError::SourceNotRevealed { index: src })?;

    let defender = match board.cell(dst) {
        Cell::Hidden(_) => return Err(IllegalActionError::DestinationHidden { index: dst }),
        Cell::Revealed(p) => Some(p),
        Cell::Empty => None,
    };
    if !in_reach(attacker, src, dst) {
        return Err(IllegalActionError::OutOfReach { src, dst });
    }

    let Some(defender) = defender else {
        return Ok(ActionKind::Move(attacker));
    };
    if attacker.is_friendly(defender) {
        return Err(IllegalActionError::FriendlyTarget { src, dst });
    }

    if attacker.rank == Rank::Cannon {
        let screens = cannon_screens(board, src, dst).unwrap_or(0);
        if screens != 1 {
            return Err(IllegalActionError::CannonScreen { src, dst, screens });
        }
    } else {
        check_normal_capture(attacker, defender)?;
    }

    Ok(ActionKind::Capture { attacker, defender })
}

/// Boolean form of [`check_move`].
#[must_use]
pub fn is_legal_move(board: &Board, src: usize, dst: usize) -> bool {
    check_move(board, src, dst).is_ok()
}

/// Whether `piece` at `src` can reach `dst` at all, ignoring occupancy.
#[must_use]
pub fn in_reach(piece: Piece, src: usize, dst: usize) -> bool {
    if piece.rank == Rank::Cannon {
        Board::are_aligned(src, dst)
    } else {
        Board::are_adjacent(src, dst)
    }
}

/// Rank rule for every attacker except the cannon.
///
/// Higher or equal rank wins, except that a pawn always takes a general and
/// a general never takes a pawn.
pub fn check_normal_capture(attacker: Piece, defender: Piece) -> Result<(), IllegalActionError> {
    match (attacker.rank, defender.rank) {
        (Rank::Pawn, Rank::General) => Ok(()),
        (Rank::General, Rank::Pawn) => Err(IllegalActionError::GeneralCannotCapturePawn { attacker, defender }),
        (a, d) if a >= d => Ok(()),
        _ => Err(IllegalActionError::RankTooLow { attacker, defender }),
    }
}

/// Boolean form of [`check_normal_capture`].
#[must_use]
pub fn can_normal_capture(attacker: Piece, defender: Piece) -> bool {
    check_normal_capture(attacker, defender).is_ok()
}

/// Revealed pieces strictly between two aligned cells.
///
/// Hidden and empty cells in between do not count. Returns `None` when the
/// cells share neither a row nor a column.
#[must_use]
pub fn cannon_screens(board: &Board, src: usize, dst: usize) -> Option<usize> {
    let between = Board::between(src, dst)?;
    Some(
        between
            .iter()
            .filter(|&&i| board.cell(i).revealed().is_some())
            .count(),
    )
}

/// Cannon rule: aligned, with exactly one revealed screen.
#[must_use]
pub fn can_cannon_capture(board: &Board, src: usize, dst: usize) -> bool {
    cannon_screens(board, src, dst) == Some(1)
}
