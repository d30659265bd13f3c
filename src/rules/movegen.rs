//! Legal action enumeration.

use crate::core::{Action, Board, CannonEnumeration, Cell, Rank, Side};

use super::legality::is_legal_move;

/// All legal actions, in board scan order.
///
/// Every hidden cell yields its flip. Every revealed piece yields the
/// candidate destinations that pass [`is_legal_move`]: orthogonal
/// neighbors, or for a cannon under [`CannonEnumeration::FullLines`] its
/// whole row and column. With `mover` set, only pieces of that color move.
#[must_use]
pub fn legal_actions(board: &Board, cannons: CannonEnumeration, mover: Option<Side>) -> Vec<Action> {
    let mut actions = Vec::new();

    for (src, cell) in board.cells().iter().enumerate() {
        match *cell {
            Cell::Hidden(_) => actions.push(Action::flip(src)),
            Cell::Revealed(piece) => {
                if mover.is_some_and(|side| side != piece.side) {
                    continue;
                }
                let push_legal = |dst: usize, out: &mut Vec<Action>| {
                    if is_legal_move(board, src, dst) {
                        out.push(Action::new(src, dst));
                    }
                };
                if piece.rank == Rank::Cannon && cannons == CannonEnumeration::FullLines {
                    for dst in Board::line_cells(src) {
                        push_legal(dst, &mut actions);
                    }
                } else {
                    for dst in Board::neighbors(src) {
                        push_legal(dst, &mut actions);
                    }
                }
            }
            Cell::Empty => {}
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, NUM_CELLS};

    #[test]
    fn test_opening_is_all_flips() {
        let board = Board::shuffled(&mut GameRng::new(5));
        let actions = legal_actions(&board, CannonEnumeration::FullLines, None);

        assert_eq!(actions.len(), NUM_CELLS);
        assert!(actions.iter().all(|a| a.is_flip()));
    }

    #[test]
    fn test_cannon_long_range_listed_only_in_full_lines() {
        let board = Board::from_layout(
            "C . . N . . r .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .",
        )
        .unwrap();

        let full = legal_actions(&board, CannonEnumeration::FullLines, None);
        let adjacent = legal_actions(&board, CannonEnumeration::Adjacent, None);

        assert!(full.contains(&Action::new(0, 6)));
        assert!(!adjacent.contains(&Action::new(0, 6)));
        assert!(adjacent.contains(&Action::new(0, 1)));
        assert!(adjacent.contains(&Action::new(0, 8)));
    }

    #[test]
    fn test_mover_filter() {
        let board = Board::from_layout(
            "R . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . k",
        )
        .unwrap();

        let red = legal_actions(&board, CannonEnumeration::FullLines, Some(Side::Red));
        assert!(red.iter().all(|a| a.src == 0));

        let both = legal_actions(&board, CannonEnumeration::FullLines, None);
        assert_eq!(both.len(), 4);
    }
}
