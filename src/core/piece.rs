//! Piece identity: side (color) and rank.
//!
//! Ranks are ordered low to high so capture strength is a plain integer
//! comparison:
//!
//! | Rank     | Value | Letter |
//! |----------|-------|--------|
//! | Pawn     | 0     | P / p  |
//! | Cannon   | 1     | C / c  |
//! | Knight   | 2     | N / n  |
//! | Rook     | 3     | R / r  |
//! | Minister | 4     | M / m  |
//! | Guard    | 5     | G / g  |
//! | General  | 6     | K / k  |
//!
//! Uppercase letters are red, lowercase are black.

use serde::{Deserialize, Serialize};

/// Piece color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    /// Both sides, red first.
    pub const ALL: [Side; 2] = [Side::Red, Side::Black];

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Piece rank, ordered from weakest to strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Pawn = 0,
    Cannon = 1,
    Knight = 2,
    Rook = 3,
    Minister = 4,
    Guard = 5,
    General = 6,
}

impl Rank {
    /// All ranks, weakest first.
    pub const ALL: [Rank; 7] = [
        Rank::Pawn,
        Rank::Cannon,
        Rank::Knight,
        Rank::Rook,
        Rank::Minister,
        Rank::Guard,
        Rank::General,
    ];

    /// Numeric rank value (0 = pawn, 6 = general).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// How many pieces of this rank each side starts with.
    #[must_use]
    pub const fn count_per_side(self) -> usize {
        match self {
            Rank::General => 1,
            Rank::Pawn => 5,
            _ => 2,
        }
    }

    /// Uppercase letter for this rank.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Rank::Pawn => 'P',
            Rank::Cannon => 'C',
            Rank::Knight => 'N',
            Rank::Rook => 'R',
            Rank::Minister => 'M',
            Rank::Guard => 'G',
            Rank::General => 'K',
        }
    }

    /// Parse a rank letter, either case.
    #[must_use]
    pub fn from_letter(c: char) -> Option<Self> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.letter() == c.to_ascii_uppercase())
    }
}

/// A piece: a (side, rank) pair. There are 14 distinct kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

impl Piece {
    /// Create a piece.
    #[must_use]
    pub const fn new(side: Side, rank: Rank) -> Self {
        Self { side, rank }
    }

    /// Shorthand for a red piece.
    #[must_use]
    pub const fn red(rank: Rank) -> Self {
        Self::new(Side::Red, rank)
    }

    /// Shorthand for a black piece.
    #[must_use]
    pub const fn black(rank: Rank) -> Self {
        Self::new(Side::Black, rank)
    }

    /// Check whether two pieces share a color.
    #[must_use]
    pub fn is_friendly(self, other: Piece) -> bool {
        self.side == other.side
    }

    /// Letter form: uppercase for red, lowercase for black.
    #[must_use]
    pub fn letter(self) -> char {
        match self.side {
            Side::Red => self.rank.letter(),
            Side::Black => self.rank.letter().to_ascii_lowercase(),
        }
    }

    /// Parse the letter form produced by [`Piece::letter`].
    #[must_use]
    pub fn from_letter(c: char) -> Option<Self> {
        let rank = Rank::from_letter(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::Red
        } else {
            Side::Black
        };
        Some(Self::new(side, rank))
    }

    /// The full starting set: 16 pieces per side, 32 in total.
    ///
    /// ```
    /// use banqi::core::{Piece, Rank, Side};
    ///
    /// let set = Piece::full_set();
    /// assert_eq!(set.len(), 32);
    /// assert_eq!(set.iter().filter(|p| **p == Piece::black(Rank::Pawn)).count(), 5);
    /// assert_eq!(set.iter().filter(|p| p.side == Side::Red).count(), 16);
    /// ```
    #[must_use]
    pub fn full_set() -> Vec<Piece> {
        Side::ALL
            .into_iter()
            .flat_map(|side| {
                Rank::ALL.into_iter().rev().flat_map(move |rank| {
                    std::iter::repeat(Piece::new(side, rank)).take(rank.count_per_side())
                })
            })
            .collect()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::Pawn < Rank::Cannon);
        assert!(Rank::Guard < Rank::General);
        assert_eq!(Rank::Rook.value(), 3);
    }

    #[test]
    fn test_letters_round_trip() {
        for side in Side::ALL {
            for rank in Rank::ALL {
                let piece = Piece::new(side, rank);
                assert_eq!(Piece::from_letter(piece.letter()), Some(piece));
            }
        }
        assert_eq!(Piece::red(Rank::General).letter(), 'K');
        assert_eq!(Piece::black(Rank::Knight).letter(), 'n');
        assert_eq!(Piece::from_letter('x'), None);
    }

    #[test]
    fn test_full_set_counts() {
        let set = Piece::full_set();
        assert_eq!(set.len(), 32);

        for side in Side::ALL {
            for rank in Rank::ALL {
                let count = set.iter().filter(|p| **p == Piece::new(side, rank)).count();
                assert_eq!(count, rank.count_per_side(), "{side} {rank:?}");
            }
        }
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Red.opponent(), Side::Black);
        assert_eq!(Side::Black.opponent(), Side::Red);
        assert!(Piece::red(Rank::Pawn).is_friendly(Piece::red(Rank::General)));
        assert!(!Piece::red(Rank::Pawn).is_friendly(Piece::black(Rank::Pawn)));
    }
}
