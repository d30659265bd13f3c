//! Seeded randomness for dealing the board and for random play.
//!
//! A game draws randomness in two places: the face-down deal at reset and
//! whatever a move policy picks. Both go through [`GameRng`], so one seed
//! replays the same deal and the same game.
//!
//! ```
//! use banqi::core::{Board, GameRng};
//!
//! let a = Board::shuffled(&mut GameRng::new(42));
//! let b = Board::shuffled(&mut GameRng::new(42));
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed the stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform in-place permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Uniform pick, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    #[test]
    fn test_same_seed_same_deal() {
        let mut a = Piece::full_set();
        let mut b = Piece::full_set();
        GameRng::new(9).shuffle(&mut a);
        GameRng::new(9).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_keeps_multiset() {
        let mut rng = GameRng::new(42);
        let mut pieces = Piece::full_set();
        let original = pieces.clone();

        rng.shuffle(&mut pieces);
        assert_ne!(pieces, original);

        let mut sorted = pieces.clone();
        sorted.sort_by_key(|p| (p.side as u8, p.rank));
        let mut expected = original;
        expected.sort_by_key(|p| (p.side as u8, p.rank));
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_successive_draws_differ() {
        let mut rng = GameRng::new(3);
        let mut first = Piece::full_set();
        let mut second = Piece::full_set();
        rng.shuffle(&mut first);
        rng.shuffle(&mut second);
        assert_ne!(first, second);
        assert_eq!(rng.seed(), 3);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(1);
        let cells = [4usize, 8, 15, 16];
        let picked = rng.choose(&cells).copied();
        assert!(picked.is_some_and(|c| cells.contains(&c)));

        let none: [usize; 0] = [];
        assert_eq!(rng.choose(&none), None);
    }
}
