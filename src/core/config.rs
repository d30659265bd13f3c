//! Game configuration.

use serde::{Deserialize, Serialize};

/// Default number of consecutive non-progress actions that draws the game.
pub const DEFAULT_DRAW_THRESHOLD: u32 = 50;

/// Which cannon captures `legal_actions` lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CannonEnumeration {
    /// Scan the cannon's whole row and column.
    #[default]
    FullLines,
    /// Only the four orthogonal neighbors, like every other piece.
    /// Long-range captures are then legal to submit but never listed.
    Adjacent,
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the shuffle RNG.
    pub seed: u64,

    /// Progress-counter value at which the game is drawn.
    pub draw_threshold: u32,

    /// Cannon candidates in action enumeration.
    pub cannon_enumeration: CannonEnumeration,

    /// Require the moved piece to be the mover's color.
    /// Flips are unaffected.
    pub enforce_ownership: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            draw_threshold: DEFAULT_DRAW_THRESHOLD,
            cannon_enumeration: CannonEnumeration::FullLines,
            enforce_ownership: false,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the draw threshold.
    #[must_use]
    pub fn with_draw_threshold(mut self, threshold: u32) -> Self {
        self.draw_threshold = threshold;
        self
    }

    /// Set the cannon enumeration mode.
    #[must_use]
    pub fn with_cannon_enumeration(mut self, mode: CannonEnumeration) -> Self {
        self.cannon_enumeration = mode;
        self
    }

    /// Toggle ownership enforcement.
    #[must_use]
    pub fn with_enforce_ownership(mut self, enforce: bool) -> Self {
        self.enforce_ownership = enforce;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.draw_threshold, 50);
        assert_eq!(config.cannon_enumeration, CannonEnumeration::FullLines);
        assert!(!config.enforce_ownership);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_draw_threshold(10)
            .with_cannon_enumeration(CannonEnumeration::Adjacent)
            .with_enforce_ownership(true);

        assert_eq!(config.seed, 123);
        assert_eq!(config.draw_threshold, 10);
        assert_eq!(config.cannon_enumeration, CannonEnumeration::Adjacent);
        assert!(config.enforce_ownership);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
