//! Move-selection policies and the self-play loop.
//!
//! The engine never picks moves itself. A [`MovePolicy`] looks at the legal
//! actions and chooses one; [`play_out`] drives a whole game with one.
//!
//! ```
//! use banqi::{play_out, GameConfig, GameEngine, RandomPolicy};
//!
//! let mut engine = GameEngine::new(GameConfig::default().with_seed(3));
//! let mut policy = RandomPolicy::new(3);
//! let report = play_out(&mut engine, &mut policy, 10_000);
//! assert!(report.steps > 0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{Action, ActionRecord, GameRng};
use crate::rules::{GameEngine, GameResult};

/// Chooses the next action for the player to move.
pub trait MovePolicy {
    /// Pick one of `legal`. Returns `None` only when `legal` is empty.
    fn choose(&mut self, engine: &GameEngine, legal: &[Action]) -> Option<Action>;
}

/// Uniform random choice among legal actions.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Seeded random policy.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, _engine: &GameEngine, legal: &[Action]) -> Option<Action> {
        self.rng.choose(legal).copied()
    }
}

/// Always the first legal action in scan order.
#[derive(Clone, Debug, Default)]
pub struct FirstLegalPolicy;

impl MovePolicy for FirstLegalPolicy {
    fn choose(&mut self, _engine: &GameEngine, legal: &[Action]) -> Option<Action> {
        legal.first().copied()
    }
}

/// Why a play-out stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayoutEnd {
    /// The engine reported a result.
    Finished(GameResult),
    /// The player to move had nothing legal; scored as a draw.
    NoLegalActions,
    /// The step limit was hit first.
    StepLimit,
}

impl PlayoutEnd {
    /// The game result, treating a stuck position as a draw.
    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            PlayoutEnd::Finished(result) => Some(result),
            PlayoutEnd::NoLegalActions => Some(GameResult::Draw),
            PlayoutEnd::StepLimit => None,
        }
    }
}

/// Summary of a finished play-out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayoutReport {
    /// Actions applied.
    pub steps: u32,

    /// How the loop ended.
    pub end: PlayoutEnd,

    /// Every applied action.
    pub history: Vec<ActionRecord>,
}

/// Play from the engine's current position until the game ends, nobody can
/// move, or `max_steps` actions have been applied.
pub fn play_out<P: MovePolicy + ?Sized>(engine: &mut GameEngine, policy: &mut P, max_steps: u32) -> PlayoutReport {
    let mut steps = 0;

    let end = loop {
        if let Some(result) = engine.result() {
            break PlayoutEnd::Finished(result);
        }
        if steps >= max_steps {
            break PlayoutEnd::StepLimit;
        }

        let legal = engine.legal_actions();
        let Some(action) = policy.choose(engine, &legal) else {
            info!(player = %engine.current_player(), "no legal actions");
            break PlayoutEnd::NoLegalActions;
        };

        match engine.apply_action(action) {
            Ok(step) => {
                steps += 1;
                debug!(step = steps, %action, reward = step.reward, "step");
            }
            Err(err) => {
                // Policy answered outside `legal`.
                warn!(%action, %err, "policy chose an illegal action");
                break PlayoutEnd::NoLegalActions;
            }
        }
    };

    PlayoutReport {
        steps,
        end,
        history: engine.state().history().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameConfig, GameState, PlayerId, SideAssignment};

    #[test]
    fn test_random_policy_is_seeded() {
        let engine = GameEngine::new(GameConfig::default());
        let legal = engine.legal_actions();

        let mut a = RandomPolicy::new(9);
        let mut b = RandomPolicy::new(9);
        for _ in 0..10 {
            assert_eq!(a.choose(&engine, &legal), b.choose(&engine, &legal));
        }
        assert_eq!(a.choose(&engine, &[]), None);
    }

    #[test]
    fn test_first_legal_policy() {
        let engine = GameEngine::new(GameConfig::default());
        let legal = engine.legal_actions();
        assert_eq!(FirstLegalPolicy.choose(&engine, &legal), Some(Action::flip(0)));
    }

    #[test]
    fn test_step_limit() {
        let mut engine = GameEngine::new(GameConfig::default());
        let report = play_out(&mut engine, &mut FirstLegalPolicy, 5);

        assert_eq!(report.steps, 5);
        assert_eq!(report.end, PlayoutEnd::StepLimit);
        assert_eq!(report.history.len(), 5);
        assert_eq!(report.end.result(), None);
    }

    #[test]
    fn test_no_legal_actions() {
        // Black's only piece is a general walled in by pawns it may not take.
        let board = Board::from_layout(
            "P C . . . . . .
             . . . . . . . .
             . . . . . . . P
             . . . . . . P k",
        )
        .unwrap();
        let state = GameState::new(board)
            .with_sides(SideAssignment::RedIs(PlayerId::FIRST))
            .with_current_player(PlayerId::SECOND);
        let config = GameConfig::default().with_enforce_ownership(true);
        let mut engine = GameEngine::from_state(config, state);

        let report = play_out(&mut engine, &mut FirstLegalPolicy, 100);
        assert_eq!(report.steps, 0);
        assert_eq!(report.end, PlayoutEnd::NoLegalActions);
        assert_eq!(report.end.result(), Some(GameResult::Draw));
    }

    #[test]
    fn test_random_game_terminates() {
        let mut engine = GameEngine::new(GameConfig::default().with_seed(11));
        let mut policy = RandomPolicy::new(11);
        let report = play_out(&mut engine, &mut policy, 100_000);

        assert_ne!(report.end, PlayoutEnd::StepLimit);
        assert_eq!(report.steps as usize, report.history.len());
    }
}
