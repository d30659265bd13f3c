//! The game engine: owns one game and applies actions to it.
//!
//! ## Control flow
//!
//! ```
//! use banqi::{GameConfig, GameEngine};
//!
//! let mut engine = GameEngine::new(GameConfig::default().with_seed(7));
//! let first = engine.legal_actions()[0];
//! let step = engine.apply_action(first).unwrap();
//! assert!(!step.done);
//! ```
//!
//! An action either applies completely (board, side assignment, turn,
//! progress counter, result) or is rejected with no state change.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{
    Action, ActionKind, ActionRecord, Board, Cell, GameConfig, GameRng, GameState, IllegalActionError, Observation,
    PlayerId, Side, SideAssignment,
};

use super::legality::{check_move, is_legal_move};
use super::movegen::legal_actions;
use super::outcome::{check_winner, GameResult};

/// Extra information returned with a step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    /// Set once the game is over: a winner or a draw.
    pub winner: Option<GameResult>,
}

/// Outcome of a successfully applied action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// State after the action.
    pub observation: Observation,

    /// Reward signal; see [`GameEngine::apply_action`].
    pub reward: f64,

    /// Whether the game has ended.
    pub done: bool,

    /// Terminal details.
    pub info: StepInfo,

    /// What the action did.
    pub kind: ActionKind,
}

/// A single Banqi game.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
    state: GameState,
    result: Option<GameResult>,
}

impl GameEngine {
    /// Create an engine and deal the opening board.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let state = GameState::new(Board::shuffled(&mut rng));
        Self {
            config,
            rng,
            state,
            result: None,
        }
    }

    /// Start from an arbitrary position.
    ///
    /// The position is checked for a result immediately, so a finished
    /// position rejects every action.
    #[must_use]
    pub fn from_state(config: GameConfig, state: GameState) -> Self {
        let result = check_winner(&state, config.draw_threshold);
        Self {
            rng: GameRng::new(config.seed),
            config,
            state,
            result,
        }
    }

    /// Reshuffle and hide all 32 pieces, clear the side assignment, give
    /// player 0 the move and zero the progress counter.
    ///
    /// Successive resets draw from the same seeded stream.
    #[instrument(skip(self), fields(seed = self.rng.seed()))]
    pub fn reset(&mut self) -> Observation {
        self.state = GameState::new(Board::shuffled(&mut self.rng));
        self.result = None;
        debug!("board dealt");
        self.state.observation()
    }

    /// Reseed the shuffle RNG, then [`reset`](Self::reset).
    pub fn reset_with_seed(&mut self, seed: u64) -> Observation {
        self.config.seed = seed;
        self.rng = GameRng::new(seed);
        self.reset()
    }

    /// Apply a flip (`src == dst`) or a move.
    ///
    /// The turn always passes afterwards. If the game is not over the
    /// reward is 1 for a capture and 0 otherwise. If it is over, the reward
    /// is +1 when the player now to move is the winner and -1 otherwise
    /// (including draws), and `info.winner` carries the result.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn apply_action(&mut self, action: impl Into<Action> + std::fmt::Debug) -> Result<StepResult, IllegalActionError> {
        let action = action.into();
        let kind = self.validate(action).inspect_err(|err| debug!(%err, "rejected"))?;

        let player = self.state.current_player;
        let board = &mut self.state.board;
        let mut reward = 0.0;
        match kind {
            ActionKind::Flip(piece) => {
                board.set(action.src, Cell::Revealed(piece));
                if !self.state.sides.is_assigned() {
                    self.state.sides = SideAssignment::from_first_flip(player, piece.side);
                    debug!(red = %self.state.sides.player_for(Side::Red), "sides assigned");
                }
                self.state.progress = 0;
            }
            ActionKind::Move(piece) => {
                board.set(action.dst, Cell::Revealed(piece));
                board.set(action.src, Cell::Empty);
                self.state.progress += 1;
            }
            ActionKind::Capture { attacker, .. } => {
                board.set(action.dst, Cell::Revealed(attacker));
                board.set(action.src, Cell::Empty);
                self.state.progress = 0;
                reward = 1.0;
            }
        }

        let ply = self.state.ply();
        self.state.record_action(ActionRecord::new(player, action, kind, ply));
        self.state.pass_turn();
        debug!(?kind, progress = self.state.progress, "applied");

        self.result = check_winner(&self.state, self.config.draw_threshold);
        let mut info = StepInfo::default();
        if let Some(result) = self.result {
            reward = if result.is_winner(self.state.current_player) { 1.0 } else { -1.0 };
            info.winner = Some(result);
            info!(%result, ply = self.state.ply(), "game over");
        }

        Ok(StepResult {
            observation: self.state.observation(),
            reward,
            done: self.result.is_some(),
            info,
            kind,
        })
    }

    /// Check an action against every rule without applying it.
    pub fn validate(&self, action: Action) -> Result<ActionKind, IllegalActionError> {
        if self.result.is_some() {
            return Err(IllegalActionError::GameOver);
        }
        for index in [action.src, action.dst] {
            if !Board::in_bounds(index) {
                return Err(IllegalActionError::OutOfBounds { index });
            }
        }

        if action.is_flip() {
            return match self.state.board.cell(action.src) {
                Cell::Hidden(piece) => Ok(ActionKind::Flip(piece)),
                _ => Err(IllegalActionError::NotHidden { index: action.src }),
            };
        }

        let kind = check_move(&self.state.board, action.src, action.dst)?;
        if self.config.enforce_ownership {
            if let Some(side) = self.state.sides.side_of(self.state.current_player) {
                let piece = match kind {
                    ActionKind::Move(p) | ActionKind::Flip(p) => p,
                    ActionKind::Capture { attacker, .. } => attacker,
                };
                if piece.side != side {
                    return Err(IllegalActionError::NotYourPiece {
                        index: action.src,
                        piece,
                    });
                }
            }
        }
        Ok(kind)
    }

    /// Every action [`apply_action`](Self::apply_action) would accept,
    /// in board scan order. Empty once the game is over.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.result.is_some() {
            return Vec::new();
        }
        let mover = if self.config.enforce_ownership {
            self.state.sides.side_of(self.state.current_player)
        } else {
            None
        };
        legal_actions(&self.state.board, self.config.cannon_enumeration, mover)
    }

    /// Legality predicate for a move between two in-bounds cells.
    #[must_use]
    pub fn is_legal_move(&self, src: usize, dst: usize) -> bool {
        Board::in_bounds(src) && Board::in_bounds(dst) && is_legal_move(&self.state.board, src, dst)
    }

    /// Text dump of the board.
    #[must_use]
    pub fn render(&self) -> String {
        self.state.board.to_string()
    }

    /// Value snapshot of the current state.
    #[must_use]
    pub fn observation(&self) -> Observation {
        self.state.observation()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    /// Result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.result.is_some()
    }
}
