//! # banqi
//!
//! A rules engine for Chinese Dark Chess (Banqi), the 4×8 game played with
//! face-down xiangqi pieces.
//!
//! ## Design Principles
//!
//! 1. **One engine, one game**: [`GameEngine`] owns its board, RNG and
//!    counters. Nothing is shared between instances.
//!
//! 2. **Values out, never references**: every step returns an
//!    [`Observation`] snapshot; callers cannot alias engine storage.
//!
//! 3. **All-or-nothing actions**: an action is validated completely before
//!    any mutation, so a rejected action leaves the game untouched.
//!
//! ## Game loop
//!
//! A caller resets, then repeatedly asks for legal actions, picks one, and
//! applies it until `done`:
//!
//! ```
//! use banqi::{GameConfig, GameEngine};
//!
//! let mut engine = GameEngine::new(GameConfig::default().with_seed(1));
//! engine.reset();
//! loop {
//!     let legal = engine.legal_actions();
//!     let Some(&action) = legal.last() else { break };
//!     if engine.apply_action(action).unwrap().done {
//!         break;
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: Pieces, board, players, state, actions, RNG, configuration
//! - `rules`: Legality, enumeration, win/draw detection, the engine
//! - `policy`: Move-selection policies and the play-out loop
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod policy;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Piece, Rank, Side,
    Board, Cell, RevealState, BOARD_COLS, BOARD_ROWS, NUM_CELLS,
    PlayerId, SideAssignment,
    GameRng,
    CannonEnumeration, GameConfig,
    Action, ActionKind, ActionRecord,
    IllegalActionError, LayoutError,
    GameState, Observation,
};

pub use crate::rules::{GameEngine, GameResult, StepInfo, StepResult};

pub use crate::policy::{play_out, FirstLegalPolicy, MovePolicy, PlayoutEnd, PlayoutReport, RandomPolicy};
