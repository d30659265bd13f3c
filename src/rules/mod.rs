//! Banqi rules: legality, action enumeration, results, and the engine that
//! ties them together.
//!
//! Callers normally only touch [`GameEngine`]; the free functions are
//! exposed for policies that want to probe positions without an engine.

pub mod legality;
pub mod movegen;
pub mod outcome;
pub mod engine;

pub use legality::{can_cannon_capture, can_normal_capture, cannon_screens, check_move, is_legal_move};
pub use movegen::legal_actions;
pub use outcome::{check_winner, GameResult};
pub use engine::{GameEngine, StepInfo, StepResult};
