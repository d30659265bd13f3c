//! Core engine types: pieces, board, players, state, actions, RNG, configuration.
//!
//! Nothing in here knows the capture rules; those live in `rules`.

pub mod piece;
pub mod board;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use piece::{Piece, Rank, Side};
pub use board::{Between, Board, Cell, Neighbors, RevealState, BOARD_COLS, BOARD_ROWS, NUM_CELLS};
pub use player::{PlayerId, SideAssignment};
pub use rng::GameRng;
pub use config::{CannonEnumeration, GameConfig, DEFAULT_DRAW_THRESHOLD};
pub use action::{Action, ActionKind, ActionRecord};
pub use error::{IllegalActionError, LayoutError};
pub use state::{GameState, Observation};
