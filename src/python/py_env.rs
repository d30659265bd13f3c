//! Environment bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{Action, CannonEnumeration, GameConfig, Observation, RevealState, Side, BOARD_COLS, BOARD_ROWS};
use crate::rules::GameEngine;

/// `(board letters, reveal codes)`, one entry per cell.
pub type PyObservation = (Vec<String>, Vec<i8>);

fn to_py_observation(obs: &Observation) -> PyObservation {
    let board = obs
        .pieces
        .iter()
        .map(|p| p.map_or_else(|| "*".to_string(), |p| p.letter().to_string()))
        .collect();
    let revealed = obs
        .reveal
        .iter()
        .map(|s| match s {
            RevealState::Revealed => 1,
            RevealState::Hidden => 0,
            RevealState::Empty => -1,
        })
        .collect();
    (board, revealed)
}

/// Python wrapper for GameEngine.
#[pyclass(name = "DarkChessEnv")]
pub struct PyDarkChessEnv {
    engine: GameEngine,
}

#[pymethods]
impl PyDarkChessEnv {
    /// Create a new environment and deal the opening board.
    ///
    /// # Arguments
    /// - seed: RNG seed for the shuffle
    /// - draw_threshold: actions without flip or capture before a draw
    /// - full_line_cannons: list long-range cannon captures in legal actions
    /// - enforce_ownership: only let players move their own color
    #[new]
    #[pyo3(signature = (
        seed = 42,
        draw_threshold = 50,
        full_line_cannons = true,
        enforce_ownership = false
    ))]
    fn new(seed: u64, draw_threshold: u32, full_line_cannons: bool, enforce_ownership: bool) -> Self {
        let cannons = if full_line_cannons {
            CannonEnumeration::FullLines
        } else {
            CannonEnumeration::Adjacent
        };
        let config = GameConfig::default()
            .with_seed(seed)
            .with_draw_threshold(draw_threshold)
            .with_cannon_enumeration(cannons)
            .with_enforce_ownership(enforce_ownership);
        Self {
            engine: GameEngine::new(config),
        }
    }

    /// Reshuffle and start over.
    #[pyo3(signature = (seed = None))]
    fn reset(&mut self, seed: Option<u64>) -> PyObservation {
        let obs = match seed {
            Some(seed) => self.engine.reset_with_seed(seed),
            None => self.engine.reset(),
        };
        to_py_observation(&obs)
    }

    /// Apply `(src, dst)`. Raises `ValueError` if illegal.
    ///
    /// Returns `(observation, reward, done, info)`; `info` has a `winner`
    /// key once the game is over.
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: (usize, usize),
    ) -> PyResult<(PyObservation, f64, bool, Bound<'py, PyDict>)> {
        let step = self
            .engine
            .apply_action(Action::from(action))
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        let info = PyDict::new_bound(py);
        if let Some(result) = step.info.winner {
            info.set_item("winner", result.code())?;
        }
        Ok((to_py_observation(&step.observation), step.reward, step.done, info))
    }

    /// Legal `(src, dst)` pairs for the current position.
    fn get_legal_actions(&self) -> Vec<(usize, usize)> {
        self.engine
            .legal_actions()
            .into_iter()
            .map(|a| (a.src, a.dst))
            .collect()
    }

    /// Text dump of the board.
    fn render(&self) -> String {
        self.engine.render()
    }

    /// Player to move.
    #[getter]
    fn current_player(&self) -> u8 {
        self.engine.current_player().0
    }

    /// Player holding red, or None before the first flip.
    #[getter]
    fn red_player(&self) -> Option<u8> {
        let sides = self.engine.state().sides;
        sides.is_assigned().then(|| sides.player_for(Side::Red).0)
    }

    /// `(rows, cols)`.
    #[getter]
    fn board_size(&self) -> (usize, usize) {
        (BOARD_ROWS, BOARD_COLS)
    }

    fn __repr__(&self) -> String {
        let status = match self.engine.result() {
            Some(result) => result.to_string(),
            None => "ongoing".to_string(),
        };
        format!(
            "DarkChessEnv(ply={}, to_move={}, status={})",
            self.engine.state().ply(),
            self.engine.current_player().0,
            status
        )
    }
}
