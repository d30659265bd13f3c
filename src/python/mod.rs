//! Python bindings for the banqi engine.
//!
//! The surface mirrors a gym-style environment:
//!
//! ```python
//! import banqi
//!
//! env = banqi.DarkChessEnv(seed=7)
//! board, revealed = env.reset()
//! while True:
//!     action = env.get_legal_actions()[0]
//!     (board, revealed), reward, done, info = env.step(action)
//!     if done:
//!         print(info["winner"])  # 0, 1, or -1 for a draw
//!         break
//! ```
//!
//! `board` holds one letter per cell (`*` for empty) and `revealed` holds
//! `1` for face up, `0` for hidden and `-1` for empty.

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// banqi: Chinese Dark Chess rules engine.
#[pymodule]
fn banqi(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDarkChessEnv>()?;
    Ok(())
}
