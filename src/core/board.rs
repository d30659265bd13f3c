//! Board representation: a 4×8 grid of cells addressed by `row * 8 + col`.
//!
//! ## Cells
//!
//! Every cell is in exactly one of three states:
//! - `Hidden(piece)`: face down, identity unknown to both players
//! - `Revealed(piece)`: face up
//! - `Empty`: vacated by a move or capture (never becomes hidden again)
//!
//! ## Layout strings
//!
//! Boards can be written as 32 whitespace-separated tokens, row by row:
//! `.` is empty, a piece letter (`K`, `p`, ...) is revealed, and `?` followed
//! by a letter (`?R`) is hidden. Used to set up literal positions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::LayoutError;
use super::piece::{Piece, Side};
use super::rng::GameRng;

/// Number of board rows.
pub const BOARD_ROWS: usize = 4;
/// Number of board columns.
pub const BOARD_COLS: usize = 8;
/// Total number of cells (32).
pub const NUM_CELLS: usize = BOARD_ROWS * BOARD_COLS;

/// Orthogonal neighbor indices; at most four.
pub type Neighbors = SmallVec<[usize; 4]>;

/// Cells strictly between two aligned cells; at most six on a row.
pub type Between = SmallVec<[usize; 6]>;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Hidden(Piece),
    Revealed(Piece),
    Empty,
}

impl Cell {
    /// Reveal state of this cell.
    #[must_use]
    pub fn state(self) -> RevealState {
        match self {
            Cell::Hidden(_) => RevealState::Hidden,
            Cell::Revealed(_) => RevealState::Revealed,
            Cell::Empty => RevealState::Empty,
        }
    }

    /// The occupying piece, hidden or not.
    #[must_use]
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Hidden(p) | Cell::Revealed(p) => Some(p),
            Cell::Empty => None,
        }
    }

    /// The occupying piece if it is face up.
    #[must_use]
    pub fn revealed(self) -> Option<Piece> {
        match self {
            Cell::Revealed(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_hidden(self) -> bool {
        matches!(self, Cell::Hidden(_))
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Per-cell reveal status, as exposed in observations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Revealed,
    Empty,
}

/// The 32-cell board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_CELLS],
        }
    }

    /// Shuffle the full piece set onto the board, every cell hidden.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut pieces = Piece::full_set();
        rng.shuffle(&mut pieces);

        let mut board = Self::empty();
        for (cell, piece) in board.cells.iter_mut().zip(pieces) {
            *cell = Cell::Hidden(piece);
        }
        board
    }

    /// Parse a layout string (see module docs).
    ///
    /// ```
    /// use banqi::core::{Board, Cell, Piece, Rank};
    ///
    /// let board = Board::from_layout(
    ///     "C . . R . . k .
    ///      ?P . . . . . . .
    ///      . . . . . . . .
    ///      . . . . . . . .",
    /// ).unwrap();
    /// assert_eq!(board.cell(0), Cell::Revealed(Piece::red(Rank::Cannon)));
    /// assert_eq!(board.cell(8), Cell::Hidden(Piece::red(Rank::Pawn)));
    /// ```
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let tokens: Vec<&str> = layout.split_whitespace().collect();
        if tokens.len() != NUM_CELLS {
            return Err(LayoutError::CellCount {
                expected: NUM_CELLS,
                found: tokens.len(),
            });
        }

        let mut board = Self::empty();
        for (index, token) in tokens.into_iter().enumerate() {
            board.cells[index] = parse_token(token).ok_or_else(|| LayoutError::BadToken {
                index,
                token: token.to_string(),
            })?;
        }
        Ok(board)
    }

    /// Cell contents at `index`.
    ///
    /// # Panics
    /// Panics if `index >= NUM_CELLS`.
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Overwrite a cell.
    pub fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    /// Check an index is on the board.
    #[must_use]
    pub const fn in_bounds(index: usize) -> bool {
        index < NUM_CELLS
    }

    /// `(row, col)` of an index.
    #[must_use]
    pub const fn coords(index: usize) -> (usize, usize) {
        (index / BOARD_COLS, index % BOARD_COLS)
    }

    /// Index of `(row, col)`.
    #[must_use]
    pub const fn index(row: usize, col: usize) -> usize {
        row * BOARD_COLS + col
    }

    /// Orthogonal neighbors in up, down, left, right order.
    #[must_use]
    pub fn neighbors(index: usize) -> Neighbors {
        let (row, col) = Self::coords(index);
        let mut out = Neighbors::new();
        if row > 0 {
            out.push(Self::index(row - 1, col));
        }
        if row + 1 < BOARD_ROWS {
            out.push(Self::index(row + 1, col));
        }
        if col > 0 {
            out.push(Self::index(row, col - 1));
        }
        if col + 1 < BOARD_COLS {
            out.push(Self::index(row, col + 1));
        }
        out
    }

    /// Check two cells are orthogonally adjacent.
    #[must_use]
    pub fn are_adjacent(a: usize, b: usize) -> bool {
        Self::neighbors(a).contains(&b)
    }

    /// Check two distinct cells share a row or a column.
    #[must_use]
    pub fn are_aligned(a: usize, b: usize) -> bool {
        let (ra, ca) = Self::coords(a);
        let (rb, cb) = Self::coords(b);
        a != b && (ra == rb || ca == cb)
    }

    /// Every other cell in the same row or column, row first.
    pub fn line_cells(index: usize) -> impl Iterator<Item = usize> {
        let (row, col) = Self::coords(index);
        let across = (0..BOARD_COLS).map(move |c| Self::index(row, c));
        let down = (0..BOARD_ROWS).map(move |r| Self::index(r, col));
        across.chain(down).filter(move |&i| i != index)
    }

    /// Cells strictly between two aligned cells, walking from `a` to `b`.
    ///
    /// Returns `None` when the cells do not share a row or column.
    #[must_use]
    pub fn between(a: usize, b: usize) -> Option<Between> {
        if !Self::are_aligned(a, b) {
            return None;
        }
        let (ra, ca) = Self::coords(a);
        let (rb, cb) = Self::coords(b);

        let out: Between = if ra == rb {
            if ca < cb {
                (ca + 1..cb).map(|c| Self::index(ra, c)).collect()
            } else {
                (cb + 1..ca).rev().map(|c| Self::index(ra, c)).collect()
            }
        } else if ra < rb {
            (ra + 1..rb).map(|r| Self::index(r, ca)).collect()
        } else {
            (rb + 1..ra).rev().map(|r| Self::index(r, ca)).collect()
        };
        Some(out)
    }

    /// Number of face-down cells.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_hidden()).count()
    }

    /// Number of face-up pieces of a color.
    #[must_use]
    pub fn revealed_count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter_map(|c| c.revealed())
            .filter(|p| p.side == side)
            .count()
    }

    /// Reveal states in index order.
    #[must_use]
    pub fn reveal_states(&self) -> [RevealState; NUM_CELLS] {
        self.cells.map(Cell::state)
    }
}

fn parse_token(token: &str) -> Option<Cell> {
    let mut chars = token.chars();
    match (chars.next()?, chars.next(), chars.next()) {
        ('.', None, _) => Some(Cell::Empty),
        ('?', Some(c), None) => Piece::from_letter(c).map(Cell::Hidden),
        (c, None, _) => Piece::from_letter(c).map(Cell::Revealed),
        _ => None,
    }
}

/// Text grid: revealed pieces by letter, `?` for hidden, `.` for empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(BOARD_COLS) {
            for cell in row {
                match cell {
                    Cell::Revealed(p) => write!(f, "{:>2} ", p.letter())?,
                    Cell::Hidden(_) => write!(f, " ? ")?,
                    Cell::Empty => write!(f, " . ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
