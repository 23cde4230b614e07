use std::fmt;

use super::Player;
use crate::error::{BoardError, MoveError};

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;

/// Number of same-player cells in a winning run.
pub const RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// Player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }
}

/// Run directions as (row step, column step). Rows grow downward.
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal down-right
    (1, -1), // diagonal down-left
];

/// A `height` x `width` grid. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero; use [`Board::try_new`] for
    /// untrusted sizes.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(board) => board,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a new empty board, rejecting zero dimensions. A zero-sized
    /// board would count as full before the first move.
    pub fn try_new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyDimension { width, height });
        }

        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// The classic 7 x 6 board
    pub fn standard() -> Self {
        Self::new(WIDTH, HEIGHT)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Lowest empty row in `col`, or `Ok(None)` when the column is full.
    pub fn find_landing_row(&self, col: usize) -> Result<Option<usize>, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }

        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col] == Cell::Empty))
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        !matches!(self.find_landing_row(col), Ok(Some(_)))
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        match self.find_landing_row(col) {
            Ok(Some(row)) => self.height - 1 - row,
            Ok(None) => self.height,
            Err(_) => 0,
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub(crate) fn place(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col] = cell;
    }

    /// True if `player` owns a full run anywhere on the board.
    pub fn check_for_win(&self, player: Player) -> bool {
        self.winning_run(player).is_some()
    }

    /// First run of four owned by `player`. Anchors are scanned top-left to
    /// bottom-right, directions in the order horizontal, vertical,
    /// down-right, down-left.
    pub fn winning_run(&self, player: Player) -> Option<[(usize, usize); RUN_LENGTH]> {
        let target = player.to_cell();

        for row in 0..self.height {
            for col in 0..self.width {
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(run) = self.run_from(row, col, dr, dc) {
                        if run.iter().all(|&(r, c)| self.get(r, c) == Some(target)) {
                            return Some(run);
                        }
                    }
                }
            }
        }

        None
    }

    /// Coordinates of the run anchored at (row, col), or `None` if any of
    /// them falls off the grid.
    fn run_from(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> Option<[(usize, usize); RUN_LENGTH]> {
        let mut run = [(0, 0); RUN_LENGTH];
        for (step, slot) in run.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * step as isize)?;
            let c = col.checked_add_signed(dc * step as isize)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            *slot = (r, c);
        }
        Some(run)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = match self.cells[row * self.width + col] {
                    Cell::Empty => '.',
                    Cell::One => '1',
                    Cell::Two => '2',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
