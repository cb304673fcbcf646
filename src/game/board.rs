use std::fmt;

use super::axis::Axis;
use crate::config::BoardConfig;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// Square Connect-N board stored as a dense row-major grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(config: BoardConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid board config: {config:?}");
        let side = config.side_length();
        Board {
            config,
            cells: vec![Cell::Empty; side * side],
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn side_length(&self) -> usize {
        self.config.side_length()
    }

    pub fn connect_length(&self) -> usize {
        self.config.connect_length()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.side_length() + col
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `side_length - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.side_length() {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..self.side_length())
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Row a piece dropped into `col` would land in.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.side_length() {
            return None;
        }
        (0..self.side_length())
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        debug_assert_ne!(cell, Cell::Empty, "cannot drop an empty cell");
        if col >= self.side_length() {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self.next_open_row(col).ok_or(MoveError::ColumnFull(col))?;
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(row)
    }

    /// Place `cell` in `col`, run `f` on the resulting board, then take the
    /// piece back out. The board is identical before and after the call.
    pub fn with_piece<R>(
        &mut self,
        col: usize,
        cell: Cell,
        f: impl FnOnce(&Board, usize) -> R,
    ) -> Result<R, MoveError> {
        let row = self.drop_piece(col, cell)?;
        let result = f(self, row);
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Empty;
        Ok(result)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.side_length()).all(|col| self.is_column_full(col))
    }

    /// Cells of `row`, left to right.
    pub fn row(&self, row: usize) -> Vec<Cell> {
        (0..self.side_length()).map(|col| self.get(row, col)).collect()
    }

    /// Cells of `col`, bottom to top.
    pub fn column(&self, col: usize) -> Vec<Cell> {
        (0..self.side_length())
            .rev()
            .map(|row| self.get(row, col))
            .collect()
    }

    pub fn count_in_column(&self, col: usize, cell: Cell) -> usize {
        (0..self.side_length())
            .filter(|&row| self.get(row, col) == cell)
            .count()
    }

    /// `len` cells starting at (row, col) and stepping along `axis`, or
    /// `None` if the run does not fit on the board.
    pub fn line(&self, row: usize, col: usize, axis: Axis, len: usize) -> Option<Vec<Cell>> {
        let side = self.side_length();
        if len == 0 || row >= side || col >= side {
            return None;
        }
        axis.offset(row, col, len as isize - 1, side)?;
        Some(
            (0..len as isize)
                .filter_map(|i| axis.offset(row, col, i, side))
                .map(|(r, c)| self.get(r, c))
                .collect(),
        )
    }

    /// Every run of `connect_length` cells along every axis. Each window is
    /// produced exactly once, keyed by its start cell and axis.
    pub fn windows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        let side = self.side_length();
        let len = self.connect_length();
        Axis::ALL.into_iter().flat_map(move |axis| {
            (0..side).flat_map(move |row| {
                (0..side).filter_map(move |col| self.line(row, col, axis, len))
            })
        })
    }

    /// Length of the same-owner run through (row, col) along `axis`,
    /// including the cell itself. Zero for an empty cell.
    pub fn run_length(&self, row: usize, col: usize, axis: Axis) -> usize {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return 0;
        }
        let side = self.side_length();
        let mut count = 1;
        for direction in [1isize, -1] {
            let mut distance = direction;
            while let Some((r, c)) = axis.offset(row, col, distance, side) {
                if self.get(r, c) != cell {
                    break;
                }
                count += 1;
                distance += direction;
            }
        }
        count
    }

    /// Check if the last move at (row, col) resulted in a win
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        Axis::ALL
            .iter()
            .any(|&axis| self.run_length(row, col, axis) >= self.connect_length())
    }

    /// Build a board from text rows, top row first. `R` and `Y` are pieces,
    /// anything else is empty. Gravity is not checked.
    #[cfg(test)]
    pub(crate) fn from_rows(config: BoardConfig, rows: &[&str]) -> Self {
        let mut board = Board::new(config);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'R' => Cell::Red,
                    'Y' => Cell::Yellow,
                    _ => Cell::Empty,
                };
                let idx = board.index(row, col);
                board.cells[idx] = cell;
            }
        }
        board
    }

    /// Same position with every Red piece Yellow and vice versa.
    #[cfg(test)]
    pub(crate) fn with_players_swapped(&self) -> Self {
        let mut board = self.clone();
        for cell in &mut board.cells {
            *cell = match *cell {
                Cell::Red => Cell::Yellow,
                Cell::Yellow => Cell::Red,
                Cell::Empty => Cell::Empty,
            };
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side_length() {
            let line: String = self
                .row(row)
                .into_iter()
                .map(Cell::symbol)
                .flat_map(|c| [c, ' '])
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
