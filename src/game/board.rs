use super::Side;
use crate::error::EngineError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Side),
}

impl Cell {
    /// The side occupying this cell, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The 6x7 grid. Row 0 is the top, row `ROWS - 1` the bottom.
///
/// Game code only writes through [`Board::drop_piece`] or a `landing_row` +
/// `place` pair, so every column stays a solid stack growing up from the
/// bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        !self.cells[0][col].is_empty()
    }

    /// The row a disc dropped into `col` would settle in.
    pub fn landing_row(&self, col: usize) -> Result<usize, EngineError> {
        if col >= COLS {
            return Err(EngineError::InvalidColumn { col });
        }

        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col].is_empty())
            .ok_or(EngineError::ColumnFull { col })
    }

    /// Write `side` into an empty cell.
    pub fn place(&mut self, row: usize, col: usize, side: Side) {
        debug_assert!(
            self.cells[row][col].is_empty(),
            "place on occupied cell ({row}, {col})"
        );
        self.cells[row][col] = Cell::Occupied(side);
    }

    /// Reset a cell to empty. Only undo should need this.
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, side: Side) -> Result<usize, EngineError> {
        let row = self.landing_row(col)?;
        self.place(row, col, side);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a disc, in ascending order
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| !self.is_column_full(col))
    }

    /// Number of occupied cells
    #[cfg(test)]
    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Left-right reflection of this board.
    pub fn mirrored(&self) -> Board {
        let mut mirrored = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                mirrored.cells[row][COLS - 1 - col] = self.cells[row][col];
            }
        }
        mirrored
    }

    /// True when every column is a contiguous stack resting on the bottom row.
    pub fn respects_gravity(&self) -> bool {
        (0..COLS).all(|col| {
            let mut seen_empty = false;
            for row in (0..ROWS).rev() {
                match self.cells[row][col] {
                    Cell::Empty => seen_empty = true,
                    Cell::Occupied(_) if seen_empty => return false,
                    Cell::Occupied(_) => {}
                }
            }
            true
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
