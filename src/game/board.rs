use crate::error::BoardError;

use super::PlayerId;

/// Smallest board side that can contain a four-in-a-row.
pub const MIN_SIDE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(PlayerId),
}

impl Cell {
    /// The occupying player, if any.
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Taken(id) => Some(id),
        }
    }
}

/// A rectangular grid of cells with gravity-aware queries.
///
/// Row 0 is the top, row `rows - 1` the bottom; pieces settle bottom-up. The
/// board knows nothing about turns or winning. An occupied cell never changes
/// for the lifetime of the board instance, so each column's occupied cells are
/// always a contiguous run anchored at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Both sides must be at least [`MIN_SIDE`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < MIN_SIDE || cols < MIN_SIDE {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self::empty(rows, cols))
    }

    /// Build an all-empty board without dimension checks. The engine uses this
    /// on reset, where the dimensions were already validated at construction.
    pub(crate) fn empty(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position. Panics if the position is outside
    /// the grid; callers iterate within `0..rows()` and `0..cols()`.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
        self.cells[row * self.cols + col]
    }

    /// Find where a piece dropped into `col` would land: the lowest empty row,
    /// scanning from the bottom up. Returns `None` if the column is full or
    /// out of range. Pure query, no side effect.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.cell(row, col) == Cell::Empty)
    }

    /// Mark a cell as occupied by `player`. The caller is expected to have
    /// resolved `row` via [`lowest_empty_row`](Self::lowest_empty_row); this
    /// does not re-check gravity, only that the target exists and is empty.
    pub fn place(&mut self, row: usize, col: usize, player: PlayerId) -> Result<(), BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if self.cell(row, col) != Cell::Empty {
            return Err(BoardError::CellOccupied { row, col });
        }
        self.cells[row * self.cols + col] = Cell::Taken(player);
        Ok(())
    }

    /// Check if a column has no empty cell left. Out-of-range columns count
    /// as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PlayerId = PlayerId::new(0);
    const B: PlayerId = PlayerId::new(1);

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7).unwrap();
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 7);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.cell(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Board::new(3, 7),
            Err(BoardError::InvalidDimensions { rows: 3, cols: 7 })
        );
        assert_eq!(
            Board::new(6, 3),
            Err(BoardError::InvalidDimensions { rows: 6, cols: 3 })
        );
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_lowest_empty_row_scans_bottom_up() {
        let mut board = Board::new(6, 7).unwrap();
        assert_eq!(board.lowest_empty_row(3), Some(5));

        board.place(5, 3, A).unwrap();
        assert_eq!(board.lowest_empty_row(3), Some(4));

        board.place(4, 3, B).unwrap();
        assert_eq!(board.lowest_empty_row(3), Some(3));
    }

    #[test]
    fn test_lowest_empty_row_full_column() {
        let mut board = Board::new(6, 7).unwrap();
        for _ in 0..6 {
            let row = board.lowest_empty_row(0).unwrap();
            board.place(row, 0, A).unwrap();
        }
        assert_eq!(board.lowest_empty_row(0), None);
        assert!(board.is_column_full(0));
    }

    #[test]
    fn test_lowest_empty_row_out_of_range_column() {
        let board = Board::new(6, 7).unwrap();
        assert_eq!(board.lowest_empty_row(7), None);
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new(6, 7).unwrap();
        board.place(5, 2, A).unwrap();
        assert_eq!(
            board.place(5, 2, B),
            Err(BoardError::CellOccupied { row: 5, col: 2 })
        );
        // The original occupant is untouched.
        assert_eq!(board.cell(5, 2), Cell::Taken(A));
    }

    #[test]
    fn test_place_rejects_out_of_bounds() {
        let mut board = Board::new(6, 7).unwrap();
        assert_eq!(
            board.place(6, 0, A),
            Err(BoardError::OutOfBounds { row: 6, col: 0 })
        );
        assert_eq!(
            board.place(0, 7, A),
            Err(BoardError::OutOfBounds { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_gravity_keeps_columns_contiguous() {
        let mut board = Board::new(6, 7).unwrap();
        let drops = [2, 2, 4, 2, 4, 6, 2, 4];
        for (i, &col) in drops.iter().enumerate() {
            let id = if i % 2 == 0 { A } else { B };
            let row = board.lowest_empty_row(col).unwrap();
            board.place(row, col, id).unwrap();
        }

        // Every column: scanning top-down, once a piece appears, everything
        // below it is occupied too.
        for col in 0..board.cols() {
            let mut seen_piece = false;
            for row in 0..board.rows() {
                match board.cell(row, col) {
                    Cell::Taken(_) => seen_piece = true,
                    Cell::Empty => assert!(!seen_piece, "gap below a piece in column {col}"),
                }
            }
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(4, 4).unwrap();
        for col in 0..4 {
            for _ in 0..4 {
                let row = board.lowest_empty_row(col).unwrap();
                board.place(row, col, A).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_not_full_with_one_gap() {
        let mut board = Board::new(4, 4).unwrap();
        for col in 0..4 {
            let depth = if col == 3 { 3 } else { 4 };
            for _ in 0..depth {
                let row = board.lowest_empty_row(col).unwrap();
                board.place(row, col, B).unwrap();
            }
        }
        assert!(!board.is_full());
    }
}
