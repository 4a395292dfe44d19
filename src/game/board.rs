pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Four board coordinates, ordered along the line's direction.
pub type WinLine = [(usize, usize); 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
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

    /// A column is open iff it exists and its topmost cell is still empty.
    pub fn is_valid_location(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Lowest empty row of a column, scanning from the bottom upward.
    /// `None` when the column is full.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Set an exact cell. The caller supplies an already-validated (row, col)
    /// from `is_valid_location`/`next_open_row`; no gravity check happens here.
    pub fn drop_piece(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert_eq!(self.cells[row][col], Cell::Empty, "cell already occupied");
        self.cells[row][col] = cell;
    }

    /// Validated drop: places `cell` at the gravity row of `col` and returns
    /// the row it landed in.
    pub fn drop_in_column(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        match self.next_open_row(col) {
            Some(row) => {
                self.drop_piece(row, col, cell);
                Ok(row)
            }
            None => Err(MoveError::ColumnFull),
        }
    }

    /// Open columns in ascending order.
    pub fn valid_locations(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_location(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_location(col))
    }

    /// First four-in-a-row held by `cell`, or `None`.
    ///
    /// Scan order is fixed: horizontal, vertical, down-right diagonal,
    /// up-right diagonal, each column-major. A board can contain several
    /// lines at once; the same one is reported every time.
    pub fn winning_line(&self, cell: Cell) -> Option<WinLine> {
        // Horizontal
        for col in 0..=COLS - 4 {
            for row in 0..ROWS {
                if (0..4).all(|i| self.cells[row][col + i] == cell) {
                    return Some([(row, col), (row, col + 1), (row, col + 2), (row, col + 3)]);
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - 4 {
                if (0..4).all(|i| self.cells[row + i][col] == cell) {
                    return Some([(row, col), (row + 1, col), (row + 2, col), (row + 3, col)]);
                }
            }
        }

        // Down-right diagonal
        for col in 0..=COLS - 4 {
            for row in 0..=ROWS - 4 {
                if (0..4).all(|i| self.cells[row + i][col + i] == cell) {
                    return Some([
                        (row, col),
                        (row + 1, col + 1),
                        (row + 2, col + 2),
                        (row + 3, col + 3),
                    ]);
                }
            }
        }

        // Up-right diagonal
        for col in 0..=COLS - 4 {
            for row in 3..ROWS {
                if (0..4).all(|i| self.cells[row - i][col + i] == cell) {
                    return Some([
                        (row, col),
                        (row - 1, col + 1),
                        (row - 2, col + 2),
                        (row - 3, col + 3),
                    ]);
                }
            }
        }

        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_validated_drop_sequence() {
        let mut board = Board::new();

        assert!(board.is_valid_location(3));
        let row = board.next_open_row(3).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        board.drop_piece(row, 3, Cell::Red);
        assert_eq!(board.get(5, 3), Cell::Red);

        // Second piece stacks on top of the first
        let row = board.next_open_row(3).unwrap();
        assert_eq!(row, 4);
        board.drop_piece(row, 3, Cell::Yellow);
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_drop_preserves_gravity() {
        let mut board = Board::new();
        for (i, &col) in [3, 3, 2, 6, 3, 0, 2].iter().enumerate() {
            let cell = if i % 2 == 0 { Cell::Red } else { Cell::Yellow };
            board.drop_in_column(col, cell).unwrap();
        }

        // No empty cell may sit below a piece in any column
        for col in 0..COLS {
            let mut seen_piece = false;
            for row in 0..ROWS {
                if board.get(row, col) != Cell::Empty {
                    seen_piece = true;
                } else {
                    assert!(!seen_piece, "empty cell below a piece in column {col}");
                }
            }
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.drop_in_column(0, Cell::Red).unwrap();
        }

        assert!(!board.is_valid_location(0));
        assert_eq!(board.next_open_row(0), None);
        assert_eq!(
            board.drop_in_column(0, Cell::Yellow),
            Err(MoveError::ColumnFull)
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert!(!board.is_valid_location(7));
        assert_eq!(
            board.drop_in_column(7, Cell::Red),
            Err(MoveError::InvalidColumn)
        );
    }

    #[test]
    fn test_valid_locations_matches_is_valid_location() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_in_column(2, Cell::Red).unwrap();
            board.drop_in_column(5, Cell::Yellow).unwrap();
        }

        let valid = board.valid_locations();
        assert_eq!(valid, vec![0, 1, 3, 4, 6]);
        for col in 0..COLS {
            assert_eq!(valid.contains(&col), board.is_valid_location(col));
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_in_column(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.valid_locations().is_empty());
    }

    #[test]
    fn test_horizontal_win_line() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_in_column(col, Cell::Red).unwrap();
        }
        assert_eq!(
            board.winning_line(Cell::Red),
            Some([(5, 0), (5, 1), (5, 2), (5, 3)])
        );
        assert_eq!(board.winning_line(Cell::Yellow), None);
    }

    #[test]
    fn test_vertical_win_line() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_in_column(3, Cell::Yellow).unwrap();
        }
        assert_eq!(
            board.winning_line(Cell::Yellow),
            Some([(2, 3), (3, 3), (4, 3), (5, 3)])
        );
    }

    #[test]
    fn test_diagonal_down_right_win_line() {
        let mut board = Board::new();
        // Red on a \ diagonal from (2, 3) down to (5, 6)
        board.drop_in_column(6, Cell::Red).unwrap();

        board.drop_in_column(5, Cell::Yellow).unwrap();
        board.drop_in_column(5, Cell::Red).unwrap();

        board.drop_in_column(4, Cell::Yellow).unwrap();
        board.drop_in_column(4, Cell::Yellow).unwrap();
        board.drop_in_column(4, Cell::Red).unwrap();

        board.drop_in_column(3, Cell::Yellow).unwrap();
        board.drop_in_column(3, Cell::Yellow).unwrap();
        board.drop_in_column(3, Cell::Yellow).unwrap();
        board.drop_in_column(3, Cell::Red).unwrap();

        assert_eq!(
            board.winning_line(Cell::Red),
            Some([(2, 3), (3, 4), (4, 5), (5, 6)])
        );
    }

    #[test]
    fn test_diagonal_up_right_win_line() {
        let mut board = Board::new();
        // Red on a / diagonal from (5, 0) up to (2, 3)
        board.drop_in_column(0, Cell::Red).unwrap();

        board.drop_in_column(1, Cell::Yellow).unwrap();
        board.drop_in_column(1, Cell::Red).unwrap();

        board.drop_in_column(2, Cell::Yellow).unwrap();
        board.drop_in_column(2, Cell::Yellow).unwrap();
        board.drop_in_column(2, Cell::Red).unwrap();

        board.drop_in_column(3, Cell::Yellow).unwrap();
        board.drop_in_column(3, Cell::Yellow).unwrap();
        board.drop_in_column(3, Cell::Yellow).unwrap();
        board.drop_in_column(3, Cell::Red).unwrap();

        assert_eq!(
            board.winning_line(Cell::Red),
            Some([(5, 0), (4, 1), (3, 2), (2, 3)])
        );
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_in_column(col, Cell::Red).unwrap();
        }
        assert_eq!(board.winning_line(Cell::Red), None);
    }

    #[test]
    fn test_scan_order_reports_horizontal_first() {
        let mut board = Board::new();
        // Red holds both a vertical line in column 0 and a horizontal line
        // on the bottom row; the horizontal scan runs first.
        for _ in 0..4 {
            board.drop_in_column(0, Cell::Red).unwrap();
        }
        for col in 3..7 {
            board.drop_in_column(col, Cell::Red).unwrap();
        }
        assert_eq!(
            board.winning_line(Cell::Red),
            Some([(5, 3), (5, 4), (5, 5), (5, 6)])
        );
    }

    #[test]
    fn test_copy_leaves_original_unchanged() {
        let mut board = Board::new();
        board.drop_in_column(3, Cell::Red).unwrap();

        let snapshot = board;
        let mut copy = board;
        copy.drop_in_column(3, Cell::Yellow).unwrap();

        assert_eq!(board, snapshot);
        assert_eq!(board.get(4, 3), Cell::Empty);
        assert_eq!(copy.get(4, 3), Cell::Yellow);
    }
}
