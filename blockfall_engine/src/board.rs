use std::collections::VecDeque;

use crate::{Cell, Piece};

/// The playing grid: a fixed-size occupancy map from `(row, column)` to
/// [`Cell`] values.
///
/// Rows are kept in a `VecDeque` so that clearing completed rows is a
/// plain remove-plus-`push_front`: everything above a cleared row shifts
/// down one and a fresh empty row appears at the top.
///
/// Invariants: every row has length `width`; every cell value is in
/// `0..=7`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    rows: VecDeque<Vec<Cell>>,
}

impl Board {
    /// Creates an empty board of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            rows: (0..height).map(|_| vec![0; width]).collect(),
        }
    }

    /// Board width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell value at the given coordinates.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// Iterator over the board rows, topmost first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Whether every filled cell of the piece lands inside the board on
    /// an empty cell.
    ///
    /// Out-of-bounds coordinates (including transiently negative ones
    /// during a move attempt) are a plain rejection, never an error.
    pub fn is_valid_placement(&self, piece: &Piece) -> bool {
        piece.tiles().all(|(x, y)| {
            (0..self.width as i32).contains(&x)
                && (0..self.height as i32).contains(&y)
                && self.rows[y as usize][x as usize] == 0
        })
    }

    /// Writes the piece's [`cell_value`](crate::Shape::cell_value) into
    /// every cell it covers, overwriting occupied cells.
    ///
    /// Precondition: every tile is in bounds. Overlap is allowed: a
    /// piece that spawns into the stack still locks there, and the
    /// top-row check afterwards ends the game.
    pub fn lock(&mut self, piece: &Piece) {
        debug_assert!(piece.tiles().all(|(x, y)| {
            (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y)
        }));
        let value = piece.shape.cell_value();
        for (x, y) in piece.tiles() {
            self.rows[y as usize][x as usize] = value;
        }
    }

    /// Removes every completed row (all cells non-zero), inserting the
    /// same number of empty rows at the top, and returns how many were
    /// removed.
    ///
    /// Surviving rows keep their relative order; board height is
    /// unchanged.
    pub fn clear_completed_rows(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| row.iter().any(|&cell| cell == 0));
        let cleared = before - self.rows.len();
        for _ in 0..cleared {
            self.rows.push_front(vec![0; self.width]);
        }
        cleared
    }

    /// The loss condition: any occupied cell in the top row.
    ///
    /// Checked at piece-transition time (after lock and clear), not
    /// every tick.
    pub fn is_top_row_occupied(&self) -> bool {
        self.rows[0].iter().any(|&cell| cell != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    fn fill_row(board: &mut Board, y: usize, value: Cell) {
        for x in 0..board.width {
            board.rows[y][x] = value;
        }
    }

    #[test]
    fn fresh_spawn_on_empty_board_is_valid() {
        let board = Board::new(10, 20);
        for shape in Shape::VARIANTS {
            assert!(board.is_valid_placement(&Piece::spawn(shape, 10)));
        }
    }

    #[test]
    fn placement_rejected_past_each_bound() {
        let board = Board::new(10, 20);
        let spawn = Piece::spawn(Shape::O, 10);

        let mut left = spawn.clone();
        left.x = -1;
        assert!(!board.is_valid_placement(&left));

        let mut right = spawn.clone();
        right.x = 9; // O is 2 wide, column 10 is out.
        assert!(!board.is_valid_placement(&right));

        let mut below = spawn.clone();
        below.y = 19; // O is 2 tall, row 20 is out.
        assert!(!board.is_valid_placement(&below));

        let mut above = spawn;
        above.y = -1;
        assert!(!board.is_valid_placement(&above));
    }

    #[test]
    fn placement_rejected_on_overlap() {
        let mut board = Board::new(10, 20);
        let mut piece = Piece::spawn(Shape::O, 10);
        piece.y = 10;
        board.rows[11][5] = Shape::T.cell_value();
        assert!(!board.is_valid_placement(&piece));
    }

    #[test]
    fn lock_writes_shape_cell_values() {
        let mut board = Board::new(10, 20);
        let mut piece = Piece::spawn(Shape::S, 10);
        piece.y = 18;
        board.lock(&piece);
        // S spawns at x=4: ` ██` over `██ ` relative to (4, 18).
        assert_eq!(board.cell(5, 18), Shape::S.cell_value());
        assert_eq!(board.cell(6, 18), Shape::S.cell_value());
        assert_eq!(board.cell(4, 19), Shape::S.cell_value());
        assert_eq!(board.cell(5, 19), Shape::S.cell_value());
        assert_eq!(board.cell(4, 18), 0);
    }

    #[test]
    fn lock_overwrites_occupied_cells() {
        let mut board = Board::new(10, 20);
        board.rows[1][4] = Shape::T.cell_value();
        // O spawns over (4..6, 0..2), on top of the occupied cell.
        board.lock(&Piece::spawn(Shape::O, 10));
        assert_eq!(board.cell(4, 1), Shape::O.cell_value());
        assert!(board.is_top_row_occupied());
    }

    #[test]
    fn clears_exactly_the_completed_rows() {
        let mut board = Board::new(4, 6);
        fill_row(&mut board, 2, 1);
        fill_row(&mut board, 4, 2);
        // A marker row that is full except for one cell must survive.
        fill_row(&mut board, 3, 3);
        board.rows[3][0] = 0;

        assert_eq!(board.clear_completed_rows(), 2);
        assert_eq!(board.height(), 6);
        assert_eq!(board.rows.len(), 6);
        // Two empty rows inserted on top; the marker row shifted down by
        // the one cleared row that was above it.
        assert!(board.rows().take(2).all(|row| row.iter().all(|&c| c == 0)));
        assert_eq!(board.cell(1, 4), 3);
        assert_eq!(board.cell(0, 4), 0);
    }

    #[test]
    fn clear_on_partially_filled_board_is_noop() {
        let mut board = Board::new(4, 6);
        board.rows[5][0] = 1;
        board.rows[5][2] = 1;
        let snapshot = board.clone();
        assert_eq!(board.clear_completed_rows(), 0);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn top_row_occupancy() {
        let mut board = Board::new(10, 20);
        assert!(!board.is_top_row_occupied());
        board.rows[0][7] = 5;
        assert!(board.is_top_row_occupied());
    }
}
