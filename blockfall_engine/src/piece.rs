use crate::{Shape, ShapeGrid};

/// An active piece in play.
///
/// The position may transiently leave the board while a move attempt is
/// being validated; [`Board::is_valid_placement`](crate::Board::is_valid_placement)
/// rejects such states and the caller rolls the mutation back.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Piece {
    /// Which catalog shape this piece is; determines color and the cell
    /// value written on lock.
    pub shape: Shape,
    /// The current orientation matrix, derived from the catalog shape by
    /// zero or more clockwise rotations.
    pub grid: ShapeGrid,
    /// Column of the matrix' top-left corner on the board.
    pub x: i32,
    /// Row of the matrix' top-left corner on the board.
    pub y: i32,
}

impl Piece {
    /// Creates a piece of the given shape at its spawn position:
    /// horizontally centered on a board of the given width, at row `0`.
    pub fn spawn(shape: Shape, board_width: usize) -> Self {
        let grid = shape.base_grid();
        let x = (board_width / 2) as i32 - (grid[0].len() / 2) as i32;
        Piece { shape, grid, x, y: 0 }
    }

    /// Number of rows in the current orientation matrix.
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Number of columns in the current orientation matrix.
    pub fn columns(&self) -> usize {
        self.grid[0].len()
    }

    /// The orientation matrix rotated by 90° clockwise: the transpose
    /// with column order reversed.
    ///
    /// This is a pure query; position and current orientation are left
    /// untouched. Callers commit the result only after a validity check,
    /// and simply discard it otherwise (no wall kicks).
    pub fn rotated_clockwise(&self) -> ShapeGrid {
        let (rows, columns) = (self.rows(), self.columns());
        (0..columns)
            .map(|x| (0..rows).rev().map(|y| self.grid[y][x]).collect())
            .collect()
    }

    /// Board coordinates of every filled cell of the piece.
    pub fn tiles(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.grid.iter().enumerate().flat_map(move |(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &filled)| filled)
                .map(move |(dx, _)| (self.x + dx as i32, self.y + dy as i32))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_centered_at_top() {
        // O is 2 wide: 10/2 - 2/2 = 4. I is 4 wide: 10/2 - 4/2 = 3.
        let o = Piece::spawn(Shape::O, 10);
        assert_eq!((o.x, o.y), (4, 0));
        let i = Piece::spawn(Shape::I, 10);
        assert_eq!((i.x, i.y), (3, 0));
    }

    #[test]
    fn rotation_transposes_rectangles() {
        let mut piece = Piece::spawn(Shape::I, 10);
        assert_eq!((piece.rows(), piece.columns()), (1, 4));
        piece.grid = piece.rotated_clockwise();
        assert_eq!((piece.rows(), piece.columns()), (4, 1));
        assert!(piece.grid.iter().all(|row| row[0]));
    }

    #[test]
    fn rotating_j_clockwise_once() {
        let mut piece = Piece::spawn(Shape::J, 10);
        // █ ▄ ▄        rotates to  █ █
        // █ █ █                    █ ·
        //                          █ ·
        piece.grid = piece.rotated_clockwise();
        let expected = vec![
            vec![true, true],
            vec![true, false],
            vec![true, false],
        ];
        assert_eq!(piece.grid, expected);
    }

    #[test]
    fn four_rotations_are_the_identity() {
        for shape in Shape::VARIANTS {
            let mut piece = Piece::spawn(shape, 10);
            let original = piece.grid.clone();
            for _ in 0..4 {
                piece.grid = piece.rotated_clockwise();
            }
            assert_eq!(piece.grid, original, "{shape:?}");
        }
    }

    #[test]
    fn tiles_reflect_position_offset() {
        let mut piece = Piece::spawn(Shape::O, 10);
        piece.x = 2;
        piece.y = 5;
        let tiles: Vec<_> = piece.tiles().collect();
        assert_eq!(tiles, vec![(2, 5), (3, 5), (2, 6), (3, 6)]);
    }
}
