/*!
# Blockfall Engine

`blockfall_engine` implements the rules of a falling-block puzzle game:
piece geometry and rotation, grid occupancy and collision, line clearing
and scoring.

The engine is deliberately free of any rendering or input concerns; a
frontend drives it with elapsed time and discrete [`Input`]s and reads
the resulting state back out for display.

# Examples

```
use std::time::Duration;
use blockfall_engine::{Game, Input};

let mut game = Game::new(42);

// One tick: half a second has passed and the player tapped 'left' once.
// The piece falls one row and shifts one column, each only if the board
// allows it.
game.update(Duration::from_millis(500), &[Input::MoveLeft]);

// This is how a UI knows what to draw.
let _rows = game.board().rows();
let _score = game.score();
```
*/

#![warn(missing_docs)]

mod board;
mod game;
mod piece;

pub use board::Board;
pub use game::{Game, Input};
pub use piece::Piece;

/// Identifies what occupies a board cell: `0` is empty, `1..=7` is the
/// [`Shape`] whose locked piece filled it (shape index offset by one).
pub type Cell = u8;

/// A shape's orientation matrix: rows × columns of filled/empty flags.
///
/// Matrices are rectangular but not necessarily square (the I piece is
/// 1×4, the O piece 2×2), so rotation logic works on arbitrary
/// rectangles rather than a fixed bounding box.
pub type ShapeGrid = Vec<Vec<bool>>;

/// One of the seven tetromino shapes.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug)]
pub enum Shape {
    /// 'I'-piece, a 1×4 line; `▄▄▄▄`.
    I = 0,
    /// 'J'-piece; `█▄▄`.
    J,
    /// 'L'-piece; `▄▄█`.
    L,
    /// 'O'-piece, a 2×2 square; `██`.
    O,
    /// 'S'-piece; `▄█▀`.
    S,
    /// 'T'-piece; `▄█▄`.
    T,
    /// 'Z'-piece; `▀█▄`.
    Z,
}

impl Shape {
    /// All `Shape` enum variants in order.
    ///
    /// Note that `Shape::VARIANTS[s as usize] == s` always holds.
    pub const VARIANTS: [Self; 7] = {
        use Shape::*;
        [I, J, L, O, S, T, Z]
    };

    /// The shape's catalog orientation matrix.
    pub fn base_grid(self) -> ShapeGrid {
        match self {
            Shape::I => grid(&[[1, 1, 1, 1]]),
            Shape::J => grid(&[[1, 0, 0], [1, 1, 1]]),
            Shape::L => grid(&[[0, 0, 1], [1, 1, 1]]),
            Shape::O => grid(&[[1, 1], [1, 1]]),
            Shape::S => grid(&[[0, 1, 1], [1, 1, 0]]),
            Shape::T => grid(&[[0, 1, 0], [1, 1, 1]]),
            Shape::Z => grid(&[[1, 1, 0], [0, 1, 1]]),
        }
    }

    /// The value a locked piece of this shape writes into board cells.
    ///
    /// Offset by one so `0` stays reserved for empty cells.
    pub const fn cell_value(self) -> Cell {
        self as Cell + 1
    }
}

fn grid<const W: usize>(rows: &[[u8; W]]) -> ShapeGrid {
    rows.iter()
        .map(|row| row.iter().map(|&cell| cell != 0).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_order_matches_discriminants() {
        for (i, shape) in Shape::VARIANTS.into_iter().enumerate() {
            assert_eq!(shape as usize, i);
            assert_eq!(usize::from(shape.cell_value()), i + 1);
        }
    }

    #[test]
    fn catalog_grids_are_rectangular() {
        for shape in Shape::VARIANTS {
            let grid = shape.base_grid();
            assert!(!grid.is_empty());
            assert!(grid.iter().all(|row| row.len() == grid[0].len()));
        }
    }
}
