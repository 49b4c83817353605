use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    style::{Color, Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use blockfall_engine::{Cell, Game, Piece, Shape};

use crate::application::Application;

/// Draws one frame of a running game to the application terminal.
///
/// The engine never touches the display; whatever knows how to paint
/// implements this and is handed into the game screen explicitly.
pub trait Renderer {
    fn render<T: Write>(&mut self, app: &mut Application<T>, game: &Game) -> io::Result<()>;
}

/// Straightforward full-redraw renderer: bordered well, locked tiles,
/// active piece, score and next-piece preview.
#[derive(Clone, Copy, Default, Debug)]
pub struct BoardRenderer;

/// Tile color of a shape, matching the classic palette.
pub fn shape_color(shape: Shape) -> Color {
    match shape {
        Shape::I => Color::Cyan,
        Shape::J => Color::Blue,
        Shape::L => Color::DarkYellow,
        Shape::O => Color::Yellow,
        Shape::S => Color::Green,
        Shape::T => Color::Magenta,
        Shape::Z => Color::Red,
    }
}

/// Tile color of a locked board cell, `None` for empty cells.
pub fn cell_color(cell: Cell) -> Option<Color> {
    let index = usize::from(cell).checked_sub(1)?;
    Shape::VARIANTS.get(index).copied().map(shape_color)
}

impl Renderer for BoardRenderer {
    fn render<T: Write>(&mut self, app: &mut Application<T>, game: &Game) -> io::Result<()> {
        let (x_main, y_main) = Application::<T>::fetch_main_xy();
        let board = game.board();
        let w_well = 2 * board.width();
        // Well border, centered-ish with a side panel to its right.
        let x_board = x_main + 20;
        let y_board = y_main + 1;
        let x_panel = x_board + u16::try_from(w_well).unwrap() + 6;

        app.term
            .queue(Clear(ClearType::All))?
            .queue(MoveTo(x_board, y_board))?
            .queue(Print(format!("╔{}╗", "═".repeat(w_well))))?;
        for (y, row) in board.rows().enumerate() {
            app.term
                .queue(MoveTo(x_board, y_board + 1 + u16::try_from(y).unwrap()))?
                .queue(Print("║"))?;
            for &cell in row {
                match cell_color(cell) {
                    Some(color) => app.term.queue(PrintStyledContent("██".with(color)))?,
                    None => app.term.queue(PrintStyledContent(" ·".dark_grey()))?,
                };
            }
            app.term.queue(Print("║"))?;
        }
        app.term
            .queue(MoveTo(
                x_board,
                y_board + 1 + u16::try_from(board.height()).unwrap(),
            ))?
            .queue(Print(format!("╚{}╝", "═".repeat(w_well))))?;

        draw_piece(app, game.current_piece(), x_board + 1, y_board + 1)?;

        app.term
            .queue(MoveTo(x_panel, y_board + 1))?
            .queue(Print(format!("Score: {}", game.score())))?
            .queue(MoveTo(x_panel, y_board + 3))?
            .queue(Print("Next:"))?;
        draw_preview(app, game.next_piece(), x_panel, y_board + 5)?;
        app.term
            .queue(MoveTo(x_panel, y_board + 12))?
            .queue(PrintStyledContent("[←|→] move".italic()))?
            .queue(MoveTo(x_panel, y_board + 13))?
            .queue(PrintStyledContent("[↓] soft drop".italic()))?
            .queue(MoveTo(x_panel, y_board + 14))?
            .queue(PrintStyledContent("[↑] rotate".italic()))?
            .queue(MoveTo(x_panel, y_board + 15))?
            .queue(PrintStyledContent("[Esc] forfeit".italic()))?;

        app.term.flush()
    }
}

/// Draws the active piece over the well interior starting at
/// `(x_origin, y_origin)`.
fn draw_piece<T: Write>(
    app: &mut Application<T>,
    piece: &Piece,
    x_origin: u16,
    y_origin: u16,
) -> io::Result<()> {
    let color = shape_color(piece.shape);
    for (x, y) in piece.tiles() {
        app.term
            .queue(MoveTo(
                x_origin + 2 * u16::try_from(x).unwrap(),
                y_origin + u16::try_from(y).unwrap(),
            ))?
            .queue(PrintStyledContent("██".with(color)))?;
    }
    Ok(())
}

/// Draws a piece's bare orientation matrix, ignoring its board position.
fn draw_preview<T: Write>(
    app: &mut Application<T>,
    piece: &Piece,
    x_origin: u16,
    y_origin: u16,
) -> io::Result<()> {
    let color = shape_color(piece.shape);
    for (y, row) in piece.grid.iter().enumerate() {
        app.term
            .queue(MoveTo(x_origin, y_origin + u16::try_from(y).unwrap()))?;
        for &filled in row {
            if filled {
                app.term.queue(PrintStyledContent("██".with(color)))?;
            } else {
                app.term.queue(Print("  "))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locked_cell_value_has_a_color() {
        assert_eq!(cell_color(0), None);
        for shape in Shape::VARIANTS {
            assert_eq!(cell_color(shape.cell_value()), Some(shape_color(shape)));
        }
        assert_eq!(cell_color(8), None);
    }
}
