use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    event::{
        self, Event, KeyCode, KeyEvent,
        KeyEventKind::{Press, Repeat},
        KeyModifiers,
    },
    style::{Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::{
    application::{Application, Menu, MenuUpdate},
    scoreboard::{self, HighScoreTable},
};

impl<T: Write> Application<T> {
    pub(in crate::application) fn menu_high_scores(&mut self) -> io::Result<MenuUpdate> {
        let table = HighScoreTable::load(&scoreboard::high_score_path());
        loop {
            let w_main = Self::W_MAIN.into();
            let (x_main, y_main) = Self::fetch_main_xy();
            let y_selection = Self::H_MAIN / 5;
            self.term
                .queue(Clear(ClearType::All))?
                .queue(MoveTo(x_main, y_main + y_selection))?
                .queue(Print(format!("{:^w_main$}", "* High Scores *")))?
                .queue(MoveTo(x_main, y_main + y_selection + 2))?
                .queue(Print(format!("{:^w_main$}", "──────────────────────────")))?;
            if table.entries().is_empty() {
                self.term
                    .queue(MoveTo(x_main, y_main + y_selection + 5))?
                    .queue(Print(format!("{:^w_main$}", "No scores yet!")))?;
            } else {
                for (i, entry) in table.entries().iter().enumerate() {
                    self.term
                        .queue(MoveTo(
                            x_main,
                            y_main + y_selection + 4 + u16::try_from(i).unwrap(),
                        ))?
                        .queue(Print(format!(
                            "{:^w_main$}",
                            format!("{:>2}. {}: {}", i + 1, entry.name, entry.score)
                        )))?;
                }
            }
            self.term
                .queue(MoveTo(x_main, y_main + Self::H_MAIN - 2))?
                .queue(PrintStyledContent(
                    format!("{:^w_main$}", "(Press Esc to return.)").italic(),
                ))?;
            self.term.flush()?;
            // Wait for new input.
            match event::read()? {
                // Quit application.
                Event::Key(KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    kind: Press | Repeat,
                    state: _,
                }) => {
                    break Ok(MenuUpdate::Push(Menu::Quit(
                        "exited with ctrl-c".to_owned(),
                    )))
                }
                // Return to the invoking menu.
                Event::Key(KeyEvent {
                    code:
                        KeyCode::Esc
                        | KeyCode::Char('q')
                        | KeyCode::Backspace
                        | KeyCode::Enter,
                    kind: Press,
                    ..
                }) => break Ok(MenuUpdate::Pop),
                // Other event: don't care.
                _ => {}
            }
        }
    }
}
