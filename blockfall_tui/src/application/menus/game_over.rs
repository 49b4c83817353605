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

use blockfall_engine::Game;

use crate::{
    application::{Application, Menu, MenuUpdate},
    scoreboard::{self, HighScoreTable},
};

const MAX_NAME_LEN: usize = 24;

impl<T: Write> Application<T> {
    pub(in crate::application) fn menu_game_over(
        &mut self,
        score: u32,
        submitted: &mut bool,
    ) -> io::Result<MenuUpdate> {
        if !*submitted {
            let Some(name) = self.enter_player_name(score)? else {
                return Ok(MenuUpdate::Push(Menu::Quit(
                    "exited during name entry".to_owned(),
                )));
            };
            let path = scoreboard::high_score_path();
            let mut table = HighScoreTable::load(&path);
            table.add(name, score);
            // Fire-and-forget; the in-memory table stays coherent for
            // the rest of the session even if the write fails.
            let _ = table.save(&path);
            *submitted = true;
        }
        let selection = vec![
            Menu::Game {
                game: Box::new(Game::from_entropy()),
            },
            Menu::HighScores,
            Menu::Credits,
            Menu::Quit("quit after game over".to_owned()),
        ];
        self.generic_menu(&format!("Game Over - Score {score}"), selection)
    }

    /// Modal name-entry loop, blocking until confirmed.
    ///
    /// Returns `None` on the quit signal. An empty (after trimming)
    /// name falls back to `"Player"`.
    fn enter_player_name(&mut self, score: u32) -> io::Result<Option<String>> {
        let mut name = String::new();
        loop {
            let w_main = Self::W_MAIN.into();
            let (x_main, y_main) = Self::fetch_main_xy();
            let y_selection = Self::H_MAIN / 5;
            self.term
                .queue(Clear(ClearType::All))?
                .queue(MoveTo(x_main, y_main + y_selection))?
                .queue(Print(format!(
                    "{:^w_main$}",
                    format!("-- Game Over -- Final score: {score} --")
                )))?
                .queue(MoveTo(x_main, y_main + y_selection + 2))?
                .queue(Print(format!("{:^w_main$}", "──────────────────────────")))?
                .queue(MoveTo(x_main, y_main + y_selection + 4))?
                .queue(Print(format!("{:^w_main$}", "Enter your name:")))?
                .queue(MoveTo(x_main, y_main + y_selection + 6))?
                .queue(Print(format!("{:^w_main$}", format!("[ {name}_ ]"))))?
                .queue(MoveTo(x_main, y_main + y_selection + 9))?
                .queue(PrintStyledContent(
                    format!("{:^w_main$}", "(Press Enter to confirm.)").italic(),
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
                }) => break Ok(None),
                // Confirm name.
                Event::Key(KeyEvent {
                    code: KeyCode::Enter,
                    kind: Press,
                    ..
                }) => {
                    let name = name.trim();
                    break Ok(Some(if name.is_empty() {
                        "Player".to_owned()
                    } else {
                        name.to_owned()
                    }));
                }
                Event::Key(KeyEvent {
                    code: KeyCode::Backspace,
                    kind: Press | Repeat,
                    ..
                }) => {
                    name.pop();
                }
                Event::Key(KeyEvent {
                    code: KeyCode::Char(chr),
                    kind: Press | Repeat,
                    ..
                }) => {
                    if name.len() < MAX_NAME_LEN {
                        name.push(chr);
                    }
                }
                // Other event: don't care.
                _ => {}
            }
        }
    }
}
