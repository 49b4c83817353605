mod menus;

use std::io::{self, Write};

use crossterm::{cursor, style, terminal, ExecutableCommand};

use blockfall_engine::Game;

/// An open menu screen.
///
/// The option set of each selection menu is a plain `Vec<Menu>`, so
/// screens are free to offer three, four or more entries.
#[derive(Debug)]
enum Menu {
    Title,
    Game {
        game: Box<Game>,
    },
    GameOver {
        score: u32,
        /// Whether the score has already been submitted to the
        /// high-score table; name entry runs only once per round even
        /// though this menu is re-entered whenever a sub-screen pops.
        submitted: bool,
    },
    HighScores,
    Credits,
    Quit(String),
}

impl std::fmt::Display for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Menu::Title => "Title Screen",
            Menu::Game { .. } => "Play",
            Menu::GameOver { .. } => "Game Over",
            Menu::HighScores => "High Scores",
            Menu::Credits => "Credits",
            Menu::Quit(_) => "Quit",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
enum MenuUpdate {
    Pop,
    Push(Menu),
}

/// Terminal application handle: owns the output terminal and drives the
/// menu state machine.
#[derive(Debug)]
pub struct Application<T: Write> {
    pub term: T,
}

impl<T: Write> Drop for Application<T> {
    fn drop(&mut self) {
        // Console epilogue: de-initialization.
        let _ = terminal::disable_raw_mode();
        let _ = self.term.execute(style::ResetColor);
        let _ = self.term.execute(cursor::Show);
        let _ = self.term.execute(terminal::LeaveAlternateScreen);
    }
}

impl<T: Write> Application<T> {
    pub const W_MAIN: u16 = 80;
    pub const H_MAIN: u16 = 24;

    pub fn new(mut term: T) -> Self {
        // Console prologue: initialization.
        let _ = term.execute(terminal::EnterAlternateScreen);
        let _ = term.execute(terminal::SetTitle("blockfall"));
        let _ = term.execute(cursor::Hide);
        let _ = terminal::enable_raw_mode();
        Self { term }
    }

    /// Top-left corner at which to draw the `W_MAIN`×`H_MAIN` screen,
    /// centered in the console.
    pub(crate) fn fetch_main_xy() -> (u16, u16) {
        let (w_console, h_console) = terminal::size().unwrap_or((0, 0));
        (
            w_console.saturating_sub(Self::W_MAIN) / 2,
            h_console.saturating_sub(Self::H_MAIN) / 2,
        )
    }

    /// Main menu loop: an explicit stack of screens instead of menus
    /// re-invoking each other, so repeated navigation cannot grow the
    /// call stack.
    pub fn run(&mut self) -> io::Result<String> {
        let mut menu_stack = vec![Menu::Title];
        let msg = loop {
            // Retrieve active menu, stop application if stack is empty.
            let Some(screen) = menu_stack.last_mut() else {
                break String::from("all menus exited");
            };
            // Open the menu screen, then store what it returns.
            let menu_update = match screen {
                Menu::Title => self.menu_title(),
                Menu::Game { game } => self.menu_game(game),
                Menu::GameOver { score, submitted } => {
                    let score = *score;
                    self.menu_game_over(score, submitted)
                }
                Menu::HighScores => self.menu_high_scores(),
                Menu::Credits => self.menu_credits(),
                Menu::Quit(string) => break string.clone(),
            }?;
            // Change the screen session depending on the response.
            match menu_update {
                MenuUpdate::Pop => {
                    if menu_stack.len() > 1 {
                        menu_stack.pop();
                    }
                }
                MenuUpdate::Push(menu) => {
                    if matches!(
                        menu,
                        Menu::Title | Menu::Game { .. } | Menu::GameOver { .. }
                    ) {
                        menu_stack.clear();
                    }
                    menu_stack.push(menu);
                }
            }
        };
        Ok(msg)
    }
}
