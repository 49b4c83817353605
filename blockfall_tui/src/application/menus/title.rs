use std::io::{self, Write};

use blockfall_engine::Game;

use crate::application::{Application, Menu, MenuUpdate};

impl<T: Write> Application<T> {
    pub(in crate::application) fn menu_title(&mut self) -> io::Result<MenuUpdate> {
        let selection = vec![
            Menu::Game {
                game: Box::new(Game::from_entropy()),
            },
            Menu::HighScores,
            Menu::Credits,
            Menu::Quit("quit from title menu".to_owned()),
        ];
        self.generic_menu("", selection)
    }
}
