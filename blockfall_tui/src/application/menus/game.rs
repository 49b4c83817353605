use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent,
    KeyEventKind::{Press, Repeat},
    KeyModifiers,
};

use blockfall_engine::{Game, Input};

use crate::{
    application::{Application, Menu, MenuUpdate},
    game_renderer::{BoardRenderer, Renderer},
};

/// How long a frame idles at most before redrawing.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

impl<T: Write> Application<T> {
    pub(in crate::application) fn menu_game(&mut self, game: &mut Game) -> io::Result<MenuUpdate> {
        let mut renderer = BoardRenderer::default();
        let mut last_tick = Instant::now();
        loop {
            if game.is_over() {
                break Ok(MenuUpdate::Push(Menu::GameOver {
                    score: game.score(),
                    submitted: false,
                }));
            }

            // Drain the inputs queued since the last tick, in order.
            let mut inputs = Vec::new();
            while event::poll(Duration::ZERO)? {
                match event::read()? {
                    // Quit application.
                    Event::Key(KeyEvent {
                        code: KeyCode::Char('c'),
                        modifiers: KeyModifiers::CONTROL,
                        kind: Press | Repeat,
                        state: _,
                    }) => {
                        return Ok(MenuUpdate::Push(Menu::Quit(
                            "exited with ctrl-c".to_owned(),
                        )))
                    }
                    // Forfeit the round back to the title screen.
                    Event::Key(KeyEvent {
                        code: KeyCode::Esc | KeyCode::Char('q'),
                        kind: Press,
                        ..
                    }) => return Ok(MenuUpdate::Push(Menu::Title)),
                    Event::Key(KeyEvent {
                        code, kind: Press | Repeat, ..
                    }) => {
                        let input = match code {
                            KeyCode::Left | KeyCode::Char('h') => Some(Input::MoveLeft),
                            KeyCode::Right | KeyCode::Char('l') => Some(Input::MoveRight),
                            KeyCode::Down | KeyCode::Char('j') => Some(Input::SoftDropStep),
                            KeyCode::Up | KeyCode::Char('k') => Some(Input::RotateClockwise),
                            _ => None,
                        };
                        inputs.extend(input);
                    }
                    // Other event: don't care.
                    _ => {}
                }
            }

            let now = Instant::now();
            game.update(now.saturating_duration_since(last_tick), &inputs);
            last_tick = now;

            renderer.render(self, game)?;

            // Idle until the next frame; a pending event cuts the wait
            // short so input stays responsive.
            event::poll(FRAME_INTERVAL)?;
        }
    }
}
