use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

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

use crate::application::{Application, Menu, MenuUpdate};

#[rustfmt::skip]
const CREDITS: [&str; 15] = [
    "* CREDITS *",
    "",
    "Game Development",
    "The blockfall contributors",
    "",
    "Terminal Handling",
    "The crossterm crate",
    "",
    "Special Thanks",
    "Everyone who filed a bug",
    "",
    "License",
    "MIT License",
    "",
    "© 2026 The blockfall contributors",
];

/// Scroll speed bounds for the arrow keys, in rows per second. A full
/// stop is reachable only through the pause key.
const MIN_SPEED: f64 = 1.0;
const MAX_SPEED: f64 = 5.0;

fn slower(speed: f64) -> f64 {
    (speed - 0.5).max(MIN_SPEED)
}

fn faster(speed: f64) -> f64 {
    (speed + 0.5).min(MAX_SPEED)
}

impl<T: Write> Application<T> {
    /// Credits scrolling from the bottom of the screen to the top,
    /// wrapping around once they have passed through completely.
    pub(in crate::application) fn menu_credits(&mut self) -> io::Result<MenuUpdate> {
        let mut scroll_speed = 1.0f64;
        let mut offset = 0.0f64;
        let mut last_frame = Instant::now();
        loop {
            let w_main = Self::W_MAIN.into();
            let (x_main, y_main) = Self::fetch_main_xy();
            let h_visible = i32::from(Self::H_MAIN) - 2;
            let total_rows = CREDITS.len() as i32 + h_visible;

            self.term.queue(Clear(ClearType::All))?;
            for (i, line) in CREDITS.iter().enumerate() {
                let row = h_visible + i as i32 - offset as i32;
                if (0..h_visible).contains(&row) {
                    self.term
                        .queue(MoveTo(x_main, y_main + row as u16))?
                        .queue(Print(format!("{line:^w_main$}")))?;
                }
            }
            self.term
                .queue(MoveTo(x_main, y_main + Self::H_MAIN - 1))?
                .queue(PrintStyledContent(
                    format!(
                        "{:^w_main$}",
                        format!(
                            "(Speed {scroll_speed:.1}x: [↓|↑] adjust, [Space] pause, [Esc] return.)"
                        )
                    )
                    .italic(),
                ))?;
            self.term.flush()?;

            // Idle until the next frame, handling input promptly.
            if event::poll(Duration::from_millis(50))? {
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
                        code: KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace,
                        kind: Press,
                        ..
                    }) => break Ok(MenuUpdate::Pop),
                    Event::Key(KeyEvent {
                        code: KeyCode::Up | KeyCode::Char('k'),
                        kind: Press | Repeat,
                        ..
                    }) => scroll_speed = slower(scroll_speed),
                    Event::Key(KeyEvent {
                        code: KeyCode::Down | KeyCode::Char('j'),
                        kind: Press | Repeat,
                        ..
                    }) => scroll_speed = faster(scroll_speed),
                    Event::Key(KeyEvent {
                        code: KeyCode::Char(' '),
                        kind: Press,
                        ..
                    }) => scroll_speed = 0.0,
                    // Other event: don't care.
                    _ => {}
                }
            }

            let now = Instant::now();
            offset += scroll_speed * now.saturating_duration_since(last_frame).as_secs_f64();
            last_frame = now;
            if offset as i32 > total_rows {
                offset = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_keep_scroll_speed_within_bounds() {
        assert_eq!(slower(2.0), 1.5);
        // Slowing down floors at 1.0; it never reaches a standstill.
        assert_eq!(slower(MIN_SPEED), MIN_SPEED);
        assert_eq!(slower(1.2), MIN_SPEED);
        assert_eq!(faster(4.0), 4.5);
        assert_eq!(faster(MAX_SPEED), MAX_SPEED);
    }
}
