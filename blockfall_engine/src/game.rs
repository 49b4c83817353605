use std::time::Duration;

use rand::Rng;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

use crate::{Board, Piece, Shape};

/// A discrete player input, applied once per occurrence.
///
/// Quitting is an application-level signal, not a game input.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug)]
pub enum Input {
    /// Move the piece one column to the left.
    MoveLeft,
    /// Move the piece one column to the right.
    MoveRight,
    /// Nudge the piece down one row ("soft drop"); never an instant drop.
    SoftDropStep,
    /// Rotate the piece by 90° clockwise.
    RotateClockwise,
}

/// One round of play: the board, the current/next piece pair, and the
/// score, advanced by tick-driven calls to [`Game::update`].
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current: Piece,
    next: Piece,
    score: u32,
    fall_timer: Duration,
    rng: ChaCha8Rng,
    over: bool,
}

impl Game {
    /// The game field width.
    pub const WIDTH: usize = 10;
    /// The game field height.
    pub const HEIGHT: usize = 20;
    /// How long a piece takes to fall one row on its own.
    pub const FALL_INTERVAL: Duration = Duration::from_millis(500);
    /// Score bonus per cleared row, regardless of how many rows clear
    /// simultaneously.
    pub const POINTS_PER_LINE: u32 = 10;

    /// Starts a fresh game with the given PRNG seed: empty board, score
    /// zero, current and next piece drawn uniformly from the catalog.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = Board::new(Self::WIDTH, Self::HEIGHT);
        let current = random_piece(&mut rng, board.width());
        let next = random_piece(&mut rng, board.width());
        Game {
            board,
            current,
            next,
            score: 0,
            fall_timer: Duration::ZERO,
            rng,
            over: false,
        }
    }

    /// Starts a fresh game seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Advances the game by one tick.
    ///
    /// In order: gravity (when the accumulated time reaches
    /// [`FALL_INTERVAL`](Self::FALL_INTERVAL)), then each queued input,
    /// then the lock/clear/respawn transition if gravity hit ground.
    /// Every attempted move is provisional and rolled back if the board
    /// rejects it. Once the game is over, updates change nothing.
    pub fn update(&mut self, elapsed: Duration, inputs: &[Input]) {
        if self.over {
            return;
        }

        let mut needs_lock = false;
        self.fall_timer += elapsed;
        if self.fall_timer >= Self::FALL_INTERVAL {
            self.fall_timer = Duration::ZERO;
            self.current.y += 1;
            if !self.board.is_valid_placement(&self.current) {
                self.current.y -= 1;
                needs_lock = true;
            }
        }

        for &input in inputs {
            self.apply(input);
        }

        if needs_lock {
            self.board.lock(&self.current);
            let cleared = self.board.clear_completed_rows();
            self.score += Self::POINTS_PER_LINE * cleared as u32;
            let fresh = random_piece(&mut self.rng, self.board.width());
            self.current = std::mem::replace(&mut self.next, fresh);
            if self.board.is_top_row_occupied() {
                self.over = true;
            }
        }
    }

    fn apply(&mut self, input: Input) {
        match input {
            Input::MoveLeft => self.try_shift(-1, 0),
            Input::MoveRight => self.try_shift(1, 0),
            Input::SoftDropStep => self.try_shift(0, 1),
            Input::RotateClockwise => {
                let rotated = self.current.rotated_clockwise();
                let original = std::mem::replace(&mut self.current.grid, rotated);
                if !self.board.is_valid_placement(&self.current) {
                    self.current.grid = original;
                }
            }
        }
    }

    fn try_shift(&mut self, dx: i32, dy: i32) {
        self.current.x += dx;
        self.current.y += dy;
        if !self.board.is_valid_placement(&self.current) {
            self.current.x -= dx;
            self.current.y -= dy;
        }
    }

    /// Read accessor for the playing grid.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read accessor for the piece in play.
    pub fn current_piece(&self) -> &Piece {
        &self.current
    }

    /// Read accessor for the upcoming piece.
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    /// The score accumulated this round.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the round has ended (top row occupied after a lock).
    pub fn is_over(&self) -> bool {
        self.over
    }
}

fn random_piece(rng: &mut ChaCha8Rng, board_width: usize) -> Piece {
    let shape = Shape::VARIANTS[rng.random_range(0..Shape::VARIANTS.len())];
    Piece::spawn(shape, board_width)
}
