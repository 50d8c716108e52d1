//! Difficulty-parameterized computer opponent.

use crate::ball::Ball;
use crate::paddle::Paddle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Opponent accuracy tier. Higher tiers track the ball more precisely, so
/// level 3 is the hardest to play against.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Difficulty {
    /// Level 1: targeting error accumulates as a random walk.
    Easy = 1,
    /// Level 2: a fresh bounded error is drawn every tick.
    Medium = 2,
    /// Level 3: exact tracking, no error.
    Hard = 3,
}

impl Difficulty {
    /// Map a configured level to a tier; anything outside 1-3 is invalid.
    pub fn from_level(level: i64) -> Option<Difficulty> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

/// Heuristic opponent: chases the ball's vertical center, offset by a
/// difficulty-dependent targeting error.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    difficulty: Difficulty,
    /// Current targeting offset in pixels. Persists across ticks so the
    /// easy tier can drift.
    error: f32,
    rng: StdRng,
}

impl ComputerPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        ComputerPlayer {
            difficulty,
            error: 0.0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic construction for tests.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        ComputerPlayer {
            difficulty,
            error: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn error(&self) -> f32 {
        self.error
    }

    /// Update the targeting error, then step the paddle toward the ball's
    /// center plus the error. Movement stays bounded by the paddle's own
    /// rate limit.
    pub fn move_racket(&mut self, ball: &Ball, paddle: &mut Paddle) {
        self.mistake(paddle.bounds().w);
        paddle.move_toward(ball.center_y() + self.error);
    }

    /// Inject the per-tier error, in units of half a paddle width. The easy
    /// tier adds to the previous error instead of replacing it, so its aim
    /// wanders without bound.
    fn mistake(&mut self, paddle_width: f32) {
        match self.difficulty {
            Difficulty::Easy => {
                self.error += self.rng.gen_range(-2..=2) as f32 * 0.5 * paddle_width;
            }
            Difficulty::Medium => {
                self.error = self.rng.gen_range(-1..=1) as f32 * 0.5 * paddle_width;
            }
            Difficulty::Hard => {
                self.error = 0.0;
            }
        }
    }
}
