//! Classic Pong simulation core.
//!
//! The library owns the whole game state: a ball, two paddles, a scoring
//! judge, the pause/reset controls and an optional computer opponent, all
//! advanced one tick at a time by [`GameSession::tick`]. Rendering and
//! input polling stay outside: callers feed [`TickInput`]s and clicks in
//! and draw whatever [`GameSession::view`] hands back.

pub mod ball;
pub mod button;
pub mod computer;
pub mod config;
pub mod judge;
pub mod paddle;
pub mod session;
pub mod types;

pub use ball::Ball;
pub use button::{Button, ButtonAction};
pub use computer::{ComputerPlayer, Difficulty};
pub use config::{ConfigError, GameConfig, Opponent};
pub use judge::Judge;
pub use paddle::Paddle;
pub use session::{GameSession, TickInput};
pub use types::*;

#[cfg(test)]
mod scenario_tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    /// A full rally on a 600x600 board: the ball leaves center, crosses the
    /// board, and the left player eventually scores off the right edge.
    #[test]
    fn test_rally_until_first_point() {
        let mut session = GameSession::new(&GameConfig {
            opponent: Opponent::Player,
            ..GameConfig::default()
        });

        let mut scored = None;
        for _ in 0..2000 {
            if let Some(Event::Scored { scorer, score }) = session.tick(TickInput::default()) {
                scored = Some((scorer, score));
                break;
            }
        }

        let (scorer, score) = scored.expect("a point should fall within 2000 ticks");
        assert_eq!(score.iter().sum::<u32>(), 1);
        assert_eq!(score[scorer.index()], 1);

        // Scoring hands the ball back to the serve position
        let center = session.ball.bounds().center();
        assert_approx_eq!(center.x, 300.0);
        assert_approx_eq!(center.y, 300.0);
    }

    /// The ball returns to exactly (300, 300) after any amount of play.
    #[test]
    fn test_reset_scenario() {
        let mut session = GameSession::new(&GameConfig {
            opponent: Opponent::Player,
            ..GameConfig::default()
        });

        for _ in 0..137 {
            session.tick(TickInput::default());
        }
        session.reset();

        let center = session.ball.bounds().center();
        assert_approx_eq!(center.x, 300.0);
        assert_approx_eq!(center.y, 300.0);
    }

    /// A paddle at y=270 asked to reach y=400 covers exactly one
    /// move_speed step.
    #[test]
    fn test_clamped_step_scenario() {
        let mut paddle = Paddle::new(Board::square(600), Vec2::new(20.0, 300.0));
        assert_approx_eq!(paddle.top(), 270.0);

        paddle.move_toward(400.0);

        assert_approx_eq!(paddle.top(), 297.0);
    }

    /// Difficulty 3 never misses: the computer's target is always the
    /// ball's center.
    #[test]
    fn test_perfect_tracking_scenario() {
        let board = Board::square(600);
        let ball = Ball::new(board, Vec2::new(300.0, 300.0));
        let mut paddle = Paddle::new(board, Vec2::new(580.0, 300.0));
        let mut player = ComputerPlayer::seeded(Difficulty::Hard, 0);

        for _ in 0..10 {
            player.move_racket(&ball, &mut paddle);
        }

        assert_approx_eq!(paddle.top(), ball.center_y());
        assert_approx_eq!(player.error(), 0.0);
    }
}
