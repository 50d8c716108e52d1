//! Session wiring: one ball, two paddles, a judge and the control buttons.

use crate::ball::Ball;
use crate::button::{Button, ButtonAction};
use crate::computer::ComputerPlayer;
use crate::config::{GameConfig, Opponent};
use crate::judge::Judge;
use crate::paddle::Paddle;
use crate::types::{Board, Drawable, Event, Pausable, Vec2, View, PADDLE_INSET};

/// Per-tick paddle input gathered by the input collaborator.
#[derive(Debug, Copy, Clone, Default)]
pub struct TickInput {
    /// Pointer Y for the left paddle, when the pointer moved this tick.
    pub pointer_y: Option<f32>,
    /// Up/down key state for the right paddle. Ignored when a computer
    /// player drives that paddle.
    pub up_held: bool,
    pub down_held: bool,
}

/// Owns the whole game state and advances it one tick at a time.
///
/// The session is a plain value; construct one per game and drop it when
/// done. Rendering and input stay outside: callers feed [`TickInput`]s and
/// clicks in and draw whatever [`GameSession::view`] hands back.
pub struct GameSession {
    pub board: Board,
    pub ball: Ball,
    pub paddles: [Paddle; 2],
    pub judge: Judge,
    pub computer: Option<ComputerPlayer>,
    pub pause_button: Button,
    pub reset_button: Button,
    paused: bool,
}

impl GameSession {
    /// Build a session from a validated configuration.
    pub fn new(config: &GameConfig) -> Self {
        let board = Board::square(config.size);
        let computer = match config.opponent {
            Opponent::Computer => Some(ComputerPlayer::new(config.difficulty)),
            Opponent::Player => None,
        };
        GameSession::with_computer(board, computer)
    }

    fn with_computer(board: Board, computer: Option<ComputerPlayer>) -> Self {
        let mid = board.height / 2.0;
        GameSession {
            board,
            ball: Ball::new(board, Vec2::new(board.width / 2.0, mid)),
            paddles: [
                Paddle::new(board, Vec2::new(PADDLE_INSET, mid)),
                Paddle::new(board, Vec2::new(board.width - PADDLE_INSET, mid)),
            ],
            judge: Judge::new(),
            computer,
            pause_button: Button::pause_button(board),
            reset_button: Button::reset_button(board),
            paused: false,
        }
    }

    /// Advance the simulation one tick: ball movement with paddle
    /// collisions, then paddle tracking from input, then the scoring check,
    /// then the computer opponent's move.
    pub fn tick(&mut self, input: TickInput) -> Option<Event> {
        self.ball.advance(self.board, &self.paddles);

        if let Some(target) = input.pointer_y {
            self.paddles[0].move_toward(target);
        }
        if self.computer.is_none() {
            let step = self.paddles[1].move_speed();
            let top = self.paddles[1].top();
            if input.up_held {
                self.paddles[1].move_toward(top - step);
            }
            if input.down_held {
                self.paddles[1].move_toward(top + step);
            }
        }

        let scorer = self.judge.update_score(&mut self.ball, self.board);

        if let Some(computer) = self.computer.as_mut() {
            computer.move_racket(&self.ball, &mut self.paddles[1]);
        }

        scorer.map(|scorer| {
            let score = self.judge.score();
            log::debug!("{:?} scored, score now {}", scorer, self.judge.display_text());
            Event::Scored { scorer, score }
        })
    }

    /// Toggle between running and paused, propagating to every pausable
    /// entity. The session-level flag guards against `play` without a prior
    /// `pause`.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.ball.play();
            for paddle in &mut self.paddles {
                paddle.play();
            }
            self.pause_button.set_label("pause");
        } else {
            self.ball.pause();
            for paddle in &mut self.paddles {
                paddle.pause();
            }
            self.pause_button.set_label("play");
        }
        self.paused = !self.paused;
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Return ball and paddles to their serve positions and zero the score.
    /// Running/paused state is left as is.
    pub fn reset(&mut self) {
        self.ball.reset();
        for paddle in &mut self.paddles {
            paddle.reset();
        }
        self.judge.reset_score();
    }

    /// Apply a 1-9 speed step to the ball. Paddle speed is not coupled to
    /// this control.
    pub fn change_speed(&mut self, step: u8) {
        self.ball.change_speed(step as f32);
    }

    /// Route a click from the input collaborator to whichever control it
    /// hit, if any.
    pub fn handle_click(&mut self, x: f32, y: f32) {
        let action = [&self.pause_button, &self.reset_button]
            .into_iter()
            .find(|button| button.contains(x, y))
            .map(Button::action);

        match action {
            Some(ButtonAction::TogglePause) => self.toggle_pause(),
            Some(ButtonAction::Reset) => self.reset(),
            None => {}
        }
    }

    /// Snapshot everything a renderer needs for one frame.
    pub fn view(&self) -> View {
        View {
            sprites: vec![
                self.ball.sprite(),
                self.paddles[0].sprite(),
                self.paddles[1].sprite(),
                self.pause_button.sprite(),
                self.reset_button.sprite(),
            ],
            score: self.judge.score(),
            score_text: self.judge.display_text(),
            paused: self.paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computer::Difficulty;
    use crate::types::Side;
    use assert_approx_eq::assert_approx_eq;

    fn player_session() -> GameSession {
        GameSession::new(&GameConfig {
            opponent: Opponent::Player,
            ..GameConfig::default()
        })
    }

    fn computer_session(difficulty: Difficulty) -> GameSession {
        let board = Board::square(600);
        GameSession::with_computer(board, Some(ComputerPlayer::seeded(difficulty, 42)))
    }

    #[test]
    fn test_session_layout() {
        let session = player_session();

        let ball_center = session.ball.bounds().center();
        assert_approx_eq!(ball_center.x, 300.0);
        assert_approx_eq!(ball_center.y, 300.0);

        assert_approx_eq!(session.paddles[0].bounds().center().x, 20.0);
        assert_approx_eq!(session.paddles[1].bounds().center().x, 580.0);
        assert!(session.computer.is_none());
        assert!(!session.paused());
    }

    #[test]
    fn test_config_selects_computer_opponent() {
        let session = GameSession::new(&GameConfig::default());
        assert!(session.computer.is_some());
    }

    #[test]
    fn test_tick_moves_ball() {
        let mut session = player_session();
        let before = session.ball.bounds();

        session.tick(TickInput::default());

        assert_approx_eq!(session.ball.bounds().x, before.x + 3.0);
        assert_approx_eq!(session.ball.bounds().y, before.y + 3.0);
    }

    #[test]
    fn test_pointer_drives_left_paddle() {
        let mut session = player_session();
        let before = session.paddles[0].top();

        session.tick(TickInput {
            pointer_y: Some(before + 100.0),
            ..TickInput::default()
        });

        assert_approx_eq!(session.paddles[0].top(), before + 27.0);
    }

    #[test]
    fn test_keys_drive_right_paddle() {
        let mut session = player_session();
        let before = session.paddles[1].top();

        session.tick(TickInput {
            up_held: true,
            ..TickInput::default()
        });
        assert_approx_eq!(session.paddles[1].top(), before - 27.0);

        session.tick(TickInput {
            down_held: true,
            ..TickInput::default()
        });
        assert_approx_eq!(session.paddles[1].top(), before);
    }

    #[test]
    fn test_computer_drives_right_paddle() {
        let mut session = computer_session(Difficulty::Hard);
        session.ball.set_center(Vec2::new(300.0, 100.0));
        session.ball.set_velocity(Vec2::zero());
        let before = session.paddles[1].top();

        // Keys must be ignored while the computer owns the paddle
        session.tick(TickInput {
            down_held: true,
            ..TickInput::default()
        });

        assert_approx_eq!(session.paddles[1].top(), before - 27.0);
    }

    #[test]
    fn test_scoring_event() {
        let mut session = player_session();
        session.ball.set_center(Vec2::new(10.0, 300.0));
        session.ball.set_velocity(Vec2::zero());

        let event = session.tick(TickInput::default());

        assert_eq!(
            event,
            Some(Event::Scored {
                scorer: Side::Right,
                score: [0, 1],
            })
        );
        // Ball was handed back to the serve position
        assert_approx_eq!(session.ball.bounds().center().x, 300.0);
    }

    #[test]
    fn test_pause_freezes_and_resumes() {
        let mut session = player_session();
        let velocity = session.ball.velocity();

        session.toggle_pause();
        assert!(session.paused());

        let frozen = session.ball.bounds();
        session.tick(TickInput {
            pointer_y: Some(500.0),
            up_held: true,
            ..TickInput::default()
        });
        assert_eq!(session.ball.bounds(), frozen);
        assert_approx_eq!(session.paddles[0].top(), 270.0);
        assert_approx_eq!(session.paddles[1].top(), 270.0);

        session.toggle_pause();
        assert!(!session.paused());
        assert_eq!(session.ball.velocity(), velocity);
    }

    #[test]
    fn test_pause_button_label_flips() {
        let mut session = player_session();
        assert_eq!(session.pause_button.label(), "pause");

        session.toggle_pause();
        assert_eq!(session.pause_button.label(), "play");

        session.toggle_pause();
        assert_eq!(session.pause_button.label(), "pause");
    }

    #[test]
    fn test_reset_restores_positions_and_score() {
        let mut session = player_session();
        session.ball.set_center(Vec2::new(10.0, 300.0));
        session.ball.set_velocity(Vec2::zero());
        session.tick(TickInput::default());
        session.tick(TickInput {
            pointer_y: Some(400.0),
            ..TickInput::default()
        });
        assert_eq!(session.judge.score(), [0, 1]);

        session.reset();

        assert_eq!(session.judge.score(), [0, 0]);
        assert_approx_eq!(session.ball.bounds().center().x, 300.0);
        assert_approx_eq!(session.paddles[0].top(), 270.0);
    }

    #[test]
    fn test_reset_does_not_resume_a_paused_game() {
        let mut session = player_session();
        session.toggle_pause();

        session.reset();

        assert!(session.paused());
        assert_eq!(session.ball.velocity(), Vec2::zero());
    }

    #[test]
    fn test_change_speed_touches_only_the_ball() {
        let mut session = player_session();

        session.change_speed(9);

        assert_approx_eq!(session.ball.velocity().x, 9.0);
        assert_approx_eq!(session.ball.velocity().y, 9.0);
        assert_approx_eq!(session.paddles[0].move_speed(), 27.0);
        assert_approx_eq!(session.paddles[1].move_speed(), 27.0);
    }

    #[test]
    fn test_click_routes_to_buttons() {
        let mut session = player_session();

        // Pause button center
        session.handle_click(240.0, 540.0);
        assert!(session.paused());

        // Board background: no control hit
        session.handle_click(300.0, 300.0);
        assert!(session.paused());

        session.ball.set_center(Vec2::new(100.0, 100.0));
        // Reset button center
        session.handle_click(360.0, 540.0);
        assert_approx_eq!(session.ball.bounds().center().x, 300.0);
    }

    #[test]
    fn test_view_snapshot() {
        let session = player_session();
        let view = session.view();

        assert_eq!(view.sprites.len(), 5);
        assert_eq!(view.score, [0, 0]);
        assert_eq!(view.score_text, "0 : 0");
        assert!(!view.paused);
    }
}
