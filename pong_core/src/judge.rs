//! Scoring judge: watches for the ball leaving the board.

use crate::ball::Ball;
use crate::types::{Board, Side};

/// Tracks the score and resets the ball after each point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Judge {
    score: [u32; 2],
}

impl Judge {
    pub fn new() -> Self {
        Judge::default()
    }

    /// `[left, right]` point totals.
    pub fn score(&self) -> [u32; 2] {
        self.score
    }

    /// Check the ball against the scoring thresholds, called once per tick
    /// after ball movement. A ball within one ball-width of the left edge
    /// scores for the right player and vice versa; the scored-on ball
    /// returns to its serve position. At most one side can score per tick.
    pub fn update_score(&mut self, ball: &mut Ball, board: Board) -> Option<Side> {
        let bounds = ball.bounds();
        let scorer = if bounds.x < bounds.w {
            Some(Side::Right)
        } else if bounds.x > board.width - bounds.w {
            Some(Side::Left)
        } else {
            None
        };

        if let Some(side) = scorer {
            self.score[side.index()] += 1;
            ball.reset();
        }
        scorer
    }

    /// Zero both counters. Driven by the reset control, never automatically.
    pub fn reset_score(&mut self) {
        self.score = [0, 0];
    }

    /// Text the renderer shows for the current score.
    pub fn display_text(&self) -> String {
        format!("{} : {}", self.score[0], self.score[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec2;
    use assert_approx_eq::assert_approx_eq;

    fn setup() -> (Judge, Ball, Board) {
        let board = Board::square(600);
        let ball = Ball::new(board, Vec2::new(300.0, 300.0));
        (Judge::new(), ball, board)
    }

    #[test]
    fn test_right_player_scores_on_left_exit() {
        let (mut judge, mut ball, board) = setup();
        // Left edge at 8.0, within one ball-width (18) of the wall
        ball.set_center(Vec2::new(17.0, 300.0));

        let scorer = judge.update_score(&mut ball, board);

        assert_eq!(scorer, Some(Side::Right));
        assert_eq!(judge.score(), [0, 1]);
        // The point resets the ball to its serve position
        let center = ball.bounds().center();
        assert_approx_eq!(center.x, 300.0);
        assert_approx_eq!(center.y, 300.0);
    }

    #[test]
    fn test_left_player_scores_on_right_exit() {
        let (mut judge, mut ball, board) = setup();
        ball.set_center(Vec2::new(595.0, 300.0));

        let scorer = judge.update_score(&mut ball, board);

        assert_eq!(scorer, Some(Side::Left));
        assert_eq!(judge.score(), [1, 0]);
    }

    #[test]
    fn test_no_score_mid_board() {
        let (mut judge, mut ball, board) = setup();

        let scorer = judge.update_score(&mut ball, board);

        assert_eq!(scorer, None);
        assert_eq!(judge.score(), [0, 0]);
    }

    #[test]
    fn test_each_crossing_scores_exactly_once() {
        let (mut judge, mut ball, board) = setup();

        ball.set_center(Vec2::new(10.0, 300.0));
        judge.update_score(&mut ball, board);
        // Ball was reset to center; the next check must not score again
        let scorer = judge.update_score(&mut ball, board);

        assert_eq!(scorer, None);
        assert_eq!(judge.score(), [0, 1]);
    }

    #[test]
    fn test_reset_score() {
        let (mut judge, mut ball, board) = setup();
        ball.set_center(Vec2::new(10.0, 300.0));
        judge.update_score(&mut ball, board);
        ball.set_center(Vec2::new(595.0, 300.0));
        judge.update_score(&mut ball, board);
        assert_eq!(judge.score(), [1, 1]);

        judge.reset_score();

        assert_eq!(judge.score(), [0, 0]);
    }

    #[test]
    fn test_display_text() {
        let (mut judge, mut ball, board) = setup();
        assert_eq!(judge.display_text(), "0 : 0");

        ball.set_center(Vec2::new(595.0, 300.0));
        judge.update_score(&mut ball, board);

        assert_eq!(judge.display_text(), "1 : 0");
    }
}
