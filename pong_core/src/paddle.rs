//! Paddle state and rate-limited tracking movement.

use crate::types::{
    Board, Drawable, Geometry, Pausable, Rect, Shape, Sprite, Vec2, PADDLE_HEIGHT_RATIO,
    PADDLE_MOVE_SPEED, PADDLE_WIDTH_RATIO,
};

/// A paddle chases a target coordinate at a bounded rate rather than
/// teleporting to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    geometry: Geometry,
    board: Board,
    /// Maximum travel per tick, in pixels.
    move_speed: f32,
    /// Speed saved by `pause`; `None` while running.
    paused_speed: Option<f32>,
}

impl Paddle {
    pub fn new(board: Board, center: Vec2) -> Self {
        Paddle {
            geometry: Geometry::from_ratios(board, PADDLE_WIDTH_RATIO, PADDLE_HEIGHT_RATIO, center),
            board,
            move_speed: PADDLE_MOVE_SPEED,
            paused_speed: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }

    /// Top edge of the paddle.
    pub fn top(&self) -> f32 {
        self.geometry.bounds().y
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Step toward `target_y` (a top-edge coordinate), moving at most
    /// `move_speed` this tick. A target outside the board's vertical extent
    /// is ignored entirely; the paddle does not move toward the boundary.
    pub fn move_toward(&mut self, target_y: f32) {
        let rect = &mut self.geometry.rect;
        if target_y < 0.0 || target_y > self.board.height - rect.h {
            return;
        }

        let mut delta = target_y - rect.y;
        if delta.abs() > self.move_speed {
            delta = self.move_speed.copysign(delta);
        }
        rect.y += delta;
    }

    /// Direct rate assignment; paddle speed is a scalar, not a velocity.
    pub fn change_speed(&mut self, speed: f32) {
        self.move_speed = speed;
    }

    /// Return to the starting position.
    pub fn reset(&mut self) {
        self.geometry.reset();
    }
}

impl Pausable for Paddle {
    fn pause(&mut self) {
        self.paused_speed = Some(self.move_speed);
        self.move_speed = 0.0;
    }

    fn play(&mut self) {
        if let Some(speed) = self.paused_speed.take() {
            self.move_speed = speed;
        }
    }
}

impl Drawable for Paddle {
    fn sprite(&self) -> Sprite {
        Sprite {
            rect: self.bounds(),
            shape: Shape::Rect,
        }
    }
}
