//! Ball state and motion.

use crate::paddle::Paddle;
use crate::types::{
    Board, Drawable, Geometry, Pausable, Rect, Shape, Sprite, Vec2, BALL_BASE_SPEED, BALL_RATIO,
    REFERENCE_BOARD,
};

/// The ball: a square-bounded ellipse moving at a fixed per-axis speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    geometry: Geometry,
    velocity: Vec2,
    /// Scales absolute speed settings so gameplay feels the same on any
    /// board size.
    speed_scale: f32,
    /// Velocity saved by `pause`; `None` while running.
    paused_velocity: Option<Vec2>,
}

impl Ball {
    pub fn new(board: Board, center: Vec2) -> Self {
        let speed_scale = board.width / REFERENCE_BOARD;
        Ball {
            geometry: Geometry::from_ratios(board, BALL_RATIO, BALL_RATIO, center),
            velocity: Vec2::new(BALL_BASE_SPEED * speed_scale, BALL_BASE_SPEED * speed_scale),
            speed_scale,
            paused_velocity: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }

    pub fn center_y(&self) -> f32 {
        self.geometry.bounds().center().y
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed_scale(&self) -> f32 {
        self.speed_scale
    }

    /// Place the ball directly. The serve position stays unchanged.
    pub fn set_center(&mut self, center: Vec2) {
        self.geometry.rect.set_center(center);
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Advance one tick: move by velocity, bounce off the side and top/bottom
    /// walls, then invert horizontally once per overlapping paddle.
    pub fn advance(&mut self, board: Board, paddles: &[Paddle]) {
        self.geometry.rect.x += self.velocity.x;
        self.geometry.rect.y += self.velocity.y;

        let bounds = self.geometry.bounds();
        if bounds.x < 0.0 || bounds.x > board.width - bounds.w {
            self.bounce_x();
        }
        if bounds.y < 0.0 || bounds.y > board.height - bounds.h {
            self.bounce_y();
        }

        for paddle in paddles {
            if self.geometry.bounds().intersects(&paddle.bounds()) {
                self.bounce_x();
            }
        }
    }

    /// Reverse horizontal travel.
    pub fn bounce_x(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    /// Reverse vertical travel.
    pub fn bounce_y(&mut self) {
        self.velocity.y = -self.velocity.y;
    }

    /// Return to the serve position. Velocity carries over between points.
    pub fn reset(&mut self) {
        self.geometry.reset();
    }

    /// Set both axes to `speed` (scaled for the board), keeping each axis'
    /// current direction. A zero axis has no direction and stays zero.
    pub fn change_speed(&mut self, speed: f32) {
        if let Some(direction) = direction(self.velocity.x) {
            self.velocity.x = self.speed_scale * speed * direction;
        }
        if let Some(direction) = direction(self.velocity.y) {
            self.velocity.y = self.speed_scale * speed * direction;
        }
    }
}

/// Sign of a velocity component; a stationary axis has no direction.
fn direction(value: f32) -> Option<f32> {
    if value < 0.0 {
        Some(-1.0)
    } else if value > 0.0 {
        Some(1.0)
    } else {
        None
    }
}

impl Pausable for Ball {
    fn pause(&mut self) {
        self.paused_velocity = Some(self.velocity);
        self.velocity = Vec2::zero();
    }

    fn play(&mut self) {
        if let Some(velocity) = self.paused_velocity.take() {
            self.velocity = velocity;
        }
    }
}

impl Drawable for Ball {
    fn sprite(&self) -> Sprite {
        Sprite {
            rect: self.bounds(),
            shape: Shape::Ellipse,
        }
    }
}
