//! Clickable pause/reset controls.

use crate::types::{
    Board, Drawable, Geometry, Rect, Shape, Sprite, Vec2, BUTTON_HEIGHT_RATIO, BUTTON_WIDTH_RATIO,
};

/// What a button does when clicked.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    TogglePause,
    Reset,
}

/// An on-board control region the input collaborator hit-tests clicks
/// against.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    geometry: Geometry,
    label: &'static str,
    action: ButtonAction,
}

impl Button {
    /// The pause toggle, left of center on the bottom edge.
    pub fn pause_button(board: Board) -> Self {
        Button::new(
            board,
            Vec2::new(0.4 * board.width, 0.9 * board.height),
            "pause",
            ButtonAction::TogglePause,
        )
    }

    /// The reset control, right of center on the bottom edge.
    pub fn reset_button(board: Board) -> Self {
        Button::new(
            board,
            Vec2::new(0.6 * board.width, 0.9 * board.height),
            "reset",
            ButtonAction::Reset,
        )
    }

    fn new(board: Board, center: Vec2, label: &'static str, action: ButtonAction) -> Self {
        Button {
            geometry: Geometry::from_ratios(board, BUTTON_WIDTH_RATIO, BUTTON_HEIGHT_RATIO, center),
            label,
            action,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Swap the displayed label (the pause control flips to "play").
    pub fn set_label(&mut self, label: &'static str) {
        self.label = label;
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.geometry.bounds().contains(x, y)
    }
}

impl Drawable for Button {
    fn sprite(&self) -> Sprite {
        Sprite {
            rect: self.bounds(),
            shape: Shape::Label(self.label.to_string()),
        }
    }
}
