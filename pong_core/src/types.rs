//! Core types and geometry for the Pong simulation.
//!
//! All coordinates are in board pixels with the origin at the top-left
//! corner; `y` grows downward. Entities are placed through a shared
//! [`Geometry`] value rather than an inheritance tree.

/// Ticks per second targeted by the simulation loop.
pub const TICK_HZ: u16 = 30;

/// Board edge length that all speed constants are calibrated against.
pub const REFERENCE_BOARD: f32 = 600.0;

/// Ball extent as a fraction of the board edge.
pub const BALL_RATIO: f32 = 0.03;

/// Ball speed per axis, in pixels per tick on the reference board.
pub const BALL_BASE_SPEED: f32 = 3.0;

/// Paddle extents as fractions of the board edge.
pub const PADDLE_WIDTH_RATIO: f32 = 0.03;
pub const PADDLE_HEIGHT_RATIO: f32 = 0.1;

/// Maximum paddle travel per tick, in pixels.
pub const PADDLE_MOVE_SPEED: f32 = 27.0;

/// Distance from a board edge to the center of its paddle, in pixels.
pub const PADDLE_INSET: f32 = 20.0;

/// Control button extents as fractions of the board edge.
pub const BUTTON_WIDTH_RATIO: f32 = 0.1;
pub const BUTTON_HEIGHT_RATIO: f32 = 0.05;

/// Fallback extent ratio when a caller asks for one larger than the board.
const RATIO_FALLBACK: f32 = 0.1;

/// Player/paddle side
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Index into `[left, right]` score and paddle arrays.
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Board dimensions in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Board { width, height }
    }

    /// Square board of `size` pixels, the shape the configuration produces.
    pub fn square(size: u32) -> Self {
        Board::new(size as f32, size as f32)
    }
}

/// 2D vector
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    pub fn zero() -> Self {
        Vec2 { x: 0.0, y: 0.0 }
    }
}

/// Axis-aligned rectangle positioned by its top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Rect::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.w / 2.0;
        self.y = center.y - self.h / 2.0;
    }

    /// Strict overlap test; touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// Point containment, inclusive of the left/top edges.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// Placement shared by every on-board entity: current bounds plus the
/// center it returns to on reset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geometry {
    pub rect: Rect,
    start: Vec2,
}

impl Geometry {
    /// Build from fractional extent ratios and a center coordinate.
    /// A ratio larger than 1.0 cannot fit the board and falls back to 0.1.
    pub fn from_ratios(board: Board, width_ratio: f32, height_ratio: f32, center: Vec2) -> Self {
        let width_ratio = if width_ratio > 1.0 {
            RATIO_FALLBACK
        } else {
            width_ratio
        };
        let height_ratio = if height_ratio > 1.0 {
            RATIO_FALLBACK
        } else {
            height_ratio
        };

        Geometry {
            rect: Rect::from_center(center, width_ratio * board.width, height_ratio * board.height),
            start: center,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.rect
    }

    /// Center the entity was constructed at.
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Snap back to the construction-time center.
    pub fn reset(&mut self) {
        self.rect.set_center(self.start);
    }
}

/// Render tag the drawing collaborator switches on.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Ellipse,
    Rect,
    Label(String),
}

/// One draw command: where to draw and what kind of thing it is.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub rect: Rect,
    pub shape: Shape,
}

/// Anything the rendering collaborator can be handed.
pub trait Drawable {
    fn sprite(&self) -> Sprite;
}

/// Entities that freeze in place while the game is paused.
pub trait Pausable {
    /// Zero out motion, remembering the pre-pause value.
    fn pause(&mut self);
    /// Restore the remembered value; a no-op without a prior `pause`.
    fn play(&mut self);
}

/// Snapshot of everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct View {
    pub sprites: Vec<Sprite>,
    pub score: [u32; 2],
    pub score_text: String,
    pub paused: bool,
}

/// Game events that can occur during a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Scored {
        scorer: Side,
        score: [u32; 2], // New score after this point
    },
}
