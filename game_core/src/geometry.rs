use glam::Vec2;

/// Axis-aligned rectangle anchored at its bottom-left corner (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_edges(x: f32, y: f32, right: f32, top: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(right - x, top - y),
        }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Closed-interval vertical overlap
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.y() <= other.top() && self.top() >= other.y()
    }
}
