use glam::Vec2;

/// Axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box whose top-left corner is `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// True when the two boxes share a region of positive area.
    /// Boxes that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x.max(other.min.x) < self.max.x.min(other.max.x)
            && self.min.y.max(other.min.y) < self.max.y.min(other.max.y)
    }
}

/// The playfield: a `width` x `height` rectangle anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Box has crossed below the bottom edge
    pub fn past_bottom(&self, bounds: &Aabb) -> bool {
        bounds.bottom() > self.height
    }

    /// Box has crossed above the top edge
    pub fn past_top(&self, bounds: &Aabb) -> bool {
        bounds.top() < 0.0
    }

    /// Box pokes out of the left or right edge
    pub fn past_sides(&self, bounds: &Aabb) -> bool {
        bounds.left() < 0.0 || bounds.right() > self.width
    }

    pub fn past_left(&self, bounds: &Aabb) -> bool {
        bounds.left() < 0.0
    }

    pub fn past_right(&self, bounds: &Aabb) -> bool {
        bounds.right() > self.width
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new(
            crate::params::Params::ARENA_WIDTH,
            crate::params::Params::ARENA_HEIGHT,
        )
    }
}
