//! Plain geometry types shared by the container and the platform contract.

use crate::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl Size<f32> {
    pub const ZERO: Self = Size::new(0.0, 0.0);

    /// True when either dimension has not been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_origin_size(origin: Vec2, size: Size<f32>) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Half-open containment: the right and bottom borders are outside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn offset(&self, by: Vec2) -> Self {
        Self::new(self.x + by.x, self.y + by.y, self.width, self.height)
    }
}
