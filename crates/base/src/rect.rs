use crate::Vec2;

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T> Rect<T> {
    pub fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl Rect<usize> {
    /// True if the rectangle lies entirely inside an image of `bounds`.
    pub fn fits_in(&self, bounds: Vec2<usize>) -> bool {
        self.origin.x + self.size.x <= bounds.x && self.origin.y + self.size.y <= bounds.y
    }
}
