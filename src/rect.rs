use crate::units::*;

/// A rectangle in texture space, specified by two opposite corners.
/// `(x1, y1)` is the top-left corner and `(x2, y2)` the bottom-right corner,
/// as `y` grows downward on a drawing surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x1: Px,
    /// The y-coordinate of the top-left corner.
    pub y1: Px,
    /// The x-coordinate of the bottom-right corner.
    pub x2: Px,
    /// The y-coordinate of the bottom-right corner.
    pub y2: Px,
}

impl Rect {
    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Px {
        self.y2 - self.y1
    }

    /// The horizontal midpoint, used as the anchor for centre-aligned text
    pub fn centre_x(&self) -> Px {
        self.x1 + self.width() / 2.0
    }
}
