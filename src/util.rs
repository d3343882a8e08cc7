//! Geometry helpers shared by hit-testing and rendering.

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be non-negative.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the point lies strictly inside the rectangle.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px > self.x && px < self.x + self.width && py > self.y && py < self.y + self.height
    }

    /// Returns a copy grown evenly in all directions by `amount`.
    pub fn inflate(&self, amount: f64) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }
}

/// Euclidean distance between two points.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Sign of a displacement as -1, 0 or 1.
///
/// Unlike `f64::signum` this maps zero (either sign) to zero, which is what
/// the direction keys in the state snapshot expect.
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Clamps a rounded-corner radius so it never exceeds half the rect extent.
///
/// Free-standing so drawing backends can share it without extending their
/// native context types.
pub fn corner_radius(r: f64, width: f64, height: f64) -> f64 {
    r.min(width / 2.0).min(height / 2.0)
}
