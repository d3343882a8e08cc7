//! The directional stick.

/// Default stick radius in surface pixels.
pub const STICK_RADIUS: f64 = 40.0;

/// The directional stick: a fixed base at (x, y) and a moving ball at
/// (dx, dy).
///
/// Displacement is clamped to half the radius independently per axis, which
/// yields a square clamp region rather than a circular one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stick {
    /// Base center X.
    pub x: f64,
    /// Base center Y.
    pub y: f64,
    /// Ball center X.
    pub dx: f64,
    /// Ball center Y.
    pub dy: f64,
    pub radius: f64,
}

impl Stick {
    /// Creates a stick centered at (x, y) with the default radius.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            dx: x,
            dy: y,
            radius: STICK_RADIUS,
        }
    }

    /// Half the radius: the per-axis displacement limit and the axis
    /// normalization divisor.
    pub fn half_radius(&self) -> f64 {
        self.radius / 2.0
    }

    /// Capture threshold: contacts within this distance of the base can
    /// bind to the stick.
    pub fn capture_radius(&self) -> f64 {
        self.radius * 1.5
    }

    /// Current ball displacement from the base.
    pub fn offset(&self) -> (f64, f64) {
        (self.dx - self.x, self.dy - self.y)
    }

    /// Recenters the ball.
    pub fn reset(&mut self) {
        self.dx = self.x;
        self.dy = self.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stick_is_centered() {
        let stick = Stick::new(100.0, 200.0);
        assert_eq!(stick.offset(), (0.0, 0.0));
        assert_eq!(stick.half_radius(), 20.0);
        assert_eq!(stick.capture_radius(), 60.0);
    }

    #[test]
    fn reset_recenters_the_ball() {
        let mut stick = Stick::new(100.0, 200.0);
        stick.dx = 115.0;
        stick.dy = 185.0;
        stick.reset();
        assert_eq!(stick.offset(), (0.0, 0.0));
    }
}
