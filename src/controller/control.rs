//! Individual pad controls and their cached hit regions.

use crate::draw::color::Color;
use crate::util::{self, Rect};

/// Precomputed geometry used for input-to-control hit-testing.
///
/// Owned exclusively by the controller and rebuilt whenever layout changes
/// (initial setup or surface resize).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitRegion {
    /// Round control: Euclidean distance test against center and radius.
    Circle { cx: f64, cy: f64, radius: f64 },
    /// Rect control: axis-aligned bounds test.
    Bounds(Rect),
}

impl HitRegion {
    /// Returns true if the point activates this region.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            HitRegion::Circle { cx, cy, radius } => util::distance(x, y, *cx, *cy) < *radius,
            HitRegion::Bounds(rect) => rect.contains(x, y),
        }
    }

    /// Point at the region's top-left plus half its extent.
    ///
    /// Used to position contacts synthesized from key presses.
    pub fn midpoint(&self) -> (f64, f64) {
        match self {
            HitRegion::Circle { cx, cy, .. } => (*cx, *cy),
            HitRegion::Bounds(rect) => (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0),
        }
    }
}

/// Visual shape of a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlShape {
    /// Filled circle with a label at the center.
    Round { cx: f64, cy: f64, radius: f64 },
    /// Rounded rect with a label underneath (start/select).
    Rect(Rect),
}

/// One configured interactive element: a round or rectangular button.
///
/// The directional stick is a separate type ([`super::Stick`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    /// Unique name within the controller; the key in the state snapshot.
    pub id: String,
    pub shape: ControlShape,
    pub color: Color,
    /// Optional keyboard binding driving this control.
    pub key: Option<String>,
    /// Cached hit-test geometry.
    pub hit: HitRegion,
    /// Whether a contact currently presses this control (drawing halo).
    pub active: bool,
}

impl Control {
    /// Builds a round button centered at (cx, cy).
    pub fn round(id: impl Into<String>, cx: f64, cy: f64, radius: f64, color: Color) -> Self {
        Self {
            id: id.into(),
            shape: ControlShape::Round { cx, cy, radius },
            color,
            key: None,
            hit: HitRegion::Circle { cx, cy, radius },
            active: false,
        }
    }

    /// Builds a rectangular button from its origin and extent.
    pub fn rect(id: impl Into<String>, rect: Rect, color: Color) -> Self {
        Self {
            id: id.into(),
            shape: ControlShape::Rect(rect),
            color,
            key: None,
            hit: HitRegion::Bounds(rect),
            active: false,
        }
    }

    /// Attaches a keyboard binding.
    pub fn with_key(mut self, key: Option<String>) -> Self {
        self.key = key;
        self
    }

    /// Returns true if the point hits this control.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.hit.contains(x, y)
    }

    /// Center of the control.
    pub fn center(&self) -> (f64, f64) {
        match self.shape {
            ControlShape::Round { cx, cy, .. } => (cx, cy),
            ControlShape::Rect(rect) => (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0),
        }
    }
}
