//! Static layout data: corner anchors, button presets and offsets.
//!
//! Pure data. The preset tables define the arrangements for one to four
//! round buttons; positions are offsets subtracted from the resolved corner
//! anchor, so positive values move toward the anchor's interior.

use crate::draw::color::{self, Color};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default round-button radius in surface pixels.
pub const BUTTON_RADIUS: f64 = 25.0;

/// Cluster offset from the chosen corner, on both axes.
pub const BUTTON_OFFSET: (f64, f64) = (BUTTON_RADIUS * 3.0, BUTTON_RADIUS * 3.0);

/// Start/select rect-button extent.
pub const START_SELECT_W: f64 = 50.0;
pub const START_SELECT_H: f64 = 15.0;

/// Corner anchor for the button cluster.
///
/// The stick, when configured, is mirrored horizontally from the cluster.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner (the default)
    #[default]
    BottomRight,
}

impl Corner {
    /// Whether the anchor sits along the top edge.
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Whether the anchor sits along the left edge.
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// Resolves the cluster anchor position for a surface.
    ///
    /// `shift` is the accumulated radius of the preset buttons; it pushes
    /// left-edge layouts inward so large clusters stay on screen.
    pub fn anchor(self, width: f64, height: f64, shift: f64) -> (f64, f64) {
        let (ox, oy) = BUTTON_OFFSET;
        match self {
            Corner::TopLeft => (shift + ox, oy),
            Corner::TopRight => (width - ox, oy),
            Corner::BottomLeft => (shift + ox, height - oy),
            Corner::BottomRight => (width - ox, height - oy),
        }
    }
}

/// One entry in a button arrangement preset.
///
/// `dx`/`dy` are subtracted from the anchor to get the button center.
#[derive(Debug, Clone, Copy)]
pub struct ButtonPreset {
    pub dx: f64,
    pub dy: f64,
    pub radius: f64,
    pub color: Color,
    pub name: &'static str,
}

const R: f64 = BUTTON_RADIUS;

const ONE_BUTTON: [ButtonPreset; 1] = [ButtonPreset {
    dx: 0.0,
    dy: 0.0,
    radius: R,
    color: color::RED,
    name: "a",
}];

const TWO_BUTTONS: [ButtonPreset; 2] = [
    ButtonPreset {
        dx: -6.0,
        dy: 38.0,
        radius: R,
        color: color::RED,
        name: "a",
    },
    ButtonPreset {
        dx: 58.0,
        dy: -12.0,
        radius: R,
        color: color::GREEN,
        name: "b",
    },
];

const THREE_BUTTONS: [ButtonPreset; 3] = [
    ButtonPreset {
        dx: -19.0,
        dy: 50.0,
        radius: R,
        color: color::RED,
        name: "a",
    },
    ButtonPreset {
        dx: 44.0,
        dy: 25.0,
        radius: R,
        color: color::GREEN,
        name: "b",
    },
    ButtonPreset {
        dx: 88.0,
        dy: -25.0,
        radius: R,
        color: color::BLUE,
        name: "c",
    },
];

const FOUR_BUTTONS: [ButtonPreset; 4] = [
    ButtonPreset {
        dx: -25.0,
        dy: 25.0,
        radius: R,
        color: color::RED,
        name: "a",
    },
    ButtonPreset {
        dx: 25.0,
        dy: -25.0,
        radius: R,
        color: color::GREEN,
        name: "b",
    },
    ButtonPreset {
        dx: 25.0,
        dy: 75.0,
        radius: R,
        color: color::BLUE,
        name: "x",
    },
    ButtonPreset {
        dx: 75.0,
        dy: 25.0,
        radius: R,
        color: color::PURPLE,
        name: "y",
    },
];

/// Number of distinct presets available.
pub const PRESET_COUNT: usize = 4;

/// Selects the preset arrangement for a configured button count.
///
/// Counts beyond the largest preset clamp to the four-button arrangement;
/// a zero count (nothing configured) also resolves to the full arrangement.
pub fn preset_for(count: usize) -> &'static [ButtonPreset] {
    match count {
        1 => &ONE_BUTTON,
        2 => &TWO_BUTTONS,
        3 => &THREE_BUTTONS,
        _ => &FOUR_BUTTONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_selection_clamps_to_largest() {
        assert_eq!(preset_for(1).len(), 1);
        assert_eq!(preset_for(3).len(), 3);
        assert_eq!(preset_for(4).len(), 4);
        assert_eq!(preset_for(9).len(), 4);
        assert_eq!(preset_for(0).len(), 4);
    }

    #[test]
    fn anchors_mirror_across_the_surface() {
        let (w, h) = (800.0, 600.0);
        assert_eq!(Corner::TopLeft.anchor(w, h, 50.0), (125.0, 75.0));
        assert_eq!(Corner::TopRight.anchor(w, h, 50.0), (725.0, 75.0));
        assert_eq!(Corner::BottomLeft.anchor(w, h, 0.0), (75.0, 525.0));
        assert_eq!(Corner::BottomRight.anchor(w, h, 0.0), (725.0, 525.0));
    }

    #[test]
    fn default_corner_is_bottom_right() {
        assert_eq!(Corner::default(), Corner::BottomRight);
    }
}
