//! RGBA color type and the pad's predefined palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from 0-255 RGB components at the default pad opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: DEFAULT_OPACITY,
        }
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

/// Default opacity for pad controls.
pub const DEFAULT_OPACITY: f64 = 0.75;

// ============================================================================
// Predefined Color Constants (default button palette)
// ============================================================================

pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: DEFAULT_OPACITY,
};

pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: DEFAULT_OPACITY,
};

pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: DEFAULT_OPACITY,
};

pub const PURPLE: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: DEFAULT_OPACITY,
};

pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: DEFAULT_OPACITY,
};

pub const CYAN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 1.0,
    a: DEFAULT_OPACITY,
};

pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: DEFAULT_OPACITY,
};

pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: DEFAULT_OPACITY,
};

// ============================================================================
// Joystick sub-palette
// ============================================================================

/// Colors for the four layers of the joystick rendering stack.
pub mod joystick {
    use super::Color;

    /// Outer base circle.
    pub const BASE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.75,
    };

    /// Inner dust circle drawn over the base.
    pub const DUST: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.1,
    };

    /// Fixed center post.
    pub const STICK: Color = Color {
        r: 0.8,
        g: 0.8,
        b: 0.8,
        a: 1.0,
    };

    /// Moving ball that tracks the stick offset.
    pub const BALL: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Soft shadow under the moving ball.
    pub const SHADOW: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.05,
    };
}

/// Maps color name strings to palette values.
///
/// Used by the configuration system to resolve named colors from the config
/// file or per-button overrides.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "purple" => Some(PURPLE),
        "yellow" => Some(YELLOW),
        "cyan" => Some(CYAN),
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        _ => None,
    }
}
