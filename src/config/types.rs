//! Configuration type definitions.

use crate::draw::color::{self, Color};
use crate::layout::Corner;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named palette color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "red"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, purple, yellow, cyan, black, white
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`].
    ///
    /// Unknown color names default to red with a warning. RGB arrays use the
    /// pad's default opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => color::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using red", name);
                color::RED
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

/// Per-button override applied positionally over the selected preset.
///
/// Any field left out keeps the preset's value; `key` has no preset default
/// and leaves the button unbound from the keyboard.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, JsonSchema)]
pub struct ButtonSpec {
    /// Button name, also the key in the state snapshot
    #[serde(default)]
    pub name: Option<String>,

    /// Fill color override
    #[serde(default)]
    pub color: Option<ColorSpec>,

    /// Keyboard key bound to this button (e.g. "s")
    #[serde(default)]
    pub key: Option<String>,
}

/// Synthetic keyboard bridge tuning.
///
/// The bridge re-emits pad state as key down/up events with auto-repeat.
/// Disabled by default; consumers opt in and supply a key sink.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct BridgeConfig {
    /// Whether the bridge is active
    #[serde(default)]
    pub enabled: bool,

    /// Initial delay before auto-repeat starts, in milliseconds
    #[serde(default = "default_repeat_delay_ms")]
    pub repeat_delay_ms: u64,

    /// Interval between repeated key-down events, in milliseconds
    #[serde(default = "default_repeat_rate_ms")]
    pub repeat_rate_ms: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            repeat_delay_ms: default_repeat_delay_ms(),
            repeat_rate_ms: default_repeat_rate_ms(),
        }
    }
}

/// Display toggles for the pad overlay.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, JsonSchema)]
pub struct DisplayConfig {
    /// Show the live contact table (left-aligned overlay)
    #[serde(default)]
    pub debug: bool,

    /// Show the state snapshot table (right-aligned overlay)
    #[serde(default)]
    pub trace: bool,

    /// Draw each control's bound key above it
    #[serde(default)]
    pub hint: bool,

    /// Suppress all drawing while input keeps working
    #[serde(default)]
    pub hidden: bool,
}

/// Main pad configuration.
///
/// Every field has a documented default; an empty config produces the
/// default four-button arrangement with a stick and a start button in the
/// bottom-right corner.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct PadConfig {
    /// Render-target identifier handed to the surface backend
    #[serde(default)]
    pub canvas: Option<String>,

    /// Corner anchor for the button cluster
    #[serde(default)]
    pub layout: Corner,

    /// Enable the directional stick
    #[serde(default = "default_true")]
    pub joystick: bool,

    /// Append the start rect-button
    #[serde(default = "default_true")]
    pub start: bool,

    /// Append the select rect-button
    #[serde(default)]
    pub select: bool,

    /// Round-button overrides, at most four; extras are dropped
    #[serde(default)]
    pub buttons: Vec<ButtonSpec>,

    /// Overlay display toggles
    #[serde(default)]
    pub display: DisplayConfig,

    /// Synthetic keyboard bridge settings
    #[serde(default)]
    pub bridge: BridgeConfig,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            canvas: None,
            layout: Corner::default(),
            joystick: true,
            start: true,
            select: false,
            buttons: Vec::new(),
            display: DisplayConfig::default(),
            bridge: BridgeConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_repeat_delay_ms() -> u64 {
    300
}

fn default_repeat_rate_ms() -> u64 {
    50
}
