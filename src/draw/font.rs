//! Font size presets for labels and overlays.

/// Named font sizes used by the pad renderer.
///
/// A fixed typographic scale: button labels, overlay body text, overlay
/// headings, and two larger display sizes kept for consumer styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    /// Button labels (14px)
    Button,
    /// Overlay body rows (10px)
    Small,
    /// Overlay headings (20px)
    Medium,
    /// Large display text (24px)
    Large,
    /// Huge display text (48px)
    Huge,
}

impl FontSize {
    /// Size in surface pixels.
    pub fn px(self) -> f64 {
        match self {
            FontSize::Button => 14.0,
            FontSize::Small => 10.0,
            FontSize::Medium => 20.0,
            FontSize::Large => 24.0,
            FontSize::Huge => 48.0,
        }
    }
}
