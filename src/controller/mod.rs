//! Control ownership: configured buttons, the stick, and the state snapshot.
//!
//! The controller resolves the configured layout against the surface
//! dimensions, builds each control's cached hit region, and owns the state
//! snapshot. All snapshot mutation flows through [`Controller::update_state`]
//! and [`Controller::reset_states`]; the input router is the only caller
//! during interactive use.

pub mod control;
pub mod state;
pub mod stick;

// Re-export commonly used types at module level
pub use control::{Control, ControlShape, HitRegion};
pub use state::{STICK_KEYS, StateSnapshot, X_AXIS, X_DIR, Y_AXIS, Y_DIR};
pub use stick::{STICK_RADIUS, Stick};

use crate::config::PadConfig;
use crate::draw::color;
use crate::draw::render;
use crate::draw::surface::DrawSurface;
use crate::layout::{self, ButtonPreset, Corner};
use crate::util::Rect;
use log::debug;

/// Owns the configured controls, their screen positions and hit regions,
/// and the current state snapshot.
#[derive(Debug, Default)]
pub struct Controller {
    controls: Vec<Control>,
    stick: Option<Stick>,
    anchor: (f64, f64),
    state: StateSnapshot,
    config: Option<PadConfig>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes controls, hit regions and the state snapshot for the
    /// given configuration and surface dimensions.
    ///
    /// A missing config is a no-op, not an error: callers that have nothing
    /// to configure simply get an empty controller.
    pub fn init(&mut self, config: Option<&PadConfig>, width: f64, height: f64) {
        let Some(config) = config else {
            debug!("Controller::init called without config; ignoring");
            return;
        };

        self.config = Some(config.clone());
        self.controls.clear();
        self.stick = None;
        self.state = StateSnapshot::new();

        // Resolve the preset arrangement and apply positional overrides.
        let mut presets: Vec<ButtonPreset> = layout::preset_for(config.buttons.len()).to_vec();
        let mut keys: Vec<Option<String>> = vec![None; presets.len()];
        let mut names: Vec<String> = presets.iter().map(|p| p.name.to_string()).collect();
        for (n, spec) in config.buttons.iter().enumerate().take(presets.len()) {
            if let Some(name) = &spec.name {
                names[n] = name.clone();
            }
            if let Some(color) = &spec.color {
                presets[n].color = color.to_color();
            }
            keys[n] = spec.key.clone();
        }

        // Shift pushes left-edge layouts inward; top-left additionally
        // drops the cluster below the anchor row.
        let shift: f64 = presets.iter().map(|p| p.radius).sum();
        if config.layout == Corner::TopLeft {
            for preset in &mut presets {
                preset.dy -= preset.radius * 2.0;
            }
        }

        self.anchor = config.layout.anchor(width, height, shift);

        for ((preset, name), key) in presets.iter().zip(names).zip(keys) {
            let cx = self.anchor.0 - preset.dx;
            let cy = self.anchor.1 - preset.dy;
            let control = Control::round(name, cx, cy, preset.radius, preset.color).with_key(key);
            self.state.register(&control.id);
            self.controls.push(control);
        }

        if config.start || config.select {
            self.append_start_select(config, width, height);
        }

        if config.joystick {
            // Mirrored horizontally from the button anchor.
            let stick = Stick::new(width - self.anchor.0, self.anchor.1);
            for key in STICK_KEYS {
                self.state.register(key);
            }
            self.stick = Some(stick);
        }

        debug!(
            "Controller initialized: {} controls, stick: {}, anchor: {:?}",
            self.controls.len(),
            self.stick.is_some(),
            self.anchor
        );
    }

    /// Start/select rect-controls, positioned along the anchor edge.
    ///
    /// With both present, start sits at the midline and select left of it
    /// by twice the button height; alone, either sits one width left of
    /// the midline.
    fn append_start_select(&mut self, config: &PadConfig, width: f64, height: f64) {
        let (w, h) = (layout::START_SELECT_W, layout::START_SELECT_H);
        let y_offset = if config.layout.is_top() {
            layout::BUTTON_OFFSET.1
        } else {
            height - layout::BUTTON_OFFSET.1
        };
        let y = y_offset - h;

        let push = |controller: &mut Self, name: &str, x: f64| {
            let control = Control::rect(name, Rect::new(x, y, w, h), color::BLACK);
            controller.state.register(&control.id);
            controller.controls.push(control);
        };

        if config.start && config.select {
            push(self, "start", width / 2.0);
            push(self, "select", width / 2.0 - w - h * 2.0);
        } else if config.start {
            push(self, "start", width / 2.0 - w);
        } else {
            push(self, "select", width / 2.0 - w);
        }
    }

    /// Re-runs init with the last applied config (resize path).
    ///
    /// Contacts alive at the moment of a resize are not migrated; the
    /// router's no-contacts reset covers recovery.
    pub fn reinit(&mut self, width: f64, height: f64) {
        if let Some(config) = self.config.take() {
            self.init(Some(&config), width, height);
        }
    }

    /// The last applied configuration, if any.
    pub fn config(&self) -> Option<&PadConfig> {
        self.config.as_ref()
    }

    /// Resolved cluster anchor position.
    pub fn anchor(&self) -> (f64, f64) {
        self.anchor
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut [Control] {
        &mut self.controls
    }

    pub fn stick(&self) -> Option<&Stick> {
        self.stick.as_ref()
    }

    pub fn stick_mut(&mut self) -> Option<&mut Stick> {
        self.stick.as_mut()
    }

    /// Reads the current state snapshot.
    pub fn get_state(&self) -> &StateSnapshot {
        &self.state
    }

    /// Merge-assigns entries over the snapshot's fixed key set.
    pub fn update_state(&mut self, updates: &[(&str, f64)]) {
        self.state.merge(updates);
    }

    /// Zero-fills every key without removing any.
    pub fn reset_states(&mut self) {
        self.state.zero_all();
        for control in &mut self.controls {
            control.active = false;
        }
        if let Some(stick) = &mut self.stick {
            stick.reset();
        }
    }

    /// Draws every control, then the stick, using surface primitives.
    ///
    /// Pure side effect; no state mutation.
    pub fn draw(&self, surface: &mut dyn DrawSurface, hint: bool) {
        for control in &self.controls {
            render::render_control(surface, control, hint);
        }
        if let Some(stick) = &self.stick {
            render::render_stick(surface, stick);
        }
    }
}

#[cfg(test)]
mod tests;
