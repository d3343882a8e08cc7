//! The pad facade: owns the surface, controller, router and bridge, and
//! exposes the embedding API.
//!
//! A consumer constructs a [`GamePad`] around its drawing surface, calls
//! [`GamePad::setup`] with a configuration, then feeds it input through
//! [`GamePad::events`] and clock ticks through [`GamePad::frame`]. Each
//! pad instance is fully self-contained; nothing here is shared or global.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::PadConfig;
use crate::controller::{Controller, StateSnapshot};
use crate::draw::render;
use crate::draw::surface::DrawSurface;
use crate::error::PadError;
use crate::input::bridge::{KeyBridge, KeySink};
use crate::input::events::PadEvent;
use crate::input::router::InputRouter;

/// Quiet period a resize must survive before it is applied.
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Callback invoked with the state snapshot after every handled event.
pub type StateObserver = Box<dyn FnMut(&StateSnapshot)>;

/// An on-screen gamepad bound to one drawing surface.
pub struct GamePad<S: DrawSurface> {
    surface: S,
    controller: Controller,
    router: InputRouter,
    bridge: Option<KeyBridge>,
    observer: Option<StateObserver>,
    ready: bool,
    running: bool,
    draw_toggle: bool,
    pending_resize: Option<(f64, f64, Instant)>,
}

impl<S: DrawSurface> GamePad<S> {
    /// Wraps a surface; the pad stays inert until [`GamePad::setup`].
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            controller: Controller::new(),
            router: InputRouter::new(),
            bridge: None,
            observer: None,
            ready: false,
            running: false,
            draw_toggle: false,
            pending_resize: None,
        }
    }

    /// Applies a configuration and brings the pad up.
    ///
    /// The config is validated and clamped in place, the control layout is
    /// resolved against the surface dimensions, and a loading splash is
    /// drawn until the first frame replaces it.
    pub fn setup(&mut self, mut config: PadConfig) -> Result<(), PadError> {
        let (width, height) = self.surface.dimensions();
        if width <= 0.0 || height <= 0.0 {
            return Err(PadError::Configuration(format!(
                "surface has no area ({width}x{height})"
            )));
        }

        config.validate_and_clamp();
        self.controller.init(Some(&config), width, height);
        self.router.clear_contacts();

        self.surface.clear();
        render::render_loading(&mut self.surface);

        self.ready = true;
        self.running = true;
        info!("pad ready on a {width}x{height} surface");
        Ok(())
    }

    /// Installs the state observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: StateObserver) {
        self.observer = Some(observer);
    }

    /// Installs a key sink, building the bridge from the configured
    /// repeat timings. The bridge only runs while `bridge.enabled` is set
    /// in the applied configuration.
    pub fn set_key_sink(&mut self, sink: Box<dyn KeySink>) {
        let timings = self
            .controller
            .config()
            .map(|c| c.bridge.clone())
            .unwrap_or_default();
        self.bridge = Some(KeyBridge::new(
            sink,
            Duration::from_millis(timings.repeat_delay_ms),
            Duration::from_millis(timings.repeat_rate_ms),
        ));
    }

    fn bridge_enabled(&self) -> bool {
        self.controller
            .config()
            .is_some_and(|c| c.bridge.enabled)
    }

    /// Routes one event and returns the resulting state snapshot.
    ///
    /// Before setup, and while stopped, events are dropped and the current
    /// (empty or frozen) snapshot is returned unchanged.
    pub fn events(&mut self, event: &PadEvent, now: Instant) -> StateSnapshot {
        if !self.ready || !self.running {
            debug!("event dropped: pad not running");
            return self.controller.get_state().clone();
        }

        let state = self.router.handle(event, &mut self.controller);

        if self.bridge_enabled()
            && let Some(bridge) = self.bridge.as_mut()
        {
            bridge.sync(&self.controller, now);
        }
        if let Some(observer) = self.observer.as_mut() {
            observer(&state);
        }
        state
    }

    /// Reads the current state snapshot without handling any input.
    pub fn observe(&self) -> StateSnapshot {
        self.controller.get_state().clone()
    }

    /// One clock tick. Applies due resizes, fires due key repeats, and
    /// redraws on every second tick so callers can drive it at display
    /// rate while the pad renders at half of it.
    pub fn frame(&mut self, now: Instant) {
        if !self.running {
            return;
        }

        self.apply_pending_resize(now);

        if self.bridge_enabled()
            && let Some(bridge) = self.bridge.as_mut()
        {
            bridge.advance(now);
        }

        self.draw_toggle = !self.draw_toggle;
        if self.draw_toggle {
            self.draw();
        }
    }

    /// Records a resize to be applied once no further resize arrives for
    /// the debounce period. Degenerate dimensions are ignored.
    pub fn resize(&mut self, width: f64, height: f64, now: Instant) {
        if width <= 0.0 || height <= 0.0 {
            warn!("ignoring resize to {width}x{height}");
            return;
        }
        self.pending_resize = Some((width, height, now + RESIZE_DEBOUNCE));
    }

    /// Stops input handling and drawing and returns everything to rest.
    pub fn stop(&mut self) {
        self.running = false;
        self.router.clear_contacts();
        self.controller.reset_states();
        if let Some(bridge) = self.bridge.as_mut() {
            bridge.cancel_all();
        }
        self.surface.clear();
    }

    /// Resumes a stopped pad.
    pub fn start(&mut self) {
        if self.ready {
            self.running = true;
        }
    }

    /// The wrapped surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The live contact router, mainly for inspection.
    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    fn apply_pending_resize(&mut self, now: Instant) {
        let Some((width, height, deadline)) = self.pending_resize else {
            return;
        };
        if now < deadline {
            return;
        }
        self.pending_resize = None;

        self.surface.update_dimensions(width, height);
        self.controller.reinit(width, height);
        // Contacts from before the resize point at stale geometry; they
        // are dropped rather than migrated.
        self.router.clear_contacts();
        debug!("resized to {width}x{height}");
    }

    /// Renders one frame immediately, regardless of the frame toggle.
    pub fn draw(&mut self) {
        let Some(config) = self.controller.config() else {
            return;
        };
        let display = config.display.clone();

        self.surface.clear();
        if display.hidden {
            return;
        }

        self.controller.draw(&mut self.surface, display.hint);

        if display.debug {
            let rows = self.router.contacts().iter().map(|(id, contact)| {
                let value = serde_json::json!({
                    "x": contact.x,
                    "y": contact.y,
                    "bound": contact.bound.as_ref().map(|b| format!("{b:?}")),
                });
                (format!("{id:?}"), value.to_string())
            });
            render::render_debug(&mut self.surface, rows);
        }
        if display.trace {
            let rows = self
                .controller
                .get_state()
                .iter()
                .map(|(key, value)| (key.to_string(), value));
            render::render_trace(&mut self.surface, rows);
        }
    }
}
