//! On-screen gamepad input engine.
//!
//! Maps touch, mouse and keyboard-shaped input onto a configurable virtual
//! gamepad (round buttons, start/select, a directional stick) and exposes
//! the result as a flat state snapshot. Rendering is delegated to a
//! [`draw::DrawSurface`] implementation supplied by the embedder, so the
//! engine itself stays backend-agnostic and fully testable headless.
//!
//! Typical embedding:
//!
//! ```
//! use std::time::Instant;
//! use hudpad::config::PadConfig;
//! use hudpad::draw::RecordingSurface;
//! use hudpad::input::PadEvent;
//! use hudpad::pad::GamePad;
//!
//! let mut pad = GamePad::new(RecordingSurface::new(800.0, 600.0));
//! pad.setup(PadConfig::default()).unwrap();
//!
//! let state = pad.events(&PadEvent::keys([("left", true)]), Instant::now());
//! assert_eq!(state.get("x-axis"), -1.0);
//! ```

pub mod config;
pub mod controller;
pub mod draw;
pub mod error;
pub mod input;
pub mod layout;
pub mod pad;
pub mod util;

pub use config::PadConfig;
pub use controller::StateSnapshot;
pub use error::PadError;
pub use input::PadEvent;
pub use pad::GamePad;
