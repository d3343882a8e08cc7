//! Input handling: event types, the router, and the synthetic key bridge.
//!
//! Events come in as [`PadEvent`]s, the [`InputRouter`] turns them into
//! controller state, and the optional [`KeyBridge`] mirrors that state
//! back out as auto-repeating key transitions.

pub mod bridge;
pub mod events;
pub mod router;

// Re-export commonly used types at module level
pub use bridge::{KeyBridge, KeySink};
pub use events::{ContactId, PadEvent, Phase, PointerEvent, TouchPoint};
pub use router::{Binding, Contact, InputRouter, MAX_CONTACTS};
