//! Tagged event types consumed by the input router.
//!
//! Pointer gestures and keyboard-shaped input share one entry point; the
//! distinction is encoded in [`PadEvent`] at the call boundary rather than
//! inferred from event shape.

use std::collections::BTreeMap;

/// Gesture phase of a pointer event, unified across mouse and touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// touchstart / mousedown
    Start,
    /// touchmove / mousemove
    Move,
    /// touchend / mouseup
    End,
}

/// Identity of a tracked input point.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactId {
    /// A hardware touch identifier.
    Touch(u64),
    /// The single synthesized mouse contact.
    Desktop,
    /// Contact synthesized from a key press driving the named control.
    Key(String),
    /// Contact synthesized from directional keys driving the stick.
    KeyStick,
}

impl ContactId {
    /// True for contacts synthesized from keyboard input rather than a
    /// physical pointer.
    pub fn is_synthetic(&self) -> bool {
        matches!(self, ContactId::Key(_) | ContactId::KeyStick)
    }
}

/// One active input point in a pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchPoint {
    pub id: ContactId,
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(id: ContactId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// A pointer gesture event.
///
/// `touches` is the full set of points still on the surface; `changed`
/// lists the points that triggered the event (only meaningful on
/// [`Phase::End`], where it names the lifted contacts).
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: Phase,
    pub touches: Vec<TouchPoint>,
    pub changed: Vec<TouchPoint>,
}

impl PointerEvent {
    /// Touch event constructor.
    pub fn touch(phase: Phase, touches: Vec<TouchPoint>, changed: Vec<TouchPoint>) -> Self {
        Self {
            phase,
            touches,
            changed,
        }
    }

    /// Mouse press, synthesized as the single `desktop` contact.
    pub fn mouse_down(x: f64, y: f64) -> Self {
        Self {
            phase: Phase::Start,
            touches: vec![TouchPoint::new(ContactId::Desktop, x, y)],
            changed: Vec::new(),
        }
    }

    /// Mouse drag.
    pub fn mouse_move(x: f64, y: f64) -> Self {
        Self {
            phase: Phase::Move,
            touches: vec![TouchPoint::new(ContactId::Desktop, x, y)],
            changed: Vec::new(),
        }
    }

    /// Mouse release. The desktop contact is listed as changed and the
    /// remaining touch set is empty, so the router's no-contacts reset
    /// applies.
    pub fn mouse_up(x: f64, y: f64) -> Self {
        Self {
            phase: Phase::End,
            touches: Vec::new(),
            changed: vec![TouchPoint::new(ContactId::Desktop, x, y)],
        }
    }
}

/// Input consumed by the router: either a pointer gesture or a
/// keyboard-shaped mapping of named keys to pressed state.
#[derive(Debug, Clone, PartialEq)]
pub enum PadEvent {
    Pointer(PointerEvent),
    /// Direction names (`left`, `up`, `right`, `down`) plus any control
    /// key bindings, each mapped to its pressed state.
    Keys(BTreeMap<String, bool>),
}

impl PadEvent {
    /// Convenience constructor for keyboard-shaped input.
    pub fn keys<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        PadEvent::Keys(
            pairs
                .into_iter()
                .map(|(name, pressed)| (name.into(), pressed))
                .collect(),
        )
    }
}
