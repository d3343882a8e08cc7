//! Routes pad events to the controller.
//!
//! The router owns the contact table: every live input point, keyed by
//! [`ContactId`], together with its binding. A contact binds to at most one
//! target (the stick or a named control) for its whole lifetime, which is
//! what keeps a finger that pressed a button from stealing the stick when
//! it drags across it.

mod keys;
mod pointer;

use std::collections::BTreeMap;

use log::debug;

use crate::controller::{Controller, StateSnapshot};
use crate::input::events::{ContactId, PadEvent};

/// Hard cap on simultaneously tracked pointer contacts.
pub const MAX_CONTACTS: usize = 5;

/// What a contact is currently driving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    Stick,
    /// Bound to the control with this id.
    Control(String),
}

/// One live input point and its binding.
#[derive(Debug, Clone)]
pub struct Contact {
    pub x: f64,
    pub y: f64,
    pub bound: Option<Binding>,
}

/// Translates [`PadEvent`]s into controller state changes.
#[derive(Debug, Default)]
pub struct InputRouter {
    contacts: BTreeMap<ContactId, Contact>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live contact table, keyed by contact identity.
    pub fn contacts(&self) -> &BTreeMap<ContactId, Contact> {
        &self.contacts
    }

    /// Drops every tracked contact without touching controller state.
    /// Used on teardown and resize, where the controller is reset or
    /// rebuilt separately.
    pub fn clear_contacts(&mut self) {
        if !self.contacts.is_empty() {
            debug!("dropping {} live contacts", self.contacts.len());
            self.contacts.clear();
        }
    }

    /// Applies one event and returns the resulting state snapshot.
    pub fn handle(&mut self, event: &PadEvent, controller: &mut Controller) -> StateSnapshot {
        match event {
            PadEvent::Pointer(pointer) => self.handle_pointer(pointer, controller),
            PadEvent::Keys(keys) => self.handle_keys(keys, controller),
        }
        controller.get_state().clone()
    }

    /// True while a physical pointer contact is driving the stick.
    fn stick_held_by_pointer(&self) -> bool {
        self.contacts
            .iter()
            .any(|(id, c)| !id.is_synthetic() && c.bound == Some(Binding::Stick))
    }
}

#[cfg(test)]
mod tests;
