//! Pointer gesture handling: contact tracking, stick capture, button
//! hit-testing.

use log::debug;

use crate::controller::{Controller, X_AXIS, X_DIR, Y_AXIS, Y_DIR};
use crate::input::events::{ContactId, Phase, PointerEvent};
use crate::util;

use super::{Binding, Contact, InputRouter, MAX_CONTACTS};

impl InputRouter {
    pub(super) fn handle_pointer(&mut self, event: &PointerEvent, controller: &mut Controller) {
        self.upsert_contacts(event);

        // Drive every live pointer contact against the current layout.
        // Synthetic contacts are owned by the keyboard path and skipped.
        let ids: Vec<ContactId> = self
            .contacts
            .keys()
            .filter(|id| !id.is_synthetic())
            .cloned()
            .collect();
        for id in &ids {
            self.drive_stick(id, event.phase, controller);
            self.drive_buttons(id, event.phase, controller);
        }

        if event.phase == Phase::End {
            self.finish(event, controller);
        }
    }

    /// Records positions for the event's touch set. New contacts beyond
    /// the cap are dropped outright and never tracked.
    fn upsert_contacts(&mut self, event: &PointerEvent) {
        for point in &event.touches {
            if let Some(contact) = self.contacts.get_mut(&point.id) {
                contact.x = point.x;
                contact.y = point.y;
            } else if self.pointer_count() < MAX_CONTACTS {
                self.contacts.insert(
                    point.id.clone(),
                    Contact {
                        x: point.x,
                        y: point.y,
                        bound: None,
                    },
                );
            } else {
                debug!("ignoring contact {:?}: {MAX_CONTACTS} already tracked", point.id);
            }
        }
    }

    fn pointer_count(&self) -> usize {
        self.contacts.keys().filter(|id| !id.is_synthetic()).count()
    }

    /// Stick capture and displacement for one contact.
    ///
    /// Displacement clamps per axis at half the stick radius, so the
    /// reachable region is a square. A bound contact that strays past the
    /// capture radius releases the stick entirely.
    fn drive_stick(&mut self, id: &ContactId, phase: Phase, controller: &mut Controller) {
        let Some(stick) = controller.stick().copied() else {
            return;
        };
        let Some(contact) = self.contacts.get_mut(id) else {
            return;
        };
        // A contact holding a button never captures the stick.
        if matches!(contact.bound, Some(Binding::Control(_))) {
            return;
        }

        let offset_x = contact.x - stick.x;
        let offset_y = contact.y - stick.y;
        let dist = util::distance(contact.x, contact.y, stick.x, stick.y);

        if contact.bound.is_none() && phase == Phase::Start && dist < stick.capture_radius() {
            contact.bound = Some(Binding::Stick);
        }
        if contact.bound != Some(Binding::Stick) {
            return;
        }

        let half = stick.half_radius();
        let ox = offset_x.clamp(-half, half);
        let oy = offset_y.clamp(-half, half);
        if let Some(live) = controller.stick_mut() {
            live.dx = live.x + ox;
            live.dy = live.y + oy;
        }
        controller.update_state(&[
            (X_AXIS, ox / half),
            (Y_AXIS, oy / half),
            (X_DIR, util::sign(ox)),
            (Y_DIR, util::sign(oy)),
        ]);

        if dist > stick.capture_radius() {
            contact.bound = None;
            release_stick(controller);
        }
    }

    /// Button binding and press tracking for one contact.
    ///
    /// Binding happens only on a start transition inside a hit region;
    /// dragging onto a button never presses it, and a bound button stays
    /// pressed wherever the contact wanders until the contact ends.
    fn drive_buttons(&mut self, id: &ContactId, phase: Phase, controller: &mut Controller) {
        let Some(contact) = self.contacts.get_mut(id) else {
            return;
        };
        if contact.bound == Some(Binding::Stick) {
            return;
        }
        let (x, y) = (contact.x, contact.y);

        for index in 0..controller.controls().len() {
            let (control_id, hit) = {
                let control = &controller.controls()[index];
                (control.id.clone(), control.contains(x, y))
            };

            if contact.bound.is_none() && phase == Phase::Start && hit {
                contact.bound = Some(Binding::Control(control_id.clone()));
            }
            if contact.bound != Some(Binding::Control(control_id.clone())) {
                continue;
            }

            controller.controls_mut()[index].active = true;
            controller.update_state(&[(&control_id, 1.0)]);
            break;
        }
    }

    /// Releases bindings for lifted contacts and drops them from the table.
    /// With no touches left at all, the whole pad returns to rest.
    fn finish(&mut self, event: &PointerEvent, controller: &mut Controller) {
        for point in &event.changed {
            let Some(contact) = self.contacts.remove(&point.id) else {
                continue;
            };
            match contact.bound {
                Some(Binding::Stick) => release_stick(controller),
                Some(Binding::Control(id)) => {
                    if let Some(control) =
                        controller.controls_mut().iter_mut().find(|c| c.id == id)
                    {
                        control.active = false;
                    }
                    controller.update_state(&[(&id, 0.0)]);
                }
                None => {}
            }
        }

        if event.touches.is_empty() {
            self.contacts.clear();
            controller.reset_states();
        }
    }
}

/// Recenters the stick and zeroes its four state keys.
pub(super) fn release_stick(controller: &mut Controller) {
    if let Some(stick) = controller.stick_mut() {
        stick.reset();
    }
    controller.update_state(&[(X_AXIS, 0.0), (Y_AXIS, 0.0), (X_DIR, 0.0), (Y_DIR, 0.0)]);
}
