//! Keyboard-shaped input: direction masks for the stick and key bindings
//! for controls.

use std::collections::BTreeMap;

use log::debug;

use crate::controller::{Controller, X_AXIS, X_DIR, Y_AXIS, Y_DIR};
use crate::input::events::ContactId;
use crate::util;

use super::{Binding, Contact, InputRouter};

/// Direction mask bits.
pub const MASK_LEFT: u8 = 1;
pub const MASK_UP: u8 = 2;
pub const MASK_RIGHT: u8 = 4;
pub const MASK_DOWN: u8 = 8;

/// The four reserved direction names in keyboard-shaped input.
pub const DIRECTION_NAMES: [&str; 4] = ["left", "up", "right", "down"];

impl InputRouter {
    pub(super) fn handle_keys(&mut self, keys: &BTreeMap<String, bool>, controller: &mut Controller) {
        let mut mask = 0u8;
        for (name, bit) in [
            ("left", MASK_LEFT),
            ("up", MASK_UP),
            ("right", MASK_RIGHT),
            ("down", MASK_DOWN),
        ] {
            if keys.get(name).copied().unwrap_or(false) {
                mask |= bit;
            }
        }

        // A pointer holding the stick outranks the keyboard.
        if controller.stick().is_some() && !self.stick_held_by_pointer() {
            self.apply_direction_mask(mask, controller);
        }

        for (key, pressed) in keys {
            if DIRECTION_NAMES.contains(&key.as_str()) {
                continue;
            }
            self.drive_keyed_controls(key, *pressed, controller);
        }
    }

    /// Snaps the stick to the direction encoded by the mask.
    ///
    /// Each axis snaps to its full half-radius displacement. Contradictory
    /// masks (left+right, up+down) have no direction and reset the stick,
    /// the same as releasing every direction key.
    fn apply_direction_mask(&mut self, mask: u8, controller: &mut Controller) {
        let Some(stick) = controller.stick().copied() else {
            return;
        };
        let half = stick.half_radius();

        let offset = match mask {
            1 => Some((-half, 0.0)),   // left
            2 => Some((0.0, -half)),   // up
            3 => Some((-half, -half)), // up-left
            4 => Some((half, 0.0)),    // right
            6 => Some((half, -half)),  // up-right
            8 => Some((0.0, half)),    // down
            9 => Some((-half, half)),  // down-left
            12 => Some((half, half)),  // down-right
            _ => None,
        };

        match offset {
            Some((ox, oy)) => {
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
                self.contacts.insert(
                    ContactId::KeyStick,
                    Contact {
                        x: stick.x,
                        y: stick.y,
                        bound: Some(Binding::Stick),
                    },
                );
            }
            None => {
                if mask != 0 {
                    debug!("direction mask {mask:#06b} has no direction, resetting stick");
                }
                super::pointer::release_stick(controller);
                self.contacts.remove(&ContactId::KeyStick);
            }
        }
    }

    /// Presses or releases every control whose key binding names `key`.
    ///
    /// A press synthesizes a contact at the control's hit-region midpoint
    /// so the contact table reflects keyboard activity too. Keys bound to
    /// nothing are ignored.
    fn drive_keyed_controls(&mut self, key: &str, pressed: bool, controller: &mut Controller) {
        let targets: Vec<(usize, String, (f64, f64))> = controller
            .controls()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.key.as_deref() == Some(key))
            .map(|(i, c)| (i, c.id.clone(), c.hit.midpoint()))
            .collect();

        for (index, id, (x, y)) in targets {
            if pressed {
                self.contacts.insert(
                    ContactId::Key(id.clone()),
                    Contact {
                        x,
                        y,
                        bound: Some(Binding::Control(id.clone())),
                    },
                );
                controller.controls_mut()[index].active = true;
                controller.update_state(&[(&id, 1.0)]);
            } else {
                self.contacts.remove(&ContactId::Key(id.clone()));
                controller.controls_mut()[index].active = false;
                controller.update_state(&[(&id, 0.0)]);
            }
        }
    }
}
