//! Synthetic keyboard bridge: mirrors pad state as key events with
//! OS-style auto-repeat.
//!
//! Consumers that want the pad to look like a keyboard install a
//! [`KeySink`] and feed the bridge from the event path ([`KeyBridge::sync`])
//! and the frame path ([`KeyBridge::advance`]). Repeats are cancelled by
//! bumping a generation counter rather than by tearing down timers, so a
//! stale scheduled repeat can never fire after its key was released.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use log::debug;

use crate::controller::{Controller, X_DIR, Y_DIR};

/// Key names and legacy codes for the four stick directions.
pub const ARROW_LEFT: (&str, u32) = ("ArrowLeft", 37);
pub const ARROW_UP: (&str, u32) = ("ArrowUp", 38);
pub const ARROW_RIGHT: (&str, u32) = ("ArrowRight", 39);
pub const ARROW_DOWN: (&str, u32) = ("ArrowDown", 40);

/// Receiver for synthesized key transitions.
pub trait KeySink {
    /// A key went down, or repeated while held (`repeat` is true for
    /// every transition after the first).
    fn key_down(&mut self, key: &str, code: u32, repeat: bool);
    /// A held key was released.
    fn key_up(&mut self, key: &str, code: u32);
}

/// Repeat schedule for one held key.
#[derive(Debug)]
struct HeldKey {
    generation: u64,
    code: u32,
    next_fire: Instant,
}

/// Drives a [`KeySink`] from controller state.
pub struct KeyBridge {
    sink: Box<dyn KeySink>,
    delay: Duration,
    rate: Duration,
    held: BTreeMap<String, HeldKey>,
    generation: u64,
}

impl KeyBridge {
    pub fn new(sink: Box<dyn KeySink>, delay: Duration, rate: Duration) -> Self {
        Self {
            sink,
            delay,
            rate,
            held: BTreeMap::new(),
            generation: 0,
        }
    }

    /// Number of keys currently held down.
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Diffs controller state against the held set, emitting key-down for
    /// newly active keys and key-up for released ones. `now` anchors the
    /// first repeat of each new key.
    pub fn sync(&mut self, controller: &Controller, now: Instant) {
        let desired = desired_keys(controller);

        for (key, code) in &desired {
            if !self.held.contains_key(key) {
                self.sink.key_down(key, *code, false);
                self.held.insert(
                    key.clone(),
                    HeldKey {
                        generation: self.generation,
                        code: *code,
                        next_fire: now + self.delay,
                    },
                );
            }
        }

        let released: Vec<String> = self
            .held
            .keys()
            .filter(|key| !desired.contains_key(*key))
            .cloned()
            .collect();
        for key in released {
            if let Some(held) = self.held.remove(&key) {
                self.sink.key_up(&key, held.code);
            }
        }
    }

    /// Fires repeats that are due at `now`: the first after the configured
    /// delay, then one per rate interval. Entries from a cancelled
    /// generation never fire.
    pub fn advance(&mut self, now: Instant) {
        for (key, held) in self.held.iter_mut() {
            if held.generation != self.generation {
                continue;
            }
            while held.next_fire <= now {
                self.sink.key_down(key, held.code, true);
                held.next_fire += self.rate;
            }
        }
    }

    /// Drops every held key without emitting key-ups and invalidates any
    /// pending repeat. Used on teardown.
    pub fn cancel_all(&mut self) {
        if !self.held.is_empty() {
            debug!("cancelling {} held keys", self.held.len());
        }
        self.generation += 1;
        self.held.clear();
    }
}

impl std::fmt::Debug for KeyBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyBridge")
            .field("delay", &self.delay)
            .field("rate", &self.rate)
            .field("held", &self.held)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

/// The keys the current controller state asks to have held down.
///
/// Buttons contribute their configured key binding while pressed, with
/// the code taken from the binding's first character. Stick directions
/// contribute the matching arrow keys.
fn desired_keys(controller: &Controller) -> BTreeMap<String, u32> {
    let mut desired = BTreeMap::new();
    let state = controller.get_state();

    for control in controller.controls() {
        if let Some(key) = &control.key
            && state.get(&control.id) == 1.0
            && let Some(first) = key.chars().next()
        {
            desired.insert(key.clone(), first as u32);
        }
    }

    for (dir_key, negative, positive) in [
        (X_DIR, ARROW_LEFT, ARROW_RIGHT),
        (Y_DIR, ARROW_UP, ARROW_DOWN),
    ] {
        let value = state.get(dir_key);
        if value < 0.0 {
            desired.insert(negative.0.to_string(), negative.1);
        } else if value > 0.0 {
            desired.insert(positive.0.to_string(), positive.1);
        }
    }

    desired
}
