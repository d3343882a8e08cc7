//! The state snapshot: the pad's sole observable output.

use std::collections::BTreeMap;

/// Stick state key: horizontal axis in [-1, 1].
pub const X_AXIS: &str = "x-axis";
/// Stick state key: vertical axis in [-1, 1].
pub const Y_AXIS: &str = "y-axis";
/// Stick state key: horizontal direction in {-1, 0, 1}.
pub const X_DIR: &str = "x-dir";
/// Stick state key: vertical direction in {-1, 0, 1}.
pub const Y_DIR: &str = "y-dir";

/// The four stick keys added to the snapshot when a stick is configured.
pub const STICK_KEYS: [&str; 4] = [X_DIR, Y_DIR, X_AXIS, Y_AXIS];

/// Mapping from control id to activation value.
///
/// Buttons report 0 or 1; the four stick keys report axis and direction
/// values. The key set is fixed at controller init - updates to unknown
/// keys are ignored rather than growing the map, and zeroing keeps every
/// key present.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateSnapshot {
    values: BTreeMap<String, f64>,
}

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a key, initialized to zero. Called only during init.
    pub(crate) fn register(&mut self, key: &str) {
        self.values.insert(key.to_string(), 0.0);
    }

    /// Returns the value for a key, or zero for unknown keys.
    pub fn get(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    /// Returns true if the key exists in the snapshot.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Merge-assigns the given entries over known keys.
    pub(crate) fn merge(&mut self, updates: &[(&str, f64)]) {
        for (key, value) in updates {
            if let Some(slot) = self.values.get_mut(*key) {
                *slot = *value;
            }
        }
    }

    /// Sets every known key to zero without removing keys.
    pub(crate) fn zero_all(&mut self) {
        for value in self.values.values_mut() {
            *value = 0.0;
        }
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of keys in the snapshot.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_ignores_unknown_keys() {
        let mut state = StateSnapshot::new();
        state.register("a");
        state.merge(&[("a", 1.0), ("ghost", 1.0)]);

        assert_eq!(state.get("a"), 1.0);
        assert!(!state.contains("ghost"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn zero_all_keeps_the_key_set() {
        let mut state = StateSnapshot::new();
        state.register("a");
        state.register(X_AXIS);
        state.merge(&[("a", 1.0), (X_AXIS, -0.5)]);

        state.zero_all();

        assert_eq!(state.len(), 2);
        assert_eq!(state.get("a"), 0.0);
        assert_eq!(state.get(X_AXIS), 0.0);
    }
}
