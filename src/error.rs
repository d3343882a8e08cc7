//! Error taxonomy for pad setup and resource loading.
//!
//! Interactive input handling never surfaces errors: malformed events are
//! absorbed and the previous state snapshot is returned unchanged.

use thiserror::Error;

/// Errors reported by [`crate::pad::GamePad`] setup.
#[derive(Debug, Error)]
pub enum PadError {
    /// A required collaborator is missing or unusable (fatal at setup time).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A non-essential resource failed to load; setup continues with
    /// defaults after logging.
    #[error("resource load error: {0}")]
    ResourceLoad(String),
}
