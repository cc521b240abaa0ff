//! Errors raised by the todo reducer.

use thiserror::Error;

/// Why a todo action was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The position does not address an item in the collection
    #[error("position {position} is out of range for {len} item(s)")]
    OutOfRange {
        /// Requested position
        position: usize,
        /// Collection length at the time of the request
        len: usize,
    },
}

impl TodoError {
    /// Position carried by the error
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::OutOfRange { position, .. } => *position,
        }
    }
}
