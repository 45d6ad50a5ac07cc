//! Cursor error type.
//!
//! Every fallible cursor operation reports the same failure: the cursor
//! was read or advanced at a position the container cannot serve.
//!
//! # Examples
//!
//! ```rust
//! use magical_container::{CursorError, MagicalContainer};
//!
//! let container = MagicalContainer::new();
//! let cursor = container.ascending();
//!
//! assert_eq!(
//!     cursor.value(),
//!     Err(CursorError::OutOfRange { position: 0, size: 0 })
//! );
//! ```

use thiserror::Error;

/// Error returned by cursor reads and advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The cursor is at or beyond its terminal position, or points at a
    /// position the traversal does not expose.
    #[error("cursor position {position} is out of range for container of size {size}")]
    OutOfRange {
        /// Raw index the cursor was at when the operation failed.
        position: usize,
        /// Container size observed at the time of the failure.
        size: usize,
    },
}

impl CursorError {
    /// Creates an `OutOfRange` error and records it at debug level.
    pub(crate) fn out_of_range(position: usize, size: usize) -> Self {
        tracing::debug!(position, size, "cursor operation out of range");
        Self::OutOfRange { position, size }
    }

    /// Returns `true` if this is an `OutOfRange` error.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
