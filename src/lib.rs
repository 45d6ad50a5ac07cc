//! # magical-container
//!
//! An in-memory integer container with three traversal orders.
//!
//! ## Overview
//!
//! [`MagicalContainer`] keeps its elements sorted ascending and hands out
//! cursors that walk it in different orders:
//!
//! - **Ascending**: [`AscendingIterator`] visits every element, smallest first
//! - **Side-cross**: [`SideCrossIterator`] alternates lowest and highest
//!   unvisited elements
//! - **Prime**: [`PrimeIterator`] visits only the prime elements
//!
//! Every cursor supports the explicit protocol (`begin`, `end`, `advance`,
//! `value` and the comparison operators) and also implements [`Iterator`].
//! Cursors borrow the container and observe mutations made after they were
//! created.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`MagicalContainer`]
//!
//! ## Example
//!
//! ```rust
//! use magical_container::prelude::*;
//!
//! let container = MagicalContainer::new();
//! for element in [5, 2, 10, 7, 3, 9] {
//!     container.add_element(element);
//! }
//!
//! let mut cursor = container.begin_cross();
//! let mut visited = Vec::new();
//! while cursor != container.end_cross() {
//!     visited.push(cursor.value()?);
//!     cursor.advance()?;
//! }
//! assert_eq!(visited, vec![2, 10, 3, 9, 5, 7]);
//! # Ok::<(), CursorError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use magical_container::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::error::*;
}

pub mod container;
pub mod error;

pub use container::AscendingIterator;
pub use container::Cursor;
pub use container::Direction;
pub use container::MagicalContainer;
pub use container::PrimeIterator;
pub use container::SideCrossIterator;
pub use container::is_prime;
pub use error::CursorError;
