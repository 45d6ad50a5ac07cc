//! Sorted integer container and its cursors.
//!
//! This module provides [`MagicalContainer`], a mutable sequence of `i32`
//! values that is kept sorted ascending after every mutation, and three
//! cursor types that traverse it in different orders:
//!
//! - [`AscendingIterator`]: every element, smallest first
//! - [`SideCrossIterator`]: alternates between the lowest and highest
//!   unvisited positions, meeting in the middle
//! - [`PrimeIterator`]: only the prime elements, smallest first
//!
//! # Live Views
//!
//! Cursors borrow the container and hold nothing but position state. The
//! container is mutated through `&self`, so elements may be added or removed
//! while cursors are alive; a cursor re-checks its position against the
//! current contents on every read and advance.
//!
//! # Examples
//!
//! ```rust
//! use magical_container::MagicalContainer;
//!
//! let container: MagicalContainer = [5, 2, 10, 7, 3, 9].into_iter().collect();
//!
//! let ascending: Vec<i32> = container.ascending().collect();
//! assert_eq!(ascending, vec![2, 3, 5, 7, 9, 10]);
//!
//! let side_cross: Vec<i32> = container.side_cross().collect();
//! assert_eq!(side_cross, vec![2, 10, 3, 9, 5, 7]);
//!
//! let primes: Vec<i32> = container.prime().collect();
//! assert_eq!(primes, vec![2, 3, 5, 7]);
//! ```
//!
//! ## Cursor Protocol
//!
//! ```rust
//! use magical_container::MagicalContainer;
//!
//! let container: MagicalContainer = [5, 2].into_iter().collect();
//! let mut cursor = container.begin_ascending();
//!
//! assert_eq!(cursor.value(), Ok(2));
//! cursor.advance().unwrap();
//! assert_eq!(cursor.value(), Ok(5));
//! cursor.advance().unwrap();
//! assert_eq!(cursor, container.end_ascending());
//! assert!(cursor.advance().is_err());
//! ```

mod ascending;
mod prime;
mod side_cross;

pub use ascending::AscendingIterator;
pub use prime::PrimeIterator;
pub use prime::is_prime;
pub use side_cross::Direction;
pub use side_cross::SideCrossIterator;

use crate::error::CursorError;
use std::cell::RefCell;
use std::fmt;

// =============================================================================
// Cursor Trait
// =============================================================================

/// Common protocol of the container's cursors.
///
/// A cursor is a position inside a [`MagicalContainer`]. `begin` and `end`
/// produce the sentinels of the traversal, `advance` moves one step and
/// `value` reads the element under the cursor. Reads and advances at the
/// terminal position fail with [`CursorError::OutOfRange`].
pub trait Cursor<'a>: Sized + PartialEq {
    /// Returns the container this cursor walks over.
    fn container(&self) -> &'a MagicalContainer;

    /// Returns a cursor at the first position of the traversal.
    fn begin(&self) -> Self;

    /// Returns the terminal sentinel of the traversal.
    fn end(&self) -> Self;

    /// Moves the cursor one step forward.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::OutOfRange`] if the cursor is already at or
    /// past its terminal position.
    fn advance(&mut self) -> Result<&mut Self, CursorError>;

    /// Reads the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::OutOfRange`] if the cursor does not point at
    /// an element of the traversal.
    fn value(&self) -> Result<i32, CursorError>;

    /// Returns `true` if the cursor is at its terminal position.
    fn is_end(&self) -> bool;

    /// Collects the remaining values by reading and advancing until the end.
    ///
    /// # Errors
    ///
    /// Propagates the first [`CursorError`] raised while walking.
    fn drain_values(mut self) -> Result<Vec<i32>, CursorError> {
        let mut values = Vec::new();
        while !self.is_end() {
            values.push(self.value()?);
            self.advance()?;
        }
        Ok(values)
    }
}

// =============================================================================
// MagicalContainer Definition
// =============================================================================

/// A mutable integer sequence kept sorted ascending.
///
/// Duplicates are allowed. Mutation goes through `&self` so that cursors
/// borrowing the container stay valid while it changes.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `add_element`    | O(n)       |
/// | `remove_element` | O(n)       |
/// | `size`           | O(1)       |
/// | `contains`       | O(log n)   |
///
/// # Examples
///
/// ```rust
/// use magical_container::MagicalContainer;
///
/// let container = MagicalContainer::new();
/// container.add_element(3);
/// container.add_element(1);
/// container.add_element(3);
/// assert_eq!(container.to_vec(), vec![1, 3, 3]);
///
/// container.remove_element(3);
/// assert_eq!(container.to_vec(), vec![1]);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MagicalContainer {
    /// Elements in ascending order
    elements: RefCell<Vec<i32>>,
}

static_assertions::assert_not_impl_any!(MagicalContainer: Sync);

impl MagicalContainer {
    /// Creates a new empty container.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: RefCell::new(Vec::new()),
        }
    }

    /// Inserts `element`, keeping the sequence sorted.
    ///
    /// Equal elements are placed after the existing ones.
    pub fn add_element(&self, element: i32) {
        let mut elements = self.elements.borrow_mut();
        let index = elements.partition_point(|&existing| existing <= element);
        elements.insert(index, element);
        tracing::trace!(element, size = elements.len(), "element added");
    }

    /// Removes every occurrence of `element`.
    ///
    /// Does nothing if `element` is not present.
    pub fn remove_element(&self, element: i32) {
        let mut elements = self.elements.borrow_mut();
        let before = elements.len();
        elements.retain(|&existing| existing != element);
        tracing::trace!(
            element,
            removed = before - elements.len(),
            size = elements.len(),
            "element removed"
        );
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    /// Returns `true` if `element` is present.
    #[must_use]
    pub fn contains(&self, element: i32) -> bool {
        self.elements.borrow().binary_search(&element).is_ok()
    }

    /// Returns a sorted copy of the current elements.
    #[must_use]
    pub fn to_vec(&self) -> Vec<i32> {
        self.elements.borrow().clone()
    }

    /// Returns the element at `index` in sorted order.
    pub(crate) fn element_at(&self, index: usize) -> Option<i32> {
        self.elements.borrow().get(index).copied()
    }

    /// Returns the position of the first element at or after `start` that
    /// satisfies `predicate`, or the current size if there is none.
    pub(crate) fn position_from(&self, start: usize, predicate: impl Fn(i32) -> bool) -> usize {
        let elements = self.elements.borrow();
        elements
            .iter()
            .skip(start)
            .position(|&element| predicate(element))
            .map_or(elements.len(), |offset| start + offset)
    }

    // =========================================================================
    // Sentinels
    // =========================================================================

    /// Returns an ascending cursor at the first element.
    #[must_use]
    pub fn begin_ascending(&self) -> AscendingIterator<'_> {
        AscendingIterator::new(self)
    }

    /// Returns the terminal ascending cursor.
    #[must_use]
    pub fn end_ascending(&self) -> AscendingIterator<'_> {
        AscendingIterator::new(self).end()
    }

    /// Returns a side-cross cursor at the first element.
    #[must_use]
    pub fn begin_cross(&self) -> SideCrossIterator<'_> {
        SideCrossIterator::new(self)
    }

    /// Returns the terminal side-cross cursor.
    #[must_use]
    pub fn end_cross(&self) -> SideCrossIterator<'_> {
        SideCrossIterator::new(self).end()
    }

    /// Returns a prime cursor at raw index 0.
    #[must_use]
    pub fn begin_prime(&self) -> PrimeIterator<'_> {
        PrimeIterator::new(self)
    }

    /// Returns the terminal prime cursor.
    #[must_use]
    pub fn end_prime(&self) -> PrimeIterator<'_> {
        PrimeIterator::new(self).end()
    }

    /// Shorthand for [`begin_ascending`](Self::begin_ascending).
    #[inline]
    #[must_use]
    pub fn ascending(&self) -> AscendingIterator<'_> {
        self.begin_ascending()
    }

    /// Shorthand for [`begin_cross`](Self::begin_cross).
    #[inline]
    #[must_use]
    pub fn side_cross(&self) -> SideCrossIterator<'_> {
        self.begin_cross()
    }

    /// Shorthand for [`begin_prime`](Self::begin_prime).
    #[inline]
    #[must_use]
    pub fn prime(&self) -> PrimeIterator<'_> {
        self.begin_prime()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl FromIterator<i32> for MagicalContainer {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut elements: Vec<i32> = iter.into_iter().collect();
        elements.sort_unstable();
        Self {
            elements: RefCell::new(elements),
        }
    }
}

impl Extend<i32> for MagicalContainer {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let elements = self.elements.get_mut();
        elements.extend(iter);
        elements.sort_unstable();
    }
}

impl<'a> IntoIterator for &'a MagicalContainer {
    type Item = i32;
    type IntoIter = AscendingIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin_ascending()
    }
}

impl fmt::Debug for MagicalContainer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MagicalContainer")
            .field("elements", &*self.elements.borrow())
            .finish()
    }
}

impl fmt::Display for MagicalContainer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self.elements.borrow().iter() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for MagicalContainer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let elements = self.elements.borrow();
        let mut seq = serializer.serialize_seq(Some(elements.len()))?;
        for element in elements.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct MagicalContainerVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for MagicalContainerVisitor {
    type Value = MagicalContainer;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element::<i32>()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MagicalContainer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(MagicalContainerVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
