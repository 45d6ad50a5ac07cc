//! Side-cross traversal.
//!
//! Visits the lowest and highest unvisited positions in turn and meets in
//! the middle:
//!
//! ```text
//! positions:  0   1   2   3   4   5
//! visit:      1st 3rd 5th 6th 4th 2nd
//! ```
//!
//! The cursor keeps a forward index, a backward index, the side it reads
//! next and a step counter. Once the step counter reaches the container
//! size the cursor collapses to the end sentinel, so an odd middle element
//! is produced exactly once.

use super::{Cursor, MagicalContainer};
use crate::error::CursorError;
use std::cmp::Ordering;
use std::ptr;

/// The side a [`SideCrossIterator`] reads from next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Read at the forward (low) index.
    Forward,
    /// Read at the backward (high) index.
    Backward,
}

impl Direction {
    /// Returns the opposite side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// A cursor alternating between the lowest and highest unvisited elements.
///
/// Cursors compare equal when their forward index, backward index and
/// direction match. Cursors over the same container are ordered by the
/// number of steps taken.
///
/// # Examples
///
/// ```rust
/// use magical_container::{MagicalContainer, SideCrossIterator};
///
/// let container: MagicalContainer = [1, 2, 3, 4, 5].into_iter().collect();
/// let values: Vec<i32> = SideCrossIterator::new(&container).collect();
///
/// assert_eq!(values, vec![1, 5, 2, 4, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct SideCrossIterator<'a> {
    container: &'a MagicalContainer,
    forward: usize,
    backward: usize,
    direction: Direction,
    step: usize,
}

impl<'a> SideCrossIterator<'a> {
    /// Creates a cursor at the lowest element of `container`.
    ///
    /// For an empty container this is the end sentinel.
    #[must_use]
    pub fn new(container: &'a MagicalContainer) -> Self {
        match container.size() {
            0 => Self::terminal(container, 0),
            size => Self {
                container,
                forward: 0,
                backward: size - 1,
                direction: Direction::Forward,
                step: 0,
            },
        }
    }

    const fn terminal(container: &'a MagicalContainer, size: usize) -> Self {
        Self {
            container,
            forward: size,
            backward: 0,
            direction: Direction::Forward,
            step: size,
        }
    }

    /// Returns a fresh cursor at the start of the traversal.
    #[must_use]
    pub fn begin(&self) -> Self {
        Self::new(self.container)
    }

    /// Returns the end sentinel for the container's current size.
    #[must_use]
    pub fn end(&self) -> Self {
        Self::terminal(self.container, self.container.size())
    }

    /// Moves to the other side, one position further in.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::OutOfRange`] if the cursor is already at the
    /// end.
    pub fn advance(&mut self) -> Result<&mut Self, CursorError> {
        let size = self.container.size();
        if self.is_terminal(size) {
            return Err(CursorError::out_of_range(self.current_index(), size));
        }
        self.step_unchecked(size);
        Ok(self)
    }

    fn step_unchecked(&mut self, size: usize) {
        let crossed = match self.direction {
            Direction::Forward => {
                self.forward += 1;
                false
            }
            Direction::Backward => match self.backward.checked_sub(1) {
                Some(backward) => {
                    self.backward = backward;
                    false
                }
                None => true,
            },
        };
        self.direction = self.direction.flip();
        self.step += 1;

        if crossed || self.step >= size {
            *self = Self::terminal(self.container, size);
        }
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::OutOfRange`] if the cursor is at the end or
    /// either index falls outside the container.
    pub fn value(&self) -> Result<i32, CursorError> {
        let size = self.container.size();
        let index = self.current_index();
        if self.is_terminal(size) {
            return Err(CursorError::out_of_range(index, size));
        }
        self.container
            .element_at(index)
            .ok_or_else(|| CursorError::out_of_range(index, size))
    }

    /// Returns `true` if the cursor is at the end.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.is_terminal(self.container.size())
    }

    const fn is_terminal(&self, size: usize) -> bool {
        self.step >= size || self.forward >= size
    }

    const fn current_index(&self) -> usize {
        match self.direction {
            Direction::Forward => self.forward,
            Direction::Backward => self.backward,
        }
    }

    /// Returns the forward (low) index.
    #[must_use]
    pub const fn forward_index(&self) -> usize {
        self.forward
    }

    /// Returns the backward (high) index.
    #[must_use]
    pub const fn backward_index(&self) -> usize {
        self.backward
    }

    /// Returns the side the cursor reads from next.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of steps taken since `begin`.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.step
    }
}

impl<'a> Cursor<'a> for SideCrossIterator<'a> {
    fn container(&self) -> &'a MagicalContainer {
        self.container
    }

    fn begin(&self) -> Self {
        Self::begin(self)
    }

    fn end(&self) -> Self {
        Self::end(self)
    }

    fn advance(&mut self) -> Result<&mut Self, CursorError> {
        Self::advance(self)
    }

    fn value(&self) -> Result<i32, CursorError> {
        Self::value(self)
    }

    fn is_end(&self) -> bool {
        Self::is_end(self)
    }
}

impl PartialEq for SideCrossIterator<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.container, other.container)
            && self.forward == other.forward
            && self.backward == other.backward
            && self.direction == other.direction
    }
}

impl Eq for SideCrossIterator<'_> {}

impl PartialOrd for SideCrossIterator<'_> {
    /// Orders cursors by step counter.
    ///
    /// Returns `None` for cursors over different containers, and for cursors
    /// with the same step count whose indices disagree (possible only when
    /// the container was resized between their constructions).
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !ptr::eq(self.container, other.container) {
            return None;
        }
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.step.cmp(&other.step) {
            Ordering::Equal => None,
            ordering => Some(ordering),
        }
    }
}

impl Iterator for SideCrossIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.container.size();
        if self.is_terminal(size) {
            return None;
        }
        let value = self.container.element_at(self.current_index())?;
        self.step_unchecked(size);
        Some(value)
    }
}
