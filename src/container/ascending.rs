//! Ascending traversal.

use super::{Cursor, MagicalContainer};
use crate::error::CursorError;
use std::cmp::Ordering;
use std::ptr;

/// A cursor visiting every element in ascending order.
///
/// The cursor is a single index into the sorted sequence; `begin` is index
/// 0 and `end` is the current size.
///
/// # Examples
///
/// ```rust
/// use magical_container::{AscendingIterator, MagicalContainer};
///
/// let container: MagicalContainer = [3, 1, 2].into_iter().collect();
/// let cursor = AscendingIterator::new(&container);
///
/// assert_eq!(cursor.value(), Ok(1));
/// assert!(cursor < cursor.end());
/// assert_eq!(cursor.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct AscendingIterator<'a> {
    container: &'a MagicalContainer,
    index: usize,
}

impl<'a> AscendingIterator<'a> {
    /// Creates a cursor at the first element of `container`.
    #[must_use]
    pub const fn new(container: &'a MagicalContainer) -> Self {
        Self {
            container,
            index: 0,
        }
    }

    /// Returns a cursor at index 0 over the same container.
    #[must_use]
    pub const fn begin(&self) -> Self {
        Self::new(self.container)
    }

    /// Returns the terminal cursor for the container's current size.
    #[must_use]
    pub fn end(&self) -> Self {
        Self {
            container: self.container,
            index: self.container.size(),
        }
    }

    /// Moves to the next element.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::OutOfRange`] if the cursor is already at or
    /// past the end.
    pub fn advance(&mut self) -> Result<&mut Self, CursorError> {
        let size = self.container.size();
        if self.index >= size {
            return Err(CursorError::out_of_range(self.index, size));
        }
        self.index += 1;
        Ok(self)
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::OutOfRange`] if the cursor is at or past the end.
    pub fn value(&self) -> Result<i32, CursorError> {
        self.container
            .element_at(self.index)
            .ok_or_else(|| CursorError::out_of_range(self.index, self.container.size()))
    }

    /// Returns `true` if the cursor is at or past the end.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.index >= self.container.size()
    }

    /// Returns the raw index of the cursor.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<'a> Cursor<'a> for AscendingIterator<'a> {
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

impl PartialEq for AscendingIterator<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.container, other.container) && self.index == other.index
    }
}

impl Eq for AscendingIterator<'_> {}

impl PartialOrd for AscendingIterator<'_> {
    /// Orders cursors over the same container by index; cursors over
    /// different containers are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        ptr::eq(self.container, other.container).then(|| self.index.cmp(&other.index))
    }
}

impl Iterator for AscendingIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.container.element_at(self.index)?;
        self.index += 1;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_begin_starts_at_zero() {
        let container: MagicalContainer = [1, 2].into_iter().collect();
        assert_eq!(container.begin_ascending().index(), 0);
    }

    #[rstest]
    fn test_end_is_current_size() {
        let container: MagicalContainer = [1, 2, 3].into_iter().collect();
        assert_eq!(container.end_ascending().index(), 3);
    }

    #[rstest]
    fn test_advance_past_end_fails_without_moving() {
        let container: MagicalContainer = [1].into_iter().collect();
        let mut cursor = container.end_ascending();

        assert_eq!(
            cursor.advance().map(|cursor| cursor.index()),
            Err(CursorError::OutOfRange {
                position: 1,
                size: 1
            })
        );
        assert_eq!(cursor.index(), 1);
    }

    #[rstest]
    fn test_cursors_over_different_containers_are_unordered() {
        let first: MagicalContainer = [1].into_iter().collect();
        let second: MagicalContainer = [1].into_iter().collect();

        let left = first.begin_ascending();
        let right = second.begin_ascending();

        assert_ne!(left, right);
        assert_eq!(PartialOrd::partial_cmp(&left, &right), None);
    }

    #[rstest]
    fn test_iterator_resumes_when_container_grows() {
        let container: MagicalContainer = [1].into_iter().collect();
        let mut cursor = container.begin_ascending();

        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), None);

        container.add_element(2);
        assert_eq!(cursor.next(), Some(2));
    }
}
