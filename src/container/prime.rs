//! Prime-only traversal.

use super::{Cursor, MagicalContainer};
use crate::error::CursorError;
use std::cmp::Ordering;
use std::ptr;

/// Returns `true` if `value` is prime.
///
/// Values below 2 are not prime. Otherwise `value` is trial-divided by every
/// integer from 2 up to its square root.
///
/// # Examples
///
/// ```rust
/// use magical_container::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(7919));
/// assert!(!is_prime(1));
/// assert!(!is_prime(9));
/// assert!(!is_prime(-7));
/// ```
#[must_use]
pub fn is_prime(value: i32) -> bool {
    if value < 2 {
        return false;
    }
    let value = i64::from(value);
    (2_i64..)
        .take_while(|divisor| divisor * divisor <= value)
        .all(|divisor| value % divisor != 0)
}

/// A cursor visiting the prime elements in ascending order.
///
/// `begin` is raw index 0 even when the first element is not prime; reading
/// such a position fails, and the first `advance` moves to the first prime
/// after it. Used as an [`Iterator`], the cursor skips any leading
/// non-prime and yields only primes.
///
/// # Examples
///
/// ```rust
/// use magical_container::{MagicalContainer, PrimeIterator};
///
/// let container: MagicalContainer = [5, 2, 10, 7, 3, 9].into_iter().collect();
/// let mut cursor = PrimeIterator::new(&container);
///
/// assert_eq!(cursor.value(), Ok(2));
/// cursor.advance().unwrap();
/// assert_eq!(cursor.value(), Ok(3));
/// assert_eq!(cursor.collect::<Vec<_>>(), vec![3, 5, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct PrimeIterator<'a> {
    container: &'a MagicalContainer,
    index: usize,
}

impl<'a> PrimeIterator<'a> {
    /// Creates a cursor at raw index 0 of `container`.
    #[must_use]
    pub const fn new(container: &'a MagicalContainer) -> Self {
        Self {
            container,
            index: 0,
        }
    }

    /// Returns a cursor at raw index 0 over the same container.
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

    /// Moves to the next prime element, or to the end if none remains.
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
        self.index = self.container.position_from(self.index + 1, is_prime);
        Ok(self)
    }

    /// Returns the prime element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::OutOfRange`] if the cursor is at or past the
    /// end, or if the element under it is not prime.
    pub fn value(&self) -> Result<i32, CursorError> {
        self.container
            .element_at(self.index)
            .filter(|&element| is_prime(element))
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

impl<'a> Cursor<'a> for PrimeIterator<'a> {
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

impl PartialEq for PrimeIterator<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.container, other.container) && self.index == other.index
    }
}

impl Eq for PrimeIterator<'_> {}

impl PartialOrd for PrimeIterator<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        ptr::eq(self.container, other.container).then(|| self.index.cmp(&other.index))
    }
}

impl Iterator for PrimeIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.index = self.container.position_from(self.index, is_prime);
        let value = self.container.element_at(self.index)?;
        self.index = self.container.position_from(self.index + 1, is_prime);
        Some(value)
    }
}
