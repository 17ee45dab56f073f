use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Deref;
use std::ptr;

use crate::container::MagicalContainer;

/// Position in a view's traversal.
///
/// Positions `0..len` hold an element; position `len` is past-the-end.
/// Comparison is by position. Cursors over different containers (told apart
/// by the container's address) are never equal and have no ordering.
pub struct Cursor<'v, P> {
    container: &'v MagicalContainer,
    order: &'v [usize],
    position: usize,
    _policy: PhantomData<fn() -> P>,
}

impl<'v, P> Cursor<'v, P> {
    pub(crate) fn new(
        container: &'v MagicalContainer,
        order: &'v [usize],
        position: usize,
    ) -> Self {
        debug_assert!(position <= order.len());
        Self {
            container,
            order,
            position,
            _policy: PhantomData,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_end(&self) -> bool {
        self.position >= self.order.len()
    }

    /// The element under the cursor, or `None` past-the-end.
    pub fn get(&self) -> Option<i32> {
        self.order
            .get(self.position)
            .map(|&i| self.container.as_slice()[i])
    }

    /// The element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past-the-end.
    pub fn value(&self) -> i32 {
        **self
    }

    /// Moves one position forward.
    pub fn advance(&mut self) -> &mut Self {
        debug_assert!(
            self.position < self.order.len(),
            "advanced a cursor beyond the end of its traversal"
        );
        self.position += 1;
        self
    }

    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    fn same_container(&self, other: &Self) -> bool {
        ptr::eq(self.container, other.container)
    }
}

impl<P> Clone for Cursor<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Cursor<'_, P> {}

impl<P> Deref for Cursor<'_, P> {
    type Target = i32;

    fn deref(&self) -> &i32 {
        match self.order.get(self.position) {
            Some(&i) => &self.container.as_slice()[i],
            None => panic!(
                "dereferenced a past-the-end cursor (position {}, len {})",
                self.position,
                self.order.len()
            ),
        }
    }
}

impl<P> PartialEq for Cursor<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        self.same_container(other) && self.position == other.position
    }
}

impl<P> PartialOrd for Cursor<'_, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_container(other) {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}

impl<P> fmt::Debug for Cursor<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.order.len())
            .field("value", &self.get())
            .finish()
    }
}

/// Walks a traversal from its current position to the end.
pub struct Iter<'v, P> {
    cursor: Cursor<'v, P>,
}

impl<'v, P> Iter<'v, P> {
    pub(crate) fn new(cursor: Cursor<'v, P>) -> Self {
        Self { cursor }
    }
}

impl<P> Clone for Iter<'_, P> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor,
        }
    }
}

impl<P> Iterator for Iter<'_, P> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let value = self.cursor.get()?;
        self.cursor.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.order.len() - self.cursor.position;
        (remaining, Some(remaining))
    }
}

impl<P> ExactSizeIterator for Iter<'_, P> {}

impl<P> FusedIterator for Iter<'_, P> {}
