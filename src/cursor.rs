//! Positions and cursors over a `GrowBuf`.
//!
//! A [`Position`] is a detached element index. It survives mutation of the
//! buffer but is not updated by it: after an insert, erase or reallocation it
//! may designate a different element, or none at all. Re-derive positions
//! after mutating.
//!
//! [`Cursor`] and [`CursorMut`] borrow the buffer, so the borrow checker rules
//! out their use across a mutation.

use core::cmp::Ordering;
use core::ops::Sub;

/// A detached position inside a `GrowBuf`. Equality is position identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    index: usize,
}

impl Position {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pre-increment: advances and returns the advanced position.
    pub fn move_next(&mut self) -> &mut Self {
        self.index += 1;
        self
    }

    /// Pre-decrement. Saturates at the first position.
    pub fn move_prev(&mut self) -> &mut Self {
        self.index = self.index.saturating_sub(1);
        self
    }

    /// Post-increment: advances and returns the position before the move.
    pub fn post_next(&mut self) -> Self {
        let previous = *self;
        self.index += 1;
        previous
    }

    /// Post-decrement. Saturates at the first position.
    pub fn post_prev(&mut self) -> Self {
        let previous = *self;
        self.index = self.index.saturating_sub(1);
        previous
    }
}

impl Sub for Position {
    type Output = isize;

    /// Signed element distance from `rhs` to `self`.
    #[allow(clippy::cast_possible_wrap)]
    fn sub(self, rhs: Self) -> isize {
        match self.index.cmp(&rhs.index) {
            Ordering::Less => -((rhs.index - self.index) as isize),
            _ => (self.index - rhs.index) as isize,
        }
    }
}

/// Read-only cursor over buffer elements.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    position: Position,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(items: &'a [T], position: Position) -> Self {
        Self { items, position }
    }

    /// Element under the cursor, `None` at the end sentinel.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.items.get(self.position.index())
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position.index() >= self.items.len()
    }

    pub fn move_next(&mut self) -> &mut Self {
        self.position.move_next();
        self
    }

    pub fn move_prev(&mut self) -> &mut Self {
        self.position.move_prev();
        self
    }

    /// Advances, returning a cursor at the previous position.
    pub fn post_next(&mut self) -> Self {
        let previous = *self;
        self.position.move_next();
        previous
    }

    /// Steps back, returning a cursor at the previous position.
    pub fn post_prev(&mut self) -> Self {
        let previous = *self;
        self.position.move_prev();
        previous
    }

    /// Signed element distance from `other` to `self`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> isize {
        self.position - other.position
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.items, other.items) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

/// Mutable cursor over buffer elements.
#[derive(Debug)]
pub struct CursorMut<'a, T> {
    items: &'a mut [T],
    position: Position,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T], position: Position) -> Self {
        Self { items, position }
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.items.get(self.position.index())
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.items.get_mut(self.position.index())
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position.index() >= self.items.len()
    }

    pub fn move_next(&mut self) -> &mut Self {
        self.position.move_next();
        self
    }

    pub fn move_prev(&mut self) -> &mut Self {
        self.position.move_prev();
        self
    }

    /// Read-only view at the current position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.items, self.position)
    }
}
