use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use tracing::trace;

use crate::cursor::{Cursor, CursorMut, Position};
use crate::error::ContainerError;
use crate::policy::GrowthPolicy;

/// Which match `GrowBuf::find` reports when a value occurs more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Occurrence {
    /// Lowest matching index; the scan stops at the first hit
    #[default]
    First,
    /// Highest matching index; the whole buffer is scanned
    Last,
}

/// A contiguous growable buffer with an explicit size/capacity split.
///
/// Capacity is tracked by the buffer itself and only changes through
/// `reserve` or the configured [`GrowthPolicy`], so the growth law is
/// observable through [`GrowBuf::capacity`].
pub struct GrowBuf<T> {
    items: Vec<T>,
    capacity: usize,
    policy: GrowthPolicy,
}

impl<T> GrowBuf<T> {
    /// Creates an empty buffer with the default policy (multiplicative, 1.5).
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Creates an empty buffer with one pre-allocated slot.
    #[must_use]
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        let capacity = policy.capacity_for(0);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            policy,
        }
    }

    /// Creates a buffer holding `len` default values.
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::with_len_and_policy(len, GrowthPolicy::default())
    }

    #[must_use]
    pub fn with_len_and_policy(len: usize, policy: GrowthPolicy) -> Self
    where
        T: Default,
    {
        let mut buf = Self::allocate(len, policy);
        buf.items.resize_with(len, T::default);
        buf
    }

    /// Creates a buffer holding `len` copies of `value`.
    #[must_use]
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_elem_with_policy(len, value, GrowthPolicy::default())
    }

    #[must_use]
    pub fn from_elem_with_policy(len: usize, value: T, policy: GrowthPolicy) -> Self
    where
        T: Clone,
    {
        let mut buf = Self::allocate(len, policy);
        buf.items.resize(len, value);
        buf
    }

    fn allocate(len: usize, policy: GrowthPolicy) -> Self {
        let capacity = policy.capacity_for(len);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            policy,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Ratio of occupied slots to allocated slots.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f32 {
        self.len() as f32 / self.capacity as f32
    }

    /// True when the next append has to reallocate.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.len() == self.capacity
    }

    fn check_index(&self, index: usize) -> Result<(), ContainerError> {
        if index >= self.len() {
            Err(ContainerError::IndexOutOfBounds {
                index,
                length: self.len(),
            })
        } else {
            Ok(())
        }
    }

    fn check_insert(&self, index: usize) -> Result<(), ContainerError> {
        if index > self.len() {
            Err(ContainerError::InsertOutOfBounds {
                index,
                length: self.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Gets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::IndexOutOfBounds` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    /// Mutable form of [`GrowBuf::at`], with the same bound.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::IndexOutOfBounds` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        self.check_index(index)?;
        Ok(&mut self.items[index])
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Grows the storage to exactly `new_capacity` slots. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity {
            self.set_capacity(new_capacity);
        }
    }

    /// Recomputes the capacity for `target_len` elements through the policy.
    ///
    /// This is the single growth path used by appends, inserts and resizes.
    /// Existing elements are preserved; the length is left to the caller.
    pub(crate) fn reallocate(&mut self, target_len: usize) {
        let new_capacity = self.policy.capacity_for(target_len);
        self.set_capacity(new_capacity);
    }

    fn set_capacity(&mut self, new_capacity: usize) {
        trace!(
            len = self.len(),
            old_capacity = self.capacity,
            new_capacity,
            "reallocating buffer"
        );
        self.items
            .reserve_exact(new_capacity.saturating_sub(self.items.len()));
        self.capacity = new_capacity;
    }

    /// Appends `value`, growing first if the buffer is fully loaded.
    ///
    /// Amortized O(1).
    pub fn push_back(&mut self, value: T) {
        if self.is_loaded() {
            self.reallocate(self.len());
        }
        self.items.push(value);
    }

    /// Inserts `value` before every existing element. O(n).
    pub fn push_front(&mut self, value: T) {
        if self.is_loaded() {
            self.reallocate(self.len());
        }
        self.items.insert(0, value);
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::InsertOutOfBounds` if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        self.check_insert(index)?;
        if self.is_loaded() {
            self.reallocate(self.len());
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Splices a copy of every element of `other` at `index`.
    ///
    /// If the combined length exceeds the capacity, the capacity is recomputed
    /// by the policy for the combined length.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::InsertOutOfBounds` if `index > len()`.
    pub fn insert_all(&mut self, index: usize, other: &GrowBuf<T>) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        self.check_insert(index)?;
        let combined = self.len() + other.len();
        if combined > self.capacity {
            self.reallocate(combined);
        }
        let tail = self.items.split_off(index);
        self.items.extend(other.items.iter().cloned());
        self.items.extend(tail);
        Ok(())
    }

    /// Inserts `value` at the element designated by `position`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::InsertOutOfBounds` if `position` lies past `end()`.
    pub fn insert_at(&mut self, position: Position, value: T) -> Result<(), ContainerError> {
        self.insert(position.index(), value)
    }

    /// Bulk form of [`GrowBuf::insert_at`].
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::InsertOutOfBounds` if `position` lies past `end()`.
    pub fn insert_all_at(
        &mut self,
        position: Position,
        other: &GrowBuf<T>,
    ) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        self.insert_all(position.index(), other)
    }

    /// Removes and returns the last element. The capacity is kept.
    ///
    /// Returns `None` if the buffer is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes and returns the first element. O(n).
    ///
    /// Returns `None` if the buffer is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.items.remove(0))
    }

    /// Removes and returns the element at `pos`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::IndexOutOfBounds` if `pos >= len()`, including
    /// on an empty buffer.
    pub fn erase(&mut self, pos: usize) -> Result<T, ContainerError> {
        self.check_index(pos)?;
        Ok(self.items.remove(pos))
    }

    /// Removes up to `len` elements starting at `pos` and returns how many
    /// were removed.
    ///
    /// An empty buffer is left untouched. A `len` running past the end is
    /// clamped to the remaining elements.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::IndexOutOfBounds` if the buffer is not empty
    /// and `pos >= len()`.
    pub fn erase_range(&mut self, pos: usize, len: usize) -> Result<usize, ContainerError> {
        if self.is_empty() {
            return Ok(0);
        }
        self.check_index(pos)?;
        let count = len.min(self.len() - pos);
        self.items.drain(pos..pos + count);
        Ok(count)
    }

    /// Finds `value` by linear scan.
    ///
    /// Returns [`GrowBuf::end`] when no element matches.
    ///
    /// ```
    /// # use growstack::{GrowBuf, Occurrence};
    /// let buf: GrowBuf<i32> = [3, 1, 3, 2, 3].into_iter().collect();
    /// assert_eq!(buf.find(&3, Occurrence::First).index(), 0);
    /// assert_eq!(buf.find(&3, Occurrence::Last).index(), 4);
    /// assert_eq!(buf.find(&9, Occurrence::First), buf.end());
    /// ```
    #[must_use]
    pub fn find(&self, value: &T, occurrence: Occurrence) -> Position
    where
        T: PartialEq,
    {
        let mut found = None;
        for (index, item) in self.items.iter().enumerate() {
            if item == value {
                found = Some(index);
                if occurrence == Occurrence::First {
                    break;
                }
            }
        }
        found.map_or_else(|| self.end(), Position::new)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// Changes the length to `new_len`, filling new slots with `value`.
    ///
    /// Growing past the capacity reallocates through the policy for `new_len`;
    /// shrinking drops the truncated elements and keeps the capacity.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if new_len > self.capacity {
            self.reallocate(new_len);
        }
        self.items.resize(new_len, value);
    }

    /// [`GrowBuf::resize`] with `T::default()` as the fill value.
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len > self.capacity {
            self.reallocate(new_len);
        }
        self.items.resize_with(new_len, T::default);
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Position of the first element.
    #[must_use]
    pub fn begin(&self) -> Position {
        Position::new(0)
    }

    /// Past-the-end position, the "not found" sentinel.
    #[must_use]
    pub fn end(&self) -> Position {
        Position::new(self.len())
    }

    /// Read-only cursor starting at the first element.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.begin())
    }

    /// Read-only cursor starting at `position`.
    #[must_use]
    pub fn cursor_at(&self, position: Position) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), position)
    }

    /// Mutable cursor starting at the first element.
    #[must_use]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        let begin = self.begin();
        CursorMut::new(self.as_mut_slice(), begin)
    }

    /// Element designated by `position`, or `None` at or past the end.
    #[must_use]
    pub fn get_at(&self, position: Position) -> Option<&T> {
        self.items.get(position.index())
    }
}

impl<T> Default for GrowBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowBuf<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            capacity: self.capacity,
            policy: self.policy,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowBuf<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for GrowBuf<T> {}

impl<T> Index<usize> for GrowBuf<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len(),
            "Index {} out of bounds for buffer of length {}",
            index,
            self.len()
        );
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for GrowBuf<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len(),
            "Index {} out of bounds for buffer of length {}",
            index,
            self.len()
        );
        &mut self.items[index]
    }
}

impl<T> FromIterator<T> for GrowBuf<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

impl<T> Extend<T> for GrowBuf<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowBuf<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowBuf<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for GrowBuf<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
