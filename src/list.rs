use alloc::boxed::Box;
use core::fmt;

use crate::error::ContainerError;
use crate::iter::{ListIter, ListIterMut};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

/// A singly linked list where every node owns its successor.
///
/// There is no tail pointer: appending walks the chain and is O(n), while
/// everything at the head is O(1).
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn check_index(&self, index: usize) -> Result<(), ContainerError> {
        if index >= self.len {
            Err(ContainerError::IndexOutOfBounds {
                index,
                length: self.len,
            })
        } else {
            Ok(())
        }
    }

    // Link that holds the node at `index`; `index == len` yields the empty
    // link after the last node. `None` when the chain is shorter than `index`.
    fn link_at_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    /// Gets the element at `index`. O(n).
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::IndexOutOfBounds` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        self.get(index).ok_or(ContainerError::IndexOutOfBounds {
            index,
            length: self.len,
        })
    }

    /// Mutable form of [`SinglyLinkedList::at`].
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::IndexOutOfBounds` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let length = self.len;
        self.get_mut(index)
            .ok_or(ContainerError::IndexOutOfBounds { index, length })
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Last element. O(n).
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// O(1) at the head, otherwise O(n) to reach the predecessor.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::InsertOutOfBounds` if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        let length = self.len;
        let out_of_bounds = ContainerError::InsertOutOfBounds { index, length };
        if index > length {
            return Err(out_of_bounds);
        }
        let link = self.link_at_mut(index).ok_or(out_of_bounds)?;
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` right after the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::IndexOutOfBounds` if `index >= len()`.
    pub fn insert_after(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        self.check_index(index)?;
        self.insert(index + 1, value)
    }

    /// Appends `value`. O(n), the chain is walked to its end.
    pub fn push_back(&mut self, value: T) {
        let tail = self.tail_link();
        *tail = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Prepends `value`. O(1).
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    fn unlink(&mut self, index: usize) -> Option<T> {
        let link = self.link_at_mut(index)?;
        let node = link.take()?;
        let Node { value, next } = *node;
        *link = next;
        self.len -= 1;
        Some(value)
    }

    /// Unlinks the node at `index` and returns its value.
    ///
    /// Removing from an empty list is a no-op that returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::IndexOutOfBounds` if the list is not empty and
    /// `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<Option<T>, ContainerError> {
        if self.is_empty() {
            return Ok(None);
        }
        self.check_index(index)?;
        Ok(self.unlink(index))
    }

    /// Unlinks the successor of the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::IndexOutOfBounds` if `index` does not designate
    /// an element or that element is the last one.
    pub fn remove_after(&mut self, index: usize) -> Result<T, ContainerError> {
        self.check_index(index)?;
        self.check_index(index + 1)?;
        let length = self.len;
        self.unlink(index + 1)
            .ok_or(ContainerError::IndexOutOfBounds {
                index: index + 1,
                length,
            })
    }

    /// Removes the last element. O(n).
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.unlink(last)
    }

    /// Removes the first element. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Index of the first element equal to `value`.
    #[must_use]
    pub fn find_index(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// First element equal to `value`.
    ///
    /// The reference is valid until the next mutation of the list.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.iter().find(|item| *item == value)
    }

    pub fn find_mut(&mut self, value: &T) -> Option<&mut T>
    where
        T: PartialEq,
    {
        self.iter_mut().find(|item| **item == *value)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find_index(value).is_some()
    }

    /// Reverses the list in place by relinking. O(n) time, O(1) extra space.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut rest = self.head.take();
        while let Some(mut node) = rest {
            rest = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Returns a reversed copy and leaves `self` untouched.
    #[must_use]
    pub fn reversed(&self) -> Self
    where
        T: Clone,
    {
        let mut copy = self.clone();
        copy.reverse();
        copy
    }

    /// Replaces every element with `f(element)`, head to tail.
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> T,
    {
        for item in self.iter_mut() {
            *item = f(item);
        }
    }

    /// Builds a new list from `f` applied to every element.
    #[must_use]
    pub fn map<U, F>(&self, f: F) -> SinglyLinkedList<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Drops every element for which `keep` returns false. Survivors keep
    /// their relative order.
    pub fn filter<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut rest = self.head.take();
        let mut tail = &mut self.head;
        let mut kept = 0;
        while let Some(mut node) = rest {
            rest = node.next.take();
            if keep(&node.value) {
                tail = &mut tail.insert(node).next;
                kept += 1;
            }
        }
        self.len = kept;
    }

    #[must_use]
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter::new(&self.head, self.len)
    }

    pub fn iter_mut(&mut self) -> ListIterMut<'_, T> {
        ListIterMut::new(&mut self.head, self.len)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail_link();
        let mut added = 0;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Prints the chain as `1 -> 2 -> 3 -> nil`.
impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self {
            write!(f, "{item} -> ")?;
        }
        write!(f, "nil")
    }
}
