//! Stack facade over a pluggable backing container.
//!
//! [`Stack`] owns a `Box<dyn StackBackend<T>>` chosen by a [`StackKind`]
//! discriminator. Both backings expose the same capability set and the same
//! observable behaviour; they differ only in cost model.

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::buffer::GrowBuf;
use crate::error::ContainerError;
use crate::list::SinglyLinkedList;
use crate::policy::GrowthPolicy;

/// Which container backs a [`Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StackKind {
    /// `GrowBuf`: amortized O(1) push/pop, O(1) top
    #[default]
    Buffer,
    /// `SinglyLinkedList`: O(1) push/pop/top, one allocation per element
    List,
}

impl StackKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StackKind::Buffer => "buffer",
            StackKind::List => "list",
        }
    }
}

impl TryFrom<u8> for StackKind {
    type Error = ContainerError;

    fn try_from(discriminator: u8) -> Result<Self, Self::Error> {
        match discriminator {
            0 => Ok(StackKind::Buffer),
            1 => Ok(StackKind::List),
            _ => Err(ContainerError::UnknownStackKind { discriminator }),
        }
    }
}

impl FromStr for StackKind {
    type Err = ContainerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim() {
            n if n.eq_ignore_ascii_case("buffer") || n.eq_ignore_ascii_case("vector") => {
                Ok(StackKind::Buffer)
            }
            n if n.eq_ignore_ascii_case("list") => Ok(StackKind::List),
            _ => Err(ContainerError::UnknownStackKindName),
        }
    }
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability set every stack backing provides.
pub trait StackBackend<T> {
    /// Puts `value` on top.
    fn push(&mut self, value: T);

    /// Removes the top element, `None` when empty.
    fn pop(&mut self) -> Option<T>;

    /// Top element, `None` when empty.
    fn top(&self) -> Option<&T>;

    fn top_mut(&mut self) -> Option<&mut T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrowed view of the concrete container behind the backing.
    fn contents(&self) -> StackContents<'_, T>;

    /// Discriminator of the concrete backing.
    fn kind(&self) -> StackKind {
        match self.contents() {
            StackContents::Buffer(_) => StackKind::Buffer,
            StackContents::List(_) => StackKind::List,
        }
    }
}

/// The container a [`StackBackend`] stores its elements in.
#[derive(Debug)]
pub enum StackContents<'a, T> {
    /// Top of the stack is the buffer's last element
    Buffer(&'a GrowBuf<T>),
    /// Top of the stack is the list head
    List(&'a SinglyLinkedList<T>),
}

/// Stack backing that owns a `GrowBuf`; the top is the buffer's last element.
pub struct BufferStack<T> {
    items: GrowBuf<T>,
}

impl<T> BufferStack<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: GrowBuf::new(),
        }
    }

    #[must_use]
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            items: GrowBuf::with_policy(policy),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> GrowBuf<T> {
        self.items
    }
}

impl<T> Default for BufferStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<GrowBuf<T>> for BufferStack<T> {
    fn from(items: GrowBuf<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone> Clone for BufferStack<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> StackBackend<T> for BufferStack<T> {
    fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    fn top(&self) -> Option<&T> {
        self.items.last()
    }

    fn top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn contents(&self) -> StackContents<'_, T> {
        StackContents::Buffer(&self.items)
    }
}

/// Stack backing that owns a `SinglyLinkedList`; the top is the list head.
pub struct ListStack<T> {
    items: SinglyLinkedList<T>,
}

impl<T> ListStack<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: SinglyLinkedList::new(),
        }
    }

    /// The owned list, top of the stack first.
    #[must_use]
    pub fn into_inner(self) -> SinglyLinkedList<T> {
        self.items
    }
}

impl<T> Default for ListStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<SinglyLinkedList<T>> for ListStack<T> {
    fn from(items: SinglyLinkedList<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone> Clone for ListStack<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> StackBackend<T> for ListStack<T> {
    fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn top(&self) -> Option<&T> {
        self.items.front()
    }

    fn top_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn contents(&self) -> StackContents<'_, T> {
        StackContents::List(&self.items)
    }
}

/// LIFO stack over a backing chosen at construction.
///
/// ```
/// # use growstack::{Stack, StackKind};
/// let mut stack = Stack::from_slice(&[1, 2, 3], StackKind::List);
/// assert_eq!(stack.top(), Some(&3));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.kind(), StackKind::List);
/// ```
pub struct Stack<T> {
    backend: Box<dyn StackBackend<T>>,
}

impl<T: 'static> Stack<T> {
    /// Creates an empty stack backed by `kind`.
    #[must_use]
    pub fn new(kind: StackKind) -> Self {
        debug!(kind = %kind, "creating stack");
        let backend: Box<dyn StackBackend<T>> = match kind {
            StackKind::Buffer => Box::new(BufferStack::new()),
            StackKind::List => Box::new(ListStack::new()),
        };
        Self { backend }
    }

    /// Creates an empty stack from a raw discriminator (`0` buffer, `1` list).
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::UnknownStackKind` for any other value.
    pub fn from_discriminator(discriminator: u8) -> Result<Self, ContainerError> {
        Ok(Self::new(StackKind::try_from(discriminator)?))
    }

    /// Creates a stack and pushes every element of `values` in order, so the
    /// last element ends up on top.
    #[must_use]
    pub fn with_elements<I>(kind: StackKind, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut stack = Self::new(kind);
        stack.extend(values);
        stack
    }

    #[must_use]
    pub fn from_slice(values: &[T], kind: StackKind) -> Self
    where
        T: Clone,
    {
        Self::with_elements(kind, values.iter().cloned())
    }
}

impl<T> Stack<T> {
    pub fn push(&mut self, value: T) {
        self.backend.push(value);
    }

    /// Removes the top element. Returns `None` on an empty stack.
    pub fn pop(&mut self) -> Option<T> {
        self.backend.pop()
    }

    /// Top element. Returns `None` on an empty stack.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.backend.top()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.backend.top_mut()
    }

    /// Removes the top element.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::EmptyContainer` if the stack is empty.
    pub fn try_pop(&mut self) -> Result<T, ContainerError> {
        self.backend.pop().ok_or(ContainerError::EmptyContainer)
    }

    /// Top element.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::EmptyContainer` if the stack is empty.
    pub fn try_top(&self) -> Result<&T, ContainerError> {
        self.backend.top().ok_or(ContainerError::EmptyContainer)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    #[must_use]
    pub fn kind(&self) -> StackKind {
        self.backend.kind()
    }
}

impl<T: 'static> Default for Stack<T> {
    fn default() -> Self {
        Self::new(StackKind::default())
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.backend.push(value);
        }
    }
}

impl<T: Clone + 'static> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let backend: Box<dyn StackBackend<T>> = match self.backend.contents() {
            StackContents::Buffer(items) => Box::new(BufferStack::from(items.clone())),
            StackContents::List(items) => Box::new(ListStack::from(items.clone())),
        };
        Self { backend }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("kind", &self.kind())
            .field("len", &self.len())
            .field("top", &self.top())
            .finish()
    }
}
