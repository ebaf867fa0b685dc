#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! `growstack`: a growable buffer, a singly linked list, and a stack that can
//! sit on top of either.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # `GrowBuf`
//!
//! `GrowBuf` keeps its own capacity and grows through a [`GrowthPolicy`]:
//!
//! - `Multiplicative` (default, coefficient 1.5): `capacity = ceil(len * coef)`
//! - `Additive`: `capacity = ceil(len + coef)`
//!
//! An empty buffer always holds one pre-allocated slot.
//!
//! ```
//! # use growstack::{GrowBuf, GrowthPolicy};
//! let mut buf = GrowBuf::new();
//! assert_eq!(buf.capacity(), 1);
//!
//! buf.push_back(10);
//! buf.push_back(20); // fully loaded at len 1: ceil(1 * 1.5) = 2
//! buf.push_back(30); // fully loaded at len 2: ceil(2 * 1.5) = 3
//! assert_eq!(buf.capacity(), 3);
//!
//! buf.insert(1, 15).unwrap();
//! assert_eq!(buf.as_slice(), &[10, 15, 20, 30]);
//! assert!(buf.insert(9, 0).is_err());
//!
//! let mut additive = GrowBuf::from_elem_with_policy(2, 'x', GrowthPolicy::additive(3.0).unwrap());
//! assert_eq!(additive.capacity(), 5);
//! additive.resize(9, 'y');
//! assert_eq!(additive.capacity(), 12);
//! ```
//!
//! ## Time Complexity
//! - `push_back()`, `pop_back()`: amortized O(1)
//! - `at()`, `get()`, indexing: O(1)
//! - `insert()`, `push_front()`, `erase()`, `pop_front()`: O(n)
//! - `insert_all()`: O(n + m)
//! - `find()`: O(n)
//!
//! ## Positions
//!
//! [`GrowBuf::find`] returns a [`Position`]; [`GrowBuf::end`] is the "not
//! found" sentinel. Positions are plain values and are not adjusted when the
//! buffer is mutated.
//!
//! # `SinglyLinkedList`
//!
//! ```
//! # use growstack::SinglyLinkedList;
//! let mut list: SinglyLinkedList<i32> = (1..=5).collect();
//! list.filter(|v| v % 2 == 0);
//! assert_eq!(list.to_string(), "2 -> 4 -> nil");
//!
//! let doubled = list.map(|v| v * 2);
//! assert_eq!(doubled.iter().copied().collect::<Vec<_>>(), vec![4, 8]);
//!
//! list.reverse();
//! assert_eq!(list.front(), Some(&4));
//! assert_eq!(list.find_index(&2), Some(1));
//! assert_eq!(list.find_index(&7), None);
//! ```
//!
//! # Stack Interface
//!
//! [`Stack`] forwards to a backing chosen by [`StackKind`]. Both kinds behave
//! identically:
//!
//! ```
//! # use growstack::{Stack, StackKind};
//! for kind in [StackKind::Buffer, StackKind::List] {
//!     let mut stack = Stack::new(kind);
//!     stack.push(1);
//!     stack.push(2);
//!     stack.push(3);
//!     assert_eq!(stack.top(), Some(&3));
//!     assert_eq!(stack.len(), 3);
//!
//!     stack.pop();
//!     assert_eq!(stack.top(), Some(&2));
//!     assert_eq!(stack.len(), 2);
//! }
//!
//! // Unknown discriminators are rejected up front
//! assert!(Stack::<i32>::from_discriminator(7).is_err());
//! ```
//!
//! Popping or peeking an empty container returns `None` rather than
//! underflowing; `Stack::try_pop` and `Stack::try_top` report
//! [`ContainerError::EmptyContainer`] instead.

extern crate alloc;

mod buffer;
mod cursor;
mod error;
mod iter;
mod list;
mod policy;
mod stack;

// Re-export public types and traits
pub use buffer::{GrowBuf, Occurrence};
pub use cursor::{Cursor, CursorMut, Position};
pub use error::ContainerError;
pub use iter::{ListIntoIter, ListIter, ListIterMut};
pub use list::SinglyLinkedList;
pub use policy::{GrowthPolicy, ResizeStrategy, MAX_COEFFICIENT};
pub use stack::{BufferStack, ListStack, Stack, StackBackend, StackContents, StackKind};
