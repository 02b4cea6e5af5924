//! A priority queue that keeps its values in sorted order.
//!
//! Rather than a heap, [`OrderedQueue`] maintains a linked list sorted by a [`Comparator`],
//! placing each pushed value by insertion sort. Polling takes whatever is at the front.
//! Values that tie are dequeued in the order they were pushed.
//!
//! ```rust
//! # use ordered_queue::*;
//! let mut q = OrderedQueue::with_comparator(Reversed);
//! q.push(1);
//! q.push(3);
//! q.push(2);
//!
//! assert_eq!(q.poll(), Ok(3));
//! assert_eq!(q.peek(), Some(&2));
//! assert_eq!(q.len(), 2);
//! ```
//!
//! See documentation for [`OrderedQueue`] and the [`comparator`] module.
pub mod comparator;
mod error;
mod internal;
mod queue;

pub use crate::comparator::{BySign, Comparator, Difference, Natural, Reversed};
pub use crate::error::EmptyQueueError;
pub use crate::queue::OrderedQueue;
