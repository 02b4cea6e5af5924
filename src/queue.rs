//! The ordered queue itself.
//!
//! See documentation for [`OrderedQueue`].
use crate::comparator::{Comparator, Natural};
use crate::error::EmptyQueueError;
use crate::internal::Arena;
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt::{self, Debug};

/// A priority queue that keeps its values sorted as they are pushed.
///
/// Values are ranked by a [`Comparator`]; the one that compares [`Ordering::Less`] than all
/// others is dequeued first. With the default [`Natural`] comparator, that is the smallest value.
///
/// ## Usage
///
/// ```rust
/// # use ordered_queue::*;
/// let mut q = OrderedQueue::new();
/// q.push(5);
/// q.push(1);
/// q.push(3);
///
/// assert_eq!(q.poll(), Ok(1));
/// assert_eq!(q.poll(), Ok(3));
/// assert_eq!(q.poll(), Ok(5));
/// assert_eq!(q.poll(), Err(EmptyQueueError));
/// ```
///
/// ## Ties
///
/// Values that compare [`Ordering::Equal`] come out in the order they were pushed: a new value is
/// only ever linked in right before the first value it strictly beats, so it always lands behind
/// every value it ties with.
///
/// ```rust
/// # use ordered_queue::*;
/// let mut q = OrderedQueue::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
/// q.push((1, 'a'));
/// q.push((0, 'b'));
/// q.push((1, 'c'));
///
/// assert_eq!(q.poll(), Ok((0, 'b')));
/// assert_eq!(q.poll(), Ok((1, 'a')));
/// assert_eq!(q.poll(), Ok((1, 'c')));
/// ```
///
/// ## Complexity
///
/// Values live in a doubly-linked list whose nodes are allocated from a slab. Pushing scans from
/// the front for the insertion point, taking `O(n)` comparisons, then links the node in at
/// constant cost. Polling unlinks the front node in constant time.
///
/// ## Sharing
///
/// There is no internal locking. To share a queue between threads, wrap it in a lock such as
/// `Arc<Mutex<OrderedQueue<T>>>`.
pub struct OrderedQueue<T, C = Natural> {
    arena: Arena<T>,
    comparator: C,
}

impl<T: Ord> OrderedQueue<T> {
    /// Construct an empty queue that dequeues the smallest value first.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Construct an empty queue, preallocating room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C: Comparator<T>> OrderedQueue<T, C> {
    /// Construct an empty queue ranked by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    /// Construct an empty queue ranked by `comparator`, preallocating room for `capacity`
    /// values.
    ///
    /// The capacity is only a hint; the queue still grows past it.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            comparator,
        }
    }

    /// Insert `value` behind every value that ranks at or above it.
    pub fn push(&mut self, value: T) {
        let comparator = &self.comparator;
        let found = self
            .arena
            .iter()
            .enumerate()
            .find(|(_, (_, e))| comparator.compare(&value, *e) == Ordering::Less)
            .map(|(position, (key, _))| (position, key));

        let (position, next) = found.unwrap_or((self.arena.len(), self.arena.base()));
        self.arena.insert_before(value, next);

        trace!(
            "push: linked in at position {} of {}",
            position,
            self.arena.len()
        );
    }

    /// Remove and return the value with the highest priority.
    ///
    /// Fails with [`EmptyQueueError`] if there is nothing to dequeue, in which case the queue is
    /// left unchanged.
    pub fn poll(&mut self) -> Result<T, EmptyQueueError> {
        match self.arena.remove(self.arena.front()) {
            Some(value) => {
                trace!("poll: {} left", self.arena.len());
                Ok(value)
            }
            None => {
                debug!("poll: queue is empty");
                Err(EmptyQueueError)
            }
        }
    }
}

impl<T, C> OrderedQueue<T, C> {
    /// Borrow the value [`poll()`](Self::poll) would return next, if any.
    pub fn peek(&self) -> Option<&T> {
        self.arena.front().as_ref(&self.arena).value()
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether there is nothing to [`poll()`](Self::poll).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The comparator ranking this queue.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<T, C: Comparator<T> + Default> Default for OrderedQueue<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Debug, C> Debug for OrderedQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.arena.iter().map(|(_, v)| v))
            .finish()
    }
}
