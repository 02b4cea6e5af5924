use thiserror::Error;

/// Returned by [`OrderedQueue::poll()`](crate::OrderedQueue::poll) when there is nothing left
/// to dequeue.
///
/// The queue is left untouched; check [`OrderedQueue::is_empty()`](crate::OrderedQueue::is_empty)
/// beforehand to avoid this path entirely.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("ordered queue is empty")]
pub struct EmptyQueueError;
