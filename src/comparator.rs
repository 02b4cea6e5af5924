//! Comparators that decide the priority order of an [`OrderedQueue`](crate::OrderedQueue).
//!
//! A comparator answers one question: does `a` come out of the queue before `b`? It does so by
//! returning an [`Ordering`]: [`Ordering::Less`] means `a` has strictly higher priority and
//! sits earlier, [`Ordering::Equal`] means `a` and `b` tie, and [`Ordering::Greater`] means `a`
//! has lower priority.
//!
//! Any closure `Fn(&T, &T) -> Ordering` is a comparator:
//!
//! ```rust
//! # use ordered_queue::OrderedQueue;
//! let mut q = OrderedQueue::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! q.push("three");
//! q.push("two");
//! assert_eq!(q.poll(), Ok("two"));
//! ```
use num::Signed;
use std::cmp::Ordering;

/// A total preorder over `T`, used to rank queued values.
///
/// The stock comparators over floats ([`Difference`] and [`BySign`]) read a `NaN` difference as a
/// tie, and treat `0.0` and `-0.0` alike, so they stay reflexive.
pub trait Comparator<T: ?Sized> {
    /// Compare `a` against `b`; [`Ordering::Less`] means `a` is dequeued first.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Smallest value first, according to [`Ord`].
///
/// This is the default comparator of [`OrderedQueue`](crate::OrderedQueue).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Largest value first, according to [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed;

impl<T: Ord + ?Sized> Comparator<T> for Reversed {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Ranks values by the sign of `a - b`.
///
/// Only valid for signed, non-overflowing domains: the [`Signed`] bound already rules out
/// unsigned integers, whose subtraction would wrap, but a difference that overflows a signed
/// integer still panics in debug builds and wraps in release builds. For floats, a `NaN`
/// difference is read as a tie. Prefer [`Natural`] whenever `T: Ord`; it agrees with this
/// comparator wherever the subtraction is well-defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Difference;

impl<T: Signed + PartialOrd + Clone> Comparator<T> for Difference {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        sign(&(a.clone() - b.clone()))
    }
}

/// Adapts a function returning a signed number into a [`Comparator`].
///
/// A negative result means `a` comes first, a positive one means `b` does, and anything else
/// (zero of either sign, or `NaN` for floats) is a tie.
///
/// ```rust
/// # use ordered_queue::{BySign, OrderedQueue};
/// let mut q = OrderedQueue::with_comparator(BySign(|a: &i32, b: &i32| b - a));
/// q.push(1);
/// q.push(3);
/// q.push(2);
/// assert_eq!(q.poll(), Ok(3));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BySign<F>(pub F);

impl<T: ?Sized, N: Signed + PartialOrd, F> Comparator<T> for BySign<F>
where
    F: Fn(&T, &T) -> N,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        sign(&(self.0)(a, b))
    }
}

/// Read the sign of a number as an [`Ordering`] relative to zero.
///
/// [`Signed::is_negative`] only looks at the sign bit of a float, so compare against zero
/// instead: `-0.0` is then a tie, and so is `NaN`, which has no order at all.
fn sign<N: Signed + PartialOrd>(n: &N) -> Ordering {
    n.partial_cmp(&N::zero()).unwrap_or(Ordering::Equal)
}
