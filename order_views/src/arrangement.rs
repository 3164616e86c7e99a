//! The six traversal orders.
//!
//! Each order is a zero-sized marker implementing [`Arrangement`]. The marker
//! picks the ordering at compile time; an [`OrderView`](crate::OrderView)
//! carries it as a type parameter and calls [`Arrangement::arrange`] once, when
//! the view is created.

use core::cmp::Ordering;

use crate::{Vec, VecDeque};

/// Computes one materialized ordering from a snapshot of elements.
pub trait Arrangement<T> {
    /// Short name used in log output.
    const NAME: &'static str;

    /// Returns a new sequence holding every element of `items` exactly once,
    /// in this arrangement's order. `items` is in insertion order.
    fn arrange(items: &[T]) -> Vec<T>;
}

/// Sorted, smallest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ascending;

/// Sorted, largest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Descending;

/// Sorted, then alternately the smallest and the largest remaining element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SideCross;

/// Insertion order, back to front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reverse;

/// Insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Insertion;

/// Middle element first, then alternately one step left and one step right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MiddleOut;

/// Total order over a `PartialOrd` type.
///
/// Values that are not comparable with themselves (`NaN`) sort after every
/// other value and compare equal to each other.
#[inline]
fn total_cmp<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    if let Some(ordering) = a.partial_cmp(b) {
        return ordering;
    }
    match (a.partial_cmp(a).is_none(), b.partial_cmp(b).is_none()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

fn sorted<T: Clone + PartialOrd>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.sort_by(total_cmp);
    out
}

impl<T: Clone + PartialOrd> Arrangement<T> for Ascending {
    const NAME: &'static str = "ascending";

    fn arrange(items: &[T]) -> Vec<T> {
        sorted(items)
    }
}

impl<T: Clone + PartialOrd> Arrangement<T> for Descending {
    const NAME: &'static str = "descending";

    fn arrange(items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        out.sort_by(|a, b| total_cmp(b, a));
        out
    }
}

impl<T: Clone + PartialOrd> Arrangement<T> for SideCross {
    const NAME: &'static str = "side-cross";

    fn arrange(items: &[T]) -> Vec<T> {
        let mut remaining = VecDeque::from(sorted(items));
        let mut out = Vec::with_capacity(remaining.len());
        while let Some(low) = remaining.pop_front() {
            out.push(low);
            if let Some(high) = remaining.pop_back() {
                out.push(high);
            }
        }
        out
    }
}

impl<T: Clone> Arrangement<T> for Reverse {
    const NAME: &'static str = "reverse";

    fn arrange(items: &[T]) -> Vec<T> {
        items.iter().rev().cloned().collect()
    }
}

impl<T: Clone> Arrangement<T> for Insertion {
    const NAME: &'static str = "insertion";

    fn arrange(items: &[T]) -> Vec<T> {
        items.to_vec()
    }
}

impl<T: Clone> Arrangement<T> for MiddleOut {
    const NAME: &'static str = "middle-out";

    fn arrange(items: &[T]) -> Vec<T> {
        let n = items.len();
        if n == 0 {
            return Vec::new();
        }

        let middle = (n - 1) / 2;
        let mut out = Vec::with_capacity(n);
        out.push(items[middle].clone());

        // [0, left) and [right, n) are still unvisited.
        let mut left = middle;
        let mut right = middle + 1;
        while left > 0 || right < n {
            if left > 0 {
                left -= 1;
                out.push(items[left].clone());
            }
            if right < n {
                out.push(items[right].clone());
                right += 1;
            }
        }
        out
    }
}
