//! Cursor views over a materialized ordering.
//!
//! # Examples
//!
//! ## Walking a view
//!
//! ```rust
//! use order_views::MiddleOutOrder;
//!
//! let view = MiddleOutOrder::new(&[7, 15, 6, 1, 2]);
//!
//! let mut it = view.begin();
//! let end = view.end();
//! let mut seen = Vec::new();
//! while it != end {
//!     seen.push(*it.get().unwrap());
//!     it.advance();
//! }
//!
//! assert_eq!(seen, vec![6, 15, 1, 7, 2]);
//! ```
//!
//! ## As a Rust iterator
//!
//! ```rust
//! use order_views::SideCrossOrder;
//!
//! let view = SideCrossOrder::new(&[7, 15, 6, 1, 2]);
//! let values: Vec<i32> = view.into_iter().collect();
//!
//! assert_eq!(values, vec![1, 15, 2, 7, 6]);
//! ```
//!
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::arrangement::{Ascending, Descending, Insertion, MiddleOut, Reverse, SideCross};
use crate::{Arc, Arrangement, ViewError};

type Result<T, ViewError> = core::result::Result<T, ViewError>;

/// A snapshot of elements in one arrangement, plus a forward-only cursor.
///
/// The ordering is computed once by `A` when the view is built and is shared
/// by every copy made through [`begin`](Self::begin), [`end`](Self::end) and
/// [`post_advance`](Self::post_advance). Two views of the same type are equal
/// when their cursors are equal; the elements are not compared.
pub struct OrderView<T, A> {
    items: Arc<[T]>,
    cursor: usize,
    _arrangement: PhantomData<A>,
}

/// Sorted, smallest first.
pub type AscendingOrder<T> = OrderView<T, Ascending>;
/// Sorted, largest first.
pub type DescendingOrder<T> = OrderView<T, Descending>;
/// Smallest, largest, second smallest, second largest, and so on.
pub type SideCrossOrder<T> = OrderView<T, SideCross>;
/// Insertion order reversed.
pub type ReverseOrder<T> = OrderView<T, Reverse>;
/// Insertion order.
pub type Order<T> = OrderView<T, Insertion>;
/// Middle element first, then outward, left before right.
pub type MiddleOutOrder<T> = OrderView<T, MiddleOut>;

impl<T, A: Arrangement<T>> OrderView<T, A> {
    /// Builds a view from `items`, given in insertion order.
    ///
    /// The view keeps its own copy; later changes to the source are not seen.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_views::AscendingOrder;
    ///
    /// let mut source = vec![3, 1, 2];
    /// let view = AscendingOrder::new(&source);
    /// source.push(0);
    ///
    /// assert_eq!(view.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn new(items: &[T]) -> Self {
        let arranged = A::arrange(items);
        log::trace!("materialized {} ordering of {} elements", A::NAME, arranged.len());
        Self {
            items: Arc::from(arranged),
            cursor: 0,
            _arrangement: PhantomData,
        }
    }
}

impl<T, A> OrderView<T, A> {
    fn at(&self, cursor: usize) -> Self {
        Self {
            items: Arc::clone(&self.items),
            cursor,
            _arrangement: PhantomData,
        }
    }

    /// Returns a view positioned at the first element.
    #[inline]
    pub fn begin(&self) -> Self {
        self.at(0)
    }

    /// Returns a view positioned one past the last element.
    #[inline]
    pub fn end(&self) -> Self {
        self.at(self.items.len())
    }

    /// Moves the cursor forward by one and returns the advanced view.
    ///
    /// Advancing past the end is allowed; reading there fails.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.cursor += 1;
        self
    }

    /// Moves the cursor forward by one and returns a copy of the view as it
    /// was before the move.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_views::Order;
    ///
    /// let mut view = Order::new(&['a', 'b']);
    /// let before = view.post_advance();
    ///
    /// assert_eq!(before.get(), Ok(&'a'));
    /// assert_eq!(view.get(), Ok(&'b'));
    /// ```
    pub fn post_advance(&mut self) -> Self {
        let before = self.at(self.cursor);
        self.cursor += 1;
        before
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::OutOfRange` if the cursor is at or past the end.
    #[inline]
    pub fn get(&self) -> Result<&T, ViewError> {
        self.items.get(self.cursor).ok_or(ViewError::OutOfRange {
            position: self.cursor,
            len: self.items.len(),
        })
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of elements in the materialized ordering.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` once the cursor has reached or passed the end.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.cursor >= self.items.len()
    }

    /// The full materialized ordering, independent of the cursor.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The elements from the cursor to the end.
    pub fn remaining(&self) -> &[T] {
        self.items.get(self.cursor..).unwrap_or(&[])
    }

    /// Iterates by reference from the cursor to the end without moving it.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.remaining().iter()
    }
}

impl<T, A> Clone for OrderView<T, A> {
    fn clone(&self) -> Self {
        self.at(self.cursor)
    }
}

impl<T, A> PartialEq for OrderView<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor
    }
}

impl<T, A> Eq for OrderView<T, A> {}

impl<T: fmt::Debug, A> fmt::Debug for OrderView<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderView")
            .field("arrangement", &core::any::type_name::<A>())
            .field("items", &&*self.items)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<'a, T, A> IntoIterator for &'a OrderView<T, A> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone, A> IntoIterator for OrderView<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            items: self.items,
            cursor: self.cursor,
        }
    }
}

/// Owning iterator over the rest of a view, yielding clones.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    items: Arc<[T]>,
    cursor: usize,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len().saturating_sub(self.cursor);
        (left, Some(left))
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [i32; 5] = [7, 15, 6, 1, 2];

    fn walk<T: Clone, A>(view: &OrderView<T, A>) -> Vec<T> {
        let mut it = view.begin();
        let end = view.end();
        let mut out = Vec::new();
        while it != end {
            out.push(it.get().unwrap().clone());
            it.advance();
        }
        out
    }

    #[test]
    fn walk_each_order() {
        assert_eq!(walk(&AscendingOrder::new(&SAMPLE)), vec![1, 2, 6, 7, 15]);
        assert_eq!(walk(&DescendingOrder::new(&SAMPLE)), vec![15, 7, 6, 2, 1]);
        assert_eq!(walk(&SideCrossOrder::new(&SAMPLE)), vec![1, 15, 2, 7, 6]);
        assert_eq!(walk(&ReverseOrder::new(&SAMPLE)), vec![2, 1, 6, 15, 7]);
        assert_eq!(walk(&Order::new(&SAMPLE)), SAMPLE.to_vec());
        assert_eq!(walk(&MiddleOutOrder::new(&SAMPLE)), vec![6, 15, 1, 7, 2]);
    }

    #[test]
    fn begin_and_end_positions() {
        let view = AscendingOrder::new(&SAMPLE);
        assert_eq!(view.begin().position(), 0);
        assert_eq!(view.end().position(), 5);
        assert!(view.end().is_end());
        assert!(!view.begin().is_end());
    }

    #[test]
    fn get_at_end_is_out_of_range() {
        let view = ReverseOrder::new(&SAMPLE);
        assert_eq!(
            view.end().get(),
            Err(ViewError::OutOfRange {
                position: 5,
                len: 5
            })
        );
    }

    #[test]
    fn advancing_past_end_is_allowed_but_unreadable() {
        let mut view = Order::new(&[1]);
        view.advance().advance().advance();
        assert_eq!(view.position(), 3);
        assert!(view.is_end());
        assert!(view.get().is_err());
        assert!(view.remaining().is_empty());
    }

    #[test]
    fn pre_advance_returns_moved_view() {
        let mut view = AscendingOrder::new(&[3, 1, 2]);
        assert_eq!(view.advance().get(), Ok(&2));
    }

    #[test]
    fn post_advance_returns_previous_position() {
        let mut view = DescendingOrder::new(&[3, 1, 2]);
        let before = view.post_advance();
        assert_eq!(before.position(), 0);
        assert_eq!(before.get(), Ok(&3));
        assert_eq!(view.position(), 1);
        assert_eq!(view.get(), Ok(&2));
    }

    #[test]
    fn equality_ignores_contents() {
        let a = AscendingOrder::new(&[1, 2, 3]);
        let b = AscendingOrder::new(&[9, 8]);
        assert_eq!(a.begin(), b.begin());
        assert_ne!(a.end(), b.end());
    }

    #[test]
    fn empty_view_begin_equals_end() {
        let view = MiddleOutOrder::<i32>::new(&[]);
        assert!(view.is_empty());
        assert_eq!(view.begin(), view.end());
        assert!(view.get().is_err());
    }

    #[test]
    fn iterators_start_at_cursor() {
        let mut view = Order::new(&[1, 2, 3]);
        view.advance();
        let borrowed: Vec<&i32> = (&view).into_iter().collect();
        assert_eq!(borrowed, vec![&2, &3]);
        assert_eq!(view.position(), 1);

        let owned = view.into_iter();
        assert_eq!(owned.len(), 2);
        assert_eq!(owned.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn copies_share_the_snapshot() {
        let view = SideCrossOrder::new(&SAMPLE);
        let copy = view.clone();
        assert_eq!(copy.as_slice().as_ptr(), view.as_slice().as_ptr());
    }

    #[test]
    fn views_are_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<AscendingOrder<i32>>();
        assert_send_sync::<MiddleOutOrder<String>>();
    }
}
