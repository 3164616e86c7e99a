//! # order_views
//!
//! Forward-only cursor views over six derived orderings of a slice.
//!
//! ```rust
//! use order_views::{AscendingOrder, MiddleOutOrder};
//!
//! let values = [10, 20, 30, 40];
//!
//! let sorted: Vec<i32> = AscendingOrder::new(&values).into_iter().collect();
//! assert_eq!(sorted, vec![10, 20, 30, 40]);
//!
//! let middle_out: Vec<i32> = MiddleOutOrder::new(&values).into_iter().collect();
//! assert_eq!(middle_out, vec![20, 10, 30, 40]);
//! ```
//!
//! Every view snapshots its input when built. Reading past the end returns
//! [`ViewError::OutOfRange`].
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub(crate) use std::{collections::VecDeque, sync::Arc, vec::Vec};

#[cfg(not(feature = "std"))]
pub(crate) use alloc::{collections::VecDeque, sync::Arc, vec::Vec};

pub mod arrangement;
pub mod error;
pub mod view;

pub use arrangement::Arrangement;
pub use error::ViewError;
pub use view::{
    AscendingOrder, DescendingOrder, IntoIter, MiddleOutOrder, Order, OrderView, ReverseOrder,
    SideCrossOrder,
};
