//! Ordered key-value maps backed by binary search trees.
//!
//! Two parallel implementations of the same ordered map are provided:
//!
//! - [`bst::BstMap`]: a plain binary search tree with no rebalancing. Lookups cost `O(depth)`,
//!   which degrades to `O(n)` for sorted insertions.
//! - [`red_black_tree::RedBlackMap`]: a left-leaning red black tree that keeps every operation
//!   logarithmic through rotations and color flips.
//!
//! Both maps expose structural diagnostics (`is_bst`, `is_balanced`, `check`, ...) that are meant
//! to be used as test oracles. They are never run by the mutating operations themselves.

mod entry;
mod error;
mod traversal;
pub mod bst;
pub mod red_black_tree;

pub use crate::error::{Error, Result};
