//! Binary search tree without any rebalancing.
//!
//! The shape of the tree is fully determined by the order of insertions, so a sorted sequence of
//! keys degenerates into a linked list. The map is kept as a baseline to compare against the
//! balanced trees of this crate.

mod map;
mod node;
mod tree;

pub use self::map::BstMap;
