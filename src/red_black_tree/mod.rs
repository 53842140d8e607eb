//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! The tree is the left-leaning variant: every red link leans left, which keeps the number of
//! cases to handle during restructuring small.

mod map;
mod node;
mod tree;

pub use self::map::RedBlackMap;
