use crate::bst::tree;
use crate::entry::Entry;
use crate::traversal::BinaryNode;

/// A struct representing an internal node of a binary search tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            left: None,
            right: None,
        }
    }
}

impl<T, U> BinaryNode for Node<T, U> {
    type Key = T;

    fn key(&self) -> &T {
        &self.entry.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_ref().map(|node| &**node)
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_ref().map(|node| &**node)
    }
}
