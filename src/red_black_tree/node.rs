use crate::entry::Entry;
use crate::red_black_tree::tree;
use crate::traversal::BinaryNode;
use std::mem;

/// The color of the link between a node and its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub size: usize,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn update(&mut self) {
        self.size = tree::size(&self.left) + tree::size(&self.right) + 1;
    }

    pub fn flip_colors(&mut self) {
        self.color = self.color.flip();
        if let Some(ref mut child) = self.left {
            child.color = child.color.flip();
        }
        if let Some(ref mut child) = self.right {
            child.color = child.color.flip();
        }
    }

    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        child.update();
        self.left = Some(child);
        self.update();
    }

    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        child.update();
        self.right = Some(child);
        self.update();
    }

    // Restores the left-leaning invariants of this node after one of its subtrees changed.
    pub fn balance(&mut self) {
        if tree::is_red(&self.right) && !tree::is_red(&self.left) {
            self.rotate_left();
        }

        if tree::is_red(&self.left) && tree::is_left_red(&self.left) {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }

        self.update();
    }

    // precondition: the node is red, and both its left child and that child's left child are
    // black
    pub fn move_red_left(&mut self) {
        self.flip_colors();
        if tree::is_left_red(&self.right) {
            if let Some(ref mut child) = self.right {
                child.rotate_right();
            }
            self.rotate_left();
            self.flip_colors();
        }
    }

    // precondition: the node is red, and both its right child and that child's left child are
    // black
    pub fn move_red_right(&mut self) {
        self.flip_colors();
        if tree::is_left_red(&self.left) {
            self.rotate_right();
            self.flip_colors();
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
