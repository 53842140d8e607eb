use std::mem;

/// Read-only view of a binary tree node used by the level-order traversal.
pub trait BinaryNode {
    type Key;

    fn key(&self) -> &Self::Key;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;
}

/// An iterator over the depths of a tree.
///
/// Each call to `next` yields the keys at the next depth, ordered from left to right. The root is
/// the only key of the first level and the iterator ends after the deepest level.
pub struct LevelOrder<'a, N> {
    frontier: Vec<&'a N>,
}

impl<'a, N> LevelOrder<'a, N> {
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        LevelOrder {
            frontier: root.into_iter().collect(),
        }
    }
}

impl<'a, N> Iterator for LevelOrder<'a, N>
where
    N: BinaryNode + 'a,
    N::Key: 'a,
{
    type Item = Vec<&'a N::Key>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frontier.is_empty() {
            return None;
        }

        let level = mem::replace(&mut self.frontier, Vec::new());
        for &node in &level {
            self.frontier.extend(node.left());
            self.frontier.extend(node.right());
        }
        Some(level.into_iter().map(|node| node.key()).collect())
    }
}
