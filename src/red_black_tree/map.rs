use crate::error::{Error, Result};
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;
use crate::traversal::LevelOrder;
use log::{debug, trace};
use std::borrow::Borrow;

/// An ordered map implemented using a left-leaning red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors each link red or black.
/// The left-leaning variant only allows red links to lean left and never allows two red links in
/// a row, which makes the tree a binary encoding of a 2-3 tree. Every path from the root to an
/// empty subtree crosses the same number of black links, so the height of the tree stays within
/// `2 * log2(n + 1)`. Each node also tracks the size of its subtree, making `len` constant time.
///
/// # Examples
///
/// ```
/// use ordered_trees::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map.get(&0), Some(&1));
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.max(), Some(&3));
///
/// *map.get_mut(&0).unwrap() = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct RedBlackMap<T, U> {
    root: tree::Tree<T, U>,
}

impl<T, U> RedBlackMap<T, U> {
    /// Constructs a new, empty `RedBlackMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap { root: None }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will
    /// return and replace the old key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        T: Ord,
    {
        let ret = tree::insert(&mut self.root, Node::new(key, value));
        tree::fix_root(&mut self.root);
        ret.map(|entry| entry.into_pair())
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise the map is left untouched and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        if !self.contains_key(key) {
            debug!(target: "llrb", "remove called with a key that is not in the tree");
            return None;
        }

        self.prime_root();
        let ret = tree::remove(&mut self.root, key);
        tree::fix_root(&mut self.root);
        ret.map(|entry| entry.into_pair())
    }

    /// Removes the key-value pair with the smallest key. Returns `Error::EmptyTree` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    /// use ordered_trees::Error;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.remove_min(), Ok((1, 1)));
    /// assert_eq!(map.remove_min(), Ok((3, 3)));
    /// assert_eq!(map.remove_min(), Err(Error::EmptyTree));
    /// ```
    pub fn remove_min(&mut self) -> Result<(T, U)> {
        if self.is_empty() {
            return Err(Error::EmptyTree);
        }

        self.prime_root();
        let ret = tree::remove_min(&mut self.root);
        tree::fix_root(&mut self.root);
        ret.map(|entry| entry.into_pair()).ok_or(Error::EmptyTree)
    }

    /// Removes the key-value pair with the largest key. Returns `Error::EmptyTree` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    /// use ordered_trees::Error;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.remove_max(), Ok((3, 3)));
    /// assert_eq!(map.remove_max(), Ok((1, 1)));
    /// assert_eq!(map.remove_max(), Err(Error::EmptyTree));
    /// ```
    pub fn remove_max(&mut self) -> Result<(T, U)> {
        if self.is_empty() {
            return Err(Error::EmptyTree);
        }

        self.prime_root();
        let ret = tree::remove_max(&mut self.root);
        tree::fix_root(&mut self.root);
        ret.map(|entry| entry.into_pair()).ok_or(Error::EmptyTree)
    }

    fn prime_root(&mut self) {
        trace!(target: "llrb", "priming root before removal, size {}", self.len());
        tree::prime_root(&mut self.root);
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. Returns
    /// `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.root, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.root, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::size(&self.root)
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root).map(|entry| &entry.key)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..7 {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns an iterator over the levels of the tree. Each item holds the keys at one depth,
    /// ordered from left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, ());
    /// map.insert(2, ());
    /// map.insert(3, ());
    ///
    /// let mut levels = map.level_order();
    /// assert_eq!(levels.next(), Some(vec![&2]));
    /// assert_eq!(levels.next(), Some(vec![&1, &3]));
    /// assert_eq!(levels.next(), None);
    /// ```
    pub fn level_order(&self) -> impl Iterator<Item = Vec<&T>> + '_ {
        LevelOrder::new(self.root.as_ref().map(|node| &**node))
    }

    /// Returns `true` if the keys of the tree are in symmetric order.
    pub fn is_bst(&self) -> bool
    where
        T: Ord,
    {
        tree::is_bst(&self.root, None, None)
    }

    /// Returns `true` if the subtree size cached in every node matches its actual size.
    pub fn is_size_consistent(&self) -> bool {
        tree::is_size_consistent(&self.root)
    }

    /// Returns `true` if every path from the root to an empty subtree contains the same number of
    /// black nodes.
    pub fn is_balanced(&self) -> bool {
        tree::is_balanced(&self.root, tree::black_height(&self.root))
    }

    /// Returns `true` if the root is black, no red link leans right, and no red node has a red
    /// left child.
    pub fn is_left_leaning(&self) -> bool {
        !tree::is_red(&self.root) && tree::is_left_leaning(&self.root)
    }

    /// Runs every structural diagnostic and reports the first invariant that does not hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.check(), Ok(()));
    /// ```
    pub fn check(&self) -> Result<()>
    where
        T: Ord,
    {
        if !self.is_bst() {
            return Err(Error::InvariantViolation("keys are not in symmetric order"));
        }
        if !self.is_size_consistent() {
            return Err(Error::InvariantViolation("subtree sizes are not consistent"));
        }
        if !self.is_left_leaning() {
            return Err(Error::InvariantViolation("red links do not lean left"));
        }
        if !self.is_balanced() {
            return Err(Error::InvariantViolation("black heights are not equal"));
        }
        Ok(())
    }
}

impl<T, U> Default for RedBlackMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}
