use crate::bst::node::Node;
use crate::bst::tree;
use crate::error::{Error, Result};
use crate::traversal::LevelOrder;
use log::{debug, trace};
use std::borrow::Borrow;

/// An ordered map implemented using an unbalanced binary search tree.
///
/// Every key in the left subtree of a node is less than the key of that node, and every key in
/// the right subtree is greater. No restructuring happens after an insertion or a removal, so the
/// depth of the tree, and therefore the cost of every operation, depends on the insertion order.
/// Inserting keys in sorted order produces a tree of depth `n`.
///
/// Unlike the other maps in this crate, `BstMap` refuses to overwrite an existing key.
///
/// # Examples
///
/// ```
/// use ordered_trees::bst::BstMap;
///
/// let mut map = BstMap::new();
/// map.insert(0, 1).unwrap();
/// map.insert(3, 4).unwrap();
///
/// assert_eq!(map.get(&0), Some(&1));
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert!(map.insert(0, 2).is_err());
///
/// assert_eq!(map.remove(&0), Some((0, 1)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct BstMap<T, U> {
    root: tree::Tree<T, U>,
    len: usize,
}

impl<T, U> BstMap<T, U> {
    /// Constructs a new, empty `BstMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let map: BstMap<u32, u32> = BstMap::new();
    /// ```
    pub fn new() -> Self {
        BstMap { root: None, len: 0 }
    }

    /// Inserts a key-value pair into the map as a new leaf. Returns `Error::DuplicateKey` and
    /// leaves the map untouched if the key already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    /// use ordered_trees::Error;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.insert(1, 1), Ok(()));
    /// assert_eq!(map.insert(1, 2), Err(Error::DuplicateKey));
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Result<()>
    where
        T: Ord,
    {
        let BstMap { root, len } = self;
        tree::insert(root, Node::new(key, value))
            .map(|()| *len += 1)
            .map_err(|err| {
                trace!(target: "bst", "rejected insertion: {}", err);
                err
            })
    }

    /// Removes a key-value pair from the map. If the key exists, the removed pair is returned.
    /// Otherwise the map is unchanged and `None` is returned.
    ///
    /// A node with two children is replaced by its in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let BstMap { root, len } = self;
        match tree::remove(root, key) {
            Some(entry) => {
                *len -= 1;
                Some(entry.into_pair())
            },
            None => {
                debug!(target: "bst", "remove called with a key that is not in the tree");
                None
            },
        }
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1).unwrap();
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
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1).unwrap();
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
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1).unwrap();
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
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let map: BstMap<u32, u32> = BstMap::new();
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
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(2, 2).unwrap();
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.root);
        self.len = 0;
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
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
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
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
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// for key in 0..4 {
    ///     map.insert(key, ()).unwrap();
    /// }
    /// assert_eq!(map.height(), 4);
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
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(2, ()).unwrap();
    /// map.insert(1, ()).unwrap();
    /// map.insert(3, ()).unwrap();
    ///
    /// let mut levels = map.level_order();
    /// assert_eq!(levels.next(), Some(vec![&2]));
    /// assert_eq!(levels.next(), Some(vec![&1, &3]));
    /// assert_eq!(levels.next(), None);
    /// ```
    pub fn level_order(&self) -> impl Iterator<Item = Vec<&T>> + '_ {
        LevelOrder::new(self.root.as_ref().map(|node| &**node))
    }

    /// Returns `true` if every key is greater than all keys in its left subtree and less than all
    /// keys in its right subtree.
    pub fn is_bst(&self) -> bool
    where
        T: Ord,
    {
        tree::is_bst(&self.root)
    }

    /// Returns `true` if the heights of the two subtrees of every node differ by at most one.
    ///
    /// The map never rebalances itself, so this only reports on the shape produced by the
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, ()).unwrap();
    /// map.insert(2, ()).unwrap();
    /// assert!(map.is_balanced());
    ///
    /// map.insert(3, ()).unwrap();
    /// assert!(!map.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        tree::balanced_height(&self.root).is_some()
    }

    /// Verifies the ordering invariant and the cached length.
    ///
    /// Balance is not part of the contract of an unbalanced tree and is not checked.
    pub fn check(&self) -> Result<()>
    where
        T: Ord,
    {
        if !self.is_bst() {
            return Err(Error::InvariantViolation("keys are not in symmetric order"));
        }
        if self.level_order().map(|level| level.len()).sum::<usize>() != self.len {
            return Err(Error::InvariantViolation("length does not match the number of nodes"));
        }
        Ok(())
    }
}

impl<T, U> Drop for BstMap<T, U> {
    fn drop(&mut self) {
        tree::clear(&mut self.root);
    }
}

impl<T, U> Default for BstMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::BstMap;
    use crate::bst::node::Node;
    use crate::error::Error;

    const KEYS: [(char, u32); 10] = [
        ('A', 8),
        ('E', 12),
        ('M', 9),
        ('C', 4),
        ('P', 10),
        ('S', 0),
        ('H', 5),
        ('X', 7),
        ('L', 11),
        ('R', 3),
    ];

    fn sample_map() -> BstMap<char, u32> {
        let mut map = BstMap::new();
        for &(key, value) in KEYS.iter() {
            map.insert(key, value).unwrap();
        }
        map
    }

    fn levels(map: &BstMap<char, u32>) -> Vec<String> {
        map.level_order()
            .map(|level| level.into_iter().collect::<String>())
            .collect()
    }

    #[test]
    fn test_len_empty() {
        let map: BstMap<u32, u32> = BstMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: BstMap<u32, u32> = BstMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_empty_tree() {
        let mut map: BstMap<u32, u32> = BstMap::new();
        assert!(!map.contains_key(&0));
        assert_eq!(map.remove(&0), None);
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
        assert_eq!(map.height(), 0);
        assert_eq!(map.level_order().next(), None);
        assert!(map.is_bst());
        assert!(map.is_balanced());
        assert_eq!(map.check(), Ok(()));
    }

    #[test]
    fn test_insert() {
        let mut map = BstMap::new();
        assert_eq!(map.insert(1, 1), Ok(()));
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut map = BstMap::new();
        map.insert(1, 1).unwrap();
        assert_eq!(map.insert(1, 2), Err(Error::DuplicateKey));
        assert_eq!(map.get(&1), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_leaf() {
        let mut map = BstMap::new();
        map.insert(2, 2).unwrap();
        map.insert(1, 1).unwrap();
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert_eq!(map.level_order().collect::<Vec<_>>(), vec![vec![&2]]);
    }

    #[test]
    fn test_remove_one_child() {
        let mut map = BstMap::new();
        map.insert(1, 1).unwrap();
        map.insert(2, 2).unwrap();
        map.insert(3, 3).unwrap();
        assert_eq!(map.remove(&2), Some((2, 2)));
        assert_eq!(
            map.level_order().collect::<Vec<_>>(),
            vec![vec![&1], vec![&3]],
        );
    }

    #[test]
    fn test_remove_two_children() {
        let mut map = BstMap::new();
        for &key in [4, 2, 6, 5, 7].iter() {
            map.insert(key, key * 10).unwrap();
        }
        assert_eq!(map.remove(&4), Some((4, 40)));
        assert_eq!(map.get(&5), Some(&50));
        assert_eq!(
            map.level_order().collect::<Vec<_>>(),
            vec![vec![&5], vec![&2, &6], vec![&7]],
        );
        assert_eq!(map.check(), Ok(()));
    }

    #[test]
    fn test_remove_missing() {
        let mut map = sample_map();
        let before = levels(&map);
        assert_eq!(map.remove(&'Z'), None);
        assert_eq!(levels(&map), before);
        assert_eq!(map.len(), 10);
    }

    #[test]
    fn test_get_mut() {
        let mut map = BstMap::new();
        map.insert(1, 1).unwrap();
        *map.get_mut(&1).unwrap() = 2;
        assert_eq!(map.get(&1), Some(&2));
        assert_eq!(map.get_mut(&2), None);
    }

    #[test]
    fn test_min_max() {
        let map = sample_map();
        assert_eq!(map.min(), Some(&'A'));
        assert_eq!(map.max(), Some(&'X'));
    }

    #[test]
    fn test_sample_shape() {
        let map = sample_map();
        assert_eq!(levels(&map), vec!["A", "E", "CM", "HP", "LS", "RX"]);
        assert_eq!(map.height(), 6);
        assert!(map.is_bst());
        assert!(!map.is_balanced());
        assert_eq!(map.check(), Ok(()));
    }

    #[test]
    fn test_insert_then_remove_restores_shape() {
        let mut map = sample_map();
        let before = levels(&map);
        map.insert('B', 1).unwrap();
        assert_eq!(map.remove(&'B'), Some(('B', 1)));
        assert_eq!(levels(&map), before);
    }

    #[test]
    fn test_sorted_insertions_degenerate() {
        let mut map = BstMap::new();
        for key in 0..100 {
            map.insert(key, ()).unwrap();
        }
        assert_eq!(map.height(), 100);
        assert!(!map.is_balanced());
        assert_eq!(map.check(), Ok(()));
    }

    #[test]
    fn test_sorted_insertions_deep_tree() {
        const DEPTH: u32 = 50_000;

        let mut map = BstMap::new();
        for key in 0..DEPTH {
            map.insert(key, key).unwrap();
        }
        assert_eq!(map.insert(DEPTH - 1, 0), Err(Error::DuplicateKey));
        assert_eq!(map.height(), DEPTH as usize);
        assert!(!map.is_balanced());
        assert_eq!(map.check(), Ok(()));

        for key in (0..DEPTH).step_by(5_000).chain(Some(DEPTH - 1)) {
            assert_eq!(map.get(&key), Some(&key));
        }
        *map.get_mut(&(DEPTH - 1)).unwrap() = 0;
        assert_eq!(map.get(&(DEPTH - 1)), Some(&0));
        assert!(!map.contains_key(&DEPTH));

        assert_eq!(map.remove(&(DEPTH - 1)), Some((DEPTH - 1, 0)));
        assert_eq!(map.remove(&(DEPTH / 2)), Some((DEPTH / 2, DEPTH / 2)));
        assert_eq!(map.remove(&DEPTH), None);
        for key in 0..100 {
            assert_eq!(map.remove(&key), Some((key, key)));
        }
        assert_eq!(map.len(), DEPTH as usize - 102);
        assert_eq!(map.min(), Some(&100));
        assert_eq!(map.max(), Some(&(DEPTH - 2)));
        assert_eq!(map.check(), Ok(()));
    }

    #[test]
    fn test_check_stale_len() {
        let mut map = BstMap::new();
        for &key in [2, 1, 3].iter() {
            map.insert(key, ()).unwrap();
        }
        let map = BstMap {
            root: map.root.take(),
            len: 2,
        };
        assert!(map.is_bst());
        assert_eq!(
            map.check(),
            Err(Error::InvariantViolation("length does not match the number of nodes")),
        );
    }

    #[test]
    fn test_check_out_of_order() {
        let mut root = Node::new(2, ());
        root.left = Some(Box::new(Node::new(3, ())));
        let map = BstMap {
            root: Some(Box::new(root)),
            len: 2,
        };
        assert!(!map.is_bst());
        assert_eq!(
            map.check(),
            Err(Error::InvariantViolation("keys are not in symmetric order")),
        );
    }

    #[test]
    fn test_clear() {
        let mut map = sample_map();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(!map.contains_key(&'A'));
    }
}
