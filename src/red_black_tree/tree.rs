use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn is_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(node) => node.is_red(),
    }
}

pub fn is_left_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(node) => is_red(&node.left),
    }
}

pub fn size<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(node) => node.size,
    }
}

// Colors the root red if neither of its children is red so that a removal can always borrow a
// red link on the way down.
pub fn prime_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

pub fn fix_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(node) = tree {
        node.color = Color::Black;
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let ret = match tree {
        Some(node) => match new_node.entry.key.cmp(&node.entry.key) {
            Ordering::Less => insert(&mut node.left, new_node),
            Ordering::Greater => insert(&mut node.right, new_node),
            Ordering::Equal => Some(mem::replace(&mut node.entry, new_node.entry)),
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    let node = tree.as_mut().expect("Expected non-empty tree.");

    if is_red(&node.right) && !is_red(&node.left) {
        node.rotate_left();
    }

    if is_red(&node.left) && is_left_red(&node.left) {
        node.rotate_right();
    }

    if is_red(&node.left) && is_red(&node.right) {
        node.flip_colors();
    }

    node.update();
    ret
}

pub fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Option<Entry<T, U>> {
    let mut node = tree.take()?;
    if node.left.is_none() {
        *tree = node.right.take();
        return Some(node.entry);
    }

    if !is_red(&node.left) && !is_left_red(&node.left) {
        node.move_red_left();
    }

    let ret = remove_min(&mut node.left);
    node.balance();
    *tree = Some(node);
    ret
}

pub fn remove_max<T, U>(tree: &mut Tree<T, U>) -> Option<Entry<T, U>> {
    let mut node = tree.take()?;
    if is_red(&node.left) {
        node.rotate_right();
    }

    if node.right.is_none() {
        *tree = node.left.take();
        return Some(node.entry);
    }

    if !is_red(&node.right) && !is_left_red(&node.right) {
        node.move_red_right();
    }

    let ret = remove_max(&mut node.right);
    node.balance();
    *tree = Some(node);
    ret
}

// precondition: the key exists in the tree
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut node = tree.take()?;
    let ret = if key.cmp(node.entry.key.borrow()) == Ordering::Less {
        if !is_red(&node.left) && !is_left_red(&node.left) {
            node.move_red_left();
        }
        remove(&mut node.left, key)
    } else {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if key.cmp(node.entry.key.borrow()) == Ordering::Equal && node.right.is_none() {
            debug_assert!(node.left.is_none());
            return Some(node.entry);
        }

        if !is_red(&node.right) && !is_left_red(&node.right) {
            node.move_red_right();
        }

        if key.cmp(node.entry.key.borrow()) == Ordering::Equal {
            let successor =
                remove_min(&mut node.right).expect("Expected a non-empty right subtree.");
            Some(mem::replace(&mut node.entry, successor))
        } else {
            remove(&mut node.right, key)
        }
    };

    node.balance();
    *tree = Some(node);
    ret
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(node) => cmp::max(height(&node.left), height(&node.right)) + 1,
    }
}

pub fn is_bst<T, U>(tree: &Tree<T, U>, lower: Option<&T>, upper: Option<&T>) -> bool
where
    T: Ord,
{
    match tree {
        None => true,
        Some(node) => {
            let key = &node.entry.key;
            if lower.map_or(false, |lower| key <= lower) {
                return false;
            }
            if upper.map_or(false, |upper| key >= upper) {
                return false;
            }
            is_bst(&node.left, lower, Some(key)) && is_bst(&node.right, Some(key), upper)
        },
    }
}

pub fn is_size_consistent<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => true,
        Some(node) => {
            node.size == size(&node.left) + size(&node.right) + 1
                && is_size_consistent(&node.left)
                && is_size_consistent(&node.right)
        },
    }
}

pub fn is_left_leaning<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => true,
        Some(node) => {
            if is_red(&node.right) {
                return false;
            }
            if node.is_red() && is_red(&node.left) {
                return false;
            }
            is_left_leaning(&node.left) && is_left_leaning(&node.right)
        },
    }
}

// Every path from the root to an absent child must cross exactly `black_nodes` black nodes.
pub fn is_balanced<T, U>(tree: &Tree<T, U>, black_nodes: usize) -> bool {
    match tree {
        None => black_nodes == 0,
        Some(node) => {
            let black_nodes = if node.is_red() {
                black_nodes
            } else if black_nodes == 0 {
                return false;
            } else {
                black_nodes - 1
            };
            is_balanced(&node.left, black_nodes) && is_balanced(&node.right, black_nodes)
        },
    }
}

pub fn black_height<T, U>(tree: &Tree<T, U>) -> usize {
    let mut black_nodes = 0;
    let mut curr = tree;
    while let Some(node) = curr {
        if !node.is_red() {
            black_nodes += 1;
        }
        curr = &node.left;
    }
    black_nodes
}
