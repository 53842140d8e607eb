use crate::bst::node::Node;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::traversal::LevelOrder;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

// Follows the link from `tree` towards `ordering`.
fn child<T, U>(tree: &mut Tree<T, U>, ordering: Ordering) -> &mut Tree<T, U> {
    let node = tree.as_mut().expect("Expected a non-empty tree.");
    if ordering == Ordering::Less {
        &mut node.left
    } else {
        &mut node.right
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Result<()>
where
    T: Ord,
{
    let mut curr = tree;
    loop {
        let ordering = match curr.as_ref() {
            Some(node) => new_node.entry.key.cmp(&node.entry.key),
            None => break,
        };
        if ordering == Ordering::Equal {
            return Err(Error::DuplicateKey);
        }
        curr = child(curr, ordering);
    }

    *curr = Some(Box::new(new_node));
    Ok(())
}

// precondition: there exists a minimum node in the tree
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Option<Entry<T, U>> {
    let mut curr = tree;
    while curr.as_ref()?.left.is_some() {
        curr = child(curr, Ordering::Less);
    }

    let mut node = curr.take()?;
    *curr = node.right.take();
    Some(node.entry)
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    loop {
        let ordering = key.cmp(curr.as_ref()?.entry.key.borrow());
        if ordering == Ordering::Equal {
            break;
        }
        curr = child(curr, ordering);
    }

    let mut node = curr.take()?;
    match (node.left.take(), node.right.take()) {
        (None, None) => Some(node.entry),
        (Some(subtree), None) | (None, Some(subtree)) => {
            *curr = Some(subtree);
            Some(node.entry)
        },
        (left, mut right) => {
            // Hibbard deletion: the in-order successor takes the place of the removed entry.
            let successor = remove_min(&mut right).expect("Expected a non-empty right subtree.");
            node.left = left;
            node.right = right;
            let ret = mem::replace(&mut node.entry, successor);
            *curr = Some(node);
            Some(ret)
        },
    }
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
    let mut curr = tree;
    loop {
        let ordering = key.cmp(curr.as_ref()?.entry.key.borrow());
        if ordering == Ordering::Equal {
            return curr.as_mut().map(|node| &mut node.entry);
        }
        curr = child(curr, ordering);
    }
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
    LevelOrder::new(tree.as_ref().map(|node| &**node)).count()
}

pub fn is_bst<T, U>(tree: &Tree<T, U>) -> bool
where
    T: Ord,
{
    let mut stack = Vec::new();
    if let Some(node) = tree {
        stack.push((node, None, None));
    }

    while let Some((node, lower, upper)) = stack.pop() {
        let key = &node.entry.key;
        if lower.map_or(false, |lower| key <= lower) {
            return false;
        }
        if upper.map_or(false, |upper| key >= upper) {
            return false;
        }
        if let Some(left) = &node.left {
            stack.push((left, lower, Some(key)));
        }
        if let Some(right) = &node.right {
            stack.push((right, Some(key), upper));
        }
    }
    true
}

// Returns `None` as soon as some subtree has children whose heights differ by more than one.
// Subtrees are visited in post-order with an explicit stack since the tree can be arbitrarily
// deep.
pub fn balanced_height<T, U>(tree: &Tree<T, U>) -> Option<usize> {
    let mut pending = vec![(tree, false)];
    let mut heights = Vec::new();

    while let Some((tree, expanded)) = pending.pop() {
        match tree {
            None => heights.push(0),
            Some(node) if !expanded => {
                pending.push((tree, true));
                pending.push((&node.right, false));
                pending.push((&node.left, false));
            },
            Some(_) => {
                let right = heights.pop()?;
                let left = heights.pop()?;
                let (shorter, taller) = if left < right { (left, right) } else { (right, left) };
                if taller - shorter > 1 {
                    return None;
                }
                heights.push(taller + 1);
            },
        }
    }
    heights.pop()
}

// Unlinks nodes one at a time so that dropping a degenerate tree does not recurse.
pub fn clear<T, U>(tree: &mut Tree<T, U>) {
    let mut stack: Vec<Box<Node<T, U>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
