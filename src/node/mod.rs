mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use std::cmp::Ordering::*;
use std::mem::{replace, swap};
use tracing::trace;
use super::balance::{self, BalanceState};

pub use self::iter::{InOrder, Traverse};
#[cfg(test)]
pub use self::test::assert_avl_tree;

pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// Returns the cached height of the subtree rooted at `link`, or 0 if it is empty.
pub fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

#[derive(Clone)]
pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    height: usize,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, height: 1, key, value }
    }

    pub fn key(&self) -> &K { &self.key }

    pub fn value(&self) -> &V { &self.value }

    pub fn value_mut(&mut self) -> &mut V { &mut self.value }

    pub fn key_value(&self) -> (&K, &V) { (&self.key, &self.value) }

    pub fn left(&self) -> Option<&Node<K, V>> { self.left.as_deref() }

    pub fn right(&self) -> Option<&Node<K, V>> { self.right.as_deref() }

    pub fn into_key_value(self) -> (K, V) { (self.key, self.value) }

    pub fn balance_state(&self) -> BalanceState {
        BalanceState::of(height(&self.left), height(&self.right))
    }

    fn balance_factor(&self) -> isize {
        balance::factor(height(&self.left), height(&self.right))
    }

    fn update_height(&mut self) {
        self.height = balance::parent_height(height(&self.left), height(&self.right));
    }

    // The right child becomes the subtree root; its left subtree moves under the old root.
    fn rotate_left(node: &mut Box<Self>) {
        let mut pivot = node.right.take().expect("left rotation requires a right child");
        swap(&mut node.right, &mut pivot.left); // pivot.left now None
        node.update_height();
        swap(node, &mut pivot);
        node.left = Some(pivot);
        node.update_height();
        trace!(height = node.height, "rotated left");
    }

    // Mirror image of `rotate_left`.
    fn rotate_right(node: &mut Box<Self>) {
        let mut pivot = node.left.take().expect("right rotation requires a left child");
        swap(&mut node.left, &mut pivot.right); // pivot.right now None
        node.update_height();
        swap(node, &mut pivot);
        node.right = Some(pivot);
        node.update_height();
        trace!(height = node.height, "rotated right");
    }

    /// Restores the height cache and the balance invariant at `node`, assuming both of its
    /// subtrees already satisfy them.
    fn rebalance(node: &mut Box<Self>) {
        node.update_height();

        match node.balance_state() {
            BalanceState::LeftHeavy => {
                if let Some(left) = node.left.as_mut() {
                    if left.balance_factor() < 0 { Node::rotate_left(left); }
                }
                Node::rotate_right(node);
            }
            BalanceState::RightHeavy => {
                if let Some(right) = node.right.as_mut() {
                    if right.balance_factor() > 0 { Node::rotate_right(right); }
                }
                Node::rotate_left(node);
            }
            BalanceState::Balanced => {}
        }
    }
}

/// Inserts an entry below `link`, returning the value it replaced, if any.
///
/// An equal key keeps its original key and takes the new value.
pub fn insert<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Option<V>
    where C: Compare<K> {

    match link {
        None => {
            *link = Some(Box::new(Node::new(key, value)));
            None
        }
        Some(node) => {
            let old_value = match cmp.compare(&key, &node.key) {
                Equal => return Some(replace(&mut node.value, value)),
                Less => insert(&mut node.left, cmp, key, value),
                Greater => insert(&mut node.right, cmp, key, value),
            };

            Node::rebalance(node);
            old_value
        }
    }
}

/// Removes the entry whose key is equal to `key` from below `link`.
pub fn remove<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    let node = link.as_mut()?;

    let key_value = match cmp.compare(key, &node.key) {
        Equal => return unlink(link),
        Less => remove(&mut node.left, cmp, key)?,
        Greater => remove(&mut node.right, cmp, key)?,
    };

    Node::rebalance(node);
    Some(key_value)
}

/// Removes the entry with the least key whose value is equal to `value` from below `link`.
pub fn remove_value<K, V>(link: &mut Link<K, V>, value: &V) -> Option<(K, V)>
    where V: PartialEq {

    let node = link.as_mut()?;

    if let Some(key_value) = remove_value(&mut node.left, value) {
        Node::rebalance(node);
        return Some(key_value);
    }

    if node.value == *value { return unlink(link); }

    let key_value = remove_value(&mut node.right, value)?;
    Node::rebalance(node);
    Some(key_value)
}

/// Removes the entry with the least key from below `link`.
pub fn remove_min<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    if link.as_ref().map_or(false, |node| node.left.is_some()) {
        let node = link.as_mut()?;
        let key_value = remove_min(&mut node.left);
        Node::rebalance(node);
        return key_value;
    }

    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.into_key_value())
}

// Detaches the root of `link`, splicing its subtrees back together.
fn unlink<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    let mut node = link.take()?;

    match (node.left.take(), node.right.take()) {
        (None, None) => {}
        (Some(child), None) | (None, Some(child)) => *link = Some(child),
        (Some(left), Some(right)) => {
            let mut right = Some(right);
            let (key, value) = remove_min(&mut right)
                .expect("a non-empty subtree has a minimum");

            trace!("spliced in-order successor");
            node.left = Some(left);
            node.right = right;
            let key_value = (replace(&mut node.key, key), replace(&mut node.value, value));
            Node::rebalance(&mut node);
            *link = Some(node);
            return Some(key_value);
        }
    }

    Some(node.into_key_value())
}

pub fn get<'a, K, V, C, Q: ?Sized>(mut link: &'a Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a Node<K, V>> where C: Compare<Q, K> {

    while let Some(node) = link {
        match cmp.compare(key, &node.key) {
            Equal => return Some(&**node),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

pub fn get_mut<'a, K, V, C, Q: ?Sized>(link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a mut Node<K, V>> where C: Compare<Q, K> {

    let node = link.as_deref_mut()?;

    match cmp.compare(key, &node.key) {
        Equal => Some(node),
        Less => get_mut(&mut node.left, cmp, key),
        Greater => get_mut(&mut node.right, cmp, key),
    }
}

pub fn min<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left() { node = left; }
    Some(node)
}

pub fn max<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right() { node = right; }
    Some(node)
}
