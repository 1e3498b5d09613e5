//! An ordered map based on an AVL tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::ops;
use super::node::{self, InOrder, Node};
use super::traverse::{Order, Traverse};

/// An ordered map based on an AVL tree.
///
/// Every insertion and removal rebalances the path it touched, so the tree's height stays within
/// roughly `1.44 * log2(len + 2)` and lookups, insertions and removals take logarithmic time.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    root: node::Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avltree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = avltree::Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Map { root: None, len: 0, cmp }
    }

    /// Checks if the map is empty.
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize { self.len }

    /// Returns the height of the map's tree, which is 0 for an empty map and 1 for a map with a
    /// single entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: avltree::Map<_, _> = (1..8).map(|k| (k, ())).collect();
    /// assert_eq!(map.height(), 3);
    /// ```
    pub fn height(&self) -> usize { node::height(&self.root) }

    /// Returns a reference to the map's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts an entry into the map, returning the previous value, if any, associated
    /// with the key.
    ///
    /// If the key is already present, its value is replaced and the key itself is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avltree::Map::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old_value = node::insert(&mut self.root, &self.cmp, key, value);
        if old_value.is_none() { self.len += 1; }
        old_value
    }

    /// Removes and returns the entry whose key is equal to the given key, returning
    /// `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avltree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove(&2), Some((2, "b")));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&2), None);
    /// assert_eq!(map.remove(&2), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        let key_value = node::remove(&mut self.root, &self.cmp, key);
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Removes and returns the entry with the least key whose value is equal to the given
    /// value, returning `None` if no entry has that value.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avltree::Map::new();
    ///
    /// map.insert(1, "odd");
    /// map.insert(2, "even");
    /// map.insert(3, "odd");
    ///
    /// assert_eq!(map.remove_value(&"odd"), Some((1, "odd")));
    /// assert_eq!(map.remove_value(&"odd"), Some((3, "odd")));
    /// assert_eq!(map.remove_value(&"odd"), None);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove_value(&mut self, value: &V) -> Option<(K, V)> where V: PartialEq {
        let key_value = node::remove_value(&mut self.root, value);
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Checks if the map contains the given key.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the map
    /// does not contain the key.
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).map(Node::value)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avltree::Map::new();
    /// map.insert(1, 10);
    ///
    /// if let Some(value) = map.get_mut(&1) { *value += 5; }
    /// assert_eq!(map[&1], 15);
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        node::get_mut(&mut self.root, &self.cmp, key).map(Node::value_mut)
    }

    /// Returns a reference to the least key whose value is equal to the given value, or `None`
    /// if no entry has that value.
    ///
    /// This searches every entry and so takes linear time.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: avltree::Map<_, _> = (0..10).map(|k| (k, k * k)).collect();
    ///
    /// assert_eq!(map.key_of(&49), Some(&7));
    /// assert_eq!(map.key_of(&0), Some(&0));
    /// assert_eq!(map.key_of(&50), None);
    /// ```
    pub fn key_of(&self, value: &V) -> Option<&K> where V: PartialEq {
        self.iter().find(|e| e.1 == value).map(|e| e.0)
    }

    /// Returns a reference to the map's minimum entry, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avltree::Map::new();
    /// assert_eq!(map.min(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.min(), Some((&1, &"a")));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> { node::min(&self.root).map(Node::key_value) }

    /// Returns a reference to the map's maximum entry, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avltree::Map::new();
    /// assert_eq!(map.max(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.max(), Some((&3, &"c")));
    /// ```
    pub fn max(&self) -> Option<(&K, &V)> { node::max(&self.root).map(Node::key_value) }

    /// Returns a reference to the map's least key, or `None` if the map is empty.
    pub fn min_key(&self) -> Option<&K> { node::min(&self.root).map(Node::key) }

    /// Returns a reference to the map's greatest key, or `None` if the map is empty.
    pub fn max_key(&self) -> Option<&K> { node::max(&self.root).map(Node::key) }

    /// Removes and returns the map's minimum entry, or `None` if the map is empty.
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        let key_value = node::remove_min(&mut self.root);
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Returns an iterator that consumes the map.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avltree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.into_iter();
    /// assert_eq!(it.next(), Some((1, "a")));
    /// assert_eq!(it.next_back(), Some((3, "c")));
    /// assert_eq!(it.next(), Some((2, "b")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter(InOrder::new(self.root.take(), self.len))
    }

    /// Returns an iterator over the map's entries with immutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    pub fn iter(&self) -> Iter<K, V> {
        Iter(InOrder::new(self.root.as_deref(), self.len))
    }

    /// Returns an iterator over the map's tree structure in the given order.
    ///
    /// Each [`Visit`](../traverse/struct.Visit.html) carries the node's depth, counting the root
    /// as level 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{Map, Order};
    ///
    /// let map: Map<_, _> = (1..4).map(|k| (k, k * 10)).collect();
    ///
    /// let levels: Vec<_> = map.traverse(Order::Level).map(|v| (*v.key, v.level)).collect();
    /// assert_eq!(levels, [(2, 0), (1, 1), (3, 1)]);
    ///
    /// let post: Vec<_> = map.traverse(Order::Post).map(|v| *v.key).collect();
    /// assert_eq!(post, [1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traverse<K, V> { Traverse::new(&self.root, order) }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &node::Link<K, V> { &self.root }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for Map<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map = Map::default();
        map.extend(it);
        map
    }
}

impl<K, V, C, Q: ?Sized> ops::Index<&Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;

    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { self.into_iter() }
}

impl<K, V, C> PartialEq for Map<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp.compares_eq(l.0, r.0) && l.1 == r.1
        })
    }
}

impl<K, V, C> Eq for Map<K, V, C> where V: Eq, C: Compare<K> {}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// Acquire through [`Map::into_iter`](struct.Map.html#method.into_iter) or the `IntoIterator`
/// trait.
#[derive(Clone)]
pub struct IntoIter<K, V>(InOrder<Box<Node<K, V>>>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> { self.0.next_back() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the map's entries with immutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the `IntoIterator` trait:
///
/// ```
/// let mut map = avltree::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in &map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct Iter<'a, K: 'a, V: 'a>(InOrder<&'a Node<K, V>>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

#[cfg(test)]
mod tests {
    use compare::{Compare, natural};
    use super::Map;

    #[test]
    fn reversed_comparator_stays_balanced() {
        let mut map = Map::with_cmp(natural().rev());
        for k in 0..100u32 { map.insert(k, k); }

        crate::node::assert_avl_tree(map.root(), map.cmp());
        assert_eq!(map.min_key(), Some(&99));
        assert_eq!(map.max_key(), Some(&0));
        assert!(map.height() <= 8);
    }

    #[test]
    fn remove_min_drains_in_order() {
        let mut map: Map<u32, u32> = [5, 3, 8, 1, 4].iter().map(|&k| (k, k)).collect();

        let mut drained = vec![];
        while let Some((k, _)) = map.remove_min() {
            crate::node::assert_avl_tree(map.root(), map.cmp());
            drained.push(k);
        }

        assert_eq!(drained, [1, 3, 4, 5, 8]);
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn debug_lists_entries_in_order() {
        let map: Map<_, _> = [(2, 'b'), (1, 'a')].iter().cloned().collect();
        assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b'}");
    }

    #[test]
    fn equality_ignores_shape() {
        let ascending: Map<_, _> = (0..16).map(|k| (k, k)).collect();
        let descending: Map<_, _> = (0..16).rev().map(|k| (k, k)).collect();
        assert!(ascending == descending);

        let mut other = descending.clone();
        other.insert(3, 4);
        assert!(ascending != other);
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn index_panics_on_missing_key() {
        let map: Map<u32, u32> = Map::new();
        let _value = map[&1];
    }
}
