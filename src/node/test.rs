use compare::{Compare, natural};
use quickcheck::{Arbitrary, Gen, TestResult, quickcheck};
use super::{Link, Node, height, insert, remove, remove_value};
use crate::balance::BalanceState;
use crate::Map;

/// An operation on a `Map`.
#[derive(Clone, Debug)]
enum Op<K> where K: Clone + Ord {
    /// Insert a key into the map.
    Insert(K),
    /// Remove the key at index `n % map.len()` from the map.
    Remove(usize),
    /// Remove an entry by its value.
    RemoveValue(u8),
}

impl<K> Arbitrary for Op<K> where K: Arbitrary + Ord {
    fn arbitrary(gen: &mut Gen) -> Op<K> {
        match u8::arbitrary(gen) % 3 {
            0 => Op::Remove(Arbitrary::arbitrary(gen)),
            1 => Op::RemoveValue(Arbitrary::arbitrary(gen)),
            _ => Op::Insert(Arbitrary::arbitrary(gen)),
        }
    }
}

impl<K> Op<K> where K: Clone + Ord {
    /// Perform the operation on the given map. Values are derived from the insertion count so
    /// that several keys share a value.
    fn exec(self, map: &mut Map<K, u8>, inserted: &mut u8) {
        match self {
            Op::Insert(key) => {
                *inserted = inserted.wrapping_add(1);
                map.insert(key, *inserted % 8);
            }
            Op::Remove(index) => if !map.is_empty() {
                let key = map.iter().nth(index % map.len()).map(|e| e.0.clone());
                if let Some(key) = key { assert!(map.remove(&key).is_some()); }
            },
            Op::RemoveValue(value) => { map.remove_value(&(value % 8)); }
        }
    }
}

/// Asserts that the tree below `link` is ordered by `cmp`, that every cached height is correct
/// and that no node is out of balance.
pub fn assert_avl_tree<K, V, C>(link: &Link<K, V>, cmp: &C) where C: Compare<K> {
    fn check<'a, K, V, C>(link: &'a Link<K, V>, cmp: &C, lower: Option<&'a K>,
                          upper: Option<&'a K>) -> usize where C: Compare<K> {
        let node = match link {
            None => return 0,
            Some(node) => node,
        };

        if let Some(lower) = lower { assert!(cmp.compares_lt(lower, &node.key)); }
        if let Some(upper) = upper { assert!(cmp.compares_gt(upper, &node.key)); }

        let left = check(&node.left, cmp, lower, Some(&node.key));
        let right = check(&node.right, cmp, Some(&node.key), upper);

        assert_eq!(node.height, 1 + left.max(right));
        assert!(left.abs_diff(right) <= 1);
        assert_eq!(node.balance_state(), BalanceState::Balanced);
        node.height
    }

    check(link, cmp, None, None);
}

fn keys<K: Clone, V>(link: &Link<K, V>) -> Vec<K> {
    super::InOrder::new(link.as_deref(), usize::MAX).map(|e| e.0.clone()).collect()
}

fn chain<I: IntoIterator<Item=u32>>(keys: I) -> Link<u32, u32> {
    let mut root = None;
    for key in keys { insert(&mut root, &natural(), key, key * 10); }
    root
}

#[test]
fn test_avl() {
    fn check(ops: Vec<Op<u16>>) -> TestResult {
        let mut map = Map::new();
        let mut inserted = 0;

        for op in ops {
            op.exec(&mut map, &mut inserted);
            assert_avl_tree(map.root(), map.cmp());
            assert_eq!(map.iter().count(), map.len());
        }

        TestResult::passed()
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn rotate_left_preserves_order() {
    // 1 -> 2 -> 3 built by hand, bypassing rebalancing.
    let mut node = Box::new(Node::new(1, 'a'));
    let mut right = Box::new(Node::new(2, 'b'));
    right.right = Some(Box::new(Node::new(3, 'c')));
    right.update_height();
    node.right = Some(right);
    node.update_height();
    assert_eq!(node.balance_state(), BalanceState::RightHeavy);

    Node::rotate_left(&mut node);

    assert_eq!(node.key, 2);
    assert_eq!(node.height, 2);
    assert_eq!(node.left().map(|n| n.key), Some(1));
    assert_eq!(node.right().map(|n| n.key), Some(3));
    assert_eq!(node.left().map(|n| n.height), Some(1));

    let link = Some(node);
    assert_avl_tree(&link, &natural());
    assert_eq!(keys(&link), [1, 2, 3]);
}

#[test]
fn rotate_right_moves_inner_subtree() {
    //       4             2
    //     2   5   ->    1   4
    //   1   3             3   5
    let mut node = Box::new(Node::new(4, ()));
    let mut left = Box::new(Node::new(2, ()));
    left.left = Some(Box::new(Node::new(1, ())));
    left.right = Some(Box::new(Node::new(3, ())));
    left.update_height();
    node.left = Some(left);
    node.right = Some(Box::new(Node::new(5, ())));
    node.update_height();

    Node::rotate_right(&mut node);

    assert_eq!(node.key, 2);
    let right = node.right().expect("rotated root has a right child");
    assert_eq!(right.key, 4);
    assert_eq!(right.left().map(|n| n.key), Some(3));
    assert_eq!(right.height, 2);
    assert_eq!(node.height, 3);
    assert_eq!(keys(&Some(node)), [1, 2, 3, 4, 5]);
}

#[test]
#[should_panic(expected = "left rotation requires a right child")]
fn rotate_left_without_right_child() {
    let mut node = Box::new(Node::new(1, ()));
    Node::rotate_left(&mut node);
}

#[test]
fn zig_zag_insertions_rebalance() {
    for order in [[3, 1, 2], [1, 3, 2]] {
        let root = chain(order);
        assert_avl_tree(&root, &natural());
        assert_eq!(height(&root), 2);
        assert_eq!(root.as_ref().map(|n| n.key), Some(2));
    }
}

#[test]
fn equal_key_replaces_value_only() {
    let mut root = chain(1..4);
    assert_eq!(insert(&mut root, &natural(), 2, 99), Some(20));
    assert_eq!(height(&root), 2);
    assert_eq!(super::get(&root, &natural(), &2).map(|n| n.value), Some(99));
}

#[test]
fn two_child_removal_moves_successor_value() {
    let mut root = chain([4, 2, 6, 1, 3, 5, 7]);

    assert_eq!(remove(&mut root, &natural(), &4), Some((4, 40)));
    assert_avl_tree(&root, &natural());

    let new_root = root.as_ref().expect("tree is not empty");
    assert_eq!((new_root.key, new_root.value), (5, 50));
    for key in [1, 2, 3, 5, 6, 7] {
        assert_eq!(super::get(&root, &natural(), &key).map(|n| n.value), Some(key * 10));
    }
}

#[test]
fn remove_value_searches_left_subtrees() {
    let mut root = chain(1..8);
    // 1 sits in the root's left subtree, which also has a right child.
    assert_eq!(remove_value(&mut root, &10), Some((1, 10)));
    assert_eq!(remove_value(&mut root, &10), None);
    assert_avl_tree(&root, &natural());
    assert_eq!(keys(&root), [2, 3, 4, 5, 6, 7]);
}

#[test]
fn removal_rebalances_ancestors() {
    let mut root = chain(1..13);
    for key in [1, 3, 2, 5] {
        assert!(remove(&mut root, &natural(), &key).is_some());
        assert_avl_tree(&root, &natural());
    }
    assert_eq!(keys(&root), [4, 6, 7, 8, 9, 10, 11, 12]);
}
