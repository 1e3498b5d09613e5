//! Walks over a map's tree structure in the four canonical orders.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use super::node;

/// The order in which [`Map::traverse`](../map/struct.Map.html#method.traverse) visits the
/// map's nodes.
///
/// Orders parse from `pre`, `in`, `post` or `level`, in any case and optionally suffixed with
/// `order`.
///
/// # Examples
///
/// ```
/// use avltree::Order;
///
/// assert_eq!("level".parse(), Ok(Order::Level));
/// assert_eq!("InOrder".parse(), Ok(Order::In));
/// assert!("sideways".parse::<Order>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Each node before its left subtree, then its right subtree.
    Pre,
    /// Each node between its left and right subtrees, i.e. ascending key order.
    In,
    /// Each node after both of its subtrees.
    Post,
    /// Breadth-first, top to bottom and left to right within each level.
    Level,
}

impl Order {
    /// All orders, in declaration order.
    pub const ALL: [Order; 4] = [Order::Pre, Order::In, Order::Post, Order::Level];

    fn name(self) -> &'static str {
        match self {
            Order::Pre => "pre",
            Order::In => "in",
            Order::Post => "post",
            Order::Level => "level",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

/// The error returned when parsing an unrecognized [`Order`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown traversal order `{0}` (expected one of: pre, in, post, level)")]
pub struct ParseOrderError(String);

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, ParseOrderError> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_suffix("order").unwrap_or(&lower);
        let name = name.strip_suffix('-').unwrap_or(name);

        Order::ALL.iter().copied().find(|order| order.name() == name)
            .ok_or_else(|| ParseOrderError(s.to_owned()))
    }
}

/// A single node yielded by a traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit<'a, K: 'a, V: 'a> {
    /// The node's key.
    pub key: &'a K,
    /// The node's value.
    pub value: &'a V,
    /// The node's depth, counting the root as level 0.
    pub level: usize,
}

impl<'a, K, V> fmt::Display for Visit<'a, K, V> where K: fmt::Display, V: fmt::Display {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Level {}: {} - {}", self.level, self.key, self.value)
    }
}

/// An iterator over the map's nodes in a given [`Order`].
///
/// Acquire through [`Map::traverse`](../map/struct.Map.html#method.traverse).
pub struct Traverse<'a, K: 'a, V: 'a>(node::Traverse<'a, K, V>);

impl<'a, K, V> Traverse<'a, K, V> {
    pub(crate) fn new(root: &'a node::Link<K, V>, order: Order) -> Self {
        Traverse(match order {
            Order::Pre => node::Traverse::pre(root),
            Order::In => node::Traverse::in_order(root),
            Order::Post => node::Traverse::post(root),
            Order::Level => node::Traverse::level(root),
        })
    }
}

impl<'a, K, V> Iterator for Traverse<'a, K, V> {
    type Item = Visit<'a, K, V>;

    fn next(&mut self) -> Option<Visit<'a, K, V>> {
        self.0.next().map(|(node, level)| {
            let (key, value) = node.key_value();
            Visit { key, value, level }
        })
    }
}
