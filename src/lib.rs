//! An ordered map based on an AVL tree.
//!
//! [`Map`] keeps its keys sorted according to a comparator from the [`compare`] crate and keeps
//! its tree height-balanced after every insertion and removal. Besides the usual lookups it can
//! search by value and walk its tree in pre-, in-, post- or level-order, reporting the depth of
//! every node along the way.
//!
//! ```
//! use avltree::{Map, Order};
//!
//! let mut map = Map::new();
//! for k in 0..10 { map.insert(k, k * k); }
//!
//! assert_eq!(map.height(), 4);
//! assert_eq!(map.get(&7), Some(&49));
//! assert_eq!(map.key_of(&81), Some(&9));
//!
//! for visit in map.traverse(Order::Level) {
//!     println!("{}", visit);
//! }
//! ```

#![deny(missing_docs)]

pub mod balance;
pub mod map;
mod node;
pub mod traverse;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;
#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use map::Map;
pub use traverse::{Order, ParseOrderError, Visit};
