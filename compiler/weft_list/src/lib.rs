//! Ordered, identity-keyed doubly-linked collection.
//!
//! Values live in an arena of slots and are addressed by a stable [`NodeId`].
//! A node is either *linked* (a member of the list, with predecessor and
//! successor links) or *detached* (allocated but not a member). Deleting a
//! node only detaches it, so its identity survives and it can be re-added.
//!
//! # Complexity
//!
//! - `add`, `delete`, `insert_before`, `insert_after`: O(1)
//! - `next`, `previous`, `first`, `last`: O(1)
//! - `find_next`, `find_previous`: O(k), k = distance to the match

mod error;
mod list;

pub use error::ListError;
pub use list::{Iter, NodeId, OrderedList};
