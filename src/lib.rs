//! A red-black multiset over an index arena with a shared sentinel.
//!
//! Nodes live in one [`Vec`] and point at each other by index. Slot 0 is
//! the sentinel: a permanently black node standing in for "no child" and
//! "no parent" alike, so every link in the tree is a valid index and the
//! balancing code never branches on a missing node. Duplicate keys are
//! kept as distinct elements.
mod arena;
mod balance;
mod iter;
mod tree;

use std::fmt;

pub use iter::Iter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Red = 0,
    Black = 1,
}

/// Index of the sentinel slot.
pub(crate) const NIL: usize = 0;

/// Handle to one element of a [`Tree`].
///
/// Handles are minted by [`Tree::insert`], [`Tree::find`], [`Tree::min`]
/// and [`Tree::max`], and stay valid until the node they name is erased.
/// Slots never move, so other insertions and erasures do not invalidate
/// a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    // None only in the sentinel and in vacant slots.
    pub(crate) key: Option<K>,
    pub(crate) color: Color,
    pub(crate) parent: usize,
    pub(crate) left: usize,
    pub(crate) right: usize,
}

/// An ordered multiset of keys, kept balanced as a red-black tree.
#[derive(Clone)]
pub struct Tree<K> {
    pub(crate) nodes: Vec<Node<K>>,
    pub(crate) free: Vec<usize>,
    pub(crate) root: usize,
    pub(crate) len: usize,
}

/// Returned by [`Tree::erase`] for a handle with no live node behind it:
/// out of range, already erased, or the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleHandle;

impl fmt::Display for StaleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("stale node handle: no live node behind it")
    }
}

impl std::error::Error for StaleHandle {}
