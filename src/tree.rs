use std::cmp::Ordering::*;
use std::fmt;

use crate::{Color, Node, NodeId, StaleHandle, Tree, NIL};

impl<K> Tree<K> {
    /// Creates an empty multiset. The only allocation is the sentinel's
    /// slot.
    pub fn new() -> Self {
        Tree {
            nodes: vec![Node::sentinel()],
            free: Vec::new(),
            root: NIL,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Key behind a handle, or `None` if the handle is stale.
    pub fn get(&self, id: NodeId) -> Option<&K> {
        self.nodes.get(id.0).and_then(|node| node.key.as_ref())
    }

    /// Handle of the smallest element, `None` on an empty tree.
    pub fn min(&self) -> Option<NodeId> {
        if self.root == NIL {
            return None;
        }
        Some(NodeId(self.minimum(self.root)))
    }

    /// Handle of the largest element, `None` on an empty tree.
    pub fn max(&self) -> Option<NodeId> {
        if self.root == NIL {
            return None;
        }
        Some(NodeId(self.maximum(self.root)))
    }

    /// Erases every element, releasing the nodes child-before-parent, and
    /// keeps the arena for reuse by later insertions.
    pub fn clear(&mut self) {
        let mut cursor = self.root;
        while cursor != NIL {
            let left = self.left(cursor);
            if left != NIL {
                cursor = left;
                continue;
            }
            let right = self.right(cursor);
            if right != NIL {
                cursor = right;
                continue;
            }
            // A leaf by now; detach it from its parent and climb back up.
            let parent = self.parent(cursor);
            if parent != NIL {
                if self.left(parent) == cursor {
                    self.set_left(parent, NIL);
                } else {
                    self.set_right(parent, NIL);
                }
            }
            self.release(cursor);
            cursor = parent;
        }
        self.root = NIL;
        self.len = 0;
    }

    /// Leftmost node of the subtree at `idx` (`idx` itself when it has no
    /// left child, `NIL` for the sentinel).
    pub(crate) fn minimum(&self, mut idx: usize) -> usize {
        while self.left(idx) != NIL {
            idx = self.left(idx);
        }
        idx
    }

    pub(crate) fn maximum(&self, mut idx: usize) -> usize {
        while self.right(idx) != NIL {
            idx = self.right(idx);
        }
        idx
    }
}

impl<K: Ord> Tree<K> {
    /// Inserts `key` as a new element and returns its handle. Equal keys
    /// are never rejected or merged; a duplicate descends to the right of
    /// its twin, so the relative order of equal keys is not the insertion
    /// order.
    pub fn insert(&mut self, key: K) -> NodeId {
        let mut parent = NIL;
        let mut cursor = self.root;
        while cursor != NIL {
            parent = cursor;
            cursor = if key < *self.key(cursor) {
                self.left(cursor)
            } else {
                self.right(cursor)
            };
        }

        let z = self.claim(key, parent);
        if parent == NIL {
            self.root = z;
        } else if *self.key(z) < *self.key(parent) {
            self.set_left(parent, z);
        } else {
            self.set_right(parent, z);
        }
        self.insert_fixup(z);
        self.len += 1;
        NodeId(z)
    }

    /// Some element with this key, `None` if there is none. With
    /// duplicates present this is whichever copy the descent from the
    /// root meets first, not necessarily the oldest.
    pub fn find(&self, key: &K) -> Option<NodeId> {
        let mut cursor = self.root;
        while cursor != NIL {
            match key.cmp(self.key(cursor)) {
                Equal => return Some(NodeId(cursor)),
                Less => cursor = self.left(cursor),
                Greater => cursor = self.right(cursor),
            }
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes exactly the element behind `id` (by identity, not by key
    /// equality) and returns its key. A handle that no longer names a
    /// live node is reported as [`StaleHandle`] and the tree is left
    /// untouched; every occupied slot belongs to this tree, so occupancy
    /// is the membership check.
    pub fn erase(&mut self, id: NodeId) -> Result<K, StaleHandle> {
        let z = id.0;
        if z == NIL || z >= self.nodes.len() || self.is_vacant(z) {
            return Err(StaleHandle);
        }

        // The node leaving the tree structure and its color: z itself in
        // the one-child cases, z's successor in the two-child case. x is
        // the node taking the vacated position, possibly the sentinel.
        let mut removed_color = self.color(z);
        let x;
        if self.left(z) == NIL {
            x = self.right(z);
            self.transplant(z, x);
        } else if self.right(z) == NIL {
            x = self.left(z);
            self.transplant(z, x);
        } else {
            // Two children: the successor (leftmost under z's right
            // subtree, no left child by construction) takes over z's
            // position and z's color.
            let successor = self.minimum(self.right(z));
            removed_color = self.color(successor);
            x = self.right(successor);
            if self.parent(successor) == z {
                // x keeps its parent, but when x is the sentinel the
                // fixup still needs this link written.
                self.set_parent(x, successor);
            } else {
                self.transplant(successor, x);
                let z_right = self.right(z);
                self.set_right(successor, z_right);
                self.set_parent(z_right, successor);
            }
            self.transplant(z, successor);
            let z_left = self.left(z);
            self.set_left(successor, z_left);
            self.set_parent(z_left, successor);
            let z_color = self.color(z);
            self.set_color(successor, z_color);
        }

        if removed_color == Color::Black {
            // A black node left the structure; some path is now one
            // black short until the fixup repays it.
            self.erase_fixup(x);
        }
        self.len -= 1;
        Ok(self.release(z))
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
