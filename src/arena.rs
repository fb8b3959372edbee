use crate::{Color, Node, Tree, NIL};

impl<K> Node<K> {
    pub(crate) fn sentinel() -> Self {
        Node {
            key: None,
            color: Color::Black,
            parent: NIL,
            left: NIL,
            right: NIL,
        }
    }
}

// Slot management. Erased slots go on the free list and are handed back
// out before the arena grows, so a long-lived tree reaches a steady state
// with no further allocation.
impl<K> Tree<K> {
    /// Claim a slot for a freshly inserted node: red, both children at
    /// the sentinel. The caller links it under `parent`.
    pub(crate) fn claim(&mut self, key: K, parent: usize) -> usize {
        let node = Node {
            key: Some(key),
            color: Color::Red,
            parent,
            left: NIL,
            right: NIL,
        };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Hand a slot back to the free list, taking its key out. The node
    /// must already be unlinked from the tree.
    pub(crate) fn release(&mut self, idx: usize) -> K {
        debug_assert_ne!(idx, NIL);
        let key = self.nodes[idx].key.take().expect("released a vacant slot");
        self.free.push(idx);
        key
    }

    #[inline(always)]
    pub(crate) fn is_vacant(&self, idx: usize) -> bool {
        self.nodes[idx].key.is_none()
    }

    /// Key of a live node. The sentinel's key is never read.
    #[inline(always)]
    pub(crate) fn key(&self, idx: usize) -> &K {
        self.nodes[idx].key.as_ref().expect("read the key of a vacant slot")
    }

    #[inline(always)]
    pub(crate) fn color(&self, idx: usize) -> Color {
        self.nodes[idx].color
    }

    #[inline(always)]
    pub(crate) fn is_red(&self, idx: usize) -> bool {
        self.nodes[idx].color == Color::Red
    }

    #[inline(always)]
    pub(crate) fn is_black(&self, idx: usize) -> bool {
        self.nodes[idx].color == Color::Black
    }

    #[inline(always)]
    pub(crate) fn set_color(&mut self, idx: usize, color: Color) {
        self.nodes[idx].color = color;
    }

    #[inline(always)]
    pub(crate) fn parent(&self, idx: usize) -> usize {
        self.nodes[idx].parent
    }

    #[inline(always)]
    pub(crate) fn set_parent(&mut self, idx: usize, parent: usize) {
        self.nodes[idx].parent = parent;
    }

    #[inline(always)]
    pub(crate) fn left(&self, idx: usize) -> usize {
        self.nodes[idx].left
    }

    #[inline(always)]
    pub(crate) fn set_left(&mut self, idx: usize, left: usize) {
        self.nodes[idx].left = left;
    }

    #[inline(always)]
    pub(crate) fn right(&self, idx: usize) -> usize {
        self.nodes[idx].right
    }

    #[inline(always)]
    pub(crate) fn set_right(&mut self, idx: usize, right: usize) {
        self.nodes[idx].right = right;
    }
}
