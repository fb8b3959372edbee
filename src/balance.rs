//! The balancing core: rotations, the insertion fixup and the erasure
//! fixup. Everything here manipulates links and colors only; key order is
//! the caller's concern. In the case diagrams an uppercase node is black
//! and a lowercase node is red.
use crate::{Color, Tree, NIL};

impl<K> Tree<K> {
    /// Left rotation at `x`: `x`'s right child `y` takes `x`'s place and
    /// `x` becomes `y`'s left child. `y`'s former left subtree crosses
    /// over to become `x`'s right subtree.
    ///
    /// ```text
    ///      x              y
    ///     / \            / \
    ///    a   y    -->   x   c
    ///       / \        / \
    ///      b   c      a   b
    /// ```
    ///
    /// Order is preserved; colors are left for the caller to repair.
    pub(crate) fn rotate_left(&mut self, x: usize) {
        let y = self.right(x);
        let inner = self.left(y);
        self.set_right(x, inner);
        if inner != NIL {
            self.set_parent(inner, x);
        }
        let parent = self.parent(x);
        self.set_parent(y, parent);
        if parent == NIL {
            // x was the root; the sentinel stands for "no parent" too.
            self.root = y;
        } else if self.left(parent) == x {
            self.set_left(parent, y);
        } else {
            self.set_right(parent, y);
        }
        self.set_left(y, x);
        self.set_parent(x, y);
    }

    /// Mirror image of [`Tree::rotate_left`].
    pub(crate) fn rotate_right(&mut self, x: usize) {
        let y = self.left(x);
        let inner = self.right(y);
        self.set_left(x, inner);
        if inner != NIL {
            self.set_parent(inner, x);
        }
        let parent = self.parent(x);
        self.set_parent(y, parent);
        if parent == NIL {
            self.root = y;
        } else if self.right(parent) == x {
            self.set_right(parent, y);
        } else {
            self.set_left(parent, y);
        }
        self.set_right(y, x);
        self.set_parent(x, y);
    }

    /// Restore the red-black invariants after linking the red node `z`
    /// into the tree. The only possible violation on entry is a red `z`
    /// under a red parent, and the loop pushes or rotates it away.
    pub(crate) fn insert_fixup(&mut self, mut z: usize) {
        // Loop invariant: z is red.
        while self.is_red(self.parent(z)) {
            let parent = self.parent(z);
            // A red parent cannot be the root, so the grandparent is a
            // real (black) node.
            let gparent = self.parent(parent);
            if parent == self.left(gparent) {
                let uncle = self.right(gparent);
                if self.is_red(uncle) {
                    // Case 1 - the uncle is red: color flips only.
                    //
                    //       G            g
                    //      / \          / \
                    //     p   u  -->   P   U
                    //    /            /
                    //   z            z
                    //
                    // g may itself sit under a red parent, so continue
                    // the loop from there.
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(gparent, Color::Red);
                    z = gparent;
                    continue;
                }
                if z == self.right(parent) {
                    // Case 2 - black uncle, z is an inner child: left
                    // rotate at the parent to fall through to Case 3.
                    //
                    //      G             G
                    //     / \           / \
                    //    p   U  -->    z   U
                    //     \           /
                    //      z         p
                    z = parent;
                    self.rotate_left(z);
                }
                // Case 3 - black uncle, z is an outer child: color swap
                // and right rotate at the grandparent, then we are done.
                //
                //        G           P
                //       / \         / \
                //      p   U  -->  z   g
                //     /                 \
                //    z                   U
                let parent = self.parent(z);
                let gparent = self.parent(parent);
                self.set_color(parent, Color::Black);
                self.set_color(gparent, Color::Red);
                self.rotate_right(gparent);
            } else {
                let uncle = self.left(gparent);
                if self.is_red(uncle) {
                    // Case 1 - color flips.
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(gparent, Color::Red);
                    z = gparent;
                    continue;
                }
                if z == self.left(parent) {
                    // Case 2 - right rotate at the parent.
                    z = parent;
                    self.rotate_right(z);
                }
                // Case 3 - color swap and left rotate at the grandparent.
                let parent = self.parent(z);
                let gparent = self.parent(parent);
                self.set_color(parent, Color::Black);
                self.set_color(gparent, Color::Red);
                self.rotate_left(gparent);
            }
        }
        // Case 1 can bubble the violation all the way up and leave a red
        // root behind.
        self.set_color(self.root, Color::Black);
    }

    /// Replace the subtree rooted at `u` with the one rooted at `v` in
    /// `u`'s parent. `v`'s parent pointer is written even when `v` is the
    /// sentinel: the erasure fixup starts from `v` and climbs through
    /// exactly that link.
    pub(crate) fn transplant(&mut self, u: usize, v: usize) {
        let parent = self.parent(u);
        if parent == NIL {
            self.root = v;
        } else if self.left(parent) == u {
            self.set_left(parent, v);
        } else {
            self.set_right(parent, v);
        }
        self.set_parent(v, parent);
    }

    /// Restore the red-black invariants after a black node was unlinked.
    /// `x` marks the position carrying the missing black: every path
    /// through it is one black node short. `x` may be the sentinel, whose
    /// parent pointer the preceding transplant kept current.
    pub(crate) fn erase_fixup(&mut self, mut x: usize) {
        while x != self.root && self.is_black(x) {
            let parent = self.parent(x);
            if x == self.left(parent) {
                let mut sibling = self.right(parent);
                if self.is_red(sibling) {
                    // Case 1 - red sibling: rotate it over x's side. The
                    // new sibling is one of s's black children, so the
                    // following cases apply.
                    //
                    //     P               S
                    //    / \             / \
                    //   X   s    -->    p   D
                    //      / \         / \
                    //     C   D       X   C
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_left(parent);
                    sibling = self.right(parent);
                }
                if self.is_black(self.left(sibling)) && self.is_black(self.right(sibling)) {
                    // Case 2 - black sibling, both its children black:
                    // pull the missing black up to the parent.
                    //
                    //    (p)           (p)
                    //    / \           / \
                    //   X   S    -->  X   s
                    //      / \           / \
                    //     C   D         C   D
                    //
                    // If p is red the loop exits and the final recolor
                    // below absorbs the deficiency there.
                    self.set_color(sibling, Color::Red);
                    x = parent;
                    continue;
                }
                if self.is_black(self.right(sibling)) {
                    // Case 3 - near child red, far child black: rotate
                    // away from x so the red ends up far, then Case 4
                    // finishes.
                    //
                    //   (p)           (p)
                    //   / \           / \
                    //  X   S    -->  X   C
                    //     / \             \
                    //    c   D             s
                    //                       \
                    //                        D
                    let near = self.left(sibling);
                    self.set_color(near, Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate_right(sibling);
                    sibling = self.right(parent);
                }
                // Case 4 - far child red: rotate at the parent. The
                // sibling takes the parent's color, parent and far child
                // go black, and the missing black is paid off.
                //
                //      (p)             (s)
                //      / \             / \
                //     X   S     -->   P   D
                //        / \         / \
                //      (c)  d       X  (c)
                let parent_color = self.color(parent);
                self.set_color(sibling, parent_color);
                self.set_color(parent, Color::Black);
                let far = self.right(sibling);
                self.set_color(far, Color::Black);
                self.rotate_left(parent);
                x = self.root;
            } else {
                let mut sibling = self.left(parent);
                if self.is_red(sibling) {
                    // Case 1 - right rotate at the parent.
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_right(parent);
                    sibling = self.left(parent);
                }
                if self.is_black(self.left(sibling)) && self.is_black(self.right(sibling)) {
                    // Case 2 - pull the missing black up.
                    self.set_color(sibling, Color::Red);
                    x = parent;
                    continue;
                }
                if self.is_black(self.left(sibling)) {
                    // Case 3 - left rotate at the sibling.
                    let near = self.right(sibling);
                    self.set_color(near, Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate_left(sibling);
                    sibling = self.left(parent);
                }
                // Case 4 - right rotate at the parent.
                let parent_color = self.color(parent);
                self.set_color(sibling, parent_color);
                self.set_color(parent, Color::Black);
                let far = self.left(sibling);
                self.set_color(far, Color::Black);
                self.rotate_right(parent);
                x = self.root;
            }
        }
        // Covers both exits: x reached the root, or Case 2 stopped under
        // a red parent. Writing black to the sentinel is a no-op.
        self.set_color(x, Color::Black);
    }
}
