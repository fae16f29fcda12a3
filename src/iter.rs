//! Lazy traversals over a [`Tree`](crate::Tree).
//!
//! Each iterator keeps an explicit stack of the nodes it still has to visit instead of
//! recursing, so walking a degenerate tree (e.g. one built from sorted keys) uses heap memory
//! proportional to its height rather than call stack. Every node is visited exactly once.

use std::iter::FusedIterator;

use crate::tree::Node;

/// Keys in left, self, right order. Created by [`Tree::inorder`](crate::Tree::inorder).
#[derive(Debug, Clone)]
pub struct Inorder<'a> {
    /// Nodes whose left subtree has been (or is being) visited but which haven't been yielded.
    stack: Vec<&'a Node>,
    /// The next subtree to descend into.
    current: Option<&'a Node>,
}

impl<'a> Inorder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl Iterator for Inorder<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left();
        }

        let node = self.stack.pop()?;
        self.current = node.right();
        Some(node.key)
    }
}

impl FusedIterator for Inorder<'_> {}

/// Keys in self, left, right order. Created by [`Tree::preorder`](crate::Tree::preorder).
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Preorder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl Iterator for Preorder<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key)
    }
}

impl FusedIterator for Preorder<'_> {}

/// Keys in left, right, self order. Created by [`Tree::postorder`](crate::Tree::postorder).
#[derive(Debug, Clone)]
pub struct Postorder<'a> {
    /// Each node is pushed twice: once to expand its children and once, flagged `true`, to be
    /// yielded after them.
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> Postorder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl Iterator for Postorder<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.key);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl FusedIterator for Postorder<'_> {}

/// Every root-to-leaf path, left to right. Created by [`Tree::paths`](crate::Tree::paths).
///
/// One buffer holds the path from the root to the node being visited. Each pending node
/// remembers its depth, and the buffer is cut back to that depth before the node is appended,
/// so siblings share their common prefix.
#[derive(Debug, Clone)]
pub struct Paths<'a> {
    stack: Vec<(&'a Node, usize)>,
    path: Vec<i32>,
}

impl<'a> Paths<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, 0)).collect(),
            path: Vec::new(),
        }
    }
}

impl Iterator for Paths<'_> {
    type Item = Vec<i32>;

    fn next(&mut self) -> Option<Vec<i32>> {
        loop {
            let (node, depth) = self.stack.pop()?;
            self.path.truncate(depth);
            self.path.push(node.key);

            if node.is_leaf() {
                return Some(self.path.clone());
            }

            self.stack.extend(node.right().map(|n| (n, depth + 1)));
            self.stack.extend(node.left().map(|n| (n, depth + 1)));
        }
    }
}

impl FusedIterator for Paths<'_> {}
