//! An unbalanced BST of `i32` keys. Nodes are owned exclusively through `Box`es so the tree
//! can't contain sharing or cycles.
//!
//! # Examples
//!
//! ```
//! use binary_trees::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.lookup(5));
//!
//! for key in [5, 3, 8, 1, 4] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.lookup(4));
//! assert_eq!(tree.size(), 5);
//! assert_eq!(tree.max_depth(), 3);
//! assert_eq!(tree.inorder().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//! assert!(tree.is_bst_linear());
//!
//! // Mirroring flips every node's children so the keys come out descending.
//! tree.mirror();
//! assert_eq!(tree.inorder().collect::<Vec<_>>(), [8, 5, 4, 3, 1]);
//! assert!(!tree.is_bst_linear());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;

use crate::count;
use crate::error::TreeError;
use crate::iter::{Inorder, Paths, Postorder, Preorder};

/// An owning, possibly empty, reference to a subtree.
pub(crate) type Link = Option<Box<Node>>;

/// Line drawn for the root and for left children.
const LEFT_BRANCH: &str = "└── ";
/// Line drawn for right children.
const RIGHT_BRANCH: &str = "┌── ";
/// Continues an ancestor's branch line past a subtree.
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// What [`Tree::pretty_lines`] produces for an empty tree.
const EMPTY_TREE: &str = "Empty tree";

/// An unbalanced Binary Search Tree of `i32` keys.
///
/// Duplicate keys are allowed and are stored in the left subtree of an equal key.
#[derive(Default)]
pub struct Tree {
    root: Link,
}

impl Drop for Tree {
    // Boxes drop recursively by default which would overflow the stack on a degenerate tree.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for Tree {
    // Rebuilt in postorder from an explicit stack so cloning a degenerate tree can't overflow.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node>> = Vec::new();
        let mut stack: Vec<(&Node, bool)> = self.root().into_iter().map(|n| (n, false)).collect();
        while let Some((node, expanded)) = stack.pop() {
            if !expanded {
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
                continue;
            }

            // Both children were finished before this node, the right one last.
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                key: node.key,
                left,
                right,
            }));
        }

        Self { root: built.pop() }
    }
}

impl fmt::Debug for Tree {
    // Only the keys, in preorder. Nesting the nodes would recurse once per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("preorder", &self.preorder().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.pretty_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.same_tree(other)
    }
}

impl Eq for Tree {}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = Inorder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` as a new leaf. Keys less than or equal to a node's key go to its left, so
    /// duplicates are kept rather than overwritten.
    ///
    /// The descent is a loop rather than recursion so inserting into a degenerate tree can't
    /// exhaust the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_trees::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(tree.preorder().collect::<Vec<_>>(), [2, 2]);
    /// ```
    pub fn insert(&mut self, key: i32) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key <= node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(key)));
    }

    /// Whether any node holds `target`.
    pub fn lookup(&self, target: i32) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            current = match target.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// The number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.root().map_or(0, Node::size)
    }

    /// The number of nodes on the longest root-to-leaf path. An empty tree has a depth of 0.
    pub fn max_depth(&self) -> usize {
        self.root().map_or(0, Node::max_depth)
    }

    /// The key of the leftmost node, which is the smallest key of a valid BST.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] when there are no nodes.
    pub fn min_value(&self) -> Result<i32, TreeError> {
        self.root().map(Node::min_key).ok_or(TreeError::EmptyTree)
    }

    /// The key of the rightmost node, which is the largest key of a valid BST.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] when there are no nodes.
    pub fn max_value(&self) -> Result<i32, TreeError> {
        self.root().map(Node::max_key).ok_or(TreeError::EmptyTree)
    }

    /// Keys in left, self, right order. For a valid BST they come out non-decreasing.
    pub fn inorder(&self) -> Inorder<'_> {
        Inorder::new(self.root())
    }

    /// Keys in self, left, right order.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder::new(self.root())
    }

    /// Keys in left, right, self order.
    pub fn postorder(&self) -> Postorder<'_> {
        Postorder::new(self.root())
    }

    /// Every root-to-leaf path, left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_trees::Tree;
    ///
    /// let tree: Tree = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(
    ///     tree.paths().collect::<Vec<_>>(),
    ///     [vec![5, 3, 1], vec![5, 3, 4], vec![5, 8]],
    /// );
    /// ```
    pub fn paths(&self) -> Paths<'_> {
        Paths::new(self.root())
    }

    /// Whether the keys along some root-to-leaf path add up to `sum`. An empty tree has no paths
    /// so this is always `false` for it.
    pub fn has_path_sum(&self, sum: i64) -> bool {
        self.root().map_or(false, |n| n.has_path_sum(sum))
    }

    /// Writes each root-to-leaf path on its own line with the keys separated by spaces.
    pub fn print_paths<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        for path in self.paths() {
            let line = path
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Renders the tree sideways: the right subtree above each node and the left subtree below
    /// it, with branch lines showing the ancestry.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_trees::Tree;
    ///
    /// let tree: Tree = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.pretty_lines(), ["│   ┌── 8", "└── 5", "    └── 3"]);
    /// assert_eq!(Tree::new().pretty_lines(), ["Empty tree"]);
    /// ```
    pub fn pretty_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match self.root() {
            Some(root) => root.pretty_lines("", true, &mut lines),
            None => lines.push(EMPTY_TREE.to_string()),
        }
        lines
    }

    /// Writes [`Tree::pretty_lines`] to `out`, one per line.
    pub fn pretty_print<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        for line in self.pretty_lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Swaps the children of every node, turning the tree into its mirror image.
    ///
    /// ```text
    ///       4              4
    ///      / \            / \
    ///     2   5   ->     5   2
    ///    / \                / \
    ///   1   3              3   1
    /// ```
    pub fn mirror(&mut self) {
        tracing::trace!("mirroring tree");
        if let Some(root) = self.root_mut() {
            root.mirror();
        }
    }

    /// Gives every node a new left child holding a copy of its key. The node's original left
    /// subtree hangs off the copy's left.
    ///
    /// ```text
    ///                      2
    ///     2               / \
    ///    / \     ->      2   3
    ///   1   3           /   /
    ///                  1   3
    ///                 /
    ///                1
    /// ```
    ///
    /// Because duplicates belong on the left, doubling a valid BST yields a valid BST.
    pub fn double_tree(&mut self) {
        tracing::trace!("doubling tree");
        if let Some(root) = self.root_mut() {
            root.double();
        }
    }

    /// Whether `other` has exactly the same shape and keys as this tree.
    ///
    /// Both trees are walked in parallel from an explicit stack of node pairs, so comparing deep
    /// trees can't overflow.
    pub fn same_tree(&self, other: &Tree) -> bool {
        let mut pairs = vec![(self.root(), other.root())];
        while let Some(pair) = pairs.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.key == b.key => {
                    pairs.push((a.right(), b.right()));
                    pairs.push((a.left(), b.left()));
                }
                _ => return false,
            }
        }
        true
    }

    /// Checks the BST invariant by comparing each node against the largest key of its left
    /// subtree and the smallest key of its right subtree. Those extremes are recomputed at every
    /// node, so this takes `O(n * height)` time. See [`Tree::is_bst_linear`].
    pub fn is_bst_naive(&self) -> bool {
        self.root().map_or(true, Node::is_bst_naive)
    }

    /// Checks the BST invariant in a single pass by narrowing the range of keys each subtree may
    /// hold on the way down.
    pub fn is_bst_linear(&self) -> bool {
        self.root().map_or(true, |n| {
            n.is_bst_within(i64::from(i32::MIN), i64::from(i32::MAX))
        })
    }

    /// The number of structurally distinct BSTs holding the keys `1..=num_keys`. This doesn't
    /// depend on any particular tree; it is [`count_trees`](crate::count_trees).
    ///
    /// # Errors
    ///
    /// See [`count_trees`](crate::count_trees).
    pub fn count_trees(num_keys: i32) -> Result<u64, TreeError> {
        count::count_trees(num_keys)
    }

    fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_deref_mut()
    }
}

/// One key and its two, possibly empty, subtrees.
pub(crate) struct Node {
    pub(crate) key: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl fmt::Debug for Node {
    // Only this node; descending into the children would recurse once per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("has_left", &self.left.is_some())
            .field("has_right", &self.right.is_some())
            .finish()
    }
}

impl Node {
    fn new(key: i32) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn size(&self) -> usize {
        1 + self.left().map_or(0, Self::size) + self.right().map_or(0, Self::size)
    }

    fn max_depth(&self) -> usize {
        let left_depth = self.left().map_or(0, Self::max_depth);
        let right_depth = self.right().map_or(0, Self::max_depth);
        left_depth.max(right_depth) + 1
    }

    fn min_key(&self) -> i32 {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current.key
    }

    fn max_key(&self) -> i32 {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current.key
    }

    /// `remaining` is what the path from here down to a leaf still has to add up to.
    fn has_path_sum(&self, remaining: i64) -> bool {
        let remaining = remaining - i64::from(self.key);
        if self.is_leaf() {
            return remaining == 0;
        }

        self.left().map_or(false, |n| n.has_path_sum(remaining))
            || self.right().map_or(false, |n| n.has_path_sum(remaining))
    }

    /// Appends the lines for this subtree. The root is drawn as a left child so that its right
    /// subtree keeps a pipe running down to it.
    fn pretty_lines(&self, prefix: &str, is_left: bool, lines: &mut Vec<String>) {
        if let Some(right) = self.right() {
            let indent = if is_left { PIPE } else { BLANK };
            right.pretty_lines(&format!("{prefix}{indent}"), false, lines);
        }

        let branch = if is_left { LEFT_BRANCH } else { RIGHT_BRANCH };
        lines.push(format!("{prefix}{branch}{}", self.key));

        if let Some(left) = self.left() {
            let indent = if is_left { BLANK } else { PIPE };
            left.pretty_lines(&format!("{prefix}{indent}"), true, lines);
        }
    }

    fn mirror(&mut self) {
        if let Some(left) = self.left_mut() {
            left.mirror();
        }
        if let Some(right) = self.right_mut() {
            right.mirror();
        }

        std::mem::swap(&mut self.left, &mut self.right);
    }

    fn double(&mut self) {
        // Both subtrees go first. Duplicating here first would make us walk into (and duplicate)
        // the new copy.
        if let Some(left) = self.left_mut() {
            left.double();
        }
        if let Some(right) = self.right_mut() {
            right.double();
        }

        let copy = Node {
            key: self.key,
            left: self.left.take(),
            right: None,
        };
        self.left = Some(Box::new(copy));
    }

    fn is_bst_naive(&self) -> bool {
        // If a subtree isn't itself a BST its rightmost/leftmost key may not be its extreme, but
        // then the recursive check below catches it.
        if self.left().map_or(false, |left| left.max_key() > self.key) {
            return false;
        }
        if self.right().map_or(false, |right| right.min_key() <= self.key) {
            return false;
        }

        self.left().map_or(true, Self::is_bst_naive) && self.right().map_or(true, Self::is_bst_naive)
    }

    /// Every key in this subtree must lie in `min..=max`. The bounds are `i64` so that
    /// `i32::MAX + 1` is representable as the lower bound of a right subtree.
    fn is_bst_within(&self, min: i64, max: i64) -> bool {
        let key = i64::from(self.key);
        if key < min || key > max {
            return false;
        }

        self.left().map_or(true, |n| n.is_bst_within(min, key))
            && self.right().map_or(true, |n| n.is_bst_within(key + 1, max))
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Trees only get doubled while they're at most this big so a run of doubles stays small.
    const DOUBLE_LIMIT: usize = 64;

    /// Applies the operations to a tree, and the inserts to a plain list of keys.
    fn do_ops(ops: &[Op<i8>], tree: &mut Tree, keys: &mut Vec<i32>) {
        for op in ops {
            match *op {
                Op::Insert(k) => {
                    tree.insert(i32::from(k));
                    keys.push(i32::from(k));
                }
                Op::Mirror => tree.mirror(),
                Op::Double if keys.len() <= DOUBLE_LIMIT => {
                    tree.double_tree();
                    keys.extend_from_within(..);
                }
                Op::Double => {}
            }
        }
    }

    fn is_sorted(keys: &[i32]) -> bool {
        keys.windows(2).all(|w| w[0] <= w[1])
    }

    quickcheck::quickcheck! {
        fn size_counts_inserts(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut keys = Vec::new();
            do_ops(&ops, &mut tree, &mut keys);

            tree.size() == keys.len()
        }
    }

    quickcheck::quickcheck! {
        fn traversals_visit_every_key(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut keys = Vec::new();
            do_ops(&ops, &mut tree, &mut keys);
            keys.sort_unstable();

            [
                tree.inorder().collect::<Vec<_>>(),
                tree.preorder().collect(),
                tree.postorder().collect(),
            ]
            .into_iter()
            .all(|mut visited| {
                visited.sort_unstable();
                visited == keys
            })
        }
    }

    quickcheck::quickcheck! {
        fn validators_agree(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            do_ops(&ops, &mut tree, &mut Vec::new());

            tree.is_bst_naive() == tree.is_bst_linear()
        }
    }

    quickcheck::quickcheck! {
        fn valid_bst_is_sorted(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            do_ops(&ops, &mut tree, &mut Vec::new());
            let inorder = tree.inorder().collect::<Vec<_>>();

            !tree.is_bst_linear() || is_sorted(&inorder)
        }
    }

    quickcheck::quickcheck! {
        fn double_tree_doubles_size(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            do_ops(&ops, &mut tree, &mut Vec::new());
            let size = tree.size();
            let was_bst = tree.is_bst_linear();
            tree.double_tree();

            tree.size() == 2 * size
                && tree.is_bst_linear() == was_bst
                && tree.is_bst_naive() == was_bst
        }
    }

    quickcheck::quickcheck! {
        fn paths_end_at_every_leaf(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            do_ops(&ops, &mut tree, &mut Vec::new());

            tree.paths().all(|path| {
                let sum = path.iter().copied().map(i64::from).sum();
                path.len() <= tree.max_depth() && tree.has_path_sum(sum)
            })
        }
    }
}
