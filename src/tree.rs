//! The owning [`Tree`] type and every whole-tree operation.
//!
//! # Examples
//!
//! ```
//! use balance_bst::Tree;
//!
//! // Input is sorted and deduplicated before the tree is built.
//! let mut tree = Tree::from_values([5, 2, 7, 1, 4, 6, 8, 3, 3]);
//! assert_eq!(tree.in_order(), [&1, &2, &3, &4, &5, &6, &7, &8]);
//! assert!(tree.is_balanced());
//!
//! // Plain inserts don't rebalance.
//! tree.insert(9);
//! tree.insert(10);
//! tree.insert(11);
//! assert!(!tree.is_balanced());
//!
//! // Until asked to.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 11);
//! ```

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::iter::{InOrder, LevelOrder, PostOrder, PreOrder};
use crate::node::{Link, Node};

/// A Binary Search Tree over unique values. Inserting and deleting never
/// restructure the tree beyond the affected path, so its shape depends on the
/// order of operations; [`Tree::rebalance`] rebuilds it at minimal height.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        Node::drop_link(self.root.take());
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: Node::clone_link(&self.root),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root())
            .field("values", &self.in_order())
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a minimal height tree holding every distinct value of `values`.
    /// The input may be in any order and may contain duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use balance_bst::Tree;
    ///
    /// let tree = Tree::from_values([5, 2, 7, 1, 4, 6, 8, 3]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(5));
    /// assert_eq!(tree.level_order(), [&5, &3, &7, &2, &4, &6, &8, &1]);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self::build(values)
    }

    /// Builds a tree from values already sorted ascending with no duplicates.
    #[instrument(level = "debug", skip_all, fields(len = sorted.len()))]
    fn build(sorted: Vec<T>) -> Self {
        let len = sorted.len();
        let root = Node::build(sorted);
        debug!(height = root.as_deref().map_or(0, Node::height), "built tree");
        Self { root, len }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value`, returning `false` if it was already present (in which
    /// case nothing changes). No rebalancing happens, so inserting sorted
    /// values one by one degrades the tree into a chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use balance_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = Node::insert(&mut self.root, value);
        if inserted {
            self.len += 1;
        } else {
            trace!("insert ignored duplicate");
        }
        inserted
    }

    /// Finds the node holding a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balance_bst::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| n.height()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root()?.find(value)
    }

    /// Returns `true` if a value equal to `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Removes `value` from the tree and returns it. Deleting a value that
    /// isn't present does nothing and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balance_bst::Tree;
    ///
    /// let mut tree = Tree::from_values([1, 2, 3]);
    ///
    /// // 2 is the root and has two children: 3 takes its place.
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// assert_eq!(tree.delete(&2), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let deleted = Node::delete(&mut self.root, value);
        match deleted {
            Some(_) => self.len -= 1,
            None => trace!("delete found nothing"),
        }
        deleted
    }

    /// Number of levels in the tree: 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Number of edges from the root down to the node holding `value`, or
    /// `None` if no such node exists. The root has depth 0, so every stored
    /// value's depth is less than [`Tree::height`].
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.root()?.depth_of(value)
    }

    /// Returns `true` if, for every node, the heights of its two subtrees
    /// differ by at most one. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Rebuilds the tree at minimal height from its current values. Every old
    /// node is dropped; the set and order of values is unchanged.
    #[instrument(level = "debug", skip_all, fields(len = self.len))]
    pub fn rebalance(&mut self) {
        let before = self.height();
        let mut values = Vec::with_capacity(self.len);
        Node::drain_in_order(self.root.take(), &mut values);

        *self = Self::build(values);
        debug!(before, after = self.height(), "rebalanced");
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|n| n.min().value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|n| n.max().value())
    }

    /// All values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.collect_in_order(&mut out);
        }
        out
    }

    /// All values, each node before its left then right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.collect_pre_order(&mut out);
        }
        out
    }

    /// All values, each node after its left then right subtree.
    pub fn post_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.collect_post_order(&mut out);
        }
        out
    }

    /// All values level by level, left to right.
    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.collect_level_order(&mut out);
        }
        out
    }

    /// Lazily yields values in ascending order.
    pub fn iter_in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root(), self.len)
    }

    /// Lazily yields values in pre-order.
    pub fn iter_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root(), self.len)
    }

    /// Lazily yields values in post-order.
    pub fn iter_post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root(), self.len)
    }

    /// Lazily yields values in level order.
    pub fn iter_level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root(), self.len)
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_in_order()
    }
}
