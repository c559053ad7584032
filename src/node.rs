//! The building block of a [`Tree`][crate::Tree]. A `Node` owns its value and
//! up to two children; nothing points back up at a parent.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

/// An owned, possibly missing, child.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single value and the (optional) subtrees below it. All values in the
/// left subtree are less than `value` and all values in the right subtree are
/// greater.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    /// Shows the children by value only, so formatting never walks the
    /// whole subtree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Self::value))
            .field("right", &self.right().map(Self::value))
            .finish()
    }
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(node.left().map(|n| (n, level + 1)));
            stack.extend(node.right().map(|n| (n, level + 1)));
        }
        height
    }

    /// Returns `true` if, for every node in this subtree, the heights of its
    /// two children differ by at most one.
    pub fn is_balanced(&self) -> bool {
        self.balanced_height().is_some()
    }

    /// The height of this subtree if it is balanced. Nodes are visited in
    /// post-order so both children's heights are known when their parent is
    /// checked; the first node out of balance ends the walk.
    fn balanced_height(&self) -> Option<usize> {
        let mut stack = vec![(self, false)];
        let mut heights: Vec<usize> = Vec::new();

        while let Some((node, expanded)) = stack.pop() {
            if !expanded {
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
                continue;
            }

            // The right subtree finished last, so its height is on top.
            let right = if node.right.is_some() { heights.pop()? } else { 0 };
            let left = if node.left.is_some() { heights.pop()? } else { 0 };
            if left.abs_diff(right) > 1 {
                return None;
            }
            heights.push(left.max(right) + 1);
        }

        heights.pop()
    }

    /// Inserts `value` into the subtree hanging off `link`. Returns `false`,
    /// leaving the tree untouched, if a node with an equal value already
    /// exists.
    ///
    /// This is a plain BST insert: nothing above the new leaf is restructured.
    pub(crate) fn insert(link: &mut Link<T>, value: T) -> bool
    where
        T: Ord,
    {
        let mut current = link;
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return false,
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
        }

        *current = Some(Self::new_boxed(value));
        true
    }

    /// Finds the node holding a value equal to `value` in this subtree.
    pub(crate) fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        let mut current = self;
        loop {
            current = match value.cmp(&current.value) {
                Ordering::Less => current.left()?,
                Ordering::Equal => return Some(current),
                Ordering::Greater => current.right()?,
            };
        }
    }

    /// Number of edges from this node down to the node holding `value`.
    pub(crate) fn depth_of(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = self;
        let mut depth = 0;
        loop {
            current = match value.cmp(&current.value) {
                Ordering::Less => current.left()?,
                Ordering::Equal => return Some(depth),
                Ordering::Greater => current.right()?,
            };
            depth += 1;
        }
    }

    /// Removes `value` from the subtree hanging off `link`, relinking its
    /// parent to whatever replaces it. Returns the removed value, or `None`
    /// if it wasn't there.
    ///
    /// A node with two children keeps its place in the tree: it takes over
    /// the smallest value of its right subtree, and that value's old node is
    /// removed instead.
    pub(crate) fn delete(link: &mut Link<T>, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut current = link;
        loop {
            match value.cmp(&current.as_deref()?.value) {
                Ordering::Equal => break,
                Ordering::Less => current = &mut current.as_mut()?.left,
                Ordering::Greater => current = &mut current.as_mut()?.right,
            }
        }

        let node = current.as_deref_mut()?;
        if node.left.is_some() && node.right.is_some() {
            let successor = Self::delete_min(&mut node.right)?;
            return Some(mem::replace(&mut node.value, successor));
        }

        let mut deleted = current.take()?;
        *current = if deleted.left.is_none() {
            deleted.right.take()
        } else {
            deleted.left.take()
        };
        Some(deleted.value)
    }

    /// Removes the leftmost node of the subtree hanging off `link`, splicing
    /// its right child into its place, and returns its value.
    fn delete_min(link: &mut Link<T>) -> Option<T> {
        let mut current = link;
        while current.as_deref()?.left.is_some() {
            current = &mut current.as_mut()?.left;
        }

        let mut min = current.take()?;
        *current = min.right.take();
        Some(min.value)
    }

    /// The leftmost node of this subtree.
    pub(crate) fn min(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// The rightmost node of this subtree.
    pub(crate) fn max(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    /// Builds a minimal height subtree from values that are already sorted
    /// ascending and free of duplicates. The middle value (`len / 2`) becomes
    /// the root and each half is built the same way.
    ///
    /// Recursion depth is the height of the result, `O(lg N)`.
    pub(crate) fn build(mut values: Vec<T>) -> Link<T> {
        if values.is_empty() {
            return None;
        }

        let mid = values.len() / 2;
        let right = values.split_off(mid + 1);
        let value = values.pop()?;

        Some(Box::new(Self {
            value,
            left: Self::build(values),
            right: Self::build(right),
        }))
    }

    /// Copies the subtree hanging off `link` node for node, keeping its shape.
    pub(crate) fn clone_link(link: &Link<T>) -> Link<T>
    where
        T: Clone,
    {
        let mut root = None;
        {
            let mut stack = Vec::new();
            if let Some(node) = link.as_deref() {
                stack.push((node, &mut root));
            }

            while let Some((source, target)) = stack.pop() {
                let copy = target.insert(Self::new_boxed(source.value.clone()));
                let Self { left, right, .. } = &mut **copy;
                if let Some(n) = source.left() {
                    stack.push((n, left));
                }
                if let Some(n) = source.right() {
                    stack.push((n, right));
                }
            }
        }
        root
    }

    /// Frees the subtree hanging off `link` one node at a time. Dropping a
    /// `Box<Node>` directly would recurse once per level.
    pub(crate) fn drop_link(link: Link<T>) {
        let mut stack: Vec<Box<Self>> = link.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// Moves every value out of the subtree hanging off `link` into `out`,
    /// in ascending order. Nodes are freed as they're emptied.
    pub(crate) fn drain_in_order(link: Link<T>, out: &mut Vec<T>) {
        let mut stack = Vec::new();
        let mut current = link;
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }

            let mut node = match stack.pop() {
                Some(node) => node,
                None => break,
            };
            current = node.right.take();
            out.push(node.value);
        }
    }

    pub(crate) fn collect_in_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        let mut stack = Vec::new();
        let mut current = Some(self);
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }

            let node = match stack.pop() {
                Some(node) => node,
                None => break,
            };
            out.push(&node.value);
            current = node.right();
        }
    }

    pub(crate) fn collect_pre_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    /// Collects node, right, left (a mirrored pre-order) and reverses it.
    pub(crate) fn collect_post_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        let start = out.len();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        out[start..].reverse();
    }

    /// Collects one whole level before moving on to the next.
    pub(crate) fn collect_level_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        let mut level = vec![self];
        while !level.is_empty() {
            out.extend(level.iter().copied().map(Self::value));
            level = level
                .iter()
                .copied()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
    }
}
