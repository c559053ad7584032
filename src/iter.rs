//! Lazy traversals over a [`Tree`][crate::Tree].
//!
//! Each iterator walks the tree with an explicit stack (or, for level order, a
//! queue) so values are produced one at a time without collecting them first.
//! They borrow the tree, so it can't change underneath them. To start a
//! traversal over, ask the tree for a new iterator or `clone` an existing one.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// Implements the traits every traversal shares: a `Clone` that doesn't need
/// `T: Clone` (only references are copied), an exact `size_hint` and the
/// `ExactSizeIterator`/`FusedIterator` markers.
macro_rules! traversal_traits {
    ($name:ident { $($field:ident),* }) => {
        impl<'a, T> Clone for $name<'a, T> {
            fn clone(&self) -> Self {
                Self {
                    $($field: self.$field.clone(),)*
                }
            }
        }

        impl<'a, T> ExactSizeIterator for $name<'a, T> {}

        impl<'a, T> FusedIterator for $name<'a, T> {}
    };
}

/// Values in ascending order: left subtree, node, right subtree.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

traversal_traits!(InOrder { stack, remaining });

/// Node first, then its left subtree, then its right subtree.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so left comes off first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

traversal_traits!(PreOrder { stack, remaining });

/// Left subtree, then right subtree, then the node itself.
pub struct PostOrder<'a, T> {
    /// Each node is pushed twice: once unexpanded (`false`) and, after its
    /// children have been pushed above it, once expanded (`true`) so it's
    /// emitted after them.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(node.value());
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

traversal_traits!(PostOrder { stack, remaining });

/// Breadth first: by increasing depth, left to right within a level. Only
/// present children are ever queued.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            queue: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

traversal_traits!(LevelOrder { queue, remaining });

#[cfg(test)]
mod tests {
    use crate::Tree;

    #[test]
    fn empty_tree_yields_nothing() {
        let tree: Tree<i32> = Tree::new();

        assert_eq!(tree.iter_in_order().next(), None);
        assert_eq!(tree.iter_pre_order().next(), None);
        assert_eq!(tree.iter_post_order().next(), None);
        assert_eq!(tree.iter_level_order().next(), None);
    }

    #[test]
    fn size_hint_counts_down() {
        let tree = Tree::from_values([2, 1, 3]);
        let mut iter = tree.iter_post_order();

        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.by_ref().for_each(drop);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn clone_restarts_from_the_same_place() {
        let tree = Tree::from_values(1..=7);
        let mut iter = tree.iter_level_order();
        iter.next();

        let restarted = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), restarted.collect::<Vec<_>>());
    }

    #[test]
    fn lazy_matches_eager_on_a_lopsided_tree() {
        let mut tree = Tree::from_values([50, 25, 75]);
        for x in [10, 5, 30, 27, 28, 80, 90, 85] {
            tree.insert(x);
        }

        assert_eq!(tree.iter_in_order().collect::<Vec<_>>(), tree.in_order());
        assert_eq!(tree.iter_pre_order().collect::<Vec<_>>(), tree.pre_order());
        assert_eq!(
            tree.iter_post_order().collect::<Vec<_>>(),
            tree.post_order()
        );
        assert_eq!(
            tree.iter_level_order().collect::<Vec<_>>(),
            tree.level_order()
        );
    }

    #[test]
    fn level_order_skips_missing_children() {
        let mut tree = Tree::new();
        for x in [1, 2, 3, 4] {
            tree.insert(x);
        }

        assert_eq!(tree.level_order(), [&1, &2, &3, &4]);
    }
}
