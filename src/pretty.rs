//! Draws a [`Tree`] sideways: the root on the left, right subtrees above
//! their parent and left subtrees below it.
//!
//! ```text
//! │       ┌── 8
//! │   ┌── 7
//! │   │   └── 6
//! └── 5
//!     │   ┌── 4
//!     └── 3
//!         └── 2
//!             └── 1
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        if let Some(root) = self.root() {
            stack.push(Step::Visit(root, String::new(), true));
        }

        while let Some(step) = stack.pop() {
            match step {
                Step::Visit(node, prefix, is_left) => {
                    // Pushed in reverse: right subtree, then this node, then
                    // the left subtree come off the stack.
                    let (above, below) = if is_left {
                        ("│   ", "    ")
                    } else {
                        ("    ", "│   ")
                    };
                    if let Some(left) = node.left() {
                        let prefix = format!("{}{}", prefix, below);
                        stack.push(Step::Visit(left, prefix, true));
                    }
                    let right = node.right().map(|n| (n, format!("{}{}", prefix, above)));
                    stack.push(Step::Write(node, prefix, is_left));
                    if let Some((n, prefix)) = right {
                        stack.push(Step::Visit(n, prefix, false));
                    }
                }
                Step::Write(node, prefix, is_left) => {
                    let branch = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{}{}{}", prefix, branch, node.value())?;
                }
            }
        }
        Ok(())
    }
}

/// Pending work while drawing. `is_left` says which side of its parent the
/// node hangs from, which decides the branch glyph and whether the vertical
/// rule continues above or below it.
enum Step<'a, T> {
    /// Draw this node's whole subtree.
    Visit(&'a Node<T>, String, bool),
    /// Draw just this node's line.
    Write(&'a Node<T>, String, bool),
}

#[cfg(test)]
mod tests {
    use crate::Tree;

    #[test]
    fn draws_the_example_tree() {
        let tree = Tree::from_values([5, 2, 7, 1, 4, 6, 8, 3]);
        let expected = "\
│       ┌── 8
│   ┌── 7
│   │   └── 6
└── 5
    │   ┌── 4
    └── 3
        └── 2
            └── 1
";

        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn draws_nothing_for_an_empty_tree() {
        let tree: Tree<u8> = Tree::new();

        assert_eq!(tree.to_string(), "");
    }

    #[test]
    fn draws_left_and_right_leaning_branches() {
        let mut tree = Tree::new();
        tree.extend([2, 1, 5, 3, 4]);
        let expected = "\
│   ┌── 5
│   │   │   ┌── 4
│   │   └── 3
└── 2
    └── 1
";

        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn draws_a_lone_root() {
        let tree = Tree::from_values(["only"]);

        assert_eq!(tree.to_string(), "└── only\n");
    }
}
