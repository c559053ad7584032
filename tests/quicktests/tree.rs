use balance_bst::{Node, Tree};

use std::collections::{BTreeSet, HashSet};

/// Every value in a left subtree is smaller than its ancestor and every value
/// in a right subtree is larger.
fn is_bst<T: Ord>(tree: &Tree<T>) -> bool {
    fn check<T: Ord>(node: Option<&Node<T>>, low: Option<&T>, high: Option<&T>) -> bool {
        match node {
            None => true,
            Some(n) => {
                low.map_or(true, |low| low < n.value())
                    && high.map_or(true, |high| n.value() < high)
                    && check(n.left(), low, Some(n.value()))
                    && check(n.right(), Some(n.value()), high)
            }
        }
    }
    check(tree.root(), None, None)
}

fn sorted_unique(xs: &[i8]) -> Vec<i8> {
    let set: BTreeSet<_> = xs.iter().copied().collect();
    set.into_iter().collect()
}

fn owned(values: Vec<&i8>) -> Vec<i8> {
    values.into_iter().copied().collect()
}

#[quickcheck]
fn build_round_trips(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());

    owned(tree.in_order()) == sorted_unique(&xs) && tree.is_balanced() && is_bst(&tree)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(Node::value) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn duplicates_change_nothing(xs: Vec<i8>, again: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs.clone());
    let before = owned(tree.in_order());
    for x in again.iter().filter(|x| xs.contains(x)) {
        tree.insert(*x);
    }

    owned(tree.in_order()) == before && tree.len() == before.len()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());
    for delete in &deletes {
        let before = owned(tree.in_order());
        tree.delete(delete);
        let expected: Vec<i8> = before.into_iter().filter(|x| x != delete).collect();
        if owned(tree.in_order()) != expected || !is_bst(&tree) {
            return false;
        }
    }

    let still_present: HashSet<_> = xs.iter().filter(|x| !deletes.contains(x)).collect();
    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.len() == still_present.len()
}

#[quickcheck]
fn rebalance_keeps_order(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);
    for delete in &deletes {
        tree.delete(delete);
    }
    let before = owned(tree.in_order());

    tree.rebalance();

    tree.is_balanced() && owned(tree.in_order()) == before && is_bst(&tree)
}

#[quickcheck]
fn traversals_are_permutations(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);

    let mut sorted = [
        owned(tree.pre_order()),
        owned(tree.post_order()),
        owned(tree.level_order()),
    ];
    for order in &mut sorted {
        order.sort_unstable();
    }

    let in_order = owned(tree.in_order());
    in_order.len() == tree.len() && sorted.iter().all(|order| *order == in_order)
}

#[quickcheck]
fn lazy_traversals_match_eager(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);

    tree.iter_in_order().eq(tree.in_order())
        && tree.iter_pre_order().eq(tree.pre_order())
        && tree.iter_post_order().eq(tree.post_order())
        && tree.iter_level_order().eq(tree.level_order())
}

#[quickcheck]
fn level_order_sorts_by_depth_then_value(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    // Within one level of a BST, left to right is ascending.
    let mut expected = owned(tree.in_order());
    expected.sort_by_key(|x| (tree.depth(x), *x));

    owned(tree.level_order()) == expected && owned(tree.iter_level_order().collect()) == expected
}
