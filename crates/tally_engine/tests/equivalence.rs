//! Property tests: both calculators agree wherever the node-owned fold can
//! see the tree's structure.

#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use proptest::prelude::*;
use tally_engine::{node_owned, operation_owned, traverse, Node};

fn leaf() -> impl Strategy<Value = Node> {
    (-20i32..20).prop_map(Node::int)
}

/// Trees whose composite right operands are literals or parens.
///
/// Left operands may be arbitrary: the node-owned fold has finished the left
/// subtree by the time the operator is parked.
fn grouped_tree() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(6, 64, 2, |inner| {
        let operand = prop_oneof![leaf(), inner.clone().prop_map(Node::paren)];
        prop_oneof![
            (inner.clone(), operand.clone()).prop_map(|(l, r)| Node::plus(l, r)),
            (inner.clone(), operand).prop_map(|(l, r)| Node::mul(l, r)),
            inner.prop_map(Node::paren),
        ]
    })
}

/// Any tree at all, grouped or not.
fn any_tree() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Node::plus(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Node::mul(l, r)),
            inner.prop_map(Node::paren),
        ]
    })
}

proptest! {
    #[test]
    fn calculators_agree_on_grouped_trees(tree in grouped_tree()) {
        let a = traverse(&tree, operation_owned::Calculate::new()).unwrap();
        let b = traverse(&tree, node_owned::Calculate::new()).unwrap();
        prop_assert_eq!(a.result(), b.result());
        prop_assert_eq!(b.pending(), None);
    }

    #[test]
    fn traversal_is_repeatable(tree in any_tree()) {
        let snapshot = tree.clone();
        let first = traverse(&tree, node_owned::Print::new()).unwrap();
        let second = traverse(&tree, node_owned::Print::new()).unwrap();
        prop_assert_eq!(first.expression(), second.expression());
        let first = traverse(&tree, operation_owned::Calculate::new()).unwrap();
        let second = traverse(&tree, operation_owned::Calculate::new()).unwrap();
        prop_assert_eq!(first.result(), second.result());
        prop_assert_eq!(tree, snapshot);
    }

    #[test]
    fn operation_owned_print_balances_parentheses(tree in any_tree()) {
        let print = traverse(&tree, operation_owned::Print::new()).unwrap();
        let open = print.expression().matches('(').count();
        let close = print.expression().matches(')').count();
        prop_assert_eq!(open, close);
        prop_assert_eq!(open, tree.size() - tree_leaves_and_parens(&tree));
    }
}

fn tree_leaves_and_parens(tree: &Node) -> usize {
    let own = match tree {
        Node::Literal(_) | Node::Paren(_) => 1,
        Node::Plus(_) | Node::Mul(_) => 0,
    };
    own + tree.children().map(tree_leaves_and_parens).sum::<usize>()
}
