#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;
use tally_ir::Node;

fn print(tree: &Node) -> Result<String, Error> {
    let mut op = Print::new();
    tree.accept(&mut op)?;
    Ok(op.expression().to_owned())
}

fn calculate(tree: &Node) -> Result<f64, Error> {
    let mut op = Calculate::new();
    tree.accept(&mut op)?;
    Ok(op.result())
}

#[test]
fn literal_prints_and_evaluates_as_itself() {
    assert_eq!(print(&Node::int(5)), Ok("5".to_owned()));
    assert_eq!(calculate(&Node::int(5)), Ok(5.0));
}

#[test]
fn every_composite_is_parenthesized() {
    let tree = Node::mul(Node::int(3), Node::plus(Node::int(5), Node::int(7)));
    assert_eq!(print(&tree), Ok("(3 * (5 + 7))".to_owned()));
    assert_eq!(calculate(&tree), Ok(36.0));
}

#[test]
fn structure_gives_precedence() {
    let tree = Node::plus(Node::int(1), Node::mul(Node::int(2), Node::int(3)));
    assert_eq!(print(&tree), Ok("(1 + (2 * 3))".to_owned()));
    assert_eq!(calculate(&tree), Ok(7.0));
}

#[test]
fn paren_is_transparent() {
    let grouped = Node::mul(Node::int(3), Node::paren(Node::plus(Node::int(5), Node::int(7))));
    assert_eq!(print(&grouped), Ok("(3 * (5 + 7))".to_owned()));
    assert_eq!(calculate(&grouped), Ok(36.0));
    assert_eq!(print(&Node::paren(Node::int(4))), Ok("4".to_owned()));
}

#[test]
fn fractional_and_negative_literals() {
    let tree = Node::plus(
        Node::literal(2.5).unwrap(),
        Node::int(-1),
    );
    assert_eq!(print(&tree), Ok("(2.5 + -1)".to_owned()));
    assert_eq!(calculate(&tree), Ok(1.5));
}

#[test]
fn fresh_instances_start_at_defaults() {
    assert_eq!(Print::new().expression(), "");
    assert_eq!(Calculate::new().result(), 0.0);
}

#[test]
fn overflow_is_reported_at_the_offending_node() {
    let big = Node::literal(f64::MAX).unwrap();
    let tree = Node::plus(Node::int(1), Node::mul(big, Node::int(10)));
    assert_eq!(
        calculate(&tree),
        Err(Error::NonFinite {
            operator: Operator::Mul
        })
    );
}

#[test]
fn reusing_an_instance_accumulates() {
    // Documented as unsupported: nothing resets the buffer.
    let mut op = Print::new();
    assert_eq!(Node::int(1).accept(&mut op), Ok(()));
    assert_eq!(Node::int(2).accept(&mut op), Ok(()));
    assert_eq!(op.expression(), "12");
}
