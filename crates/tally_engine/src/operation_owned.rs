//! Operation-owned recursion.
//!
//! `accept` only routes a node to its handler. Composite handlers decide how
//! and when to visit the children, which is what lets Print wrap each
//! composite in parentheses and Calculate isolate each subtree.
//!
//! `Paren` is handled transparently: Print already groups every composite,
//! and Calculate evaluates the inner subtree like any other child. This lets
//! a tree built for node-owned traversal run here unchanged.

use tally_ir::{Binary, Error, Literal, NodeKinds, Operation, Operator, Paren, Traversal};

/// Fully parenthesized infix printer.
///
/// `Plus(3, Mul(4, 5))` prints as `(3 + (4 * 5))`.
#[derive(Debug, Default)]
pub struct Print {
    expr: String,
}

impl Print {
    pub fn new() -> Self {
        Print::default()
    }

    /// Text written so far; empty before any traversal.
    pub fn expression(&self) -> &str {
        &self.expr
    }

    fn wrap(&mut self, operator: Operator, node: &Binary) -> Result<(), Error> {
        self.expr.push('(');
        node.left().accept(self)?;
        self.expr.push(' ');
        self.expr.push_str(operator.symbol());
        self.expr.push(' ');
        node.right().accept(self)?;
        self.expr.push(')');
        Ok(())
    }
}

impl Operation for Print {
    const NAME: &'static str = "print";
    const TRAVERSAL: Traversal = Traversal::OperationOwned;
    const SUPPORTS: NodeKinds = NodeKinds::all();

    fn handle_literal(&mut self, literal: Literal) -> Result<(), Error> {
        self.expr.push_str(&literal.to_string());
        Ok(())
    }

    fn handle_plus(&mut self, node: &Binary) -> Result<(), Error> {
        self.wrap(Operator::Add, node)
    }

    fn handle_mul(&mut self, node: &Binary) -> Result<(), Error> {
        self.wrap(Operator::Mul, node)
    }

    fn handle_paren(&mut self, node: &Paren) -> Result<(), Error> {
        node.inner().accept(self)
    }
}

/// Evaluator that gives every subtree its own instance.
///
/// A composite evaluates its left and right children into two fresh
/// `Calculate`s and stores the combination in its own register.
#[derive(Debug, Default)]
pub struct Calculate {
    result: f64,
}

impl Calculate {
    pub fn new() -> Self {
        Calculate::default()
    }

    /// Value computed so far; `0.0` before any traversal.
    pub fn result(&self) -> f64 {
        self.result
    }

    fn combine(&mut self, operator: Operator, node: &Binary) -> Result<(), Error> {
        let mut left = Calculate::new();
        node.left().accept(&mut left)?;
        let mut right = Calculate::new();
        node.right().accept(&mut right)?;
        self.result = operator.apply(left.result, right.result)?;
        Ok(())
    }
}

impl Operation for Calculate {
    const NAME: &'static str = "calculate";
    const TRAVERSAL: Traversal = Traversal::OperationOwned;
    const SUPPORTS: NodeKinds = NodeKinds::all();

    fn handle_literal(&mut self, literal: Literal) -> Result<(), Error> {
        self.result = literal.value();
        Ok(())
    }

    fn handle_plus(&mut self, node: &Binary) -> Result<(), Error> {
        self.combine(Operator::Add, node)
    }

    fn handle_mul(&mut self, node: &Binary) -> Result<(), Error> {
        self.combine(Operator::Mul, node)
    }

    fn handle_paren(&mut self, node: &Paren) -> Result<(), Error> {
        let mut inner = Calculate::new();
        node.inner().accept(&mut inner)?;
        self.result = inner.result;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
