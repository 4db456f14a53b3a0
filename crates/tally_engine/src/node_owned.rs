//! Node-owned recursion.
//!
//! `accept` on a composite visits left, then the node's handler, then right.
//! A composite handler therefore fires between its children and never sees
//! their values. Handlers shrink to single steps and any structure they need
//! has to be carried in the operation's own state.
//!
//! Without `Paren` nodes the tree's shape is lost: Print produces a flat
//! infix stream and Calculate folds strictly left to right, so
//! `Plus(1, Mul(2, 3))` evaluates to `9` here. Grouping is expressed with
//! `Paren`, whose handlers run a nested traversal.

use tally_ir::{Binary, Error, Literal, NodeKinds, Operation, Operator, Paren, Traversal};

/// Flat infix printer; parentheses come only from `Paren` nodes.
///
/// `Mul(3, Paren(Plus(5, 7)))` prints as `3 * (5 + 7)`.
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

    fn operator(&mut self, operator: Operator) {
        self.expr.push(' ');
        self.expr.push_str(operator.symbol());
        self.expr.push(' ');
    }
}

impl Operation for Print {
    const NAME: &'static str = "print";
    const TRAVERSAL: Traversal = Traversal::NodeOwned;
    const SUPPORTS: NodeKinds = NodeKinds::all();

    fn handle_literal(&mut self, literal: Literal) -> Result<(), Error> {
        self.expr.push_str(&literal.to_string());
        Ok(())
    }

    fn handle_plus(&mut self, _node: &Binary) -> Result<(), Error> {
        self.operator(Operator::Add);
        Ok(())
    }

    fn handle_mul(&mut self, _node: &Binary) -> Result<(), Error> {
        self.operator(Operator::Mul);
        Ok(())
    }

    fn handle_paren(&mut self, node: &Paren) -> Result<(), Error> {
        self.expr.push('(');
        node.inner().accept(self)?;
        self.expr.push(')');
        Ok(())
    }
}

/// Left-to-right evaluator with a pending-operator register.
///
/// Operator handlers park their operator in `pending`. The next value, from
/// a literal or a parenthesized subtree, is combined with `total` using the
/// parked operator and the register is cleared. A value arriving with an
/// empty register becomes the total.
#[derive(Debug, Default)]
pub struct Calculate {
    total: f64,
    pending: Option<Operator>,
}

impl Calculate {
    pub fn new() -> Self {
        Calculate::default()
    }

    /// Value computed so far; `0.0` before any traversal.
    pub fn result(&self) -> f64 {
        self.total
    }

    /// Operator waiting for its right-hand value.
    ///
    /// Always `None` after a complete traversal.
    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    fn hold(&mut self, operator: Operator) {
        // Exactly one value sits between consecutive composite handlers.
        debug_assert!(
            self.pending.is_none(),
            "`{operator}` overwrote a pending operator"
        );
        self.pending = Some(operator);
    }

    fn supply(&mut self, value: f64) -> Result<(), Error> {
        self.total = match self.pending.take() {
            Some(operator) => operator.apply(self.total, value)?,
            None => value,
        };
        Ok(())
    }
}

impl Operation for Calculate {
    const NAME: &'static str = "calculate";
    const TRAVERSAL: Traversal = Traversal::NodeOwned;
    const SUPPORTS: NodeKinds = NodeKinds::all();

    fn handle_literal(&mut self, literal: Literal) -> Result<(), Error> {
        self.supply(literal.value())
    }

    fn handle_plus(&mut self, _node: &Binary) -> Result<(), Error> {
        self.hold(Operator::Add);
        Ok(())
    }

    fn handle_mul(&mut self, _node: &Binary) -> Result<(), Error> {
        self.hold(Operator::Mul);
        Ok(())
    }

    fn handle_paren(&mut self, node: &Paren) -> Result<(), Error> {
        let mut inner = Calculate::new();
        node.inner().accept(&mut inner)?;
        self.supply(inner.total)
    }
}
