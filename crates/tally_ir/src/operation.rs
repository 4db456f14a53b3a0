//! Operation contract and the dispatch hook.
//!
//! # Design
//!
//! Dispatch takes two hops. `Node::accept` resolves the node's own variant
//! by matching on the enum, then calls the handler for that variant on the
//! operation. Adding an operation means implementing [`Operation`]; the node
//! types never change.
//!
//! Who recurses into children is chosen per operation by
//! [`Operation::TRAVERSAL`]:
//!
//! - [`Traversal::OperationOwned`]: `accept` only routes. Composite handlers
//!   call `accept` on the children themselves, wrapping them however they
//!   like.
//! - [`Traversal::NodeOwned`]: `accept` on `Plus`/`Mul` visits the left
//!   child, then the node's own handler, then the right child. Handlers never
//!   see their children's results and act as single-step reducers.
//!
//! `Literal` and `Paren` dispatch the same way under both: their handler is
//! called directly, and a `Paren` handler re-enters traversal on the inner
//! subtree itself.
//!
//! # Unsupported variants
//!
//! Handlers other than `handle_literal` have provided implementations that
//! fail with [`Error::UnsupportedVariant`]. An operation overrides the
//! handlers for the kinds it lists in [`Operation::SUPPORTS`]; the two must
//! agree.

use tally_stack::ensure_sufficient_stack;

use crate::{Binary, Error, Literal, Node, NodeKind, NodeKinds, Paren};

/// Which side owns recursion into a composite node's children.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Traversal {
    /// Handlers recurse; `accept` only routes.
    OperationOwned,
    /// `accept` recurses left, self, right; handlers only reduce.
    NodeOwned,
}

/// A traversal client with one handler per node variant.
///
/// An instance carries the accumulator for exactly one traversal. Create it,
/// pass it to `accept` on a root, read its result, drop it. Reusing an
/// instance on a second tree is unsupported: accumulators have no reset and
/// state from the first traversal carries over.
pub trait Operation {
    /// Name used in errors and logs.
    const NAME: &'static str;

    /// Recursion ownership for composite nodes.
    const TRAVERSAL: Traversal;

    /// Kinds this operation has handlers for.
    const SUPPORTS: NodeKinds;

    fn handle_literal(&mut self, literal: Literal) -> Result<(), Error>;

    fn handle_plus(&mut self, _node: &Binary) -> Result<(), Error> {
        Err(Error::UnsupportedVariant {
            operation: Self::NAME,
            kind: NodeKind::Plus,
        })
    }

    fn handle_mul(&mut self, _node: &Binary) -> Result<(), Error> {
        Err(Error::UnsupportedVariant {
            operation: Self::NAME,
            kind: NodeKind::Mul,
        })
    }

    fn handle_paren(&mut self, _node: &Paren) -> Result<(), Error> {
        Err(Error::UnsupportedVariant {
            operation: Self::NAME,
            kind: NodeKind::Paren,
        })
    }
}

impl Node {
    /// Dispatch this node to the handler for its variant.
    ///
    /// Under [`Traversal::NodeOwned`] composites also visit their children,
    /// left before the handler and right after it. The first error from any
    /// handler stops the traversal and is returned.
    pub fn accept<O: Operation>(&self, op: &mut O) -> Result<(), Error> {
        ensure_sufficient_stack(|| {
            tracing::trace!(operation = O::NAME, kind = %self.kind(), "accept");
            match (self, O::TRAVERSAL) {
                (Node::Literal(literal), _) => op.handle_literal(*literal),
                (Node::Paren(paren), _) => op.handle_paren(paren),
                (Node::Plus(binary), Traversal::OperationOwned) => op.handle_plus(binary),
                (Node::Mul(binary), Traversal::OperationOwned) => op.handle_mul(binary),
                (Node::Plus(binary), Traversal::NodeOwned) => {
                    binary.left().accept(op)?;
                    op.handle_plus(binary)?;
                    binary.right().accept(op)
                }
                (Node::Mul(binary), Traversal::NodeOwned) => {
                    binary.left().accept(op)?;
                    op.handle_mul(binary)?;
                    binary.right().accept(op)
                }
            }
        })
    }
}
