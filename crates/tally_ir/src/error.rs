//! Errors raised while building or traversing a tree.

use thiserror::Error;

use crate::{NodeId, NodeKind, Operator};

/// Everything that can go wrong in tree construction or an operation.
///
/// Construction problems (`MalformedTree`, `InvalidLiteral`) are raised
/// before any traversal exists. Traversal problems (`UnsupportedVariant`,
/// `NonFinite`) are raised at the offending handler and propagate with `?`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("operation `{operation}` has no handler for {kind} nodes")]
    UnsupportedVariant {
        operation: &'static str,
        kind: NodeKind,
    },

    #[error("malformed tree: {0}")]
    MalformedTree(#[from] Malformed),

    #[error("invalid literal `{text}`: not a finite number")]
    InvalidLiteral { text: String },

    #[error("`{operator}` produced a non-finite result")]
    NonFinite { operator: Operator },
}

/// Structural problems detected by [`NodeBuilder`](crate::NodeBuilder).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Malformed {
    #[error("{0:?} was never built by this builder")]
    MissingNode(NodeId),

    #[error("{0:?} already has a parent")]
    SharedNode(NodeId),

    #[error("{0:?} is not reachable from the root")]
    Detached(NodeId),
}
