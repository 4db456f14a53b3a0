//! Operations over Tally expression trees.
//!
//! The same two operations, Print and Calculate, are implemented twice:
//!
//! - [`operation_owned`]: handlers recurse. Print wraps every composite in
//!   parentheses from a single shared buffer; Calculate evaluates each child
//!   in a fresh instance and combines the two results.
//! - [`node_owned`]: `accept` recurses left, self, right. Print emits a flat
//!   infix stream with parentheses only where the tree has `Paren` nodes;
//!   Calculate folds values left to right through a pending-operator
//!   register.
//!
//! [`traverse`] is the checked way to run any operation: it rejects trees
//! containing kinds the operation does not support before the first handler
//! runs, and returns the finished instance behind a read-only wrapper.

pub mod node_owned;
pub mod operation_owned;
mod traverse;
mod tracing_setup;

pub use tally_ir::{Error, Node, Operation, Traversal};
pub use traverse::{traverse, Traversed};
pub use tracing_setup::init_tracing;
