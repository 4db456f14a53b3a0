//! Tally IR - expression tree and dispatch contract
//!
//! This crate contains the data the engine operates on:
//! - `Node`: a closed, immutable arithmetic tree (`Literal`, `Plus`, `Mul`,
//!   `Paren`) with strictly owned children
//! - `NodeKind` / `NodeKinds`: variant discriminants and sets of them
//! - `NodeBuilder`: id-based construction that rejects malformed trees
//! - `Operation`: the handler-per-variant contract, and `Node::accept`, the
//!   dispatch hook that routes a node to the handler for its own variant
//!
//! # Design Philosophy
//!
//! - **Closed set**: `Node` is an enum and `accept` matches exhaustively, so
//!   dispatch never inspects type names.
//! - **Immutable**: node fields are private; a tree can be read and dropped,
//!   never edited.
//! - **Fail fast**: handlers an operation does not provide return
//!   `Error::UnsupportedVariant` instead of silently doing nothing.

mod builder;
mod error;
mod kind;
mod node;
mod operation;
mod operator;

pub use builder::{NodeBuilder, NodeId};
pub use error::{Error, Malformed};
pub use kind::{NodeKind, NodeKinds};
pub use node::{Binary, Literal, Node, Paren};
pub use operation::{Operation, Traversal};
pub use operator::Operator;
