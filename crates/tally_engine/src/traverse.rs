//! Checked traversal entry point.

use std::ops::Deref;

use tally_ir::{Error, Node, Operation};

/// A finished operation instance.
///
/// Derefs to `&O` only. Since `Node::accept` needs `&mut O`, a traversed
/// instance cannot be run over a second tree.
#[derive(Debug)]
pub struct Traversed<O> {
    op: O,
}

impl<O> Deref for Traversed<O> {
    type Target = O;

    fn deref(&self) -> &O {
        &self.op
    }
}

/// Run `op` over `root` and hand back the finished instance.
///
/// Kinds present in the tree but missing from `O::SUPPORTS` are rejected
/// with [`Error::UnsupportedVariant`] before any handler runs.
#[tracing::instrument(level = "debug", skip_all, fields(operation = O::NAME, nodes = root.size()))]
pub fn traverse<O: Operation>(root: &Node, mut op: O) -> Result<Traversed<O>, Error> {
    let missing = root.kinds().difference(O::SUPPORTS);
    if let Some(kind) = missing.first_kind() {
        tracing::debug!(%kind, "tree contains unsupported kind");
        return Err(Error::UnsupportedVariant {
            operation: O::NAME,
            kind,
        });
    }
    root.accept(&mut op)?;
    tracing::debug!("traversal complete");
    Ok(Traversed { op })
}
