//! Stack guard for recursive tree walks.
//!
//! `Node::accept` calls itself once per tree level, and so does every
//! Strategy A handler that evaluates its children. Call depth is therefore
//! the tree's height, and a parser-free caller can hand over a left-leaning
//! `Plus` chain hundreds of thousands of nodes deep. Each recursive step is
//! wrapped in [`ensure_sufficient_stack`], which moves the rest of the walk
//! onto a fresh segment when the current one runs low.
//!
//! # What recurses and what does not
//!
//! | Path | Shape |
//! |---|---|
//! | `Node::accept`, both traversal strategies | guarded recursion |
//! | Strategy A `Print`/`Calculate` handlers | guarded, through `accept` |
//! | `Debug for Node` | guarded recursion |
//! | `Drop`, `Clone`, `PartialEq` for `Node` | explicit work stack |
//! | `Node::kinds`, `size`, `height` | explicit work stack |
//!
//! A new recursive walk over `Node` must either go through `accept` or wrap
//! its own step here.
//!
//! # Frame budget
//!
//! One guarded level holds the `accept` frame, the handler frame, a
//! `tracing::trace!` call site and, under Strategy A, a child operation
//! instance. That stays well under a kilobyte, so the 100KB red zone covers
//! every frame between two checks with a wide margin, and a 1MB segment
//! serves roughly a thousand levels before the next growth.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: passthrough. Trees deeper than the host stack allows
//!   still overflow there.

/// Space that must remain before a guarded step runs in place (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run one guarded step of a tree walk.
///
/// If less than the red zone remains, `f` runs on a new segment. The result
/// of `f`, including an `Err` from a handler, is returned unchanged.
///
/// ```text
/// pub fn accept<O: Operation>(&self, op: &mut O) -> Result<(), Error> {
///     ensure_sufficient_stack(|| match (self, O::TRAVERSAL) {
///         (Node::Plus(binary), Traversal::NodeOwned) => {
///             binary.left().accept(op)?;
///             op.handle_plus(binary)?;
///             binary.right().accept(op)
///         }
///         // ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
