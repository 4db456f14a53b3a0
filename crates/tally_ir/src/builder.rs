//! Id-based tree construction.
//!
//! `NodeBuilder` hands out a [`NodeId`] for every node it creates and
//! composites refer to their children by id. This suits callers that produce
//! trees from flat descriptions, where a child might be referenced twice,
//! never built, or left dangling. All three are rejected while building, so
//! a finished [`Node`] is always well formed.
//!
//! Children are moved out of their slot the moment a parent claims them, so
//! the finished tree is assembled incrementally and `finish` only has to
//! check that nothing was left behind.

use std::fmt;

use crate::{Error, Literal, Malformed, Node, Operator};

/// Handle to a node inside a [`NodeBuilder`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Builder whose slots hold nodes not yet claimed by a parent.
#[derive(Default, Debug)]
pub struct NodeBuilder {
    /// `None` once a parent (or `finish`) has taken the node.
    slots: Vec<Option<Node>>,
}

impl NodeBuilder {
    pub fn new() -> Self {
        NodeBuilder::default()
    }

    /// Number of nodes created so far, claimed or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn literal(&mut self, value: f64) -> Result<NodeId, Error> {
        let node = Node::literal(value)?;
        Ok(self.push(node))
    }

    /// Literal coerced from text; see [`Literal::parse`].
    pub fn literal_text(&mut self, text: &str) -> Result<NodeId, Error> {
        let literal = Literal::parse(text)?;
        Ok(self.push(Node::Literal(literal)))
    }

    pub fn int(&mut self, value: i32) -> NodeId {
        self.push(Node::int(value))
    }

    pub fn plus(&mut self, left: NodeId, right: NodeId) -> Result<NodeId, Error> {
        self.binary(Operator::Add, left, right)
    }

    pub fn mul(&mut self, left: NodeId, right: NodeId) -> Result<NodeId, Error> {
        self.binary(Operator::Mul, left, right)
    }

    /// Composite of two unclaimed nodes.
    ///
    /// Both ids are checked before either is claimed, so a rejected call
    /// leaves the builder unchanged.
    pub fn binary(
        &mut self,
        operator: Operator,
        left: NodeId,
        right: NodeId,
    ) -> Result<NodeId, Error> {
        self.check(left)?;
        self.check(right)?;
        if left == right {
            return Err(Malformed::SharedNode(right).into());
        }
        let left = self.claim(left)?;
        let right = self.claim(right)?;
        Ok(self.push(Node::binary(operator, left, right)))
    }

    pub fn paren(&mut self, inner: NodeId) -> Result<NodeId, Error> {
        let inner = self.claim(inner)?;
        Ok(self.push(Node::paren(inner)))
    }

    /// Take `root` out as the finished tree.
    ///
    /// Fails if `root` is unknown or already a child, or if any other node
    /// was never attached.
    #[tracing::instrument(level = "debug", skip(self), fields(nodes = self.slots.len()))]
    pub fn finish(mut self, root: NodeId) -> Result<Node, Error> {
        let tree = self.claim(root)?;
        if let Some(index) = self.slots.iter().position(Option::is_some) {
            tracing::debug!(index, "unclaimed node left in builder");
            return Err(Malformed::Detached(NodeId::new(index)).into());
        }
        Ok(tree)
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.slots.push(Some(node));
        NodeId::new(self.slots.len() - 1)
    }

    fn check(&self, id: NodeId) -> Result<(), Malformed> {
        match self.slots.get(id.index()) {
            None => Err(Malformed::MissingNode(id)),
            Some(None) => Err(Malformed::SharedNode(id)),
            Some(Some(_)) => Ok(()),
        }
    }

    fn claim(&mut self, id: NodeId) -> Result<Node, Malformed> {
        match self.slots.get_mut(id.index()) {
            None => Err(Malformed::MissingNode(id)),
            Some(slot) => slot.take().ok_or(Malformed::SharedNode(id)),
        }
    }
}
