//! Node discriminants.

use std::fmt;

use bitflags::bitflags;

/// Fieldless discriminant of a [`Node`](crate::Node).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Literal,
    Plus,
    Mul,
    Paren,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: [NodeKind; 4] = [Self::Literal, Self::Plus, Self::Mul, Self::Paren];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Plus => "plus",
            Self::Mul => "mul",
            Self::Paren => "paren",
        }
    }

    /// The single-kind set containing this kind.
    pub const fn flag(self) -> NodeKinds {
        match self {
            Self::Literal => NodeKinds::LITERAL,
            Self::Plus => NodeKinds::PLUS,
            Self::Mul => NodeKinds::MUL,
            Self::Paren => NodeKinds::PAREN,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of node kinds.
    ///
    /// Operations declare the kinds they handle with this set, and
    /// `Node::kinds` reports the kinds a tree contains, so support can be
    /// checked before a traversal starts.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct NodeKinds: u8 {
        const LITERAL = 1 << 0;
        const PLUS = 1 << 1;
        const MUL = 1 << 2;
        const PAREN = 1 << 3;

        /// Literals and both binary operators, without grouping.
        const ARITHMETIC = Self::LITERAL.bits() | Self::PLUS.bits() | Self::MUL.bits();
    }
}

impl NodeKinds {
    /// First kind in the set, in [`NodeKind::ALL`] order.
    pub fn first_kind(self) -> Option<NodeKind> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| self.contains(kind.flag()))
    }
}
