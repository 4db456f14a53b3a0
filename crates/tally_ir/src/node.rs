//! Expression tree nodes.
//!
//! Children are `Box<Node>` owned by exactly one parent, so sharing and
//! cycles cannot be expressed. Fields are private: once built, a node can
//! only be read.

use std::fmt;
use std::mem;

use tally_stack::ensure_sufficient_stack;

use crate::{Error, NodeKind, NodeKinds, Operator};

/// A numeric leaf. The value is always finite.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Literal {
    value: f64,
}

impl Literal {
    /// Placeholder used when detaching children during drop.
    const ZERO: Literal = Literal { value: 0.0 };

    /// Create a literal, rejecting NaN and infinities.
    pub fn new(value: f64) -> Result<Self, Error> {
        if value.is_finite() {
            Ok(Literal { value })
        } else {
            Err(Error::InvalidLiteral {
                text: value.to_string(),
            })
        }
    }

    /// Coerce text into a literal.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a finite
    /// number (including `"NaN"` and `"inf"`) is an [`Error::InvalidLiteral`].
    pub fn parse(text: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidLiteral {
            text: text.to_owned(),
        };
        let value: f64 = text.trim().parse().map_err(|_| invalid())?;
        Self::new(value).map_err(|_| invalid())
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal {
            value: f64::from(value),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Both children of a `Plus` or `Mul` node, left first.
#[derive(Clone, PartialEq, Debug)]
pub struct Binary {
    left: Box<Node>,
    right: Box<Node>,
}

impl Binary {
    #[inline]
    pub fn left(&self) -> &Node {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &Node {
        &self.right
    }
}

/// Grouping marker around a single subtree.
#[derive(Clone, PartialEq, Debug)]
pub struct Paren {
    inner: Box<Node>,
}

impl Paren {
    #[inline]
    pub fn inner(&self) -> &Node {
        &self.inner
    }
}

/// An immutable arithmetic expression.
///
/// `Clone`, `PartialEq` and `Drop` walk with explicit stacks and `Debug`
/// grows the stack as it descends, so all of them handle trees as deep as a
/// traversal does.
pub enum Node {
    Literal(Literal),
    Plus(Binary),
    Mul(Binary),
    Paren(Paren),
}

impl Node {
    /// Literal leaf from a float; fails for non-finite values.
    pub fn literal(value: f64) -> Result<Node, Error> {
        Literal::new(value).map(Node::Literal)
    }

    /// Literal leaf from an integer. Always valid.
    pub fn int(value: i32) -> Node {
        Node::Literal(Literal::from(value))
    }

    pub fn plus(left: Node, right: Node) -> Node {
        Node::Plus(Binary {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn mul(left: Node, right: Node) -> Node {
        Node::Mul(Binary {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn paren(inner: Node) -> Node {
        Node::Paren(Paren {
            inner: Box::new(inner),
        })
    }

    /// Composite node for `operator`.
    pub fn binary(operator: Operator, left: Node, right: Node) -> Node {
        match operator {
            Operator::Add => Node::plus(left, right),
            Operator::Mul => Node::mul(left, right),
        }
    }

    pub const fn kind(&self) -> NodeKind {
        match self {
            Node::Literal(_) => NodeKind::Literal,
            Node::Plus(_) => NodeKind::Plus,
            Node::Mul(_) => NodeKind::Mul,
            Node::Paren(_) => NodeKind::Paren,
        }
    }

    /// Operator carried by a composite node.
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Node::Plus(_) => Some(Operator::Add),
            Node::Mul(_) => Some(Operator::Mul),
            Node::Literal(_) | Node::Paren(_) => None,
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let (first, second) = match self {
            Node::Literal(_) => (None, None),
            Node::Plus(binary) | Node::Mul(binary) => (Some(binary.left()), Some(binary.right())),
            Node::Paren(paren) => (Some(paren.inner()), None),
        };
        first.into_iter().chain(second)
    }

    /// Set of kinds present anywhere in the tree.
    pub fn kinds(&self) -> NodeKinds {
        let mut kinds = NodeKinds::empty();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            kinds |= node.kind().flag();
            stack.extend(node.children());
        }
        kinds
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    ///
    /// Equals the recursion depth of a traversal.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Move this node's children into `out`, leaving leaf placeholders.
    fn detach_children(&mut self, out: &mut Vec<Node>) {
        let placeholder = || Node::Literal(Literal::ZERO);
        match self {
            Node::Literal(_) => {}
            Node::Plus(binary) | Node::Mul(binary) => {
                out.push(mem::replace(&mut *binary.left, placeholder()));
                out.push(mem::replace(&mut *binary.right, placeholder()));
            }
            Node::Paren(paren) => out.push(mem::replace(&mut *paren.inner, placeholder())),
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        enum Step<'a> {
            Visit(&'a Node),
            Build(&'a Node),
        }

        // Children are visited left then right, so their copies land on
        // `built` right then left and pop back off in order.
        let mut steps = vec![Step::Visit(self)];
        let mut built: Vec<Node> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Node::Literal(literal)) => built.push(Node::Literal(*literal)),
                Step::Visit(node) => {
                    steps.push(Step::Build(node));
                    steps.extend(node.children().map(Step::Visit));
                }
                // Only composites are scheduled for a build step.
                Step::Build(node) => {
                    let copy = match node.operator() {
                        Some(operator) => {
                            let (Some(left), Some(right)) = (built.pop(), built.pop()) else {
                                unreachable!("binary node cloned without both children");
                            };
                            Node::binary(operator, left, right)
                        }
                        None => {
                            let Some(inner) = built.pop() else {
                                unreachable!("paren cloned without its inner node");
                            };
                            Node::paren(inner)
                        }
                    };
                    built.push(copy);
                }
            }
        }
        let Some(root) = built.pop() else {
            unreachable!("clone produced no root");
        };
        root
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((lhs, rhs)) = pairs.pop() {
            match (lhs, rhs) {
                (Node::Literal(a), Node::Literal(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Node::Plus(_), Node::Plus(_))
                | (Node::Mul(_), Node::Mul(_))
                | (Node::Paren(_), Node::Paren(_)) => {
                    pairs.extend(lhs.children().zip(rhs.children()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Node::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Node::Plus(binary) => f.debug_tuple("Plus").field(binary).finish(),
            Node::Mul(binary) => f.debug_tuple("Mul").field(binary).finish(),
            Node::Paren(paren) => f.debug_tuple("Paren").field(paren).finish(),
        })
    }
}

// Iterative drop: the default recursive drop overflows on deep trees.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}
