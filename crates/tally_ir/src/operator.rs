//! Binary arithmetic operators.

use std::fmt;

use crate::Error;

/// The operators a composite node can carry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Add,
    Mul,
}

impl Operator {
    /// Infix symbol, as printed between operands.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
        }
    }

    /// Combine two operands.
    ///
    /// Fails with [`Error::NonFinite`] when the result overflows.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, Error> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Mul => lhs * rhs,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::NonFinite { operator: self })
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
