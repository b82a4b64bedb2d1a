#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use super::Expr;

/// A comparison operator used by a [`Predicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Comparison {
    /// `<`
    Less,

    /// `<=`
    LessEq,

    /// `>`
    Greater,

    /// `>=`
    GreaterEq,

    /// `==`
    Eq,

    /// `!=`
    NotEq,
}

impl Comparison {
    /// Applies the comparison to the given values, following IEEE 754 semantics: every
    /// comparison involving `NaN` is false, except for [`Comparison::NotEq`].
    pub fn test(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Less => lhs < rhs,
            Self::LessEq => lhs <= rhs,
            Self::Greater => lhs > rhs,
            Self::GreaterEq => lhs >= rhs,
            Self::Eq => lhs == rhs,
            Self::NotEq => lhs != rhs,
        }
    }

    /// Returns the symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }
}

/// A condition on the input point: `lhs <cmp> rhs`, where `lhs` is an expression evaluated at
/// the point and `rhs` is a fixed threshold.
///
/// The predicate is evaluated wherever the owning [`Branch`] is evaluated, never when the branch
/// is built or differentiated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Predicate {
    /// The expression compared against the threshold.
    pub lhs: Expr,

    /// The comparison to apply.
    pub cmp: Comparison,

    /// The threshold.
    pub rhs: f64,
}

impl Predicate {
    /// Creates the predicate `lhs <cmp> rhs`.
    pub fn new(lhs: impl Into<Expr>, cmp: Comparison, rhs: f64) -> Self {
        Self { lhs: lhs.into(), cmp, rhs }
    }

    /// Creates the predicate `expr >= 0`.
    pub fn non_negative(expr: impl Into<Expr>) -> Self {
        Self::new(expr, Comparison::GreaterEq, 0.0)
    }
}

/// A conditional expression: `if_true` where the predicate holds, `if_false` elsewhere.
///
/// Only the selected arm is ever evaluated, so the other arm may be undefined at that point (for
/// example, the logarithm of a negative number guarded by a sign check).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Branch {
    /// The condition selecting the arm.
    pub predicate: Predicate,

    /// The arm selected where the predicate holds.
    pub if_true: Expr,

    /// The arm selected where the predicate does not hold.
    pub if_false: Expr,
}
