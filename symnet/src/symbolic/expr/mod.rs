//! The symbolic expression tree.
//!
//! An [`Expr`] is a scalar function of an input vector (a "point"), built out of a small, closed
//! set of node kinds: variables, constants, sums, products, powers, a handful of elementary
//! functions, and [`Branch`]es that select between two sub-expressions based on a
//! [`Predicate`] evaluated at the point.
//!
//! # Sharing
//!
//! Expressions are immutable. Every child is held behind an [`Rc`], so cloning an [`Expr`] is
//! cheap and never copies the tree. This matters a lot for differentiation: the derivative of a
//! power, for example, embeds the original power node, and the product rule embeds the original
//! factors. Those embedded nodes are shared with the input tree rather than duplicated.
//!
//! # Equality
//!
//! The [`PartialEq`] implementation is **structural**: two expressions are equal if they are the
//! same kind of node with equal children, in the same order. `x0 + x1` and `x1 + x0` are not
//! equal, even though they are semantically equivalent. The simplifier only relies on structural
//! equality, so it can never report false positives.

mod branch;
mod fmt;
mod iter;

pub use branch::{Branch, Comparison, Predicate};
pub use fmt::RawDisplay;
pub use iter::ExprIter;

pub(crate) use fmt::Renderer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, ops::{Add, Mul, Neg, Sub}, rc::Rc};

/// An index into the input vector of an expression.
///
/// Variables are usually handed out by a [`Network`](crate::network::Network), which guarantees
/// that every index it allocates is unique and within the bounds of its state vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable(usize);

impl Variable {
    /// Creates a variable reading the component `index` of the input vector.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index of the component this variable reads.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// A symbolic scalar expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// Reads one component of the input vector.
    Variable(Variable),

    /// A fixed real number.
    Constant(f64),

    /// Zero or more terms added together. The empty sum is `0`.
    Sum(Rc<[Expr]>),

    /// Zero or more factors multiplied together. The empty product is `1`.
    Product(Rc<[Expr]>),

    /// A base raised to an exponent, `base^exponent`.
    Power(Rc<Expr>, Rc<Expr>),

    /// The natural logarithm.
    Log(Rc<Expr>),

    /// The absolute value.
    ///
    /// Its value is computed like a [`Branch`] on the sign of the argument, and its derivative is
    /// a [`Branch`] that re-checks the sign of the argument wherever it is evaluated.
    Abs(Rc<Expr>),

    /// Selects one of two expressions depending on a predicate evaluated at the point.
    Branch(Rc<Branch>),

    /// The hyperbolic tangent.
    Tanh(Rc<Expr>),

    /// The sine.
    Sin(Rc<Expr>),

    /// The cosine.
    Cos(Rc<Expr>),

    /// A transparent pass-through, used as the activation of output nodes.
    Identity(Rc<Expr>),
}

impl Expr {
    /// Creates an expression reading the component `index` of the input vector.
    pub fn var(index: usize) -> Self {
        Self::Variable(Variable::new(index))
    }

    /// Creates a constant expression.
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates the sum of the given terms.
    pub fn sum(terms: impl IntoIterator<Item = Expr>) -> Self {
        Self::Sum(terms.into_iter().collect())
    }

    /// Creates the product of the given factors.
    pub fn product(factors: impl IntoIterator<Item = Expr>) -> Self {
        Self::Product(factors.into_iter().collect())
    }

    /// Creates `base^exponent`.
    pub fn pow(base: impl Into<Expr>, exponent: impl Into<Expr>) -> Self {
        Self::Power(Rc::new(base.into()), Rc::new(exponent.into()))
    }

    /// Creates `ln(arg)`.
    pub fn ln(arg: impl Into<Expr>) -> Self {
        Self::Log(Rc::new(arg.into()))
    }

    /// Creates `|arg|`.
    pub fn abs(arg: impl Into<Expr>) -> Self {
        Self::Abs(Rc::new(arg.into()))
    }

    /// Creates `tanh(arg)`.
    pub fn tanh(arg: impl Into<Expr>) -> Self {
        Self::Tanh(Rc::new(arg.into()))
    }

    /// Creates `sin(arg)`.
    pub fn sin(arg: impl Into<Expr>) -> Self {
        Self::Sin(Rc::new(arg.into()))
    }

    /// Creates `cos(arg)`.
    pub fn cos(arg: impl Into<Expr>) -> Self {
        Self::Cos(Rc::new(arg.into()))
    }

    /// Wraps the argument in an [`Expr::Identity`] node.
    pub fn identity(arg: impl Into<Expr>) -> Self {
        Self::Identity(Rc::new(arg.into()))
    }

    /// Creates a branch selecting `if_true` where the predicate holds, and `if_false` elsewhere.
    pub fn branch(predicate: Predicate, if_true: impl Into<Expr>, if_false: impl Into<Expr>) -> Self {
        Self::Branch(Rc::new(Branch {
            predicate,
            if_true: if_true.into(),
            if_false: if_false.into(),
        }))
    }

    /// Creates `-1 * arg`.
    pub fn negate(arg: impl Into<Expr>) -> Self {
        Self::product([Self::Constant(-1.0), arg.into()])
    }

    /// Creates `arg^-1`.
    pub fn inverse(arg: impl Into<Expr>) -> Self {
        Self::pow(arg, Self::Constant(-1.0))
    }

    /// If the expression is a [`Expr::Constant`], returns its value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is exactly the constant `0`.
    pub fn is_zero(&self) -> bool {
        self.as_constant() == Some(0.0)
    }

    /// Returns true if the expression is exactly the constant `1`.
    pub fn is_one(&self) -> bool {
        self.as_constant() == Some(1.0)
    }

    /// If the expression is a [`Expr::Variable`], returns the variable.
    pub fn as_variable(&self) -> Option<Variable> {
        match self {
            Self::Variable(var) => Some(*var),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first). The predicate expression of a [`Branch`] is visited before its two
    /// arms.
    ///
    /// Shared sub-expressions are visited once per occurrence.
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree, counting shared sub-expressions once per
    /// occurrence.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the set of variables the expression reads, including those only read by branch
    /// predicates.
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.post_order_iter()
            .filter_map(Expr::as_variable)
            .collect()
    }

    /// Returns an adapter that displays the expression exactly as it was built, without
    /// simplifying it first.
    pub fn display_raw(&self) -> RawDisplay<'_> {
        RawDisplay(self)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Self::Variable(var)
    }
}

/// Adds two expressions. If the left-hand side is already an [`Expr::Sum`], the right-hand side
/// is appended to its terms instead of nesting.
impl<T: Into<Expr>> Add<T> for Expr {
    type Output = Expr;

    fn add(self, rhs: T) -> Self::Output {
        match self {
            Expr::Sum(terms) => Expr::sum(terms.iter().cloned().chain(std::iter::once(rhs.into()))),
            lhs => Expr::sum([lhs, rhs.into()]),
        }
    }
}

/// Multiplies two expressions. If the left-hand side is already an [`Expr::Product`], the
/// right-hand side is appended to its factors instead of nesting.
impl<T: Into<Expr>> Mul<T> for Expr {
    type Output = Expr;

    fn mul(self, rhs: T) -> Self::Output {
        match self {
            Expr::Product(factors) => Expr::product(factors.iter().cloned().chain(std::iter::once(rhs.into()))),
            lhs => Expr::product([lhs, rhs.into()]),
        }
    }
}

impl<T: Into<Expr>> Sub<T> for Expr {
    type Output = Expr;

    fn sub(self, rhs: T) -> Self::Output {
        self + Expr::negate(rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::negate(self)
    }
}

/// Implements the arithmetic operators for [`Variable`] by promoting it to an [`Expr`].
macro_rules! variable_ops {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl<T: Into<Expr>> $trait<T> for Variable {
                type Output = Expr;

                fn $method(self, rhs: T) -> Self::Output {
                    Expr::from(self).$method(rhs)
                }
            }
        )*
    };
}

variable_ops!(Add::add, Sub::sub, Mul::mul);

impl Neg for Variable {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::negate(self)
    }
}
