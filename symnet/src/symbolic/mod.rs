//! Symbolic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Expr`] nodes over a set of indexed [`Variable`]s.
//! Sums and products hold any number of children, so `x + y + z` is a single [`Expr::Sum`] with
//! three terms. The arithmetic operators build expressions directly, appending to the left-hand
//! side when it is already a sum or product:
//!
//! ```
//! use symnet::symbolic::expr::{Expr, Variable};
//!
//! let (x, y, z) = (Variable::new(0), Variable::new(1), Variable::new(2));
//! assert_eq!(x + y + z, Expr::sum([Expr::var(0), Expr::var(1), Expr::var(2)]));
//! ```
//!
//! # Differentiation
//!
//! [`partial`] computes the exact partial derivative of an expression with respect to one
//! variable, as a new expression. [`laplace`] sums the unmixed second partials over a set of
//! variables. Neither simplifies its result.
//!
//! # Simplification
//!
//! Raw derivatives grow quickly: the product rule alone makes the derivative of an `n`-factor
//! product roughly quadratic in size. [`simplify()`] folds constants, drops neutral elements and
//! combines powers of the same variable, which keeps derivatives small enough to differentiate
//! again and to evaluate many times.
//!
//! ```
//! use symnet::symbolic::{expr::{Expr, Variable}, partial, simplify};
//!
//! // d/dx x^2 = 2 * x
//! let x = Variable::new(0);
//! let derivative = partial(&Expr::pow(x, 2.0), x);
//! assert_eq!(simplify(&derivative), Expr::product([Expr::Constant(2.0), Expr::var(0)]));
//! ```
//!
//! For more information, see the [`mod@simplify`] module.

pub mod derivative;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use derivative::{laplace, partial};
pub use expr::{Expr, Variable};
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
