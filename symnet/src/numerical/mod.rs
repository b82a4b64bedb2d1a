//! Numerical evaluation of expressions at a point.
//!
//! Evaluation is a plain structural recursion over the tree. There are two things worth knowing:
//!
//! - [`Expr::Product`] stops evaluating its factors as soon as one of them evaluates to exactly
//!   `0`, and returns `0`. This is purely an evaluation shortcut; it is not relied upon by the
//!   differentiator, which always differentiates every factor.
//! - [`Expr::Branch`] evaluates its predicate first and then **only** the selected arm. The other
//!   arm may well be undefined at the point.
//!
//! Logarithms of zero or negative numbers are not errors; they produce `-inf` / `NaN` following
//! IEEE 754, and those values propagate. The only evaluation errors are reading a variable
//! outside the point ([`VariableOutOfRange`]) and raising a negative base to a non-integral
//! exponent ([`NegativeBase`]).

pub mod error;

use crate::symbolic::expr::{Expr, Predicate, Renderer};
use error::{NegativeBase, VariableOutOfRange};
use symnet_error::{Error, ErrorKind};

/// An error raised by a sub-expression, not yet located in the rendering of the whole tree.
struct Fault {
    node: Expr,
    kind: Box<dyn ErrorKind>,
}

impl Fault {
    fn new(node: &Expr, kind: impl ErrorKind + 'static) -> Self {
        Self { node: node.clone(), kind: Box::new(kind) }
    }

    /// Renders the root expression and points the error at the faulting node.
    fn into_error(self, root: &Expr) -> Error {
        let (source, span) = Renderer::locating(&self.node).render(root);
        let span = span.unwrap_or(0..source.len());
        Error { source, spans: vec![span], kind: self.kind }
    }
}

impl Expr {
    /// Evaluates the expression at the given point.
    ///
    /// Component `i` of `point` is the value of [`Variable`](crate::symbolic::expr::Variable)
    /// `i`. Returns [`Err`] if a variable is out of range, or if a negative base is raised to a
    /// non-integral exponent.
    pub fn eval(&self, point: &[f64]) -> Result<f64, Error> {
        eval_node(self, point).map_err(|fault| fault.into_error(self))
    }
}

impl Predicate {
    /// Returns true if the predicate holds at the given point.
    pub fn holds(&self, point: &[f64]) -> Result<bool, Error> {
        eval_predicate(self, point).map_err(|fault| fault.into_error(&self.lhs))
    }
}

/// Evaluates the expression at the given point. See [`Expr::eval`].
pub fn value(expr: &Expr, point: &[f64]) -> Result<f64, Error> {
    expr.eval(point)
}

fn eval_predicate(predicate: &Predicate, point: &[f64]) -> Result<bool, Fault> {
    let lhs = eval_node(&predicate.lhs, point)?;
    Ok(predicate.cmp.test(lhs, predicate.rhs))
}

fn eval_node(expr: &Expr, point: &[f64]) -> Result<f64, Fault> {
    let value = match expr {
        Expr::Variable(var) => point.get(var.index())
            .copied()
            .ok_or_else(|| Fault::new(expr, VariableOutOfRange {
                index: var.index(),
                len: point.len(),
            }))?,
        Expr::Constant(value) => *value,
        Expr::Sum(terms) => {
            let mut total = 0.0;
            for term in terms.iter() {
                total += eval_node(term, point)?;
            }
            total
        },
        Expr::Product(factors) => {
            let mut total = 1.0;
            for factor in factors.iter() {
                let value = eval_node(factor, point)?;
                if value == 0.0 {
                    return Ok(0.0);
                }
                total *= value;
            }
            total
        },
        Expr::Power(base, exponent) => {
            let base_value = eval_node(base, point)?;
            let exponent_value = eval_node(exponent, point)?;
            if base_value < 0.0 && exponent_value.is_finite() && exponent_value.fract() != 0.0 {
                return Err(Fault::new(expr, NegativeBase {
                    base: base_value,
                    exponent: exponent_value,
                }));
            }
            base_value.powf(exponent_value)
        },
        Expr::Log(arg) => eval_node(arg, point)?.ln(),
        Expr::Abs(arg) => {
            let value = eval_node(arg, point)?;
            if value >= 0.0 {
                value
            } else {
                -value
            }
        },
        Expr::Tanh(arg) => eval_node(arg, point)?.tanh(),
        Expr::Sin(arg) => eval_node(arg, point)?.sin(),
        Expr::Cos(arg) => eval_node(arg, point)?.cos(),
        Expr::Identity(arg) => eval_node(arg, point)?,
        Expr::Branch(branch) => {
            if eval_predicate(&branch.predicate, point)? {
                eval_node(&branch.if_true, point)?
            } else {
                eval_node(&branch.if_false, point)?
            }
        },
    };

    Ok(value)
}
