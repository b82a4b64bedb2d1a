//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. A rule only looks at the node it is given; the children of that node are
//! expected to be simplified already.
//!
//! Every rule that returns `Some` pushes exactly one [`Step`] to the step collector, and every
//! rule strictly reduces the node it applies to, so applying rules until none apply terminates.

pub mod add;
pub mod branch;
pub mod function;
pub mod multiply;
pub mod power;

use crate::symbolic::{expr::Expr, step_collector::StepCollector};
use super::step::Step;

/// Builds a sum from the given terms, unwrapping the trivial cases.
///
/// - `[]` -> `0`
/// - `[a]` -> `a`
pub(crate) fn downgrade_sum(mut terms: Vec<Expr>) -> Expr {
    match terms.len() {
        0 => Expr::Constant(0.0),
        1 => terms.swap_remove(0),
        _ => Expr::Sum(terms.into()),
    }
}

/// Builds a product from the given factors, unwrapping the trivial cases.
///
/// - `[]` -> `1`
/// - `[a]` -> `a`
pub(crate) fn downgrade_product(mut factors: Vec<Expr>) -> Expr {
    match factors.len() {
        0 => Expr::Constant(1.0),
        1 => factors.swap_remove(0),
        _ => Expr::Product(factors.into()),
    }
}

/// If the expression is a sum, calls the given transformation function with the terms.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_sum(expr: &Expr, f: impl Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Sum(terms) = expr {
        f(terms)
    } else {
        None
    }
}

/// If the expression is a product, calls the given transformation function with the factors.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_product(expr: &Expr, f: impl Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Product(factors) = expr {
        f(factors)
    } else {
        None
    }
}

/// If the expression is a power, calls the given transformation function with the base and the
/// exponent.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_power(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Power(base, exponent) = expr {
        f(base, exponent)
    } else {
        None
    }
}

/// Applies all rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add::all(expr, step_collector)
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
        .or_else(|| function::all(expr, step_collector))
        .or_else(|| branch::all(expr, step_collector))
}
