//! Symbolic derivatives of the elementary functions and branches, each including the chain rule.

use crate::symbolic::expr::{Branch, Expr, Predicate, Variable};
use super::partial;

/// Computes the derivative of a function or branch node, applying the chain rule to its argument.
///
/// The arithmetic variants are handled by [`partial`] directly; they are forwarded back to it so
/// that this function is total.
pub(super) fn function_derivative(expr: &Expr, with: Variable) -> Expr {
    match expr {
        // (ln f)' = f' * f^-1
        Expr::Log(arg) => Expr::product([partial(arg, with), Expr::inverse((**arg).clone())]),

        // |f|' = f' where f >= 0, (-f)' elsewhere
        Expr::Abs(arg) => Expr::branch(
            Predicate::non_negative((**arg).clone()),
            partial(arg, with),
            partial(&Expr::negate((**arg).clone()), with),
        ),

        Expr::Branch(branch) => branch_derivative(branch, with),

        // (tanh f)' = f' * (1 - tanh(f)^2)
        Expr::Tanh(arg) => Expr::product([
            partial(arg, with),
            Expr::sum([
                Expr::Constant(1.0),
                Expr::negate(Expr::pow(expr.clone(), 2.0)),
            ]),
        ]),

        // (sin f)' = f' * cos(f)
        Expr::Sin(arg) => Expr::product([partial(arg, with), Expr::cos((**arg).clone())]),

        // (cos f)' = f' * -sin(f)
        Expr::Cos(arg) => Expr::product([
            partial(arg, with),
            Expr::negate(Expr::sin((**arg).clone())),
        ]),

        Expr::Identity(arg) => partial(arg, with),

        Expr::Variable(_)
            | Expr::Constant(_)
            | Expr::Sum(_)
            | Expr::Product(_)
            | Expr::Power(..) => partial(expr, with),
    }
}

/// Differentiates both arms under the unchanged predicate.
///
/// The predicate is evaluated wherever the derivative is evaluated, so the derivative follows the
/// same arm as the original expression at every point. The jump at the boundary of the predicate
/// contributes nothing.
fn branch_derivative(branch: &Branch, with: Variable) -> Expr {
    Expr::branch(
        branch.predicate.clone(),
        partial(&branch.if_true, with),
        partial(&branch.if_false, with),
    )
}
