//! Simplification of expressions.
//!
//! [`simplify`] reduces an expression to a smaller, **semantically equivalent** one: the
//! simplified expression has the same value as the original at every point, and every branch in
//! it selects the same arm as the original did.
//!
//! Simplification works bottom-up. The children of a node are simplified first, then the rules
//! in [`rules`] are applied to the node until none of them apply. This is one pass; passes are
//! repeated until a pass applies no rule at all, or [`MAX_PASSES`] is reached. The result is a
//! fixed point of the rules, so simplifying it again changes nothing.
//!
//! The rules are deliberately conservative. They flatten and fold constants, drop neutral
//! elements, and combine powers of the same variable; they never reorder or expand terms, and
//! never look inside branch predicates.
//!
//! ```
//! use symnet::symbolic::{expr::{Expr, Variable}, simplify};
//!
//! // x * 1 * x^2 + 0
//! let x = Variable::new(0);
//! let expr = x * 1.0 * Expr::pow(x, 2.0) + 0.0;
//! assert_eq!(simplify(&expr), Expr::pow(x, 3.0));
//! ```

pub mod rules;
pub mod step;

use crate::symbolic::{expr::Expr, step_collector::StepCollector};
pub use step::Step;

/// The maximum number of bottom-up passes [`simplify`] makes over an expression.
pub const MAX_PASSES: usize = 64;

/// Forwards the steps of a single pass, remembering whether any rule fired.
struct Pass<'a> {
    inner: &'a mut dyn StepCollector<Step>,
    changed: bool,
}

impl StepCollector<Step> for Pass<'_> {
    fn push(&mut self, step: Step) {
        self.changed = true;
        self.inner.push(step);
    }
}

/// Simplifies the children of the expression, leaving the node itself alone.
///
/// The lhs of a branch predicate is not a child here; predicates are kept exactly as built.
fn simplify_children(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match expr {
        Expr::Variable(_) | Expr::Constant(_) => expr.clone(),
        Expr::Sum(terms) => Expr::sum(terms.iter().map(|term| simplify_node(term, step_collector))),
        Expr::Product(factors) => Expr::product(factors.iter().map(|factor| simplify_node(factor, step_collector))),
        Expr::Power(base, exponent) => {
            let base = simplify_node(base, step_collector);
            Expr::pow(base, simplify_node(exponent, step_collector))
        },
        Expr::Log(arg) => Expr::ln(simplify_node(arg, step_collector)),
        Expr::Abs(arg) => Expr::abs(simplify_node(arg, step_collector)),
        Expr::Tanh(arg) => Expr::tanh(simplify_node(arg, step_collector)),
        Expr::Sin(arg) => Expr::sin(simplify_node(arg, step_collector)),
        Expr::Cos(arg) => Expr::cos(simplify_node(arg, step_collector)),
        Expr::Identity(arg) => Expr::identity(simplify_node(arg, step_collector)),
        Expr::Branch(branch) => {
            let if_true = simplify_node(&branch.if_true, step_collector);
            let if_false = simplify_node(&branch.if_false, step_collector);
            Expr::branch(branch.predicate.clone(), if_true, if_false)
        },
    }
}

/// Simplifies the children of the expression, then applies rules to it until none apply.
fn simplify_node(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let mut expr = simplify_children(expr, step_collector);
    while let Some(next) = rules::all(&expr, step_collector) {
        expr = next;
    }
    expr
}

/// Simplifies the given expression.
///
/// See the [module-level documentation](self) for more information.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, reporting every rule applied to the given step collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let mut expr = expr.clone();
    for _ in 0..MAX_PASSES {
        let mut pass = Pass { inner: &mut *step_collector, changed: false };
        expr = simplify_node(&expr, &mut pass);
        if !pass.changed {
            break;
        }
    }
    expr
}

/// Simplifies the given expression, returning the simplified expression and the steps taken.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = simplify_with(expr, &mut steps);
    (expr, steps)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};
    use crate::symbolic::{
        derivative::partial,
        expr::{Comparison, Predicate, Variable},
    };
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Variable {
        Variable::new(0)
    }

    fn y() -> Variable {
        Variable::new(1)
    }

    /// A handful of expressions covering every kind of node.
    fn samples() -> Vec<Expr> {
        vec![
            Expr::pow(x(), 2.0) * y() + Expr::pow(y(), 2.0) + 7.0,
            Expr::product([Expr::Constant(2.0), Expr::sum([Expr::var(0), Expr::Constant(0.0)]), Expr::Constant(3.0)]),
            Expr::tanh(Expr::identity(x() * 2.0 + y() * 1.0 + 0.0)),
            Expr::ln(Expr::pow(x(), 2.0) + 1.0) * Expr::sin(y()) - Expr::cos(x() * y()),
            Expr::abs(x() - y()) * Expr::pow(x(), Expr::Constant(1.0)),
            Expr::branch(
                Predicate::new(x() - y(), Comparison::Less, 0.0),
                Expr::pow(x(), 2.0) * Expr::pow(x(), 3.0),
                Expr::product([Expr::Constant(1.0), Expr::var(1), Expr::pow(2.0, 3.0)]),
            ),
            partial(&Expr::pow(Expr::pow(x(), 2.0) + y(), 3.0), x()),
            partial(&partial(&Expr::tanh(x() * y() + 0.5), x()), y()),
        ]
    }

    const POINTS: [[f64; 2]; 4] = [[0.5, 2.0], [-1.5, 0.25], [3.0, -2.0], [1.0, 1.0]];

    #[test]
    fn preserves_value() {
        for expr in samples() {
            let simplified = simplify(&expr);
            for point in POINTS {
                assert_float_absolute_eq!(
                    simplified.eval(&point).unwrap(),
                    expr.eval(&point).unwrap(),
                    1e-9
                );
            }
        }
    }

    #[test]
    fn idempotent() {
        for expr in samples() {
            let once = simplify(&expr);
            let twice = simplify(&once);
            assert_eq!(once.display_raw().to_string(), twice.display_raw().to_string());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn empty_sum_and_product() {
        assert_eq!(simplify(&Expr::sum([])), Expr::Constant(0.0));
        assert_eq!(simplify(&Expr::product([])), Expr::Constant(1.0));
    }

    #[test]
    fn zero_factor_absorbs_everything() {
        let expr = Expr::product([
            Expr::tanh(Expr::ln(x() + y())),
            Expr::pow(x(), y()),
            Expr::sum([Expr::Constant(1.0), Expr::Constant(-1.0)]),
        ]);
        assert_eq!(simplify(&expr), Expr::Constant(0.0));
    }

    #[test]
    fn merges_exponents() {
        // x^a * x^b = x^(a + b)
        let (a, b) = (Variable::new(2), Variable::new(3));
        let expr = Expr::pow(x(), a) * Expr::pow(x(), b);
        assert_eq!(simplify(&expr), Expr::pow(x(), a + b));

        // x^2 * y * x^3 = x^5 * y
        let expr = Expr::pow(x(), 2.0) * y() * Expr::pow(x(), 3.0);
        assert_eq!(simplify(&expr), Expr::product([Expr::pow(x(), 5.0), y().into()]));
    }

    #[test]
    fn sums() {
        // (x + 2) + (0 + 3) = x + 5
        let expr = Expr::sum([
            x() + 2.0,
            Expr::sum([Expr::Constant(0.0), Expr::Constant(3.0)]),
        ]);
        assert_eq!(simplify(&expr), x() + 5.0);
    }

    #[test]
    fn powers() {
        assert_eq!(simplify(&Expr::pow(x() + y(), 0.0)), Expr::Constant(1.0));
        assert_eq!(simplify(&Expr::pow(x() + y(), Expr::sum([]) + 1.0)), x() + y());
        assert_eq!(simplify(&Expr::pow(Expr::Constant(3.0), 2.0)), Expr::Constant(9.0));
    }

    #[test]
    fn functions() {
        assert_eq!(simplify(&Expr::identity(x())), Expr::var(0));
        assert_eq!(simplify(&Expr::tanh(Expr::identity(0.0))), Expr::Constant(0.0));
        assert_eq!(simplify(&Expr::ln(x() * 1.0)), Expr::ln(x()));
    }

    #[test]
    fn branch_predicate_untouched() {
        let predicate = Predicate::new(x() * 1.0 + 0.0, Comparison::GreaterEq, 0.0);
        let expr = Expr::branch(predicate.clone(), x() * 1.0, y() + 0.0);
        assert_eq!(simplify(&expr), Expr::branch(predicate, x(), y()));
    }

    #[test]
    fn branch_equal_arms() {
        let predicate = Predicate::new(x(), Comparison::Eq, 0.0);
        let expr = Expr::branch(predicate, y() * 1.0, y() + 0.0);
        assert_eq!(simplify(&expr), Expr::var(1));
    }

    #[test]
    fn derivative_of_square() {
        // d/dx x^2 = x^2 * (0 * ln|x| + 1 * x^-1 * 2) = 2 * x
        let derivative = partial(&Expr::pow(x(), 2.0), x());
        let (simplified, steps) = simplify_with_steps(&derivative);
        assert_eq!(simplified, Expr::product([Expr::Constant(2.0), x().into()]));
        assert!(steps.contains(&Step::MultiplyZero));
        assert!(steps.contains(&Step::CombineLikeFactors));
    }

    #[test]
    fn steps_are_reported() {
        let expr = Expr::sum([Expr::var(0), Expr::Constant(0.0)]);
        let (simplified, steps) = simplify_with_steps(&expr);
        assert_eq!(simplified, Expr::var(0));
        assert_eq!(steps, vec![Step::AddZero]);
    }

    #[test]
    fn shrinks_derivatives() {
        let expr = Expr::tanh(Expr::var(1) * x() + Expr::var(2));
        let derivative = partial(&partial(&expr, x()), x());
        assert!(simplify(&derivative).node_count() < derivative.node_count());
    }
}
