//! Simplification rules for the elementary functions.

use crate::symbolic::{expr::Expr, simplify::step::Step, step_collector::StepCollector};

/// Evaluates a function of a constant, if the result is finite.
///
/// `ln(1) = 0`
/// `tanh(0) = 0`
/// `|-2| = 2`
///
/// `ln(0)` and `ln(-1)` are left alone, so that evaluating the expression still produces the
/// same infinity or `NaN`.
pub fn fold_function(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let value = match expr {
        Expr::Log(arg) => arg.as_constant()?.ln(),
        Expr::Abs(arg) => arg.as_constant()?.abs(),
        Expr::Tanh(arg) => arg.as_constant()?.tanh(),
        Expr::Sin(arg) => arg.as_constant()?.sin(),
        Expr::Cos(arg) => arg.as_constant()?.cos(),
        _ => return None,
    };
    if !value.is_finite() {
        return None;
    }

    step_collector.push(Step::FoldFunction);
    Some(Expr::Constant(value))
}

/// `id(a) = a`
pub fn unwrap_identity(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Identity(arg) = expr else {
        return None;
    };

    step_collector.push(Step::UnwrapIdentity);
    Some((**arg).clone())
}

/// Applies all function rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_function(expr, step_collector)
        .or_else(|| unwrap_identity(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn constant_arguments() {
        assert_eq!(fold_function(&Expr::ln(1.0), &mut ()), Some(Expr::Constant(0.0)));
        assert_eq!(fold_function(&Expr::tanh(0.0), &mut ()), Some(Expr::Constant(0.0)));
        assert_eq!(fold_function(&Expr::abs(-2.0), &mut ()), Some(Expr::Constant(2.0)));
        assert_eq!(fold_function(&Expr::cos(0.0), &mut ()), Some(Expr::Constant(1.0)));
    }

    #[test]
    fn non_finite_left_alone() {
        assert_eq!(fold_function(&Expr::ln(0.0), &mut ()), None);
        assert_eq!(fold_function(&Expr::ln(-1.0), &mut ()), None);
        assert_eq!(fold_function(&Expr::sin(Expr::var(0)), &mut ()), None);
    }

    #[test]
    fn identity() {
        let mut steps = Vec::new();
        let expr = Expr::identity(Expr::var(0) + 1.0);
        assert_eq!(unwrap_identity(&expr, &mut steps), Some(Expr::var(0) + 1.0));
        assert_eq!(steps, vec![Step::UnwrapIdentity]);
    }
}
