//! Simplification rules for powers.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};

/// `a^0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |_, exponent| {
        if exponent.is_zero() {
            Some(Expr::Constant(1.0))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exponent| {
        if exponent.is_one() {
            Some(base.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// Evaluates a power of two constants, if the result is finite.
///
/// `2^3 = 8`
///
/// `(-8)^(1/3)` and `0^-1` are left alone, so that evaluating the expression still reports the
/// same error or infinity as before.
pub fn fold_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exponent| {
        let value = base.as_constant()?.powf(exponent.as_constant()?);
        value.is_finite().then_some(Expr::Constant(value))
    })?;

    step_collector.push(Step::FoldPower);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| fold_power(expr, step_collector))
}
