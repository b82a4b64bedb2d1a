//! Simplification rules for products, including combining powers of the same variable.

use crate::symbolic::{
    expr::{Expr, Variable},
    simplify::{rules::{do_product, downgrade_product}, simplify, step::Step},
    step_collector::StepCollector,
};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |factors| {
        if factors.iter().any(Expr::is_zero) {
            Some(Expr::Constant(0.0))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |factors| {
        let new_factors = factors.iter()
            .filter(|factor| !factor.is_one())
            .cloned()
            .collect::<Vec<_>>();

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(downgrade_product(new_factors))
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a*(b*c) = a*b*c`
pub fn flatten_product(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |factors| {
        if !factors.iter().any(|factor| matches!(factor, Expr::Product(_))) {
            return None;
        }

        let new_factors = factors.iter()
            .flat_map(|factor| match factor {
                Expr::Product(inner) => inner.to_vec(),
                factor => vec![factor.clone()],
            })
            .collect::<Vec<_>>();
        Some(downgrade_product(new_factors))
    })?;

    step_collector.push(Step::FlattenProduct);
    Some(opt)
}

/// Folds all constant factors into a single leading coefficient, which is omitted if it is `1`.
///
/// `2*a*3 = 6*a`
/// `2*a*0.5 = a`
pub fn fold_constant_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |factors| {
        let constants = factors.iter().filter(|factor| factor.as_constant().is_some()).count();
        let leading = factors.first().and_then(Expr::as_constant);
        let folded = match (constants, leading) {
            (0, _) => false,
            (1, Some(value)) => value == 1.0,
            _ => true,
        };
        if !folded {
            return None;
        }

        let mut coefficient = 1.0;
        let mut rest = Vec::with_capacity(factors.len() - constants);
        for factor in factors.iter() {
            match factor.as_constant() {
                Some(value) => coefficient *= value,
                None => rest.push(factor.clone()),
            }
        }

        if coefficient == 0.0 {
            return Some(Expr::Constant(0.0));
        }

        let mut new_factors = Vec::with_capacity(rest.len() + 1);
        if coefficient != 1.0 {
            new_factors.push(Expr::Constant(coefficient));
        }
        new_factors.extend(rest);
        Some(downgrade_product(new_factors))
    })?;

    step_collector.push(Step::FoldConstantFactors);
    Some(opt)
}

/// If the factor is a variable or a power of a variable, returns the variable and the exponent.
///
/// - `x` -> `(x, 1)`
/// - `x^a` -> `(x, a)`
fn variable_power(factor: &Expr) -> Option<(Variable, Expr)> {
    match factor {
        Expr::Variable(var) => Some((*var, Expr::Constant(1.0))),
        Expr::Power(base, exponent) => base.as_variable().map(|var| (var, (**exponent).clone())),
        _ => None,
    }
}

/// Combines powers of the same variable.
///
/// `x^a*x^b = x^(a+b)`
/// `x*y*x^2 = x^3*y`
///
/// The combined power takes the place of the first occurrence of its variable, and its exponent
/// is simplified.
pub fn combine_like_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |factors| {
        // each entry is a variable, paired with its exponents and the position of its first
        // occurrence in `new_factors`
        let mut groups: Vec<(Variable, Vec<Expr>, usize)> = Vec::new();
        let mut new_factors = Vec::with_capacity(factors.len());
        let mut combined = false;

        for factor in factors.iter() {
            let Some((var, exponent)) = variable_power(factor) else {
                new_factors.push(factor.clone());
                continue;
            };

            match groups.iter_mut().find(|(other, ..)| *other == var) {
                Some((_, exponents, _)) => {
                    exponents.push(exponent);
                    combined = true;
                },
                None => {
                    groups.push((var, vec![exponent], new_factors.len()));
                    new_factors.push(factor.clone());
                },
            }
        }

        if !combined {
            return None;
        }

        for (var, exponents, idx) in groups {
            if exponents.len() > 1 {
                new_factors[idx] = simplify(&Expr::pow(var, Expr::sum(exponents)));
            }
        }

        Some(downgrade_product(new_factors))
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// `() = 1`
/// `(a) = a`
pub fn unwrap_product(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |factors| {
        if factors.len() < 2 {
            Some(downgrade_product(factors.to_vec()))
        } else {
            None
        }
    })?;

    step_collector.push(Step::UnwrapProduct);
    Some(opt)
}

/// Applies all product rules.
///
/// All product rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| flatten_product(expr, step_collector))
        .or_else(|| fold_constant_factors(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
        .or_else(|| unwrap_product(expr, step_collector))
}
