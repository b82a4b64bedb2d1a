//! Simplification rules for sums.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::{do_sum, downgrade_sum}, step::Step},
    step_collector::StepCollector,
};

/// `a+(b+c) = a+b+c`
pub fn flatten_sum(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        if !terms.iter().any(|term| matches!(term, Expr::Sum(_))) {
            return None;
        }

        let new_terms = terms.iter()
            .flat_map(|term| match term {
                Expr::Sum(inner) => inner.to_vec(),
                term => vec![term.clone()],
            })
            .collect::<Vec<_>>();
        Some(downgrade_sum(new_terms))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FlattenSum);
    Some(opt)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        let new_terms = terms.iter()
            .filter(|term| !term.is_zero())
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(downgrade_sum(new_terms))
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Folds all constant terms into a single trailing constant, which is omitted if it is `0`.
///
/// `2+a+3 = a+5`
/// `2+a+-2 = a`
pub fn fold_constant_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        let constants = terms.iter().filter(|term| term.as_constant().is_some()).count();
        let trailing = terms.last().and_then(Expr::as_constant);
        let folded = match (constants, trailing) {
            (0, _) => false,
            (1, Some(value)) => value == 0.0,
            _ => true,
        };
        if !folded {
            return None;
        }

        let mut total = 0.0;
        let mut new_terms = Vec::with_capacity(terms.len() - constants + 1);
        for term in terms.iter() {
            match term.as_constant() {
                Some(value) => total += value,
                None => new_terms.push(term.clone()),
            }
        }

        if total != 0.0 {
            new_terms.push(Expr::Constant(total));
        }
        Some(downgrade_sum(new_terms))
    })?;

    step_collector.push(Step::FoldConstantTerms);
    Some(opt)
}

/// `() = 0`
/// `(a) = a`
pub fn unwrap_sum(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        if terms.len() < 2 {
            Some(downgrade_sum(terms.to_vec()))
        } else {
            None
        }
    })?;

    step_collector.push(Step::UnwrapSum);
    Some(opt)
}

/// Applies all sum rules.
///
/// All sum rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    flatten_sum(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| fold_constant_terms(expr, step_collector))
        .or_else(|| unwrap_sum(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn flatten() {
        let expr = Expr::sum([
            Expr::var(0),
            Expr::sum([Expr::var(1), Expr::var(2)]),
        ]);
        let mut steps = Vec::new();
        assert_eq!(
            flatten_sum(&expr, &mut steps),
            Some(Expr::sum([Expr::var(0), Expr::var(1), Expr::var(2)])),
        );
        assert_eq!(steps, vec![Step::FlattenSum]);
    }

    #[test]
    fn zeros() {
        let expr = Expr::sum([Expr::Constant(0.0), Expr::var(0), Expr::Constant(0.0)]);
        assert_eq!(add_zero(&expr, &mut ()), Some(Expr::var(0)));

        let expr = Expr::sum([Expr::Constant(0.0), Expr::Constant(0.0)]);
        assert_eq!(add_zero(&expr, &mut ()), Some(Expr::Constant(0.0)));
    }

    #[test]
    fn constants_move_to_the_end() {
        let expr = Expr::sum([Expr::Constant(2.0), Expr::var(0), Expr::Constant(3.0)]);
        assert_eq!(
            fold_constant_terms(&expr, &mut ()),
            Some(Expr::sum([Expr::var(0), Expr::Constant(5.0)])),
        );

        // already folded
        let expr = Expr::sum([Expr::var(0), Expr::Constant(5.0)]);
        assert_eq!(fold_constant_terms(&expr, &mut ()), None);
    }

    #[test]
    fn constants_cancel() {
        let expr = Expr::sum([Expr::Constant(2.0), Expr::var(0), Expr::Constant(-2.0)]);
        assert_eq!(fold_constant_terms(&expr, &mut ()), Some(Expr::var(0)));
    }

    #[test]
    fn unwrap() {
        assert_eq!(unwrap_sum(&Expr::sum([]), &mut ()), Some(Expr::Constant(0.0)));
        assert_eq!(unwrap_sum(&Expr::sum([Expr::var(3)]), &mut ()), Some(Expr::var(3)));
        assert_eq!(unwrap_sum(&(Expr::var(0) + Expr::var(1)), &mut ()), None);
    }
}
