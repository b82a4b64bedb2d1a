//! Simplification rules for branches.
//!
//! The predicate of a branch is never rewritten, so a simplified branch selects the same arm as
//! the original at every point.

use crate::symbolic::{expr::Expr, simplify::step::Step, step_collector::StepCollector};

/// `[p ? a : a] = a`
pub fn collapse_branch(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Branch(branch) = expr else {
        return None;
    };

    if branch.if_true != branch.if_false {
        return None;
    }

    step_collector.push(Step::CollapseBranch);
    Some(branch.if_true.clone())
}

/// Applies all branch rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    collapse_branch(expr, step_collector)
}
