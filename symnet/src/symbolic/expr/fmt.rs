//! Text rendering of expressions.
//!
//! [`Display`] for [`Expr`] renders the **simplified** tree, so printed forms reflect the reduced
//! expression. Use [`Expr::display_raw`] to render a tree exactly as it was built.

use crate::symbolic::simplify::simplify;
use std::{fmt::{self, Display}, ops::Range};
use super::Expr;

/// Renders an expression into a string, optionally recording where a target sub-expression
/// ended up in the output.
pub(crate) struct Renderer<'a> {
    out: String,
    target: Option<&'a Expr>,
    found: Option<Range<usize>>,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self { out: String::new(), target: None, found: None }
    }

    /// Creates a renderer that records the span of the first sub-expression structurally equal
    /// to `target`.
    pub fn locating(target: &'a Expr) -> Self {
        Self { out: String::new(), target: Some(target), found: None }
    }

    /// Renders the expression, returning the text and the span of the target, if it was found.
    pub fn render(mut self, expr: &Expr) -> (String, Option<Range<usize>>) {
        self.expr(expr);
        (self.out, self.found)
    }

    /// Returns true if the expression does not need parentheses around it when used as the base
    /// (or exponent, if `base` is false) of a power.
    fn is_atom(expr: &Expr, base: bool) -> bool {
        match expr {
            Expr::Constant(value) => !base || *value >= 0.0,
            Expr::Power(..) => false,
            Expr::Identity(inner) => Self::is_atom(inner, base),
            _ => true,
        }
    }

    fn operand(&mut self, expr: &Expr, base: bool) {
        if Self::is_atom(expr, base) {
            self.expr(expr);
        } else {
            self.out.push('(');
            self.expr(expr);
            self.out.push(')');
        }
    }

    fn list(&mut self, items: &[Expr], sep: &str, empty: &str) {
        if items.is_empty() {
            self.out.push_str(empty);
            return;
        }

        self.out.push('(');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(sep);
            }
            self.expr(item);
        }
        self.out.push(')');
    }

    fn call(&mut self, name: &str, arg: &Expr) {
        self.out.push_str(name);
        self.out.push('(');
        self.expr(arg);
        self.out.push(')');
    }

    fn expr(&mut self, expr: &Expr) {
        let start = self.out.len();
        match expr {
            Expr::Variable(var) => self.out.push_str(&var.to_string()),
            Expr::Constant(value) => self.out.push_str(&value.to_string()),
            Expr::Sum(terms) => self.list(terms, " + ", "0"),
            Expr::Product(factors) => self.list(factors, " * ", "1"),
            Expr::Power(base, exponent) => {
                self.operand(base, true);
                self.out.push('^');
                self.operand(exponent, false);
            },
            Expr::Log(arg) => self.call("ln", arg),
            Expr::Tanh(arg) => self.call("tanh", arg),
            Expr::Sin(arg) => self.call("sin", arg),
            Expr::Cos(arg) => self.call("cos", arg),
            Expr::Abs(arg) => {
                self.out.push('|');
                self.expr(arg);
                self.out.push('|');
            },
            Expr::Identity(arg) => self.expr(arg),
            Expr::Branch(branch) => {
                self.out.push('[');
                self.expr(&branch.predicate.lhs);
                self.out.push(' ');
                self.out.push_str(branch.predicate.cmp.symbol());
                self.out.push(' ');
                self.out.push_str(&branch.predicate.rhs.to_string());
                self.out.push_str(" ? ");
                self.expr(&branch.if_true);
                self.out.push_str(" : ");
                self.expr(&branch.if_false);
                self.out.push(']');
            },
        }

        if self.found.is_none() && self.target.is_some_and(|target| target == expr) {
            self.found = Some(start..self.out.len());
        }
    }
}

/// Displays an expression exactly as it was built.
///
/// This type is created by [`Expr::display_raw`].
pub struct RawDisplay<'a>(pub(super) &'a Expr);

impl Display for RawDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (text, _) = Renderer::new().render(self.0);
        f.write_str(&text)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (text, _) = Renderer::new().render(&simplify(self));
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::expr::{Comparison, Predicate, Variable};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn raw_sum_and_product() {
        let expr = Expr::sum([
            Expr::product([Expr::pow(Expr::var(0), 2.0), Expr::var(1)]),
            Expr::pow(Expr::var(1), 2.0),
            Expr::Constant(7.0),
        ]);
        assert_eq!(expr.display_raw().to_string(), "((x0^2 * x1) + x1^2 + 7)");
    }

    #[test]
    fn raw_power_operands() {
        let expr = Expr::pow(Expr::pow(Expr::var(0), 2.0), Expr::Constant(-1.0));
        assert_eq!(expr.display_raw().to_string(), "(x0^2)^-1");

        let expr = Expr::pow(Expr::Constant(-2.0), Expr::var(0));
        assert_eq!(expr.display_raw().to_string(), "(-2)^x0");
    }

    #[test]
    fn raw_functions() {
        let expr = Expr::tanh(Expr::ln(Expr::abs(Variable::new(3))));
        assert_eq!(expr.display_raw().to_string(), "tanh(ln(|x3|))");
    }

    #[test]
    fn raw_branch() {
        let expr = Expr::branch(Predicate::non_negative(Expr::var(0)), Expr::var(0), -Expr::var(0));
        assert_eq!(expr.display_raw().to_string(), "[x0 >= 0 ? x0 : (-1 * x0)]");

        let expr = Expr::branch(
            Predicate::new(Expr::var(1), Comparison::Eq, 0.5),
            1.0,
            0.0,
        );
        assert_eq!(expr.display_raw().to_string(), "[x1 == 0.5 ? 1 : 0]");
    }

    #[test]
    fn display_simplifies() {
        let expr = Expr::sum([
            Expr::product([Expr::Constant(1.0), Expr::var(0)]),
            Expr::Constant(0.0),
        ]);
        assert_eq!(expr.to_string(), "x0");
    }

    #[test]
    fn locate_target() {
        let target = Expr::pow(Expr::var(1), 0.5);
        let expr = Expr::var(0) + target.clone();
        let (text, span) = Renderer::locating(&target).render(&expr);
        assert_eq!(text, "(x0 + x1^0.5)");
        assert_eq!(&text[span.unwrap()], "x1^0.5");
    }
}
