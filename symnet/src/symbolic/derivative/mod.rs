//! Symbolic partial derivatives.
//!
//! [`partial`] returns a **new expression** representing the exact partial derivative of its
//! input with respect to one variable. The result is built mechanically, rule by rule, and is not
//! simplified; pass it through [`simplify`](crate::symbolic::simplify()) to keep it small. Higher
//! order derivatives are obtained by differentiating the result again.

mod function;

use crate::symbolic::expr::{Expr, Variable};

/// `(f + g)' = f' + g'`
fn sum_rule(terms: &[Expr], with: Variable) -> Expr {
    Expr::sum(terms.iter().map(|term| partial(term, with)))
}

/// `(f * g * h)' = f' * (g * h) + f * (g * h)'`
///
/// The head factor is split off and the tail is differentiated recursively as a single combined
/// factor. The empty product is the constant `1`, so its derivative is `0`.
fn product_rule(factors: &[Expr], with: Variable) -> Expr {
    let Some((head, tail)) = factors.split_first() else {
        return Expr::Constant(0.0);
    };

    let tail = Expr::product(tail.iter().cloned());
    Expr::sum([
        Expr::product([partial(head, with), tail.clone()]),
        Expr::product([head.clone(), partial(&tail, with)]),
    ])
}

/// `(f^g)' = f^g * (g' * ln|f| + f' * f^-1 * g)`
///
/// This is the general logarithmic differentiation formula. It covers a variable base and a
/// variable exponent at the same time, and is used even when the exponent is constant.
fn power_rule(power: &Expr, base: &Expr, exponent: &Expr, with: Variable) -> Expr {
    Expr::product([
        power.clone(),
        Expr::sum([
            Expr::product([partial(exponent, with), Expr::ln(Expr::abs(base.clone()))]),
            Expr::product([partial(base, with), Expr::inverse(base.clone()), exponent.clone()]),
        ]),
    ])
}

/// Computes the partial derivative of the given expression with respect to the given variable.
///
/// Differentiating a [`Branch`](crate::symbolic::expr::Branch) differentiates both arms under
/// the same predicate. This is a sub-gradient: it is exact away from the boundary of the
/// predicate, and ignores the boundary itself.
pub fn partial(expr: &Expr, with: Variable) -> Expr {
    match expr {
        Expr::Variable(var) => {
            if *var == with {
                Expr::Constant(1.0)
            } else {
                Expr::Constant(0.0)
            }
        },
        Expr::Constant(_) => Expr::Constant(0.0),
        Expr::Sum(terms) => sum_rule(terms, with),
        Expr::Product(factors) => product_rule(factors, with),
        Expr::Power(base, exponent) => power_rule(expr, base, exponent, with),
        _ => function::function_derivative(expr, with),
    }
}

/// Computes the Laplacian of the given expression over the given variables: the sum of the
/// unmixed second partial derivatives.
///
/// `laplace(f, [x, y]) = ∂²f/∂x² + ∂²f/∂y²`
pub fn laplace(expr: &Expr, vars: &[Variable]) -> Expr {
    Expr::sum(vars.iter().map(|&var| partial(&partial(expr, var), var)))
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};
    use crate::symbolic::{
        expr::{Comparison, Predicate},
        simplify::simplify,
    };
    use super::*;

    /// Step size of the central finite difference.
    const H: f64 = 1e-5;

    /// Tolerance between the symbolic and numerical derivatives.
    const TOL: f64 = 1e-4;

    /// Approximates the partial derivative of the expression with a central finite difference.
    fn finite_difference(expr: &Expr, with: Variable, point: &[f64]) -> f64 {
        let mut forward = point.to_vec();
        let mut backward = point.to_vec();
        forward[with.index()] += H;
        backward[with.index()] -= H;
        (expr.eval(&forward).unwrap() - expr.eval(&backward).unwrap()) / (2.0 * H)
    }

    /// Checks the symbolic derivative, raw and simplified, against a finite difference at every
    /// point, for every variable.
    fn check(expr: &Expr, points: &[&[f64]]) {
        for point in points {
            for index in 0..point.len() {
                let with = Variable::new(index);
                let symbolic = partial(expr, with);
                let numerical = finite_difference(expr, with, point);

                let raw = symbolic.eval(point).unwrap();
                assert!(
                    (raw - numerical).abs() < TOL,
                    "d/d{with} of {} at {point:?}: symbolic {raw}, numerical {numerical}",
                    expr.display_raw(),
                );

                let simplified = simplify(&symbolic).eval(point).unwrap();
                assert!(
                    (simplified - numerical).abs() < TOL,
                    "simplified d/d{with} of {} at {point:?}: symbolic {simplified}, numerical {numerical}",
                    expr.display_raw(),
                );
            }
        }
    }

    fn x() -> Variable {
        Variable::new(0)
    }

    fn y() -> Variable {
        Variable::new(1)
    }

    #[test]
    fn variable_and_constant() {
        assert_eq!(partial(&Expr::var(0), x()), Expr::Constant(1.0));
        assert_eq!(partial(&Expr::var(1), x()), Expr::Constant(0.0));
        assert_eq!(partial(&Expr::Constant(4.0), x()), Expr::Constant(0.0));
    }

    #[test]
    fn empty_product() {
        assert_eq!(partial(&Expr::product([]), x()), Expr::Constant(0.0));
    }

    #[test]
    fn square() {
        let expr = Expr::pow(x(), 2.0);
        assert_float_absolute_eq!(partial(&expr, x()).eval(&[3.0]).unwrap(), 6.0);
    }

    #[test]
    fn square_at_zero() {
        // `ln|0|` appears in the raw derivative; the product shortcut keeps it from poisoning the
        // value
        let expr = Expr::pow(x(), 2.0);
        assert_eq!(partial(&expr, x()).eval(&[0.0]).unwrap(), 0.0);
    }

    #[test]
    fn polynomial_two_variables() {
        let expr = Expr::pow(x(), 2.0) * y() + Expr::pow(y(), 2.0) + 7.0;
        assert_float_absolute_eq!(partial(&expr, x()).eval(&[2.0, 3.0]).unwrap(), 12.0);
        assert_float_absolute_eq!(partial(&expr, y()).eval(&[2.0, 3.0]).unwrap(), 10.0);
    }

    #[test]
    fn second_partials() {
        let expr = Expr::pow(x(), 2.0) * y() + Expr::pow(y(), 2.0) + 7.0;
        let point = [0.7, 0.3];
        let dxx = partial(&partial(&expr, x()), x());
        let dxy = partial(&partial(&expr, x()), y());
        let dyx = partial(&partial(&expr, y()), x());
        assert_float_absolute_eq!(dxx.eval(&point).unwrap(), 2.0 * 0.3);
        assert_float_absolute_eq!(dxy.eval(&point).unwrap(), 2.0 * 0.7);
        assert_float_absolute_eq!(dyx.eval(&point).unwrap(), 2.0 * 0.7);
    }

    #[test]
    fn laplacian() {
        // laplace(x^3 + x*y^2) = 6x + 2x
        let expr = Expr::pow(x(), 3.0) + x() * Expr::pow(y(), 2.0);
        let lap = laplace(&expr, &[x(), y()]);
        assert_float_absolute_eq!(lap.eval(&[1.5, 0.5]).unwrap(), 12.0);
        assert_float_absolute_eq!(simplify(&lap).eval(&[1.5, 0.5]).unwrap(), 12.0);
    }

    #[test]
    fn products() {
        let expr = Expr::product([Expr::var(0), Expr::var(1), Expr::var(0), Expr::Constant(3.0)]);
        check(&expr, &[&[0.5, 2.0], &[-1.5, 0.25], &[3.0, -2.0]]);
    }

    #[test]
    fn variable_exponent() {
        // x^y
        let expr = Expr::pow(x(), y());
        check(&expr, &[&[0.5, 2.0], &[1.5, 0.25], &[3.0, -2.0]]);

        // 2^(x*y)
        let expr = Expr::pow(2.0, x() * y());
        check(&expr, &[&[0.5, 2.0], &[-1.5, 0.25]]);
    }

    #[test]
    fn nested_powers() {
        // (x^2 + y)^3 * y^-1
        let expr = Expr::pow(Expr::pow(x(), 2.0) + y(), 3.0) * Expr::inverse(y());
        check(&expr, &[&[0.5, 2.0], &[-1.5, 0.25], &[1.0, 1.0]]);
    }

    #[test]
    fn logarithm() {
        let expr = Expr::ln(Expr::pow(x(), 2.0) + y());
        check(&expr, &[&[0.5, 2.0], &[-1.5, 0.25]]);
    }

    #[test]
    fn hyperbolic_tangent() {
        let expr = Expr::tanh(x() * 2.0 + y());
        check(&expr, &[&[0.5, 0.2], &[-1.5, 0.25], &[0.0, 0.0]]);
    }

    #[test]
    fn trigonometry() {
        let expr = Expr::sin(x() * y()) + Expr::cos(Expr::pow(x(), 2.0));
        check(&expr, &[&[0.5, 0.2], &[-1.5, 0.25]]);
    }

    #[test]
    fn identity() {
        let expr = Expr::identity(x() * y());
        assert_eq!(partial(&expr, x()), partial(&(x() * y()), x()));
    }

    #[test]
    fn absolute_value() {
        let expr = Expr::abs(x());
        let derivative = partial(&expr, x());
        assert_eq!(expr.eval(&[5.0]).unwrap(), 5.0);
        assert_eq!(derivative.eval(&[5.0]).unwrap(), 1.0);
        assert_eq!(expr.eval(&[-5.0]).unwrap(), 5.0);
        assert_eq!(derivative.eval(&[-5.0]).unwrap(), -1.0);
    }

    #[test]
    fn absolute_value_nested() {
        let expr = Expr::abs(Expr::pow(x(), 3.0) - y());
        check(&expr, &[&[0.5, 2.0], &[1.5, 0.25], &[-1.0, 3.0]]);
    }

    #[test]
    fn branch_away_from_boundary() {
        let expr = Expr::branch(
            Predicate::new(x() - y(), Comparison::Less, 0.0),
            Expr::pow(x(), 2.0) * y(),
            Expr::tanh(x() + y()),
        );
        check(&expr, &[&[0.5, 2.0], &[1.5, 0.25], &[-1.0, 3.0]]);
    }

    #[test]
    fn branch_keeps_predicate() {
        let predicate = Predicate::new(x(), Comparison::Eq, 0.0);
        let expr = Expr::branch(predicate.clone(), Expr::Constant(1.0) - x(), Expr::Constant(0.0));
        match partial(&expr, x()) {
            Expr::Branch(branch) => assert_eq!(branch.predicate, predicate),
            other => panic!("expected a branch, got {}", other.display_raw()),
        }
    }

    #[test]
    fn second_derivative_of_hidden_layer() {
        // tanh(w0 * x + w1) with x = var 0, w0 = var 1, w1 = var 2
        let expr = Expr::tanh(Expr::var(1) * x() + Expr::var(2));
        let dxx = partial(&partial(&expr, x()), x());
        let point = [0.3, 1.2, -0.4];

        // d²/dx² tanh(a x + b) = -2 a² tanh(u) (1 - tanh(u)²)
        let t = (1.2f64 * 0.3 - 0.4).tanh();
        let expected = -2.0 * 1.2 * 1.2 * t * (1.0 - t * t);
        assert_float_absolute_eq!(dxx.eval(&point).unwrap(), expected);
        assert_float_absolute_eq!(simplify(&dxx).eval(&point).unwrap(), expected);
    }
}
