use ariadne::Fmt;
use symnet_attrs::ErrorKind;
use symnet_error::EXPR;

/// A power with a negative base was raised to a non-integral exponent, which has no real value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "cannot raise the negative number `{}` to the non-integer power `{}`",
        self.base,
        self.exponent,
    ),
    labels = ["this power"],
    help = format!(
        "real exponentiation is only defined for negative bases with integer exponents; consider {}",
        "|base|^exponent".fg(EXPR),
    ),
)]
pub struct NegativeBase {
    /// The value the base evaluated to.
    pub base: f64,

    /// The value the exponent evaluated to.
    pub exponent: f64,
}

/// A variable was read outside the bounds of the point the expression was evaluated at.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("variable `x{}` is out of range", self.index),
    labels = [format!("this variable reads component {}", self.index)],
    help = format!(
        "the point has {} component(s), so variable indices must be less than {}",
        self.len,
        self.len,
    ),
)]
pub struct VariableOutOfRange {
    /// The index of the variable.
    pub index: usize,

    /// The number of components available.
    pub len: usize,
}
