/// A step taken while simplifying an expression: the name of a rule that fired.
///
/// Steps are reported in the order the rules were applied. Each variant names the law the rule
/// implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `a+(b+c) = a+b+c`
    FlattenSum,

    /// `0+a = a`
    AddZero,

    /// `2+a+3 = a+5`
    FoldConstantTerms,

    /// `() = 0` or `(a) = a` for a sum.
    UnwrapSum,

    /// `0*a = 0`
    MultiplyZero,

    /// `1*a = a`
    MultiplyOne,

    /// `a*(b*c) = a*b*c`
    FlattenProduct,

    /// `2*a*3 = 6*a`
    FoldConstantFactors,

    /// `x^a*x^b = x^(a+b)`
    CombineLikeFactors,

    /// `() = 1` or `(a) = a` for a product.
    UnwrapProduct,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `2^3 = 8`
    FoldPower,

    /// `ln(1) = 0`, `tanh(0) = 0`, etc.
    FoldFunction,

    /// `id(a) = a`
    UnwrapIdentity,

    /// `[p ? a : a] = a`
    CollapseBranch,
}
