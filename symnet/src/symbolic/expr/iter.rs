use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    /// Nodes waiting to be visited, paired with whether their children were already pushed.
    stack: Vec<(&'a Expr, bool)>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self { stack: vec![(expr, false)] }
    }

    /// Pushes the children of the given expression so that the leftmost child is visited first.
    fn push_children(&mut self, expr: &'a Expr) {
        match expr {
            Expr::Variable(_) | Expr::Constant(_) => (),
            Expr::Sum(children) | Expr::Product(children) => {
                for child in children.iter().rev() {
                    self.stack.push((child, false));
                }
            },
            Expr::Power(base, exponent) => {
                self.stack.push((&**exponent, false));
                self.stack.push((&**base, false));
            },
            Expr::Log(arg)
                | Expr::Abs(arg)
                | Expr::Tanh(arg)
                | Expr::Sin(arg)
                | Expr::Cos(arg)
                | Expr::Identity(arg) => self.stack.push((&**arg, false)),
            Expr::Branch(branch) => {
                self.stack.push((&branch.if_false, false));
                self.stack.push((&branch.if_true, false));
                self.stack.push((&branch.predicate.lhs, false));
            },
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.stack.pop()?;
            if expanded {
                return Some(expr);
            }

            self.stack.push((expr, true));
            self.push_children(expr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_order() {
        let expr = Expr::sum([
            Expr::pow(Expr::var(0), 2.0),
            Expr::ln(Expr::var(1)),
        ]);
        let rendered = expr.post_order_iter()
            .map(|node| node.display_raw().to_string())
            .collect::<Vec<_>>();
        assert_eq!(rendered, vec![
            "x0",
            "2",
            "x0^2",
            "x1",
            "ln(x1)",
            "(x0^2 + ln(x1))",
        ]);
    }
}
