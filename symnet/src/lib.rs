//! Symbolic expressions, exact partial derivatives, and gradient-descent training on top of them.
//!
//! This crate is split in three parts:
//!
//! - [`symbolic`]: the [`Expr`](symbolic::Expr) tree, symbolic differentiation with
//!   [`partial`](symbolic::partial) and [`laplace`](symbolic::laplace), and
//!   [`simplify`](symbolic::simplify()).
//! - [`numerical`]: evaluation of an expression at a point, with [`Expr::eval`](symbolic::Expr::eval).
//! - [`network`]: feed-forward networks whose weights are fitted by gradient descent on a cost
//!   expression, using the simplified symbolic gradient of the cost.
//!
//! Because derivatives are expressions themselves, they can be differentiated again. This is what
//! makes it possible to use the residual of a differential equation as the cost of a network:
//!
//! ```
//! use symnet::network::Network;
//! use symnet::symbolic::{laplace, expr::Expr};
//!
//! let mut net = Network::new();
//! let (input, x) = net.declare_input();
//! let output = net.new_output();
//! net.pull_from(output, &[input]).unwrap();
//!
//! // u'' = 0
//! let u = net.node_expr(output);
//! net.set_cost(Expr::pow(laplace(&u, &[x]), 2.0)).unwrap();
//! net.train(0.1, &[[0.25], [0.5], [0.75]]).unwrap();
//! ```

pub mod network;
pub mod numerical;
pub mod symbolic;
