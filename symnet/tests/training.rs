use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};
use symnet::network::Network;
use symnet::symbolic::{
    expr::{Comparison, Expr, Predicate},
    laplace,
};

/// Sums the cost of the network over the given points.
fn total_cost(net: &mut Network, points: &[[f64; 2]]) -> f64 {
    let inputs = net.inputs().to_vec();
    points
        .iter()
        .map(|point| {
            for (&var, &value) in inputs.iter().zip(point) {
                net.set(var, value);
            }
            net.cost_value().unwrap()
        })
        .sum()
}

#[test]
fn single_weight_converges() {
    let mut net = Network::new();
    let (_, x) = net.declare_input();
    let w = net.weights()[0];
    net.set_cost(Expr::pow(w * x - 3.0, 2.0)).unwrap();

    net.set(x, 1.0);
    let mut last = net.cost_value().unwrap();
    for _ in 0..30 {
        net.train(0.1, &[[1.0]]).unwrap();
        let cost = net.cost_value().unwrap();
        assert!(cost < last, "cost went from {last} to {cost}");
        last = cost;
    }

    // each step scales the distance to 3 by 0.8
    assert_float_absolute_eq!(net.get(w).unwrap(), 3.0, 0.01);
}

#[test]
fn constant_target_in_one_dimension() {
    let mut net = Network::new();
    let (x_node, _) = net.declare_input();
    let (dummy_node, _) = net.declare_input();
    let output = net.new_output();
    net.pull_from(output, &[x_node, dummy_node]).unwrap();

    let u = net.node_expr(output);
    net.set_cost(Expr::pow(u - 3.0, 2.0)).unwrap();

    let points = (0..50).map(|i| [i as f64 * 0.1, 1.0]).collect::<Vec<_>>();
    let before = total_cost(&mut net, &points);
    net.train(0.1, &points).unwrap();
    let after = total_cost(&mut net, &points);

    assert!(after < before / 2.0, "cost went from {before} to {after}");
}

#[test]
fn boundary_conditions_select_by_point() {
    let mut net = Network::new();
    let (x_node, x) = net.declare_input();
    let (dummy_node, _) = net.declare_input();
    let hidden = net.new_node();
    net.pull_from(hidden, &[x_node, dummy_node]).unwrap();
    let output = net.new_output();
    net.pull_from(output, &[hidden]).unwrap();

    let u = net.node_expr(output);
    let residual = laplace(&u, &[x]);
    let boundary = Expr::branch(
        Predicate::new(x, Comparison::Eq, 0.0),
        Expr::Constant(1.0) - u.clone(),
        Expr::branch(
            Predicate::new(x, Comparison::Eq, 1.0),
            Expr::Constant(7.0) - u.clone(),
            Expr::Constant(0.0),
        ),
    );
    net.set_cost(Expr::pow(residual.clone(), 2.0) + Expr::pow(boundary * 10.0, 2.0)).unwrap();

    let dummy = net.inputs()[1];
    net.set(dummy, 1.0);
    for (point, target) in [(0.0, Some(1.0)), (0.5, None), (1.0, Some(7.0))] {
        net.set(x, point);
        let r = net.value(&residual).unwrap();
        let penalty = match target {
            Some(target) => (10.0 * (target - net.value(&u).unwrap())).powi(2),
            None => 0.0,
        };
        assert_float_absolute_eq!(net.cost_value().unwrap(), r * r + penalty, 1e-9);
    }

    let points = [[0.0, 1.0], [0.5, 1.0], [1.0, 1.0]];
    let before = total_cost(&mut net, &points);
    net.train(0.001, &points).unwrap();
    let after = total_cost(&mut net, &points);
    assert!(after < before, "cost went from {before} to {after}");
}
