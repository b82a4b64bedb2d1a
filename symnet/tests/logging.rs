use log::LevelFilter;
use symnet::network::Network;
use symnet::symbolic::expr::Expr;

/// Installs a logger with every level enabled, so that trace-only code paths run.
fn trace_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(LevelFilter::Trace)
        .try_init();
    assert!(log::log_enabled!(log::Level::Trace));
}

#[test]
fn trace_logging_does_not_affect_training() {
    trace_logging();

    // the second term is undefined at x = 1 but does not depend on the weight, so it vanishes
    // from the simplified gradient
    let mut net = Network::new();
    let (_, x) = net.declare_input();
    let w = net.weights()[0];
    net.set_cost(Expr::pow(w * x - 3.0, 2.0) + Expr::pow(x - 5.0, 0.5)).unwrap();

    net.train(0.1, &[[1.0]]).unwrap();

    // d/dw = 2 * (w - 3) = -4 at w = 1
    assert!((net.get(w).unwrap() - 1.4).abs() < 1e-9);
}
