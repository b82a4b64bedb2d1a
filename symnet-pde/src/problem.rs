use crate::consts::*;
use symnet::network::{Network, NodeId};
use symnet::symbolic::{
    expr::{Comparison, Expr, Predicate, Variable},
    laplace,
};
use symnet_error::Error;

/// A fitting problem: a network with its cost, the points to train it on, and the points to
/// report the solution at.
///
/// Every point ends with the value of the bias input.
pub struct Problem {
    pub net: Network,
    pub output: NodeId,
    pub learning_rate: f64,

    /// Names of the inputs printed in the solution table, excluding the bias.
    pub columns: &'static [&'static str],

    pub training: Vec<Vec<f64>>,
    pub samples: Vec<Vec<f64>>,
}

/// The problems that can be selected by name.
pub const PROBLEMS: [(&str, fn() -> Result<Problem, Error>); 3] = [
    ("const-1d", const_1d),
    ("poisson-2d", poisson_2d),
    ("heat-1d-bc", heat_1d_bc),
];

impl Problem {
    /// Writes the point into the input variables of the network.
    fn load(&mut self, point: &[f64]) {
        let inputs = self.net.inputs().to_vec();
        for (var, &value) in inputs.into_iter().zip(point) {
            self.net.set(var, value);
        }
    }

    /// Returns the mean cost over the training points.
    pub fn mean_cost(&mut self) -> Result<f64, Error> {
        let points = std::mem::take(&mut self.training);
        let total = points
            .iter()
            .map(|point| {
                self.load(point);
                self.net.cost_value()
            })
            .sum::<Result<f64, Error>>();
        self.training = points;
        Ok(total? / self.training.len().max(1) as f64)
    }

    /// Evaluates the output node at every sample point.
    pub fn solution(&mut self) -> Result<Vec<(Vec<f64>, f64)>, Error> {
        let u = self.net.node_expr(self.output);
        let samples = self.samples.clone();
        samples
            .into_iter()
            .map(|point| {
                self.load(&point);
                let value = self.net.value(&u)?;
                Ok((point, value))
            })
            .collect()
    }
}

/// Declares `count` inputs plus the bias input, returning the input nodes (bias last) and
/// the input variables (bias excluded).
fn declare_inputs(net: &mut Network, count: usize) -> (Vec<NodeId>, Vec<Variable>) {
    let (mut nodes, vars): (Vec<_>, Vec<_>) = (0..count).map(|_| net.declare_input()).unzip();
    let (bias, _) = net.declare_input();
    nodes.push(bias);
    (nodes, vars)
}

/// `x * step` for `x` in `range`, with the bias appended.
fn line(range: std::ops::Range<usize>, step: f64) -> Vec<Vec<f64>> {
    range.map(|i| vec![i as f64 * step, BIAS]).collect()
}

/// Fits `u(x) = 3`.
fn const_1d() -> Result<Problem, Error> {
    let mut net = Network::new();
    let (inputs, _) = declare_inputs(&mut net, 1);
    let output = net.new_output();
    net.pull_from(output, &inputs)?;

    let u = net.node_expr(output);
    net.set_cost(Expr::pow(u - CONST_TARGET, 2.0))?;

    let training = line(0..CONST_POINTS, CONST_STEP);
    Ok(Problem {
        net,
        output,
        learning_rate: CONST_LEARNING_RATE,
        columns: &["x"],
        samples: training.clone(),
        training,
    })
}

/// Fits the Poisson equation `2 * laplace(u) = 10` on the unit square, with no boundary
/// conditions.
fn poisson_2d() -> Result<Problem, Error> {
    let mut net = Network::new();
    let (inputs, vars) = declare_inputs(&mut net, 2);
    let output = net.new_output();
    net.pull_from(output, &inputs)?;

    let u = net.node_expr(output);
    let residual = laplace(&u, &vars) * POISSON_DIFFUSION - POISSON_FORCING;
    net.set_cost(Expr::pow(residual, 2.0))?;

    let training = (0..POISSON_POINTS)
        .flat_map(|i| (0..POISSON_POINTS).map(move |j| {
            vec![i as f64 * POISSON_STEP, j as f64 * POISSON_STEP, BIAS]
        }))
        .collect::<Vec<_>>();
    Ok(Problem {
        net,
        output,
        learning_rate: POISSON_LEARNING_RATE,
        columns: &["x", "y"],
        samples: training.clone(),
        training,
    })
}

/// Fits the steady heat equation `k * laplace(u) + s = 0` on `[0, 1]`, with `u(0) = 1` and
/// `u(1) = 7` enforced through a penalty on the boundary points.
fn heat_1d_bc() -> Result<Problem, Error> {
    let mut net = Network::new();
    let (inputs, vars) = declare_inputs(&mut net, 1);
    let x = vars[0];
    let output = net.new_output();
    net.pull_from(output, &inputs)?;

    let u = net.node_expr(output);
    let residual = laplace(&u, &vars) * HEAT_CONDUCTIVITY + HEAT_SOURCE;

    // zero away from the boundary
    let boundary = Expr::branch(
        Predicate::new(x, Comparison::Eq, 0.0),
        Expr::Constant(HEAT_LEFT) - u.clone(),
        Expr::branch(
            Predicate::new(x, Comparison::Eq, 1.0),
            Expr::Constant(HEAT_RIGHT) - u.clone(),
            Expr::Constant(0.0),
        ),
    );
    net.set_cost(Expr::pow(residual, 2.0) + Expr::pow(boundary * HEAT_PENALTY, 2.0))?;

    let mut training = line(1..HEAT_POINTS, HEAT_STEP);
    training.push(vec![0.0, BIAS]);
    training.push(vec![1.0, BIAS]);
    Ok(Problem {
        net,
        output,
        learning_rate: HEAT_LEARNING_RATE,
        columns: &["x"],
        samples: line(0..11, 0.1),
        training,
    })
}
