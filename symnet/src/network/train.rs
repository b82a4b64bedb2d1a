use crate::symbolic::{derivative::partial, expr::{Expr, Variable}, simplify::simplify};
use log::{debug, info, log_enabled, trace, Level};
use std::collections::HashMap;
use super::{error::{MissingCost, PointLength}, Network};
use symnet_error::Error;

/// Builds the gradient of the cost with respect to one weight, simplified.
fn build_gradient(cost: &Expr, weight: Variable) -> Expr {
    let raw = partial(cost, weight);
    let simplified = simplify(&raw);
    debug!(
        "gradient for {}: {} nodes, {} after simplification",
        weight,
        raw.node_count(),
        simplified.node_count(),
    );
    simplified
}

/// Renders a training point for error reports.
fn render_point(point: &[f64]) -> String {
    let values = point.iter().map(f64::to_string).collect::<Vec<_>>();
    format!("[{}]", values.join(", "))
}

impl Network {
    /// Fits the weights of the network to the cost expression by gradient descent.
    ///
    /// Each point gives one value per input variable, in declaration order. For each point in
    /// turn, the inputs are written into the state vector, the gradient of the cost with respect
    /// to every weight is evaluated at the state, and then all weights are moved at once by
    /// `-learning_rate * gradient`. Every gradient is therefore evaluated against the weights as
    /// they were before the point, and the updated weights carry over to the next point.
    ///
    /// Gradients are built on first use, simplified, and reused for every point of this call.
    ///
    /// An empty set of points does nothing. Otherwise, returns [`Err`] without touching the state
    /// if no cost was assigned or if any point has the wrong length.
    ///
    /// Also returns [`Err`] if evaluating a gradient fails. Training stops at that point, but the
    /// state is not rolled back: the inputs of the failing point are already written, and the
    /// weight updates of every earlier point stay applied.
    pub fn train<P: AsRef<[f64]>>(&mut self, learning_rate: f64, points: &[P]) -> Result<(), Error> {
        if points.is_empty() {
            debug!("no training points, nothing to do");
            return Ok(());
        }

        let cost = self.cost.clone().ok_or_else(|| Error::new(
            format!("train({learning_rate}, {} points)", points.len()),
            vec![],
            MissingCost,
        ))?;

        for point in points {
            let point: &[f64] = point.as_ref();
            if point.len() != self.inputs.len() {
                return Err(Error::new(render_point(point), vec![], PointLength {
                    expected: self.inputs.len(),
                    given: point.len(),
                }));
            }
        }

        info!(
            "training on {} point(s) with {} weight(s), learning rate {}",
            points.len(),
            self.weights.len(),
            learning_rate,
        );

        let mut gradients: HashMap<Variable, Expr> = HashMap::new();
        let mut deltas = vec![0.0; self.weights.len()];
        for (i, point) in points.iter().enumerate() {
            let point: &[f64] = point.as_ref();
            for (var, &value) in self.inputs.iter().zip(point) {
                self.state[var.index()] = value;
            }

            if log_enabled!(Level::Trace) {
                let weights = self.weights.iter()
                    .map(|weight| format!("{:.3}", self.state[weight.index()]))
                    .collect::<Vec<_>>();
                match self.value(&cost) {
                    Ok(value) => trace!("point {}: weights [{}], cost {}", i, weights.join(", "), value),
                    Err(err) => trace!("point {}: weights [{}], cost undefined: {:?}", i, weights.join(", "), err.kind),
                }
            }

            for (delta, &weight) in deltas.iter_mut().zip(&self.weights) {
                let gradient = gradients.entry(weight).or_insert_with(|| build_gradient(&cost, weight));
                *delta = -learning_rate * gradient.eval(&self.state)?;
            }

            for (weight, delta) in self.weights.iter().zip(&deltas) {
                self.state[weight.index()] += delta;
            }
        }

        info!("finished training on {} point(s)", points.len());
        Ok(())
    }
}
