//! Feed-forward networks of weighted-sum nodes, trained by gradient descent on a symbolic cost.
//!
//! A [`Network`] owns a single index space of [`Variable`]s. Every call to
//! [`Network::declare_input`] or [`Network::declare_weight`] hands out the next free index, and
//! indices are never reused. The same indices address the network's **state vector**, which holds
//! the current value of every variable: inputs are overwritten from the training data, and
//! weights carry over from one training point to the next.
//!
//! Nodes are stored in the network and referred to by [`NodeId`]. The expression of a node is
//! rebuilt from the graph every time it is requested with [`Network::node_expr`], so connections
//! added later are always reflected:
//!
//! ```text
//! node_expr(n) = activation(w_0 * input_0 + w_1 * input_1 + ...)
//! ```
//!
//! Once the graph is built, assign a cost expression built from the node expressions with
//! [`Network::set_cost`], and fit the weights with [`Network::train`].
//!
//! ```
//! use symnet::network::Network;
//! use symnet::symbolic::expr::Expr;
//!
//! let mut net = Network::new();
//! let (input, x) = net.declare_input();
//! let output = net.new_output();
//! net.pull_from(output, &[input]).unwrap();
//!
//! // fit u(0.5) = 0.5
//! let u = net.node_expr(output);
//! net.set_cost(Expr::pow(u - 0.5, 2.0)).unwrap();
//! net.train(0.5, &vec![[0.5]; 50]).unwrap();
//!
//! net.set(x, 0.5);
//! assert!(net.cost_value().unwrap() < 1e-6);
//! ```

pub mod error;
mod node;
mod train;

pub use node::{Activation, Node, NodeId, NodeInput};

use crate::symbolic::expr::{Expr, Renderer, Variable};
use crate::numerical::error::VariableOutOfRange;
use error::{CyclicConnection, MissingCost};
use std::collections::HashMap;
use symnet_error::Error;

/// A feed-forward graph of nodes, the cost expression to minimize, and the state vector holding
/// the value of every variable.
///
/// For more information, see the [module-level documentation](self).
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// The index of the next variable to allocate.
    next_index: usize,

    /// The input variables, in declaration order.
    inputs: Vec<Variable>,

    /// The trainable weight variables, in declaration order.
    weights: Vec<Variable>,

    /// The expression minimized by [`Network::train`].
    cost: Option<Expr>,

    /// The current value of every variable, indexed by variable index.
    state: Vec<f64>,

    /// All nodes, in creation order.
    nodes: Vec<Node>,

    /// The output nodes, in creation order.
    outputs: Vec<NodeId>,
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next variable, with the given initial value in the state vector.
    fn allocate(&mut self, initial: f64) -> Variable {
        let var = Variable::new(self.next_index);
        self.next_index += 1;
        self.state.push(initial);
        var
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Declares a new input variable, and creates a hidden node reading it through a new weight.
    ///
    /// Returns the node and the input variable. Inputs are filled from training points in
    /// declaration order.
    pub fn declare_input(&mut self) -> (NodeId, Variable) {
        let var = self.allocate(0.0);
        self.inputs.push(var);

        let mut node = Node::new(Activation::Tanh);
        node.connect(NodeInput::Variable(var), self.declare_weight());
        (self.push_node(node), var)
    }

    /// Declares a new trainable weight. Weights start at `1`.
    pub fn declare_weight(&mut self) -> Variable {
        let var = self.allocate(1.0);
        self.weights.push(var);
        var
    }

    /// Creates a hidden node with no inputs and a `tanh` activation.
    pub fn new_node(&mut self) -> NodeId {
        self.push_node(Node::new(Activation::Tanh))
    }

    /// Creates an output node with no inputs and no activation.
    pub fn new_output(&mut self) -> NodeId {
        self.new_output_with(Activation::Identity)
    }

    /// Creates an output node with no inputs and the given activation.
    pub fn new_output_with(&mut self, activation: Activation) -> NodeId {
        let id = self.push_node(Node::new(activation));
        self.outputs.push(id);
        id
    }

    /// Returns true if `from` is `target`, or reads `target` through any chain of inputs.
    fn depends_on(&self, from: NodeId, target: NodeId) -> bool {
        let mut stack = vec![from];
        let mut seen = vec![false; self.nodes.len()];
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            if std::mem::replace(&mut seen[id.0], true) {
                continue;
            }
            stack.extend(self.nodes[id.0].inputs.iter().filter_map(|input| match input {
                NodeInput::Node(source) => Some(*source),
                NodeInput::Variable(_) => None,
            }));
        }
        false
    }

    /// Connects each of the sources to the node, allocating one new weight per source.
    ///
    /// Returns [`Err`] without connecting anything if any source is the node itself or already
    /// depends on it, since the graph must stay feed-forward.
    ///
    /// # Panics
    ///
    /// Panics if any of the handles was not created by this network.
    pub fn pull_from(&mut self, node: NodeId, sources: &[NodeId]) -> Result<NodeId, Error> {
        if let Some(&source) = sources.iter().find(|&&source| self.depends_on(source, node)) {
            return Err(Error::new(
                format!("{node} <- {source}"),
                vec![],
                CyclicConnection { node: node.0, source: source.0 },
            ));
        }

        for &source in sources {
            let weight = self.declare_weight();
            self.nodes[node.0].connect(NodeInput::Node(source), weight);
        }
        Ok(node)
    }

    /// Returns the node with the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not created by this network.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns the output nodes, in creation order.
    pub fn outputs(&self) -> &[NodeId] {
        &self.outputs
    }

    /// Returns the input variables, in declaration order.
    pub fn inputs(&self) -> &[Variable] {
        &self.inputs
    }

    /// Returns the trainable weight variables, in declaration order.
    pub fn weights(&self) -> &[Variable] {
        &self.weights
    }

    fn build_node(&self, id: NodeId, built: &mut HashMap<NodeId, Expr>) -> Expr {
        if let Some(expr) = built.get(&id) {
            return expr.clone();
        }

        let node = &self.nodes[id.0];
        let terms = node.inputs.iter()
            .zip(&node.weights)
            .map(|(input, &weight)| {
                let input = match *input {
                    NodeInput::Variable(var) => Expr::Variable(var),
                    NodeInput::Node(source) => self.build_node(source, built),
                };
                Expr::product([Expr::Variable(weight), input])
            })
            .collect::<Vec<_>>();
        let expr = node.activation.apply(Expr::sum(terms));

        built.insert(id, expr.clone());
        expr
    }

    /// Builds the expression of the node from its current inputs and weights:
    /// `activation(w_0 * input_0 + w_1 * input_1 + ...)`.
    ///
    /// A node feeding several others appears once in memory, shared by all of them.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not created by this network.
    pub fn node_expr(&self, id: NodeId) -> Expr {
        self.build_node(id, &mut HashMap::new())
    }

    /// Builds the expressions of all output nodes, in creation order.
    pub fn output_exprs(&self) -> Vec<Expr> {
        let mut built = HashMap::new();
        self.outputs.iter()
            .map(|&id| self.build_node(id, &mut built))
            .collect()
    }

    /// Assigns the expression minimized by [`Network::train`].
    ///
    /// Returns [`Err`] if the expression reads a variable this network never declared.
    pub fn set_cost(&mut self, cost: Expr) -> Result<(), Error> {
        if let Some(&var) = cost.variables().range(Variable::new(self.next_index)..).next() {
            let target = Expr::Variable(var);
            let (source, span) = Renderer::locating(&target).render(&cost);
            return Err(Error::new(
                source,
                span.into_iter().collect(),
                VariableOutOfRange { index: var.index(), len: self.next_index },
            ));
        }

        self.cost = Some(cost);
        Ok(())
    }

    /// Returns the cost expression, if one was assigned.
    pub fn cost(&self) -> Option<&Expr> {
        self.cost.as_ref()
    }

    /// Returns the number of variables allocated so far, which is also the length of the state
    /// vector.
    pub fn var_count(&self) -> usize {
        self.next_index
    }

    /// Returns the current value of the variable, or [`None`] if this network never declared it.
    pub fn get(&self, var: Variable) -> Option<f64> {
        self.state.get(var.index()).copied()
    }

    /// Sets the current value of the variable.
    ///
    /// # Panics
    ///
    /// Panics if this network never declared the variable.
    pub fn set(&mut self, var: Variable, value: f64) {
        self.state[var.index()] = value;
    }

    /// Returns the state vector: the current value of every variable, indexed by variable index.
    pub fn state(&self) -> &[f64] {
        &self.state
    }

    /// Returns the state vector mutably.
    pub fn state_mut(&mut self) -> &mut [f64] {
        &mut self.state
    }

    /// Evaluates the expression at the current state.
    pub fn value(&self, expr: &Expr) -> Result<f64, Error> {
        expr.eval(&self.state)
    }

    /// Evaluates the cost expression at the current state.
    pub fn cost_value(&self) -> Result<f64, Error> {
        let cost = self.cost.as_ref()
            .ok_or_else(|| Error::new("cost_value()", vec![], MissingCost))?;
        self.value(cost)
    }
}
