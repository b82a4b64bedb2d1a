use crate::symbolic::expr::{Expr, Variable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A handle to a node of a [`Network`](super::Network).
///
/// Handles are only meaningful for the network that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(super) usize);

impl NodeId {
    /// Returns the position of the node in its network, in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// The function applied to the weighted sum of a node's inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Activation {
    /// `tanh`, the activation of hidden nodes.
    #[default]
    Tanh,

    /// No activation; the weighted sum passes through unchanged. Used by output nodes.
    Identity,
}

impl Activation {
    /// Wraps the given weighted sum in this activation.
    pub fn apply(self, sum: Expr) -> Expr {
        match self {
            Self::Tanh => Expr::tanh(sum),
            Self::Identity => Expr::identity(sum),
        }
    }
}

/// One input of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeInput {
    /// An input variable of the network, fed from the training data.
    Variable(Variable),

    /// The output of another node.
    Node(NodeId),
}

/// A weighted-sum-plus-activation unit.
///
/// `inputs` and `weights` are parallel: input `i` is multiplied by weight `i`. Both only ever
/// grow.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// The inputs of the node, in connection order.
    pub(super) inputs: Vec<NodeInput>,

    /// One weight variable per input.
    pub(super) weights: Vec<Variable>,

    /// The activation applied to the weighted sum.
    pub(super) activation: Activation,
}

impl Node {
    /// Creates a node with no inputs.
    pub(super) fn new(activation: Activation) -> Self {
        Self { inputs: Vec::new(), weights: Vec::new(), activation }
    }

    /// Appends an input with its weight.
    pub(super) fn connect(&mut self, input: NodeInput, weight: Variable) {
        self.inputs.push(input);
        self.weights.push(weight);
    }

    /// Returns the inputs of the node, in connection order.
    pub fn inputs(&self) -> &[NodeInput] {
        &self.inputs
    }

    /// Returns the weight variables of the node, parallel to [`Node::inputs`].
    pub fn weights(&self) -> &[Variable] {
        &self.weights
    }

    /// Returns the activation of the node.
    pub fn activation(&self) -> Activation {
        self.activation
    }
}
