use ariadne::Fmt;
use symnet_attrs::ErrorKind;
use symnet_error::EXPR;

/// A training point does not have one value per declared input variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("training point has {} value(s), expected {}", self.given, self.expected),
    labels = ["this point"],
    help = format!(
        "the network declares {} input variable(s); give one value for each, in declaration order",
        self.expected,
    ),
)]
pub struct PointLength {
    /// The number of declared input variables.
    pub expected: usize,

    /// The number of values in the point.
    pub given: usize,
}

/// The network was trained before a cost expression was assigned.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot train a network without a cost expression",
    labels = ["this training run"],
    help = format!("assign one with {} after building the network", "Network::set_cost".fg(EXPR)),
)]
pub struct MissingCost;

/// Connecting a node to one of its sources would make the node graph cyclic.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("connecting node {} to node {} would create a cycle", self.source, self.node),
    labels = ["this connection"],
    help = format!("node {} already depends on node {}; the graph must stay feed-forward", self.source, self.node),
)]
pub struct CyclicConnection {
    /// The node that would pull from the source.
    pub node: usize,

    /// The source node, which already depends on `node`.
    pub source: usize,
}
