use crate::{
    graph::{Graph, NodeIndex},
    midpoint::MidpointRule,
    weighting::PathWeight,
};

/// Nodes from source to destination, both inclusive, and the total weight of
/// the edges between them. A path always holds at least one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutingPath {
    nodes: Vec<NodeIndex>,
    weight: PathWeight,
}

impl RoutingPath {
    pub(crate) fn new(nodes: Vec<NodeIndex>, weight: PathWeight) -> RoutingPath {
        debug_assert!(!nodes.is_empty());
        RoutingPath { nodes, weight }
    }

    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    pub fn weight(&self) -> PathWeight {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn source(&self) -> NodeIndex {
        self.nodes[0]
    }

    pub fn destination(&self) -> NodeIndex {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn midpoint(&self, rule: MidpointRule) -> NodeIndex {
        self.nodes[rule.index(self.nodes.len())]
    }

    pub fn names(&self, graph: &impl Graph) -> Vec<String> {
        self.nodes
            .iter()
            .map(|&node| graph.node_name(node).to_string())
            .collect()
    }
}
