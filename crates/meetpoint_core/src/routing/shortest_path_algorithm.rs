use crate::{graph::Graph, graph::NodeIndex, weighting::Weighting};

use super::routing_path::RoutingPath;

pub trait ShortestPathAlgorithm {
    /// Returns `None` when `end` cannot be reached from `start`.
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        weighting: &impl Weighting,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Option<RoutingPath>;
}
