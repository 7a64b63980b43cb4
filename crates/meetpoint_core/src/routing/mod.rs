pub mod dijkstra;
pub mod routing_path;
pub mod shortest_path_algorithm;

use crate::graph::Graph;
use crate::weighting::Weighting;

use dijkstra::Dijkstra;
use routing_path::RoutingPath;
use shortest_path_algorithm::ShortestPathAlgorithm;

/// Resolves both names and runs Dijkstra between them. Unknown names and
/// unreachable destinations both yield `None`.
pub fn shortest_path_by_name(
    graph: &impl Graph,
    weighting: &impl Weighting,
    source: &str,
    destination: &str,
) -> Option<RoutingPath> {
    let start = graph.node_index(source)?;
    let end = graph.node_index(destination)?;

    Dijkstra::new(graph).calc_path(graph, weighting, start, end)
}
