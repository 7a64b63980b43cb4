use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{Graph, NodeGraph, NodeIndex};

use super::campus_data::{CAMPUS_EDGES, CAMPUS_LOCATIONS};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusLocation {
    pub code: String,
    pub label: String,
}

/// Walking graph between campus buildings. Every edge has the same cost.
#[derive(Clone, Debug, Default)]
pub struct CampusGraph {
    graph: NodeGraph,
    labels: Vec<String>,
}

impl CampusGraph {
    pub fn built_in() -> Self {
        Self::from_tables(CAMPUS_LOCATIONS.iter().copied(), CAMPUS_EDGES.iter().copied())
    }

    /// Builds the graph from `(code, label)` locations and `(code, code)`
    /// walkways. An edge endpoint missing from the locations is labelled with
    /// its own code.
    pub fn from_tables<'a>(
        locations: impl IntoIterator<Item = (&'a str, &'a str)>,
        edges: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut campus = CampusGraph::default();

        for (code, label) in locations {
            campus.add_location(code, label);
        }

        for (a, b) in edges {
            let a = campus.add_location(a, a);
            let b = campus.add_location(b, b);
            campus.graph.connect(a, b);
        }

        debug!(
            nodes = campus.graph.node_count(),
            edges = campus.graph.edge_count(),
            "built campus graph"
        );

        campus
    }

    fn add_location(&mut self, code: &str, label: &str) -> NodeIndex {
        let node = self.graph.add_node(code);
        if node.get() == self.labels.len() {
            self.labels.push(label.to_string());
        }
        node
    }

    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }

    pub fn label(&self, node: NodeIndex) -> &str {
        &self.labels[node.get()]
    }

    pub fn label_of(&self, code: &str) -> Option<&str> {
        self.graph.node_index(code).map(|node| self.label(node))
    }

    pub fn locations(&self) -> Vec<CampusLocation> {
        self.graph
            .nodes()
            .map(|node| CampusLocation {
                code: self.graph.node_name(node).to_string(),
                label: self.label(node).to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tables_connects_both_directions() {
        let campus = CampusGraph::from_tables([("A", "Main"), ("B", "Library")], [("A", "B")]);
        let graph = campus.graph();

        let a = graph.node_index("A").unwrap();
        let b = graph.node_index("B").unwrap();

        assert!(graph.has_edge(a, b));
        assert!(graph.has_edge(b, a));
        assert_eq!(campus.label(b), "Library");
    }

    #[test]
    fn test_unlisted_endpoint_uses_code_as_label() {
        let campus = CampusGraph::from_tables([("A", "Main")], [("A", "X9")]);

        assert_eq!(campus.label_of("X9"), Some("X9"));
        assert_eq!(campus.label_of("missing"), None);
    }

    #[test]
    fn test_isolated_location_is_a_node() {
        let edges: [(&str, &str); 0] = [];
        let campus = CampusGraph::from_tables([("A", "Main"), ("Z", "Alone")], edges);

        assert_eq!(campus.graph().node_count(), 2);
        assert_eq!(campus.graph().edge_count(), 0);
    }

    #[test]
    fn test_built_in_is_deterministic() {
        let first = CampusGraph::built_in();
        let second = CampusGraph::built_in();

        assert_eq!(first.locations(), second.locations());
        assert_eq!(first.graph().edge_count(), second.graph().edge_count());
    }

    #[test]
    fn test_built_in_tables() {
        let campus = CampusGraph::built_in();

        assert_eq!(campus.graph().node_count(), CAMPUS_LOCATIONS.len());
        assert_eq!(campus.graph().edge_count(), CAMPUS_EDGES.len());
        assert_eq!(campus.locations()[0].code, "I");
        assert_eq!(campus.label_of("신기숙사"), Some("신기숙사"));
    }
}
