use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::{
    graph::{Graph, NodeGraph, NodeIndex},
    weighting::{Weight, Weighting},
};

use super::{
    line_index::{LineIndex, LineWeighting},
    subway_data::{PENALIZED_LINES, SUBWAY_LINES},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Station {
    pub name: String,
    pub lines: Vec<String>,
}

/// Stations joined along their lines, plus the line membership of each
/// station. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct SubwayNetwork {
    graph: NodeGraph,
    line_index: LineIndex,
    lines: Vec<String>,
}

impl SubwayNetwork {
    pub fn built_in() -> Self {
        let mut builder = SubwayNetworkBuilder::default();
        for (name, stations) in SUBWAY_LINES {
            builder.add_line(name, stations.iter());
        }
        for line in PENALIZED_LINES {
            builder.penalize_line(line);
        }
        builder.build()
    }

    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Line names in the order they were added.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn lines_of(&self, station: &str) -> Option<&BTreeSet<String>> {
        self.graph
            .node_index(station)
            .map(|node| self.line_index.lines_of(node))
    }

    pub fn stations(&self) -> Vec<Station> {
        self.graph
            .nodes()
            .map(|node| Station {
                name: self.graph.node_name(node).to_string(),
                lines: self.line_index.lines_of(node).iter().cloned().collect(),
            })
            .collect()
    }

    /// Weight of the edge between two adjacent stations, or `None` when they
    /// are unknown or not adjacent.
    pub fn edge_weight(
        &self,
        a: &str,
        b: &str,
        transfer_cost: Weight,
        penalty_cost: Weight,
    ) -> Option<Weight> {
        let a = self.graph.node_index(a)?;
        let b = self.graph.node_index(b)?;

        if !self.graph.has_edge(a, b) {
            return None;
        }

        let weighting = LineWeighting::new(&self.line_index, transfer_cost, penalty_cost);
        Some(weighting.calc_edge_weight(a, b))
    }
}

#[derive(Default)]
pub struct SubwayNetworkBuilder {
    graph: NodeGraph,
    line_index: LineIndex,
    lines: Vec<String>,
}

impl SubwayNetworkBuilder {
    fn add_station(&mut self, station: &str) -> NodeIndex {
        let node = self.graph.add_node(station);
        self.line_index.ensure_node(node);
        node
    }

    /// Joins each station to the one before it on the line. Station order is
    /// taken as given: a station listed twice gets edges to both of its
    /// neighbours in each position.
    pub fn add_line<S: AsRef<str>>(
        &mut self,
        name: &str,
        stations: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        if !self.lines.iter().any(|line| line == name) {
            self.lines.push(name.to_string());
        }

        let mut previous: Option<NodeIndex> = None;
        for station in stations {
            let node = self.add_station(station.as_ref());
            self.line_index.add_membership(node, name);

            if let Some(previous) = previous {
                self.graph.connect(previous, node);
            }
            previous = Some(node);
        }

        self
    }

    /// Adds a walking link between two stations. The link belongs to no line.
    pub fn add_transfer(&mut self, a: &str, b: &str) -> &mut Self {
        let a = self.add_station(a);
        let b = self.add_station(b);
        self.graph.connect(a, b);
        self
    }

    pub fn penalize_line(&mut self, line: &str) -> &mut Self {
        self.line_index.penalize(line);
        self
    }

    pub fn build(self) -> SubwayNetwork {
        debug!(
            stations = self.graph.node_count(),
            edges = self.graph.edge_count(),
            lines = self.lines.len(),
            "built subway network"
        );

        SubwayNetwork {
            graph: self.graph,
            line_index: self.line_index,
            lines: self.lines,
        }
    }
}
