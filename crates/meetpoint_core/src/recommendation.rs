use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::{
    graph::{Graph, NodeIndex},
    midpoint::MidpointRule,
    routing::{dijkstra::Dijkstra, shortest_path_algorithm::ShortestPathAlgorithm},
    stopwatch::Stopwatch,
    weighting::{PathWeight, Weighting},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPoint {
    /// Node names from the seller's location to the buyer's location.
    pub path: Vec<String>,
    pub midpoint: String,
    pub midpoint_label: String,
    pub weight: PathWeight,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "node", rename_all = "camelCase")]
pub enum NotFoundReason {
    UnknownSource(String),
    UnknownDestination(String),
    Disconnected,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::UnknownSource(node) => write!(f, "unknown source location {node:?}"),
            NotFoundReason::UnknownDestination(node) => {
                write!(f, "unknown destination location {node:?}")
            }
            NotFoundReason::Disconnected => write!(f, "no path connects the two locations"),
        }
    }
}

/// Outcome of a meeting point query. A miss is an expected answer, not an
/// error: callers show a message and move on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Recommendation {
    Found(MeetingPoint),
    NotFound { reason: NotFoundReason },
}

impl Recommendation {
    pub fn not_found(reason: NotFoundReason) -> Self {
        Recommendation::NotFound { reason }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Recommendation::Found(_))
    }

    pub fn meeting_point(&self) -> Option<&MeetingPoint> {
        match self {
            Recommendation::Found(meeting_point) => Some(meeting_point),
            Recommendation::NotFound { .. } => None,
        }
    }

    pub fn into_meeting_point(self) -> Option<MeetingPoint> {
        match self {
            Recommendation::Found(meeting_point) => Some(meeting_point),
            Recommendation::NotFound { .. } => None,
        }
    }
}

pub(crate) fn recommend(
    graph: &impl Graph,
    weighting: &impl Weighting,
    rule: MidpointRule,
    source: &str,
    destination: &str,
    label: impl Fn(NodeIndex) -> String,
) -> Recommendation {
    let Some(start) = graph.node_index(source) else {
        debug!(source, "source is not part of the graph");
        return Recommendation::not_found(NotFoundReason::UnknownSource(source.to_string()));
    };

    let Some(end) = graph.node_index(destination) else {
        debug!(destination, "destination is not part of the graph");
        return Recommendation::not_found(NotFoundReason::UnknownDestination(
            destination.to_string(),
        ));
    };

    let stopwatch = Stopwatch::new("recommend/calc_path");
    let path = Dijkstra::new(graph).calc_path(graph, weighting, start, end);
    stopwatch.report();

    let Some(path) = path else {
        debug!(source, destination, "no path between locations");
        return Recommendation::not_found(NotFoundReason::Disconnected);
    };

    let midpoint = path.midpoint(rule);

    Recommendation::Found(MeetingPoint {
        path: path.names(graph),
        midpoint: graph.node_name(midpoint).to_string(),
        midpoint_label: label(midpoint),
        weight: path.weight(),
    })
}
