pub mod campus_data;
mod campus_graph;

use std::sync::LazyLock;

pub use campus_graph::{CampusGraph, CampusLocation};

use crate::{
    midpoint::MidpointRule,
    recommendation::{Recommendation, recommend},
    routing::{routing_path::RoutingPath, shortest_path_by_name},
    weighting::UnitWeighting,
};

static BUILT_IN: LazyLock<CampusRecommender> =
    LazyLock::new(|| CampusRecommender::new(CampusGraph::built_in()));

/// Fewest-hops path between two building codes.
pub fn shortest_path(
    campus: &CampusGraph,
    source: &str,
    destination: &str,
) -> Option<RoutingPath> {
    shortest_path_by_name(campus.graph(), &UnitWeighting, source, destination)
}

/// Suggests where a seller at `seller_code` and a buyer at `buyer_code` meet
/// on the built-in campus map.
pub fn recommend_on_campus(seller_code: &str, buyer_code: &str) -> Recommendation {
    BUILT_IN.recommend(seller_code, buyer_code)
}

pub fn built_in_recommender() -> &'static CampusRecommender {
    &BUILT_IN
}

#[derive(Clone, Debug)]
pub struct CampusRecommender {
    campus: CampusGraph,
}

impl CampusRecommender {
    pub fn new(campus: CampusGraph) -> Self {
        Self { campus }
    }

    pub fn campus(&self) -> &CampusGraph {
        &self.campus
    }

    pub fn recommend(&self, seller_code: &str, buyer_code: &str) -> Recommendation {
        recommend(
            self.campus.graph(),
            &UnitWeighting,
            MidpointRule::LowerMiddle,
            seller_code,
            buyer_code,
            |node| self.campus.label(node).to_string(),
        )
    }
}
