mod line_index;
pub mod subway_data;
mod subway_network;

use std::sync::LazyLock;

pub use line_index::{LineIndex, LineWeighting};
pub use subway_network::{Station, SubwayNetwork, SubwayNetworkBuilder};

use crate::{
    constants::{DEFAULT_PENALTY_COST, DEFAULT_TRANSFER_COST},
    graph::{Graph, NodeGraph},
    midpoint::MidpointRule,
    recommendation::{Recommendation, recommend},
    routing::{routing_path::RoutingPath, shortest_path_by_name},
    weighting::Weight,
};

static BUILT_IN: LazyLock<SubwayRecommender> =
    LazyLock::new(|| SubwayRecommender::new(SubwayNetwork::built_in()));

/// Cheapest path between two stations under [`LineWeighting`].
pub fn shortest_path(
    graph: &NodeGraph,
    line_index: &LineIndex,
    source: &str,
    destination: &str,
    transfer_cost: Weight,
    penalty_cost: Weight,
) -> Option<RoutingPath> {
    let weighting = LineWeighting::new(line_index, transfer_cost, penalty_cost);
    shortest_path_by_name(graph, &weighting, source, destination)
}

/// Suggests a station between the seller's and the buyer's stations on the
/// built-in network, using the default costs.
pub fn recommend_off_campus(seller_station: &str, buyer_station: &str) -> Recommendation {
    BUILT_IN.recommend(seller_station, buyer_station)
}

pub fn built_in_recommender() -> &'static SubwayRecommender {
    &BUILT_IN
}

#[derive(Clone, Debug)]
pub struct SubwayRecommender {
    network: SubwayNetwork,
    transfer_cost: Weight,
    penalty_cost: Weight,
}

impl SubwayRecommender {
    pub fn new(network: SubwayNetwork) -> Self {
        Self {
            network,
            transfer_cost: DEFAULT_TRANSFER_COST,
            penalty_cost: DEFAULT_PENALTY_COST,
        }
    }

    pub fn with_costs(mut self, transfer_cost: Weight, penalty_cost: Weight) -> Self {
        self.transfer_cost = transfer_cost;
        self.penalty_cost = penalty_cost;
        self
    }

    pub fn network(&self) -> &SubwayNetwork {
        &self.network
    }

    pub fn transfer_cost(&self) -> Weight {
        self.transfer_cost
    }

    pub fn penalty_cost(&self) -> Weight {
        self.penalty_cost
    }

    pub fn recommend(&self, seller_station: &str, buyer_station: &str) -> Recommendation {
        let weighting = LineWeighting::new(
            self.network.line_index(),
            self.transfer_cost,
            self.penalty_cost,
        );

        recommend(
            self.network.graph(),
            &weighting,
            MidpointRule::UpperMiddle,
            seller_station,
            buyer_station,
            |node| self.network.graph().node_name(node).to_string(),
        )
    }
}
