use meetpoint_core::{
    NotFoundReason, Recommendation,
    campus::{self, CampusGraph, CampusRecommender},
    constants::{DEFAULT_PENALTY_COST, DEFAULT_TRANSFER_COST},
    graph::Graph,
    midpoint::MidpointRule,
    recommend_off_campus, recommend_on_campus,
    subway::{self, SubwayNetworkBuilder, SubwayRecommender},
};

fn names(path: &[&str]) -> Vec<String> {
    path.iter().map(|name| name.to_string()).collect()
}

#[test]
fn campus_chain_scenario() {
    let campus = CampusGraph::from_tables(
        [("G", "인문관")],
        [("I", "L"), ("L", "G"), ("G", "Q"), ("Q", "F"), ("F", "MH")],
    );

    let path = campus::shortest_path(&campus, "I", "MH").unwrap();
    assert_eq!(path.names(campus.graph()), names(&["I", "L", "G", "Q", "F", "MH"]));
    assert_eq!(path.len(), 6);

    let midpoint = path.midpoint(MidpointRule::LowerMiddle);
    assert_eq!(campus.graph().node_name(midpoint), "G");

    let recommendation = CampusRecommender::new(campus).recommend("I", "MH");
    let meeting_point = recommendation.meeting_point().unwrap();
    assert_eq!(meeting_point.midpoint, "G");
    assert_eq!(meeting_point.midpoint_label, "인문관");
}

#[test]
fn subway_two_lines_scenario() {
    let mut builder = SubwayNetworkBuilder::default();
    builder.add_line("A", ["A1", "X", "A2"]);
    builder.add_line("B", ["B1", "X", "B2"]);
    let network = builder.build();

    let path = subway::shortest_path(
        network.graph(),
        network.line_index(),
        "A1",
        "B2",
        DEFAULT_TRANSFER_COST,
        DEFAULT_PENALTY_COST,
    )
    .unwrap();

    assert_eq!(path.names(network.graph()), names(&["A1", "X", "B2"]));
    assert_eq!(path.weight(), 2);

    let meeting_point = SubwayRecommender::new(network)
        .recommend("A1", "B2")
        .into_meeting_point()
        .unwrap();
    assert_eq!(meeting_point.midpoint, "X");
}

#[test]
fn penalized_edge_weight_is_penalty() {
    let mut builder = SubwayNetworkBuilder::default();
    builder.add_line("regular", ["R1", "R2"]);
    builder.add_line("slow", ["R2", "P1"]);
    builder.penalize_line("slow");
    let network = builder.build();

    assert_eq!(network.edge_weight("R2", "P1", 5, 8), Some(8));
    assert_eq!(network.edge_weight("R1", "R2", 5, 8), Some(1));
}

#[test]
fn unknown_locations_are_not_errors() {
    assert_eq!(
        recommend_on_campus("NOT_A_NODE", "A"),
        Recommendation::not_found(NotFoundReason::UnknownSource("NOT_A_NODE".into()))
    );
    assert_eq!(
        recommend_off_campus("회기", "NOT_A_NODE"),
        Recommendation::not_found(NotFoundReason::UnknownDestination("NOT_A_NODE".into()))
    );
}

#[test]
fn built_in_networks_answer_every_pair() {
    let campus = campus::built_in_recommender();
    let graph = campus.campus().graph();

    for a in graph.names() {
        for b in graph.names() {
            let meeting_point = campus.recommend(a, b).into_meeting_point().unwrap();
            let index = MidpointRule::LowerMiddle.index(meeting_point.path.len());
            assert_eq!(meeting_point.midpoint, meeting_point.path[index]);
        }
    }
}

#[test]
fn recommendation_serializes_for_the_frontend() {
    let recommendation = recommend_on_campus("I", "MH");
    let value = serde_json::to_value(&recommendation).unwrap();

    assert_eq!(value["status"], "found");
    assert_eq!(value["midpoint"], "G");
    assert_eq!(value["midpointLabel"], "G동 (인문관)");
    assert_eq!(value["path"].as_array().unwrap().len(), 6);
}
