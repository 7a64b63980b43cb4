#[cfg(test)]
pub mod test_graph {
    use crate::{
        graph::{NodeGraph, NodeIndex},
        subway::{SubwayNetwork, SubwayNetworkBuilder},
        weighting::{Weight, Weighting},
    };

    pub fn create_graph(edges: &[(&str, &str)]) -> NodeGraph {
        let mut graph = NodeGraph::default();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    /// I - L - G - Q - F - MH
    pub fn create_chain_graph() -> NodeGraph {
        create_graph(&[
            ("I", "L"),
            ("L", "G"),
            ("G", "Q"),
            ("Q", "F"),
            ("F", "MH"),
        ])
    }

    /// Two lines crossing at `X`:
    ///
    /// ```text
    /// A1 - A2 - X - A3     (line A)
    /// B1 - X - B2          (line B)
    /// ```
    pub fn create_crossing_lines_network() -> SubwayNetwork {
        let mut builder = SubwayNetworkBuilder::default();
        builder.add_line("A", ["A1", "A2", "X", "A3"]);
        builder.add_line("B", ["B1", "X", "B2"]);
        builder.build()
    }

    /// A regular line running next to a penalized express line, plus a walking
    /// transfer between two stations that share no line.
    ///
    /// ```text
    /// S1 - S2 - S3 - S4 - S5    (local)
    /// S1 ----- E1 ------- S5    (express, penalized)
    /// S5 ~ W1 - W2              (walk, then line W)
    /// ```
    pub fn create_penalized_network() -> SubwayNetwork {
        let mut builder = SubwayNetworkBuilder::default();
        builder.add_line("local", ["S1", "S2", "S3", "S4", "S5"]);
        builder.add_line("express", ["S1", "E1", "S5"]);
        builder.add_line("W", ["W1", "W2"]);
        builder.add_transfer("S5", "W1");
        builder.penalize_line("express");
        builder.build()
    }

    /// Edges touching one of `expensive` cost `cost`, every other edge costs 1.
    pub struct ExpensiveNodeWeighting<'a> {
        expensive: &'a [NodeIndex],
        cost: Weight,
    }

    impl<'a> ExpensiveNodeWeighting<'a> {
        pub fn new(expensive: &'a [NodeIndex], cost: Weight) -> Self {
            Self { expensive, cost }
        }
    }

    impl Weighting for ExpensiveNodeWeighting<'_> {
        fn calc_edge_weight(&self, from: NodeIndex, to: NodeIndex) -> Weight {
            if self.expensive.contains(&from) || self.expensive.contains(&to) {
                self.cost
            } else {
                1
            }
        }
    }
}
