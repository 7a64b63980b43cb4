use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::constants::MAX_WEIGHT;
use crate::graph::{Graph, NodeIndex};
use crate::weighting::{PathWeight, Weighting};

use super::routing_path::RoutingPath;
use super::shortest_path_algorithm::ShortestPathAlgorithm;

#[derive(Eq, Copy, Clone, Debug)]
struct HeapItem {
    node: NodeIndex,
    weight: PathWeight,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.weight == other.weight && self.node == other.node
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.node.cmp(&other.node))
    }
}

#[derive(Clone, Copy)]
struct NodeData {
    weight: PathWeight,
    settled: bool,
    parent: Option<NodeIndex>,
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            weight: MAX_WEIGHT,
            settled: false,
            parent: None,
        }
    }
}

pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
    data: Vec<NodeData>,
}

impl Dijkstra {
    pub fn new(graph: &impl Graph) -> Self {
        Dijkstra {
            heap: BinaryHeap::with_capacity(graph.node_count()),
            data: vec![NodeData::new(); graph.node_count()],
        }
    }

    fn init(&mut self, graph: &impl Graph, start: NodeIndex) {
        self.heap.clear();
        self.data.clear();
        self.data.resize(graph.node_count(), NodeData::new());

        self.heap.push(HeapItem {
            node: start,
            weight: 0,
        });
        self.update_node_data(start, 0, None);
    }

    fn update_node_data(
        &mut self,
        node: NodeIndex,
        weight: PathWeight,
        parent: Option<NodeIndex>,
    ) {
        let data = &mut self.data[node.get()];
        data.weight = weight;
        data.settled = false;
        data.parent = parent;
    }

    #[inline(always)]
    fn node_data(&self, node: NodeIndex) -> &NodeData {
        &self.data[node.get()]
    }

    fn build_path(&self, end: NodeIndex) -> RoutingPath {
        let mut nodes = vec![end];

        let mut node_data = self.node_data(end);
        while let Some(parent) = node_data.parent {
            nodes.push(parent);
            node_data = self.node_data(parent);
        }

        nodes.reverse();

        RoutingPath::new(nodes, self.node_data(end).weight)
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        weighting: &impl Weighting,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Option<RoutingPath> {
        self.init(graph, start);

        let mut iterations = 0;

        while let Some(HeapItem { node, weight }) = self.heap.pop() {
            // Node is already settled, skip
            if self.node_data(node).settled {
                continue;
            }

            // A cheaper entry for this node was pushed later, skip
            if weight > self.node_data(node).weight {
                continue;
            }

            self.data[node.get()].settled = true;
            iterations += 1;

            if node == end {
                break;
            }

            for &adj_node in graph.neighbors(node) {
                if self.node_data(adj_node).settled {
                    continue;
                }

                let edge_weight = weighting.calc_edge_weight(node, adj_node);
                let next_weight = weight + PathWeight::from(edge_weight);

                if next_weight < self.node_data(adj_node).weight {
                    self.update_node_data(adj_node, next_weight, Some(node));
                    self.heap.push(HeapItem {
                        node: adj_node,
                        weight: next_weight,
                    });
                }
            }
        }

        debug!(iterations, start = %start, end = %end, "dijkstra finished");

        if !self.node_data(end).settled {
            return None;
        }

        Some(self.build_path(end))
    }
}
