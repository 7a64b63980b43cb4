use crate::graph::NodeIndex;

/// Cost of a single edge.
pub type Weight = u32;

/// Sum of edge weights along a path. Wide enough that no path over `Weight`
/// edges can overflow it.
pub type PathWeight = u64;

pub trait Weighting {
    fn calc_edge_weight(&self, from: NodeIndex, to: NodeIndex) -> Weight;
}

/// Every edge costs 1, which turns Dijkstra into a breadth-first search.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitWeighting;

impl Weighting for UnitWeighting {
    #[inline(always)]
    fn calc_edge_weight(&self, _from: NodeIndex, _to: NodeIndex) -> Weight {
        1
    }
}
