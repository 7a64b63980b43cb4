use std::collections::BTreeSet;

use fxhash::FxHashSet;

use crate::{
    graph::NodeIndex,
    weighting::{Weight, Weighting},
};

/// Lines each station belongs to, indexed by the station's node, plus the
/// set of penalized lines.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    memberships: Vec<BTreeSet<String>>,
    penalized_lines: FxHashSet<String>,
}

impl LineIndex {
    pub(crate) fn ensure_node(&mut self, node: NodeIndex) {
        if node.get() >= self.memberships.len() {
            self.memberships.resize_with(node.get() + 1, BTreeSet::new);
        }
    }

    pub(crate) fn add_membership(&mut self, node: NodeIndex, line: &str) {
        self.ensure_node(node);
        self.memberships[node.get()].insert(line.to_string());
    }

    pub(crate) fn penalize(&mut self, line: &str) {
        self.penalized_lines.insert(line.to_string());
    }

    /// Lines through `node`. A node the index has never seen is on no line.
    pub fn lines_of(&self, node: NodeIndex) -> &BTreeSet<String> {
        static NO_LINES: BTreeSet<String> = BTreeSet::new();

        self.memberships.get(node.get()).unwrap_or(&NO_LINES)
    }

    pub fn is_penalized(&self, line: &str) -> bool {
        self.penalized_lines.contains(line)
    }

    pub fn penalized_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.penalized_lines.iter().map(String::as_str)
    }
}

/// Cost of travelling between two adjacent stations, decided by the lines
/// they have in common:
///
/// * a shared line that is not penalized costs 1,
/// * only penalized lines in common costs `penalty_cost`,
/// * no line in common (a walking transfer) costs `transfer_cost`.
pub struct LineWeighting<'a> {
    line_index: &'a LineIndex,
    transfer_cost: Weight,
    penalty_cost: Weight,
}

impl<'a> LineWeighting<'a> {
    pub fn new(line_index: &'a LineIndex, transfer_cost: Weight, penalty_cost: Weight) -> Self {
        Self {
            line_index,
            transfer_cost,
            penalty_cost,
        }
    }
}

impl Weighting for LineWeighting<'_> {
    fn calc_edge_weight(&self, from: NodeIndex, to: NodeIndex) -> Weight {
        let mut shares_penalized_line = false;

        for line in self
            .line_index
            .lines_of(from)
            .intersection(self.line_index.lines_of(to))
        {
            if !self.line_index.is_penalized(line) {
                return 1;
            }
            shares_penalized_line = true;
        }

        if shares_penalized_line {
            self.penalty_cost
        } else {
            self.transfer_cost
        }
    }
}
