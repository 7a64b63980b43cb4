use fxhash::FxHashMap;

crate::define_index_newtype!(NodeIndex);

pub trait Graph {
    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn node_index(&self, name: &str) -> Option<NodeIndex>;

    fn node_name(&self, node: NodeIndex) -> &str;

    fn neighbors(&self, node: NodeIndex) -> &[NodeIndex];
}

/// Undirected graph over named nodes.
///
/// Adjacency has set semantics: adding the same edge twice, in either
/// direction, stores it once. Node indices follow insertion order.
#[derive(Debug, Default, Clone)]
pub struct NodeGraph {
    names: Vec<String>,
    index: FxHashMap<String, NodeIndex>,
    adjacency_list: Vec<Vec<NodeIndex>>,
    edges: usize,
}

impl NodeGraph {
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&node) = self.index.get(name) {
            return node;
        }

        let node = NodeIndex::new(self.names.len());
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), node);
        self.adjacency_list.push(vec![]);
        node
    }

    /// Connects `a` and `b` in both directions, creating missing nodes.
    /// Returns `false` when the edge already existed or is a self-loop.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        let a = self.add_node(a);
        let b = self.add_node(b);
        self.connect(a, b)
    }

    pub(crate) fn connect(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        if a == b || self.has_edge(a, b) {
            return false;
        }

        self.adjacency_list[a.get()].push(b);
        self.adjacency_list[b.get()].push(a);
        self.edges += 1;
        true
    }

    pub fn has_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.adjacency_list[a.get()].contains(&b)
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        (0..self.names.len()).map(NodeIndex::new)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

impl Graph for NodeGraph {
    fn node_count(&self) -> usize {
        self.names.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    fn node_name(&self, node: NodeIndex) -> &str {
        &self.names[node.get()]
    }

    fn neighbors(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.adjacency_list[node.get()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_undirected() {
        let mut graph = NodeGraph::default();
        assert!(graph.add_edge("A", "B"));

        let a = graph.node_index("A").unwrap();
        let b = graph.node_index("B").unwrap();

        assert_eq!(graph.neighbors(a), &[b]);
        assert_eq!(graph.neighbors(b), &[a]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_edges_are_stored_once() {
        let mut graph = NodeGraph::default();
        assert!(graph.add_edge("A", "B"));
        assert!(!graph.add_edge("A", "B"));
        assert!(!graph.add_edge("B", "A"));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(graph.node_index("A").unwrap()).len(), 1);
    }

    #[test]
    fn test_self_loop_is_ignored() {
        let mut graph = NodeGraph::default();
        assert!(!graph.add_edge("A", "A"));

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_node_indices_follow_insertion_order() {
        let mut graph = NodeGraph::default();
        graph.add_edge("C", "A");
        graph.add_node("B");
        graph.add_node("A");

        assert_eq!(graph.names().collect::<Vec<_>>(), vec!["C", "A", "B"]);
        assert_eq!(graph.node_index("B"), Some(NodeIndex::new(2)));
        assert_eq!(graph.node_index("Z"), None);
    }
}
