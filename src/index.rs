//! Derived connection index: target node → input port → ordered source list.

use std::collections::HashMap;

use petgraph::visit::EdgeRef;

use crate::parse::WorkflowGraph;

/// Who feeds which input port of which node. Built once per validation run;
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct ConnectionIndex {
    inputs: HashMap<String, HashMap<usize, Vec<String>>>,
}

impl ConnectionIndex {
    /// Build the index in one O(E) pass over the graph's edges. Pure: sparse
    /// or absent connection data produces empty buckets, never an error.
    pub fn build(graph: &WorkflowGraph) -> Self {
        let mut inputs: HashMap<String, HashMap<usize, Vec<String>>> = HashMap::new();
        for edge in graph.graph.edge_references() {
            let source = &graph.graph[edge.source()];
            let target = &graph.graph[edge.target()];
            inputs
                .entry(target.clone())
                .or_default()
                .entry(edge.weight().input_port)
                .or_default()
                .push(source.clone());
        }
        ConnectionIndex { inputs }
    }

    /// Source nodes feeding `port` of `node`, in document order. Unknown
    /// nodes and unconnected ports yield the empty slice.
    pub fn inputs_for(&self, node: &str, port: usize) -> &[String] {
        self.inputs
            .get(node)
            .and_then(|ports| ports.get(&port))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
