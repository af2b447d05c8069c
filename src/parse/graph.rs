//! petgraph-based directed graph over the workflow's connection map.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::Workflow;

/// Edge annotation: which input port of the target the edge feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLabel {
    pub input_port: usize,
}

pub struct WorkflowGraph {
    pub graph: DiGraph<String, EdgeLabel>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl WorkflowGraph {
    /// Build the graph from the declared nodes and the raw connection map.
    ///
    /// Edges naming an undeclared source or target are dropped: a dangling
    /// endpoint is simply absent from the graph, never an error. Edge
    /// insertion order is document order (connection map order, then output
    /// port order, then edge order within a port); the connection index
    /// relies on `edge_references()` walking edges in that order.
    pub fn build(workflow: &Workflow) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for node in &workflow.nodes {
            let idx = graph.add_node(node.name.clone());
            node_indices.insert(node.name.clone(), idx);
        }

        for (source, conns) in &workflow.connections {
            let Some(&source_idx) = node_indices.get(source) else {
                continue;
            };
            for port_edges in &conns.main {
                for target in port_edges {
                    let Some(&target_idx) = node_indices.get(&target.node) else {
                        continue;
                    };
                    graph.add_edge(
                        source_idx,
                        target_idx,
                        EdgeLabel {
                            input_port: target.index,
                        },
                    );
                }
            }
        }

        WorkflowGraph {
            graph,
            node_indices,
        }
    }
}
