//! Serde types for the workflow document.
//!
//! These mirror the wire format produced by the workflow editor: a flat node
//! list plus a per-source connection map. Decoding is purely structural; all
//! semantic checks live in the validate phase.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type tag of code-execution nodes.
pub const CODE_NODE_TYPE: &str = "code-execution";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub nodes: Vec<Node>,
    /// Source node name → declared output connections. Map order is document
    /// order and is load-bearing for finding determinism.
    #[serde(default)]
    pub connections: IndexMap<String, NodeConnections>,
}

impl Workflow {
    pub fn code_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_code())
    }

    pub fn merge_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_merge())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique within a workflow.
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub parameters: IndexMap<String, Value>,
}

impl Node {
    pub fn is_code(&self) -> bool {
        self.node_type == CODE_NODE_TYPE
    }

    /// Merge/join nodes are matched by substring so vendor-prefixed type tags
    /// still count.
    pub fn is_merge(&self) -> bool {
        self.node_type.to_ascii_lowercase().contains("merge")
    }

    /// Embedded source text of a code node. Missing or non-string → empty.
    pub fn source_code(&self) -> &str {
        self.parameters
            .get("code")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        self.parameters
            .get("mode")
            .and_then(Value::as_str)
            .map(ExecutionMode::from_tag)
            .unwrap_or_default()
    }
}

/// How a code node is invoked by the runtime: once per input item, or once
/// with the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExecutionMode {
    #[default]
    #[serde(rename = "per-item")]
    PerItem,
    #[serde(rename = "once-for-all-items")]
    OnceForAllItems,
}

impl ExecutionMode {
    /// Unrecognized tags fall back to the default so a stray mode string
    /// never blocks validation.
    fn from_tag(tag: &str) -> Self {
        match tag {
            "once-for-all-items" => ExecutionMode::OnceForAllItems,
            _ => ExecutionMode::PerItem,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::PerItem => "per-item",
            ExecutionMode::OnceForAllItems => "once-for-all-items",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source node's declared outputs: one edge list per output port under the
/// `main` label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeConnections {
    #[serde(default)]
    pub main: Vec<Vec<ConnectionTarget>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub node: String,
    /// Target input port; 0 is the default/primary input.
    #[serde(default)]
    pub index: usize,
}
