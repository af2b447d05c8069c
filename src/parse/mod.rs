//! Parse phase: JSON document → typed workflow model + graph construction.

pub mod graph;
pub mod types;

pub use graph::WorkflowGraph;
pub use types::*;

use std::path::Path;

use crate::error::ParseError;

/// Deserialize a workflow JSON string into a `Workflow`.
pub fn parse(json: &str) -> Result<Workflow, ParseError> {
    Ok(serde_json::from_str::<Workflow>(json)?)
}

/// Read a workflow document from disk and parse it.
pub fn load(path: &Path) -> Result<Workflow, ParseError> {
    let json = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&json)
}
