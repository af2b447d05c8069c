//! Document-level errors, distinct from validation findings.

use std::path::PathBuf;

use thiserror::Error;

/// The input could not be turned into a workflow model. Fatal to the run:
/// no rule executes and no report is produced.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read workflow file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode workflow document: {0}")]
    Decode(#[from] serde_json::Error),
}
