//! Input wiring checks for merge/join nodes.

use super::Rule;
use crate::index::ConnectionIndex;
use crate::parse::Workflow;
use crate::report::Finding;

pub struct MergeInputsRule;

impl Rule for MergeInputsRule {
    fn name(&self) -> &'static str {
        "merge-sync-inputs"
    }

    fn run(&self, workflow: &Workflow, index: &ConnectionIndex) -> Vec<Finding> {
        let mut findings = Vec::new();
        for node in workflow.merge_nodes() {
            let port0 = index.inputs_for(&node.name, 0);
            let port1 = index.inputs_for(&node.name, 1);

            if !port0.is_empty() && !port1.is_empty() {
                // Both inputs wired: a real synchronization point.
                continue;
            }
            // Only the "fan-in collapsed onto input 0" shape is flagged. A
            // half-wired or fully unwired merge is accepted as-is.
            if port0.len() > 1 && port1.is_empty() {
                findings.push(Finding::warning(
                    "M001",
                    &node.name,
                    format!(
                        "{} sources on input 0, none on input 1 - no sync point",
                        port0.len()
                    ),
                ));
            }
        }
        findings
    }
}
