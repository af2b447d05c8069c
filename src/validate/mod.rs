//! Validation phase: the rule registry and the top-level sweep.

pub mod code_rules;
pub mod merge_rules;

use crate::index::ConnectionIndex;
use crate::parse::{Workflow, WorkflowGraph};
use crate::report::{Finding, ValidationReport};

/// A single validation rule: given the workflow and the derived connection
/// index, produce zero or more findings. Rules are independent — none reads
/// another rule's output, so new node-type rules slot in without touching
/// existing ones.
pub trait Rule {
    fn name(&self) -> &'static str;
    fn run(&self, workflow: &Workflow, index: &ConnectionIndex) -> Vec<Finding>;
}

/// The built-in rule set, in report order.
pub fn built_in_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(code_rules::CodeReturnRule),
        Box::new(merge_rules::MergeInputsRule),
    ]
}

/// Run every built-in rule to completion and aggregate the findings. An
/// error on one node never stops evaluation of other nodes or rules.
pub fn run_rules(workflow: &Workflow, index: &ConnectionIndex) -> ValidationReport {
    let mut findings = Vec::new();
    for rule in built_in_rules() {
        findings.extend(rule.run(workflow, index));
    }
    ValidationReport::aggregate(findings)
}

/// Validate a parsed workflow end to end: build the graph and the derived
/// index, then sweep all rules. Each call is independent and side-effect
/// free.
pub fn validate_workflow(workflow: &Workflow) -> ValidationReport {
    let graph = WorkflowGraph::build(workflow);
    let index = ConnectionIndex::build(&graph);
    run_rules(workflow, &index)
}
