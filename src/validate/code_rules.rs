//! Return-shape checks for code-execution nodes.
//!
//! A code node must hand the runtime an array of item wrappers, each with a
//! `json` property holding a single object. The checks are shallow textual
//! probes over the embedded source, not a parse of the embedded language:
//! cheap, no execution of untrusted code, false negatives accepted under
//! unusual formatting.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Rule;
use crate::index::ConnectionIndex;
use crate::parse::{Node, Workflow};
use crate::report::Finding;

static RETURNS_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"return\s*\[").expect("static pattern compiles"));
static HAS_JSON_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\s*json\s*:").expect("static pattern compiles"));
static JSON_ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"json\s*:\s*([^,}]+)").expect("static pattern compiles"));

/// Substrings suggesting a `json` value is a collection rather than an object.
const COLLECTION_HINTS: [&str; 3] = ["all()", "items", "array"];

/// Runtime API call that fetches the whole input batch.
const FETCH_ALL_ITEMS: &str = "$input.all()";

pub struct CodeReturnRule;

impl Rule for CodeReturnRule {
    fn name(&self) -> &'static str {
        "code-return-shape"
    }

    fn run(&self, workflow: &Workflow, _index: &ConnectionIndex) -> Vec<Finding> {
        let mut findings = Vec::new();
        for node in workflow.code_nodes() {
            findings.extend(check_return_shape(node));
        }
        findings
    }
}

/// The ordered probes for one node. Probes short-circuit: each assumes the
/// previous ones passed, so a node never collects contradictory findings
/// about the same malformed snippet.
fn check_return_shape(node: &Node) -> Vec<Finding> {
    let code = node.source_code();

    if !code.contains("return") {
        return vec![Finding::error("C001", &node.name, "no return statement")];
    }
    if !RETURNS_ARRAY.is_match(code) {
        return vec![Finding::error("C002", &node.name, "must return an array")];
    }
    if !HAS_JSON_KEY.is_match(code) {
        return vec![Finding::error(
            "C003",
            &node.name,
            "objects must have a 'json' property",
        )];
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for caps in JSON_ASSIGNMENT.captures_iter(code) {
        let expr = caps[1].trim();
        if expr.starts_with('{') {
            // Literal object: the shape we want.
            continue;
        }
        let lowered = expr.to_ascii_lowercase();
        if COLLECTION_HINTS.iter().any(|hint| lowered.contains(hint)) {
            warnings.push(Finding::warning(
                "C004",
                &node.name,
                format!("json property set to '{expr}' - verify this is an object, not an array"),
            ));
        }
        if expr == "allItems" && code.contains(FETCH_ALL_ITEMS) {
            errors.push(Finding::error(
                "C005",
                &node.name,
                "json property is set to an array; must be an object",
            ));
        }
    }

    // Errors for a node supersede its warnings about the same assignments.
    if errors.is_empty() { warnings } else { errors }
}
