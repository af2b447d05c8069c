//! Report presentation: sectioned console text and machine-readable JSON.
//!
//! Rendering is layered on top of the validation core; nothing here affects
//! findings or the verdict.

use serde::Serialize;

use crate::index::ConnectionIndex;
use crate::parse::Workflow;
use crate::report::{Finding, Severity, ValidationReport};

/// Render the report as a sectioned plain-text console listing: per-node
/// detail for code and merge nodes, then a summary block.
pub fn render_text(
    workflow: &Workflow,
    index: &ConnectionIndex,
    report: &ValidationReport,
) -> String {
    let banner = "=".repeat(70);
    let rule = "-".repeat(70);
    let mut out = String::new();

    out.push_str(&banner);
    out.push_str("\nWORKFLOW VALIDATION\n");
    out.push_str(&banner);
    out.push_str("\n\n");

    out.push_str("1. CODE NODE VALIDATION\n");
    out.push_str(&rule);
    out.push('\n');
    let code_nodes: Vec<_> = workflow.code_nodes().collect();
    if code_nodes.is_empty() {
        out.push_str("  (No code nodes found)\n");
    }
    for node in &code_nodes {
        out.push_str(&format!("  {}:\n", node.name));
        out.push_str(&format!("    Mode: {}\n", node.execution_mode()));
        let node_findings = findings_for(report, &node.name);
        if node_findings.is_empty() {
            out.push_str("    \u{2713} Return format valid\n");
        } else {
            for finding in node_findings {
                out.push_str(&finding_line(finding));
            }
        }
    }
    out.push('\n');

    out.push_str("2. MERGE NODE VALIDATION\n");
    out.push_str(&rule);
    out.push('\n');
    let merge_nodes: Vec<_> = workflow.merge_nodes().collect();
    if merge_nodes.is_empty() {
        out.push_str("  (No merge nodes found)\n");
    }
    for node in &merge_nodes {
        let port0 = index.inputs_for(&node.name, 0);
        let port1 = index.inputs_for(&node.name, 1);
        out.push_str(&format!("  {}:\n", node.name));
        out.push_str(&format!("    Input 0: {}\n", source_list(port0)));
        out.push_str(&format!("    Input 1: {}\n", source_list(port1)));
        if !port0.is_empty() && !port1.is_empty() {
            out.push_str("    \u{2713} Two inputs - creates sync point\n");
        } else {
            for finding in findings_for(report, &node.name) {
                out.push_str(&finding_line(finding));
            }
        }
    }
    out.push('\n');

    out.push_str(&banner);
    out.push_str("\nVALIDATION SUMMARY\n");
    out.push_str(&banner);
    out.push('\n');
    if report.has_errors() {
        out.push_str("\u{2717} ERRORS FOUND:\n");
        for finding in report.errors() {
            out.push_str(&format!("  \u{2022} {finding}\n"));
        }
    } else if report.warning_count() > 0 {
        out.push_str("\u{26a0} WARNINGS:\n");
        for finding in report.warnings() {
            out.push_str(&format!("  \u{2022} {finding}\n"));
        }
    } else {
        out.push_str("\u{2713} ALL VALIDATIONS PASSED\n");
    }

    out
}

/// Render the report as a stable JSON object for CI consumption.
pub fn render_json(report: &ValidationReport) -> String {
    let dto = ReportDto {
        passed: report.passed(),
        errors: report.error_count(),
        warnings: report.warning_count(),
        findings: report.findings(),
    };
    serde_json::to_string_pretty(&dto).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Serialize)]
struct ReportDto<'a> {
    passed: bool,
    errors: usize,
    warnings: usize,
    findings: &'a [Finding],
}

fn findings_for<'r>(report: &'r ValidationReport, node: &str) -> Vec<&'r Finding> {
    report
        .findings()
        .iter()
        .filter(|f| f.node.as_deref() == Some(node))
        .collect()
}

fn finding_line(finding: &Finding) -> String {
    match finding.severity {
        Severity::Error => format!("    \u{2717} ERROR: {}\n", finding.message),
        Severity::Warning => format!("    \u{26a0} WARNING: {}\n", finding.message),
    }
}

fn source_list(sources: &[String]) -> String {
    if sources.is_empty() {
        "None".to_string()
    } else {
        sources.join(", ")
    }
}
