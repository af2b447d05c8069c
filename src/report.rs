//! Findings and the aggregated validation report.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation result. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub code: &'static str,
    pub severity: Severity,
    /// The node the finding is attributed to; `None` for graph-level findings.
    pub node: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn error(code: &'static str, node: &str, message: impl Into<String>) -> Self {
        Finding {
            code,
            severity: Severity::Error,
            node: Some(node.to_string()),
            message: message.into(),
        }
    }

    pub fn warning(code: &'static str, node: &str, message: impl Into<String>) -> Self {
        Finding {
            code,
            severity: Severity::Warning,
            node: Some(node.to_string()),
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node {
            Some(node) => write!(f, "[{}] {} (node '{}')", self.code, self.message, node),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// Ordered findings plus the overall verdict.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    /// Collect findings, preserving the order the rules produced them.
    pub fn aggregate(findings: Vec<Finding>) -> Self {
        ValidationReport { findings }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Warnings never fail a run; only error findings do.
    pub fn passed(&self) -> bool {
        !self.has_errors()
    }
}
