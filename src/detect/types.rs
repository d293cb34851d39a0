//! Core types for feedback results.

use serde::{Deserialize, Serialize};

use super::Metrics;

/// Prompt returned by `analyze` for blank input.
pub const ANALYZE_PROMPT: &str = "Please enter some code to analyze.";

/// Prompt returned by `debug` for blank input.
pub const DEBUG_PROMPT: &str = "Please enter some code to debug.";

/// Feedback mode, used to pick the prompt for blank input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Analyze,
    Debug,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Analyze => "analyze",
            Mode::Debug => "debug",
        }
    }

    /// The fixed prompt shown when there is nothing to look at.
    pub fn prompt(&self) -> &'static str {
        match self {
            Mode::Analyze => ANALYZE_PROMPT,
            Mode::Debug => DEBUG_PROMPT,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a feedback request: either a prompt for blank input or a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Feedback<R> {
    Prompt { message: String },
    Report(R),
}

impl<R> Feedback<R> {
    pub fn prompt(mode: Mode) -> Self {
        Feedback::Prompt {
            message: mode.prompt().to_string(),
        }
    }

    pub fn is_prompt(&self) -> bool {
        matches!(self, Feedback::Prompt { .. })
    }

    /// The report, if one was produced.
    pub fn report(&self) -> Option<&R> {
        match self {
            Feedback::Report(r) => Some(r),
            Feedback::Prompt { .. } => None,
        }
    }
}

/// A canned remark attached by an algorithm-recognition rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmRemark {
    /// Identifier of the rule that fired.
    pub rule: String,
    pub remark: String,
}

/// Result of the analysis rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metrics: Metrics,
    /// Remarks in rule-definition order.
    pub remarks: Vec<AlgorithmRemark>,
}

impl AnalysisReport {
    /// Whether the rule with the given id contributed a remark.
    pub fn has_remark(&self, rule: &str) -> bool {
        self.remarks.iter().any(|r| r.rule == rule)
    }
}

/// A diagnosed defect with its suggested fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugFinding {
    /// Identifier of the matching signature.
    pub signature: String,
    pub label: String,
    pub issue: String,
    pub problem: String,
    pub fix: String,
    pub corrected_code: String,
}

/// Result of the bug signature table. `finding` is `None` when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugReport {
    pub finding: Option<BugFinding>,
}

impl DebugReport {
    /// Check if a known defect was found.
    pub fn has_finding(&self) -> bool {
        self.finding.is_some()
    }
}
