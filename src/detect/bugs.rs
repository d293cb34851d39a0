//! Known defect signatures for the debug report.
//!
//! The table is closed and ordered. The first signature that matches wins;
//! later entries are not consulted even if they would also match.

use lazy_static::lazy_static;
use tracing::debug;

use super::{BugFinding, Signature};

/// A defect signature with its canned diagnosis and fix.
pub struct BugSignature {
    pub id: &'static str,
    pub signature: Signature,
    pub label: &'static str,
    pub issue: &'static str,
    pub problem: &'static str,
    pub fix: &'static str,
    pub corrected_code: &'static str,
}

impl BugSignature {
    fn to_finding(&self) -> BugFinding {
        BugFinding {
            signature: self.id.to_string(),
            label: self.label.to_string(),
            issue: self.issue.to_string(),
            problem: self.problem.to_string(),
            fix: self.fix.to_string(),
            corrected_code: self.corrected_code.to_string(),
        }
    }
}

lazy_static! {
    /// Built-in signatures, in priority order.
    pub static ref BUG_SIGNATURES: Vec<BugSignature> = vec![
        BugSignature {
            id: "off_by_one_loop",
            signature: Signature::Literal("i <= numbers.length"),
            label: "Array Index Error",
            issue: "Loop condition 'i <= numbers.length' will cause array out-of-bounds error.",
            problem: "Arrays are zero-indexed, so valid indices are 0 to length-1.",
            fix: "Change to 'i < numbers.length'",
            corrected_code: "function calculateAverage(numbers) {\n    let sum = 0;\n    for (let i = 0; i < numbers.length; i++) {\n        sum += numbers[i];\n    }\n    return sum / numbers.length;\n}",
        },
        BugSignature {
            id: "assignment_in_condition",
            signature: Signature::pattern(r"\bif\s*\(\s*[A-Za-z_$][\w$.]*\s*=[^=]"),
            label: "Assignment in Condition",
            issue: "The if condition uses a single '=' which assigns instead of comparing.",
            problem: "The assignment always runs, and the branch depends on the assigned value rather than a comparison.",
            fix: "Use '===' to compare values inside conditions",
            corrected_code: "function isAdmin(user) {\n    if (user.role === 'admin') {\n        return true;\n    }\n    return false;\n}",
        },
        BugSignature {
            id: "loose_equality",
            signature: Signature::pattern(r"(?:[^=!<>]==|!=)[^=]"),
            label: "Loose Equality",
            issue: "Comparison uses '==' or '!=' which converts types before comparing.",
            problem: "Type coercion makes values like 0, '' and false compare equal, which hides bugs.",
            fix: "Use strict equality '===' and '!=='",
            corrected_code: "function isZero(value) {\n    return value === 0;\n}",
        },
    ];
}

/// Find the first known defect in the text.
pub fn detect_bug(text: &str) -> Option<BugFinding> {
    let sig = BUG_SIGNATURES.iter().find(|s| s.signature.matches(text))?;
    debug!(signature = sig.id, pattern = sig.signature.as_str(), "bug signature matched");
    Some(sig.to_finding())
}
