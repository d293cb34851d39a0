//! Algorithm recognition for the analysis report.
//!
//! Each rule pairs a signature with a canned complexity remark. Every rule is
//! evaluated; all matching remarks are kept in definition order.

use lazy_static::lazy_static;
use tracing::debug;

use super::{AlgorithmRemark, Signature};

/// An algorithm-recognition rule.
pub struct AlgorithmRule {
    pub id: &'static str,
    pub signature: Signature,
    pub remark: &'static str,
}

lazy_static! {
    /// Built-in rules, in report order.
    pub static ref ALGORITHM_RULES: Vec<AlgorithmRule> = vec![
        AlgorithmRule {
            id: "fibonacci",
            signature: Signature::Literal("fibonacci"),
            remark: "This is a recursive Fibonacci implementation with O(2^n) time complexity. \
                     Consider using dynamic programming for better performance.",
        },
        AlgorithmRule {
            id: "factorial",
            signature: Signature::Literal("factorial"),
            remark: "This looks like a recursive factorial with O(n) call depth. \
                     An iterative loop avoids stack overflow on large inputs.",
        },
        AlgorithmRule {
            id: "bubble_sort",
            signature: Signature::Literal("bubbleSort"),
            remark: "Bubble sort performs O(n^2) comparisons. \
                     For anything beyond small arrays prefer the built-in Array.prototype.sort.",
        },
        AlgorithmRule {
            id: "binary_search",
            signature: Signature::Literal("binarySearch"),
            remark: "Binary search runs in O(log n) time but only works on sorted input. \
                     Make sure the array is sorted before searching.",
        },
    ];
}

/// Apply every algorithm rule to the text and collect the remarks that fire.
pub fn detect_algorithms(text: &str) -> Vec<AlgorithmRemark> {
    ALGORITHM_RULES
        .iter()
        .filter(|rule| rule.signature.matches(text))
        .map(|rule| {
            debug!(rule = rule.id, signature = rule.signature.as_str(), "algorithm rule matched");
            AlgorithmRemark {
                rule: rule.id.to_string(),
                remark: rule.remark.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_detected() {
        let remarks = detect_algorithms("function fibonacci(n) { return n; }");
        assert_eq!(remarks.len(), 1);
        assert_eq!(remarks[0].rule, "fibonacci");
        assert!(remarks[0].remark.contains("O(2^n)"));
    }

    #[test]
    fn test_no_rules_fire() {
        assert!(detect_algorithms("let x = 1;").is_empty());
    }

    #[test]
    fn test_multiple_rules_keep_definition_order() {
        // binarySearch appears first in the text but is defined last
        let code = "binarySearch(arr, 3);\nfunction fibonacci(n) {}";
        let remarks = detect_algorithms(code);
        let ids: Vec<_> = remarks.iter().map(|r| r.rule.as_str()).collect();
        assert_eq!(ids, vec!["fibonacci", "binary_search"]);
    }

    #[test]
    fn test_rule_ids_unique() {
        let mut ids: Vec<_> = ALGORITHM_RULES.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ALGORITHM_RULES.len());
    }
}
