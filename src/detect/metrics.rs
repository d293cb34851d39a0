//! Simple lexical metrics over submitted source text.
//!
//! No parsing happens here: functions and declarations are counted by
//! matching their introducing keywords.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// `function <identifier>`
    static ref FUNCTION_PATTERN: Regex = Regex::new(r"function\s+(?-u:\w)+").unwrap();

    /// `let|const|var <identifier>`, without a leading word boundary.
    static ref VARIABLE_PATTERN: Regex = Regex::new(r"(?:let|const|var)\s+(?-u:\w)+").unwrap();
}

/// Counts reported in the analysis header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub lines: usize,
    pub functions: usize,
    pub variables: usize,
}

/// Compute metrics for the given text.
pub fn extract(text: &str) -> Metrics {
    Metrics {
        lines: count_lines(text),
        functions: FUNCTION_PATTERN.find_iter(text).count(),
        variables: VARIABLE_PATTERN.find_iter(text).count(),
    }
}

/// Number of `\n`-delimited segments. An empty string is one segment.
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

/// Returns true when there is nothing but whitespace to analyze.
///
/// A byte-order mark counts as whitespace, so a file saved with only a BOM
/// is blank.
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}
