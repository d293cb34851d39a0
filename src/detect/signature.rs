//! Signatures: literal substrings or simple lexical patterns.

use regex::Regex;

/// Test applied to submitted text by a rule.
#[derive(Debug, Clone)]
pub enum Signature {
    /// Matches when the text contains the substring verbatim.
    Literal(&'static str),
    /// Matches when the regex finds anything in the text.
    Pattern(Regex),
}

impl Signature {
    /// Build a pattern signature from a regex literal.
    ///
    /// Rule tables are static, so an invalid pattern is a programming error.
    pub fn pattern(re: &str) -> Self {
        Signature::Pattern(Regex::new(re).unwrap())
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            Signature::Literal(s) => text.contains(s),
            Signature::Pattern(re) => re.is_match(text),
        }
    }

    /// Source form of the signature, for logging.
    pub fn as_str(&self) -> &str {
        match self {
            Signature::Literal(s) => s,
            Signature::Pattern(re) => re.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_case_sensitive() {
        let sig = Signature::Literal("fibonacci");
        assert!(sig.matches("function fibonacci(n) {}"));
        assert!(sig.matches("fibonacciMemo"));
        assert!(!sig.matches("Fibonacci"));
    }

    #[test]
    fn test_pattern() {
        let sig = Signature::pattern(r"\bif\s*\(");
        assert!(sig.matches("if (x) {}"));
        assert!(!sig.matches("elif(x)"));
        assert_eq!(sig.as_str(), r"\bif\s*\(");
    }
}
