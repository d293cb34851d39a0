//! Feedback runner that orchestrates metrics and rule tables.

use tracing::debug;

use super::{
    detect_algorithms, detect_bug, extract, is_blank, AnalysisReport, DebugReport, Feedback, Mode,
};

/// Run the analysis rule set. Blank input yields the analyze prompt.
pub fn run_analysis(text: &str) -> Feedback<AnalysisReport> {
    if is_blank(text) {
        return Feedback::prompt(Mode::Analyze);
    }

    let metrics = extract(text);
    let remarks = detect_algorithms(text);
    debug!(
        lines = metrics.lines,
        functions = metrics.functions,
        variables = metrics.variables,
        remarks = remarks.len(),
        "analysis complete"
    );

    Feedback::Report(AnalysisReport { metrics, remarks })
}

/// Run the bug signature table. Blank input yields the debug prompt.
pub fn run_debug(text: &str) -> Feedback<DebugReport> {
    if is_blank(text) {
        return Feedback::prompt(Mode::Debug);
    }

    let finding = detect_bug(text);
    if finding.is_none() {
        debug!("no bug signature matched");
    }

    Feedback::Report(DebugReport { finding })
}

/// Analyze code and return the formatted report text.
pub fn analyze(text: &str) -> String {
    run_analysis(text).to_string()
}

/// Debug code and return the formatted report text.
pub fn debug(text: &str) -> String {
    run_debug(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{ANALYZE_PROMPT, DEBUG_PROMPT};

    #[test]
    fn test_blank_input_prompts() {
        for input in ["", "   ", "\n\t\n", "\u{FEFF}", "\u{FEFF}\n "] {
            assert_eq!(analyze(input), ANALYZE_PROMPT);
            assert_eq!(debug(input), DEBUG_PROMPT);
            assert!(run_analysis(input).is_prompt());
            assert!(run_debug(input).is_prompt());
        }
    }

    #[test]
    fn test_run_analysis_report() {
        let feedback = run_analysis("function fibonacci(n) {\n  return n;\n}");
        let report = feedback.report().unwrap();
        assert_eq!(report.metrics.lines, 3);
        assert_eq!(report.metrics.functions, 1);
        assert!(report.has_remark("fibonacci"));
    }

    #[test]
    fn test_run_debug_without_finding() {
        let feedback = run_debug("console.log('hi');");
        assert!(!feedback.report().unwrap().has_finding());
    }
}
