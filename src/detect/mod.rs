//! Heuristic feedback on submitted code.

mod algorithms;
mod bugs;
mod metrics;
mod runner;
mod signature;
mod types;

pub use algorithms::{detect_algorithms, AlgorithmRule, ALGORITHM_RULES};
pub use bugs::{detect_bug, BugSignature, BUG_SIGNATURES};
pub use metrics::{count_lines, extract, is_blank, Metrics};
pub use runner::{analyze, debug, run_analysis, run_debug};
pub use signature::Signature;
pub use types::{
    AlgorithmRemark, AnalysisReport, BugFinding, DebugReport, Feedback, Mode, ANALYZE_PROMPT,
    DEBUG_PROMPT,
};
