//! codementor - heuristic code feedback and guided practice.
//!
//! Gives feedback on submitted code snippets, hands out leveled practice
//! exercises, and walks learners through step-based tutorials. Feedback is
//! heuristic: submitted text is never parsed or executed, only matched
//! against literal signatures and simple lexical patterns.
//!
//! # Architecture
//!
//! - `detect`: metrics, algorithm rules, and bug signatures
//! - `content`: exercise and tutorial catalogs
//! - `session`: exercise selection and tutorial navigation state
//! - `report`: output formatting (text, pretty, JSON)
//! - `config`: YAML settings file
//! - `cli`: command-line front end

pub mod cli;
pub mod config;
pub mod content;
pub mod detect;
pub mod error;
pub mod logging;
pub mod report;
pub mod session;

pub use config::Config;
pub use content::{Catalog, Difficulty, Exercise, Tutorial, TutorialStep};
pub use detect::{analyze, debug, AnalysisReport, DebugReport, Feedback, Metrics};
pub use error::{MentorError, SelectorKind};
pub use session::{ExerciseSelector, Picker, SelectorPolicy, Session, TutorialNavigator};
