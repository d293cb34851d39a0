//! Per-learner session state.
//!
//! A `Session` is owned by the front end and mutated only through its
//! methods. Nothing is global: two sessions over the same catalog are
//! independent.

mod exercise;
mod picker;
mod tutorial;

pub use exercise::ExerciseSelector;
pub use picker::Picker;
pub use tutorial::TutorialNavigator;

use std::sync::Arc;

use crate::content::{Catalog, Exercise};
use crate::detect::{run_analysis, run_debug, AnalysisReport, DebugReport, Feedback};
use crate::error::{MentorError, Result};

/// How unknown difficulty and topic keys are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectorPolicy {
    /// Unknown keys are ignored and the state is unchanged.
    #[default]
    Lenient,
    /// Unknown keys are reported as `MentorError::InvalidSelector`.
    Strict,
}

impl SelectorPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            SelectorPolicy::Strict
        } else {
            SelectorPolicy::Lenient
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, SelectorPolicy::Strict)
    }
}

/// Mutable state for one learner.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    policy: SelectorPolicy,
    picker: Picker,
    analysis_input: String,
    analysis: Option<Feedback<AnalysisReport>>,
    debug_input: String,
    debug: Option<Feedback<DebugReport>>,
    exercises: ExerciseSelector,
    tutorial: TutorialNavigator,
}

impl Session {
    /// Create a lenient session with an entropy-seeded picker.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            policy: SelectorPolicy::default(),
            picker: Picker::from_entropy(),
            analysis_input: String::new(),
            analysis: None,
            debug_input: String::new(),
            debug: None,
            exercises: ExerciseSelector::new(),
            tutorial: TutorialNavigator::new(),
        }
    }

    pub fn with_policy(mut self, policy: SelectorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_picker(mut self, picker: Picker) -> Self {
        self.picker = picker;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> SelectorPolicy {
        self.policy
    }

    // -- feedback ------------------------------------------------------------

    /// Analyze `text`, remembering the input and the result.
    pub fn analyze(&mut self, text: &str) -> &Feedback<AnalysisReport> {
        self.analysis_input = text.to_string();
        self.analysis.insert(run_analysis(text))
    }

    /// Debug `text`, remembering the input and the result.
    pub fn debug(&mut self, text: &str) -> &Feedback<DebugReport> {
        self.debug_input = text.to_string();
        self.debug.insert(run_debug(text))
    }

    pub fn analysis_input(&self) -> &str {
        &self.analysis_input
    }

    /// Last analysis result, if `analyze` has been called.
    pub fn last_analysis(&self) -> Option<&Feedback<AnalysisReport>> {
        self.analysis.as_ref()
    }

    pub fn debug_input(&self) -> &str {
        &self.debug_input
    }

    /// Last debug result, if `debug` has been called.
    pub fn last_debug(&self) -> Option<&Feedback<DebugReport>> {
        self.debug.as_ref()
    }

    // -- exercises -----------------------------------------------------------

    /// Select a random exercise of difficulty `key`.
    ///
    /// Unknown keys return `Ok(None)` under the lenient policy and
    /// `InvalidSelector` under the strict one; either way nothing changes.
    pub fn select_difficulty(&mut self, key: &str) -> Result<Option<&Exercise>> {
        let strict = self.policy.is_strict();
        match self.exercises.select(&self.catalog, &mut self.picker, key) {
            Some(ex) => Ok(Some(ex)),
            None if strict => Err(MentorError::invalid_difficulty(key)),
            None => Ok(None),
        }
    }

    /// New exercise of the current difficulty. `None` when nothing is selected.
    pub fn regenerate(&mut self) -> Option<&Exercise> {
        self.exercises.regenerate(&self.catalog, &mut self.picker)
    }

    /// Flip solution visibility; returns the new visibility.
    pub fn toggle_solution(&mut self) -> bool {
        self.exercises.toggle_solution()
    }

    pub fn exercises(&self) -> &ExerciseSelector {
        &self.exercises
    }

    // -- tutorials -----------------------------------------------------------

    /// Start a tutorial topic at its first step.
    ///
    /// Returns `Ok(false)` for unknown topics under the lenient policy.
    pub fn start_topic(&mut self, topic: &str) -> Result<bool> {
        if self.tutorial.start(&self.catalog, topic) {
            return Ok(true);
        }
        if self.policy.is_strict() {
            return Err(MentorError::invalid_topic(topic));
        }
        Ok(false)
    }

    pub fn next_step(&mut self) -> bool {
        self.tutorial.next()
    }

    pub fn previous_step(&mut self) -> bool {
        self.tutorial.previous()
    }

    pub fn tutorial(&self) -> &TutorialNavigator {
        &self.tutorial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Difficulty;

    fn session() -> Session {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        Session::new(catalog).with_picker(Picker::seeded(3))
    }

    #[test]
    fn test_feedback_is_remembered() {
        let mut s = session();
        assert!(s.last_analysis().is_none());

        s.analyze("let x = 1;");
        assert_eq!(s.analysis_input(), "let x = 1;");
        assert!(!s.last_analysis().unwrap().is_prompt());

        s.debug("");
        assert!(s.last_debug().unwrap().is_prompt());
    }

    #[test]
    fn test_lenient_unknown_difficulty() {
        let mut s = session();
        assert!(s.select_difficulty("expert").unwrap().is_none());
        assert!(s.exercises().current().is_none());
    }

    #[test]
    fn test_strict_unknown_difficulty() {
        let mut s = session().with_policy(SelectorPolicy::Strict);
        s.select_difficulty("intermediate").unwrap();

        let err = s.select_difficulty("expert").unwrap_err();
        assert!(err.is_invalid_selector());
        assert_eq!(
            s.exercises().current().unwrap().difficulty,
            Difficulty::Intermediate
        );
    }

    #[test]
    fn test_strict_unknown_topic() {
        let mut s = session().with_policy(SelectorPolicy::Strict);
        assert!(s.start_topic("functions").unwrap());
        assert!(s.start_topic("loops").unwrap_err().is_invalid_selector());
        assert_eq!(s.tutorial().tutorial().unwrap().topic, "functions");
    }

    #[test]
    fn test_lenient_unknown_topic() {
        let mut s = session();
        assert!(!s.start_topic("loops").unwrap());
        assert!(!s.tutorial().is_active());
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let mut a = Session::new(Arc::clone(&catalog)).with_picker(Picker::seeded(99));
        let mut b = Session::new(catalog).with_picker(Picker::seeded(99));
        for _ in 0..10 {
            let ta = a.select_difficulty("beginner").unwrap().unwrap().title.clone();
            let tb = b.select_difficulty("beginner").unwrap().unwrap().title.clone();
            assert_eq!(ta, tb);
        }
    }

    #[test]
    fn test_tutorial_walkthrough() {
        let mut s = session();
        s.start_topic("variables").unwrap();
        assert_eq!(s.tutorial().progress(), Some(50.0));
        assert!(s.next_step());
        assert_eq!(s.tutorial().progress(), Some(100.0));
        assert!(!s.next_step());
        assert!(s.previous_step());
        assert_eq!(s.tutorial().current_step().unwrap().title, "What are Variables?");
    }
}
