//! Tutorial navigation state machine.
//!
//! `Idle` until a topic is started, then `Active` over that topic's steps.
//! While active the index stays within `0..steps.len()`, and progress is
//! always derived from it.

use std::sync::Arc;
use tracing::debug;

use crate::content::{Catalog, Tutorial, TutorialStep};

#[derive(Debug, Clone, Default)]
pub enum TutorialNavigator {
    #[default]
    Idle,
    Active {
        tutorial: Arc<Tutorial>,
        index: usize,
    },
}

impl TutorialNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `topic` at its first step. Unknown topics leave the state as is
    /// and return false. Starting a topic while another is active restarts.
    pub fn start(&mut self, catalog: &Catalog, topic: &str) -> bool {
        match catalog.tutorial(topic) {
            Some(tutorial) => {
                debug!(topic, steps = tutorial.steps.len(), "tutorial started");
                *self = TutorialNavigator::Active {
                    tutorial: Arc::clone(tutorial),
                    index: 0,
                };
                true
            }
            None => false,
        }
    }

    /// Advance one step. Returns false at the last step or when idle.
    pub fn next(&mut self) -> bool {
        match self {
            TutorialNavigator::Active { tutorial, index } if *index + 1 < tutorial.steps.len() => {
                *index += 1;
                debug!(topic = tutorial.topic.as_str(), index = *index, "tutorial next");
                true
            }
            _ => false,
        }
    }

    /// Go back one step. Returns false at the first step or when idle.
    pub fn previous(&mut self) -> bool {
        match self {
            TutorialNavigator::Active { tutorial, index } if *index > 0 => {
                *index -= 1;
                debug!(topic = tutorial.topic.as_str(), index = *index, "tutorial previous");
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TutorialNavigator::Active { .. })
    }

    pub fn tutorial(&self) -> Option<&Arc<Tutorial>> {
        match self {
            TutorialNavigator::Active { tutorial, .. } => Some(tutorial),
            TutorialNavigator::Idle => None,
        }
    }

    /// Zero-based index of the current step.
    pub fn index(&self) -> Option<usize> {
        match self {
            TutorialNavigator::Active { index, .. } => Some(*index),
            TutorialNavigator::Idle => None,
        }
    }

    /// One-based step number, as shown to the learner.
    pub fn step_number(&self) -> Option<usize> {
        self.index().map(|i| i + 1)
    }

    pub fn current_step(&self) -> Option<&TutorialStep> {
        match self {
            TutorialNavigator::Active { tutorial, index } => tutorial.steps.get(*index),
            TutorialNavigator::Idle => None,
        }
    }

    /// Percentage complete: `(index + 1) / len * 100`.
    pub fn progress(&self) -> Option<f64> {
        match self {
            TutorialNavigator::Active { tutorial, index } => {
                Some((*index + 1) as f64 / tutorial.steps.len() as f64 * 100.0)
            }
            TutorialNavigator::Idle => None,
        }
    }

    pub fn is_first(&self) -> bool {
        self.index() == Some(0)
    }

    pub fn is_last(&self) -> bool {
        match self {
            TutorialNavigator::Active { tutorial, index } => *index + 1 == tutorial.steps.len(),
            TutorialNavigator::Idle => false,
        }
    }
}
