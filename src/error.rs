//! Error types for codementor.
//!
//! Feedback itself never fails: blank text yields a prompt and unmatched text
//! yields generic tips. Errors come from loading content and configuration,
//! and from unknown selector keys when strict selection is enabled.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for codementor operations.
pub type Result<T> = std::result::Result<T, MentorError>;

/// What kind of key an invalid selector named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Difficulty,
    Topic,
}

impl std::fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectorKind::Difficulty => write!(f, "difficulty"),
            SelectorKind::Topic => write!(f, "topic"),
        }
    }
}

/// Errors that can occur while loading content or driving a session.
#[derive(Error, Debug)]
pub enum MentorError {
    /// Unknown difficulty or topic key (strict selection only).
    #[error("unknown {kind} {key:?}")]
    InvalidSelector { kind: SelectorKind, key: String },

    /// Catalog could not be parsed or failed validation.
    #[error("invalid catalog: {0}")]
    Catalog(String),

    /// Configuration could not be parsed or failed validation.
    #[error("invalid config {path:?}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MentorError {
    pub fn invalid_difficulty(key: &str) -> Self {
        MentorError::InvalidSelector {
            kind: SelectorKind::Difficulty,
            key: key.to_string(),
        }
    }

    pub fn invalid_topic(key: &str) -> Self {
        MentorError::InvalidSelector {
            kind: SelectorKind::Topic,
            key: key.to_string(),
        }
    }

    /// Whether this error is a rejected selector key.
    pub fn is_invalid_selector(&self) -> bool {
        matches!(self, MentorError::InvalidSelector { .. })
    }
}
