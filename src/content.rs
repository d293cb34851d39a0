//! Content catalogs: exercises by difficulty and tutorials by topic.
//!
//! A catalog is loaded once and read-only afterwards. The built-in catalog
//! ships with the binary; a custom one can be supplied as a YAML file with
//! the same layout as `templates/catalog.yaml`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{MentorError, Result};

/// The catalog bundled with the binary.
pub const BUILTIN_CATALOG: &str = include_str!("templates/catalog.yaml");

/// Exercise difficulty, ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Parse a catalog key. Keys are lowercase and matched exactly.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = MentorError;

    fn from_str(s: &str) -> Result<Self> {
        Difficulty::parse(s).ok_or_else(|| MentorError::invalid_difficulty(s))
    }
}

/// A practice exercise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Exercise {
    pub title: String,
    pub description: String,
    /// Starter code handed to the learner.
    pub template: String,
    /// Usage example, e.g. "findMax([3, 7]) should return 7".
    pub example: String,
    /// Reference solution.
    pub solution: String,
    pub difficulty: Difficulty,
}

/// One step of a tutorial.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TutorialStep {
    pub title: String,
    pub content: String,
    pub code: String,
}

/// A named, ordered sequence of tutorial steps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tutorial {
    /// Selection key, e.g. "variables".
    pub topic: String,
    /// Display title, e.g. "Variables & Data Types".
    pub title: String,
    pub steps: Vec<TutorialStep>,
}

/// On-disk layout of a catalog file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct CatalogFile {
    #[serde(default)]
    exercises: Vec<Exercise>,
    #[serde(default)]
    tutorials: Vec<Tutorial>,
}

/// Immutable exercise and tutorial catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    exercises: BTreeMap<Difficulty, Vec<Exercise>>,
    tutorials: Vec<Arc<Tutorial>>,
}

impl Catalog {
    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MentorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a catalog from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_yaml::from_str(yaml).map_err(|e| MentorError::Catalog(e.to_string()))?;
        Self::new(file.exercises, file.tutorials)
    }

    /// Build a catalog, grouping exercises by difficulty in their given order.
    pub fn new(exercises: Vec<Exercise>, tutorials: Vec<Tutorial>) -> Result<Self> {
        validate(&exercises, &tutorials)?;

        let mut buckets: BTreeMap<Difficulty, Vec<Exercise>> = BTreeMap::new();
        for ex in exercises {
            buckets.entry(ex.difficulty).or_default().push(ex);
        }

        Ok(Self {
            exercises: buckets,
            tutorials: tutorials.into_iter().map(Arc::new).collect(),
        })
    }

    /// Exercises in a difficulty bucket. Empty when the bucket is absent.
    pub fn exercises(&self, difficulty: Difficulty) -> &[Exercise] {
        self.exercises
            .get(&difficulty)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up a bucket by key. Unknown keys and empty buckets yield `None`.
    pub fn bucket(&self, key: &str) -> Option<&[Exercise]> {
        let difficulty = Difficulty::parse(key)?;
        let bucket = self.exercises(difficulty);
        (!bucket.is_empty()).then_some(bucket)
    }

    /// Difficulties that have at least one exercise, easiest first.
    pub fn difficulties(&self) -> impl Iterator<Item = Difficulty> + '_ {
        self.exercises.keys().copied()
    }

    pub fn tutorial(&self, topic: &str) -> Option<&Arc<Tutorial>> {
        self.tutorials.iter().find(|t| t.topic == topic)
    }

    /// Tutorials in catalog order.
    pub fn tutorials(&self) -> &[Arc<Tutorial>] {
        &self.tutorials
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.values().map(Vec::len).sum()
    }
}

/// Validate catalog content.
fn validate(exercises: &[Exercise], tutorials: &[Tutorial]) -> Result<()> {
    for (i, ex) in exercises.iter().enumerate() {
        if ex.title.trim().is_empty() {
            return Err(MentorError::Catalog(format!(
                "exercise #{} ({}) has an empty title",
                i + 1,
                ex.difficulty
            )));
        }
    }

    let mut seen = HashSet::new();
    for t in tutorials {
        if t.topic.trim().is_empty() {
            return Err(MentorError::Catalog(format!(
                "tutorial {:?} has an empty topic key",
                t.title
            )));
        }
        if !seen.insert(t.topic.as_str()) {
            return Err(MentorError::Catalog(format!(
                "duplicate tutorial topic {:?}",
                t.topic
            )));
        }
        if t.steps.is_empty() {
            return Err(MentorError::Catalog(format!(
                "tutorial {:?} has no steps",
                t.topic
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(title: &str) -> TutorialStep {
        TutorialStep {
            title: title.to_string(),
            content: String::new(),
            code: String::new(),
        }
    }

    fn tutorial(topic: &str, steps: usize) -> Tutorial {
        Tutorial {
            topic: topic.to_string(),
            title: topic.to_uppercase(),
            steps: (0..steps).map(|i| step(&format!("step {}", i))).collect(),
        }
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.exercises(Difficulty::Beginner).len(), 2);
        assert_eq!(catalog.exercises(Difficulty::Intermediate).len(), 1);
        assert_eq!(catalog.exercises(Difficulty::Advanced).len(), 1);
        assert_eq!(catalog.exercise_count(), 4);

        let topics: Vec<_> = catalog.tutorials().iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(topics, vec!["variables", "functions"]);
        assert_eq!(catalog.tutorial("variables").unwrap().steps.len(), 2);
        assert_eq!(catalog.tutorial("functions").unwrap().steps.len(), 1);
    }

    #[test]
    fn test_builtin_block_scalars() {
        let catalog = Catalog::builtin().unwrap();
        let find_max = &catalog.exercises(Difficulty::Beginner)[0];
        assert_eq!(find_max.title, "Find Maximum Number");
        assert_eq!(
            find_max.template,
            "function findMax(numbers) {\n    // Your code here\n}"
        );

        let greet = &catalog.tutorial("functions").unwrap().steps[0];
        assert!(greet.code.contains("}\n\nconst message"));
        assert!(!greet.code.ends_with('\n'));
    }

    #[test]
    fn test_bucket_lookup() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.bucket("beginner").is_some());
        assert!(catalog.bucket("Beginner").is_none());
        assert!(catalog.bucket("expert").is_none());

        let empty = Catalog::new(vec![], vec![]).unwrap();
        assert!(empty.bucket("beginner").is_none());
        assert_eq!(empty.difficulties().count(), 0);
    }

    #[test]
    fn test_difficulty_order() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
        assert_eq!("advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("hard".parse::<Difficulty>().unwrap_err().is_invalid_selector());
    }

    #[test]
    fn test_validate_rejects_empty_tutorial() {
        let err = Catalog::new(vec![], vec![tutorial("loops", 0)]).unwrap_err();
        assert!(err.to_string().contains("no steps"));
    }

    #[test]
    fn test_validate_rejects_duplicate_topic() {
        let err = Catalog::new(vec![], vec![tutorial("loops", 1), tutorial("loops", 2)])
            .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_unknown_difficulty_in_yaml() {
        let yaml = r#"
exercises:
  - title: "X"
    difficulty: expert
    description: ""
    template: ""
    example: ""
    solution: ""
"#;
        assert!(matches!(
            Catalog::from_yaml(yaml),
            Err(MentorError::Catalog(_))
        ));
    }
}
