//! Exercise selection and solution visibility.

use tracing::debug;

use super::Picker;
use crate::content::{Catalog, Exercise};

/// Currently selected exercise and whether its solution is shown.
#[derive(Debug, Clone, Default)]
pub struct ExerciseSelector {
    current: Option<Exercise>,
    solution_visible: bool,
}

impl ExerciseSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a random exercise from the bucket named by `key`.
    ///
    /// The pick becomes current and its solution is hidden. Unknown keys and
    /// empty buckets leave the selector untouched and return `None`.
    pub fn select(&mut self, catalog: &Catalog, picker: &mut Picker, key: &str) -> Option<&Exercise> {
        let bucket = catalog.bucket(key)?;
        let chosen = picker.choose(bucket)?.clone();
        debug!(difficulty = key, title = chosen.title.as_str(), "exercise selected");

        self.current = Some(chosen);
        self.solution_visible = false;
        self.current.as_ref()
    }

    /// Pick another exercise of the current exercise's difficulty.
    /// Does nothing when no exercise is selected.
    pub fn regenerate(&mut self, catalog: &Catalog, picker: &mut Picker) -> Option<&Exercise> {
        let difficulty = self.current.as_ref()?.difficulty;
        self.select(catalog, picker, difficulty.as_str())
    }

    /// Flip solution visibility and return the new state.
    /// Does nothing when no exercise is selected.
    pub fn toggle_solution(&mut self) -> bool {
        if self.current.is_some() {
            self.solution_visible = !self.solution_visible;
        }
        self.solution_visible
    }

    pub fn current(&self) -> Option<&Exercise> {
        self.current.as_ref()
    }

    pub fn solution_visible(&self) -> bool {
        self.solution_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Difficulty;

    fn setup() -> (Catalog, Picker) {
        (Catalog::builtin().unwrap(), Picker::seeded(42))
    }

    #[test]
    fn test_select_stays_in_bucket() {
        let (catalog, mut picker) = setup();
        let mut selector = ExerciseSelector::new();
        for _ in 0..25 {
            let ex = selector.select(&catalog, &mut picker, "beginner").unwrap();
            assert_eq!(ex.difficulty, Difficulty::Beginner);
        }
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let (catalog, mut picker) = setup();
        let mut selector = ExerciseSelector::new();
        selector.select(&catalog, &mut picker, "advanced");
        selector.toggle_solution();

        assert!(selector.select(&catalog, &mut picker, "expert").is_none());
        assert_eq!(selector.current().unwrap().title, "Binary Search Implementation");
        assert!(selector.solution_visible());
    }

    #[test]
    fn test_select_hides_solution() {
        let (catalog, mut picker) = setup();
        let mut selector = ExerciseSelector::new();
        selector.select(&catalog, &mut picker, "intermediate");
        assert!(selector.toggle_solution());
        selector.select(&catalog, &mut picker, "intermediate");
        assert!(!selector.solution_visible());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let (catalog, mut picker) = setup();
        let mut selector = ExerciseSelector::new();
        selector.select(&catalog, &mut picker, "beginner");
        let before = selector.solution_visible();
        selector.toggle_solution();
        selector.toggle_solution();
        assert_eq!(selector.solution_visible(), before);
    }

    #[test]
    fn test_toggle_without_exercise() {
        let mut selector = ExerciseSelector::new();
        assert!(!selector.toggle_solution());
        assert!(!selector.solution_visible());
    }

    #[test]
    fn test_regenerate_same_difficulty() {
        let (catalog, mut picker) = setup();
        let mut selector = ExerciseSelector::new();
        assert!(selector.regenerate(&catalog, &mut picker).is_none());

        selector.select(&catalog, &mut picker, "advanced");
        selector.toggle_solution();
        let ex = selector.regenerate(&catalog, &mut picker).unwrap();
        // Single-exercise bucket always yields the same exercise
        assert_eq!(ex.title, "Binary Search Implementation");
        assert!(!selector.solution_visible());
    }
}
