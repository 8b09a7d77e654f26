//! Shared test utilities for task tracking tests
//!
//! This crate provides reusable test infrastructure:
//! - `TestStore`: scratch directory with a task file, removed on drop
//! - `TestDataBuilder`: deterministic test data generation
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```rust
//! use test_utils::{TestDataBuilder, TestStore};
//!
//! let store = TestStore::new();
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let description = builder.description("main");
//! let tag = builder.tag("work");
//! assert!(description.contains("main"));
//! assert!(tag.starts_with("work"));
//! # drop(store);
//! ```

mod store;

pub use store::{TASK_FILE, TestStore};

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by deriving all values from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_add_task");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a task description for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.description("main"), "test task 7 main");
    /// ```
    pub fn description(&self, suffix: &str) -> String {
        format!("test task {} {}", self.seed, suffix)
    }

    /// Generate a tag with a seed-derived suffix
    pub fn tag(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.seed % 1000)
    }

    /// Generate `count` distinct descriptions
    pub fn descriptions(&self, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| self.description(&i.to_string()))
            .collect()
    }
}

/// Test assertion helpers
pub mod assertions {
    use std::fmt::Debug;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that values are strictly increasing
    pub fn assert_strictly_ascending<T: PartialOrd + Debug>(values: &[T], context: &str) {
        for pair in values.windows(2) {
            assert!(
                pair[0] < pair[1],
                "{}: expected strictly ascending values, got {:?}",
                context,
                values
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.description("a"), builder2.description("a"));
        assert_eq!(builder1.tag("work"), builder2.tag("work"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        // Different test names should generate different data
        assert_ne!(builder1.description("x"), builder2.description("x"));
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let descriptions = TestDataBuilder::new(1).descriptions(3);
        assert_eq!(descriptions.len(), 3);
        assert_ne!(descriptions[0], descriptions[1]);
    }

    #[test]
    fn test_store_paths() {
        let store = TestStore::new();
        assert!(store.path().starts_with(store.dir()));
        assert!(!store.path().exists());

        store.write_raw("[]");
        assert_eq!(store.read_raw(), "[]");

        let blocked = store.blocked_path();
        assert!(blocked.parent().unwrap().is_file());
    }

    #[test]
    fn test_store_cleans_up_on_drop() {
        let dir = {
            let store = TestStore::with_contents("[]");
            store.dir().to_path_buf()
        };
        assert!(!dir.exists());
    }

    #[test]
    fn test_assert_strictly_ascending_accepts_sorted() {
        assertions::assert_strictly_ascending(&[1, 2, 5], "ids");
    }

    #[test]
    #[should_panic(expected = "strictly ascending")]
    fn test_assert_strictly_ascending_rejects_repeats() {
        assertions::assert_strictly_ascending(&[1, 2, 2], "ids");
    }
}
