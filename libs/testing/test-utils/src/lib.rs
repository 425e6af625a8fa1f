//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let product_id = builder.product_id("main");
//!     let name = builder.name("product", "main");
//! }
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// Containers are shared per test binary run, so ids derived from the test
/// name keep parallel tests from colliding.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Positive product id, stable for a given seed and suffix.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("ids");
    /// assert!(builder.product_id("main") > 0);
    /// assert_eq!(builder.product_id("main"), builder.product_id("main"));
    /// ```
    pub fn product_id(&self, suffix: &str) -> i64 {
        const ID_SPACE: u64 = 1_000_000_000_000;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        suffix.hash(&mut hasher);
        (hasher.finish() % ID_SPACE) as i64 + 1
    }

    /// Unique display name, e.g. `test-product-12345-main`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that two prices match to the cent
    pub fn assert_price_eq(actual: f64, expected: f64, context: &str) {
        assert!(
            (actual - expected).abs() < 0.005,
            "{}: expected price {}, got {}",
            context,
            expected,
            actual
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.product_id("a"), builder2.product_id("a"));
        assert_eq!(
            builder1.name("product", "test"),
            builder2.name("product", "test")
        );
    }

    #[test]
    fn test_data_builder_ids_differ_by_suffix_and_test() {
        let builder = TestDataBuilder::from_test_name("test1");
        let other = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder.product_id("a"), builder.product_id("b"));
        assert_ne!(builder.product_id("a"), other.product_id("a"));
    }

    #[test]
    fn test_product_ids_are_positive() {
        for seed in 0..100 {
            assert!(TestDataBuilder::new(seed).product_id("x") >= 1);
        }
    }

    #[test]
    #[should_panic(expected = "expected price")]
    fn test_assert_price_eq_detects_mismatch() {
        assertions::assert_price_eq(9.99, 10.49, "price");
    }
}
