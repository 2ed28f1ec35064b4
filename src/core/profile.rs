//! Per-file and suite-level profile types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::TestCategory;

/// Behavioral characteristic of a test file, independent of its category.
///
/// Tags are detected from keyword groups and may freely co-occur. They are
/// descriptive metadata only and never influence the final category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Characteristic {
    UsesMocking,
    DatabaseInteraction,
    ApiInteraction,
    FileSystemInteraction,
    AsyncTesting,
    ParameterizedTests,
    UsesFixtures,
}

impl Characteristic {
    /// The full tag vocabulary.
    pub const ALL: [Characteristic; 7] = [
        Characteristic::UsesMocking,
        Characteristic::DatabaseInteraction,
        Characteristic::ApiInteraction,
        Characteristic::FileSystemInteraction,
        Characteristic::AsyncTesting,
        Characteristic::ParameterizedTests,
        Characteristic::UsesFixtures,
    ];

    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Characteristic::UsesMocking => "uses_mocking",
            Characteristic::DatabaseInteraction => "database_interaction",
            Characteristic::ApiInteraction => "api_interaction",
            Characteristic::FileSystemInteraction => "file_system_interaction",
            Characteristic::AsyncTesting => "async_testing",
            Characteristic::ParameterizedTests => "parameterized_tests",
            Characteristic::UsesFixtures => "uses_fixtures",
        }
    }
}

impl std::fmt::Display for Characteristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification result for a single test file.
///
/// Built fresh on every run; immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestFileProfile {
    /// Repository-relative file path.
    pub path: String,
    /// Category inferred from the path alone.
    pub path_category: TestCategory,
    /// Category inferred from the content alone.
    pub content_category: TestCategory,
    /// Resolved category. Always set; absence of signal resolves to `Unknown`.
    pub final_category: TestCategory,
    /// Behavioral tags detected in path and content.
    pub characteristics: BTreeSet<Characteristic>,
    /// Raw per-category content scores, kept for explainability.
    pub content_scores: BTreeMap<TestCategory, u32>,
    /// Test frameworks detected in the content.
    pub frameworks: BTreeSet<String>,
    /// Line count of the supplied content.
    pub lines: usize,
}

/// Aggregated test-distribution profile for a repository.
///
/// Derived once from the complete set of file profiles and read-only
/// afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSuiteProfile {
    /// Total number of classified test files.
    pub total: usize,
    /// File count per final category. Sums to `total`.
    pub counts: BTreeMap<TestCategory, usize>,
    /// Percentage share per final category. Sums to 100 (within rounding)
    /// when `total > 0`, all zero otherwise.
    pub percentages: BTreeMap<TestCategory, f64>,
    /// How closely the distribution matches the ideal pyramid, in [0, 100].
    pub balance_score: f64,
    /// Distinct frameworks detected across the suite, sorted.
    pub frameworks: Vec<String>,
    /// File paths per final category, sorted within each category.
    pub by_category: BTreeMap<TestCategory, Vec<String>>,
    /// Mean test file length in lines.
    pub avg_lines: f64,
    /// Improvement recommendations, most actionable first.
    pub recommendations: Vec<String>,
}
