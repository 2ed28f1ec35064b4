//! Test-pyramid category type.

use serde::{Deserialize, Serialize};

/// Test-pyramid category assigned to a test file.
///
/// Categories are mutually exclusive per file. `Unknown` is the absorbing
/// value for files with no path or content signal; it is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestCategory {
    Unit,
    Integration,
    E2e,
    Performance,
    Unknown,
}

impl TestCategory {
    /// All categories, including `Unknown`.
    pub const ALL: [TestCategory; 5] = [
        TestCategory::Unit,
        TestCategory::Integration,
        TestCategory::E2e,
        TestCategory::Performance,
        TestCategory::Unknown,
    ];

    /// Categories the content scorer compares. `Unknown` is never scored.
    pub const SCORED: [TestCategory; 4] = [
        TestCategory::Unit,
        TestCategory::Integration,
        TestCategory::E2e,
        TestCategory::Performance,
    ];

    /// Tie-break priority shared by the path and content classifiers.
    ///
    /// Rarer, more specific signals outrank the generic test-file naming
    /// that would otherwise swallow everything.
    pub const PRIORITY: [TestCategory; 4] = [
        TestCategory::E2e,
        TestCategory::Performance,
        TestCategory::Integration,
        TestCategory::Unit,
    ];

    /// Stable lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestCategory::Unit => "unit",
            TestCategory::Integration => "integration",
            TestCategory::E2e => "e2e",
            TestCategory::Performance => "performance",
            TestCategory::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TestCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TestCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unit" => Ok(Self::Unit),
            "integration" => Ok(Self::Integration),
            "e2e" => Ok(Self::E2e),
            "performance" | "perf" => Ok(Self::Performance),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!(
                "Unknown test category: {s}. Use 'unit', 'integration', 'e2e', 'performance', or 'unknown'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str_round_trips() {
        for category in TestCategory::ALL {
            let parsed: TestCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_from_str_rejects_garbage() {
        assert!("smoke".parse::<TestCategory>().is_err());
        assert!("".parse::<TestCategory>().is_err());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&TestCategory::E2e).unwrap();
        assert_eq!(json, "\"e2e\"");
        let json = serde_json::to_string(&TestCategory::Unit).unwrap();
        assert_eq!(json, "\"unit\"");
    }

    #[test]
    fn test_priority_excludes_unknown() {
        assert!(!TestCategory::PRIORITY.contains(&TestCategory::Unknown));
        assert_eq!(TestCategory::PRIORITY[0], TestCategory::E2e);
    }
}
