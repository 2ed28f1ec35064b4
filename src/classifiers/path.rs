//! Path-based category inference.

use crate::core::TestCategory;

use super::patterns;

/// Classifies a file by its repository-relative path alone.
///
/// Marker groups are tried in fixed priority order (e2e > performance >
/// integration > unit); the first group with a substring hit wins. A path
/// matching nothing is `Unknown`.
pub struct PathClassifier {
    groups: Vec<(TestCategory, Vec<String>)>,
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PathClassifier {
    /// Create a classifier from the built-in marker tables.
    pub fn new() -> Self {
        let groups = patterns::path_marker_groups()
            .iter()
            .map(|(category, markers)| {
                (*category, markers.iter().map(|m| m.to_string()).collect())
            })
            .collect();
        Self { groups }
    }

    /// Classify a path. Pure function of its input.
    pub fn classify(&self, path: &str) -> TestCategory {
        let lower = path.to_lowercase();
        for (category, markers) in &self.groups {
            if markers.iter().any(|marker| lower.contains(marker.as_str())) {
                return *category;
            }
        }
        TestCategory::Unknown
    }
}
