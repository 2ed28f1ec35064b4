//! Test framework detection.

use std::collections::BTreeSet;

use super::patterns;

/// Detects which test frameworks a file uses from marker substrings.
///
/// Purely descriptive; the suite-level union of detections feeds the
/// framework-standardization recommendation.
pub struct FrameworkDetector {
    markers: Vec<(String, Vec<String>)>,
}

impl Default for FrameworkDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameworkDetector {
    /// Create a detector from the built-in marker table.
    pub fn new() -> Self {
        let markers = patterns::framework_markers()
            .iter()
            .map(|(name, markers)| {
                (
                    name.to_string(),
                    markers.iter().map(|m| m.to_string()).collect(),
                )
            })
            .collect();
        Self { markers }
    }

    /// Detect frameworks present in the file content.
    pub fn detect(&self, content: &str) -> BTreeSet<String> {
        let lower = content.to_lowercase();
        self.markers
            .iter()
            .filter(|(_, markers)| markers.iter().any(|m| lower.contains(m.as_str())))
            .map(|(name, _)| name.clone())
            .collect()
    }
}
