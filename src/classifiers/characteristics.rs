//! Behavioral characteristic extraction.

use std::collections::BTreeSet;

use crate::core::Characteristic;

use super::patterns;

/// Extracts descriptive tags from a file's path and content.
///
/// Each tag matches independently against its own keyword group; tags
/// freely co-occur and never influence the final category.
pub struct CharacteristicsExtractor {
    groups: Vec<(Characteristic, Vec<String>)>,
}

impl Default for CharacteristicsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacteristicsExtractor {
    /// Create an extractor from the built-in keyword tables.
    pub fn new() -> Self {
        let groups = patterns::characteristic_groups()
            .iter()
            .map(|(tag, keywords)| (*tag, keywords.iter().map(|k| k.to_string()).collect()))
            .collect();
        Self { groups }
    }

    /// Extract all tags present in the path or content.
    pub fn extract(&self, path: &str, content: &str) -> BTreeSet<Characteristic> {
        let haystack = format!("{}\n{}", path.to_lowercase(), content.to_lowercase());
        self.groups
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k.as_str())))
            .map(|(tag, _)| *tag)
            .collect()
    }
}
