//! Per-file classification pipeline.
//!
//! [`TestClassifier`] runs the path classifier, content classifier,
//! characteristics extractor, and framework detector independently over a
//! file and resolves the signals into one [`TestFileProfile`].

pub mod characteristics;
pub mod content;
pub mod frameworks;
pub mod path;
pub mod patterns;
pub mod resolver;

use rayon::prelude::*;

use crate::config::Config;
use crate::core::{Result, TestFileProfile};

pub use characteristics::CharacteristicsExtractor;
pub use content::ContentClassifier;
pub use frameworks::FrameworkDetector;
pub use path::PathClassifier;

/// Classifies individual test files into test-pyramid categories.
pub struct TestClassifier {
    path: PathClassifier,
    content: ContentClassifier,
    characteristics: CharacteristicsExtractor,
    frameworks: FrameworkDetector,
}

impl Default for TestClassifier {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

impl TestClassifier {
    /// Create a classifier with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier from configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            path: PathClassifier::new(),
            content: ContentClassifier::with_config(&config.content),
            characteristics: CharacteristicsExtractor::new(),
            frameworks: FrameworkDetector::new(),
        }
    }

    /// Classify one test file from its path and raw text.
    ///
    /// Total over its inputs: a file matching nothing comes back as
    /// `Unknown`, never as an error. Pure function of `(path, content)`.
    pub fn classify_file(&self, path: &str, content: &str) -> TestFileProfile {
        let path_category = self.path.classify(path);
        let (content_category, content_scores) = self.content.classify_content(content);
        let final_category = resolver::resolve(path_category, content_category);

        tracing::debug!(
            path,
            path_category = %path_category,
            content_category = %content_category,
            final_category = %final_category,
            "classified test file"
        );

        TestFileProfile {
            path: path.to_string(),
            path_category,
            content_category,
            final_category,
            characteristics: self.characteristics.extract(path, content),
            content_scores,
            frameworks: self.frameworks.detect(content),
            lines: content.lines().count(),
        }
    }

    /// Classify one test file from raw bytes.
    ///
    /// Rejects content that is not valid UTF-8 with `Error::InvalidInput`;
    /// binary files should be filtered out by the caller.
    pub fn classify_file_bytes(&self, path: &str, content: &[u8]) -> Result<TestFileProfile> {
        let text = std::str::from_utf8(content).map_err(|_| {
            crate::core::Error::invalid_input(format!("content of {path} is not valid UTF-8"))
        })?;
        Ok(self.classify_file(path, text))
    }

    /// Classify a batch of `(path, content)` pairs in parallel.
    ///
    /// Per-file classification shares no state, so files fan out across
    /// the rayon pool. Output order matches input order.
    pub fn classify_files(&self, files: &[(String, String)]) -> Vec<TestFileProfile> {
        let profiles: Vec<TestFileProfile> = files
            .par_iter()
            .map(|(path, content)| self.classify_file(path, content))
            .collect();

        tracing::info!("classified {} test files", profiles.len());
        profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TestCategory;

    #[test]
    fn test_classify_file_unit_scenario() {
        let classifier = TestClassifier::new();
        let profile = classifier.classify_file(
            "tests/unit/test_math.py",
            "def test_add(): assert add(1,2) == 3",
        );
        assert_eq!(profile.path_category, TestCategory::Unit);
        assert_eq!(profile.content_category, TestCategory::Unit);
        assert_eq!(profile.final_category, TestCategory::Unit);
    }

    #[test]
    fn test_classify_file_is_idempotent() {
        let classifier = TestClassifier::new();
        let path = "tests/integration/test_user_service.py";
        let content = "def test_q():\n    user = db.session.query(User).first()\n    requests.get('/api/users')\n";
        let first = classifier.classify_file(path, content);
        let second = classifier.classify_file(path, content);
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_file_bytes_rejects_invalid_utf8() {
        let classifier = TestClassifier::new();
        let result = classifier.classify_file_bytes("tests/test_bin.py", &[0xff, 0xfe, 0x00]);
        assert!(matches!(
            result,
            Err(crate::core::Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_classify_file_bytes_accepts_utf8() {
        let classifier = TestClassifier::new();
        let profile = classifier
            .classify_file_bytes("tests/test_ok.py", b"assert True")
            .unwrap();
        assert_eq!(profile.content_category, TestCategory::Unit);
    }

    #[test]
    fn test_classify_files_preserves_order() {
        let classifier = TestClassifier::new();
        let files = vec![
            ("tests/unit/test_a.py".to_string(), "assert a".to_string()),
            ("tests/e2e/test_b.py".to_string(), "webdriver".to_string()),
            ("tests/perf/test_c.py".to_string(), "benchmark".to_string()),
        ];
        let profiles = classifier.classify_files(&files);
        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[0].path, "tests/unit/test_a.py");
        assert_eq!(profiles[1].final_category, TestCategory::E2e);
        assert_eq!(profiles[2].final_category, TestCategory::Performance);
    }

    #[test]
    fn test_degenerate_file_still_produces_profile() {
        let classifier = TestClassifier::new();
        let profile = classifier.classify_file("", "");
        assert_eq!(profile.final_category, TestCategory::Unknown);
        assert!(profile.characteristics.is_empty());
        assert_eq!(profile.lines, 0);
    }
}
