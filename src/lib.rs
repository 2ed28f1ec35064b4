//! Testpulse - test-suite distribution profiler.
//!
//! Testpulse classifies the test files of a repository into test-pyramid
//! categories (unit, integration, e2e, performance, unknown), extracts
//! behavioral characteristics per file, and aggregates everything into a
//! suite-level profile with a balance score and improvement
//! recommendations.
//!
//! Classification is lexical over file paths and raw text. Reading files,
//! rendering reports, and anything that talks to the network belongs to
//! the surrounding application, not this crate.
//!
//! # Example
//!
//! ```
//! use testpulse::classifiers::TestClassifier;
//! use testpulse::config::Config;
//! use testpulse::distribution::DistributionAnalyzer;
//!
//! let config = Config::default();
//! let classifier = TestClassifier::with_config(&config);
//! let profile = classifier.classify_file(
//!     "tests/unit/test_math.py",
//!     "def test_add(): assert add(1, 2) == 3",
//! );
//!
//! let analyzer = DistributionAnalyzer::with_config(&config);
//! let suite = analyzer.analyze(&[profile]);
//! println!("balance score: {:.1}", suite.balance_score);
//! ```

pub mod classifiers;
pub mod config;
pub mod core;
pub mod discovery;
pub mod distribution;

pub use crate::core::{
    Characteristic, Error, Result, TestCategory, TestFileProfile, TestSuiteProfile,
};
pub use classifiers::TestClassifier;
pub use config::Config;
pub use distribution::DistributionAnalyzer;

/// Classify one test file with default configuration.
///
/// Entry point for the repository-scanning layer. Total over its inputs:
/// files with no signal come back as `Unknown`, never as an error.
pub fn classify_file(path: &str, content: &str) -> TestFileProfile {
    TestClassifier::new().classify_file(path, content)
}

/// Aggregate file profiles into a suite profile with default
/// configuration.
///
/// Entry point for the report-generation layer. Must be called with the
/// complete set of profiles; the balance score and recommendations are
/// only meaningful over the whole suite. An empty slice yields a valid
/// all-zero profile.
pub fn build_suite_profile(profiles: &[TestFileProfile]) -> TestSuiteProfile {
    DistributionAnalyzer::new().analyze(profiles)
}
