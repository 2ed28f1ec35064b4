//! Configuration loading and management.
//!
//! All tunable constants of the classifiers and the distribution analyzer
//! live here so that behavior is reproducible and adjustable without code
//! changes. Every struct carries `#[serde(default)]`, so partial config
//! files only override what they mention.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Result, TestCategory};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content scorer configuration.
    pub content: ContentConfig,
    /// Ideal test-pyramid ratio for balance scoring.
    pub balance: BalanceConfig,
    /// Thresholds that trigger improvement recommendations.
    pub recommendations: RecommendationThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: ContentConfig::default(),
            balance: BalanceConfig::default(),
            recommendations: RecommendationThresholds::default(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit file path.
    ///
    /// Errors if the file does not exist. Use this for explicit
    /// `--config`-style call sites.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(crate::core::Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, looking for `testpulse.toml`.
    ///
    /// A missing file is silently skipped and defaults are used.
    pub fn load_default(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join("testpulse.toml");
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Annotated default config file content.
    pub fn default_toml() -> &'static str {
        include_str!("default_config.toml")
    }

    /// Reject configurations the analyzers cannot honor.
    fn validate(&self) -> Result<()> {
        let ideal_sum =
            self.balance.ideal_unit + self.balance.ideal_integration + self.balance.ideal_e2e;
        if !(99.0..=101.0).contains(&ideal_sum) {
            return Err(crate::core::Error::config(format!(
                "ideal ratio must sum to 100, got {ideal_sum}"
            )));
        }
        for custom in &self.content.custom_patterns {
            if custom.category == TestCategory::Unknown {
                return Err(crate::core::Error::config(
                    "custom patterns cannot target the 'unknown' category",
                ));
            }
            if custom.pattern.is_empty() {
                return Err(crate::core::Error::config("custom pattern must not be empty"));
            }
        }
        Ok(())
    }
}

/// Content scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Score contributed by each pattern occurrence.
    pub pattern_weight: u32,
    /// Maximum counted occurrences per pattern, so a single repeated
    /// keyword cannot dominate the score.
    pub pattern_cap: u32,
    /// Extra keyword patterns merged into the built-in tables.
    pub custom_patterns: Vec<CustomPattern>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            pattern_weight: 1,
            pattern_cap: 5,
            custom_patterns: Vec::new(),
        }
    }
}

/// A user-supplied content keyword tied to a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPattern {
    /// Category the pattern counts toward. Must not be `unknown`.
    pub category: TestCategory,
    /// Case-insensitive substring to match.
    pub pattern: String,
}

/// Ideal test-pyramid ratio.
///
/// Performance and unknown shares are reported but excluded from the
/// balance comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Ideal unit-test share, percent.
    pub ideal_unit: f64,
    /// Ideal integration-test share, percent.
    pub ideal_integration: f64,
    /// Ideal end-to-end share, percent.
    pub ideal_e2e: f64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            ideal_unit: 70.0,
            ideal_integration: 20.0,
            ideal_e2e: 10.0,
        }
    }
}

/// Thresholds that trigger improvement recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    /// Recommend more unit tests below this unit share.
    pub min_unit_percent: f64,
    /// Recommend trimming integration tests above this share.
    pub max_integration_percent: f64,
    /// Recommend reducing end-to-end tests above this share.
    pub max_e2e_percent: f64,
    /// Recommend naming conventions above this unknown share.
    pub max_unknown_percent: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            min_unit_percent: 50.0,
            max_integration_percent: 40.0,
            max_e2e_percent: 20.0,
            max_unknown_percent: 20.0,
        }
    }
}
