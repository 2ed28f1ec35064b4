//! Suite-level distribution analysis.
//!
//! Aggregates per-file profiles into counts, percentages, a balance score
//! against the ideal test-pyramid ratio, and improvement recommendations.
//! Runs as a single reduction over the complete profile set; it is not
//! meaningful incrementally because the score and the percentage-based
//! rules only hold over the whole suite.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{BalanceConfig, Config, RecommendationThresholds};
use crate::core::{TestCategory, TestFileProfile, TestSuiteProfile};

/// Builds a [`TestSuiteProfile`] from the complete set of file profiles.
pub struct DistributionAnalyzer {
    balance: BalanceConfig,
    thresholds: RecommendationThresholds,
}

impl Default for DistributionAnalyzer {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

impl DistributionAnalyzer {
    /// Create an analyzer with the default 70/20/10 ideal ratio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer from configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            balance: config.balance.clone(),
            thresholds: config.recommendations.clone(),
        }
    }

    /// Aggregate file profiles into a suite profile.
    ///
    /// An empty input produces a valid all-zero profile; nothing here can
    /// fail for degenerate suites.
    pub fn analyze(&self, profiles: &[TestFileProfile]) -> TestSuiteProfile {
        let total = profiles.len();

        let mut counts: BTreeMap<TestCategory, usize> =
            TestCategory::ALL.iter().map(|c| (*c, 0)).collect();
        let mut by_category: BTreeMap<TestCategory, Vec<String>> = BTreeMap::new();
        let mut frameworks: BTreeSet<String> = BTreeSet::new();
        let mut total_lines = 0usize;

        for profile in profiles {
            *counts.entry(profile.final_category).or_insert(0) += 1;
            by_category
                .entry(profile.final_category)
                .or_default()
                .push(profile.path.clone());
            frameworks.extend(profile.frameworks.iter().cloned());
            total_lines += profile.lines;
        }
        for paths in by_category.values_mut() {
            paths.sort();
        }

        let percentages: BTreeMap<TestCategory, f64> = counts
            .iter()
            .map(|(category, count)| {
                let share = if total > 0 {
                    100.0 * *count as f64 / total as f64
                } else {
                    0.0
                };
                (*category, share)
            })
            .collect();

        let balance_score = self.balance_score(&percentages, total);
        let recommendations = self.recommendations(&percentages, &frameworks, total);

        let avg_lines = if total > 0 {
            total_lines as f64 / total as f64
        } else {
            0.0
        };

        let suite = TestSuiteProfile {
            total,
            counts,
            percentages,
            balance_score,
            frameworks: frameworks.into_iter().collect(),
            by_category,
            avg_lines,
            recommendations,
        };

        tracing::info!(
            total = suite.total,
            balance_score = suite.balance_score,
            recommendations = suite.recommendations.len(),
            "built suite profile"
        );
        suite
    }

    /// Score the distribution against the ideal pyramid ratio.
    ///
    /// The penalty is the summed absolute percentage-point deviation of the
    /// unit, integration, and e2e shares from their ideals, so a suite 100
    /// points away from the ideal scores 0. Performance and unknown shares
    /// are reported but not penalized. Clamped to [0, 100]; an empty suite
    /// scores 0.
    fn balance_score(&self, percentages: &BTreeMap<TestCategory, f64>, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let share = |category: TestCategory| percentages.get(&category).copied().unwrap_or(0.0);
        let deviation = (share(TestCategory::Unit) - self.balance.ideal_unit).abs()
            + (share(TestCategory::Integration) - self.balance.ideal_integration).abs()
            + (share(TestCategory::E2e) - self.balance.ideal_e2e).abs();
        (100.0 - deviation).clamp(0.0, 100.0)
    }

    /// Evaluate the fixed recommendation rules, in priority order.
    ///
    /// Each rule contributes at most one string per run, and emission order
    /// follows the rule order regardless of which shares are worst.
    fn recommendations(
        &self,
        percentages: &BTreeMap<TestCategory, f64>,
        frameworks: &BTreeSet<String>,
        total: usize,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();
        if total == 0 {
            return recommendations;
        }
        let share = |category: TestCategory| percentages.get(&category).copied().unwrap_or(0.0);

        if share(TestCategory::Unit) < self.thresholds.min_unit_percent {
            recommendations.push(
                "Increase unit test coverage: fast, isolated unit tests should form the bulk of the suite."
                    .to_string(),
            );
        }
        if share(TestCategory::Integration) > self.thresholds.max_integration_percent {
            recommendations.push(
                "Convert some integration tests to faster unit tests; integration-heavy suites are slow to run and costly to maintain."
                    .to_string(),
            );
        }
        if share(TestCategory::E2e) > self.thresholds.max_e2e_percent {
            recommendations.push(
                "Reduce the number of end-to-end tests; they are expensive to run and prone to flakiness. Cover those paths with unit or integration tests instead."
                    .to_string(),
            );
        }
        if frameworks.len() > 1 {
            let names: Vec<&str> = frameworks.iter().map(String::as_str).collect();
            recommendations.push(format!(
                "Multiple test frameworks detected ({}); standardize on one to simplify tooling and onboarding.",
                names.join(", ")
            ));
        }
        if share(TestCategory::Unknown) > self.thresholds.max_unknown_percent {
            recommendations.push(
                "Many test files could not be categorized; adopt consistent naming and directory conventions (tests/unit, tests/integration, tests/e2e)."
                    .to_string(),
            );
        }
        recommendations
    }
}
