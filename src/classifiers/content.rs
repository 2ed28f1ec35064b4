//! Content-based scoring classifier.

use std::collections::BTreeMap;

use crate::config::ContentConfig;
use crate::core::TestCategory;

use super::patterns;

/// Scores file content against per-category keyword tables and picks the
/// best-supported category.
///
/// Each pattern occurrence contributes `pattern_weight`, with occurrences
/// per pattern capped at `pattern_cap` so one repeated line cannot dominate.
pub struct ContentClassifier {
    groups: Vec<(TestCategory, Vec<String>)>,
    pattern_weight: u32,
    pattern_cap: u32,
}

impl Default for ContentClassifier {
    fn default() -> Self {
        Self::with_config(&ContentConfig::default())
    }
}

impl ContentClassifier {
    /// Create a classifier from the built-in keyword tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with configured weights and custom patterns
    /// merged into the built-in tables.
    pub fn with_config(config: &ContentConfig) -> Self {
        let mut groups: Vec<(TestCategory, Vec<String>)> = patterns::content_keyword_groups()
            .iter()
            .map(|(category, keywords)| {
                (*category, keywords.iter().map(|k| k.to_string()).collect())
            })
            .collect();

        for custom in &config.custom_patterns {
            if let Some((_, keywords)) = groups.iter_mut().find(|(c, _)| *c == custom.category) {
                keywords.push(custom.pattern.to_lowercase());
            }
        }

        Self {
            groups,
            pattern_weight: config.pattern_weight,
            pattern_cap: config.pattern_cap,
        }
    }

    /// Score content against every scored category.
    ///
    /// The returned map always carries all four scored categories, with 0
    /// for categories without a single hit. `Unknown` is never scored.
    pub fn score(&self, content: &str) -> BTreeMap<TestCategory, u32> {
        let lower = content.to_lowercase();
        self.groups
            .iter()
            .map(|(category, keywords)| {
                let score: u32 = keywords
                    .iter()
                    .map(|keyword| {
                        let hits = count_occurrences(&lower, keyword);
                        hits.min(self.pattern_cap) * self.pattern_weight
                    })
                    .sum();
                (*category, score)
            })
            .collect()
    }

    /// Pick the category with the strictly highest score.
    ///
    /// A maximum of 0 means no pattern matched at all and yields `Unknown`.
    /// Positive ties resolve by the shared classifier priority order, which
    /// keeps path and content tie-break semantics consistent.
    pub fn classify(&self, scores: &BTreeMap<TestCategory, u32>) -> TestCategory {
        let max = scores.values().copied().max().unwrap_or(0);
        if max == 0 {
            return TestCategory::Unknown;
        }
        for category in TestCategory::PRIORITY {
            if scores.get(&category).copied().unwrap_or(0) == max {
                return category;
            }
        }
        TestCategory::Unknown
    }

    /// Score and classify in one step.
    pub fn classify_content(&self, content: &str) -> (TestCategory, BTreeMap<TestCategory, u32>) {
        let scores = self.score(content);
        (self.classify(&scores), scores)
    }
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
fn count_occurrences(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CustomPattern;

    #[test]
    fn test_unit_content() {
        let classifier = ContentClassifier::new();
        let content = r#"
import unittest
from unittest.mock import Mock, patch

class TestCalculator:
    @patch('calculator.external_service')
    def test_add_numbers(self, mock_service):
        mock_service.return_value = True
        assert Calculator().add(2, 3) == 5
"#;
        let (category, scores) = classifier.classify_content(content);
        assert_eq!(category, TestCategory::Unit);
        assert!(scores[&TestCategory::Unit] > scores[&TestCategory::Integration]);
    }

    #[test]
    fn test_integration_content() {
        let classifier = ContentClassifier::new();
        let content = r#"
import requests
from database import Session
from sqlalchemy import create_engine

def test_user_api_with_database():
    session = Session()
    response = requests.post('/api/users', json={'name': 'test'})
    assert response.status_code == 201
    session.commit()
"#;
        let (category, _) = classifier.classify_content(content);
        assert_eq!(category, TestCategory::Integration);
    }

    #[test]
    fn test_e2e_content() {
        let classifier = ContentClassifier::new();
        let content = r#"
from selenium import webdriver

def test_complete_checkout_flow():
    driver = webdriver.Chrome()
    driver.get('https://example.com')
    driver.find_element(By.ID, 'login-button').click()
    driver.find_element(By.ID, 'checkout').click()
    driver.quit()
"#;
        let (category, _) = classifier.classify_content(content);
        assert_eq!(category, TestCategory::E2e);
    }

    #[test]
    fn test_performance_content() {
        let classifier = ContentClassifier::new();
        let content = r#"
import time
import timeit
import concurrent.futures

def test_concurrent_load():
    start_time = time.time()
    with concurrent.futures.ThreadPoolExecutor(max_workers=10) as executor:
        futures = [executor.submit(make_request) for _ in range(100)]
    duration = time.time() - start_time
    assert duration < 10.0
"#;
        let (category, _) = classifier.classify_content(content);
        assert_eq!(category, TestCategory::Performance);
    }

    #[test]
    fn test_empty_content_is_unknown() {
        let classifier = ContentClassifier::new();
        let (category, scores) = classifier.classify_content("");
        assert_eq!(category, TestCategory::Unknown);
        assert!(scores.values().all(|&s| s == 0));
    }

    #[test]
    fn test_no_signal_is_unknown() {
        let classifier = ContentClassifier::new();
        let (category, _) = classifier.classify_content("x = 1\ny = 2\nprint(x + y)\n");
        assert_eq!(category, TestCategory::Unknown);
    }

    #[test]
    fn test_scores_cover_all_scored_categories() {
        let classifier = ContentClassifier::new();
        let scores = classifier.score("assert True");
        for category in TestCategory::SCORED {
            assert!(scores.contains_key(&category));
        }
        assert!(!scores.contains_key(&TestCategory::Unknown));
    }

    #[test]
    fn test_tie_break_follows_priority_order() {
        let classifier = ContentClassifier::new();
        // One hit each for unit ("assert") and e2e ("webdriver").
        let scores = classifier.score("assert webdriver");
        assert_eq!(scores[&TestCategory::Unit], scores[&TestCategory::E2e]);
        assert_eq!(classifier.classify(&scores), TestCategory::E2e);
    }

    #[test]
    fn test_pattern_cap_limits_repetition() {
        let config = ContentConfig {
            pattern_cap: 5,
            ..ContentConfig::default()
        };
        let classifier = ContentClassifier::with_config(&config);
        let repeated = "webdriver ".repeat(50);
        let scores = classifier.score(&repeated);
        assert_eq!(scores[&TestCategory::E2e], 5);
    }

    #[test]
    fn test_custom_pattern_extends_table() {
        let config = ContentConfig {
            custom_patterns: vec![CustomPattern {
                category: TestCategory::Integration,
                pattern: "kafka".to_string(),
            }],
            ..ContentConfig::default()
        };
        let classifier = ContentClassifier::with_config(&config);
        let (category, _) = classifier.classify_content("producer = kafka.Producer()");
        assert_eq!(category, TestCategory::Integration);
    }

    #[test]
    fn test_pattern_weight_scales_scores() {
        let config = ContentConfig {
            pattern_weight: 3,
            ..ContentConfig::default()
        };
        let classifier = ContentClassifier::with_config(&config);
        let scores = classifier.score("webdriver");
        assert_eq!(scores[&TestCategory::E2e], 3);
    }

    #[test]
    fn test_count_occurrences() {
        assert_eq!(count_occurrences("aaa", "a"), 3);
        assert_eq!(count_occurrences("abcabc", "abc"), 2);
        assert_eq!(count_occurrences("abc", "xyz"), 0);
        assert_eq!(count_occurrences("abc", ""), 0);
    }
}
