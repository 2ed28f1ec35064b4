use proptest::prelude::*;

use testpulse::classifiers::{resolver, TestClassifier};
use testpulse::core::TestCategory;
use testpulse::distribution::DistributionAnalyzer;

fn any_category() -> impl Strategy<Value = TestCategory> {
    prop::sample::select(TestCategory::ALL.to_vec())
}

proptest! {
    /// Classification is total: every input resolves to a member of the
    /// closed category set, never an error.
    #[test]
    fn classification_is_total(path in ".{0,60}", content in ".{0,200}") {
        let classifier = TestClassifier::new();
        let profile = classifier.classify_file(&path, &content);
        prop_assert!(TestCategory::ALL.contains(&profile.final_category));
    }

    /// Identical input always yields an identical profile.
    #[test]
    fn classification_is_idempotent(path in "[a-z/_.]{0,40}", content in ".{0,200}") {
        let classifier = TestClassifier::new();
        let first = classifier.classify_file(&path, &content);
        let second = classifier.classify_file(&path, &content);
        prop_assert_eq!(first, second);
    }

    /// Content scores never exceed what the per-pattern cap allows, so a
    /// single repeated keyword cannot grow without bound.
    #[test]
    fn repeated_keyword_score_is_capped(repeats in 1usize..200) {
        let classifier = TestClassifier::new();
        let content = "webdriver ".repeat(repeats);
        let profile = classifier.classify_file("t.py", &content);
        prop_assert!(profile.content_scores[&TestCategory::E2e] <= 5);
    }

    /// Resolver agreement law: equal signals pass through unchanged.
    #[test]
    fn resolver_agreement(category in any_category()) {
        prop_assert_eq!(resolver::resolve(category, category), category);
    }

    /// The resolver never invents a category that neither signal carried.
    #[test]
    fn resolver_output_is_one_of_inputs(
        path_category in any_category(),
        content_category in any_category(),
    ) {
        let resolved = resolver::resolve(path_category, content_category);
        prop_assert!(resolved == path_category || resolved == content_category);
    }

    /// A known content signal always wins over a disagreeing known path
    /// signal, and `Unknown` never wins over a known signal.
    #[test]
    fn resolver_precedence(
        path_category in any_category(),
        content_category in any_category(),
    ) {
        let resolved = resolver::resolve(path_category, content_category);
        if content_category != TestCategory::Unknown {
            prop_assert_eq!(resolved, content_category);
        } else {
            prop_assert_eq!(resolved, path_category);
        }
    }

    /// Percentages of a non-empty suite sum to 100 within rounding.
    #[test]
    fn percentages_sum_to_100(categories in prop::collection::vec(any_category(), 1..50)) {
        let analyzer = DistributionAnalyzer::new();
        let profiles: Vec<_> = categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let mut profile = testpulse::classify_file(&format!("f{i}.py"), "");
                profile.final_category = *category;
                profile
            })
            .collect();
        let suite = analyzer.analyze(&profiles);
        let sum: f64 = suite.percentages.values().sum();
        prop_assert!((sum - 100.0).abs() < 0.1, "percentages sum to {sum}");
    }

    /// The balance score is bounded in [0, 100] for any distribution.
    #[test]
    fn balance_score_bounded(categories in prop::collection::vec(any_category(), 0..50)) {
        let analyzer = DistributionAnalyzer::new();
        let profiles: Vec<_> = categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let mut profile = testpulse::classify_file(&format!("f{i}.py"), "");
                profile.final_category = *category;
                profile
            })
            .collect();
        let suite = analyzer.analyze(&profiles);
        prop_assert!((0.0..=100.0).contains(&suite.balance_score));
    }

    /// Counts always sum back to the number of profiles supplied.
    #[test]
    fn counts_sum_to_total(categories in prop::collection::vec(any_category(), 0..50)) {
        let analyzer = DistributionAnalyzer::new();
        let profiles: Vec<_> = categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let mut profile = testpulse::classify_file(&format!("f{i}.py"), "");
                profile.final_category = *category;
                profile
            })
            .collect();
        let suite = analyzer.analyze(&profiles);
        prop_assert_eq!(suite.counts.values().sum::<usize>(), profiles.len());
        prop_assert_eq!(suite.total, profiles.len());
    }
}

// ---------------------------------------------------------------------------
// Deterministic edge cases
// ---------------------------------------------------------------------------

#[test]
fn empty_suite_does_not_panic() {
    let suite = testpulse::build_suite_profile(&[]);
    assert_eq!(suite.total, 0);
    assert!(suite.percentages.values().all(|&p| p == 0.0));
    assert!(suite.recommendations.is_empty());
}

#[test]
fn batch_and_single_classification_agree() {
    let classifier = TestClassifier::new();
    let files = vec![
        (
            "tests/unit/test_a.py".to_string(),
            "assert a == b".to_string(),
        ),
        (
            "tests/e2e/test_b.py".to_string(),
            "driver.find_element(x).click()".to_string(),
        ),
    ];
    let batch = classifier.classify_files(&files);
    for ((path, content), profile) in files.iter().zip(&batch) {
        assert_eq!(&classifier.classify_file(path, content), profile);
    }
}
