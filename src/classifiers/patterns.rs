//! Static keyword tables backing the classifiers.
//!
//! Tables are grouped per category and exposed through accessor functions
//! so the classifiers stay free of scattered literals. All matching is
//! case-insensitive substring matching over lowercased input, so every
//! entry here is lowercase.

use crate::core::{Characteristic, TestCategory};

/// Path markers for end-to-end tests.
pub const E2E_PATH: &[&str] = &[
    "e2e",
    "end_to_end",
    "end-to-end",
    "endtoend",
    "selenium",
    "cypress",
    "playwright",
    "webdriver",
    "browser",
    "functional",
    "acceptance",
    "system",
];

/// Path markers for performance tests.
pub const PERFORMANCE_PATH: &[&str] = &["performance", "perf", "load", "stress", "benchmark", "bench"];

/// Path markers for integration tests.
pub const INTEGRATION_PATH: &[&str] = &[
    "integration",
    "integr",
    "int_test",
    "api_test",
    "service_test",
    "component_test",
    "contract_test",
    "database_test",
    "db_test",
];

/// Path markers for unit tests, including generic test-file naming.
pub const UNIT_PATH: &[&str] = &["unit", "spec", "_test", "test_", ".test.", ".spec."];

/// Path marker groups in match priority order.
///
/// The rarer, more specific signals come first so the generic `test_` /
/// `_test` markers cannot swallow everything.
pub fn path_marker_groups() -> &'static [(TestCategory, &'static [&'static str])] {
    &[
        (TestCategory::E2e, E2E_PATH),
        (TestCategory::Performance, PERFORMANCE_PATH),
        (TestCategory::Integration, INTEGRATION_PATH),
        (TestCategory::Unit, UNIT_PATH),
    ]
}

/// Content keywords indicating isolated unit testing.
pub const UNIT_CONTENT: &[&str] = &[
    "assert",
    "mock",
    "stub",
    "patch",
    "unittest",
    "pytest",
    "fixture",
    "monkeypatch",
    "expect(",
    "fake",
];

/// Content keywords indicating integration with external collaborators.
pub const INTEGRATION_CONTENT: &[&str] = &[
    "database",
    "session",
    "connect(",
    "create_engine",
    "sqlalchemy",
    "requests.",
    "httpx",
    "urllib",
    "transaction",
    "commit(",
    "rollback",
    "testcontainers",
    "localhost",
    "/api/",
    "integration",
];

/// Content keywords indicating browser-driven end-to-end flows.
pub const E2E_CONTENT: &[&str] = &[
    "webdriver",
    "selenium",
    "cypress",
    "playwright",
    "driver.",
    "page.",
    "click(",
    "find_element",
    "send_keys",
    "goto(",
    "navigate",
    "get_by_",
    "screenshot",
];

/// Content keywords indicating timing and load measurement.
pub const PERFORMANCE_CONTENT: &[&str] = &[
    "benchmark",
    "timeit",
    "time.time",
    "perf_counter",
    "elapsed",
    "duration",
    "concurrent",
    "threadpoolexecutor",
    "max_workers",
    "throughput",
    "latency",
    "memory_profiler",
    "locust",
    "stress",
];

/// Content keyword groups for the scored categories.
pub fn content_keyword_groups() -> &'static [(TestCategory, &'static [&'static str])] {
    &[
        (TestCategory::Unit, UNIT_CONTENT),
        (TestCategory::Integration, INTEGRATION_CONTENT),
        (TestCategory::E2e, E2E_CONTENT),
        (TestCategory::Performance, PERFORMANCE_CONTENT),
    ]
}

/// Keyword groups for behavioral characteristic tags.
///
/// Each tag matches independently against path and content; groups carry
/// no priority and tags may freely co-occur.
pub fn characteristic_groups() -> &'static [(Characteristic, &'static [&'static str])] {
    &[
        (
            Characteristic::UsesMocking,
            &["mock", "stub", "fake", "patch", "spy", "monkeypatch", "double("],
        ),
        (
            Characteristic::DatabaseInteraction,
            &[
                "database",
                "db.",
                "sql",
                "session",
                "postgres",
                "mysql",
                "mongodb",
                "redis",
                "cursor",
                "query(",
                "create_engine",
            ],
        ),
        (
            Characteristic::ApiInteraction,
            &[
                "requests.",
                "http",
                "api",
                "urllib",
                "fetch(",
                "axios",
                "grpc",
                "client.",
            ],
        ),
        (
            Characteristic::FileSystemInteraction,
            &[
                "open(",
                "tempfile",
                "tmpdir",
                "tmp_path",
                "os.path",
                "pathlib",
                "shutil",
                "read_to_string",
                "mkdir",
                "fs::",
            ],
        ),
        (
            Characteristic::AsyncTesting,
            &[
                "async",
                "await",
                "asyncio",
                "aiohttp",
                "tokio::",
                "promise",
                "concurrent",
            ],
        ),
        (
            Characteristic::ParameterizedTests,
            &[
                "parametrize",
                "parameterized",
                ".each(",
                "[testcase",
                "#[case",
                "data_provider",
                "@theory",
            ],
        ),
        (
            Characteristic::UsesFixtures,
            &[
                "fixture",
                "setup",
                "teardown",
                "conftest",
                "beforeeach",
                "before_each",
                "aftereach",
                "after_each",
            ],
        ),
    ]
}

/// Framework detection markers.
///
/// A framework is reported when any of its markers occurs in the
/// lowercased file content.
pub fn framework_markers() -> &'static [(&'static str, &'static [&'static str])] {
    &[
        ("pytest", &["import pytest", "from pytest", "@pytest."]),
        (
            "unittest",
            &["import unittest", "from unittest", "unittest.testcase"],
        ),
        ("nose", &["import nose", "from nose"]),
        ("jest/mocha", &["describe(", "it.each(", "it.only("]),
        ("jasmine", &["jasmine."]),
        ("junit", &["@test", "org.junit"]),
        // Bare "[test]" would also match Rust's #[test] attribute, so only
        // the unambiguous NUnit/MSTest markers are used.
        ("nunit/mstest", &["[testmethod]", "[testfixture]", "using nunit"]),
        ("rspec", &["rspec.describe", "rspec."]),
        ("minitest", &["minitest"]),
        ("go-testing", &["*testing.t", "func test"]),
        ("rust-test", &["#[test]", "#[tokio::test]", "#[cfg(test)]"]),
    ]
}
