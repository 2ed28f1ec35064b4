//! Reconciliation of path-based and content-based signals.

use crate::core::TestCategory;

/// Resolve the two classifier signals into one final category.
///
/// Agreement wins outright. On disagreement between two known categories
/// the content signal wins, since import and usage patterns are harder to
/// fake than naming conventions. A lone known signal wins over `Unknown`,
/// and two `Unknown`s stay `Unknown`. Deterministic on purpose: downstream
/// scoring needs one crisp, reproducible category per file.
pub fn resolve(path_category: TestCategory, content_category: TestCategory) -> TestCategory {
    match (path_category, content_category) {
        (p, c) if p == c => p,
        (p, TestCategory::Unknown) => p,
        (_, c) => c,
    }
}
