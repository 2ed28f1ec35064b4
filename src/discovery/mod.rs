//! Test-file discovery over caller-supplied path lists.
//!
//! This module never touches the filesystem: the repository-scanning
//! collaborator supplies the full path list and reads file contents. What
//! lives here is the lexical part of discovery, detecting the primary
//! language and picking out the paths that look like test files.

use std::collections::HashMap;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Languages with a test-file naming convention table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    Java,
    CSharp,
    Go,
    Rust,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 6] = [
        Language::Python,
        Language::JavaScript,
        Language::Java,
        Language::CSharp,
        Language::Go,
        Language::Rust,
    ];

    /// Map a file extension (without the dot) to a language.
    ///
    /// TypeScript and JSX dialects fold into JavaScript, matching how test
    /// naming conventions are shared across that ecosystem.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" => Some(Self::Python),
            "js" | "ts" | "jsx" | "tsx" | "mjs" => Some(Self::JavaScript),
            "java" => Some(Self::Java),
            "cs" => Some(Self::CSharp),
            "go" => Some(Self::Go),
            "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Rust => "rust",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Test-file naming conventions for one language.
struct LanguageConventions {
    /// File-name globs that mark a test file anywhere in the tree.
    test_globs: &'static [&'static str],
    /// Directory-name markers under which source files count as tests.
    test_dirs: &'static [&'static str],
    /// Source extensions for this language, without the dot.
    extensions: &'static [&'static str],
}

const PYTHON: LanguageConventions = LanguageConventions {
    test_globs: &["test_*.py", "*_test.py", "test*.py"],
    test_dirs: &["tests", "test", "testing"],
    extensions: &["py"],
};

const JAVASCRIPT: LanguageConventions = LanguageConventions {
    test_globs: &[
        "*.test.js",
        "*.spec.js",
        "*.test.ts",
        "*.spec.ts",
        "*.test.jsx",
        "*.test.tsx",
    ],
    test_dirs: &["test", "tests", "__tests__", "spec"],
    extensions: &["js", "ts", "jsx", "tsx", "mjs"],
};

const JAVA: LanguageConventions = LanguageConventions {
    test_globs: &["*Test.java", "*Tests.java", "Test*.java"],
    test_dirs: &["test"],
    extensions: &["java"],
};

const CSHARP: LanguageConventions = LanguageConventions {
    test_globs: &["*Test.cs", "*Tests.cs"],
    test_dirs: &["tests", "test"],
    extensions: &["cs"],
};

const GO: LanguageConventions = LanguageConventions {
    test_globs: &["*_test.go"],
    test_dirs: &[],
    extensions: &["go"],
};

const RUST: LanguageConventions = LanguageConventions {
    test_globs: &["*_test.rs", "test_*.rs"],
    test_dirs: &["tests"],
    extensions: &["rs"],
};

fn conventions(language: Language) -> &'static LanguageConventions {
    match language {
        Language::Python => &PYTHON,
        Language::JavaScript => &JAVASCRIPT,
        Language::Java => &JAVA,
        Language::CSharp => &CSHARP,
        Language::Go => &GO,
        Language::Rust => &RUST,
    }
}

/// Directories whose contents never count toward language detection or
/// test discovery.
const SKIPPED_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    "venv",
    "env",
    "dist",
    "build",
    "target",
    "vendor",
];

static TEST_GLOBSETS: Lazy<HashMap<Language, GlobSet>> = Lazy::new(|| {
    Language::ALL
        .iter()
        .map(|language| {
            let mut builder = GlobSetBuilder::new();
            for pattern in conventions(*language).test_globs {
                let glob = GlobBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("Invalid test file glob");
                builder.add(glob);
            }
            (*language, builder.build().expect("Invalid test glob set"))
        })
        .collect()
});

/// Detect the primary language of a repository from its path list.
///
/// Counts files per language by extension, skipping vendored and hidden
/// directories; the most frequent language wins. Ties resolve to the
/// first language in [`Language::ALL`] order.
pub fn detect_primary_language<S: AsRef<str>>(paths: &[S]) -> Option<Language> {
    let mut counts: HashMap<Language, usize> = HashMap::new();
    for path in paths {
        let path = path.as_ref();
        if in_skipped_dir(path) {
            continue;
        }
        if let Some(language) = extension_of(path).and_then(Language::from_extension) {
            *counts.entry(language).or_insert(0) += 1;
        }
    }
    let mut best: Option<(Language, usize)> = None;
    for language in Language::ALL {
        if let Some(&count) = counts.get(&language) {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((language, count));
            }
        }
    }
    best.map(|(language, _)| language)
}

/// Pick out the test files for a language from a repository path list.
///
/// A path counts as a test file when its file name matches one of the
/// language's test globs, or when it sits under a test directory and has
/// a source extension for the language. Vendored and hidden directories
/// are skipped. Output order follows input order.
pub fn find_test_files<S: AsRef<str>>(paths: &[S], language: Language) -> Vec<String> {
    let conventions = conventions(language);
    let globset = &TEST_GLOBSETS[&language];

    paths
        .iter()
        .map(AsRef::as_ref)
        .filter(|path| !in_skipped_dir(path))
        .filter(|path| {
            let Some(name) = file_name(path) else {
                return false;
            };
            if globset.is_match(name) {
                return true;
            }
            let has_source_ext = extension_of(path)
                .map(|ext| {
                    let ext = ext.to_lowercase();
                    conventions.extensions.contains(&ext.as_str())
                })
                .unwrap_or(false);
            has_source_ext && in_test_dir(path, conventions.test_dirs)
        })
        .map(str::to_string)
        .collect()
}

fn file_name(path: &str) -> Option<&str> {
    path.rsplit(['/', '\\']).next().filter(|n| !n.is_empty())
}

fn extension_of(path: &str) -> Option<&str> {
    let name = file_name(path)?;
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(ext)
}

fn in_skipped_dir(path: &str) -> bool {
    path.split(['/', '\\']).any(|component| {
        (component.starts_with('.') && component.len() > 1)
            || SKIPPED_DIRS.contains(&component.to_lowercase().as_str())
    })
}

/// Directory components are matched by substring, so `tests`, `testing`,
/// and `integration_tests` all satisfy the `test` marker.
fn in_test_dir(path: &str, test_dirs: &[&str]) -> bool {
    let mut components: Vec<&str> = path.split(['/', '\\']).collect();
    components.pop(); // drop the file name
    components.iter().any(|component| {
        let lower = component.to_lowercase();
        test_dirs.iter().any(|dir| lower.contains(dir))
    })
}
