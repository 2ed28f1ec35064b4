//! Core types for test-suite profiling.

mod category;
mod error;
mod profile;

pub use category::TestCategory;
pub use error::{Error, Result};
pub use profile::{Characteristic, TestFileProfile, TestSuiteProfile};
