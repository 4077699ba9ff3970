//! Analysis engine for determining version bumps from commits

pub mod classifier;
pub mod version_analyzer;

pub use classifier::{classify, classify_commit};
pub use version_analyzer::{Analysis, VersionAnalyzer};
