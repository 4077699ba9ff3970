use regex::Regex;

use super::Version;

/// Release tag naming: a fixed prefix followed by `X.Y.Z` (e.g., "v1.2.3")
///
/// Components follow SemVer numbering, so a tag such as "v1.02.3" is not a
/// release tag and is skipped during lookup.
#[derive(Debug, Clone)]
pub struct TagPattern {
    prefix: String,
    regex: Regex,
}

impl TagPattern {
    /// Create a tag pattern for the given prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let regex = Regex::new(&format!(
            r"^{}{n}\.{n}\.{n}$",
            regex::escape(&prefix),
            n = r"(0|[1-9]\d*)"
        ))
        .expect("escaped prefix always forms a valid pattern");

        TagPattern { prefix, regex }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Check whether a tag name is a release tag for this prefix
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }

    /// Format a version according to pattern
    /// Example: prefix="v", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        format!("{}{}", self.prefix, version)
    }

    /// `git describe --match` style glob, used in messages
    pub fn glob(&self) -> String {
        format!("{}[0-9]*.[0-9]*.[0-9]*", self.prefix)
    }
}
