use std::fmt;

/// Non-fatal conditions met while computing the next version.
/// These are reported to the user and the run continues.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No release tag yet; counting starts from zero
    NoPriorTag { pattern: String, start: String },
    /// No commits since the latest tag
    NoNewCommits { latest_tag: Option<String> },
    /// A suffix was requested but could not be computed
    SuffixUnavailable { reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPriorTag { pattern, start } => {
                write!(
                    f,
                    "No SemVer tags matching '{}' found. Starting from {}",
                    pattern, start
                )
            }
            BoundaryWarning::NoNewCommits {
                latest_tag: Some(tag),
            } => write!(f, "No new commits since tag '{}'", tag),
            BoundaryWarning::NoNewCommits { latest_tag: None } => {
                write!(f, "No commits found in history")
            }
            BoundaryWarning::SuffixUnavailable { reason } => {
                write!(f, "Could not compute version suffix: {}", reason)
            }
        }
    }
}
