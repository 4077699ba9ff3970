use crate::domain::commit::{mentions_breaking_change, ParsedCommit};
use crate::domain::BumpLevel;

/// Bump implied by one commit message (subject plus optional body).
///
/// The breaking change footer is searched in the whole message; the
/// conventional header is matched against the subject line only. Anything
/// that is neither yields `BumpLevel::None`.
pub fn classify_commit(message: &str) -> BumpLevel {
    if mentions_breaking_change(message) {
        return BumpLevel::Major;
    }

    ParsedCommit::parse(message)
        .map(|parsed| parsed.bump())
        .unwrap_or(BumpLevel::None)
}

/// Aggregate bump for a batch of commit messages: the highest level any single
/// commit implies. Stops at the first Major since nothing ranks above it.
pub fn classify<I, S>(commits: I) -> BumpLevel
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut required = BumpLevel::None;

    for commit in commits {
        let level = classify_commit(commit.as_ref());
        if level == BumpLevel::Major {
            return BumpLevel::Major;
        }
        required = required.max(level);
    }

    required
}
