use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::BumpLevel;

/// Conventional commit header: `type(scope)!: description`, anchored at the
/// start of the subject line. The type list is closed.
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(feat|fix|chore|docs|style|refactor|perf|test|build|ci)(\(([\w\-]+)\))?(!?): (.+)")
        .expect("conventional commit header pattern is valid")
});

/// Footer text that marks a breaking change anywhere in a message, any case.
pub const BREAKING_CHANGE_MARKER: &str = "BREAKING CHANGE";

/// The fixed set of recognised conventional commit types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Chore,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
}

impl CommitType {
    pub const ALL: [CommitType; 10] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Chore,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Build,
        CommitType::Ci,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Chore => "chore",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
        }
    }
}

impl FromStr for CommitType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed conventional commit header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub r#type: CommitType,
    pub scope: Option<String>,
    /// `!` right before the colon
    pub breaking_marker: bool,
    pub description: String,
}

impl ParsedCommit {
    /// Parse the subject line of a commit message.
    ///
    /// Returns `None` for anything that is not a conventional header with one
    /// of the recognised types: merge commits, free-form text, unknown types,
    /// or a header preceded by whitespace.
    pub fn parse(message: &str) -> Option<Self> {
        let subject = message.lines().next()?;
        let captures = HEADER_REGEX.captures(subject)?;

        let r#type: CommitType = captures.get(1)?.as_str().parse().ok()?;
        let scope = captures.get(3).map(|m| m.as_str().to_string());
        let breaking_marker = captures.get(4).is_some_and(|m| m.as_str() == "!");
        let description = captures.get(5)?.as_str().to_string();

        Some(ParsedCommit {
            r#type,
            scope,
            breaking_marker,
            description,
        })
    }

    /// Bump implied by the header alone
    pub fn bump(&self) -> BumpLevel {
        if self.breaking_marker {
            return BumpLevel::Major;
        }

        match self.r#type {
            CommitType::Feat => BumpLevel::Minor,
            CommitType::Fix => BumpLevel::Patch,
            _ => BumpLevel::None,
        }
    }
}

/// Case-insensitive substring search for the breaking change footer over the
/// whole message, subject and body.
pub fn mentions_breaking_change(message: &str) -> bool {
    message
        .to_ascii_uppercase()
        .contains(BREAKING_CHANGE_MARKER)
}
