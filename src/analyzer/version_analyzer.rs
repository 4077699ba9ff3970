use crate::analyzer::classify;
use crate::domain::BumpLevel;
use crate::error::Result;
use crate::git::{CommitInfo, Repository};
use tracing::debug;

/// Commits inspected for one run and the bump they imply
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub commits: Vec<CommitInfo>,
    pub bump: BumpLevel,
}

/// Analyzes repository history to determine the version bump
pub struct VersionAnalyzer<'a, R: Repository> {
    repo: &'a R,
}

impl<'a, R: Repository> VersionAnalyzer<'a, R> {
    /// Create a new version analyzer over a repository
    pub fn new(repo: &'a R) -> Self {
        VersionAnalyzer { repo }
    }

    /// Classify every commit reachable from HEAD since `tag` (or all history)
    pub fn analyze_since(&self, tag: Option<&str>) -> Result<Analysis> {
        let commits = self.repo.commits_since(tag)?;
        let bump = classify(commits.iter().map(|c| c.message.as_str()));

        debug!(commits = commits.len(), %bump, "analyzed history");
        Ok(Analysis { commits, bump })
    }
}
