use crate::domain::TagPattern;
use crate::error::{Error, Result};
use crate::git::{CommitInfo, Repository};

struct MockCommit {
    info: CommitInfo,
    tags: Vec<String>,
}

/// Mock repository for testing without actual git operations
///
/// History is linear; commits are added oldest first, like running
/// `git commit` repeatedly.
#[derive(Default)]
pub struct MockRepository {
    history: Vec<MockCommit>,
    failure: Option<String>,
    tag_lookup_failure: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit on top of the current HEAD
    pub fn add_commit(&mut self, message: impl Into<String>) -> &mut Self {
        let hash = format!("{:040x}", self.history.len() + 1);
        self.history.push(MockCommit {
            info: CommitInfo {
                hash,
                message: message.into(),
            },
            tags: Vec::new(),
        });
        self
    }

    /// Tag the current HEAD
    pub fn tag_head(&mut self, name: impl Into<String>) -> &mut Self {
        if let Some(head) = self.history.last_mut() {
            head.tags.push(name.into());
        }
        self
    }

    /// Make every query fail as if the git invocation broke
    pub fn fail_with(&mut self, message: impl Into<String>) -> &mut Self {
        self.failure = Some(message.into());
        self
    }

    /// Make only the tag lookup fail; commit and HEAD queries still work
    pub fn fail_tag_lookup_with(&mut self, message: impl Into<String>) -> &mut Self {
        self.tag_lookup_failure = Some(message.into());
        self
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(Error::Git(git2::Error::from_str(message))),
            None => Ok(()),
        }
    }
}

impl Repository for MockRepository {
    fn latest_tag(&self, pattern: &TagPattern) -> Result<String> {
        self.check()?;
        if let Some(message) = &self.tag_lookup_failure {
            return Err(Error::Git(git2::Error::from_str(message)));
        }

        self.history
            .iter()
            .rev()
            .find_map(|commit| commit.tags.iter().find(|t| pattern.matches(t)))
            .cloned()
            .ok_or_else(|| Error::no_tag(pattern.glob()))
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitInfo>> {
        self.check()?;

        let commits = self
            .history
            .iter()
            .rev()
            .take_while(|commit| match tag {
                Some(tag) => !commit.tags.iter().any(|t| t == tag),
                None => true,
            })
            .map(|commit| commit.info.clone())
            .collect();

        Ok(commits)
    }

    fn short_head_hash(&self) -> Result<String> {
        self.check()?;

        self.history
            .last()
            .map(|commit| commit.info.hash[..7].to_string())
            .ok_or_else(|| Error::Git(git2::Error::from_str("reference 'HEAD' not found")))
    }
}
