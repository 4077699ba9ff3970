//! Git operations abstraction layer
//!
//! The [Repository] trait covers the few read-only queries semver-bump needs:
//! the nearest release tag, the commits since that tag and the abbreviated
//! HEAD hash. Implementations:
//!
//! - [repository::Git2Repository]: a real repository through the `git2` crate
//! - [mock::MockRepository]: an in-memory history for tests
//!
//! ```rust
//! # use semver_bump::git::Repository;
//! # use semver_bump::domain::TagPattern;
//! # fn example<R: Repository>(repo: &R) -> semver_bump::Result<()> {
//! let pattern = TagPattern::new("v");
//! let tag = repo.latest_tag(&pattern)?;
//! let commits = repo.commits_since(Some(tag.as_str()))?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::TagPattern;
use crate::error::Result;

/// Commit information for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The full commit hash
    pub hash: String,
    /// The full commit message, subject and body
    pub message: String,
}

impl CommitInfo {
    /// First line of the message
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Read-only git queries used to compute the next version
pub trait Repository {
    /// Find the nearest tag reachable from HEAD that matches `pattern`.
    ///
    /// # Returns
    /// * `Ok(String)` - Name of the nearest matching tag
    /// * `Err(Error::NoTagFound)` - If no reachable tag matches
    /// * `Err(Error::Git)` - If the history cannot be read
    fn latest_tag(&self, pattern: &TagPattern) -> Result<String>;

    /// Commits reachable from HEAD but not from `tag`, newest first.
    ///
    /// With `None`, returns the whole history of HEAD.
    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitInfo>>;

    /// Abbreviated hash of the HEAD commit
    fn short_head_hash(&self) -> Result<String>;
}
