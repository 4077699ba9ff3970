use crate::domain::{TagPattern, Version};
use crate::error::{Error, Result};
use crate::git::CommitInfo;
use git2::{Oid, Repository as Git2Repo, Sort};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Map each tagged commit to the names of its matching tags.
    ///
    /// Annotated tags are peeled to the commit they point at.
    fn matching_tags(&self, pattern: &TagPattern) -> Result<HashMap<Oid, Vec<String>>> {
        let mut tagged: HashMap<Oid, Vec<String>> = HashMap::new();
        let names = self.repo.tag_names(None)?;

        for name in names.iter().flatten().filter(|name| pattern.matches(name)) {
            let reference = match self.repo.find_reference(&format!("refs/tags/{}", name)) {
                Ok(reference) => reference,
                Err(e) => {
                    debug!(tag = name, error = %e, "skipping unreadable tag");
                    continue;
                }
            };

            match reference.peel_to_commit() {
                Ok(commit) => tagged.entry(commit.id()).or_default().push(name.to_string()),
                Err(e) => debug!(tag = name, error = %e, "tag does not point at a commit"),
            }
        }

        Ok(tagged)
    }

    fn head_walk(&self) -> Result<git2::Revwalk<'_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;
        Ok(revwalk)
    }
}

impl super::Repository for Git2Repository {
    fn latest_tag(&self, pattern: &TagPattern) -> Result<String> {
        let tagged = self.matching_tags(pattern)?;
        if tagged.is_empty() {
            return Err(Error::no_tag(pattern.glob()));
        }

        for oid in self.head_walk()? {
            let oid = oid?;

            if let Some(names) = tagged.get(&oid) {
                // Several release tags on one commit: the highest version wins
                let best = names
                    .iter()
                    .max_by_key(|name| Version::parse_with_prefix(name, pattern.prefix()).ok())
                    .cloned();

                if let Some(name) = best {
                    debug!(tag = %name, commit = %oid, "found latest tag");
                    return Ok(name);
                }
            }
        }

        Err(Error::no_tag(pattern.glob()))
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitInfo>> {
        let mut revwalk = self.head_walk()?;

        if let Some(tag_name) = tag {
            let tag_commit = self
                .repo
                .find_reference(&format!("refs/tags/{}", tag_name))?
                .peel_to_commit()?;
            revwalk.hide(tag_commit.id())?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

            commits.push(CommitInfo {
                hash: oid.to_string(),
                message,
            });
        }

        debug!(count = commits.len(), since = ?tag, "collected commits");
        Ok(commits)
    }

    fn short_head_hash(&self) -> Result<String> {
        let head = self.repo.head()?.peel_to_commit()?;
        let short = head.as_object().short_id()?;

        short
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| Error::Git(git2::Error::from_str("short hash is not valid UTF-8")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;
    use tempfile::TempDir;

    fn commit(repo: &Git2Repo, message: &str) -> Oid {
        let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents: Vec<git2::Commit> = repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok())
            .into_iter()
            .collect();
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    #[test]
    fn test_latest_tag_and_commits_since() {
        let dir = TempDir::new().unwrap();
        let raw = Git2Repo::init(dir.path()).unwrap();

        let first = commit(&raw, "chore: initial");
        raw.tag_lightweight("v1.0.0", &raw.find_object(first, None).unwrap(), false)
            .unwrap();
        commit(&raw, "feat: add thing");
        commit(&raw, "fix: repair thing\n\nDetails in body.");

        let repo = Git2Repository::from_git2(raw);
        let pattern = TagPattern::new("v");

        assert_eq!(repo.latest_tag(&pattern).unwrap(), "v1.0.0");

        let commits = repo.commits_since(Some("v1.0.0")).unwrap();
        let subjects: Vec<&str> = commits.iter().map(|c| c.subject()).collect();
        assert_eq!(subjects, vec!["fix: repair thing", "feat: add thing"]);
        assert!(commits[0].message.contains("Details in body."));

        assert_eq!(repo.commits_since(None).unwrap().len(), 3);
    }

    #[test]
    fn test_annotated_tag_is_peeled() {
        let dir = TempDir::new().unwrap();
        let raw = Git2Repo::init(dir.path()).unwrap();

        let first = commit(&raw, "chore: initial");
        let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
        raw.tag(
            "v2.1.0",
            &raw.find_object(first, None).unwrap(),
            &sig,
            "release 2.1.0",
            false,
        )
        .unwrap();
        commit(&raw, "feat: after release");

        let repo = Git2Repository::from_git2(raw);
        assert_eq!(repo.latest_tag(&TagPattern::new("v")).unwrap(), "v2.1.0");
        assert_eq!(repo.commits_since(Some("v2.1.0")).unwrap().len(), 1);
    }

    #[test]
    fn test_no_matching_tag() {
        let dir = TempDir::new().unwrap();
        let raw = Git2Repo::init(dir.path()).unwrap();

        let first = commit(&raw, "chore: initial");
        raw.tag_lightweight("release-1", &raw.find_object(first, None).unwrap(), false)
            .unwrap();

        let repo = Git2Repository::from_git2(raw);
        let err = repo.latest_tag(&TagPattern::new("v")).unwrap_err();
        assert!(err.is_no_tag());
    }

    #[test]
    fn test_nearest_tag_wins() {
        let dir = TempDir::new().unwrap();
        let raw = Git2Repo::init(dir.path()).unwrap();

        let first = commit(&raw, "chore: initial");
        raw.tag_lightweight("v1.0.0", &raw.find_object(first, None).unwrap(), false)
            .unwrap();
        let second = commit(&raw, "feat: next");
        raw.tag_lightweight("v1.1.0", &raw.find_object(second, None).unwrap(), false)
            .unwrap();
        commit(&raw, "fix: later");

        let repo = Git2Repository::from_git2(raw);
        assert_eq!(repo.latest_tag(&TagPattern::new("v")).unwrap(), "v1.1.0");
    }

    #[test]
    fn test_short_head_hash() {
        let dir = TempDir::new().unwrap();
        let raw = Git2Repo::init(dir.path()).unwrap();
        let head = commit(&raw, "chore: initial");

        let repo = Git2Repository::from_git2(raw);
        let short = repo.short_head_hash().unwrap();
        assert!(short.len() >= 7);
        assert!(head.to_string().starts_with(&short));
    }
}
