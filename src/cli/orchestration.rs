//! Main workflow orchestration logic
//!
//! Computes the next version from a repository without depending on clap or
//! on terminal output, so it can be driven from tests with a mock repository.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::analyzer::VersionAnalyzer;
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::suffix::{datetime_suffix, with_suffix};
use crate::domain::{BumpLevel, SuffixFormat, TagPattern, Version};
use crate::error::Result;
use crate::git::{CommitInfo, Repository};

/// Arguments for the bump workflow
///
/// Mirrors the CLI flags after they have been merged with the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Prefix of release tags
    pub prefix: String,

    /// Version to start from instead of the latest tag
    pub baseline: Option<String>,

    /// Append a build suffix to the new version
    pub add_suffix: bool,

    /// How the suffix is derived
    pub suffix_format: SuffixFormat,
}

impl BumpWorkflowArgs {
    /// Workflow arguments taken from configuration alone
    pub fn from_config(config: &Config) -> Self {
        BumpWorkflowArgs {
            prefix: config.prefix.clone(),
            baseline: None,
            add_suffix: config.suffix.always,
            suffix_format: config.suffix.format,
        }
    }
}

/// Where the starting version came from
#[derive(Debug, Clone, PartialEq)]
pub enum VersionSource {
    Baseline(String),
    Tag(String),
    Initial,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub source: VersionSource,
    /// Tag the commit range starts after, if any
    pub latest_tag: Option<String>,
    pub previous: Version,
    pub next: Version,
    pub bump: BumpLevel,
    /// Commits since the latest tag, newest first
    pub commits: Vec<CommitInfo>,
    /// Final version string: prefix, version and optional suffix
    pub version: String,
    pub suffix_added: bool,
    pub warnings: Vec<BoundaryWarning>,
}

/// Main bump workflow
///
/// 1. Determine the current version (baseline, latest tag, or 0.0.0)
/// 2. Collect commits since the latest tag (or all history)
/// 3. Classify them and bump the version
/// 4. Format the version with the tag prefix and an optional suffix
///
/// A missing tag is not an error; any other git failure while looking up the
/// current version is. `now` is used for datetime suffixes.
pub fn run_bump_workflow<R: Repository>(
    repo: &R,
    args: &BumpWorkflowArgs,
    now: DateTime<Utc>,
) -> Result<WorkflowResult> {
    let pattern = TagPattern::new(args.prefix.clone());
    let mut warnings = Vec::new();

    let latest_tag = match repo.latest_tag(&pattern) {
        Ok(tag) => Some(tag),
        Err(e) if e.is_no_tag() => None,
        Err(e) if args.baseline.is_some() => {
            debug!(error = %e, "tag lookup failed, analyzing all commits");
            None
        }
        Err(e) => return Err(e),
    };

    let (source, previous) = if let Some(baseline) = &args.baseline {
        info!(baseline = %baseline, "using baseline version");
        let version = Version::parse_with_prefix(baseline, &args.prefix)?;
        (VersionSource::Baseline(baseline.clone()), version)
    } else if let Some(tag) = &latest_tag {
        let version = Version::parse_with_prefix(tag, &args.prefix)?;
        (VersionSource::Tag(tag.clone()), version)
    } else {
        let start = Version::default();
        warnings.push(BoundaryWarning::NoPriorTag {
            pattern: pattern.glob(),
            start: pattern.format(&start),
        });
        (VersionSource::Initial, start)
    };

    let analysis = VersionAnalyzer::new(repo).analyze_since(latest_tag.as_deref())?;

    if analysis.commits.is_empty() {
        warnings.push(BoundaryWarning::NoNewCommits {
            latest_tag: latest_tag.clone(),
        });

        return Ok(WorkflowResult {
            source,
            latest_tag,
            previous,
            next: previous,
            bump: BumpLevel::None,
            commits: Vec::new(),
            version: pattern.format(&previous),
            suffix_added: false,
            warnings,
        });
    }

    let next = previous.bump(analysis.bump)?;
    let mut version = pattern.format(&next);
    let mut suffix_added = false;

    if args.add_suffix {
        let suffix = match args.suffix_format {
            SuffixFormat::Datetime => Some(datetime_suffix(now)),
            SuffixFormat::ShortHash => match repo.short_head_hash() {
                Ok(hash) => Some(hash),
                Err(e) => {
                    warn!(error = %e, "could not read HEAD hash");
                    warnings.push(BoundaryWarning::SuffixUnavailable {
                        reason: e.to_string(),
                    });
                    None
                }
            },
        };

        if let Some(suffix) = suffix {
            version = with_suffix(&version, &suffix);
            suffix_added = true;
        }
    }

    info!(%previous, %next, bump = %analysis.bump, "computed next version");

    Ok(WorkflowResult {
        source,
        latest_tag,
        previous,
        next,
        bump: analysis.bump,
        commits: analysis.commits,
        version,
        suffix_added,
        warnings,
    })
}
