//! Formatting functions for UI output.
//!
//! Everything here writes to stderr: stdout carries only the computed version
//! so the tool can be used in `$(semver-bump)` substitutions.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::orchestration::{VersionSource, WorkflowResult};
use crate::domain::BumpLevel;
use crate::git::CommitInfo;

/// Number of commit subjects listed before collapsing the rest
const MAX_LISTED_COMMITS: usize = 10;

/// Subjects longer than this are cut
const MAX_SUBJECT_CHARS: usize = 60;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Cut a subject to `MAX_SUBJECT_CHARS` characters, never inside a code point.
pub fn truncate_subject(subject: &str) -> String {
    if subject.chars().count() <= MAX_SUBJECT_CHARS {
        subject.to_string()
    } else {
        let cut: String = subject.chars().take(MAX_SUBJECT_CHARS).collect();
        format!("{}…", cut)
    }
}

/// Heading for the commit range being analyzed
pub fn analysis_heading(since: Option<&str>) -> String {
    match since {
        Some(tag) => format!("Analyzing commits since {}...", tag),
        None => "Analyzing all commits (no previous tag found).".to_string(),
    }
}

/// Display the analyzed commits, up to ten subjects.
pub fn display_commit_analysis(commits: &[CommitInfo], since: Option<&str>) {
    display_status(&analysis_heading(since));

    for (i, commit) in commits.iter().take(MAX_LISTED_COMMITS).enumerate() {
        eprintln!("  {}. {}", i + 1, truncate_subject(commit.subject()));
    }

    if commits.len() > MAX_LISTED_COMMITS {
        eprintln!(
            "  ... and {} more commits",
            commits.len() - MAX_LISTED_COMMITS
        );
    }
}

/// Text of the bump decision line
pub fn bump_decision(bump: BumpLevel) -> String {
    format!("Determined BUMP: {} ({})", bump, bump.reason())
}

/// Display the decided bump level.
pub fn display_bump_decision(bump: BumpLevel) {
    let line = bump_decision(bump);
    match bump {
        BumpLevel::None => eprintln!("\n{}", style(line).dim()),
        _ => eprintln!("\n{}", style(line).bold()),
    }
}

/// Text describing where the starting version came from
pub fn version_source(result: &WorkflowResult, prefix: &str) -> Option<String> {
    match &result.source {
        VersionSource::Baseline(baseline) => Some(format!("Using baseline version: {}", baseline)),
        VersionSource::Tag(_) => Some(format!(
            "Last released version: {}{}",
            prefix, result.previous
        )),
        VersionSource::Initial => None,
    }
}

/// Display everything about a finished run except the version itself.
pub fn display_workflow_summary(result: &WorkflowResult, prefix: &str) {
    if let Some(line) = version_source(result, prefix) {
        display_status(&line);
    }

    for warning in &result.warnings {
        display_boundary_warning(warning);
    }

    display_commit_analysis(&result.commits, result.latest_tag.as_deref());

    if !result.commits.is_empty() {
        display_bump_decision(result.bump);
    }

    if result.suffix_added {
        display_success("Suffix added.");
    }

    if let Some(line) = closing_status(result) {
        display_status(line);
    }
}

/// Final status line; a run without new commits already said so in its warning
pub fn closing_status(result: &WorkflowResult) -> Option<&'static str> {
    if result.commits.is_empty() {
        return None;
    }

    match (result.bump, result.suffix_added) {
        (BumpLevel::None, false) => Some("No change detected."),
        _ => None,
    }
}
