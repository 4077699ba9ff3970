//! User interface module - status output on stderr.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_bump_decision, display_commit_analysis, display_error,
    display_status, display_success, display_workflow_summary,
};
