//! Command-line workflow, kept separate from argument parsing

pub mod orchestration;

pub use orchestration::{run_bump_workflow, BumpWorkflowArgs, VersionSource, WorkflowResult};
