pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use analyzer::classify;
pub use domain::BumpLevel;
pub use error::{Error, Result};
