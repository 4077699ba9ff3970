use thiserror::Error;

/// Unified error type for semver-bump operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("No tag matching '{pattern}' found")]
    NoTagFound { pattern: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in semver-bump
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a "no prior tag" error for the given tag glob
    pub fn no_tag(pattern: impl Into<String>) -> Self {
        Error::NoTagFound {
            pattern: pattern.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        Error::Version(msg.into())
    }

    /// True when the error only means there is no earlier release to start from.
    pub fn is_no_tag(&self) -> bool {
        matches!(self, Error::NoTagFound { .. })
    }
}
