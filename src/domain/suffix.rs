//! Build suffixes appended to a computed version (e.g., "v1.3.0-a1b2c3d")

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Timestamp layout for datetime suffixes: UTC, second resolution, digits only
pub const DATETIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// How the suffix is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuffixFormat {
    /// Abbreviated hash of HEAD
    #[default]
    ShortHash,
    /// UTC timestamp of the run
    Datetime,
}

impl SuffixFormat {
    /// Parse a format name, falling back to `ShortHash` for anything unknown.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(format = s, "unknown suffix format, using short-hash");
            SuffixFormat::ShortHash
        })
    }
}

impl FromStr for SuffixFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "short-hash" => Ok(SuffixFormat::ShortHash),
            "datetime" => Ok(SuffixFormat::Datetime),
            _ => Err(Error::config(format!(
                "Invalid suffix format: '{}' (expected 'short-hash' or 'datetime')",
                s
            ))),
        }
    }
}

impl fmt::Display for SuffixFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixFormat::ShortHash => write!(f, "short-hash"),
            SuffixFormat::Datetime => write!(f, "datetime"),
        }
    }
}

/// Render a datetime suffix
pub fn datetime_suffix(now: DateTime<Utc>) -> String {
    now.format(DATETIME_FORMAT).to_string()
}

/// Join a version string and a suffix with a hyphen; an empty suffix leaves
/// the version untouched.
pub fn with_suffix(version: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        version.to_string()
    } else {
        format!("{}-{}", version, suffix)
    }
}
