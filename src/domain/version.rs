use crate::error::{Error, Result};
use std::fmt;

use super::BumpLevel;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a plain `X.Y.Z` version.
    ///
    /// Pre-release and build metadata are rejected: only release tags take
    /// part in bumping.
    pub fn parse(text: &str) -> Result<Self> {
        let parsed = semver::Version::parse(text.trim()).map_err(|e| {
            Error::version(format!(
                "Invalid SemVer format: '{}' - expected X.Y.Z ({})",
                text, e
            ))
        })?;

        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(Error::version(format!(
                "Invalid SemVer format: '{}' - expected X.Y.Z",
                text
            )));
        }

        Ok(Version::new(parsed.major, parsed.minor, parsed.patch))
    }

    /// Parse a tag or baseline after stripping the tag prefix
    /// (e.g., "v1.2.3" with prefix "v" -> Version(1,2,3)).
    ///
    /// Text without the prefix is parsed as-is, so a baseline may be given
    /// either way.
    pub fn parse_with_prefix(tag: &str, prefix: &str) -> Result<Self> {
        let stripped = tag.strip_prefix(prefix).unwrap_or(tag);
        Self::parse(stripped)
    }

    /// Bump version according to bump level
    ///
    /// Fails instead of wrapping when the bumped component is already
    /// `u64::MAX`.
    pub fn bump(&self, level: BumpLevel) -> Result<Self> {
        let next = |component: u64, name: &str| {
            component.checked_add(1).ok_or_else(|| {
                Error::version(format!("Cannot bump {}: {} version overflows", self, name))
            })
        };

        Ok(match level {
            BumpLevel::Major => Version::new(next(self.major, "major")?, 0, 0),
            BumpLevel::Minor => Version::new(self.major, next(self.minor, "minor")?, 0),
            BumpLevel::Patch => Version::new(self.major, self.minor, next(self.patch, "patch")?),
            BumpLevel::None => *self,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
