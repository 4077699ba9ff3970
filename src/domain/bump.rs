use std::fmt;

/// Magnitude of the version change implied by a set of commits.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `None < Patch < Minor < Major`, and the aggregate over a batch is `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BumpLevel {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    /// Short explanation shown next to the decision
    pub fn reason(&self) -> &'static str {
        match self {
            BumpLevel::Major => "found BREAKING CHANGE or a type! commit",
            BumpLevel::Minor => "found a 'feat:' commit",
            BumpLevel::Patch => "found a 'fix:' commit",
            BumpLevel::None => "only 'chore:', 'docs:' and similar commits",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpLevel::None => "NONE",
            BumpLevel::Patch => "PATCH",
            BumpLevel::Minor => "MINOR",
            BumpLevel::Major => "MAJOR",
        };
        f.write_str(name)
    }
}
