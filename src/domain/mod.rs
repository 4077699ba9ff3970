//! Domain logic - pure rules independent of git operations

pub mod bump;
pub mod commit;
pub mod suffix;
pub mod tag;
pub mod version;

pub use bump::BumpLevel;
pub use commit::{CommitType, ParsedCommit};
pub use suffix::SuffixFormat;
pub use tag::TagPattern;
pub use version::Version;
