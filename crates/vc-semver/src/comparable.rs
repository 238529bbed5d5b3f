//! Capability traits shared by every version scheme

use std::fmt;
use std::str::FromStr;

use crate::VersionError;

/// A version that can be ordered against any other `Comparable` and bumped.
///
/// The comparator and the constraint engine only ever talk to versions
/// through this trait, so semantic and calendar versions go through exactly
/// the same code paths. Accessors are object safe; the increments are not.
pub trait Comparable: fmt::Debug + fmt::Display {
    /// Major component (the year for calendar versions)
    fn major(&self) -> u64;

    /// Minor component (the month for calendar versions)
    fn minor(&self) -> u64;

    /// Patch component (the day for calendar versions)
    fn patch(&self) -> u64;

    /// Dot-separated prerelease identifiers, empty for a release
    fn prerelease(&self) -> &str;

    /// Build metadata, empty when absent or unsupported by the scheme
    fn metadata(&self) -> &str {
        ""
    }

    /// The text this version was parsed from
    fn original(&self) -> &str;

    /// `major.minor.patch` rendered the way the scheme prints it
    fn version(&self) -> String;

    /// Next major version with minor and patch reset
    fn inc_major(&self) -> Self
    where
        Self: Sized;

    /// Next minor version with patch reset
    fn inc_minor(&self) -> Self
    where
        Self: Sized;

    /// Next patch version; a prerelease bumps to its own release instead
    fn inc_patch(&self) -> Self
    where
        Self: Sized;

    /// Check if this version carries prerelease identifiers
    fn is_prerelease(&self) -> bool {
        !self.prerelease().is_empty()
    }
}

/// A concrete version scheme the constraint parser can produce values of.
pub trait Scheme: Comparable + FromStr<Err = VersionError> + Clone + Send + Sync + 'static {
    /// Short scheme name used in diagnostics
    const NAME: &'static str;

    /// Text of the lowest release version in this scheme
    const MINIMUM: &'static str;

    /// Parse with the scheme's strict grammar, if it has a stricter one
    fn parse_strict(text: &str) -> Result<Self, VersionError> {
        text.parse()
    }
}
