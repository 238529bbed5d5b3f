use std::num::ParseIntError;

use thiserror::Error;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid semantic version \"{0}\"")]
    InvalidSemVer(String),

    #[error("Invalid calendar version \"{0}\"")]
    InvalidCalVer(String),

    #[error("Version segment starts with 0 in \"{0}\"")]
    SegmentStartsZero(String),

    #[error("Invalid prerelease string \"{0}\"")]
    InvalidPrerelease(String),

    #[error("Invalid metadata string \"{0}\"")]
    InvalidMetadata(String),

    #[error("Version segment \"{segment}\" is out of range")]
    SegmentOverflow {
        segment: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, VersionError>;
