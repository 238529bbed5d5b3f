//! Semantic version values and their parsers

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::comparator;
use crate::error::{Result, VersionError};
use crate::{Comparable, Scheme};

lazy_static! {
    // Minor and patch are optional, so "1" and "v1.2" are accepted
    static ref LOOSE_RE: Regex = Regex::new(
        r"^v?([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    ).unwrap();

    static ref STRICT_RE: Regex = Regex::new(
        r"^v?(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    ).unwrap();
}

/// A semantic version: `major.minor.patch[-prerelease][+metadata]`
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: String,
    metadata: String,
    original: String,
}

impl Version {
    /// Build a version from its parts, validating prerelease and metadata
    pub fn new(major: u64, minor: u64, patch: u64, pre: &str, metadata: &str) -> Result<Self> {
        if !pre.is_empty() {
            validate_prerelease(pre)?;
        }
        if !metadata.is_empty() {
            validate_metadata(metadata)?;
        }

        let mut version = Self {
            major,
            minor,
            patch,
            pre: pre.to_string(),
            metadata: metadata.to_string(),
            original: String::new(),
        };
        version.original = version.to_string();
        Ok(version)
    }

    /// Parse a version, coercing `1` and `1.2` to `1.0.0` and `1.2.0`
    pub fn parse(text: &str) -> Result<Self> {
        let caps = LOOSE_RE
            .captures(text)
            .ok_or_else(|| VersionError::InvalidSemVer(text.to_string()))?;

        let segment = |i: usize| caps.get(i).map_or(Ok(0), |m| parse_segment(m.as_str()));
        let extra = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        Self::from_parts(text, segment(1)?, segment(2)?, segment(3)?, extra(4), extra(5))
    }

    /// Parse a full `X.Y.Z` version without leading zeros
    pub fn parse_strict(text: &str) -> Result<Self> {
        let caps = STRICT_RE
            .captures(text)
            .ok_or_else(|| VersionError::InvalidSemVer(text.to_string()))?;

        let segment = |i: usize| caps.get(i).map_or(Ok(0), |m| parse_segment(m.as_str()));
        let extra = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        Self::from_parts(text, segment(1)?, segment(2)?, segment(3)?, extra(4), extra(5))
    }

    fn from_parts(original: &str, major: u64, minor: u64, patch: u64, pre: &str, metadata: &str) -> Result<Self> {
        let mut version = Self::new(major, minor, patch, pre, metadata)?;
        version.original = original.to_string();
        Ok(version)
    }

    /// Check if the source text carried a leading `v`
    pub fn has_v_prefix(&self) -> bool {
        self.original.starts_with('v')
    }

    fn bumped(&self, major: u64, minor: u64, patch: u64) -> Self {
        let mut next = Self {
            major,
            minor,
            patch,
            pre: String::new(),
            metadata: String::new(),
            original: String::new(),
        };
        let prefix = if self.has_v_prefix() { "v" } else { "" };
        next.original = format!("{}{}", prefix, next);
        next
    }
}

pub(crate) fn parse_segment(segment: &str) -> Result<u64> {
    segment.parse().map_err(|source| VersionError::SegmentOverflow {
        segment: segment.to_string(),
        source,
    })
}

/// Prerelease identifiers are `[0-9A-Za-z-]`, non-empty, and numeric ones
/// carry no leading zero.
pub(crate) fn validate_prerelease(pre: &str) -> Result<()> {
    for part in pre.split('.') {
        if part.is_empty() {
            return Err(VersionError::InvalidPrerelease(pre.to_string()));
        }
        if part.bytes().all(|b| b.is_ascii_digit()) {
            if part.len() > 1 && part.starts_with('0') {
                return Err(VersionError::SegmentStartsZero(pre.to_string()));
            }
        } else if !is_identifier(part) {
            return Err(VersionError::InvalidPrerelease(pre.to_string()));
        }
    }
    Ok(())
}

fn validate_metadata(metadata: &str) -> Result<()> {
    if metadata.split('.').all(|part| !part.is_empty() && is_identifier(part)) {
        Ok(())
    } else {
        Err(VersionError::InvalidMetadata(metadata.to_string()))
    }
}

fn is_identifier(part: &str) -> bool {
    part.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

impl Comparable for Version {
    fn major(&self) -> u64 {
        self.major
    }

    fn minor(&self) -> u64 {
        self.minor
    }

    fn patch(&self) -> u64 {
        self.patch
    }

    fn prerelease(&self) -> &str {
        &self.pre
    }

    fn metadata(&self) -> &str {
        &self.metadata
    }

    fn original(&self) -> &str {
        &self.original
    }

    fn version(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    fn inc_major(&self) -> Self {
        self.bumped(self.major.saturating_add(1), 0, 0)
    }

    fn inc_minor(&self) -> Self {
        self.bumped(self.major, self.minor.saturating_add(1), 0)
    }

    fn inc_patch(&self) -> Self {
        if self.pre.is_empty() {
            self.bumped(self.major, self.minor, self.patch.saturating_add(1))
        } else {
            self.bumped(self.major, self.minor, self.patch)
        }
    }
}

impl Scheme for Version {
    const NAME: &'static str = "semver";
    const MINIMUM: &'static str = "0.0.0";

    fn parse_strict(text: &str) -> Result<Self> {
        // Resolves to the inherent parser
        Version::parse_strict(text)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata)?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        comparator::eq(self, other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        comparator::compare(self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre.hash(state);
    }
}
