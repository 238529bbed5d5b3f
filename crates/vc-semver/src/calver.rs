//! Calendar version values: `year.month[.day][-prerelease]`

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::comparator;
use crate::error::{Result, VersionError};
use crate::version::{parse_segment, validate_prerelease};
use crate::{Comparable, Scheme};

lazy_static! {
    static ref CALVER_RE: Regex = Regex::new(
        r"^([0-9]{4}|[0-9]{2})(?:\.([0-9]{1,2}))?(?:\.([0-9]{1,2}))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    ).unwrap();
}

/// A calendar version. Year, month and day map onto major, minor and patch.
#[derive(Debug, Clone)]
pub struct CalVer {
    year: u64,
    month: u64,
    day: u64,
    pre: String,
    original: String,
}

impl CalVer {
    pub fn new(year: u64, month: u64, day: u64, pre: &str) -> Result<Self> {
        if !pre.is_empty() {
            validate_prerelease(pre)?;
        }
        Ok(Self::canonical(year, month, day, pre.to_string()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let caps = CALVER_RE
            .captures(text)
            .ok_or_else(|| VersionError::InvalidCalVer(text.to_string()))?;

        let segment = |i: usize| caps.get(i).map_or(Ok(0), |m| parse_segment(m.as_str()));
        let pre = caps.get(4).map_or("", |m| m.as_str());
        if !pre.is_empty() {
            validate_prerelease(pre)?;
        }

        Ok(Self {
            year: segment(1)?,
            month: segment(2)?,
            day: segment(3)?,
            pre: pre.to_string(),
            original: text.to_string(),
        })
    }

    fn canonical(year: u64, month: u64, day: u64, pre: String) -> Self {
        let mut version = Self {
            year,
            month,
            day,
            pre,
            original: String::new(),
        };
        version.original = version.to_string();
        version
    }
}

impl Comparable for CalVer {
    fn major(&self) -> u64 {
        self.year
    }

    fn minor(&self) -> u64 {
        self.month
    }

    fn patch(&self) -> u64 {
        self.day
    }

    fn prerelease(&self) -> &str {
        &self.pre
    }

    fn original(&self) -> &str {
        &self.original
    }

    fn version(&self) -> String {
        format!("{}.{:02}.{:02}", self.year, self.month, self.day)
    }

    fn inc_major(&self) -> Self {
        Self::canonical(self.year.saturating_add(1), 0, 0, String::new())
    }

    fn inc_minor(&self) -> Self {
        Self::canonical(self.year, self.month.saturating_add(1), 0, String::new())
    }

    fn inc_patch(&self) -> Self {
        let day = if self.pre.is_empty() {
            self.day.saturating_add(1)
        } else {
            self.day
        };
        Self::canonical(self.year, self.month, day, String::new())
    }
}

impl Scheme for CalVer {
    const NAME: &'static str = "calver";
    const MINIMUM: &'static str = "00.00.00";
}

impl FromStr for CalVer {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CalVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version())?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        Ok(())
    }
}

impl PartialEq for CalVer {
    fn eq(&self, other: &Self) -> bool {
        comparator::eq(self, other)
    }
}

impl Eq for CalVer {}

impl PartialOrd for CalVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalVer {
    fn cmp(&self, other: &Self) -> Ordering {
        comparator::compare(self, other)
    }
}

impl Hash for CalVer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.year.hash(state);
        self.month.hash(state);
        self.day.hash(state);
        self.pre.hash(state);
    }
}
