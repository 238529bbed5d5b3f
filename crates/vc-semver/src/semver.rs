//! Semver facade providing high-level version operations

use crate::constraint::{ConstraintError, ConstraintSet};
use crate::Version;

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a constraint
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        let Ok(version) = Version::parse(version) else {
            return false;
        };

        match ConstraintSet::<Version>::parse(constraints) {
            Ok(set) => set.check(&version),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given constraints
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Vec<String> {
        let Ok(set) = ConstraintSet::<Version>::parse(constraints) else {
            return Vec::new();
        };

        versions
            .iter()
            .filter(|v| set.check_str(v).unwrap_or(false))
            .map(|v| v.to_string())
            .collect()
    }

    /// Parse constraints and return a reusable representation.
    pub fn parse_constraints(constraints: &str) -> Result<ConstraintSet<Version>, ConstraintError> {
        ConstraintSet::parse(constraints)
    }

    /// Check a version against pre-parsed constraints.
    pub fn satisfies_parsed(version: &str, constraints: &ConstraintSet<Version>) -> bool {
        constraints.check_str(version).unwrap_or(false)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Unparseable entries are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
