//! OR-of-AND constraint expressions

use std::fmt;
use std::str::FromStr;

use super::parser;
use super::{Constraint, ConstraintError};
use crate::{Comparable, Scheme, VersionError};

/// A parsed expression such as `>=1.1 <2 || ^3.0`.
///
/// Groups are OR'ed together; the constraints inside a group are AND'ed.
#[derive(Debug, Clone)]
pub struct ConstraintSet<V> {
    groups: Vec<Vec<Constraint<V>>>,
    original: String,
}

impl<V: Scheme> ConstraintSet<V> {
    pub fn parse(expression: &str) -> Result<Self, ConstraintError> {
        if expression.trim().is_empty() {
            return Err(ConstraintError::Empty);
        }

        let mut groups = Vec::new();
        for group in expression.split("||") {
            if group.trim().is_empty() {
                return Err(ConstraintError::malformed(expression, "empty || group"));
            }
            let mut constraints = Vec::new();
            parser::parse_group(group, &mut constraints)?;
            groups.push(constraints);
        }

        log::debug!(
            "Parsed {} constraint \"{}\" into {} group(s)",
            V::NAME,
            expression,
            groups.len()
        );

        Ok(ConstraintSet {
            groups,
            original: expression.to_string(),
        })
    }

    /// Check if some group is satisfied by the version
    pub fn check<C: Comparable + ?Sized>(&self, version: &C) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(|c| c.matches(version)))
    }

    /// Parse `version` with this set's scheme, then check it
    pub fn check_str(&self, version: &str) -> Result<bool, VersionError> {
        let version: V = version.parse()?;
        Ok(self.check(&version))
    }

    pub fn groups(&self) -> &[Vec<Constraint<V>>] {
        &self.groups
    }

    /// The expression this set was parsed from
    pub fn original(&self) -> &str {
        &self.original
    }
}

impl<V: Scheme> FromStr for ConstraintSet<V> {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<V: Scheme> fmt::Display for ConstraintSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, " || ")?;
            }
            if let [single] = group.as_slice() {
                write!(f, "{}", single)?;
            } else {
                let parts: Vec<String> = group.iter().map(|c| c.to_string()).collect();
                write!(f, "[{}]", parts.join(" "))?;
            }
        }
        Ok(())
    }
}
