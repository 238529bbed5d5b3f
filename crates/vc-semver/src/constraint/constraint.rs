//! Single version constraint implementation

use std::fmt;

use thiserror::Error;

use super::{InvalidOperatorError, Operator};
use crate::comparator;
use crate::{Comparable, VersionError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Empty constraint expression")]
    Empty,

    #[error("Improper constraint: {0}")]
    InvalidToken(String),

    #[error(transparent)]
    InvalidOperator(#[from] InvalidOperatorError),

    #[error("Could not parse version constraint {constraint}: {reason}")]
    Malformed { constraint: String, reason: String },

    #[error(transparent)]
    Version(#[from] VersionError),
}

impl ConstraintError {
    pub(crate) fn malformed(constraint: &str, reason: impl Into<String>) -> Self {
        ConstraintError::Malformed {
            constraint: constraint.to_string(),
            reason: reason.into(),
        }
    }
}

/// A single version constraint (e.g., ">= 1.0.0")
#[derive(Debug, Clone)]
pub struct Constraint<V> {
    operator: Operator,
    version: V,
    original: String,
}

impl<V: Comparable> Constraint<V> {
    /// Create a new constraint
    pub fn new(operator: Operator, version: V, original: impl Into<String>) -> Self {
        Constraint {
            operator,
            version,
            original: original.into(),
        }
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the bound version
    pub fn version(&self) -> &V {
        &self.version
    }

    /// The token this constraint was parsed or expanded from
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Check if a version satisfies this constraint
    pub fn matches<C: Comparable + ?Sized>(&self, candidate: &C) -> bool {
        self.operator.test(comparator::compare(candidate, &self.version))
    }
}

impl<V: Comparable> fmt::Display for Constraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.version)
    }
}
