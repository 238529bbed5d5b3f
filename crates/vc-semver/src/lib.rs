//! Semantic and calendar versioning with npm-style range constraints
//!
//! This crate parses `major.minor.patch[-prerelease][+metadata]` and
//! `year.month.day[-prerelease]` versions, orders them, and checks them
//! against expressions such as `^1.2.3`, `~2.1` or `>=1.0.0 <2.0.0 || >3.0.0`.

mod calver;
mod comparable;
mod comparator;
pub mod constraint;
mod error;
mod semver;
mod version;

pub use calver::CalVer;
pub use comparable::{Comparable, Scheme};
pub use comparator::{compare, eq, gt, lt, Comparator};
pub use constraint::{Constraint, ConstraintError, ConstraintSet, InvalidOperatorError, Operator};
pub use error::{Result, VersionError};
pub use semver::Semver;
pub use version::Version;
