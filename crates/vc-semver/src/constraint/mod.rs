//! Constraint types for version matching

pub mod constraint;
mod operator;
mod parser;
mod range;
mod set;

pub use constraint::{Constraint, ConstraintError};
pub use operator::{InvalidOperatorError, Operator};
pub use set::ConstraintSet;
