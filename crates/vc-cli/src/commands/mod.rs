//! Subcommands of the vc binary

mod bump;
mod check;
mod compare;
mod explain;
mod sort;

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;
use vc_semver::{CalVer, ConstraintSet, Scheme, Version};

use crate::config::{SchemeKind, Settings};

pub use bump::BumpArgs;
pub use check::CheckArgs;
pub use compare::CompareArgs;
pub use explain::ExplainArgs;
pub use sort::SortArgs;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two versions and print -1, 0 or 1
    Compare(CompareArgs),

    /// Check versions against a constraint expression
    Check(CheckArgs),

    /// Sort versions by precedence
    Sort(SortArgs),

    /// Print the next major, minor or patch version
    Bump(BumpArgs),

    /// Show how a constraint expression expands
    Explain(ExplainArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub strict: bool,
    pub json: bool,
}

pub fn execute(command: Commands, settings: &Settings, json: bool) -> Result<i32> {
    let output = Output {
        strict: settings.strict,
        json,
    };

    match settings.scheme {
        SchemeKind::Semver => dispatch::<Version>(command, output),
        SchemeKind::Calver => dispatch::<CalVer>(command, output),
    }
}

fn dispatch<V: Scheme>(command: Commands, output: Output) -> Result<i32> {
    log::debug!("Running {:?} with the {} scheme", command, V::NAME);

    match command {
        Commands::Compare(args) => compare::execute::<V>(args, output),
        Commands::Check(args) => check::execute::<V>(args, output),
        Commands::Sort(args) => sort::execute::<V>(args, output),
        Commands::Bump(args) => bump::execute::<V>(args, output),
        Commands::Explain(args) => explain::execute::<V>(args, output),
    }
}

/// Parse a version with the active scheme.
///
/// Schemes without a stricter grammar parse the same in strict mode.
pub(crate) fn parse_version<V: Scheme>(text: &str, output: Output) -> Result<V> {
    let parsed = if output.strict {
        V::parse_strict(text)
    } else {
        text.parse::<V>()
    };

    parsed.with_context(|| format!("Failed to parse {} version \"{}\"", V::NAME, text))
}

pub(crate) fn parse_constraints<V: Scheme>(expression: &str) -> Result<ConstraintSet<V>> {
    ConstraintSet::parse(expression).with_context(|| format!("Failed to parse constraint \"{}\"", expression))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
