//! Check command - test versions against a constraint expression.

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;
use vc_semver::Scheme;

use super::{parse_constraints, parse_version, print_json, Output};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Constraint expression, e.g. ">=1.2 <2 || ^3"
    pub constraint: String,

    /// Versions to check
    #[arg(required = true)]
    pub versions: Vec<String>,
}

#[derive(Serialize)]
struct CheckResult<'a> {
    version: &'a str,
    satisfied: bool,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    constraint: &'a str,
    results: Vec<CheckResult<'a>>,
}

/// Exits 1 when any version does not satisfy the constraint
pub fn execute<V: Scheme>(args: CheckArgs, output: Output) -> Result<i32> {
    let set = parse_constraints::<V>(&args.constraint)?;

    let mut results = Vec::with_capacity(args.versions.len());
    for text in &args.versions {
        let version: V = parse_version(text, output)?;
        let satisfied = set.check(&version);
        log::debug!("{} against {}: {}", version, set, satisfied);
        results.push(CheckResult {
            version: text.as_str(),
            satisfied,
        });
    }

    let code = if results.iter().all(|r| r.satisfied) { 0 } else { 1 };

    if output.json {
        print_json(&CheckOutput {
            constraint: &args.constraint,
            results,
        })?;
    } else {
        for result in &results {
            if result.satisfied {
                println!("{} {} {}", style("✓").green().bold(), result.version, args.constraint);
            } else {
                println!("{} {} {}", style("✗").red().bold(), result.version, args.constraint);
            }
        }
    }

    Ok(code)
}
