//! Sort command - order versions by precedence.

use anyhow::Result;
use clap::Args;
use vc_semver::{compare, Comparable, Scheme};

use super::{parse_version, print_json, Output};

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Sort from newest to oldest
    #[arg(short, long)]
    pub reverse: bool,
}

pub fn execute<V: Scheme>(args: SortArgs, output: Output) -> Result<i32> {
    let sorted = sort_versions::<V>(&args.versions, args.reverse, output)?;

    if output.json {
        print_json(&sorted)?;
    } else {
        for version in &sorted {
            println!("{}", version);
        }
    }

    Ok(0)
}

/// Returns the original texts in precedence order. Equal versions keep their input order.
fn sort_versions<V: Scheme>(versions: &[String], reverse: bool, output: Output) -> Result<Vec<String>> {
    let mut parsed = versions
        .iter()
        .map(|text| parse_version::<V>(text, output))
        .collect::<Result<Vec<_>>>()?;

    parsed.sort_by(|a, b| {
        if reverse {
            compare(b, a)
        } else {
            compare(a, b)
        }
    });

    Ok(parsed.iter().map(|v| v.original().to_string()).collect())
}
