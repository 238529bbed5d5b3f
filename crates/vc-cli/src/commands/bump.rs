//! Bump command - compute the next version.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use vc_semver::{Comparable, Scheme};

use super::{parse_version, print_json, Output};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Part {
    Major,
    Minor,
    Patch,
}

#[derive(Args, Debug)]
pub struct BumpArgs {
    /// Which part to increment
    #[arg(value_enum)]
    pub part: Part,

    /// Version to start from
    pub version: String,
}

#[derive(Serialize)]
struct BumpOutput<'a> {
    from: &'a str,
    to: &'a str,
}

pub fn execute<V: Scheme>(args: BumpArgs, output: Output) -> Result<i32> {
    let version: V = parse_version(&args.version, output)?;
    let next = bump(&version, args.part);

    if output.json {
        print_json(&BumpOutput {
            from: &args.version,
            to: next.original(),
        })?;
    } else {
        println!("{}", next.original());
    }

    Ok(0)
}

fn bump<V: Scheme>(version: &V, part: Part) -> V {
    match part {
        Part::Major => version.inc_major(),
        Part::Minor => version.inc_minor(),
        Part::Patch => version.inc_patch(),
    }
}
