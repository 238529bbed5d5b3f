//! Compare command - order two versions.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::cmp::Ordering;
use vc_semver::{compare, Scheme};

use super::{parse_version, print_json, Output};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First version
    pub left: String,

    /// Second version
    pub right: String,
}

#[derive(Serialize)]
struct CompareOutput<'a> {
    left: &'a str,
    right: &'a str,
    result: i8,
}

pub fn execute<V: Scheme>(args: CompareArgs, output: Output) -> Result<i32> {
    let left: V = parse_version(&args.left, output)?;
    let right: V = parse_version(&args.right, output)?;

    let result = ordering_to_int(compare(&left, &right));

    if output.json {
        print_json(&CompareOutput {
            left: &args.left,
            right: &args.right,
            result,
        })?;
    } else {
        println!("{}", result);
    }

    Ok(0)
}

fn ordering_to_int(ordering: Ordering) -> i8 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
