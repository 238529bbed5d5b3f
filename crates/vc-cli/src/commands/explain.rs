//! Explain command - show the expanded form of a constraint expression.

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;
use vc_semver::{Constraint, ConstraintSet, Scheme};

use super::{parse_constraints, print_json, Output};

#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Constraint expression to expand
    pub constraint: String,
}

#[derive(Serialize, Debug, PartialEq)]
struct BoundOutput {
    operator: String,
    version: String,
    from: String,
}

#[derive(Serialize, Debug)]
struct ExplainOutput {
    expression: String,
    expanded: String,
    groups: Vec<Vec<BoundOutput>>,
}

pub fn execute<V: Scheme>(args: ExplainArgs, output: Output) -> Result<i32> {
    let set = parse_constraints::<V>(&args.constraint)?;

    if output.json {
        print_json(&explain(&set))?;
        return Ok(0);
    }

    println!("{}", set);
    for (i, group) in set.groups().iter().enumerate() {
        println!("{}", style(format!("group {}:", i + 1)).bold());
        for constraint in group {
            println!("  {}  {}", constraint, style(format!("(from {})", constraint.original())).dim());
        }
    }

    Ok(0)
}

fn explain<V: Scheme>(set: &ConstraintSet<V>) -> ExplainOutput {
    ExplainOutput {
        expression: set.original().to_string(),
        expanded: set.to_string(),
        groups: set
            .groups()
            .iter()
            .map(|group| group.iter().map(bound).collect())
            .collect(),
    }
}

fn bound<V: Scheme>(constraint: &Constraint<V>) -> BoundOutput {
    BoundOutput {
        operator: constraint.operator().to_string(),
        version: constraint.version().to_string(),
        from: constraint.original().to_string(),
    }
}
