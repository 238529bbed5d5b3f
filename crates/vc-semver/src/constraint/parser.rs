//! Clause parser: turns one `||` group into a flat list of constraints

use lazy_static::lazy_static;
use regex::Regex;

use super::range::{self, VersionPattern};
use super::{Constraint, ConstraintError, Operator};
use crate::Scheme;

const HYPHEN: &str = " - ";

lazy_static! {
    // Longest operators first; the body is what a version or a wildcard may contain
    static ref CONSTRAINT_RE: Regex =
        Regex::new(r"^(\^|>=|<=|!=|==|!|>|<|~|=)?([0-9A-Za-z_.+*-]+)$").unwrap();
}

/// Parse one clause, appending its constraints to `out`.
///
/// A clause is either a hyphen range, a whitespace / comma separated list of
/// tokens, or a single token.
pub(crate) fn parse_group<V: Scheme>(group: &str, out: &mut Vec<Constraint<V>>) -> Result<(), ConstraintError> {
    let group = group.trim();

    if group.contains(HYPHEN) {
        let sides: Vec<&str> = group.split(HYPHEN).collect();
        if sides.len() != 2 {
            return Err(ConstraintError::malformed(group, "more than one hyphen range separator"));
        }
        parse_group(&format!(">={}", sides[0].trim()), out)?;
        return parse_group(&format!("<={}", sides[1].trim()), out);
    }

    if group.contains(|c: char| c.is_whitespace() || c == ',') {
        for token in group.split(|c: char| c.is_whitespace() || c == ',') {
            if !token.is_empty() {
                parse_group(token, out)?;
            }
        }
        return Ok(());
    }

    parse_token(group, out)
}

/// Parse one whitespace-free token such as `>=1.2`, `^0.3` or `2.x`
pub(crate) fn parse_token<V: Scheme>(token: &str, out: &mut Vec<Constraint<V>>) -> Result<(), ConstraintError> {
    let caps = CONSTRAINT_RE
        .captures(token)
        .ok_or_else(|| ConstraintError::InvalidToken(token.to_string()))?;

    let op = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());
    let pattern = VersionPattern::parse(body);

    if pattern.is_universal() {
        return match op {
            "" | "=" | "==" => range::universal(token, out),
            _ => Err(ConstraintError::malformed(token, format!("operator {} cannot apply to a wildcard", op))),
        };
    }

    if pattern.has_wildcard() && pattern.explicit_count() == 0 {
        return Err(ConstraintError::malformed(token, "a wildcard major cannot be followed by numbers"));
    }

    match op {
        "^" => range::caret(token, &pattern, out),
        "~" => range::tilde(token, &pattern, out),
        _ => {
            let operator: Operator = op.parse()?;
            if pattern.has_wildcard() {
                return range::star(token, operator, &pattern, out);
            }
            let version: V = body.parse()?;
            out.push(Constraint::new(operator, version, token));
            Ok(())
        }
    }
}
