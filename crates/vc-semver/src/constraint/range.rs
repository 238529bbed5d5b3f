//! Shorthand range expansion: caret, tilde and wildcard constraints

use super::{Constraint, ConstraintError, Operator};
use crate::{comparator, Scheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Number(&'a str),
    Wildcard,
}

/// The numeric core of a constraint body, with wildcard segments marked.
///
/// `v1.2.x-beta` splits into prefix `v`, segments `[1, 2, x]` and suffix `-beta`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VersionPattern<'a> {
    prefix: &'a str,
    segments: Vec<Segment<'a>>,
    suffix: &'a str,
}

impl<'a> VersionPattern<'a> {
    pub(crate) fn parse(body: &'a str) -> Self {
        let (prefix, rest) = match body.strip_prefix('v') {
            Some(rest) => (&body[..1], rest),
            None => ("", body),
        };
        let end = rest.find(|c: char| c == '-' || c == '+').unwrap_or(rest.len());
        let (core, suffix) = rest.split_at(end);

        let segments = core
            .split('.')
            .map(|s| match s {
                "*" | "x" | "X" => Segment::Wildcard,
                _ => Segment::Number(s),
            })
            .collect();

        VersionPattern {
            prefix,
            segments,
            suffix,
        }
    }

    /// Every segment is a wildcard (`*`, `x.x`, `*-0`)
    pub(crate) fn is_universal(&self) -> bool {
        self.segments.iter().all(|s| *s == Segment::Wildcard)
    }

    pub(crate) fn has_wildcard(&self) -> bool {
        self.segments.contains(&Segment::Wildcard)
    }

    /// Number of segments given before the first wildcard
    pub(crate) fn explicit_count(&self) -> usize {
        self.segments
            .iter()
            .take_while(|s| matches!(s, Segment::Number(_)))
            .count()
    }

    /// The body with the first wildcard and everything after it replaced by `0`
    pub(crate) fn concrete(&self) -> String {
        let explicit = self.explicit_count();
        let core: Vec<&str> = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, s)| match s {
                Segment::Number(n) if i < explicit => *n,
                _ => "0",
            })
            .collect();
        format!("{}{}{}", self.prefix, core.join("."), self.suffix)
    }

    fn lower<V: Scheme>(&self) -> Result<V, ConstraintError> {
        Ok(self.concrete().parse::<V>()?)
    }
}

/// The upper bound of a range must lie above its lower bound; it doesn't when
/// the increment saturated at the largest representable segment.
fn check_upper<V: Scheme>(token: &str, lower: &V, upper: &V) -> Result<(), ConstraintError> {
    if comparator::lt(lower, upper) {
        Ok(())
    } else {
        Err(ConstraintError::malformed(token, format!("no version above {} to bound the range", lower)))
    }
}

fn push_range<V: Scheme>(token: &str, lower: V, upper: V, out: &mut Vec<Constraint<V>>) -> Result<(), ConstraintError> {
    check_upper(token, &lower, &upper)?;
    log::trace!("Expanded {} to >= {} < {}", token, lower, upper);
    out.push(Constraint::new(Operator::GreaterThanOrEqual, lower, token));
    out.push(Constraint::new(Operator::LessThan, upper, token));
    Ok(())
}

/// `*` and friends: every version, prereleases of the minimum included
pub(crate) fn universal<V: Scheme>(token: &str, out: &mut Vec<Constraint<V>>) -> Result<(), ConstraintError> {
    let minimum: V = format!("{}-0", V::MINIMUM).parse()?;
    log::trace!("Expanded {} to >= {}", token, minimum);
    out.push(Constraint::new(Operator::GreaterThanOrEqual, minimum, token));
    Ok(())
}

/// ^1.2.3  -->  >=1.2.3 <2.0.0
/// ^0.2.3  -->  >=0.2.3 <0.3.0
/// ^0.0.3  -->  >=0.0.3 <0.0.4
/// ^0.0    -->  >=0.0.0 <0.1.0
/// ^0, ^0.x  -->  >=0.0.0 <1.0.0
pub(crate) fn caret<V: Scheme>(
    token: &str,
    pattern: &VersionPattern<'_>,
    out: &mut Vec<Constraint<V>>,
) -> Result<(), ConstraintError> {
    let lower: V = pattern.lower()?;
    let upper = if lower.major() > 0 {
        lower.inc_major()
    } else if lower.minor() > 0 {
        lower.inc_minor()
    } else if lower.patch() > 0 {
        lower.inc_patch()
    } else {
        match pattern.explicit_count() {
            0 | 1 => lower.inc_major(),
            2 => lower.inc_minor(),
            _ => lower.inc_patch(),
        }
    };
    push_range(token, lower, upper, out)
}

/// ~1, ~1.x     -->  >=1.0.0 <2.0.0
/// ~1.2, ~1.2.x -->  >=1.2.0 <1.3.0
/// ~1.2.3       -->  >=1.2.3 <1.3.0
pub(crate) fn tilde<V: Scheme>(
    token: &str,
    pattern: &VersionPattern<'_>,
    out: &mut Vec<Constraint<V>>,
) -> Result<(), ConstraintError> {
    let lower: V = pattern.lower()?;
    let upper = if pattern.explicit_count() <= 1 {
        lower.inc_major()
    } else {
        lower.inc_minor()
    };
    push_range(token, lower, upper, out)
}

/// 2.*    -->  >=2.0.0 <3.0.0
/// 2.1.*  -->  >=2.1.0 <2.2.0
///
/// With a comparison operator the wildcard range collapses to one bound:
/// `>=2.x` is `>=2.0.0`, `>2.x` is `>=3.0.0`, `<2.x` is `<2.0.0` and
/// `<=2.x` is `<3.0.0`.
pub(crate) fn star<V: Scheme>(
    token: &str,
    operator: Operator,
    pattern: &VersionPattern<'_>,
    out: &mut Vec<Constraint<V>>,
) -> Result<(), ConstraintError> {
    let lower: V = pattern.lower()?;
    let upper = if pattern.explicit_count() <= 1 {
        lower.inc_major()
    } else {
        lower.inc_minor()
    };

    let bound = match operator {
        Operator::Equal => return push_range(token, lower, upper, out),
        Operator::GreaterThanOrEqual => (Operator::GreaterThanOrEqual, lower),
        Operator::LessThan => (Operator::LessThan, lower),
        Operator::GreaterThan => {
            check_upper(token, &lower, &upper)?;
            (Operator::GreaterThanOrEqual, upper)
        }
        Operator::LessThanOrEqual => {
            check_upper(token, &lower, &upper)?;
            (Operator::LessThan, upper)
        }
        Operator::NotEqual => {
            return Err(ConstraintError::malformed(token, "a wildcard cannot be negated"));
        }
    };

    log::trace!("Expanded {} to {} {}", token, bound.0, bound.1);
    out.push(Constraint::new(bound.0, bound.1, token));
    Ok(())
}
