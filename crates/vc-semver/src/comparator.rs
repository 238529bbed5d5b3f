//! Version comparison utilities

use std::cmp::Ordering;

use crate::constraint::Operator;
use crate::{Comparable, Version};

/// Compare two versions by major, minor, patch and prerelease, in that order.
///
/// A release ranks above any prerelease of the same `major.minor.patch`.
/// Build metadata and the original text are ignored.
pub fn compare<A, B>(a: &A, b: &B) -> Ordering
where
    A: Comparable + ?Sized,
    B: Comparable + ?Sized,
{
    a.major()
        .cmp(&b.major())
        .then_with(|| a.minor().cmp(&b.minor()))
        .then_with(|| a.patch().cmp(&b.patch()))
        .then_with(|| match (a.prerelease(), b.prerelease()) {
            ("", "") => Ordering::Equal,
            ("", _) => Ordering::Greater,
            (_, "") => Ordering::Less,
            (pa, pb) => compare_prerelease(pa, pb),
        })
}

/// Check if `a` sorts before `b`
pub fn lt<A, B>(a: &A, b: &B) -> bool
where
    A: Comparable + ?Sized,
    B: Comparable + ?Sized,
{
    compare(a, b) == Ordering::Less
}

/// Check if `a` sorts after `b`
pub fn gt<A, B>(a: &A, b: &B) -> bool
where
    A: Comparable + ?Sized,
    B: Comparable + ?Sized,
{
    compare(a, b) == Ordering::Greater
}

/// Check if `a` and `b` have the same precedence
pub fn eq<A, B>(a: &A, b: &B) -> bool
where
    A: Comparable + ?Sized,
    B: Comparable + ?Sized,
{
    compare(a, b) == Ordering::Equal
}

fn compare_prerelease(a: &str, b: &str) -> Ordering {
    let mut a_parts = a.split('.');
    let mut b_parts = b.split('.');

    loop {
        match (a_parts.next(), b_parts.next()) {
            (None, None) => return Ordering::Equal,
            // An exhausted side continues with an empty placeholder.
            (a_part, b_part) => {
                let ord = compare_pre_part(a_part.unwrap_or(""), b_part.unwrap_or(""));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn compare_pre_part(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if a.is_empty() {
        return Ordering::Less;
    }
    if b.is_empty() {
        return Ordering::Greater;
    }

    // Numeric identifiers rank below alphanumeric ones.
    match (numeric_identifier(a), numeric_identifier(b)) {
        (Some(x), Some(y)) => x.len().cmp(&y.len()).then_with(|| x.cmp(y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.as_bytes().cmp(b.as_bytes()),
    }
}

/// Digits of a numeric identifier without leading zeros, so any magnitude
/// orders by length first and then byte-wise.
fn numeric_identifier(part: &str) -> Option<&[u8]> {
    if part.bytes().all(|b| b.is_ascii_digit()) {
        Some(part.trim_start_matches('0').as_bytes())
    } else {
        None
    }
}

/// Comparator for comparing semantic version strings
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<=", version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "==", version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "!=", version2)
    }

    /// Compare version1 to version2 using the given operator.
    ///
    /// Unparseable versions and unknown operators never compare true.
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        let Ok(operator) = operator.parse::<Operator>() else {
            return false;
        };

        match (Version::parse(version1), Version::parse(version2)) {
            (Ok(v1), Ok(v2)) => operator.test(compare(&v1, &v2)),
            _ => false,
        }
    }
}
