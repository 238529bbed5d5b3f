use std::cmp::Ordering;

use vc_semver::{compare, CalVer, Comparable, ConstraintError, ConstraintSet, Version};

fn check(constraint: &str, version: &str) -> bool {
    let set: ConstraintSet<Version> = constraint
        .parse()
        .unwrap_or_else(|e| panic!("parsing {:?}: {}", constraint, e));
    set.check(&Version::parse(version).unwrap())
}

#[test]
fn test_constraint_check() {
    let cases = [
        ("1.2.3", ">=1.2.3", true),
        ("1.2.4", ">=1.2.3", true),
        ("1.3.0", ">=1.2.3", true),
        ("2.0.0", ">=1.2.3", true),
        ("1.2.1", ">=1.2.3", false),
        ("1.1.0", ">=1.2.3", false),
        ("0.1.0", ">=1.2.3", false),
        ("1.2.4", ">1.2.3", true),
        ("1.2.3", ">1.2.3", false),
        ("1.3.0", "<=1.2.3", false),
        ("2.0.0", "<=1.2.3", false),
        ("1.2.1", "<=1.2.3", true),
        ("1.1.0", "<=1.2.3", true),
        ("2.0.0", "<1.2.3", false),
        ("4.1.0", "!=4.1.0", false),
        ("4.1.1", "!=4.1.0", true),
        ("4.1.0", "!=4.1", false),
        ("4.1.1", "!=4.1", true),
        ("5.1.0-alpha.1", "!=4.1", true),
        ("4.1.0", "!=4.1-alpha", true),
        ("5.1.0", "!=4.1", true),
        ("11.1.0", ">11", true),
        ("11.1.0", ">11.1", false),
        ("11.1.1", ">11.1", true),
        ("11.2.1", ">11.1", true),
        ("11.1.2", ">=11", true),
        ("11.1.2", ">=11.1", true),
        ("11.0.2", ">=11.1", false),
        ("4.1.0", ">=1.1", true),
        ("1.1.0", ">=1.1", true),
        ("0.0.9", ">=1.1", false),
        ("0.0.1-alpha", ">=0", true),
        ("0.0.1-alpha", ">=0.0", true),
        ("0.0.1-alpha", ">=0-0", true),
        ("0.0.1-alpha", ">=0.0-0", true),
        ("0.0.0-alpha", ">=0", false),
        ("0.0.0-alpha", ">=0-0", true),
        ("0.0.0-alpha", ">=0.0.0-0", true),
        ("1.2.3", ">=0.0.0-0", true),
        ("3.4.5-beta.1", ">=0.0.0-0", true),
        ("0.0.0-alpha", "<0", true),
        ("0.0.0-alpha", "<0-z", true),
        ("0", ">=0", true),
        ("1", "=0", false),
        ("1", "*", true),
        ("4.5.6", "*", true),
        ("1.2.3-alpha.1", "*", true),
        ("1.2.3-alpha.1", "*-0", true),
        ("0.0.0-0", "*", true),
        ("1", "2.*", false),
        ("3.4.5", "2.*", false),
        ("2.1.1", "2.*", true),
        ("2.1.1", "2.1.*", true),
        ("2.2.1", "2.1.*", false),
        ("1", "2", false),
        ("3.4.5", "2", false),
        ("2.1.1", "2", false),
        ("2.1.1", "2.1", false),
        ("2.2.1", "2.1", false),
        ("1.2.4", "~1.2.3", true),
        ("1.3.4", "~1.2.3", false),
        ("1.2.4", "~1.2", true),
        ("1.3.4", "~1.2", false),
        ("1.2.4", "~1", true),
        ("2.3.4", "~1", false),
        ("0.2.5", "~0.2.3", true),
        ("0.3.5", "~0.2.3", false),
        ("1.2.3-beta.4", "~1.2.3-beta.2", true),
        ("1.2.4-beta.2", "~1.2.3-beta.2", true),
        ("1.3.4-beta.2", "~1.2.3-beta.2", false),
        ("1.8.9", "^1.2.3", true),
        ("2.8.9", "^1.2.3", false),
        ("1.2.1", "^1.2.3", false),
        ("2.1.0", "^1.1.0", false),
        ("2.2.1", "^1.2.0", false),
        ("1.2.1-alpha.1", "^1.2.0", true),
        ("1.2.1-alpha.1", "^1.2.0-alpha.0", true),
        ("1.2.1-alpha.0", "^1.2.0-alpha.0", true),
        ("1.2.0-alpha.1", "^1.2.0-alpha.2", false),
        ("1.8.9", "^1.2", true),
        ("2.8.9", "^1.2", false),
        ("1.8.9", "^1", true),
        ("2.8.9", "^1", false),
        ("0.2.5", "^0.2.3", true),
        ("0.5.6", "^0.2.3", false),
        ("0.2.5", "^0.2", true),
        ("0.5.6", "^0.2", false),
        ("0.0.3", "^0.0.3", true),
        ("0.0.4", "^0.0.3", false),
        ("0.0.3", "^0.0", true),
        ("0.1.4", "^0.0", false),
        ("1.0.4", "^0.0", false),
        ("0.2.3", "^0", true),
        ("1.1.4", "^0", false),
        ("0.2.3-beta.4", "^0.2.3-beta.2", true),
        ("0.2.4-beta.2", "^0.2.3-beta.2", true),
        ("0.3.4-beta.2", "^0.2.3-beta.2", false),
        ("0.2.3-beta.2", "^0.2.3-beta.2", true),
    ];

    for (version, constraint, expected) in cases {
        assert_eq!(check(constraint, version), expected, "{} against {}", version, constraint);
    }
}

#[test]
fn test_constraints_check() {
    let cases = [
        (">1.1 <2", "1.1.1", true),
        (">1.1 <2", "1.2.1", true),
        (">1.1 <3", "4.3.2", false),
        (">=1.1 <2 !=1.2.3", "1.2.3", false),
        (">=1.1    <2    !=1.2.3", "1.2.3", false),
        (">1.1    <3", "4.3.2", false),
        (">=1.1 <2 !=1.2.3 || >3", "4.1.2", true),
        (">=1.1 <2 !=1.2.3 || >3", "3.1.2", true),
        (">=1.1 <2 !=1.2.3 || >=3", "3.0.0", true),
        (">=1.1 <2 !=1.2.3 || >3", "3.0.0", false),
        (">=1.1 <2 !=1.2.3 || >3", "1.2.3", false),
        ("1.1 - 2", "1.1.1", true),
        ("1.5.0 - 4.5", "3.7.0", true),
        ("1.0.0 - 2.0.0 <=2.0.0", "1.5.0", true),
        ("1.0.0 - 2.0.0 <=2.0.0", "2.0.0", true),
        ("1.0.0 - 2.0.0 <=2.0.0", "2.0.1", false),
        (">=1.1, <2", "1.5.0", true),
        (">=1.1,<2", "2.0.0", false),
        ("1.x - 2.x", "2.9.9", true),
        ("1.x - 2.x", "3.0.0", false),
        ("1.x - 2.x", "0.9.9", false),
    ];

    for (constraint, version, expected) in cases {
        assert_eq!(check(constraint, version), expected, "{} against {}", constraint, version);
    }
}

#[test]
fn test_caret_and_tilde_ranges() {
    assert!(check("^1.2.3", "1.2.3"));
    assert!(check("^1.2.3", "1.9.9"));
    assert!(!check("^1.2.3", "2.0.0"));
    assert!(!check("^1.2.3", "1.2.2"));

    assert!(check("^0.2.3", "0.2.3"));
    assert!(check("^0.2.3", "0.2.99"));
    assert!(!check("^0.2.3", "0.3.0"));

    assert!(check("~1.2.3", "1.2.3"));
    assert!(check("~1.2.3", "1.2.42"));
    assert!(!check("~1.2.3", "1.3.0"));
    assert!(check("~1", "1.99.99"));
    assert!(!check("~1", "2.0.0"));
}

#[test]
fn test_invalid_constraints() {
    let cases = [
        ">=",
        "=",
        ">= 1.0.0 >=",
        "=<1.2",
        "=>1.2",
        "~>1.5",
        "foo",
        "",
        "   ",
        "1 - 2 - 3",
        "1.0 ||",
        "1.0 || || 2.0",
        "!=2.x",
        ">*",
        "1.2.3.4",
        "x.1",
        "*.5",
        "^x.1",
        "~*.2",
        "^18446744073709551615.0.0",
    ];

    for constraint in cases {
        assert!(
            ConstraintSet::<Version>::parse(constraint).is_err(),
            "{:?} should not parse",
            constraint
        );
    }

    assert_eq!(ConstraintSet::<Version>::parse("").unwrap_err(), ConstraintError::Empty);
}

#[test]
fn test_check_str_propagates_parse_failure() {
    let set: ConstraintSet<Version> = "^1".parse().unwrap();
    assert!(set.check_str("1.x").is_err());
    assert_eq!(set.check_str("v1.4.0"), Ok(true));
}

#[test]
fn test_calver_constraints() {
    let set: ConstraintSet<CalVer> = ConstraintSet::parse("~2023.7 || >=2024.02.01 <2024.03").unwrap();
    assert_eq!(set.check_str("2023.07.01"), Ok(true));
    assert_eq!(set.check_str("2023.07.31-rc.1"), Ok(true));
    assert_eq!(set.check_str("2023.08.01"), Ok(false));
    assert_eq!(set.check_str("2024.2.14"), Ok(true));
    assert_eq!(set.check_str("2024.03.00"), Ok(false));
    assert!(set.check_str("2024.2.14+build").is_err());
}

#[test]
fn test_compare_properties() {
    let v = |s: &str| Version::parse(s).unwrap();

    assert_eq!(compare(&v("1.0.0"), &v("1.0.0-alpha")), Ordering::Greater);
    assert_eq!(compare(&v("1.0.0-9"), &v("1.0.0-alpha")), Ordering::Less);
    assert_eq!(compare(&v("1.0.0+a"), &v("1.0.0+b")), Ordering::Equal);

    let a = v("2.0.0+one");
    let b = v("v2.0.0");
    let c = v("2.0.0+three");
    assert_eq!(compare(&a, &b), Ordering::Equal);
    assert_eq!(compare(&b, &c), Ordering::Equal);
    assert_eq!(compare(&a, &c), Ordering::Equal);

    let bumped = v("1.2.3-beta.1+exp").inc_major();
    assert_eq!(bumped.prerelease(), "");
    assert_eq!(bumped.minor(), 0);
    assert_eq!(bumped.patch(), 0);
}

#[test]
fn test_sets_can_be_shared_across_threads() {
    let set: std::sync::Arc<ConstraintSet<Version>> = std::sync::Arc::new(">=1.0.0 <2.0.0".parse().unwrap());

    let handles: Vec<_> = ["1.0.0", "1.5.0", "2.0.0"]
        .into_iter()
        .map(|version| {
            let set = std::sync::Arc::clone(&set);
            std::thread::spawn(move || set.check_str(version).unwrap())
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, true, false]);
}
