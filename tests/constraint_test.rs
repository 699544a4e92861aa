use dotver::{matches, Constraint, Version};

fn v(s: &str) -> Version {
    Version::parse(s).expect("valid version")
}

/// Build a constraint from `(bound, version)` pairs
fn c(bounds: &[(&str, &str)]) -> Constraint {
    bounds
        .iter()
        .fold(Constraint::any(), |acc, (bound, version)| match *bound {
            "gt" => acc.gt(v(version)),
            "gte" => acc.gte(v(version)),
            "lt" => acc.lt(v(version)),
            "lte" => acc.lte(v(version)),
            other => panic!("unknown bound {}", other),
        })
}

#[test]
fn test_missing_constraint_matches() {
    assert!(v("1.0.0").matches(None));
    assert!(matches(Some(&v("1.0.0")), None));
}

#[test]
fn test_missing_version_never_matches() {
    assert!(!matches(None, Some(&Constraint::any())));
    assert!(!matches(None, Some(&c(&[("gte", "0.0.0")]))));
}

#[test]
fn test_single_bounds() {
    let cases = [
        ("gt", "0.1.0", true),
        ("gt", "1.0.0", false),
        ("gt", "1.1.0", false),
        ("gte", "0.1.0", true),
        ("gte", "1.0.0", true),
        ("gte", "1.1.0", false),
        ("lt", "0.1.0", false),
        ("lt", "1.0.0", false),
        ("lt", "1.1.0", true),
        ("lte", "0.1.0", false),
        ("lte", "1.0.0", true),
        ("lte", "1.1.0", true),
    ];

    let version = v("1.0.0");
    for (bound, bound_version, expected) in cases {
        let constraint = c(&[(bound, bound_version)]);
        assert_eq!(
            version.matches(Some(&constraint)),
            expected,
            "1.0.0 against {}",
            constraint
        );
    }
}

#[test]
fn test_lower_and_upper_bounds() {
    let cases = [
        (("gt", "0.1.0"), ("lt", "0.1.0"), false),
        (("gt", "0.1.0"), ("lt", "1.0.0"), false),
        (("gt", "0.1.0"), ("lt", "1.1.0"), true),
        (("gt", "1.0.0"), ("lt", "0.1.0"), false),
        (("gt", "1.0.0"), ("lt", "1.0.0"), false),
        (("gt", "1.0.0"), ("lt", "1.1.0"), false),
        (("gt", "1.1.0"), ("lt", "0.1.0"), false),
        (("gt", "1.1.0"), ("lt", "1.0.0"), false),
        (("gt", "1.1.0"), ("lt", "1.1.0"), false),
        (("gt", "0.1.0"), ("lte", "0.1.0"), false),
        (("gt", "0.1.0"), ("lte", "1.0.0"), true),
        (("gt", "0.1.0"), ("lte", "1.1.0"), true),
        (("gt", "1.0.0"), ("lte", "0.1.0"), false),
        (("gt", "1.0.0"), ("lte", "1.0.0"), false),
        (("gt", "1.0.0"), ("lte", "1.1.0"), false),
        (("gt", "1.1.0"), ("lte", "0.1.0"), false),
        (("gt", "1.1.0"), ("lte", "1.0.0"), false),
        (("gt", "1.1.0"), ("lte", "1.1.0"), false),
        (("gte", "0.1.0"), ("lt", "0.1.0"), false),
        (("gte", "0.1.0"), ("lt", "1.0.0"), false),
        (("gte", "0.1.0"), ("lt", "1.1.0"), true),
        (("gte", "1.0.0"), ("lt", "0.1.0"), false),
        (("gte", "1.0.0"), ("lt", "1.0.0"), false),
        (("gte", "1.0.0"), ("lt", "1.1.0"), true),
        (("gte", "1.1.0"), ("lt", "0.1.0"), false),
        (("gte", "1.1.0"), ("lt", "1.0.0"), false),
        (("gte", "1.1.0"), ("lt", "1.1.0"), false),
        (("gte", "0.1.0"), ("lte", "0.1.0"), false),
        (("gte", "0.1.0"), ("lte", "1.0.0"), true),
        (("gte", "0.1.0"), ("lte", "1.1.0"), true),
        (("gte", "1.0.0"), ("lte", "0.1.0"), false),
        (("gte", "1.0.0"), ("lte", "1.0.0"), true),
        (("gte", "1.0.0"), ("lte", "1.1.0"), true),
        (("gte", "1.1.0"), ("lte", "0.1.0"), false),
        (("gte", "1.1.0"), ("lte", "1.0.0"), false),
        (("gte", "1.1.0"), ("lte", "1.1.0"), false),
    ];

    let version = v("1.0.0");
    for (lower, upper, expected) in cases {
        let constraint = c(&[lower, upper]);
        assert_eq!(
            constraint.matches(&version),
            expected,
            "1.0.0 against {}",
            constraint
        );
    }
}

#[test]
fn test_known_range_results() {
    let version = v("1.0.0");
    assert!(c(&[("gt", "0.1.0"), ("lte", "1.0.0")]).matches(&version));
    assert!(c(&[("gte", "1.0.0"), ("lt", "1.1.0")]).matches(&version));
    assert!(c(&[("gte", "1.0.0"), ("lte", "1.0.0")]).matches(&version));
    assert!(!c(&[("gt", "0.1.0"), ("lt", "1.0.0")]).matches(&version));
    assert!(!c(&[("gt", "1.1.0"), ("lt", "0.1.0")]).matches(&version));
}

#[test]
fn test_strict_bound_shadows_inclusive_bound() {
    let version = v("1.0.0");
    let cases = [
        (c(&[("gt", "1.0.0"), ("gte", "1.0.0")]), false),
        (c(&[("gt", "0.1.0"), ("gte", "1.1.0")]), true),
        (c(&[("gt", "1.1.0"), ("gte", "0.1.0")]), false),
        (c(&[("lt", "1.0.0"), ("lte", "1.0.0")]), false),
        (c(&[("lt", "0.1.0"), ("lte", "1.1.0")]), false),
        (c(&[("lt", "1.1.0"), ("lte", "0.1.0")]), true),
    ];

    for (constraint, expected) in cases {
        assert_eq!(constraint.matches(&version), expected, "{:?}", constraint);
    }
}
