//! Range constraints over versions.
//!
//! A constraint has up to one lower bound (`gt` or `gte`) and one upper bound
//! (`lt` or `lte`). When both forms of a bound are set the strict one wins.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::version::Version;

/// Open or closed version range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Constraint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<Version>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<Version>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<Version>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<Version>,
}

impl Constraint {
    /// A constraint with no bounds, matching every version
    pub fn any() -> Self {
        Constraint::default()
    }

    pub fn gt(mut self, version: Version) -> Self {
        self.gt = Some(version);
        self
    }

    pub fn gte(mut self, version: Version) -> Self {
        self.gte = Some(version);
        self
    }

    pub fn lt(mut self, version: Version) -> Self {
        self.lt = Some(version);
        self
    }

    pub fn lte(mut self, version: Version) -> Self {
        self.lte = Some(version);
        self
    }

    /// True if no bound is set
    pub fn is_unbounded(&self) -> bool {
        self.gt.is_none() && self.gte.is_none() && self.lt.is_none() && self.lte.is_none()
    }

    /// True if `gt` or `gte` is set
    pub fn has_lower(&self) -> bool {
        self.gt.is_some() || self.gte.is_some()
    }

    /// True if `lt` or `lte` is set
    pub fn has_upper(&self) -> bool {
        self.lt.is_some() || self.lte.is_some()
    }

    /// Layer this constraint over `fallback`, one side at a time.
    ///
    /// A side (lower or upper) set here replaces both fields of that side in
    /// `fallback`; an unset side is taken from `fallback` whole. Used to
    /// layer command-line bounds over configured ones.
    pub fn or(self, fallback: &Constraint) -> Self {
        let has_upper = self.has_upper();
        let (gt, gte) = if self.has_lower() {
            (self.gt, self.gte)
        } else {
            (fallback.gt.clone(), fallback.gte.clone())
        };
        let (lt, lte) = if has_upper {
            (self.lt, self.lte)
        } else {
            (fallback.lt.clone(), fallback.lte.clone())
        };
        Constraint { gt, gte, lt, lte }
    }

    /// Test a version against both bounds
    pub fn matches(&self, version: &Version) -> bool {
        let lower = match (&self.gt, &self.gte) {
            (Some(gt), _) => version > gt,
            (None, Some(gte)) => version >= gte,
            (None, None) => true,
        };
        let upper = match (&self.lt, &self.lte) {
            (Some(lt), _) => version < lt,
            (None, Some(lte)) => version <= lte,
            (None, None) => true,
        };
        lower && upper
    }
}

/// Test an optional version against an optional constraint.
///
/// A missing constraint matches anything, including a missing version. A
/// missing version never matches a constraint that is present, even an
/// unbounded one.
pub fn matches(version: Option<&Version>, constraint: Option<&Constraint>) -> bool {
    match (version, constraint) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some(version), Some(constraint)) => constraint.matches(version),
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower = match (&self.gt, &self.gte) {
            (Some(v), _) => Some(format!(">{}", v)),
            (None, Some(v)) => Some(format!(">={}", v)),
            (None, None) => None,
        };
        let upper = match (&self.lt, &self.lte) {
            (Some(v), _) => Some(format!("<{}", v)),
            (None, Some(v)) => Some(format!("<={}", v)),
            (None, None) => None,
        };

        match (lower, upper) {
            (Some(l), Some(u)) => write!(f, "{}, {}", l, u),
            (Some(bound), None) | (None, Some(bound)) => write!(f, "{}", bound),
            (None, None) => write!(f, "*"),
        }
    }
}
