use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::constraint::{self, Constraint};
use crate::domain::parser;
use crate::error::VersionError;

/// Dotted version number with an optional free-form extension.
///
/// Ordering and equality only look at `major.minor.patch`: `1.2.0a`,
/// `v1.2` and `1.2.0` are all equal. The extension and original text are
/// carried along for display.
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Trailing content after the numeric triple (`-rc.1`, `a`, `+build`)
    pub extension: String,
    /// Input this version was parsed from, empty when built in code
    pub text: String,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            ..Version::default()
        }
    }

    /// Same version with the given extension attached
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Parse a version from text (e.g., "v1.2.3" or "1.2-beta")
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        parser::parse(text)
    }

    /// Compare with another version on `major.minor.patch`, most significant first.
    ///
    /// Extensions such as pre-release tags or build metadata are ignored.
    pub fn compare(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
    }

    /// True if this version sorts strictly before `other`
    pub fn less_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Test this version against an optional constraint.
    ///
    /// A missing constraint matches everything.
    pub fn matches(&self, constraint: Option<&Constraint>) -> bool {
        constraint::matches(Some(self), constraint)
    }

    /// `major.minor.patch` followed by the extension, ignoring the original text
    pub fn semantic_string(&self) -> String {
        format!(
            "{}.{}.{}{}",
            self.major, self.minor, self.patch, self.extension
        )
    }

    /// Bump version according to bump type.
    ///
    /// The result is a fresh version with no extension and no original text.
    pub fn bump(&self, bump_type: &VersionBump) -> Self {
        match bump_type {
            VersionBump::Major => Version::new(self.major.saturating_add(1), 0, 0),
            VersionBump::Minor => Version::new(self.major, self.minor.saturating_add(1), 0),
            VersionBump::Patch => {
                Version::new(self.major, self.minor, self.patch.saturating_add(1))
            }
        }
    }

    /// Convert to a [`semver::Version`] if the extension is a valid semver suffix
    pub fn to_semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.semantic_string()).ok()
    }
}

/// Compare two optional versions.
///
/// If either side is missing the versions are reported as equal. Call sites
/// holding optional versions rely on this to treat "unknown" as a no-op.
pub fn compare(a: Option<&Version>, b: Option<&Version>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b),
        _ => Ordering::Equal,
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.major, self.minor, self.patch).hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.semantic_string())
        } else {
            write!(f, "{}", self.text)
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parser::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl From<&semver::Version> for Version {
    fn from(v: &semver::Version) -> Self {
        let mut extension = String::new();
        if !v.pre.is_empty() {
            extension.push('-');
            extension.push_str(v.pre.as_str());
        }
        if !v.build.is_empty() {
            extension.push('+');
            extension.push_str(v.build.as_str());
        }
        Version::new(v.major, v.minor, v.patch).with_extension(extension)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl FromStr for VersionBump {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            other => Err(format!("unknown bump type '{}'", other)),
        }
    }
}
