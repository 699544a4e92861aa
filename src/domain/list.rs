use crate::domain::constraint::{self, Constraint};
use crate::domain::version::Version;

/// Sort versions in place, oldest first.
///
/// The sort is stable: versions that differ only in their extension or
/// original text keep their relative order.
pub fn sort_versions(versions: &mut [Version]) {
    versions.sort_by(|a, b| a.compare(b));
}

/// Versions matching `constraint`, in their original order.
pub fn filter_versions(versions: &[Version], constraint: Option<&Constraint>) -> Vec<Version> {
    let filtered: Vec<Version> = versions
        .iter()
        .filter(|v| constraint::matches(Some(*v), constraint))
        .cloned()
        .collect();
    log::debug!(
        "{} of {} versions match {}",
        filtered.len(),
        versions.len(),
        constraint.map_or_else(|| "*".to_string(), |c| c.to_string())
    );
    filtered
}

/// Ordered collection of versions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionList(Vec<Version>);

impl VersionList {
    pub fn new(versions: Vec<Version>) -> Self {
        VersionList(versions)
    }

    /// Stable sort, oldest first
    pub fn sort(&mut self) {
        sort_versions(&mut self.0);
    }

    /// New list holding only the versions matching `constraint`
    pub fn matching(&self, constraint: Option<&Constraint>) -> VersionList {
        VersionList(filter_versions(&self.0, constraint))
    }

    /// Greatest version in the list; the last one wins among equals
    pub fn latest(&self) -> Option<&Version> {
        self.0.iter().max()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Version> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Version] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Version> {
        self.0
    }
}

impl From<Vec<Version>> for VersionList {
    fn from(versions: Vec<Version>) -> Self {
        VersionList(versions)
    }
}

impl FromIterator<Version> for VersionList {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        VersionList(iter.into_iter().collect())
    }
}

impl IntoIterator for VersionList {
    type Item = Version;
    type IntoIter = std::vec::IntoIter<Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VersionList {
    type Item = &'a Version;
    type IntoIter = std::slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
