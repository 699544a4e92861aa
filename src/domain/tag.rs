use regex::Regex;

use crate::domain::version::Version;
use crate::error::{DotverError, Result};

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
    regex: Regex,
}

impl TagPattern {
    /// Create a new tag pattern.
    ///
    /// The pattern must contain exactly one `{version}` placeholder.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches(PLACEHOLDER).count() != 1 {
            return Err(DotverError::tag(format!(
                "pattern '{}' must contain exactly one {} placeholder",
                pattern, PLACEHOLDER
            )));
        }

        // Escape everything, then let the placeholder capture the version token
        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(&regex::escape(PLACEHOLDER), "(.+)");
        let regex = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| DotverError::tag(format!("invalid pattern '{}': {}", pattern, e)))?;

        Ok(TagPattern { pattern, regex })
    }

    /// Format a version according to pattern.
    /// Example: pattern="release-{version}", version=1.2.3 -> "release-1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace(PLACEHOLDER, &version.semantic_string())
    }

    /// The version token inside `tag`, or `None` if the tag doesn't fit the pattern
    pub fn extract<'t>(&self, tag: &'t str) -> Option<&'t str> {
        self.regex
            .captures(tag)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Check if a tag fits this pattern
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }
}
