use std::fmt;

/// Non-fatal issues found while reading version input.
/// The offending entry is skipped and the warning reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum InputWarning {
    /// Entry could not be parsed as a version
    UnparsableVersion { input: String, reason: String },
    /// Tag doesn't match the configured pattern
    TagMismatchPattern { tag: String, pattern: String },
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::UnparsableVersion { input, reason } => {
                write!(f, "Skipping '{}': {}", input, reason)
            }
            InputWarning::TagMismatchPattern { tag, pattern } => {
                write!(f, "Skipping tag '{}': does not match pattern '{}'", tag, pattern)
            }
        }
    }
}
