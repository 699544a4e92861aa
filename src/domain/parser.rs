//! Scanner turning version text into a [`Version`].
//!
//! The input is read left to right through four sections (major, minor,
//! patch, extension). Digits accumulate while in a numeric section; the first
//! non-digit commits the section and decides where scanning continues:
//!
//! - `.` moves to the next section and requires the closed section to be non-empty
//! - anything else starts the extension and becomes its first character
//!
//! Everything after that is copied into the extension verbatim.

use crate::domain::version::Version;
use crate::error::VersionError;

/// The section currently being scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Major,
    Minor,
    Patch,
    Extension,
}

impl Section {
    /// Section entered after a `.` closes this one
    fn next(self) -> Section {
        match self {
            Section::Major => Section::Minor,
            Section::Minor => Section::Patch,
            Section::Patch | Section::Extension => Section::Extension,
        }
    }

    fn is_numeric(self) -> bool {
        !matches!(self, Section::Extension)
    }
}

struct Scanner<'a> {
    input: &'a str,
    section: Section,
    buf: String,
    version: Version,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input,
            section: Section::Major,
            buf: String::new(),
            version: Version {
                text: input.to_string(),
                ..Version::default()
            },
        }
    }

    fn invalid(&self) -> VersionError {
        VersionError::invalid(self.input)
    }

    /// Finalize the accumulated characters into the current section's field.
    fn commit(&mut self) -> Result<(), VersionError> {
        if self.buf.is_empty() {
            log::debug!(
                "empty {:?} section in version {:?}",
                self.section,
                self.input
            );
            return Err(self.invalid());
        }

        let chars = std::mem::take(&mut self.buf);
        log::trace!("commit {:?} = {:?}", self.section, chars);

        if self.section == Section::Extension {
            self.version.extension = chars;
            return Ok(());
        }

        // Digits only by construction; overflow is the one way this fails.
        let n = chars.parse::<u64>().map_err(|_| self.invalid())?;
        match self.section {
            Section::Major => self.version.major = n,
            Section::Minor => self.version.minor = n,
            Section::Patch => self.version.patch = n,
            Section::Extension => unreachable!("extension committed above"),
        }
        Ok(())
    }

    fn step(&mut self, c: char) -> Result<(), VersionError> {
        if !self.section.is_numeric() || c.is_ascii_digit() {
            self.buf.push(c);
            return Ok(());
        }

        self.commit()?;
        if c == '.' {
            self.section = self.section.next();
        } else {
            self.section = Section::Extension;
            self.buf.push(c);
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Version, VersionError> {
        if !self.buf.is_empty() {
            self.commit()?;
        }
        Ok(self.version)
    }
}

/// Parse a version from text such as `1.2.3`, `v2.31` or `v1-alpha2`.
///
/// Missing numeric sections default to 0 and the original input is kept as
/// the version's text. Fails with [`VersionError::InvalidVersion`] on empty
/// input or when a numeric section closes without any digits.
pub fn parse(input: &str) -> Result<Version, VersionError> {
    if input.is_empty() {
        log::debug!("refusing to parse empty version");
        return Err(VersionError::invalid(input));
    }

    let mut scanner = Scanner::new(input);
    let body = input
        .strip_prefix(|c: char| c == 'v' || c == 'V')
        .unwrap_or(input);

    for c in body.chars() {
        scanner.step(c)?;
    }
    scanner.finish()
}
