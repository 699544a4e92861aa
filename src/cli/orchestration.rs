//! Command workflow logic
//!
//! Keeps the work behind each `dotver` subcommand apart from argument
//! parsing, so it can be driven and tested without clap.

use std::cmp::Ordering;

use crate::config::Config;
use crate::domain::{
    filter_versions, sort_versions, Constraint, TagPattern, Version, VersionBump, VersionList,
};
use crate::error::Result;
use crate::warning::InputWarning;

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Stable sort of the input; `reverse` unset falls back to config
    Sort { reverse: Option<bool> },
    /// Input versions within the constraint, original order
    Filter,
    /// Greatest input version within the constraint
    Latest,
    /// Order of two versions
    Compare { a: String, b: String },
    /// Whether one version is within the constraint
    Check { version: String },
    /// Next version for the given bump
    Bump { bump: VersionBump, version: String },
}

/// Arguments for a workflow run
///
/// Mirrors the CLI arguments as plain values, so the workflow can be called
/// programmatically without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    pub action: Action,

    /// Bounds given on the command line; unset ones fall back to config
    pub bounds: Constraint,

    /// Version entries (tags) for list actions
    pub entries: Vec<String>,

    /// Tag pattern override
    pub pattern: Option<String>,
}

/// What a workflow produced
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Versions(Vec<Version>),
    Ordering(Ordering),
    Matched(bool),
}

/// Result of a workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub output: Output,

    /// False when the action found nothing (no latest version, check failed)
    pub success: bool,

    /// Entries skipped while reading input
    pub warnings: Vec<InputWarning>,
}

/// Versions read from raw entries, with the entries that had to be skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedVersions {
    pub versions: VersionList,
    pub warnings: Vec<InputWarning>,
}

/// Read versions out of raw entries.
///
/// Entries are trimmed and blank ones ignored. Each entry is matched against
/// `pattern` and the extracted token parsed; entries failing either step are
/// reported as warnings instead of aborting.
pub fn collect_versions<I, S>(entries: I, pattern: &TagPattern) -> CollectedVersions
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut versions = Vec::new();
    let mut warnings = Vec::new();

    for entry in entries {
        let entry = entry.as_ref().trim();
        if entry.is_empty() {
            continue;
        }

        let Some(token) = pattern.extract(entry) else {
            warnings.push(InputWarning::TagMismatchPattern {
                tag: entry.to_string(),
                pattern: pattern.pattern.clone(),
            });
            continue;
        };

        match Version::parse(token) {
            Ok(version) => versions.push(version),
            Err(e) => warnings.push(InputWarning::UnparsableVersion {
                input: entry.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    log::debug!(
        "collected {} versions, skipped {} entries",
        versions.len(),
        warnings.len()
    );
    CollectedVersions {
        versions: versions.into(),
        warnings,
    }
}

/// Run one action against the merged configuration.
pub fn run_workflow(args: WorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let constraint = args.bounds.or(&config.constraint);
    let pattern = TagPattern::new(args.pattern.as_deref().unwrap_or(&config.pattern))?;

    let single = |output: Output, success: bool| WorkflowResult {
        output,
        success,
        warnings: Vec::new(),
    };

    match args.action {
        Action::Compare { a, b } => {
            let a = Version::parse(&a)?;
            let b = Version::parse(&b)?;
            Ok(single(Output::Ordering(a.compare(&b)), true))
        }
        Action::Check { version } => {
            let matched = Version::parse(&version)?.matches(Some(&constraint));
            Ok(single(Output::Matched(matched), matched))
        }
        Action::Bump { bump, version } => {
            let bumped = Version::parse(&version)?.bump(&bump);
            Ok(single(Output::Versions(vec![bumped]), true))
        }
        Action::Sort { reverse } => {
            let collected = collect_versions(&args.entries, &pattern);
            let mut versions = collected.versions.into_inner();
            if reverse.unwrap_or(config.output.reverse) {
                versions.sort_by(|a, b| b.compare(a));
            } else {
                sort_versions(&mut versions);
            }
            Ok(WorkflowResult {
                output: Output::Versions(versions),
                success: true,
                warnings: collected.warnings,
            })
        }
        Action::Filter => {
            let collected = collect_versions(&args.entries, &pattern);
            let filtered = filter_versions(collected.versions.as_slice(), Some(&constraint));
            Ok(WorkflowResult {
                output: Output::Versions(filtered),
                success: true,
                warnings: collected.warnings,
            })
        }
        Action::Latest => {
            let collected = collect_versions(&args.entries, &pattern);
            let latest: Vec<Version> = collected
                .versions
                .matching(Some(&constraint))
                .latest()
                .cloned()
                .into_iter()
                .collect();
            let success = !latest.is_empty();
            Ok(WorkflowResult {
                output: Output::Versions(latest),
                success,
                warnings: collected.warnings,
            })
        }
    }
}
