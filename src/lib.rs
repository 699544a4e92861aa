//! Dotted version numbers: parsing, ordering and range matching.
//!
//! A [`Version`] is `major.minor.patch` plus a free-form extension. Ordering
//! and equality only look at the numeric triple.
//!
//! ```
//! use dotver::{filter_versions, sort_versions, Constraint, Version};
//!
//! let mut versions: Vec<Version> = ["1.1.1", "v1.0.1", "1.1.0-rc1"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! sort_versions(&mut versions);
//! assert_eq!(versions[0].to_string(), "v1.0.1");
//!
//! let newer = Constraint::any().gte(Version::new(1, 1, 0));
//! assert_eq!(filter_versions(&versions, Some(&newer)).len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod warning;

pub use domain::{
    compare, filter_versions, matches, parse, sort_versions, Constraint, TagPattern, Version,
    VersionBump, VersionList,
};
pub use error::{DotverError, Result, VersionError};
