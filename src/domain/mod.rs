//! Domain logic - version values, ordering and range matching, free of any I/O

pub mod constraint;
pub mod list;
pub mod parser;
pub mod tag;
pub mod version;

pub use constraint::{matches, Constraint};
pub use list::{filter_versions, sort_versions, VersionList};
pub use parser::parse;
pub use tag::TagPattern;
pub use version::{compare, Version, VersionBump};
