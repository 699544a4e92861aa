//! User interface module - terminal output for the dotver binary.
//!
//! - `formatter` - Rendering of versions and diagnostics

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_input_warning, display_status, display_versions, format_version,
    format_versions,
};
