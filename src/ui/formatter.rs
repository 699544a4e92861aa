//! Formatting functions for CLI output.
//!
//! Results go to stdout; status, warnings and errors go to stderr so that
//! command output can be piped.

use console::style;

use crate::config::OutputFormat;
use crate::domain::Version;
use crate::error::Result;
use crate::warning::InputWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display an input warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_input_warning(warning: &InputWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render a single version in the requested format.
pub fn format_version(version: &Version, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => version.to_string(),
        OutputFormat::Semantic => version.semantic_string(),
        OutputFormat::Json => serde_json::to_string(version)?,
    })
}

/// Render a list of versions, one per line, or as a JSON array.
pub fn format_versions(versions: &[Version], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(versions)?),
        _ => {
            let lines = versions
                .iter()
                .map(|v| format_version(v, format))
                .collect::<Result<Vec<_>>>()?;
            Ok(lines.join("\n"))
        }
    }
}

/// Print versions to stdout.
pub fn display_versions(versions: &[Version], format: OutputFormat) -> Result<()> {
    let rendered = format_versions(versions, format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}
