//! Report formatting and output.
//!
//! A fetch report has one block per gist:
//!
//! ```text
//! <id>
//! # URL: <html url>
//! # Description: <description>
//! # Files: <a>, <b>
//! ```
//!
//! A conceal report has `<source id> -> <target id>` followed by the same
//! detail lines for the target. Blocks are separated by blank lines.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use tempfile::NamedTempFile;

use crate::error::Result;
use crate::github::{ConcealedPair, Gist};

/// Format the detail lines for a gist.
fn details(gist: &Gist) -> String {
    // Keep multi-line descriptions on one comment line.
    let description = gist
        .description_text()
        .lines()
        .collect::<Vec<_>>()
        .join(" ");
    let files = gist.filenames().collect::<Vec<_>>().join(", ");
    format!(
        "# URL: {}\n# Description: {}\n# Files: {}\n",
        gist.html_url, description, files
    )
}

/// Format one fetched gist.
pub fn format_gist(gist: &Gist) -> String {
    format!("{}\n{}", gist.id, details(gist))
}

/// Format one concealed pair.
pub fn format_pair(pair: &ConcealedPair) -> String {
    format!(
        "{} -> {}\n{}",
        pair.source.id,
        pair.target.id,
        details(&pair.target)
    )
}

/// Format a pair whose secret copy exists but whose source was not
/// deleted. Every line is a comment so the report stays a valid input log.
pub fn format_incomplete_pair(pair: &ConcealedPair) -> String {
    format!(
        "# Incomplete: {} -> {}\n# URL: {}\n",
        pair.source.id, pair.target.id, pair.target.html_url
    )
}

/// Format the blocks for a list of fetched gists.
pub fn format_fetch_report(gists: &[Gist]) -> String {
    gists
        .iter()
        .map(format_gist)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the blocks for a list of concealed pairs.
pub fn format_conceal_report(pairs: &[ConcealedPair]) -> String {
    pairs
        .iter()
        .map(format_pair)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Comment line identifying the command and time a report was made.
pub fn report_header(command: &str, at: DateTime<Utc>) -> String {
    format!(
        "# gistcloak {} {}\n\n",
        command,
        at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// Write a report to `output`, or to stdout when no path is given.
///
/// Files are replaced atomically: the report is written to a temporary
/// file beside the target and then renamed over it.
pub fn write_report(contents: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => write_atomic(path, contents),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
