//! Input log parsing.
//!
//! An input log is a whitespace-separated list of gist ids. Lines starting
//! with `#` are comments, so a fetch report can be fed straight back in.

use std::path::Path;

use crate::error::{GistError, Result};
use crate::github::GistRef;

/// Parse log text into partial gist references, in order.
///
/// # Example
///
/// ```
/// use gistcloak::report::parse_gist_ids;
///
/// let refs = parse_gist_ids("# comment\nabc123\ndef456\n");
/// let ids: Vec<&str> = refs.iter().map(|r| r.id()).collect();
/// assert_eq!(ids, vec!["abc123", "def456"]);
/// ```
pub fn parse_gist_ids(text: &str) -> Vec<GistRef> {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(GistRef::partial)
        .collect()
}

/// Read an input log from disk.
pub fn read_input_log(path: &Path) -> Result<Vec<GistRef>> {
    let text = std::fs::read_to_string(path).map_err(|e| GistError::InputLog {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(parse_gist_ids(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ids(text: &str) -> Vec<String> {
        parse_gist_ids(text)
            .into_iter()
            .map(|r| r.id().to_string())
            .collect()
    }

    #[test]
    fn comments_are_stripped() {
        let refs = parse_gist_ids("# comment\nabc123\ndef456\n");
        assert_eq!(refs.len(), 2);
        assert!(refs.iter().all(GistRef::is_partial));
        assert_eq!(ids("# comment\nabc123\ndef456\n"), vec!["abc123", "def456"]);
    }

    #[test]
    fn ids_may_share_a_line() {
        assert_eq!(ids("a b\tc\n\n  d  "), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn indented_comments_are_stripped() {
        assert_eq!(ids("   # URL: https://x\nabc"), vec!["abc"]);
    }

    #[test]
    fn empty_log_has_no_ids() {
        assert!(parse_gist_ids("").is_empty());
        assert!(parse_gist_ids("# only a comment\n\n").is_empty());
    }

    #[test]
    fn windows_line_endings() {
        assert_eq!(ids("# c\r\nabc\r\ndef\r\n"), vec!["abc", "def"]);
    }

    #[test]
    fn reads_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.log");
        std::fs::write(&path, "abc123\n# URL: x\n").unwrap();

        let refs = read_input_log(&path).unwrap();
        assert_eq!(refs, vec![GistRef::partial("abc123")]);
    }

    #[test]
    fn missing_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.log");

        let err = read_input_log(&path).unwrap_err();
        assert!(matches!(err, GistError::InputLog { .. }));
        assert!(err.to_string().contains("missing.log"));
    }
}
