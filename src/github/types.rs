//! Gist data model.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one file inside a gist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GistFile {
    /// File name as reported by the API.
    #[serde(default)]
    pub filename: Option<String>,
    /// MIME type.
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
    /// Detected language.
    #[serde(default)]
    pub language: Option<String>,
    /// Raw content URL.
    #[serde(default)]
    pub raw_url: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
}

/// A fully populated gist summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gist {
    /// Gist identifier.
    pub id: String,
    /// Whether the gist is public.
    pub public: bool,
    /// Free-form description, may be null.
    #[serde(default)]
    pub description: Option<String>,
    /// Files keyed by file name.
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
    /// Browsable URL.
    pub html_url: String,
    /// Clonable repository URL.
    pub git_pull_url: String,
    /// Pushable repository URL.
    #[serde(default)]
    pub git_push_url: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Gist {
    /// The description, or an empty string when the gist has none.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// File names in the gist, sorted.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// URL to push new content to.
    pub fn push_url(&self) -> &str {
        self.git_push_url.as_deref().unwrap_or(&self.git_pull_url)
    }
}

/// A reference to a gist that may still need a lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum GistRef {
    /// Only the identifier is known (e.g. read from an input log).
    Partial { id: String },
    /// All metadata is known.
    Full(Gist),
}

impl GistRef {
    /// Create a partial reference.
    pub fn partial(id: impl Into<String>) -> Self {
        Self::Partial { id: id.into() }
    }

    /// The gist identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Partial { id } => id,
            Self::Full(gist) => &gist.id,
        }
    }

    /// Whether this reference needs a lookup before use.
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial { .. })
    }
}

impl From<Gist> for GistRef {
    fn from(gist: Gist) -> Self {
        Self::Full(gist)
    }
}

/// File content for a gist being created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGistFile {
    pub content: String,
}

/// Request body for creating a gist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGist {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub public: bool,
    pub files: BTreeMap<String, NewGistFile>,
}

/// One completed concealment: the deleted public source and its secret replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcealedPair {
    pub source: Gist,
    pub target: Gist,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIST_JSON: &str = r#"{
        "id": "aa5a315d61ae9438b18d",
        "public": true,
        "description": "Hello World Examples",
        "html_url": "https://gist.github.com/aa5a315d61ae9438b18d",
        "git_pull_url": "https://gist.github.com/aa5a315d61ae9438b18d.git",
        "git_push_url": "https://gist.github.com/aa5a315d61ae9438b18d.git",
        "created_at": "2010-04-14T02:15:15Z",
        "updated_at": "2011-06-20T11:34:15Z",
        "comments": 0,
        "files": {
            "hello_world.rb": {
                "filename": "hello_world.rb",
                "type": "application/x-ruby",
                "language": "Ruby",
                "raw_url": "https://gist.githubusercontent.com/raw/hello_world.rb",
                "size": 167
            },
            "README.md": {
                "filename": "README.md",
                "type": "text/markdown",
                "size": 12
            }
        }
    }"#;

    #[test]
    fn deserializes_api_gist() {
        let gist: Gist = serde_json::from_str(GIST_JSON).unwrap();
        assert_eq!(gist.id, "aa5a315d61ae9438b18d");
        assert!(gist.public);
        assert_eq!(gist.description_text(), "Hello World Examples");
        assert_eq!(gist.files["hello_world.rb"].size, Some(167));
        assert_eq!(
            gist.files["hello_world.rb"].mime_type.as_deref(),
            Some("application/x-ruby")
        );
        assert!(gist.created_at.is_some());
    }

    #[test]
    fn filenames_are_sorted() {
        let gist: Gist = serde_json::from_str(GIST_JSON).unwrap();
        let names: Vec<&str> = gist.filenames().collect();
        assert_eq!(names, vec!["README.md", "hello_world.rb"]);
    }

    #[test]
    fn null_description_reads_as_empty() {
        let json = r#"{
            "id": "x",
            "public": false,
            "description": null,
            "html_url": "https://gist.github.com/x",
            "git_pull_url": "https://gist.github.com/x.git"
        }"#;
        let gist: Gist = serde_json::from_str(json).unwrap();
        assert_eq!(gist.description, None);
        assert_eq!(gist.description_text(), "");
        assert!(gist.files.is_empty());
        assert_eq!(gist.push_url(), "https://gist.github.com/x.git");
    }

    #[test]
    fn gist_ref_reports_id_and_kind() {
        let partial = GistRef::partial("abc123");
        assert_eq!(partial.id(), "abc123");
        assert!(partial.is_partial());

        let gist: Gist = serde_json::from_str(GIST_JSON).unwrap();
        let full = GistRef::from(gist);
        assert_eq!(full.id(), "aa5a315d61ae9438b18d");
        assert!(!full.is_partial());
    }

    #[test]
    fn new_gist_omits_missing_description() {
        let mut files = BTreeMap::new();
        files.insert(
            "a.txt".to_string(),
            NewGistFile {
                content: "x".to_string(),
            },
        );
        let body = NewGist {
            description: None,
            public: false,
            files,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["public"], false);
        assert_eq!(json["files"]["a.txt"]["content"], "x");
    }
}
