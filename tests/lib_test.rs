//! Library integration tests.

use gistcloak::GistError;

#[test]
fn error_types_are_public() {
    let err = GistError::InvalidPattern {
        pattern: "/(/".into(),
        message: "unclosed group".into(),
    };
    assert!(err.to_string().contains("/(/"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> gistcloak::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use gistcloak::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["gistcloak", "conceal", "-i", "gists.log"]);
    assert!(matches!(cli.command, Some(Commands::Conceal)));
    assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("gists.log")));
}

#[test]
fn fetch_report_feeds_conceal_input() {
    use gistcloak::github::Gist;
    use gistcloak::report::{format_fetch_report, parse_gist_ids, report_header};

    let gists: Vec<Gist> = serde_json::from_value(serde_json::json!([
        {
            "id": "aa11",
            "public": true,
            "description": "first",
            "html_url": "https://gist.github.com/aa11",
            "git_pull_url": "https://gist.github.com/aa11.git",
            "files": { "a.txt": { "filename": "a.txt" } }
        },
        {
            "id": "bb22",
            "public": true,
            "description": null,
            "html_url": "https://gist.github.com/bb22",
            "git_pull_url": "https://gist.github.com/bb22.git",
            "files": {}
        }
    ]))
    .unwrap();

    let mut report = report_header("fetch", chrono::Utc::now());
    report.push_str(&format_fetch_report(&gists));

    let ids: Vec<String> = parse_gist_ids(&report)
        .iter()
        .map(|r| r.id().to_string())
        .collect();
    assert_eq!(ids, vec!["aa11", "bb22"]);
}

#[test]
fn options_resolve_with_defaults() {
    use gistcloak::config::{CommandKind, RawOptions, DEFAULT_THROTTLE};

    let options = RawOptions {
        command: Some(CommandKind::Fetch),
        token: Some("abc".into()),
        ..Default::default()
    }
    .resolve()
    .unwrap();

    assert_eq!(options.throttle, DEFAULT_THROTTLE);
    assert_eq!(options.api_url, "https://api.github.com");
    assert!(options.filters.description.is_any());
}
