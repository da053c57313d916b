//! End-to-end conceal runs against a mock API and local git repositories.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn run_git(dir: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Create a bare repo whose single commit holds `files`.
fn create_bare_repo(parent: &Path, name: &str, files: &[(&str, &str)]) -> PathBuf {
    let bare = parent.join(format!("{name}.git"));
    let work = parent.join(format!("{name}-work"));
    fs::create_dir_all(&work).unwrap();

    run_git(
        parent,
        &["init", "--bare", "--initial-branch=main", &bare.to_string_lossy()],
    );
    run_git(parent, &["clone", &bare.to_string_lossy(), &work.to_string_lossy()]);
    run_git(&work, &["config", "user.name", "Test"]);
    run_git(&work, &["config", "user.email", "test@test.com"]);
    for (path, content) in files {
        fs::write(work.join(path), content).unwrap();
    }
    run_git(&work, &["add", "--all"]);
    run_git(&work, &["commit", "-m", "Initial commit"]);
    run_git(&work, &["push", "origin", "HEAD:main"]);

    bare
}

fn gist_json(id: &str, public: bool, repo: &Path, files: &[&str]) -> serde_json::Value {
    let files: serde_json::Map<String, serde_json::Value> = files
        .iter()
        .map(|f| (f.to_string(), json!({ "filename": f })))
        .collect();
    json!({
        "id": id,
        "public": public,
        "description": "build output",
        "html_url": format!("https://gist.github.com/{}", id),
        "git_pull_url": repo.to_string_lossy(),
        "git_push_url": repo.to_string_lossy(),
        "files": files
    })
}

#[test]
fn conceal_copies_content_and_deletes_original() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let source = create_bare_repo(
        temp.path(),
        "source",
        &[("output-1.txt", "real output\n"), ("notes.md", "# notes\n")],
    );
    let target = create_bare_repo(
        temp.path(),
        "target",
        &[
            ("output-1.txt", "gistcloak placeholder"),
            ("notes.md", "gistcloak placeholder"),
        ],
    );

    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/gists");
        then.status(200).json_body(json!([gist_json(
            "pub1",
            true,
            &source,
            &["output-1.txt", "notes.md"]
        )]));
    });
    let create = server.mock(|when, then| {
        when.method(POST).path("/gists").json_body(json!({
            "description": "build output",
            "public": false,
            "files": {
                "notes.md": { "content": "gistcloak placeholder" },
                "output-1.txt": { "content": "gistcloak placeholder" }
            }
        }));
        then.status(201).json_body(gist_json(
            "sec1",
            false,
            &target,
            &["output-1.txt", "notes.md"],
        ));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/gists/pub1");
        then.status(204);
    });

    let output = temp.path().join("concealed.log");
    let mut cmd = Command::new(cargo_bin("gistcloak"));
    cmd.env_remove("GITHUB_API_URL")
        .env("GITHUB_TOKEN", "abc")
        .args(["--github-api-url", &server.base_url()])
        .args(["--github-throttle", "0"])
        .args(["--gist-filename-match", "^output-"])
        .arg("--output")
        .arg(&output)
        .arg("conceal");
    cmd.assert().success();

    list.assert();
    create.assert();
    delete.assert();

    let verify = temp.path().join("verify");
    run_git(
        temp.path(),
        &["clone", &target.to_string_lossy(), &verify.to_string_lossy()],
    );
    assert_eq!(fs::read_to_string(verify.join("output-1.txt"))?, "real output\n");
    assert_eq!(fs::read_to_string(verify.join("notes.md"))?, "# notes\n");

    let report = fs::read_to_string(&output)?;
    assert!(report.contains("pub1 -> sec1\n"));
    assert!(report.contains("# Files: notes.md, output-1.txt\n"));
    Ok(())
}

#[test]
fn failed_transfer_keeps_the_public_original() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let source = create_bare_repo(temp.path(), "source", &[("a.txt", "real\n")]);
    let missing = temp.path().join("missing.git");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gists/pub1");
        then.status(200)
            .json_body(gist_json("pub1", true, &source, &["a.txt"]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/gists");
        then.status(201)
            .json_body(gist_json("sec1", false, &missing, &["a.txt"]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/gists/pub1");
        then.status(204);
    });

    let input = temp.path().join("input.log");
    fs::write(&input, "pub1\n")?;
    let output = temp.path().join("concealed.log");

    let mut cmd = Command::new(cargo_bin("gistcloak"));
    cmd.env_remove("GITHUB_API_URL")
        .env("GITHUB_TOKEN", "abc")
        .args(["--github-api-url", &server.base_url()])
        .args(["--github-throttle", "0"])
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("conceal");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("git clone failed"))
        .stderr(predicates::str::contains("Secret gist sec1"));

    delete.assert_calls(0);
    let report = fs::read_to_string(&output)?;
    assert!(report.contains("# Incomplete: pub1 -> sec1\n"));
    Ok(())
}
