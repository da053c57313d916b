//! Content transfer through the gist git repositories.
//!
//! Clones the source and target repositories into the workspace, copies
//! every file except the source's `.git` directory over the target's
//! placeholders, then commits and pushes the target.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{GistError, Result};
use crate::github::Gist;

use super::ContentTransfer;

/// Commit message used for the copied content.
pub const COMMIT_MESSAGE: &str = "Copy gist content";

const TOKEN_ENV: &str = "GISTCLOAK_GIT_TOKEN";

// An empty helper clears any configured helpers so only the token is offered.
const RESET_HELPERS: &str = "credential.helper=";

// Reads the token from the child environment so it never appears in argv.
const CREDENTIAL_HELPER: &str = "credential.helper=!f() { test \"$1\" = get && \
     echo username=x-access-token && echo \"password=${GISTCLOAK_GIT_TOKEN}\"; }; f";

const FALLBACK_NAME: &str = "user.name=gistcloak";
const FALLBACK_EMAIL: &str = "user.email=gistcloak@users.noreply.github.com";

/// Transfers gist content with the `git` command-line tool.
pub struct GitTransfer {
    token: String,
}

impl GitTransfer {
    /// Create a transfer that authenticates clones and pushes with a
    /// GitHub token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    fn command(&self, cwd: Option<&Path>, config: &[&str], args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.env("GIT_TERMINAL_PROMPT", "0")
            .env(TOKEN_ENV, &self.token)
            .args(["-c", RESET_HELPERS, "-c", CREDENTIAL_HELPER]);
        for entry in config {
            cmd.args(["-c", entry]);
        }
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn git(&self, cwd: Option<&Path>, config: &[&str], args: &[&str]) -> Result<String> {
        let subcommand = args.first().copied().unwrap_or_default();

        debug!("git {}", args.join(" "));
        let output = self
            .command(cwd, config, args)
            .output()
            .map_err(|e| GistError::Git {
                command: subcommand.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(GistError::Git {
                command: subcommand.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn has_identity(&self, dir: &Path) -> bool {
        self.git(Some(dir), &[], &["config", "--get", "user.email"])
            .map(|email| !email.trim().is_empty())
            .unwrap_or(false)
    }

    fn copy_and_push(
        &self,
        source: &Gist,
        target: &Gist,
        source_dir: &Path,
        target_dir: &Path,
    ) -> Result<()> {
        self.git(
            None,
            &[],
            &[
                "clone",
                "--quiet",
                &source.git_pull_url,
                &source_dir.to_string_lossy(),
            ],
        )?;
        self.git(
            None,
            &[],
            &[
                "clone",
                "--quiet",
                target.push_url(),
                &target_dir.to_string_lossy(),
            ],
        )?;

        let copied = copy_tree(source_dir, target_dir)?;
        debug!("Copied {} files from {} to {}", copied, source.id, target.id);

        let identity: &[&str] = if self.has_identity(target_dir) {
            &[]
        } else {
            &[FALLBACK_NAME, FALLBACK_EMAIL]
        };

        self.git(Some(target_dir), &[], &["add", "--all"])?;
        self.git(
            Some(target_dir),
            identity,
            &["commit", "--quiet", "--allow-empty", "-m", COMMIT_MESSAGE],
        )?;
        self.git(Some(target_dir), &[], &["push", "--quiet", "origin", "HEAD"])?;

        Ok(())
    }
}

impl ContentTransfer for GitTransfer {
    fn transfer(&self, source: &Gist, target: &Gist, workspace: &Path) -> Result<()> {
        let source_dir = workspace.join("source");
        let target_dir = workspace.join("target");

        let result = self.copy_and_push(source, target, &source_dir, &target_dir);
        let cleanup = remove_dir_if_exists(&source_dir).and(remove_dir_if_exists(&target_dir));

        result?;
        cleanup?;
        Ok(())
    }
}

/// Copy every file and directory under `from` into `to`, overwriting
/// existing files. The top-level `.git` directory is skipped.
///
/// Returns the number of files copied.
pub fn copy_tree(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        if entry.file_name() == ".git" {
            continue;
        }
        copied += copy_entry(&entry.path(), &to.join(entry.file_name()))?;
    }
    Ok(copied)
}

// Symlinks are never followed, on either side.
fn copy_entry(from: &Path, to: &Path) -> Result<usize> {
    let file_type = std::fs::symlink_metadata(from)?.file_type();
    if file_type.is_symlink() {
        return copy_symlink(from, to);
    }

    remove_symlink_if_exists(to)?;
    if file_type.is_dir() {
        std::fs::create_dir_all(to)?;
        let mut copied = 0;
        for entry in std::fs::read_dir(from)? {
            let entry = entry?;
            copied += copy_entry(&entry.path(), &to.join(entry.file_name()))?;
        }
        Ok(copied)
    } else {
        std::fs::copy(from, to)?;
        Ok(1)
    }
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> Result<usize> {
    let link = std::fs::read_link(from)?;
    match std::fs::symlink_metadata(to) {
        Ok(meta) if meta.is_dir() => std::fs::remove_dir_all(to)?,
        Ok(_) => std::fs::remove_file(to)?,
        Err(_) => {}
    }
    std::os::unix::fs::symlink(link, to)?;
    Ok(1)
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, _to: &Path) -> Result<usize> {
    tracing::warn!("Skipping symlink {}", from.display());
    Ok(0)
}

fn remove_symlink_if_exists(path: &Path) -> std::io::Result<()> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => std::fs::remove_file(path),
        _ => Ok(()),
    }
}

fn remove_dir_if_exists(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        std::fs::remove_dir_all(path)?;
    }
    Ok(())
}
