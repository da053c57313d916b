//! Gist content transfer.
//!
//! Concealing a gist creates the replacement through the API with
//! placeholder files only; the real bytes travel through a
//! [`ContentTransfer`]. [`GitTransfer`] does this by cloning both gist
//! repositories and pushing the copied files.

pub mod git;

pub use git::GitTransfer;

use std::path::Path;

use crate::error::Result;
use crate::github::Gist;

/// Copies all file content from one gist to another and publishes it.
pub trait ContentTransfer {
    /// Copy `source`'s files over `target`'s and publish the result.
    ///
    /// `workspace` is a scratch directory owned by the caller; anything
    /// created inside it should be removed before returning.
    fn transfer(&self, source: &Gist, target: &Gist, workspace: &Path) -> Result<()>;
}
