//! Replacing public gists with secret copies.
//!
//! Visibility cannot be changed on an existing gist, so each source gist
//! is concealed by creating a new secret gist with placeholder files,
//! moving the real content through a [`ContentTransfer`], and deleting the
//! source. Gists are processed one at a time and the first failure stops
//! the batch.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::github::{ConcealedPair, Gist, GistApi, GistRef, NewGist, NewGistFile};
use crate::transfer::ContentTransfer;

use super::throttle::Throttle;

/// Content given to every file of a freshly created secret gist.
pub const PLACEHOLDER_CONTENT: &str = "gistcloak placeholder";

/// Progress notifications from [`Concealer::conceal_all`].
#[derive(Debug)]
pub enum ConcealEvent<'a> {
    /// Work on a gist is starting.
    Started { id: &'a str, index: usize, total: usize },
    /// A gist was concealed and its source deleted.
    Concealed(&'a ConcealedPair),
    /// The secret copy was created but copying content or deleting the
    /// source failed. Both gists still exist.
    Incomplete(&'a ConcealedPair),
}

/// Runs the conceal sequence over a batch of gists.
pub struct Concealer<'a> {
    api: &'a dyn GistApi,
    transfer: &'a dyn ContentTransfer,
    throttle: Throttle,
}

impl<'a> Concealer<'a> {
    /// Create a concealer.
    pub fn new(api: &'a dyn GistApi, transfer: &'a dyn ContentTransfer, throttle: Throttle) -> Self {
        Self {
            api,
            transfer,
            throttle,
        }
    }

    /// Conceal every gist in order.
    ///
    /// Each completed pair is pushed onto `results` as soon as its source
    /// has been deleted, so on failure `results` holds exactly the gists
    /// that were already replaced. A scratch workspace is created for the
    /// batch and removed on every exit path.
    pub fn conceal_all<F>(
        &self,
        refs: Vec<GistRef>,
        results: &mut Vec<ConcealedPair>,
        mut on_event: F,
    ) -> Result<()>
    where
        F: FnMut(ConcealEvent<'_>),
    {
        if refs.is_empty() {
            return Ok(());
        }

        let workspace = tempfile::Builder::new()
            .prefix("gistcloak-")
            .tempdir()?;
        debug!("Using workspace {}", workspace.path().display());

        let total = refs.len();
        for (index, gist_ref) in refs.into_iter().enumerate() {
            on_event(ConcealEvent::Started {
                id: gist_ref.id(),
                index,
                total,
            });
            let source = self.resolve(gist_ref)?;
            let pair = self.create_secret(source)?;
            if let Err(e) = self.finish(&pair, workspace.path()) {
                warn!(
                    "Secret gist {} ({}) was created for {} but not finished",
                    pair.target.id, pair.target.html_url, pair.source.id
                );
                on_event(ConcealEvent::Incomplete(&pair));
                return Err(e);
            }
            on_event(ConcealEvent::Concealed(&pair));
            results.push(pair);
        }

        Ok(())
    }

    fn create_secret(&self, source: Gist) -> Result<ConcealedPair> {
        if !source.public {
            warn!("Gist {} is already secret; concealing anyway", source.id);
        }

        let target = self.api.create_gist(&placeholder_gist(&source))?;
        debug!("Created secret gist {} for {}", target.id, source.id);
        Ok(ConcealedPair { source, target })
    }

    /// Copy the content into the secret gist, then delete the source.
    fn finish(&self, pair: &ConcealedPair, workspace: &Path) -> Result<()> {
        self.transfer
            .transfer(&pair.source, &pair.target, workspace)?;

        self.api.delete_gist(&pair.source.id)?;
        info!("Concealed {} -> {}", pair.source.id, pair.target.id);
        self.throttle.pause();
        Ok(())
    }

    fn resolve(&self, gist_ref: GistRef) -> Result<Gist> {
        match gist_ref {
            GistRef::Full(gist) => Ok(gist),
            GistRef::Partial { id } => {
                debug!("Resolving gist {}", id);
                let gist = self.api.get_gist(&id)?;
                self.throttle.pause();
                Ok(gist)
            }
        }
    }
}

/// Build the create request for a source gist: secret, same description,
/// same file names, placeholder content.
pub fn placeholder_gist(source: &Gist) -> NewGist {
    let files: BTreeMap<String, NewGistFile> = source
        .filenames()
        .map(|name| {
            (
                name.to_string(),
                NewGistFile {
                    content: PLACEHOLDER_CONTENT.to_string(),
                },
            )
        })
        .collect();

    NewGist {
        description: source.description.clone(),
        public: false,
        files,
    }
}
