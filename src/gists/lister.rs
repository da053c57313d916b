//! Paginated gist listing with filtering.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::GistFilters;
use crate::error::Result;
use crate::github::{Gist, GistApi, DEFAULT_PAGE_SIZE};

use super::throttle::Throttle;

/// Walks every page of the user's gists and keeps the matching ones.
///
/// A gist matches when it is public, its description matches the
/// description filter, and at least one file name matches the filename
/// filter. Paging stops at the first page shorter than the page size.
pub struct GistLister<'a> {
    api: &'a dyn GistApi,
    filters: &'a GistFilters,
    throttle: Throttle,
    page_size: u32,
}

impl<'a> GistLister<'a> {
    /// Create a lister with the default page size.
    pub fn new(api: &'a dyn GistApi, filters: &'a GistFilters, throttle: Throttle) -> Self {
        Self {
            api,
            filters,
            throttle,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// The page size in use.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Whether a gist passes the visibility and filter checks.
    pub fn accepts(&self, gist: &Gist) -> bool {
        gist.public
            && self.filters.description.matches(gist.description_text())
            && self.filters.filename.matches_any(gist.filenames())
    }

    /// List every matching gist in discovery order.
    pub fn list(&self) -> Result<Vec<Gist>> {
        self.list_with(|_| {})
    }

    /// List every matching gist, calling `on_match` as each one is found.
    pub fn list_with<F>(&self, mut on_match: F) -> Result<Vec<Gist>>
    where
        F: FnMut(&Gist),
    {
        let mut matched = Vec::new();
        let mut seen = HashSet::new();
        let mut page = 1;

        loop {
            let gists = self.api.list_page(page, self.page_size)?;
            let count = gists.len();
            debug!("Page {} returned {} gists", page, count);

            for gist in gists {
                if !self.accepts(&gist) || !seen.insert(gist.id.clone()) {
                    continue;
                }
                info!("Matched gist {}", gist.id);
                on_match(&gist);
                matched.push(gist);
            }

            if count < self.page_size as usize {
                break;
            }
            self.throttle.pause();
            page += 1;
        }

        Ok(matched)
    }
}
