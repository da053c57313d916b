//! GitHub gist API types and client.
//!
//! - [`types`] - Gist records, references and request bodies
//! - [`client`] - The [`GistApi`] trait and its HTTP implementation

pub mod client;
pub mod types;

pub use client::{GistApi, GitHubClient, DEFAULT_API_URL, DEFAULT_PAGE_SIZE};
pub use types::{ConcealedPair, Gist, GistFile, GistRef, NewGist, NewGistFile};
