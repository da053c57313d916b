//! Gist API access.
//!
//! [`GistApi`] is the seam the lister and concealer work against;
//! [`GitHubClient`] implements it over the GitHub REST API.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use crate::error::{GistError, Result};

use super::types::{Gist, NewGist};

/// Public GitHub API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Gists requested per list page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

const API_VERSION: &str = "2022-11-28";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Operations on the authenticated user's gists.
pub trait GistApi {
    /// Fetch one page (1-based) of the user's gists.
    fn list_page(&self, page: u32, per_page: u32) -> Result<Vec<Gist>>;

    /// Fetch a single gist by id.
    fn get_gist(&self, id: &str) -> Result<Gist>;

    /// Create a gist.
    fn create_gist(&self, gist: &NewGist) -> Result<Gist>;

    /// Delete a gist by id.
    fn delete_gist(&self, id: &str) -> Result<()>;
}

/// Blocking GitHub REST client for gists.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GitHubClient {
    /// Create a client for an API root such as [`DEFAULT_API_URL`] or a
    /// GitHub Enterprise `/api/v3` endpoint. Requests time out after 30
    /// seconds.
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("gistcloak/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// The API root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    fn send(&self, method: Method, url: &str, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);

        Err(GistError::Api {
            method: method.to_string(),
            url: url.to_string(),
            status: status.as_u16(),
            message,
        })
    }
}

impl GistApi for GitHubClient {
    fn list_page(&self, page: u32, per_page: u32) -> Result<Vec<Gist>> {
        let url = self.url(&format!("/gists?per_page={}&page={}", per_page, page));
        let builder = self.request(Method::GET, &url);
        let gists = self.send(Method::GET, &url, builder)?.json()?;
        Ok(gists)
    }

    fn get_gist(&self, id: &str) -> Result<Gist> {
        let url = self.url(&format!("/gists/{}", id));
        let builder = self.request(Method::GET, &url);
        let gist = self.send(Method::GET, &url, builder)?.json()?;
        Ok(gist)
    }

    fn create_gist(&self, gist: &NewGist) -> Result<Gist> {
        let url = self.url("/gists");
        let builder = self.request(Method::POST, &url).json(gist);
        let created = self.send(Method::POST, &url, builder)?.json()?;
        Ok(created)
    }

    fn delete_gist(&self, id: &str) -> Result<()> {
        let url = self.url(&format!("/gists/{}", id));
        let builder = self.request(Method::DELETE, &url);
        self.send(Method::DELETE, &url, builder)?;
        Ok(())
    }
}
