//! HTTP client for the portfolio REST API.

use std::time::Duration;

use serde_json::Value;

use crate::state::{Category, Project};
use crate::util::join_url;

type Result<T> = super::Result<T>;

/// Default endpoint listing projects.
pub const DEFAULT_PROJECTS_PATH: &str = "/projects";
/// Default endpoint listing project categories.
pub const DEFAULT_CATEGORIES_PATH: &str = "/project-categories";

/// Read-only client for the project and category endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Underlying HTTP client with timeout applied.
    client: reqwest::Client,
    /// API base URL without trailing slash.
    base_url: String,
    /// Path of the projects endpoint.
    projects_path: String,
    /// Path of the categories endpoint.
    categories_path: String,
}

impl ApiClient {
    /// What: Create a client for the API rooted at `base_url`.
    ///
    /// Inputs:
    /// - `base_url`: API root, e.g. `https://api.example.com/v1`
    /// - `timeout`: Per-request timeout
    ///
    /// Output:
    /// - `Ok(ApiClient)` using the default endpoint paths.
    ///
    /// # Errors
    /// - Returns `Err` when the base URL is empty or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err("API base URL is empty".into());
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {e}"))?;
        Ok(Self {
            client,
            base_url: base.to_string(),
            projects_path: DEFAULT_PROJECTS_PATH.to_string(),
            categories_path: DEFAULT_CATEGORIES_PATH.to_string(),
        })
    }

    /// Override the endpoint paths.
    #[must_use]
    pub fn with_paths(mut self, projects_path: &str, categories_path: &str) -> Self {
        self.projects_path = projects_path.to_string();
        self.categories_path = categories_path.to_string();
        self
    }

    /// GET `path` and parse the body as JSON.
    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = join_url(&self.base_url, path);
        tracing::debug!(url = %url, "fetching");
        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| format!("Network error for {url}: {e}"))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("{url} returned HTTP {status}").into());
        }
        let body = resp
            .text()
            .await
            .map_err(|e| format!("Failed to read response from {url}: {e}"))?;
        serde_json::from_str(&body).map_err(|e| format!("Invalid JSON from {url}: {e}").into())
    }

    /// What: Fetch all projects.
    ///
    /// Output:
    /// - `Ok(projects)` in API order.
    ///
    /// # Errors
    /// - Returns `Err` on network failure, non-success status, invalid JSON or an
    ///   unrecognized payload shape.
    pub async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let body = self.get_json(&self.projects_path).await?;
        let projects = super::parse::projects_from_body(&body)?;
        tracing::info!(count = projects.len(), "loaded projects");
        Ok(projects)
    }

    /// What: Fetch all categories.
    ///
    /// Output:
    /// - `Ok(categories)` in API order.
    ///
    /// # Errors
    /// - Same conditions as [`ApiClient::fetch_projects`].
    pub async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let body = self.get_json(&self.categories_path).await?;
        let categories = super::parse::categories_from_body(&body)?;
        tracing::info!(count = categories.len(), "loaded categories");
        Ok(categories)
    }

    /// What: Fetch projects and categories concurrently.
    ///
    /// Output:
    /// - `Ok((projects, categories))`.
    ///
    /// # Errors
    /// - Returns the first error of either request.
    pub async fn fetch_all(&self) -> Result<(Vec<Project>, Vec<Category>)> {
        tokio::try_join!(self.fetch_projects(), self.fetch_categories())
    }
}
