//! Release listing and download client using reqwest.

use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use tracing::{debug, info};
use url::Url;

use crate::domain::{AppError, ReleaseInfo};
use crate::ports::ReleaseSource;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// HTTP client for GitHub-style release endpoints.
#[derive(Clone)]
pub struct HttpReleaseClient {
    token: Option<String>,
    client: Client,
}

impl std::fmt::Debug for HttpReleaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpReleaseClient")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpReleaseClient {
    /// Create a client; `token` is sent as a bearer token when present.
    pub fn new(token: Option<String>) -> Result<Self, AppError> {
        // Downloads run to completion, however long they take.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| AppError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { token, client })
    }

    /// Create a client authenticated with `GITHUB_TOKEN` when it is set.
    pub fn from_env() -> Result<Self, AppError> {
        let token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.trim().is_empty());
        Self::new(token)
    }

    fn get(&self, url: &str, accept: &str) -> Result<Response, AppError> {
        let mut request = self
            .client
            .get(url)
            .header(USER_AGENT, concat!("rezgo/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, accept);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response =
            request.send().map_err(|e| AppError::Http(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.as_u16() == 403 || status.as_u16() == 429 {
            Err(AppError::Http(format!("Rate limited ({}) by {}", status.as_u16(), url)))
        } else {
            let body = response.text().unwrap_or_default();
            Err(AppError::Http(format!("{} returned {}: {}", url, status.as_u16(), body.trim())))
        }
    }
}

impl ReleaseSource for HttpReleaseClient {
    fn latest_release(&self, listing_url: &Url) -> Result<ReleaseInfo, AppError> {
        let response = self.get(listing_url.as_str(), GITHUB_JSON)?;
        let release: ReleaseInfo = response
            .json()
            .map_err(|e| AppError::Http(format!("Failed to parse release metadata: {}", e)))?;
        info!(release = release.label(), "resolved latest release");
        Ok(release)
    }

    fn download(&self, url: &str, dest: &Path) -> Result<u64, AppError> {
        let mut response = self.get(url, "application/octet-stream, */*")?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(dest)?;
        let bytes = response
            .copy_to(&mut file)
            .map_err(|e| AppError::Http(format!("Download of {} interrupted: {}", url, e)))?;
        debug!(url, dest = %dest.display(), bytes, "downloaded");
        Ok(bytes)
    }
}
