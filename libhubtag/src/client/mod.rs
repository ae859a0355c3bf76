//! HTTP client for the registry content API.
//!
//! This module provides a thin blocking client built on reqwest. It knows how
//! to build the tag listing URL for a repository and how to fetch the raw
//! payload with a single GET request.

use crate::error::{HubtagError, Result};
use crate::repository::{DEFAULT_NAMESPACE, RepositoryId};
use reqwest::blocking::Client as ReqwestClient;
use std::time::Duration;
use url::Url;


/// Default registry serving the content API.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.hub.docker.com";

/// Number of tags requested per listing.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Configuration for the HTTP client.
///
/// # Examples
///
/// ```
/// use libhubtag::client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(60)
///     .with_page_size(100);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
    /// Value of the `page_size` query parameter (default: 30)
    pub page_size: u32,
    /// Namespace for identifiers without one (default: "library")
    pub default_namespace: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            page_size: DEFAULT_PAGE_SIZE,
            default_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::client::ClientConfig;
    ///
    /// let config = ClientConfig::new();
    /// assert_eq!(config.timeout_seconds, 30);
    /// assert_eq!(config.page_size, 30);
    /// assert_eq!(config.default_namespace, "library");
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the page size requested from the registry.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the namespace used for official images.
    pub fn with_default_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.default_namespace = namespace.into();
        self
    }
}

/// Blocking HTTP client for the tag listing endpoint.
#[derive(Debug, Clone)]
pub struct Client {
    /// The underlying HTTP client
    http_client: ReqwestClient,
    /// Base registry URL (e.g., "https://registry.hub.docker.com")
    registry_url: String,
    page_size: u32,
    default_namespace: String,
}

impl Client {
    /// Creates a new client for the specified registry URL with default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::client::Client;
    ///
    /// let client = Client::new("https://registry.hub.docker.com").unwrap();
    /// assert_eq!(client.registry_url(), "https://registry.hub.docker.com");
    /// ```
    pub fn new(registry_url: &str) -> Result<Self> {
        Self::with_config(registry_url, ClientConfig::default())
    }

    /// Creates a new client for the specified registry URL with custom configuration.
    pub fn with_config(registry_url: &str, config: ClientConfig) -> Result<Self> {
        let normalized_url = Self::normalize_url(registry_url)?;

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("hubtag/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HubtagError::transport_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            http_client,
            registry_url: normalized_url,
            page_size: config.page_size,
            default_namespace: config.default_namespace,
        })
    }

    /// Normalizes a registry URL by ensuring it has a scheme and removing trailing slashes.
    fn normalize_url(url: &str) -> Result<String> {
        let url = url.trim();

        if url.is_empty() {
            return Err(HubtagError::validation("Registry URL cannot be empty"));
        }

        let url = if !url.starts_with("http://") && !url.starts_with("https://") {
            format!("https://{}", url)
        } else {
            url.to_string()
        };

        let url = url.trim_end_matches('/');

        Url::parse(url).map_err(|e| {
            HubtagError::validation(format!("Invalid registry URL '{}': {}", url, e))
        })?;

        Ok(url.to_string())
    }

    /// Returns the base registry URL.
    pub fn registry_url(&self) -> &str {
        &self.registry_url
    }

    /// Returns the page size sent with every listing request.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Builds the tag listing URL for a repository.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::client::Client;
    /// use libhubtag::RepositoryId;
    ///
    /// let client = Client::new("https://registry.hub.docker.com").unwrap();
    /// let repo: RepositoryId = "alpine".parse().unwrap();
    /// assert_eq!(
    ///     client.tags_url(&repo),
    ///     "https://registry.hub.docker.com/api/content/v1/repositories/public/library/alpine/tags?page_size=30"
    /// );
    /// ```
    pub fn tags_url(&self, repository: &RepositoryId) -> String {
        format!(
            "{}/api/content/v1/repositories/public/{}/tags?page_size={}",
            self.registry_url,
            repository.qualified_path(&self.default_namespace),
            self.page_size
        )
    }

    /// Fetches the raw tag listing payload for a repository.
    ///
    /// Exactly one GET request is issued; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The registry is unreachable or the body cannot be read (`Transport`)
    /// - The registry answers with a non-success status (`UnexpectedStatus`)
    pub fn fetch_tags_payload(&self, repository: &RepositoryId) -> Result<Vec<u8>> {
        let url = self.tags_url(repository);
        tracing::debug!(%url, "fetching tags");

        let response = self
            .http_client
            .get(&url)
            .send()
            .map_err(|e| Self::translate_reqwest_error(e, &self.registry_url))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "registry rejected request");
            return Err(HubtagError::unexpected_status(status.as_u16(), url));
        }

        let body = response
            .bytes()
            .map_err(|e| HubtagError::transport_with_source("Failed to read tags response", e))?;

        tracing::debug!(bytes = body.len(), "received tags payload");
        Ok(body.to_vec())
    }

    /// Translates a reqwest error into a HubtagError.
    fn translate_reqwest_error(error: reqwest::Error, registry_url: &str) -> HubtagError {
        if error.is_timeout() {
            HubtagError::transport_with_source(
                format!("Request to {} timed out", registry_url),
                error,
            )
        } else if error.is_connect() {
            HubtagError::transport_with_source(
                format!("Failed to connect to registry at {}", registry_url),
                error,
            )
        } else {
            HubtagError::transport_with_source(
                format!("Network error communicating with {}", registry_url),
                error,
            )
        }
    }
}
