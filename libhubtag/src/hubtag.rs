//! High-level API for the hubtag library.
//!
//! This module wires the client, the decoder and the selector together. It is
//! the recommended entry point for most users.
//!
//! # Examples
//!
//! ```no_run
//! use libhubtag::{Hubtag, RepositoryId, SelectionConfig, Selector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let hubtag = Hubtag::connect("https://registry.hub.docker.com")?;
//!     let repo: RepositoryId = "alpine".parse()?;
//!
//!     let selector = Selector::new(&SelectionConfig::new().with_exclude("rc"))?;
//!     println!("{}", hubtag.latest_tag(&repo, &selector)?);
//!     Ok(())
//! }
//! ```

use crate::client::Client;
use crate::config::Config;
use crate::decode::decode_tags;
use crate::error::{HubtagError, Result};
use crate::repository::RepositoryId;
use crate::select::Selector;
use std::path::PathBuf;

/// High-level interface for looking up tags.
pub struct Hubtag {
    client: Client,
}

impl Hubtag {
    /// Connect to a registry with default settings.
    ///
    /// No request is made until tags are listed.
    pub fn connect(registry_url: &str) -> Result<Self> {
        Self::builder().registry_url(registry_url).build()
    }

    /// Create a builder for advanced configuration.
    pub fn builder() -> HubtagBuilder {
        HubtagBuilder::new()
    }

    /// Lists tags for a repository in the order the registry returned them.
    pub fn list_tags(&self, repository: &RepositoryId) -> Result<Vec<String>> {
        let payload = self.client.fetch_tags_payload(repository)?;
        decode_tags(&payload)
    }

    /// Lists tags and selects the latest one.
    pub fn latest_tag(&self, repository: &RepositoryId, selector: &Selector) -> Result<String> {
        let tags = self.list_tags(repository)?;
        selector.select_latest(&tags)
    }

    /// URL that [`Hubtag::list_tags`] will query for this repository.
    pub fn tags_url(&self, repository: &RepositoryId) -> String {
        self.client.tags_url(repository)
    }

    /// Get the registry URL.
    pub fn registry_url(&self) -> &str {
        self.client.registry_url()
    }
}

/// Builder for creating a `Hubtag` instance with custom configuration.
///
/// An explicit [`HubtagBuilder::registry_url`] wins over the URL in the
/// configuration.
///
/// # Examples
///
/// ```no_run
/// use libhubtag::Hubtag;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let hubtag = Hubtag::builder()
///         .with_config_file("./hubtag.yaml")
///         .registry_url("http://localhost:5000")
///         .build()?;
///     Ok(())
/// }
/// ```
#[derive(Default)]
pub struct HubtagBuilder {
    registry_url: Option<String>,
    config: Option<Config>,
    config_path: Option<PathBuf>,
}

impl HubtagBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registry URL.
    pub fn registry_url(mut self, url: &str) -> Self {
        self.registry_url = Some(url.to_string());
        self
    }

    /// Load configuration from a YAML file when building.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Set configuration directly.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the `Hubtag` instance.
    pub fn build(self) -> Result<Hubtag> {
        let config = match (self.config, self.config_path) {
            (Some(config), _) => config,
            (None, Some(path)) => Config::load(Some(path.as_path()))?,
            (None, None) => Config::default(),
        };

        let registry_url = self
            .registry_url
            .unwrap_or_else(|| config.registry.url.clone());
        if registry_url.trim().is_empty() {
            return Err(HubtagError::validation("Registry URL is required"));
        }

        let client = Client::with_config(&registry_url, config.client_config())?;
        Ok(Hubtag { client })
    }
}
