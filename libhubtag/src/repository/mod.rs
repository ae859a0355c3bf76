//! Repository identifiers.
//!
//! A repository is named either `name` (an official image, which lives in the
//! default namespace) or `namespace/name`.

use crate::error::{HubtagError, Result};
use std::fmt;
use std::str::FromStr;


/// Namespace used for identifiers without a `/`.
pub const DEFAULT_NAMESPACE: &str = "library";

/// A parsed repository identifier such as `alpine` or `jupyter/base-notebook`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    namespace: Option<String>,
    name: String,
}

impl FromStr for RepositoryId {
    type Err = HubtagError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(HubtagError::validation(
                "Repository identifier cannot be empty",
            ));
        }

        // Everything after the first separator is kept as-is
        Ok(match s.split_once('/') {
            Some((namespace, name)) => Self {
                namespace: Some(namespace.to_string()),
                name: name.to_string(),
            },
            None => Self {
                namespace: None,
                name: s.to_string(),
            },
        })
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}/{}", namespace, self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl RepositoryId {
    /// Returns the explicit namespace, if the identifier had one.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the repository name (the part after the namespace).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` when no namespace was given.
    pub fn is_official(&self) -> bool {
        self.namespace.is_none()
    }

    /// Returns `namespace/name`, filling in `default_namespace` when the
    /// identifier has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::RepositoryId;
    ///
    /// let repo: RepositoryId = "alpine".parse().unwrap();
    /// assert_eq!(repo.qualified_path("library"), "library/alpine");
    ///
    /// let repo: RepositoryId = "jupyter/base-notebook".parse().unwrap();
    /// assert_eq!(repo.qualified_path("library"), "jupyter/base-notebook");
    /// ```
    pub fn qualified_path(&self, default_namespace: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}/{}", namespace, self.name),
            None => format!("{}/{}", default_namespace, self.name),
        }
    }
}
