//! Latest tag selection.
//!
//! Tags go through three filters before being ordered:
//!
//! 1. the shape filter keeps tags containing a `major.minor.patch` triple;
//! 2. the optional inclusion pattern keeps matching tags;
//! 3. the optional exclusion pattern drops matching tags.
//!
//! Survivors are ordered with [`crate::version::compare_keyed`] and the
//! greatest one is the latest tag.

use crate::error::{HubtagError, Result};
use crate::version::{VersionKey, compare_keyed};
use regex::Regex;
use std::sync::LazyLock;

#[cfg(test)]
mod tests;

static VERSION_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+").expect("version shape pattern is valid")
});

/// User-facing selection options, built once at startup.
///
/// Empty patterns are treated the same as absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Inclusion pattern (regular expression)
    pub filter: Option<String>,
    /// Exclusion pattern (regular expression)
    pub exclude: Option<String>,
}

impl SelectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter<S: Into<String>>(mut self, pattern: S) -> Self {
        self.filter = Some(pattern.into());
        self
    }

    pub fn with_exclude<S: Into<String>>(mut self, pattern: S) -> Self {
        self.exclude = Some(pattern.into());
        self
    }
}

/// Filters and orders tags with precompiled patterns.
///
/// # Examples
///
/// ```
/// use libhubtag::select::{SelectionConfig, Selector};
///
/// let selector = Selector::new(&SelectionConfig::new().with_exclude("rc")).unwrap();
/// let tags = vec!["1.0.0".to_string(), "1.1.0-rc1".to_string(), "1.1.0".to_string()];
/// assert_eq!(selector.select_latest(&tags).unwrap(), "1.1.0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Selector {
    filter: Option<Regex>,
    exclude: Option<Regex>,
}

impl Selector {
    /// Compiles the configured patterns.
    ///
    /// # Errors
    ///
    /// Returns [`HubtagError::InvalidPattern`] if either pattern is not a
    /// valid regular expression.
    pub fn new(config: &SelectionConfig) -> Result<Self> {
        Ok(Self {
            filter: compile(config.filter.as_deref())?,
            exclude: compile(config.exclude.as_deref())?,
        })
    }

    /// Returns `true` if the tag contains a `major.minor.patch` triple.
    pub fn is_version_shaped(tag: &str) -> bool {
        VERSION_SHAPE.is_match(tag)
    }

    /// Returns `true` if the tag passes all three filters.
    pub fn accepts(&self, tag: &str) -> bool {
        if !Self::is_version_shaped(tag) {
            return false;
        }
        if let Some(filter) = &self.filter
            && !filter.is_match(tag)
        {
            return false;
        }
        if let Some(exclude) = &self.exclude
            && exclude.is_match(tag)
        {
            return false;
        }
        true
    }

    /// Applies the filters, keeping the input order.
    pub fn filter<'a>(&self, tags: &'a [String]) -> Vec<&'a str> {
        tags.iter()
            .map(String::as_str)
            .filter(|tag| self.accepts(tag))
            .collect()
    }

    /// Applies the filters and sorts the survivors in ascending version order.
    pub fn rank<'a>(&self, tags: &'a [String]) -> Vec<&'a str> {
        let mut keyed = self.keyed_candidates(tags);
        keyed.sort_by(|(a, ka), (b, kb)| compare_keyed(a, ka.as_ref(), b, kb.as_ref()));
        keyed.into_iter().map(|(tag, _)| tag).collect()
    }

    /// Returns the latest tag among the candidates.
    ///
    /// # Errors
    ///
    /// Returns [`HubtagError::NoCandidates`] if no tag survives filtering.
    pub fn select_latest(&self, tags: &[String]) -> Result<String> {
        self.keyed_candidates(tags)
            .into_iter()
            .max_by(|(a, ka), (b, kb)| compare_keyed(a, ka.as_ref(), b, kb.as_ref()))
            .map(|(tag, _)| tag.to_string())
            .ok_or_else(|| HubtagError::no_candidates(tags.len()))
    }

    fn keyed_candidates<'a>(&self, tags: &'a [String]) -> Vec<(&'a str, Option<VersionKey>)> {
        let candidates = self.filter(tags);
        tracing::debug!(
            total = tags.len(),
            candidates = candidates.len(),
            "filtered tags"
        );

        candidates
            .into_iter()
            .map(|tag| {
                let key = VersionKey::parse(tag);
                if key.is_none() {
                    tracing::warn!(tag, "tag has no usable version key, ordering it lexically");
                }
                (tag, key)
            })
            .collect()
    }
}

fn compile(pattern: Option<&str>) -> Result<Option<Regex>> {
    match pattern {
        Some(p) if !p.is_empty() => Regex::new(p)
            .map(Some)
            .map_err(|e| HubtagError::invalid_pattern(p, e)),
        _ => Ok(None),
    }
}
