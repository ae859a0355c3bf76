//! hubtag - Latest Tag Finder Library
//!
//! hubtag asks a container registry's content API for the tags of a
//! repository and picks the latest one by version order.
//!
//! # Quick Start
//!
//! ```no_run
//! use libhubtag::{Hubtag, RepositoryId, Selector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let hubtag = Hubtag::connect("https://registry.hub.docker.com")?;
//!     let repo: RepositoryId = "jupyter/base-notebook".parse()?;
//!
//!     let latest = hubtag.latest_tag(&repo, &Selector::default())?;
//!     println!("{}", latest);
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! 1. [`client`] builds the listing URL and performs one GET request
//! 2. [`decode`] extracts tag names from the JSON envelope
//! 3. [`select`] filters by version shape and user patterns, then orders
//!    the survivors with [`version`] keys and picks the greatest
//!
//! [`export`] writes the unfiltered list to disk.

#![warn(clippy::all)]

/// Returns the libhubtag crate version.
///
/// # Examples
///
/// ```
/// let version = libhubtag::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

mod hubtag;
pub use hubtag::{Hubtag, HubtagBuilder};

pub use crate::config::Config;
pub use crate::error::{HubtagError, Result};
pub use crate::repository::RepositoryId;
pub use crate::select::{SelectionConfig, Selector};
pub use crate::version::VersionKey;

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod export;
pub mod repository;
pub mod select;
pub mod version;
