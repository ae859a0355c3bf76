//! Writing the raw tag list to disk.

use crate::error::{HubtagError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;


/// File written in the working directory when the full list is requested.
pub const DEFAULT_TAGS_FILE: &str = "tags.txt";

/// Writes tags one per line, in the given order, replacing any existing file.
///
/// # Examples
///
/// ```no_run
/// use libhubtag::export::{DEFAULT_TAGS_FILE, write_tag_list};
///
/// let tags = vec!["latest".to_string(), "1.0.0".to_string()];
/// write_tag_list(DEFAULT_TAGS_FILE, &tags).unwrap();
/// ```
pub fn write_tag_list<P: AsRef<Path>>(path: P, tags: &[String]) -> Result<()> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let file = File::create(path)
        .map_err(|e| HubtagError::io("Failed to create tag list file", path_str.clone(), e))?;
    let mut writer = BufWriter::new(file);

    for tag in tags {
        writeln!(writer, "{}", tag)
            .map_err(|e| HubtagError::io("Failed to write tag list", path_str.clone(), e))?;
    }
    writer
        .flush()
        .map_err(|e| HubtagError::io("Failed to write tag list", path_str.clone(), e))?;

    tracing::debug!(path = %path_str, count = tags.len(), "wrote tag list");
    Ok(())
}
