/// Latest tag lookup
pub mod latest;

/// Version command handlers
pub mod version;
