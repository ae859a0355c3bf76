//! Version keys and the tag ordering.
//!
//! A tag's version key is the first `major.minor.patch` triple found anywhere
//! in its text, with an optional leading `v`. Tags are ordered numerically by
//! that key and then lexically by their full text.
//!
//! When either side of a comparison has no key, the pair falls back to plain
//! lexical order. Mixing the two branches is not transitive in general
//! (`"latest"` between numerically ordered versions is the classic case), so
//! callers that need a strict total order should only compare keyed tags.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;


// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static VERSION_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"v?([0-9]+)\.([0-9]+)\.([0-9]+)").expect("version key pattern is valid")
});

/// Parsed `(major, minor, patch)` triple.
///
/// Ordering compares major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionKey {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extracts the version key from a tag.
    ///
    /// Returns `None` when the tag contains no triple. A component too large
    /// for a `u64` saturates to `u64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::version::VersionKey;
    ///
    /// assert_eq!(VersionKey::parse("v1.10.2-alpine"), Some(VersionKey::new(1, 10, 2)));
    /// assert_eq!(VersionKey::parse("python3.11-slim"), None);
    /// ```
    pub fn parse(tag: &str) -> Option<Self> {
        let captures = VERSION_KEY.captures(tag)?;
        // Captures are ASCII digits, so parsing can only fail on overflow
        let component = |i: usize| {
            captures
                .get(i)
                .map_or(0, |m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        };

        Some(Self {
            major: component(1),
            minor: component(2),
            patch: component(3),
        })
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Compares two tags whose keys have already been extracted.
pub fn compare_keyed(
    a: &str,
    a_key: Option<&VersionKey>,
    b: &str,
    b_key: Option<&VersionKey>,
) -> Ordering {
    match (a_key, b_key) {
        (Some(ka), Some(kb)) => ka.cmp(kb).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

/// Compares two tags by version key, breaking ties lexically.
///
/// # Examples
///
/// ```
/// use libhubtag::version::version_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(version_cmp("1.2.3", "1.10.0"), Ordering::Less);
/// assert_eq!(version_cmp("2.0.0", "1.99.99"), Ordering::Greater);
/// ```
pub fn version_cmp(a: &str, b: &str) -> Ordering {
    compare_keyed(
        a,
        VersionKey::parse(a).as_ref(),
        b,
        VersionKey::parse(b).as_ref(),
    )
}

/// Returns `true` when `a` orders strictly before `b`.
pub fn version_less(a: &str, b: &str) -> bool {
    version_cmp(a, b) == Ordering::Less
}
