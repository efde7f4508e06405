//! Type definitions for plans, modes, filters and outcome tallies.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Non-mutating preview of a destructive operation.
///
/// A plan is recomputed on every call and never persisted. The candidate
/// population is re-enumerated and the random subset re-drawn each time, so
/// two plans over an unchanged population agree on `total` and `to_remove`
/// but may list different preview targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Number of candidate units in the population at evaluation time
    pub total: usize,

    /// Number of units selected for removal: `floor(total * strength / 100)`
    pub to_remove: usize,

    /// Human-readable descriptions of a bounded prefix of the selection
    pub targets_preview: Vec<String>,
}

/// Unit granularity for content operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    /// Whole lines, terminators included
    Lines,

    /// Individual characters (Unicode scalar values)
    Chars,
}

/// Restricts folder candidates by file extension.
///
/// The filter is normalized at construction: extensions are lowercased,
/// dot-prefixed, deduplicated and sorted. [`ExtensionFilter::All`] is the
/// unrestricted sentinel.
///
/// # Examples
///
/// ```
/// use decimator::ExtensionFilter;
/// use std::path::Path;
///
/// let filter = ExtensionFilter::only(["PNG", ".txt", "png", " "]);
/// assert!(filter.matches(Path::new("photo.PNG")));
/// assert!(filter.matches(Path::new("notes.txt")));
/// assert!(!filter.matches(Path::new("archive.zip")));
/// assert!(!filter.matches(Path::new("no_extension")));
///
/// assert!(ExtensionFilter::All.matches(Path::new("anything.zip")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionFilter {
    /// No filtering; every regular file is a candidate
    All,

    /// Only files whose extension is in the (normalized) set
    Only(Vec<String>),
}

impl ExtensionFilter {
    /// Build a restricted filter from raw extension strings.
    ///
    /// Accepts entries with or without a leading dot, in any case; blank
    /// entries are discarded. The stored form is lowercase, dot-prefixed,
    /// sorted and free of duplicates.
    pub fn only<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = exts
            .into_iter()
            .filter_map(|e| {
                let e = e.as_ref().trim();
                if e.is_empty() {
                    return None;
                }
                let e = e.to_lowercase();
                Some(if e.starts_with('.') { e } else { format!(".{}", e) })
            })
            .collect();
        out.sort();
        out.dedup();
        ExtensionFilter::Only(out)
    }

    /// Whether `path`'s extension passes the filter (case-insensitive).
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            ExtensionFilter::All => true,
            ExtensionFilter::Only(exts) => match path.extension().and_then(|e| e.to_str()) {
                Some(ext) => {
                    let dotted = format!(".{}", ext.to_lowercase());
                    exts.iter().any(|e| e == &dotted)
                }
                None => false,
            },
        }
    }

    /// True for the unrestricted sentinel.
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, ExtensionFilter::All)
    }
}

/// Outcome tally of a folder execution.
///
/// `trashed + failed` always equals the `to_remove` count resolved for that
/// call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderStats {
    /// Files successfully moved to the recoverable trash
    pub trashed: usize,

    /// Files whose trash move failed (batch continued regardless)
    pub failed: usize,
}

/// Outcome tally of a content execution.
///
/// `removed + kept` always equals the unit count of the document at
/// execution time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStats {
    /// Units removed from the document
    pub removed: usize,

    /// Units kept, in their original order
    pub kept: usize,
}
