//! # Decimator
//!
//! A destructive-sampling library: pick a random subset of a population —
//! files in a folder, or lines/characters of a document — sized by a
//! percentage strength, and remove it.
//!
//! Folder decimation is reversible: selected files are moved to the
//! platform recycle bin / trash. Content decimation is an irreversible
//! in-place rewrite. Both support a non-destructive [`Plan`] preview, and a
//! backup step can snapshot targets beforehand.
//!
//! Selection is drawn from the operating system's cryptographically strong
//! random source, uniformly and without replacement. Every plan or execute
//! call re-enumerates its population and draws a fresh sample; a preview's
//! listed targets are therefore not guaranteed to be the targets a later
//! execution acts on.
//!
//! ## Example
//!
//! ```rust,no_run
//! use decimator::{plan_folder, decimate_folder, ExtensionFilter, SilentReporter};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let folder = Path::new("downloads");
//! let filter = ExtensionFilter::only(["png", "jpg"]);
//!
//! // Preview: how many files would go, and a sample of names
//! let plan = plan_folder(folder, 50, &filter)?;
//! println!("{} of {} candidates selected", plan.to_remove, plan.total);
//!
//! // Execute: an independent draw, moved to the recoverable trash
//! let stats = decimate_folder(folder, 50, &filter, &SilentReporter)?;
//! println!("{} trashed, {} failed", stats.trashed, stats.failed);
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod content;
pub mod error;
pub mod folder;
pub mod progress;
pub mod sample;
pub mod types;

// Re-export main types
pub use backup::{backup_file, backup_files};
pub use error::DecimateError;
pub use progress::{ProgressReporter, SilentReporter};
pub use types::{ContentMode, ContentStats, ExtensionFilter, FolderStats, Plan};

use std::path::Path;

/// Phrase a caller must present, normalized, before execution is permitted.
pub const CONFIRMATION_PHRASE: &str = "i am inevitable";

/// Check a confirmation phrase: trimmed, case-folded equality against
/// [`CONFIRMATION_PHRASE`].
///
/// This is a pure predicate — the library never enforces the gate itself;
/// sequencing confirmation before execution is the orchestrator's job.
///
/// # Examples
///
/// ```
/// use decimator::confirmation_phrase_ok;
///
/// assert!(confirmation_phrase_ok("i am inevitable"));
/// assert!(confirmation_phrase_ok("  I AM INEVITABLE  "));
/// assert!(!confirmation_phrase_ok("i am inevitable!"));
/// assert!(!confirmation_phrase_ok(""));
/// ```
pub fn confirmation_phrase_ok(input: &str) -> bool {
    input.trim().to_lowercase() == CONFIRMATION_PHRASE
}

/// Preview a folder decimation. See [`folder::plan`].
pub fn plan_folder(
    folder: &Path,
    strength: u8,
    filter: &ExtensionFilter,
) -> Result<Plan, DecimateError> {
    folder::plan(folder, strength, filter)
}

/// Move a random subset of a folder's files to the trash. See
/// [`folder::execute`].
pub fn decimate_folder(
    folder: &Path,
    strength: u8,
    filter: &ExtensionFilter,
    reporter: &dyn ProgressReporter,
) -> Result<FolderStats, DecimateError> {
    folder::execute(folder, strength, filter, reporter)
}

/// Preview a content decimation. See [`content::plan`].
pub fn plan_content(path: &Path, strength: u8, mode: ContentMode) -> Result<Plan, DecimateError> {
    content::plan(path, strength, mode)
}

/// Permanently rewrite a document, dropping a random subset of its units.
/// See [`content::execute`].
pub fn decimate_content(
    path: &Path,
    strength: u8,
    mode: ContentMode,
    reporter: &dyn ProgressReporter,
) -> Result<ContentStats, DecimateError> {
    content::execute(path, strength, mode, reporter)
}
