//! Folder decimation: candidate enumeration, planning and reversible removal.
//!
//! Selected files are moved to the platform recycle bin / trash, never
//! permanently deleted. Planning and execution each re-enumerate the folder
//! and draw an independent random sample; see [`execute`] for the
//! consequences.

use crate::error::DecimateError;
use crate::progress::ProgressReporter;
use crate::sample::{removal_count, sample_items};
use crate::types::{ExtensionFilter, FolderStats, Plan};
use rand::rngs::OsRng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Maximum number of file names listed in a folder plan preview.
pub const PREVIEW_LIMIT: usize = 30;

/// List the files eligible for decimation in `folder`.
///
/// Only direct children are considered. Anything that is not a regular file
/// is excluded, symbolic links included — even links that resolve to regular
/// files. A per-entry access error excludes just that entry and the scan
/// continues; a failure to read the directory itself propagates.
///
/// The result is sorted lexicographically so previews and tests are
/// deterministic for a given population snapshot.
pub fn list_candidates(
    folder: &Path,
    filter: &ExtensionFilter,
) -> Result<Vec<PathBuf>, DecimateError> {
    if !folder.exists() {
        return Err(DecimateError::NotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Err(DecimateError::NotADirectory(folder.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        // file_type() does not follow symlinks, so a link to a regular file
        // reports as a symlink and is excluded here.
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(_) => continue,
        };
        if !file_type.is_file() {
            continue;
        }
        let path = entry.path();
        if filter.matches(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Preview a folder decimation without touching anything.
///
/// Enumerates the candidates, resolves the removal count from `strength`
/// and draws a random sample of that size. The preview lists up to
/// [`PREVIEW_LIMIT`] file names from the drawn sample.
pub fn plan(
    folder: &Path,
    strength: u8,
    filter: &ExtensionFilter,
) -> Result<Plan, DecimateError> {
    let files = list_candidates(folder, filter)?;
    let total = files.len();
    let to_remove = removal_count(total, strength);
    let chosen = sample_items(&mut OsRng, &files, to_remove);

    let targets_preview = chosen
        .iter()
        .take(PREVIEW_LIMIT)
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();

    Ok(Plan {
        total,
        to_remove,
        targets_preview,
    })
}

/// Move a random subset of the folder's files to the recoverable trash.
///
/// The candidates are re-enumerated and a fresh sample is drawn on every
/// call, independent of any earlier [`plan`] — a previewed target set is not
/// guaranteed to be the set acted on here. Each per-file attempt is
/// isolated: a failed trash move is tallied and the batch continues. The
/// reporter is ticked after every attempt with the 1-based attempt index
/// and the selected count.
///
/// Returns the final tally; `trashed + failed` equals the resolved removal
/// count.
pub fn execute(
    folder: &Path,
    strength: u8,
    filter: &ExtensionFilter,
    reporter: &dyn ProgressReporter,
) -> Result<FolderStats, DecimateError> {
    let files = list_candidates(folder, filter)?;
    let to_remove = removal_count(files.len(), strength);
    let chosen = sample_items(&mut OsRng, &files, to_remove);

    let mut stats = FolderStats::default();
    let selected = chosen.len();
    for (idx, path) in chosen.iter().enumerate() {
        match trash::delete(path) {
            Ok(()) => {
                stats.trashed += 1;
                debug!("trashed: {}", path.display());
            }
            Err(err) => {
                warn!("Failed to trash '{}': {}", path.display(), err);
                stats.failed += 1;
            }
        }
        reporter.tick(idx + 1, selected);
    }

    info!(
        "Folder decimation done: {} trashed, {} failed ({} candidates)",
        stats.trashed,
        stats.failed,
        files.len()
    );
    Ok(stats)
}
