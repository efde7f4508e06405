//! Content decimation: irreversible in-place rewrite of a document.
//!
//! Operates on one document at a time, at line or character granularity.
//! Documents are decoded permissively — malformed byte sequences become
//! replacement characters instead of errors — and the reconstructed content
//! is written straight back over the original. The rewrite is not atomic;
//! a crash mid-write can leave a partial document.

use crate::error::DecimateError;
use crate::progress::ProgressReporter;
use crate::sample::{removal_count, sample_indices};
use crate::types::{ContentMode, ContentStats, Plan};
use rand::rngs::OsRng;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Maximum number of sampled lines shown in a lines-mode plan preview.
pub const LINE_PREVIEW_LIMIT: usize = 10;

/// Maximum characters of a sampled line shown in a preview entry.
pub const LINE_PREVIEW_WIDTH: usize = 80;

/// Reporter tick cadence for character-mode execution.
pub const CHAR_TICK_INTERVAL: usize = 2000;

/// Fixed preview entry for character mode. A character-level preview would
/// leak document spans without conveying anything useful, so none is built.
pub const CHAR_PREVIEW_PLACEHOLDER: &str = "(character-level removal preview omitted)";

fn read_lossy(path: &Path) -> Result<String, DecimateError> {
    if !path.exists() {
        return Err(DecimateError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Split into line units with their terminators attached, so concatenating
/// the units reproduces the input byte-for-byte.
fn split_lines(data: &str) -> Vec<&str> {
    data.split_inclusive('\n').collect()
}

/// Preview a content decimation without touching the document.
///
/// In [`ContentMode::Lines`] the preview lists up to [`LINE_PREVIEW_LIMIT`]
/// sampled lines — stripped, truncated to [`LINE_PREVIEW_WIDTH`] characters
/// — in ascending original order, so it reads top-to-bottom. In
/// [`ContentMode::Chars`] the preview is the fixed placeholder.
pub fn plan(path: &Path, strength: u8, mode: ContentMode) -> Result<Plan, DecimateError> {
    let data = read_lossy(path)?;

    match mode {
        ContentMode::Lines => {
            let lines = split_lines(&data);
            let total = lines.len();
            let to_remove = removal_count(total, strength);
            let mut chosen = sample_indices(&mut OsRng, total, to_remove);
            chosen.sort_unstable();

            let targets_preview = chosen
                .iter()
                .take(LINE_PREVIEW_LIMIT)
                .map(|&i| lines[i].trim().chars().take(LINE_PREVIEW_WIDTH).collect())
                .collect();

            Ok(Plan {
                total,
                to_remove,
                targets_preview,
            })
        }
        ContentMode::Chars => {
            let total = data.chars().count();
            let to_remove = removal_count(total, strength);
            Ok(Plan {
                total,
                to_remove,
                targets_preview: vec![CHAR_PREVIEW_PLACEHOLDER.to_string()],
            })
        }
    }
}

/// Permanently rewrite the document, keeping only the unselected units.
///
/// Re-reads the document and draws a fresh random index set on every call,
/// independent of any earlier [`plan`]. Units whose index was not drawn are
/// concatenated in their original order and the result overwrites the
/// document. When the document is empty or the resolved removal count is
/// zero, nothing is written and `(0, total)` is returned.
///
/// The reporter is ticked once per line examined in lines mode, and every
/// [`CHAR_TICK_INTERVAL`] characters in chars mode. Write errors propagate
/// unmodified.
pub fn execute(
    path: &Path,
    strength: u8,
    mode: ContentMode,
    reporter: &dyn ProgressReporter,
) -> Result<ContentStats, DecimateError> {
    let data = read_lossy(path)?;

    let stats = match mode {
        ContentMode::Lines => {
            let lines = split_lines(&data);
            let total = lines.len();
            let to_remove = removal_count(total, strength);
            if total == 0 || to_remove == 0 {
                return Ok(ContentStats {
                    removed: 0,
                    kept: total,
                });
            }

            let doomed: HashSet<usize> =
                sample_indices(&mut OsRng, total, to_remove).into_iter().collect();

            let mut kept = String::with_capacity(data.len());
            for (i, line) in lines.iter().enumerate() {
                if !doomed.contains(&i) {
                    kept.push_str(line);
                }
                reporter.tick(i + 1, total);
            }

            fs::write(path, kept)?;
            ContentStats {
                removed: to_remove,
                kept: total - to_remove,
            }
        }
        ContentMode::Chars => {
            let total = data.chars().count();
            let to_remove = removal_count(total, strength);
            if total == 0 || to_remove == 0 {
                return Ok(ContentStats {
                    removed: 0,
                    kept: total,
                });
            }

            let doomed: HashSet<usize> =
                sample_indices(&mut OsRng, total, to_remove).into_iter().collect();

            let mut kept = String::with_capacity(data.len());
            for (i, ch) in data.chars().enumerate() {
                if !doomed.contains(&i) {
                    kept.push(ch);
                }
                if i % CHAR_TICK_INTERVAL == 0 {
                    reporter.tick(i + 1, total);
                }
            }

            fs::write(path, kept)?;
            ContentStats {
                removed: to_remove,
                kept: total - to_remove,
            }
        }
    };

    info!(
        "Content decimation done: {} removed, {} kept ({})",
        stats.removed,
        stats.kept,
        path.display()
    );
    Ok(stats)
}
