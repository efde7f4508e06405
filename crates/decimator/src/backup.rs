//! Backup snapshots taken before a destructive action.
//!
//! The backup service knows nothing about planning or execution; running a
//! backup before a decimation is the orchestrator's responsibility.

use crate::error::DecimateError;
use chrono::Local;
use filetime::FileTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Marker token embedded in single-file backup names.
pub const FILE_BACKUP_MARKER: &str = "DECIMATE_BACKUP";

/// Prefix of the timestamped subdirectory created for folder backups.
pub const FOLDER_BACKUP_PREFIX: &str = "DECIMATE_FOLDER_BACKUP";

/// Second-resolution timestamp used in backup names.
fn stamp() -> String {
    Local::now().format("%Y%m%d-%H%M%S").to_string()
}

/// Copy contents and carry over the source's modification time.
fn copy_preserving_mtime(src: &Path, dst: &Path) -> io::Result<()> {
    fs::copy(src, dst)?;
    let metadata = fs::metadata(src)?;
    filetime::set_file_mtime(dst, FileTime::from_last_modification_time(&metadata))?;
    Ok(())
}

/// Snapshot a single file into `backup_dir`.
///
/// The directory is created (recursively) if absent. The destination name is
/// the original stem, the [`FILE_BACKUP_MARKER`], a second-resolution
/// timestamp and the original extension, e.g.
/// `notes.DECIMATE_BACKUP_20260807-141503.txt`. Returns the destination
/// path.
pub fn backup_file(src: &Path, backup_dir: &Path) -> Result<PathBuf, DecimateError> {
    if !src.exists() {
        return Err(DecimateError::NotFound(src.to_path_buf()));
    }
    fs::create_dir_all(backup_dir)?;

    let stem = src
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string());
    let suffix = src
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let dst = backup_dir.join(format!("{}.{}_{}{}", stem, FILE_BACKUP_MARKER, stamp(), suffix));
    copy_preserving_mtime(src, &dst)?;
    debug!("backed up {} -> {}", src.display(), dst.display());
    Ok(dst)
}

/// Snapshot the current versions of `files` into one timestamped
/// subdirectory of `backup_dir`.
///
/// Every file is copied in under its base name only. Distinct source paths
/// that share a base name silently overwrite one another inside the backup
/// subdirectory — a known limitation of the flat layout. A failed copy
/// propagates immediately. Returns the subdirectory path.
pub fn backup_files(files: &[PathBuf], backup_dir: &Path) -> Result<PathBuf, DecimateError> {
    let dest_dir = backup_dir.join(format!("{}_{}", FOLDER_BACKUP_PREFIX, stamp()));
    fs::create_dir_all(&dest_dir)?;

    for file in files {
        let name = match file.file_name() {
            Some(name) => name,
            None => continue,
        };
        copy_preserving_mtime(file, &dest_dir.join(name))?;
    }
    debug!("backed up {} files into {}", files.len(), dest_dir.display());
    Ok(dest_dir)
}
