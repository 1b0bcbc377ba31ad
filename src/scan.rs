//! File system scanning module for `fsreport`.
//!
//! This module handles:
//! - Recursive directory traversal using `WalkDir`
//! - Classification of each entry into a [`Record`] (directory, zip archive, regular file)
//! - Skipping symbolic links to files, including broken links
//!
//! The main entry point is [`analyze`], which returns records in pre-order: every
//! directory comes before its contents, and within a directory its files come before
//! its subdirectories. Files keep the order the directory listing produced them in.
//!
//! Symlinked directories are followed. Walkdir tracks the ancestors of the current
//! entry, so a link that points back up the tree is reported as a loop and skipped.

use crate::data::{Record, local_timestamp};
use chrono::{DateTime, Local};
use crate::error::{ReportError, Result};
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Recursively scans `root` and returns one record per directory and non-symlink file.
///
/// The caller is expected to have checked that `root` exists. If it cannot be
/// stat'ed anyway, an empty list is returned.
///
/// # Errors
/// Returns [`ReportError::Io`] if an entry below the root cannot be read or stat'ed,
/// for example when it disappears between listing and stat.
pub fn analyze(root: &Path) -> Result<Vec<Record>> {
    log::debug!("Scanning {}", root.display());

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by(|a, b| files_first(a, b));

    let mut records = Vec::new();

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                if let Some(ancestor) = err.loop_ancestor() {
                    log::warn!(
                        "Skipping symlink loop at {} (points back to {})",
                        err.path().unwrap_or(root).display(),
                        ancestor.display()
                    );
                    continue;
                }
                if err.depth() == 0 {
                    log::debug!("Cannot stat scan root {}: {}", root.display(), err);
                    return Ok(Vec::new());
                }
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                if is_symlink(&path) {
                    log::debug!("Skipping broken symlink {}", path.display());
                    continue;
                }
                return Err(ReportError::io(path, io::Error::from(err)));
            }
        };

        if entry.file_type().is_dir() {
            let name = if entry.depth() == 0 {
                root_name(entry.path())
            } else {
                entry_name(&entry)
            };
            let modified = modified_time(&entry)?;
            records.push(Record::directory(entry.into_path(), name, modified));
        } else if entry.depth() == 0 {
            log::debug!("Scan root {} is not a directory", root.display());
            return Ok(Vec::new());
        } else if entry.path_is_symlink() {
            log::debug!("Skipping symlink {}", entry.path().display());
        } else {
            records.push(file_record(entry)?);
        }
    }

    log::debug!("Collected {} records", records.len());
    Ok(records)
}

/// Builds the record for a non-directory entry.
fn file_record(entry: DirEntry) -> Result<Record> {
    let name = entry_name(&entry);
    let metadata = entry
        .metadata()
        .map_err(|err| ReportError::io(entry.path(), io::Error::from(err)))?;
    let modified = local_modified(&entry, &metadata)?;

    if is_zip_name(&name) {
        Ok(Record::zip_archive(entry.into_path(), name, modified))
    } else {
        Ok(Record::regular_file(
            entry.into_path(),
            name,
            metadata.len(),
            modified,
        ))
    }
}

/// Returns `true` when `name` ends in `.zip`, ignoring case.
pub fn is_zip_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".zip")
}

fn modified_time(entry: &DirEntry) -> Result<DateTime<Local>> {
    let metadata = entry
        .metadata()
        .map_err(|err| ReportError::io(entry.path(), io::Error::from(err)))?;
    local_modified(entry, &metadata)
}

/// Modification time of `entry` in local time.
///
/// # Errors
/// Returns [`ReportError::Io`] with [`io::ErrorKind::InvalidData`] when the stored
/// time cannot be represented as a calendar date.
fn local_modified(entry: &DirEntry, metadata: &fs::Metadata) -> Result<DateTime<Local>> {
    let modified = metadata
        .modified()
        .map_err(|err| ReportError::io(entry.path(), err))?;
    local_timestamp(modified).ok_or_else(|| {
        ReportError::io(
            entry.path(),
            io::Error::new(io::ErrorKind::InvalidData, "modification time out of range"),
        )
    })
}

fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}

/// Base name of the scan root. Paths like `.` or `/` have no file name of their own,
/// so fall back to the canonical path and finally to the path as given.
fn root_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            fs::canonicalize(path)
                .ok()
                .as_deref()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| path.display().to_string())
}

/// Orders entries of one directory so files come before subdirectories. The sort is
/// stable, so listing order survives inside each group.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    is_dir_like(a).cmp(&is_dir_like(b))
}

fn is_dir_like(entry: &DirEntry) -> bool {
    // Links are not followed yet when walkdir sorts a directory's entries.
    entry.file_type().is_dir() || (entry.file_type().is_symlink() && entry.path().is_dir())
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}
