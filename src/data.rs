//! Data structures for representing file system entries.
//!
//! A [`Record`] is the intermediate representation shared by the scanner and every
//! report writer. The scanner never formats anything and the writers never touch the
//! file system beyond their destination, so both sides only agree on this module.

use chrono::{DateTime, Local, SubsecRound};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Label reported in place of a byte size for directories and zip archives.
pub const FOLDER_LABEL: &str = "FOLDER";

/// Format used for every rendered modification time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Represents a single entry discovered during scanning.
///
/// # Fields
/// * `kind` - What the entry is (directory, zip archive or regular file)
/// * `path` - The full path to the entry, used only for identity
/// * `name` - Base name of `path`, never empty
/// * `size_or_label` - Byte count for regular files, [`FOLDER_LABEL`] otherwise
/// * `modified_at` - Local modification time truncated to whole seconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub kind: EntryKind,
    pub path: PathBuf,
    pub name: String,
    pub size_or_label: SizeOrLabel,
    pub modified_at: DateTime<Local>,
}

/// Represents the type of a reported entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    ZipArchive,
    RegularFile,
}

/// How a record is rendered. Directories and zip archives share the folder shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    FolderLike,
    FileLike,
}

/// Byte count of a regular file, or the label that replaces it for folder-like entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SizeOrLabel {
    Bytes(u64),
    Label(&'static str),
}

impl EntryKind {
    /// Returns how entries of this kind are rendered.
    ///
    /// # Returns
    /// [`Shape::FolderLike`] for directories and zip archives, [`Shape::FileLike`]
    /// for regular files.
    pub fn shape(self) -> Shape {
        match self {
            EntryKind::Directory | EntryKind::ZipArchive => Shape::FolderLike,
            EntryKind::RegularFile => Shape::FileLike,
        }
    }
}

impl fmt::Display for SizeOrLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeOrLabel::Bytes(size) => write!(f, "{}", size),
            SizeOrLabel::Label(label) => f.write_str(label),
        }
    }
}

impl Record {
    /// Creates a record for a directory.
    ///
    /// # Arguments
    /// * `path` - Full path of the directory
    /// * `name` - Base name shown in reports
    /// * `modified` - Local modification time, truncated to whole seconds here
    ///
    /// # Returns
    /// A folder-like record whose size is reported as [`FOLDER_LABEL`].
    pub fn directory(path: PathBuf, name: String, modified: DateTime<Local>) -> Self {
        Self::folder_like(EntryKind::Directory, path, name, modified)
    }

    /// Creates a record for a file whose name ends in `.zip`.
    ///
    /// Archives are never opened, so they carry [`FOLDER_LABEL`] instead of a size.
    /// Arguments are the same as for [`Record::directory`].
    pub fn zip_archive(path: PathBuf, name: String, modified: DateTime<Local>) -> Self {
        Self::folder_like(EntryKind::ZipArchive, path, name, modified)
    }

    /// Creates a record for a regular file.
    ///
    /// # Arguments
    /// * `path` - Full path of the file
    /// * `name` - Base name shown in reports
    /// * `size` - Size in bytes as reported by the file system
    /// * `modified` - Local modification time, truncated to whole seconds here
    pub fn regular_file(path: PathBuf, name: String, size: u64, modified: DateTime<Local>) -> Self {
        Record {
            kind: EntryKind::RegularFile,
            path,
            name,
            size_or_label: SizeOrLabel::Bytes(size),
            modified_at: modified.trunc_subsecs(0),
        }
    }

    fn folder_like(kind: EntryKind, path: PathBuf, name: String, modified: DateTime<Local>) -> Self {
        Record {
            kind,
            path,
            name,
            size_or_label: SizeOrLabel::Label(FOLDER_LABEL),
            modified_at: modified.trunc_subsecs(0),
        }
    }

    /// Shorthand for `self.kind.shape()`.
    pub fn shape(&self) -> Shape {
        self.kind.shape()
    }

    /// Modification time as `YYYY-MM-DD HH:MM:SS` in local time.
    pub fn modified_display(&self) -> String {
        self.modified_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Converts a file system timestamp to local time at whole-second precision.
///
/// Sub-second parts are dropped toward the past, also before the epoch.
///
/// # Returns
/// `None` when the time lies outside the range `chrono` can represent, which some
/// file systems allow (for example `touch -d @9000000000000` on tmpfs).
pub fn local_timestamp(time: SystemTime) -> Option<DateTime<Local>> {
    let secs = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).ok()?,
        Err(err) => {
            let before = err.duration();
            let whole = i64::try_from(before.as_secs()).ok()?;
            if before.subsec_nanos() > 0 {
                whole.checked_neg()?.checked_sub(1)?
            } else {
                whole.checked_neg()?
            }
        }
    };
    DateTime::from_timestamp(secs, 0).map(|utc| utc.with_timezone(&Local))
}

#[cfg(test)]
pub(crate) fn epoch() -> DateTime<Local> {
    DateTime::from_timestamp(0, 0)
        .expect("epoch is representable")
        .with_timezone(&Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_regular_file_carries_size() {
        let record = Record::regular_file(
            PathBuf::from("/test/file.txt"),
            "file.txt".to_string(),
            1024,
            epoch(),
        );

        assert_eq!(record.kind, EntryKind::RegularFile);
        assert_eq!(record.shape(), Shape::FileLike);
        assert_eq!(record.size_or_label, SizeOrLabel::Bytes(1024));
        assert_eq!(record.size_or_label.to_string(), "1024");
    }

    #[test]
    fn test_zip_archive_is_folder_like() {
        let record = Record::zip_archive(
            PathBuf::from("/test/a.zip"),
            "a.zip".to_string(),
            epoch(),
        );

        assert_eq!(record.shape(), Shape::FolderLike);
        assert_eq!(record.size_or_label, SizeOrLabel::Label(FOLDER_LABEL));
        assert_eq!(record.size_or_label.to_string(), "FOLDER");
    }

    #[test]
    fn test_modified_time_truncated_to_seconds() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_millis(1_700_000_000_999);
        let modified = local_timestamp(time).expect("time in range");
        let record = Record::directory(PathBuf::from("/d"), "d".to_string(), modified);

        assert_eq!(record.modified_at.timestamp_subsec_nanos(), 0);
        assert_eq!(record.modified_at.timestamp(), 1_700_000_000);

        let rendered = record.modified_display();
        assert_eq!(rendered.len(), "YYYY-MM-DD HH:MM:SS".len());
        assert_eq!(&rendered[4..5], "-");
        assert_eq!(&rendered[10..11], " ");
    }

    #[test]
    fn test_local_timestamp_rounds_pre_epoch_down() {
        let time = SystemTime::UNIX_EPOCH - Duration::from_millis(1_500);
        let converted = local_timestamp(time).expect("time in range");
        assert_eq!(converted.timestamp(), -2);
    }

    #[test]
    fn test_local_timestamp_out_of_range_is_none() {
        let far_future = SystemTime::UNIX_EPOCH + Duration::from_secs(9_000_000_000_000);
        assert!(local_timestamp(far_future).is_none());
    }

    #[test]
    fn test_size_or_label_serializes_untagged() {
        assert_eq!(serde_json::to_string(&SizeOrLabel::Bytes(5)).unwrap(), "5");
        assert_eq!(
            serde_json::to_string(&SizeOrLabel::Label(FOLDER_LABEL)).unwrap(),
            "\"FOLDER\""
        );
    }
}
