//! Report writers for the `fsreport` application.
//!
//! Every writer consumes the same slice of [`Record`]s and overwrites its destination
//! in a single pass. The set of writers is closed: [`ReportFormat`] lists them and
//! [`FORMATS`] maps output file extensions onto them.
//!
//! # Available Formats
//!
//! - **CSV**: `Type,Name,Size/Type,Modified` rows
//! - **JSON**: pretty-printed array of objects, non-ASCII kept as-is
//! - **Text**: one human-readable line per record (`.txt` and `.log`)
//! - **DOCX**: heading plus one paragraph per record
//! - **XLSX**: single worksheet with the CSV columns
//! - **PDF**: centered title and wrapped ASCII-only lines
//!
//! All writers branch on [`Shape`](crate::data::Shape): directories and zip archives
//! are folder-like, regular files are file-like.

pub mod csv;
pub mod docx;
pub mod json;
mod ooxml;
pub mod pdf;
pub mod text;
pub mod xlsx;

use crate::data::Record;
use crate::locale::Labels;
use std::io;
use std::path::Path;

/// One of the supported report formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
    Text,
    Docx,
    Xlsx,
    Pdf,
}

/// Extension (lowercase, with leading dot) to format table.
pub const FORMATS: [(&str, ReportFormat); 7] = [
    (".csv", ReportFormat::Csv),
    (".json", ReportFormat::Json),
    (".txt", ReportFormat::Text),
    (".log", ReportFormat::Text),
    (".docx", ReportFormat::Docx),
    (".xlsx", ReportFormat::Xlsx),
    (".pdf", ReportFormat::Pdf),
];

impl ReportFormat {
    /// Looks up a format by extension, e.g. `".CSV"` or `".pdf"`. Case is ignored.
    ///
    /// # Returns
    /// `None` for an unknown extension, including the empty one.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_lowercase();
        FORMATS
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, format)| *format)
    }

    /// All supported extensions, sorted.
    pub fn supported_extensions() -> Vec<&'static str> {
        let mut extensions: Vec<&'static str> = FORMATS.iter().map(|(ext, _)| *ext).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Writes `records` to `destination`, creating or truncating it.
    ///
    /// # Arguments
    /// * `records` - Rows in the order they should appear
    /// * `destination` - Report file; its parent directory must exist
    /// * `labels` - Language of the text labels. JSON and PDF ignore it
    ///
    /// # Errors
    /// Any I/O error from creating or writing the file. Errors raised by the `csv`,
    /// `serde_json` and `zip` writers arrive converted to [`io::Error`].
    pub fn write(self, records: &[Record], destination: &Path, labels: &Labels) -> io::Result<()> {
        match self {
            ReportFormat::Csv => csv::write(records, destination, labels),
            ReportFormat::Json => json::write(records, destination),
            ReportFormat::Text => text::write(records, destination, labels),
            ReportFormat::Docx => docx::write(records, destination, labels),
            ReportFormat::Xlsx => xlsx::write(records, destination, labels),
            ReportFormat::Pdf => pdf::write(records, destination),
        }
    }
}

/// Extension of `path` with a leading dot, lowercased, or an empty string if it has none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lookup_ignores_case() {
        assert_eq!(ReportFormat::from_extension(".CSV"), Some(ReportFormat::Csv));
        assert_eq!(ReportFormat::from_extension(".Log"), Some(ReportFormat::Text));
        assert_eq!(ReportFormat::from_extension(".txt"), Some(ReportFormat::Text));
        assert_eq!(ReportFormat::from_extension(".xyz"), None);
        assert_eq!(ReportFormat::from_extension(""), None);
    }

    #[test]
    fn test_supported_extensions_sorted() {
        assert_eq!(
            ReportFormat::supported_extensions(),
            vec![".csv", ".docx", ".json", ".log", ".pdf", ".txt", ".xlsx"]
        );
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("out/report.PDF")), ".pdf");
        assert_eq!(extension_of(Path::new("report")), "");
        assert_eq!(extension_of(Path::new("archive.tar.json")), ".json");
    }
}
