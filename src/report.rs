//! Report generation: validates inputs, scans the tree once and hands the records to
//! the writer selected by the report's file extension.

use crate::data::Record;
use crate::error::{ReportError, Result};
use crate::locale::Language;
use crate::output::{ReportFormat, extension_of};
use crate::scan::analyze;
use humansize::{DECIMAL, format_size};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings that shape the rendered report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub language: Language,
}

/// What a successful [`ReportGenerator::generate`] call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub destination: PathBuf,
    pub format: ReportFormat,
    pub records: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    options: ReportOptions,
}

impl ReportGenerator {
    /// Creates a generator with the given options.
    ///
    /// # Arguments
    /// * `options` - Settings shared by every report this generator writes
    ///
    /// # Returns
    /// A generator ready to [`generate`](Self::generate) any number of reports.
    pub fn new(options: ReportOptions) -> Self {
        ReportGenerator { options }
    }

    /// Picks the writer for `output` from its extension, ignoring case.
    ///
    /// # Errors
    /// [`ReportError::UnsupportedFormat`] listing every supported extension, sorted.
    pub fn resolve_format(output: &Path) -> Result<ReportFormat> {
        let extension = extension_of(output);
        ReportFormat::from_extension(&extension).ok_or_else(|| ReportError::UnsupportedFormat {
            extension,
            supported: ReportFormat::supported_extensions(),
        })
    }

    /// Scans `input` and writes the report to `output`.
    ///
    /// The input is checked before the extension, and both before any traversal.
    /// A writer failure can leave a partially written file behind.
    ///
    /// # Errors
    /// - [`ReportError::NotFound`] if `input` does not exist
    /// - [`ReportError::UnsupportedFormat`] if `output` has no known extension
    /// - [`ReportError::Io`] if traversal or writing fails
    pub fn generate(&self, input: &Path, output: &Path) -> Result<ReportSummary> {
        if !input.exists() {
            return Err(ReportError::NotFound {
                path: input.to_path_buf(),
            });
        }

        let format = Self::resolve_format(output)?;
        log::debug!("Writing {:?} report to {}", format, output.display());

        let records = analyze(input)?;
        self.write(format, &records, output)?;

        if let Ok(metadata) = fs::metadata(output) {
            log::info!(
                "Wrote {} records to {} ({})",
                records.len(),
                output.display(),
                format_size(metadata.len(), DECIMAL)
            );
        }

        Ok(ReportSummary {
            destination: output.to_path_buf(),
            format,
            records: records.len(),
        })
    }

    /// Renders already collected records with the given writer.
    ///
    /// # Errors
    /// [`ReportError::Io`] carrying `output` if the file cannot be created or written.
    pub fn write(&self, format: ReportFormat, records: &[Record], output: &Path) -> Result<()> {
        format
            .write(records, output, self.options.language.labels())
            .map_err(|err| ReportError::io(output, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unsupported_extension_lists_sorted_formats() {
        let err = ReportGenerator::resolve_format(Path::new("report.xyz")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported report extension '.xyz'. Supported: .csv, .docx, .json, .log, .pdf, .txt, .xlsx"
        );
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let err = ReportGenerator::resolve_format(Path::new("report")).unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedFormat { ref extension, .. } if extension.is_empty()));
    }

    #[test]
    fn test_missing_input_reported_before_format() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output = temp_dir.path().join("r.xyz");
        let err = ReportGenerator::default()
            .generate(Path::new("/does/not/exist"), &output)
            .unwrap_err();

        assert!(matches!(err, ReportError::NotFound { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_generate_reports_summary() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("tree");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("a.txt"), "hello").unwrap();
        let output = temp_dir.path().join("report.JSON");

        let summary = ReportGenerator::default().generate(&input, &output).unwrap();
        assert_eq!(summary.format, ReportFormat::Json);
        assert_eq!(summary.records, 2);
        assert!(output.exists());
    }
}
