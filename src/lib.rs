//! Library crate for fsreport
//!
//! Walks a directory tree once and writes an inventory report whose format is chosen
//! by the report file's extension.
//!
//! # Modules
//!
//! - [`data`]: The [`Record`] model shared by the scanner and all writers
//! - [`scan`]: File system traversal producing records in pre-order
//! - [`output`]: Report writers (CSV, JSON, text, DOCX, XLSX, PDF)
//! - [`report`]: [`ReportGenerator`], tying validation, scanning and writing together
//! - [`locale`]: Label sets for English and Russian reports
//! - [`error`]: The [`ReportError`] taxonomy
//! - [`cli`]: Command-line interface definitions

pub mod cli;
pub mod data;
pub mod error;
pub mod locale;
pub mod output;
pub mod report;
pub mod scan;

pub use cli::Args;
pub use data::{EntryKind, Record, SizeOrLabel};
pub use error::{ReportError, Result};
pub use locale::Language;
pub use output::ReportFormat;
pub use report::{ReportGenerator, ReportOptions, ReportSummary};
