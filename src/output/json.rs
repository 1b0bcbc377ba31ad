//! JSON output formatter.
//!
//! Produces a top-level array with two-space indentation. `serde_json` leaves
//! non-ASCII characters unescaped, so names stay readable.

use crate::data::{Record, Shape, SizeOrLabel};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A single object in the JSON report.
#[derive(Debug, Serialize)]
pub struct JsonEntry<'a> {
    #[serde(rename = "type")]
    pub entry_type: &'static str,
    pub name: &'a str,
    pub size_or_type: SizeOrLabel,
    pub modification_time: String,
}

impl<'a> From<&'a Record> for JsonEntry<'a> {
    fn from(record: &'a Record) -> Self {
        JsonEntry {
            entry_type: match record.shape() {
                Shape::FolderLike => "folder",
                Shape::FileLike => "file",
            },
            name: &record.name,
            size_or_type: record.size_or_label,
            modification_time: record.modified_display(),
        }
    }
}

/// Writes the JSON report to `destination`.
pub fn write(records: &[Record], destination: &Path) -> io::Result<()> {
    let file = BufWriter::new(File::create(destination)?);
    render(records, file)
}

/// Renders the JSON report into any writer.
pub fn render<W: Write>(records: &[Record], mut out: W) -> io::Result<()> {
    let entries: Vec<JsonEntry<'_>> = records.iter().map(JsonEntry::from).collect();
    serde_json::to_writer_pretty(&mut out, &entries)?;
    out.flush()
}
