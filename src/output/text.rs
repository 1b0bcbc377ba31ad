//! Plain-text output formatter, used for `.txt` and `.log` reports.

use crate::data::{Record, Shape};
use crate::locale::Labels;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Formats one record as a single human-readable line (without line terminator).
///
/// Shared with the DOCX writer, which emits one paragraph per line.
pub fn line(record: &Record, labels: &Labels) -> String {
    match record.shape() {
        Shape::FolderLike => format!(
            "{}: {} | {}: {} | {}: {}",
            labels.folder,
            record.name,
            labels.type_field,
            record.size_or_label,
            labels.modified_field,
            record.modified_display()
        ),
        Shape::FileLike => format!(
            "{}: {} | {}: {} {} | {}: {}",
            labels.file,
            record.name,
            labels.size_field,
            record.size_or_label,
            labels.bytes_unit,
            labels.modified_field,
            record.modified_display()
        ),
    }
}

/// Writes the text report to `destination`.
pub fn write(records: &[Record], destination: &Path, labels: &Labels) -> io::Result<()> {
    let file = BufWriter::new(File::create(destination)?);
    render(records, labels, file)
}

/// Renders the text report into any writer.
pub fn render<W: Write>(records: &[Record], labels: &Labels, mut out: W) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", line(record, labels))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;
    use std::path::PathBuf;
    use crate::data::epoch;

    #[test]
    fn test_line_templates() {
        let labels = Language::English.labels();
        let dir = Record::directory(PathBuf::from("/r"), "r".into(), epoch());
        let file = Record::regular_file(PathBuf::from("/r/a"), "a".into(), 5, epoch());
        let mtime = dir.modified_display();

        assert_eq!(
            line(&dir, labels),
            format!("Folder: r | Type: FOLDER | Modified: {}", mtime)
        );
        assert_eq!(
            line(&file, labels),
            format!("File: a | Size: 5 bytes | Modified: {}", mtime)
        );
    }

    #[test]
    fn test_russian_line() {
        let labels = Language::Russian.labels();
        let file = Record::regular_file(PathBuf::from("/r/a"), "a".into(), 5, epoch());
        assert!(line(&file, labels).starts_with("Файл: a | Размер: 5 байт | Дата изменения: "));
    }

    #[test]
    fn test_one_line_per_record() {
        let records = vec![
            Record::directory(PathBuf::from("/r"), "r".into(), epoch()),
            Record::regular_file(PathBuf::from("/r/a"), "a".into(), 5, epoch()),
        ];
        let mut buffer = Vec::new();
        render(&records, Language::English.labels(), &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output.lines().count(), 2);
        assert!(output.ends_with('\n'));
    }
}
