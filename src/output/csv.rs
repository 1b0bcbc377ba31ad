//! CSV output formatter.
//!
//! Rows are `type,name,size_or_label,modified`. Fields are only quoted when they
//! contain a delimiter, quote or line break, so ordinary rows carry no quoting.

use crate::data::{Record, Shape};
use crate::locale::Labels;
use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the CSV report to `destination`.
pub fn write(records: &[Record], destination: &Path, labels: &Labels) -> io::Result<()> {
    let file = BufWriter::new(File::create(destination)?);
    render(records, labels, file)
}

/// Renders the CSV report into any writer.
///
/// The header row comes from `labels.columns`. Fields are quoted only when needed
/// and rows end in `\n`.
pub fn render<W: Write>(records: &[Record], labels: &Labels, out: W) -> io::Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    csv_writer.write_record(labels.columns)?;

    for record in records {
        let row_type = match record.shape() {
            Shape::FolderLike => labels.folder,
            Shape::FileLike => labels.file,
        };
        let size_or_label = record.size_or_label.to_string();
        let modified = record.modified_display();
        csv_writer.write_record([
            row_type,
            record.name.as_str(),
            size_or_label.as_str(),
            modified.as_str(),
        ])?;
    }

    csv_writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;
    use std::path::PathBuf;
    use crate::data::epoch;

    fn render_to_string(records: &[Record], language: Language) -> String {
        let mut buffer = Vec::new();
        render(records, language.labels(), &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let records = vec![
            Record::directory(PathBuf::from("/r"), "r".into(), epoch()),
            Record::regular_file(PathBuf::from("/r/a.txt"), "a.txt".into(), 5, epoch()),
            Record::zip_archive(PathBuf::from("/r/b.zip"), "b.zip".into(), epoch()),
        ];

        let output = render_to_string(&records, Language::English);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Type,Name,Size/Type,Modified");
        assert!(lines[1].starts_with("Folder,r,FOLDER,"));
        assert!(lines[2].starts_with("File,a.txt,5,"));
        assert!(lines[3].starts_with("Folder,b.zip,FOLDER,"));
        assert!(output.ends_with('\n'));
        assert!(!output.contains('"'));
    }

    #[test]
    fn test_russian_labels() {
        let records = vec![Record::regular_file(
            PathBuf::from("/r/данные.txt"),
            "данные.txt".into(),
            7,
            epoch(),
        )];

        let output = render_to_string(&records, Language::Russian);
        assert!(output.starts_with("Тип,Имя,Размер/Тип,Дата изменения\n"));
        assert!(output.contains("Файл,данные.txt,7,"));
    }

    #[test]
    fn test_name_with_comma_is_quoted() {
        let records = vec![Record::regular_file(
            PathBuf::from("/r/a,b.txt"),
            "a,b.txt".into(),
            1,
            epoch(),
        )];

        let output = render_to_string(&records, Language::English);
        assert!(output.contains("File,\"a,b.txt\",1,"));
    }
}
