//! Spreadsheet (XLSX) output formatter.
//!
//! One worksheet, named after the localized report heading, with the CSV header row
//! and one row per record. Byte sizes are numeric cells, everything else inline strings.

use super::ooxml::{Package, XML_DECLARATION, escape};
use crate::data::{Record, Shape, SizeOrLabel};
use crate::locale::Labels;
use std::fs::File;
use std::io::{self, BufWriter, Seek, Write};
use std::path::Path;

const CONTENT_TYPES: &str = r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/><Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES: &str = r#"<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts><fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills><borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders><cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs><cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs></styleSheet>"#;

const COLUMNS: [char; 4] = ['A', 'B', 'C', 'D'];

/// One worksheet cell.
enum Cell<'a> {
    Text(&'a str),
    Number(u64),
}

/// Writes the XLSX report to `destination`.
///
/// # Errors
/// Returns an error if the file cannot be created or the zip package cannot be written.
pub fn write(records: &[Record], destination: &Path, labels: &Labels) -> io::Result<()> {
    let file = BufWriter::new(File::create(destination)?);
    render(records, labels, file)?;
    Ok(())
}

/// Renders the XLSX package into any seekable writer and hands the writer back.
pub fn render<W: Write + Seek>(records: &[Record], labels: &Labels, out: W) -> io::Result<W> {
    let mut package = Package::new(out);
    package.add_part("[Content_Types].xml", &with_declaration(CONTENT_TYPES))?;
    package.add_part("_rels/.rels", &with_declaration(PACKAGE_RELS))?;
    package.add_part("xl/workbook.xml", &workbook_xml(labels))?;
    package.add_part("xl/_rels/workbook.xml.rels", &with_declaration(WORKBOOK_RELS))?;
    package.add_part("xl/styles.xml", &with_declaration(STYLES))?;
    package.add_part("xl/worksheets/sheet1.xml", &sheet_xml(records, labels))?;
    package.finish()
}

fn workbook_xml(labels: &Labels) -> String {
    format!(
        r#"{}<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        XML_DECLARATION,
        escape(&labels.sheet_name())
    )
}

/// Builds `xl/worksheets/sheet1.xml`.
pub fn sheet_xml(records: &[Record], labels: &Labels) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );

    let header = labels.columns.map(Cell::Text);
    push_row(&mut xml, 1, &header);

    for (index, record) in records.iter().enumerate() {
        let row_type = match record.shape() {
            Shape::FolderLike => labels.folder,
            Shape::FileLike => labels.file,
        };
        let modified = record.modified_display();
        let size_cell = match record.size_or_label {
            SizeOrLabel::Bytes(size) => Cell::Number(size),
            SizeOrLabel::Label(label) => Cell::Text(label),
        };
        let cells = [
            Cell::Text(row_type),
            Cell::Text(&record.name),
            size_cell,
            Cell::Text(&modified),
        ];
        push_row(&mut xml, index + 2, &cells);
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

fn push_row(xml: &mut String, row: usize, cells: &[Cell<'_>]) {
    xml.push_str(&format!(r#"<row r="{}">"#, row));
    for (column, cell) in COLUMNS.iter().zip(cells) {
        match cell {
            Cell::Text(text) => xml.push_str(&format!(
                r#"<c r="{}{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                column,
                row,
                escape(text)
            )),
            Cell::Number(value) => {
                xml.push_str(&format!(r#"<c r="{}{}"><v>{}</v></c>"#, column, row, value))
            }
        }
    }
    xml.push_str("</row>");
}

fn with_declaration(part: &str) -> String {
    format!("{}{}", XML_DECLARATION, part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;
    use std::io::{Cursor, Read};
    use std::path::PathBuf;
    use crate::data::epoch;

    #[test]
    fn test_header_and_typed_cells() {
        let records = vec![
            Record::directory(PathBuf::from("/r"), "r".into(), epoch()),
            Record::regular_file(PathBuf::from("/r/a.txt"), "a.txt".into(), 5, epoch()),
        ];
        let xml = sheet_xml(&records, Language::English.labels());

        assert_eq!(xml.matches("<row ").count(), 3);
        assert!(xml.contains(r#"<c r="A1" t="inlineStr"><is><t xml:space="preserve">Type</t></is></c>"#));
        assert!(xml.contains(r#"<c r="C1" t="inlineStr"><is><t xml:space="preserve">Size/Type</t></is></c>"#));
        assert!(xml.contains(r#"<c r="A2" t="inlineStr"><is><t xml:space="preserve">Folder</t></is></c>"#));
        assert!(xml.contains(r#"<c r="C2" t="inlineStr"><is><t xml:space="preserve">FOLDER</t></is></c>"#));
        assert!(xml.contains(r#"<c r="A3" t="inlineStr"><is><t xml:space="preserve">File</t></is></c>"#));
        assert!(xml.contains(r#"<c r="C3"><v>5</v></c>"#));
    }

    #[test]
    fn test_workbook_uses_legal_sheet_name() {
        let cursor = render(&[], Language::English.labels(), Cursor::new(Vec::new())).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();

        let mut workbook = String::new();
        archive
            .by_name("xl/workbook.xml")
            .unwrap()
            .read_to_string(&mut workbook)
            .unwrap();
        assert!(workbook.contains(r#"name="File-Folder Structure Report""#));

        let mut sheet = String::new();
        archive
            .by_name("xl/worksheets/sheet1.xml")
            .unwrap()
            .read_to_string(&mut sheet)
            .unwrap();
        assert_eq!(sheet.matches("<row ").count(), 1);
    }
}
