//! Word-processor (DOCX) output formatter.
//!
//! The document holds a `Title`-styled heading followed by one paragraph per record,
//! using the same line templates as the text report.

use super::ooxml::{Package, XML_DECLARATION, escape};
use super::text;
use crate::data::Record;
use crate::locale::Labels;
use std::fs::File;
use std::io::{self, BufWriter, Seek, Write};
use std::path::Path;

const CONTENT_TYPES: &str = r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES: &str = r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:rPr><w:sz w:val="22"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:spacing w:after="300"/></w:pPr><w:rPr><w:b/><w:sz w:val="52"/></w:rPr></w:style></w:styles>"#;

/// Writes the DOCX report to `destination`.
///
/// # Errors
/// Returns an error if the file cannot be created or the zip package cannot be written.
pub fn write(records: &[Record], destination: &Path, labels: &Labels) -> io::Result<()> {
    let file = BufWriter::new(File::create(destination)?);
    render(records, labels, file)?;
    Ok(())
}

/// Renders the DOCX package into any seekable writer and hands the writer back.
pub fn render<W: Write + Seek>(records: &[Record], labels: &Labels, out: W) -> io::Result<W> {
    let mut package = Package::new(out);
    package.add_part("[Content_Types].xml", &with_declaration(CONTENT_TYPES))?;
    package.add_part("_rels/.rels", &with_declaration(PACKAGE_RELS))?;
    package.add_part("word/_rels/document.xml.rels", &with_declaration(DOCUMENT_RELS))?;
    package.add_part("word/styles.xml", &with_declaration(STYLES))?;
    package.add_part("word/document.xml", &document_xml(records, labels))?;
    package.finish()
}

/// Builds `word/document.xml`.
pub fn document_xml(records: &[Record], labels: &Labels) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );

    push_paragraph(&mut xml, labels.heading, Some("Title"));
    for record in records {
        push_paragraph(&mut xml, &text::line(record, labels), None);
    }

    xml.push_str("<w:sectPr/></w:body></w:document>");
    xml
}

fn push_paragraph(xml: &mut String, content: &str, style: Option<&str>) {
    xml.push_str("<w:p>");
    if let Some(style) = style {
        xml.push_str(&format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, style));
    }
    xml.push_str(r#"<w:r><w:t xml:space="preserve">"#);
    xml.push_str(&escape(content));
    xml.push_str("</w:t></w:r></w:p>");
}

fn with_declaration(part: &str) -> String {
    format!("{}{}", XML_DECLARATION, part)
}
