//! Shared plumbing for the Office Open XML writers (DOCX and XLSX).
//!
//! Both formats are zip packages of XML parts. This module escapes text for XML and
//! wraps `zip::ZipWriter` so each writer only supplies part names and contents.

use std::borrow::Cow;
use std::io::{self, Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

pub(crate) const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Escapes markup characters and drops control characters XML 1.0 cannot carry.
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    if !text
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>' | '"' | '\'') || is_forbidden(c))
    {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c if is_forbidden(c) => {}
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn is_forbidden(c: char) -> bool {
    c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r')
}

/// A zip package being assembled part by part.
pub(crate) struct Package<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: FileOptions,
}

impl<W: Write + Seek> Package<W> {
    pub(crate) fn new(out: W) -> Self {
        Package {
            zip: ZipWriter::new(out),
            options: FileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    pub(crate) fn add_part(&mut self, name: &str, content: &str) -> io::Result<()> {
        self.zip.start_file(name, self.options)?;
        self.zip.write_all(content.as_bytes())
    }

    pub(crate) fn finish(mut self) -> io::Result<W> {
        let mut out = self.zip.finish()?;
        out.flush()?;
        Ok(out)
    }
}
