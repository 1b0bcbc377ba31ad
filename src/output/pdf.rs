//! PDF output formatter.
//!
//! Writes a PDF 1.4 file by hand: A4 pages, the built-in Helvetica fonts and
//! uncompressed content streams. Built-in fonts only cover Latin text, so every
//! name is reduced to [`sanitize_name`]'s character set before it is drawn.
//!
//! Layout (in millimetres): 10 margin left/top/right, 20 bottom margin for page
//! breaks, a 10 high centered bold title followed by a 6 gap, then 6 high body lines
//! in a 190 wide cell with 1 of inner padding and a 1 gap after each record.

use crate::data::{Record, Shape};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Title drawn at the top of the first page.
pub const TITLE: &str = "File Structure Report";

const MM: f32 = 72.0 / 25.4;
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN: f32 = 10.0 * MM;
const BOTTOM_MARGIN: f32 = 20.0 * MM;
const CELL_WIDTH: f32 = 190.0 * MM;
const CELL_PADDING: f32 = 1.0 * MM;
const TITLE_SIZE: f32 = 14.0;
const TITLE_HEIGHT: f32 = 10.0 * MM;
const TITLE_GAP: f32 = 6.0 * MM;
const BODY_SIZE: f32 = 9.0;
const LINE_HEIGHT: f32 = 6.0 * MM;
const RECORD_GAP: f32 = 1.0 * MM;

/// Helvetica advance widths for ASCII 32..=126, in 1/1000 em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Helvetica-Bold advance widths for ASCII 32..=126, in 1/1000 em.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

#[derive(Clone, Copy)]
enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    fn char_width(self, c: char, size: f32) -> f32 {
        let table = match self {
            Font::Helvetica => &HELVETICA_WIDTHS,
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        let units = match c {
            ' '..='~' => table[c as usize - 32],
            _ => 556,
        };
        f32::from(units) * size / 1000.0
    }

    fn text_width(self, text: &str, size: f32) -> f32 {
        text.chars().map(|c| self.char_width(c, size)).sum()
    }
}

/// Replaces every character outside `[A-Za-z0-9._- ()[]{}]` with `_`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' => c,
            '.' | '_' | '-' | ' ' | '(' | ')' | '[' | ']' | '{' | '}' => c,
            _ => '_',
        })
        .collect()
}

/// Formats the body line for one record.
pub fn line(record: &Record) -> String {
    let name = sanitize_name(&record.name);
    match record.shape() {
        Shape::FolderLike => format!("[DIR]  {} | Modified: {}", name, record.modified_display()),
        Shape::FileLike => format!(
            "[FILE] {} | Size: {} bytes | Modified: {}",
            name,
            record.size_or_label,
            record.modified_display()
        ),
    }
}

/// Splits `text` into lines no wider than `max_width`, preferring to break at spaces.
/// A run without spaces that does not fit is broken between characters.
fn wrap(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut width = 0.0;
    let mut last_space = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == ' ' {
            last_space = Some(i);
        }
        width += font.char_width(c, size);

        if width > max_width {
            match last_space {
                Some(space) if space > start => {
                    lines.push(chars[start..space].iter().collect());
                    start = space + 1;
                }
                _ => {
                    let end = if i == start { i + 1 } else { i };
                    lines.push(chars[start..end].iter().collect());
                    start = end;
                }
            }
            i = start;
            width = 0.0;
            last_space = None;
            continue;
        }
        i += 1;
    }

    if start < chars.len() || lines.is_empty() {
        lines.push(chars[start..].iter().collect());
    }
    lines
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '(' | ')' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Pages under construction. `y` is measured from the top of the current page.
struct Layout {
    finished: Vec<String>,
    current: String,
    y: f32,
}

impl Layout {
    fn new() -> Self {
        Layout {
            finished: Vec::new(),
            current: String::new(),
            y: MARGIN,
        }
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y + height > PAGE_HEIGHT - BOTTOM_MARGIN {
            self.finished.push(std::mem::take(&mut self.current));
            self.y = MARGIN;
        }
    }

    /// Draws `text` vertically centered in a cell of `height` starting at the current `y`.
    fn draw(&mut self, font: Font, size: f32, x: f32, height: f32, text: &str) {
        let baseline = self.y + height / 2.0 + 0.3 * size;
        self.current.push_str(&format!(
            "BT /{} {:.2} Tf {:.2} {:.2} Td ({}) Tj ET\n",
            font.resource(),
            size,
            x,
            PAGE_HEIGHT - baseline,
            escape_text(text)
        ));
    }

    fn title(&mut self, text: &str) {
        let width = Font::HelveticaBold.text_width(text, TITLE_SIZE);
        let x = MARGIN + (CELL_WIDTH - width) / 2.0;
        self.draw(Font::HelveticaBold, TITLE_SIZE, x, TITLE_HEIGHT, text);
        self.y += TITLE_HEIGHT + TITLE_GAP;
    }

    fn paragraph(&mut self, text: &str) {
        let max_width = CELL_WIDTH - 2.0 * CELL_PADDING;
        for line in wrap(text, Font::Helvetica, BODY_SIZE, max_width) {
            self.ensure_room(LINE_HEIGHT);
            self.draw(Font::Helvetica, BODY_SIZE, MARGIN + CELL_PADDING, LINE_HEIGHT, &line);
            self.y += LINE_HEIGHT;
        }
        self.y += RECORD_GAP;
    }

    fn into_pages(mut self) -> Vec<String> {
        self.finished.push(self.current);
        self.finished
    }
}

/// Serializes finished pages into a complete PDF file.
fn assemble(pages: &[String]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut offsets = Vec::new();

    out.extend_from_slice(b"%PDF-1.4\n");

    let page_ids: Vec<usize> = (0..pages.len()).map(|i| 5 + 2 * i).collect();
    let kids = page_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ");

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, pages.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];
    for (page_id, content) in page_ids.iter().zip(pages) {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
            PAGE_WIDTH,
            PAGE_HEIGHT,
            page_id + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }

    for (index, object) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, object).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
    for offset in &offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    out
}

/// Writes the PDF report to `destination`.
pub fn write(records: &[Record], destination: &Path) -> io::Result<()> {
    let file = BufWriter::new(File::create(destination)?);
    render(records, file)
}

/// Renders the PDF report into any writer.
pub fn render<W: Write>(records: &[Record], mut out: W) -> io::Result<()> {
    let mut layout = Layout::new();
    layout.title(TITLE);
    for record in records {
        layout.paragraph(&line(record));
    }

    out.write_all(&assemble(&layout.into_pages()))?;
    out.flush()
}
