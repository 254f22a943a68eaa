//! Single-page PDF of plain status lines.
//!
//! The object graph is fixed: catalog, page tree, one page, one content
//! stream and the built-in Helvetica font. Text is not wrapped.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const PDF_FILE: &str = "dokumentation.pdf";

const FONT_SIZE: u32 = 12;
const LEFT_MARGIN: u32 = 72;
const TOP_LINE: u32 = 760;
const LINE_ADVANCE: u32 = 18;
const BLOCK_ADVANCE: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
struct TextLine {
    /// Vertical distance from the previous line
    advance: u32,
    text: String,
}

#[derive(Debug, Clone, Default)]
pub struct PdfDocument {
    lines: Vec<TextLine>,
}

impl PdfDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line directly below the previous one
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(TextLine {
            advance: LINE_ADVANCE,
            text: text.into(),
        });
        self
    }

    /// Append a line that opens a new block, with extra space above it
    pub fn block(mut self, text: impl Into<String>) -> Self {
        self.lines.push(TextLine {
            advance: BLOCK_ADVANCE,
            text: text.into(),
        });
        self
    }

    fn content_stream(&self) -> String {
        let mut ops = vec![
            "BT".to_string(),
            format!("/F1 {} Tf", FONT_SIZE),
            format!("{} {} Td", LEFT_MARGIN, TOP_LINE),
        ];
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                ops.push(format!("0 -{} Td", line.advance));
            }
            ops.push(format!("({}) Tj", escape_text(&line.text)));
        }
        ops.push("ET".to_string());

        let mut stream = ops.join("\n");
        stream.push('\n');
        stream
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let stream = self.content_stream();

        let objects = [
            "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_string(),
            "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n".to_string(),
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>\nendobj\n".to_string(),
            format!(
                "4 0 obj\n<< /Length {} >>\nstream\n{}endstream\nendobj\n",
                stream.len(),
                stream
            ),
            "5 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n".to_string(),
        ];

        let mut out: Vec<u8> = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for object in &objects {
            offsets.push(out.len());
            out.extend_from_slice(object.as_bytes());
        }

        let xref_pos = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_pos
            )
            .as_bytes(),
        );

        out
    }

    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let filepath = dir.join(PDF_FILE);
        fs::write(&filepath, self.to_bytes())
            .with_context(|| format!("Failed to write PDF file: {}", filepath.display()))?;
        Ok(filepath)
    }
}

/// Reduce `text` to printable ASCII and escape it for a PDF string literal.
/// The standard Helvetica encoding has no reliable umlauts, so they are
/// spelled out the way German does without them.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'Ä' => out.push_str("Ae"),
            'Ö' => out.push_str("Oe"),
            'Ü' => out.push_str("Ue"),
            'ß' => out.push_str("ss"),
            '–' | '—' => out.push('-'),
            '„' | '“' | '”' => out.push('"'),
            '‚' | '‘' | '’' => out.push('\''),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}
