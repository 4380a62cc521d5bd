//! Printable report: a landscape A4 table with the category as title.
//!
//! The page is drawn by hand with the standard Helvetica fonts, so no font
//! files are embedded. Text is written in WinAnsi encoding; characters
//! outside Latin-1 print as `?`.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use super::{row, HEADERS};
use crate::domain::model::GlobalClassification;
use crate::utils::error::{Result, StripError};

const PAGE_WIDTH: f32 = 842.0;
const PAGE_HEIGHT: f32 = 595.0;
const MARGIN: f32 = 30.0;

const TITLE_SIZE: f32 = 14.0;
/// Title line plus the gap before the table.
const TITLE_BLOCK: f32 = 32.0;
const HEADER_SIZE: f32 = 7.0;
const HEADER_HEIGHT: f32 = 24.0;
const BODY_SIZE: f32 = 8.0;
const ROW_HEIGHT: f32 = 14.0;
const CELL_PADDING: f32 = 2.0;

const TEAM_COLUMN: usize = 1;
const GROUP_COLUMN: usize = 4;
const TEAM_WIDTH: f32 = 150.0;
const GROUP_WIDTH: f32 = 110.0;

const HEADER_FILL: [f32; 3] = [0.5, 0.5, 0.5];
const HEADER_TEXT: [f32; 3] = [0.96, 0.96, 0.96];
const BODY_FILL: [f32; 3] = [0.96, 0.96, 0.86];

const REGULAR: &[u8] = b"F1";
const BOLD: &[u8] = b"F2";

fn real(value: f32) -> Object {
    Object::Real(value.into())
}

fn name(value: &[u8]) -> Object {
    Object::Name(value.to_vec())
}

fn pdf_error(e: impl std::fmt::Display) -> StripError {
    StripError::Pdf {
        message: e.to_string(),
    }
}

/// Latin-1 bytes, which WinAnsi shares for every printable character.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ 0x20..=0x7E | code @ 0xA0..=0xFF => code as u8,
            _ => b'?',
        })
        .collect()
}

/// Rough Helvetica advance: half the font size per character.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

/// Cuts `text` so it fits in `width` at `size`.
fn fit(text: &str, width: f32, size: f32) -> String {
    let max_chars = ((width - 2.0 * CELL_PADDING) / (size * 0.5)).max(1.0) as usize;
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

fn column_widths() -> [f32; 16] {
    let others = (HEADERS.len() - 2) as f32;
    let shared = (PAGE_WIDTH - 2.0 * MARGIN - TEAM_WIDTH - GROUP_WIDTH) / others;
    let mut widths = [shared; 16];
    widths[TEAM_COLUMN] = TEAM_WIDTH;
    widths[GROUP_COLUMN] = GROUP_WIDTH;
    widths
}

/// Two-line header labels, split at the first space.
fn header_lines(title: &str) -> Vec<&str> {
    match title.split_once(' ') {
        Some((first, rest)) => vec![first, rest],
        None => vec![title],
    }
}

struct PageWriter {
    operations: Vec<Operation>,
    widths: [f32; 16],
}

impl PageWriter {
    fn new() -> Self {
        Self {
            operations: Vec::new(),
            widths: column_widths(),
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn fill_color(&mut self, [r, g, b]: [f32; 3]) {
        self.push("rg", vec![real(r), real(g), real(b)]);
    }

    fn text(&mut self, font: &[u8], size: f32, x: f32, y: f32, text: &str) {
        self.push("BT", vec![]);
        self.push("Tf", vec![name(font), real(size)]);
        self.push("Td", vec![real(x), real(y)]);
        self.push(
            "Tj",
            vec![Object::String(win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn centered(&mut self, font: &[u8], size: f32, left: f32, width: f32, y: f32, text: &str) {
        let text = fit(text, width, size);
        let x = left + (width - text_width(&text, size)) / 2.0;
        self.text(font, size, x, y, &text);
    }

    fn title(&mut self, title: &str, top: f32) {
        let width = PAGE_WIDTH - 2.0 * MARGIN;
        self.fill_color([0.0, 0.0, 0.0]);
        self.centered(BOLD, TITLE_SIZE, MARGIN, width, top - TITLE_SIZE, title);
    }

    fn band(&mut self, top: f32, height: f32, fill: [f32; 3]) {
        let width = PAGE_WIDTH - 2.0 * MARGIN;
        self.fill_color(fill);
        self.push(
            "re",
            vec![real(MARGIN), real(top - height), real(width), real(height)],
        );
        self.push("f", vec![]);
    }

    fn header(&mut self, top: f32) {
        self.band(top, HEADER_HEIGHT, HEADER_FILL);
        self.fill_color(HEADER_TEXT);

        let mut left = MARGIN;
        for (column, title) in HEADERS.iter().enumerate() {
            let width = self.widths[column];
            let lines = header_lines(title);
            let line_height = HEADER_SIZE + 1.0;
            let mut baseline = top - (HEADER_HEIGHT - lines.len() as f32 * line_height) / 2.0;
            for line in lines {
                baseline -= line_height;
                self.centered(BOLD, HEADER_SIZE, left, width, baseline + 1.0, line);
            }
            left += width;
        }
    }

    fn body_row(&mut self, top: f32, values: &[String; 16]) {
        self.band(top, ROW_HEIGHT, BODY_FILL);
        self.fill_color([0.0, 0.0, 0.0]);

        let baseline = top - ROW_HEIGHT + (ROW_HEIGHT - BODY_SIZE) / 2.0 + 1.0;
        let mut left = MARGIN;
        for (column, value) in values.iter().enumerate() {
            let width = self.widths[column];
            self.centered(REGULAR, BODY_SIZE, left, width, baseline, value);
            left += width;
        }
    }

    /// Black one-point grid over the table between `top` and `bottom`.
    fn grid(&mut self, top: f32, bottom: f32, rows: usize) {
        let right = PAGE_WIDTH - MARGIN;
        self.push("RG", vec![real(0.0), real(0.0), real(0.0)]);
        self.push("w", vec![real(1.0)]);

        let mut horizontal = vec![top, top - HEADER_HEIGHT];
        horizontal.extend((1..=rows).map(|i| top - HEADER_HEIGHT - i as f32 * ROW_HEIGHT));
        for y in horizontal {
            self.push("m", vec![real(MARGIN), real(y)]);
            self.push("l", vec![real(right), real(y)]);
        }

        let mut x = MARGIN;
        let mut vertical = vec![x];
        for width in self.widths {
            x += width;
            vertical.push(x);
        }
        for x in vertical {
            self.push("m", vec![real(x), real(top)]);
            self.push("l", vec![real(x), real(bottom)]);
        }
        self.push("S", vec![]);
    }

    fn finish(self) -> Result<Vec<u8>> {
        Content {
            operations: self.operations,
        }
        .encode()
        .map_err(pdf_error)
    }
}

/// Content streams, one per page. The header row repeats on every page.
fn page_contents(classification: &GlobalClassification) -> Result<Vec<Vec<u8>>> {
    let rows: Vec<[String; 16]> = classification
        .teams
        .iter()
        .enumerate()
        .map(|(index, team)| row(index + 1, team))
        .collect();

    let mut pages = Vec::new();
    let mut remaining = rows.as_slice();
    let mut first = true;

    loop {
        let mut writer = PageWriter::new();
        let mut top = PAGE_HEIGHT - MARGIN;
        if first {
            writer.title(&classification.category, top);
            top -= TITLE_BLOCK;
        }

        let capacity = ((top - HEADER_HEIGHT - MARGIN) / ROW_HEIGHT).floor().max(1.0) as usize;
        let (page_rows, rest) = remaining.split_at(capacity.min(remaining.len()));

        writer.header(top);
        for (index, values) in page_rows.iter().enumerate() {
            writer.body_row(top - HEADER_HEIGHT - index as f32 * ROW_HEIGHT, values);
        }
        let bottom = top - HEADER_HEIGHT - page_rows.len() as f32 * ROW_HEIGHT;
        writer.grid(top, bottom, page_rows.len());

        pages.push(writer.finish()?);
        remaining = rest;
        first = false;
        if remaining.is_empty() {
            break;
        }
    }

    Ok(pages)
}

fn type1_font(doc: &mut Document, base_font: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    })
}

pub fn render(classification: &GlobalClassification) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular = type1_font(&mut doc, "Helvetica");
    let bold = type1_font(&mut doc, "Helvetica-Bold");
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular,
            "F2" => bold,
        },
    });

    let mut kids = Vec::new();
    for content in page_contents(classification)? {
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_count),
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            real(PAGE_WIDTH),
            real(PAGE_HEIGHT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).map_err(pdf_error)?;
    tracing::debug!("Rendered {} PDF pages", page_count);
    Ok(buffer)
}
