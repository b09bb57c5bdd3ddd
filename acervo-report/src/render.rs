use acervo_catalog::Book;
use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

use crate::cover::{CoverCell, fit_within};
use crate::layout::*;
use crate::text::{encode_win_ansi, text_width, truncate_to_width, wrap_text};
use crate::{ReportError, ReportOptions};

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";
const FONT_ITALIC: &str = "F3";

type Rgb = [f32; 3];

const BLACK: Rgb = [0.0, 0.0, 0.0];
const GREY: Rgb = [0.5, 0.5, 0.5];
const DARK_GREEN: Rgb = [0.0, 0.392, 0.0];
const WHITE_SMOKE: Rgb = [0.96, 0.96, 0.96];

/// Render `books`, in order, as a PDF inventory table.
///
/// Missing or undecodable covers are drawn as placeholder text. Only
/// document serialization can fail.
pub fn render_catalog(books: &[Book], options: &ReportOptions) -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let fonts = font_resources(&mut doc);

    let administrator = options
        .administrator
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty());
    let plan = plan_pages(books.len(), administrator.is_some());

    let mut page_ids: Vec<Object> = Vec::with_capacity(plan.len());
    let mut remaining = books;
    for (index, &count) in plan.iter().enumerate() {
        let (page_books, rest) = remaining.split_at(count);
        remaining = rest;

        let mut canvas = Canvas::new();
        let mut top = PAGE_HEIGHT - MARGIN;
        if index == 0 {
            top = draw_heading(&mut canvas, &options.title, administrator, top);
        }
        top = draw_header_row(&mut canvas, top);
        for book in page_books {
            top = draw_book_row(&mut doc, &mut canvas, book, top);
        }

        let page_id = canvas.finish(&mut doc, pages_id, &fonts)?;
        page_ids.push(page_id.into());
    }

    let page_count = page_ids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids,
        "Count" => page_count,
        "MediaBox" => vec![0_i64.into(), 0_i64.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(&options.title), StringFormat::Literal),
        "Producer" => Object::string_literal("acervo"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    doc.compress();
    let mut out = Vec::new();
    doc.save_to(&mut out)?;

    log::debug!(
        "Rendered {} books across {} pages ({} bytes)",
        books.len(),
        page_count,
        out.len()
    );
    Ok(out)
}

fn font_resources(doc: &mut Document) -> Dictionary {
    let mut fonts = Dictionary::new();
    for (name, base_font) in [
        (FONT_REGULAR, "Helvetica"),
        (FONT_BOLD, "Helvetica-Bold"),
        (FONT_ITALIC, "Helvetica-Oblique"),
    ] {
        let id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font,
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(name, id);
    }
    fonts
}

fn add_image(doc: &mut Document, img: &RgbImage) -> ObjectId {
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => img.width() as i64,
        "Height" => img.height() as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8_i64,
    };
    doc.add_object(Stream::new(dict, img.as_raw().clone()))
}

// ── Drawing ─────────────────────────────────────────────────────────────────

/// Title and optional administrator line. Returns the new top edge.
fn draw_heading(canvas: &mut Canvas, title: &str, administrator: Option<&str>, top: f32) -> f32 {
    let title = truncate_to_width(title, PAGE_WIDTH - 2.0 * MARGIN, TITLE_SIZE, true);
    let x = (PAGE_WIDTH - text_width(&title, TITLE_SIZE, true)) / 2.0;
    canvas.text(FONT_BOLD, TITLE_SIZE, x, top - TITLE_SIZE, &title, BLACK);

    if let Some(admin) = administrator {
        let line = format!("Administradora: {admin}");
        canvas.text(
            FONT_REGULAR,
            SUBTITLE_SIZE,
            table_left(),
            top - TITLE_LINE - SUBTITLE_SIZE,
            &line,
            GREY,
        );
    }

    top - heading_height(administrator.is_some())
}

fn draw_header_row(canvas: &mut Canvas, top: f32) -> f32 {
    let table_width: f32 = COLUMN_WIDTHS.iter().sum();
    let bottom = top - HEADER_ROW_HEIGHT;
    canvas.fill_rect(table_left(), bottom, table_width, HEADER_ROW_HEIGHT, DARK_GREEN);

    let mut x = table_left();
    for (width, label) in COLUMN_WIDTHS.iter().zip(COLUMN_HEADERS) {
        canvas.stroke_rect(x, bottom, *width, HEADER_ROW_HEIGHT);
        let lines = [(FONT_BOLD, label.to_string())];
        canvas.text_block(&lines, x + CELL_PADDING, top, HEADER_ROW_HEIGHT, WHITE_SMOKE);
        x += width;
    }
    bottom
}

fn draw_book_row(doc: &mut Document, canvas: &mut Canvas, book: &Book, top: f32) -> f32 {
    let bottom = top - ROW_HEIGHT;
    let [cover_w, details_w, isbn_w] = COLUMN_WIDTHS;
    let cover_x = table_left();
    let details_x = cover_x + cover_w;
    let isbn_x = details_x + details_w;

    canvas.stroke_rect(cover_x, bottom, cover_w, ROW_HEIGHT);
    canvas.stroke_rect(details_x, bottom, details_w, ROW_HEIGHT);
    canvas.stroke_rect(isbn_x, bottom, isbn_w, ROW_HEIGHT);

    match CoverCell::from_bytes(book.cover_image.as_deref()) {
        CoverCell::Thumbnail(img) => {
            let (w, h) = fit_within(img.width(), img.height(), COVER_MAX_WIDTH, COVER_MAX_HEIGHT);
            let id = add_image(doc, &img);
            canvas.image(
                id,
                cover_x + (cover_w - w) / 2.0,
                bottom + (ROW_HEIGHT - h) / 2.0,
                w,
                h,
            );
        }
        CoverCell::Placeholder(text) => {
            let x = cover_x + (cover_w - text_width(text, BODY_SIZE, false)) / 2.0;
            canvas.text_block(&[(FONT_REGULAR, text.to_string())], x, top, ROW_HEIGHT, BLACK);
        }
    }

    let inner = details_w - 2.0 * CELL_PADDING;
    let mut details: Vec<(&str, String)> =
        wrap_text(&book.title, inner, BODY_SIZE, true, TITLE_MAX_LINES)
            .into_iter()
            .map(|line| (FONT_BOLD, line))
            .collect();
    details.push((FONT_REGULAR, truncate_to_width(&book.author, inner, BODY_SIZE, false)));
    details.push((FONT_ITALIC, book.category.label().to_string()));
    canvas.text_block(&details, details_x + CELL_PADDING, top, ROW_HEIGHT, BLACK);

    let inner = isbn_w - 2.0 * CELL_PADDING;
    let isbn = book.isbn.as_deref().filter(|i| !i.trim().is_empty()).unwrap_or("N/A");
    let stamp = [
        (FONT_REGULAR, truncate_to_width(isbn, inner, BODY_SIZE, false)),
        (FONT_REGULAR, truncate_to_width(&book.created_at, inner, BODY_SIZE, false)),
    ];
    canvas.text_block(&stamp, isbn_x + CELL_PADDING, top, ROW_HEIGHT, BLACK);

    bottom
}

// ── Canvas ──────────────────────────────────────────────────────────────────

/// Content operations and image resources for one page.
struct Canvas {
    ops: Vec<Operation>,
    xobjects: Dictionary,
    images: usize,
}

impl Canvas {
    fn new() -> Self {
        Self {
            ops: Vec::new(),
            xobjects: Dictionary::new(),
            images: 0,
        }
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.ops.push(Operation::new(operator, operands));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.op("q", vec![]);
        self.op("rg", color.iter().map(|&c| c.into()).collect());
        self.op("re", vec![x.into(), y.into(), w.into(), h.into()]);
        self.op("f", vec![]);
        self.op("Q", vec![]);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.op("q", vec![]);
        self.op("RG", GREY.iter().map(|&c| c.into()).collect());
        self.op("w", vec![0.5_f32.into()]);
        self.op("re", vec![x.into(), y.into(), w.into(), h.into()]);
        self.op("S", vec![]);
        self.op("Q", vec![]);
    }

    fn text(&mut self, font: &str, size: f32, x: f32, y: f32, s: &str, color: Rgb) {
        self.op("BT", vec![]);
        self.op("Tf", vec![Object::Name(font.as_bytes().to_vec()), size.into()]);
        self.op("rg", color.iter().map(|&c| c.into()).collect());
        self.op("Td", vec![x.into(), y.into()]);
        self.op(
            "Tj",
            vec![Object::String(encode_win_ansi(s), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }

    /// Body-size lines, vertically centered in a cell of `height` below `top`.
    fn text_block(&mut self, lines: &[(&str, String)], x: f32, top: f32, height: f32, color: Rgb) {
        let block = lines.len() as f32 * BODY_LINE;
        let block_top = top - (height - block) / 2.0;
        for (i, (font, line)) in lines.iter().enumerate() {
            let baseline = block_top - i as f32 * BODY_LINE - BODY_SIZE * 0.85;
            self.text(font, BODY_SIZE, x, baseline, line, color);
        }
    }

    fn image(&mut self, id: ObjectId, x: f32, y: f32, w: f32, h: f32) {
        self.images += 1;
        let name = format!("Im{}", self.images);
        self.xobjects.set(name.as_bytes().to_vec(), id);

        self.op("q", vec![]);
        self.op(
            "cm",
            vec![w.into(), 0_i64.into(), 0_i64.into(), h.into(), x.into(), y.into()],
        );
        self.op("Do", vec![Object::Name(name.into_bytes())]);
        self.op("Q", vec![]);
    }

    fn finish(
        self,
        doc: &mut Document,
        pages_id: ObjectId,
        fonts: &Dictionary,
    ) -> Result<ObjectId, ReportError> {
        let content = Content {
            operations: self.ops,
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let resources = dictionary! {
            "Font" => fonts.clone(),
            "XObject" => self.xobjects,
        };
        Ok(doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources,
        }))
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
